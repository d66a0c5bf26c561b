use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub buy_url: String,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    html! {
        <section class="hero">
            <div class="hero-content">
                <div class="hero-text">
                    <h1>
                        <span class="gradient-text">{"SALMOON:"}</span>
                        {" The Crypto Ocean's Rising Star"}
                    </h1>
                    <p class="hero-subtitle">
                        {"Swimming upstream in the crypto current, ready to leap to the moon. Join the school of HODLers today!"}
                    </p>
                    <div class="hero-cta-group">
                        <a href={props.buy_url.clone()} class="hero-cta">
                            {"Get Started"}<i class="arrow">{"→"}</i>
                        </a>
                        <a href="#about" class="hero-secondary">
                            {"Learn More"}<i class="arrow">{"⌄"}</i>
                        </a>
                    </div>
                </div>
                <div class="hero-visual">
                    <div class="hero-orb">
                        <div class="orb-pulse"></div>
                        <div class="orb-inner"></div>
                        <img src="/salmoon.jpg" alt="Salmoon" />
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .hero {
                    padding: 6rem 1.5rem;
                }
                .hero-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    gap: 3rem;
                }
                .hero-text, .hero-visual {
                    flex: 1;
                }
                .hero h1 {
                    font-size: 3.75rem;
                    font-weight: 700;
                    line-height: 1.2;
                    margin-bottom: 1.5rem;
                }
                .hero-subtitle {
                    font-size: 1.25rem;
                    opacity: 0.8;
                    margin-bottom: 2rem;
                }
                .hero-cta-group {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                }
                .hero-cta, .hero-secondary {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.75rem 2rem;
                    border-radius: 9999px;
                    font-weight: 500;
                    text-decoration: none;
                }
                .hero-cta {
                    background: linear-gradient(to right, #3b82f6, #9333ea);
                    color: #ffffff;
                    transition: opacity 0.2s ease;
                }
                .hero-cta:hover {
                    opacity: 0.9;
                }
                .hero-secondary {
                    background: var(--surface);
                    color: inherit;
                    border: 2px solid #3b82f6;
                    transition: border-color 0.2s ease;
                }
                .hero-secondary:hover {
                    border-color: #a855f7;
                }
                .arrow {
                    font-style: normal;
                }
                .hero-visual {
                    display: flex;
                    justify-content: center;
                }
                .hero-orb {
                    position: relative;
                    width: 24rem;
                    height: 24rem;
                }
                .orb-pulse, .orb-inner {
                    position: absolute;
                    border-radius: 50%;
                }
                .orb-pulse {
                    inset: 0;
                    background: linear-gradient(to right, #60a5fa, #a855f7);
                    opacity: 0.2;
                    animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
                }
                .orb-inner {
                    inset: 0.5rem;
                    background: linear-gradient(to bottom right, #93c5fd, #c084fc);
                    opacity: 0.3;
                }
                .hero-orb img {
                    position: absolute;
                    top: 12.5%;
                    left: 12.5%;
                    width: 75%;
                    height: 75%;
                    object-fit: contain;
                    transition: transform 0.3s ease;
                }
                .hero-orb img:hover {
                    transform: rotate(12deg);
                }
                @keyframes pulse {
                    50% { opacity: 0.1; }
                }
                @media (max-width: 768px) {
                    .hero {
                        padding: 4rem 1.5rem;
                    }
                    .hero-content {
                        flex-direction: column;
                    }
                    .hero h1 {
                        font-size: 2.25rem;
                    }
                    .hero-orb {
                        width: 18rem;
                        height: 18rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
