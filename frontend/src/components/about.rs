use yew::prelude::*;

use crate::content::FEATURES;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="page-section">
            <div class="section-inner">
                <div class="section-header">
                    <h2>{"What is Salmoon?"}</h2>
                    <p>{"Swimming against the current in a sea of meme tokens, Salmoon combines the persistence of a salmon with the astronomical ambitions of crypto enthusiasts."}</p>
                </div>
                <div class="feature-grid">
                    { for FEATURES.iter().map(|feature| html! {
                        <div class="feature-card card">
                            <div class={classes!("feature-icon", format!("accent-{}", feature.accent))}>
                                <span>{feature.icon}</span>
                            </div>
                            <h3>{feature.title}</h3>
                            <p>{feature.body}</p>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .feature-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .feature-card {
                    transition: transform 0.2s ease;
                }
                .feature-card:hover {
                    transform: scale(1.05);
                }
                .feature-card h3 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin-bottom: 0.75rem;
                }
                .feature-card p {
                    opacity: 0.8;
                }
                .feature-icon {
                    width: 4rem;
                    height: 4rem;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 1rem;
                    font-size: 1.5rem;
                }
                .accent-blue { background: #dbeafe; }
                .accent-purple { background: #f3e8ff; }
                .accent-green { background: #dcfce7; }
                @media (max-width: 768px) {
                    .feature-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
