use yew::prelude::*;

use crate::components::newsletter::NewsletterForm;
use crate::content::PLATFORMS;

#[function_component(Community)]
pub fn community() -> Html {
    html! {
        <section id="community" class="page-section alt">
            <div class="section-inner">
                <div class="section-header">
                    <h2>{"Join Our Community"}</h2>
                    <p>{"Become part of the Salmoon school and swim with us to new heights"}</p>
                </div>
                <div class="platform-grid">
                    { for PLATFORMS.iter().map(|platform| html! {
                        <a
                            href={platform.url}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="platform-card card"
                        >
                            <div class="platform-icon">{"↗"}</div>
                            <span>{format!("Join on {}", platform.name)}</span>
                        </a>
                    }) }
                </div>
                <NewsletterForm />
            </div>
            <style>
                {r#"
                .platform-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                }
                .platform-card {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    color: inherit;
                    text-decoration: none;
                    font-size: 1.125rem;
                    font-weight: 500;
                    transition: background 0.2s ease;
                }
                .platform-card:hover {
                    background: #dbeafe;
                }
                .theme-dark .platform-card:hover {
                    background: #374151;
                }
                .platform-icon {
                    width: 4rem;
                    height: 4rem;
                    border-radius: 50%;
                    background: #dbeafe;
                    color: #3b82f6;
                    font-size: 1.75rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    transition: transform 0.2s ease;
                }
                .platform-card:hover .platform-icon {
                    transform: scale(1.1);
                }
                @media (max-width: 768px) {
                    .platform-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
