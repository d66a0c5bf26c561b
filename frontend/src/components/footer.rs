use chrono::{Datelike, Utc};
use yew::prelude::*;

use crate::content::{FOOTER_COLUMNS, PLATFORMS};

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="section-inner">
                <div class="footer-top">
                    <div class="nav-brand">
                        <div class="nav-logo">
                            <img src="/logo.png" alt="Salmoon Logo" />
                        </div>
                        <span class="brand-text gradient-text">{"SALMOON"}</span>
                    </div>
                    <div class="footer-socials">
                        { for PLATFORMS.iter().map(|platform| html! {
                            <a href={platform.url} class="social-bubble" aria-label={platform.name}>
                                <span>{platform.short}</span>
                            </a>
                        }) }
                    </div>
                </div>

                <div class="footer-bottom">
                    <div class="footer-columns">
                        { for FOOTER_COLUMNS.iter().map(|column| html! {
                            <div class="footer-column">
                                <h4>{column.heading}</h4>
                                <ul>
                                    { for column.links.iter().map(|(label, href)| html! {
                                        <li><a href={*href}>{*label}</a></li>
                                    }) }
                                </ul>
                            </div>
                        }) }
                    </div>
                    <div class="footer-legal">
                        <p>{format!("© {} Salmoon Token. All rights reserved.", year)}</p>
                        <p>{"The information provided on this website does not constitute investment advice, financial advice, trading advice, or any other sort of advice."}</p>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .site-footer {
                    padding: 3rem 1.5rem;
                    background: #f3f4f6;
                }
                .theme-dark .site-footer {
                    background: #111827;
                }
                .footer-top {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 2rem;
                }
                .footer-socials {
                    display: flex;
                    gap: 1rem;
                }
                .social-bubble {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #ffffff;
                    color: inherit;
                    text-decoration: none;
                    transition: background 0.2s ease;
                }
                .social-bubble:hover {
                    background: #e5e7eb;
                }
                .theme-dark .social-bubble {
                    background: #1f2937;
                }
                .theme-dark .social-bubble:hover {
                    background: #374151;
                }
                .footer-bottom {
                    border-top: 1px solid #e5e7eb;
                    padding-top: 2rem;
                }
                .theme-dark .footer-bottom {
                    border-top-color: #374151;
                }
                .footer-columns {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                    margin-bottom: 2rem;
                }
                .footer-column h4 {
                    font-weight: 500;
                    margin-bottom: 1rem;
                }
                .footer-column ul {
                    list-style: none;
                    padding: 0;
                    opacity: 0.8;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .footer-column a {
                    color: inherit;
                    text-decoration: none;
                }
                .footer-column a:hover {
                    color: #3b82f6;
                }
                .footer-legal {
                    text-align: center;
                    font-size: 0.875rem;
                    opacity: 0.7;
                }
                .footer-legal p + p {
                    margin-top: 0.5rem;
                }
                @media (max-width: 768px) {
                    .footer-top {
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .footer-columns {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
