use yew::prelude::*;

use crate::components::{
    about::About,
    community::Community,
    countdown_panel::CountdownPanel,
    footer::Footer,
    hero::Hero,
    nav::Nav,
    roadmap::Roadmap,
    tokenomics::Tokenomics,
};
use crate::config;
use crate::theme::use_theme;
use crate::ticker::use_countdown;

#[function_component(Landing)]
pub fn landing() -> Html {
    let config = use_memo(|_| config::load(), ());
    let (theme, toggle_theme) = use_theme();
    // The ticker lives exactly as long as this page is mounted
    let remaining = use_countdown(config.countdown, config.tick_period_ms);

    html! {
        <div class={classes!("salmoon-page", theme.class())}>
            <Nav theme={theme} on_toggle_theme={toggle_theme} buy_url={config.buy_url.clone()} />
            <Hero buy_url={config.buy_url.clone()} />
            <CountdownPanel remaining={remaining} />
            <About />
            <Tokenomics dark={theme.is_dark()} />
            <Roadmap />
            <Community />
            <Footer />
            <style>
                {r#"
                * {
                    box-sizing: border-box;
                    margin: 0;
                }
                html {
                    scroll-behavior: smooth;
                }
                body {
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }
                .salmoon-page {
                    --surface: #ffffff;
                    min-height: 100vh;
                    background: #eff6ff;
                    color: #1f2937;
                    transition: background 0.3s ease, color 0.3s ease;
                }
                .salmoon-page.theme-dark {
                    --surface: #1f2937;
                    background: #111827;
                    color: #ffffff;
                }
                .gradient-text {
                    background: linear-gradient(to right, #3b82f6, #a855f7);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                .page-section {
                    padding: 6rem 1.5rem;
                }
                .page-section.alt {
                    background: #eff6ff;
                }
                .theme-dark .page-section.alt {
                    --surface: #111827;
                    background: #1f2937;
                }
                .section-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                }
                .section-header {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .section-header h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }
                .section-header p {
                    max-width: 48rem;
                    margin: 0 auto;
                    font-size: 1.125rem;
                    opacity: 0.8;
                }
                .card {
                    padding: 1.5rem;
                    border-radius: 0.75rem;
                    background: var(--surface);
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }
                .buy-button {
                    display: inline-block;
                    padding: 0.5rem 1.5rem;
                    border-radius: 9999px;
                    background: linear-gradient(to right, #3b82f6, #9333ea);
                    color: #ffffff;
                    font-weight: 500;
                    text-align: center;
                    text-decoration: none;
                    transition: opacity 0.2s ease;
                }
                .buy-button:hover {
                    opacity: 0.9;
                }
                @media (max-width: 768px) {
                    .page-section {
                        padding: 4rem 1.5rem;
                    }
                    .section-header h2 {
                        font-size: 1.875rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
