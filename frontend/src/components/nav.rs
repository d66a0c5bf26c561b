use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::SECTIONS;
use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub theme: Theme,
    pub on_toggle_theme: Callback<MouseEvent>,
    pub buy_url: String,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { theme, on_toggle_theme, buy_url } = props;
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                let scroll_callback = Closure::<dyn Fn()>::new({
                    let window = window.clone();
                    move || {
                        if let Ok(scroll_y) = window.scroll_y() {
                            is_scrolled.set(scroll_y > 10.0);
                        }
                    }
                });
                let _ = window.add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                );
                Box::new(move || {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                })
            } else {
                Box::new(|| ())
            };
            move || destructor()
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Links stay as plain anchors so the browser still jumps to the section
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <>
            <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
                <div class="nav-content">
                    <a href="#" class="nav-brand">
                        <div class="nav-logo">
                            <img src="/salmoon.png" alt="Salmoon Logo" />
                        </div>
                        <span class="brand-text gradient-text">{"SALMOON"}</span>
                    </a>

                    <div class="nav-links">
                        { for SECTIONS.iter().map(|(label, href)| html! {
                            <a href={*href} class="nav-link">{*label}</a>
                        }) }
                    </div>

                    <div class="nav-actions">
                        <button
                            class="theme-toggle"
                            aria-label={if theme.is_dark() { "Switch to light mode" } else { "Switch to dark mode" }}
                            onclick={on_toggle_theme.clone()}
                        >
                            {theme.toggle_icon()}
                        </button>
                        <a href={buy_url.clone()} class="buy-button desktop-only">{"Buy Salmoon"}</a>
                        <button class="burger-menu" aria-label="Menu" onclick={toggle_menu}>
                            {if *menu_open { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
            </nav>
            <MobileMenu open={*menu_open} buy_url={buy_url.clone()} on_close={close_menu} />
            <style>
                {r#"
                .top-nav {
                    position: sticky;
                    top: 0;
                    z-index: 50;
                    padding: 1rem 1.5rem;
                    background: var(--surface);
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    transition: box-shadow 0.3s ease, background 0.3s ease;
                }
                .top-nav.scrolled {
                    box-shadow: 0 10px 20px rgba(0, 0, 0, 0.15);
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    text-decoration: none;
                }
                .nav-logo {
                    width: 40px;
                    height: 40px;
                    border-radius: 50%;
                    overflow: hidden;
                }
                .nav-logo img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .brand-text {
                    font-weight: 700;
                    font-size: 1.25rem;
                }
                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }
                .nav-link {
                    color: inherit;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }
                .nav-link:hover {
                    color: #3b82f6;
                }
                .nav-actions {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .theme-toggle {
                    width: 36px;
                    height: 36px;
                    border: none;
                    border-radius: 50%;
                    cursor: pointer;
                    font-size: 1.1rem;
                    background: #dbeafe;
                    color: #1e40af;
                }
                .theme-dark .theme-toggle {
                    background: #374151;
                    color: #fde047;
                }
                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    color: inherit;
                    font-size: 1.5rem;
                    cursor: pointer;
                }
                .mobile-menu {
                    display: none;
                    flex-direction: column;
                    gap: 1rem;
                    padding: 1rem 1.5rem;
                    background: var(--surface);
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                }
                @media (max-width: 768px) {
                    .nav-links, .desktop-only {
                        display: none;
                    }
                    .burger-menu {
                        display: block;
                    }
                    .mobile-menu {
                        display: flex;
                    }
                }
                "#}
            </style>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct MobileMenuProps {
    pub open: bool,
    pub buy_url: String,
    pub on_close: Callback<MouseEvent>,
}

#[function_component(MobileMenu)]
pub fn mobile_menu(props: &MobileMenuProps) -> Html {
    if !props.open {
        return html! {};
    }

    html! {
        <div class="mobile-menu">
            { for SECTIONS.iter().map(|(label, href)| html! {
                <a href={*href} class="nav-link" onclick={props.on_close.clone()}>{*label}</a>
            }) }
            <a href={props.buy_url.clone()} class="buy-button" onclick={props.on_close.clone()}>
                {"Buy Salmoon"}
            </a>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    async fn render_menu(open: bool) -> String {
        ServerRenderer::<MobileMenu>::with_props(move || MobileMenuProps {
            open,
            buy_url: "#tokenomics".to_string(),
            on_close: Callback::from(|_: MouseEvent| ()),
        })
        .hydratable(false)
        .render()
        .await
    }

    #[tokio::test]
    async fn closed_menu_renders_nothing() {
        let html = render_menu(false).await;
        assert!(!html.contains("Tokenomics"));
        assert!(!html.contains("Buy Salmoon"));
    }

    #[tokio::test]
    async fn open_menu_lists_every_section() {
        let html = render_menu(true).await;
        for (label, href) in SECTIONS {
            assert!(html.contains(label), "missing {}", label);
            assert!(html.contains(href), "missing {}", href);
        }
        assert!(html.contains("Buy Salmoon"));
    }
}
