use log::info;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Debug)]
enum Status {
    Idle,
    Invalid,
    Subscribed,
}

/// Loose sanity check, the mail provider does the real validation.
pub fn is_valid_email(input: &str) -> bool {
    let email = input.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}

#[function_component(NewsletterForm)]
pub fn newsletter_form() -> Html {
    let email = use_state(String::new);
    let status = use_state(|| Status::Idle);

    let on_input = {
        let email = email.clone();
        let status = status.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
            if *status == Status::Invalid {
                status.set(Status::Idle);
            }
        })
    };

    let on_submit = {
        let email = email.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if is_valid_email(&email) {
                info!("Newsletter signup for {}", email.trim());
                email.set(String::new());
                status.set(Status::Subscribed);
            } else {
                status.set(Status::Invalid);
            }
        })
    };

    html! {
        <div class="newsletter">
            <h3>{"Subscribe to Our Newsletter"}</h3>
            <form class="newsletter-form" onsubmit={on_submit}>
                <input
                    type="email"
                    placeholder="Enter your email"
                    value={(*email).clone()}
                    oninput={on_input}
                />
                <button type="submit">{"Subscribe"}</button>
            </form>
            {
                match *status {
                    Status::Invalid => html! {
                        <p class="newsletter-message error">{"Please enter a valid email address."}</p>
                    },
                    Status::Subscribed => html! {
                        <p class="newsletter-message success">{"Thanks! You're on the list."}</p>
                    },
                    Status::Idle => html! {},
                }
            }
            <style>
                {r#"
                .newsletter {
                    margin-top: 4rem;
                    text-align: center;
                }
                .newsletter h3 {
                    font-size: 1.5rem;
                    font-weight: 600;
                    margin-bottom: 1.5rem;
                }
                .newsletter-form {
                    max-width: 28rem;
                    margin: 0 auto;
                    display: flex;
                    gap: 0.5rem;
                }
                .newsletter-form input {
                    flex: 1;
                    padding: 0.75rem 1rem;
                    border-radius: 0.5rem 0 0 0.5rem;
                    border: 1px solid #d1d5db;
                    background: #ffffff;
                    color: inherit;
                    outline: none;
                }
                .theme-dark .newsletter-form input {
                    background: #374151;
                    border-color: #4b5563;
                }
                .newsletter-form button {
                    padding: 0.75rem 1.5rem;
                    border: none;
                    border-radius: 0 0.5rem 0.5rem 0;
                    background: linear-gradient(to right, #3b82f6, #9333ea);
                    color: #ffffff;
                    font-weight: 500;
                    cursor: pointer;
                }
                .newsletter-form button:hover {
                    opacity: 0.9;
                }
                .newsletter-message {
                    margin-top: 1rem;
                }
                .newsletter-message.error {
                    color: #ef4444;
                }
                .newsletter-message.success {
                    color: #22c55e;
                }
                "#}
            </style>
        </div>
    }
}
