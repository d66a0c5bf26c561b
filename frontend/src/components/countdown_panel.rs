use yew::prelude::*;

use crate::countdown::Countdown;

#[derive(Properties, PartialEq)]
pub struct CountdownPanelProps {
    pub remaining: Countdown,
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[function_component(CountdownPanel)]
pub fn countdown_panel(props: &CountdownPanelProps) -> Html {
    let finished = props.remaining.is_finished();

    html! {
        <section class={classes!("countdown-section", finished.then(|| "finished"))}>
            <h2>{"Public Sale Starting In:"}</h2>
            <div class="countdown-units">
                { for props.remaining.units().into_iter().map(|(label, value)| html! {
                    <div class="countdown-unit">
                        <span class="countdown-value">{value.to_string()}</span>
                        <span class="countdown-label">{capitalize(label)}</span>
                    </div>
                }) }
            </div>
            <style>
                {r#"
                .countdown-section {
                    padding: 3rem 1.5rem;
                    background: #dbeafe;
                    text-align: center;
                }
                .theme-dark .countdown-section {
                    background: #1e3a8a;
                }
                .countdown-section h2 {
                    font-size: 1.875rem;
                    font-weight: 700;
                    margin-bottom: 2rem;
                }
                .countdown-units {
                    display: flex;
                    justify-content: center;
                    gap: 2rem;
                }
                .countdown-unit {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    min-width: 5rem;
                    padding: 1.5rem;
                    border-radius: 0.5rem;
                    background: var(--surface);
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }
                .countdown-value {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #3b82f6;
                    font-variant-numeric: tabular-nums;
                }
                .countdown-label {
                    opacity: 0.8;
                }
                @media (max-width: 768px) {
                    .countdown-units {
                        gap: 1rem;
                    }
                    .countdown-unit {
                        padding: 1rem;
                    }
                    .countdown-value {
                        font-size: 1.5rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
