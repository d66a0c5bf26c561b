use yew::prelude::*;

use crate::content::{Phase, ROADMAP};

#[derive(Properties, PartialEq)]
struct PhaseCardProps {
    index: usize,
}

#[function_component(PhaseCard)]
fn phase_card(props: &PhaseCardProps) -> Html {
    let phase: &Phase = &ROADMAP[props.index];
    // Even phases sit left of the line, odd ones right
    let side = if props.index % 2 == 0 { "left" } else { "right" };

    html! {
        <div class={classes!("phase", side)}>
            <div class="phase-body">
                <div class="phase-card card">
                    <h3 class="gradient-text">{phase.title}</h3>
                    <p class="phase-quarter">{phase.quarter}</p>
                    <ul class="milestones">
                        { for phase.milestones.iter().map(|(label, status)| html! {
                            <li class={classes!("milestone", status.class())}>
                                <span class="milestone-glyph">{status.glyph()}</span>
                                <span>{*label}</span>
                            </li>
                        }) }
                    </ul>
                </div>
            </div>
            <div class="phase-marker">
                <div class="phase-number">{(props.index + 1).to_string()}</div>
            </div>
        </div>
    }
}

#[function_component(Roadmap)]
pub fn roadmap() -> Html {
    html! {
        <section id="roadmap" class="page-section">
            <div class="section-inner">
                <div class="section-header">
                    <h2>{"Roadmap"}</h2>
                    <p>{"Our journey from stream to ocean to moon"}</p>
                </div>
                <div class="timeline">
                    <div class="timeline-line"></div>
                    { for (0..ROADMAP.len()).map(|index| html! { <PhaseCard index={index} /> }) }
                </div>
            </div>
            <style>
                {r#"
                .timeline {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    gap: 3rem;
                }
                .timeline-line {
                    position: absolute;
                    left: 50%;
                    top: 0;
                    bottom: 0;
                    width: 1px;
                    background: #60a5fa;
                }
                .phase {
                    display: flex;
                    align-items: center;
                }
                .phase.right {
                    flex-direction: row-reverse;
                }
                .phase-body, .phase-marker {
                    width: 50%;
                }
                .phase.left .phase-body {
                    padding-right: 3rem;
                    text-align: right;
                }
                .phase.right .phase-body {
                    padding-left: 3rem;
                }
                .phase.left .phase-card {
                    margin-left: auto;
                }
                .phase-card {
                    max-width: 28rem;
                    transition: transform 0.2s ease;
                }
                .phase-card:hover {
                    transform: translateX(0.25rem);
                }
                .phase-card h3 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin-bottom: 0.5rem;
                }
                .phase-quarter {
                    opacity: 0.8;
                    margin-bottom: 1rem;
                }
                .milestones {
                    list-style: none;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .milestone {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .phase.left .milestone {
                    flex-direction: row-reverse;
                }
                .milestone-done .milestone-glyph { color: #22c55e; }
                .milestone-in-progress .milestone-glyph { color: #3b82f6; }
                .milestone-planned .milestone-glyph { color: #9ca3af; }
                .phase-marker {
                    display: flex;
                    justify-content: center;
                }
                .phase-number {
                    position: relative;
                    z-index: 10;
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    background: #3b82f6;
                    color: #ffffff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                @media (max-width: 768px) {
                    .timeline-line {
                        left: 1.25rem;
                    }
                    .phase, .phase.right {
                        flex-direction: column-reverse;
                        align-items: flex-start;
                    }
                    .phase-body, .phase-marker {
                        width: 100%;
                    }
                    .phase.left .phase-body, .phase.right .phase-body {
                        padding: 0 0 0 3rem;
                        text-align: left;
                    }
                    .phase.left .milestone {
                        flex-direction: row;
                    }
                    .phase-marker {
                        justify-content: flex-start;
                        margin-bottom: 1rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
