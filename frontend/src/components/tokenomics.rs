use yew::prelude::*;

use crate::components::token_chart::TokenChart;
use crate::content::{group_thousands, ALLOCATIONS, TOKEN_NAME, TOKEN_SYMBOL, TOTAL_SUPPLY};

#[derive(Properties, PartialEq)]
pub struct TokenomicsProps {
    pub dark: bool,
}

#[function_component(Tokenomics)]
pub fn tokenomics(props: &TokenomicsProps) -> Html {
    let details = [
        ("Token Name", TOKEN_NAME.to_string()),
        ("Symbol", TOKEN_SYMBOL.to_string()),
        ("Total Supply", group_thousands(TOTAL_SUPPLY)),
    ];

    html! {
        <section id="tokenomics" class="page-section alt">
            <div class="section-inner">
                <div class="section-header">
                    <h2>{"Tokenomics"}</h2>
                    <p>{"Understanding the flow of Salmoon tokens in our ecosystem"}</p>
                </div>
                <div class="tokenomics-layout">
                    <div class="tokenomics-chart">
                        <TokenChart dark={props.dark} />
                    </div>
                    <div class="tokenomics-details card">
                        <h3>{"Token Details"}</h3>
                        <div class="detail-rows">
                            { for details.into_iter().map(|(label, value)| html! {
                                <div class="detail-row">
                                    <span>{label}</span>
                                    <span class="detail-value">{value}</span>
                                </div>
                            }) }
                            { for ALLOCATIONS.iter().map(|allocation| html! {
                                <div class="detail-row">
                                    <span>
                                        <i class="swatch" style={format!("background: {};", allocation.hex())}></i>
                                        {allocation.label}
                                    </span>
                                    <span class="detail-value">{format!("{}%", allocation.percent)}</span>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .tokenomics-layout {
                    display: flex;
                    align-items: center;
                    gap: 3rem;
                }
                .tokenomics-chart, .tokenomics-details {
                    flex: 1;
                }
                .token-chart {
                    max-width: 28rem;
                    margin: 0 auto;
                    border-radius: 50%;
                    padding: 4px;
                    background: linear-gradient(to bottom right, #60a5fa, #a855f7);
                }
                .token-chart canvas {
                    display: block;
                    width: 100%;
                    height: auto;
                    border-radius: 50%;
                }
                .tokenomics-details h3 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin-bottom: 1rem;
                }
                .detail-rows {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .detail-row {
                    display: flex;
                    justify-content: space-between;
                    padding-bottom: 0.5rem;
                    border-bottom: 1px solid #e5e7eb;
                }
                .theme-dark .detail-row {
                    border-bottom-color: #374151;
                }
                .detail-row:last-child {
                    border-bottom: none;
                    padding-bottom: 0;
                }
                .detail-value {
                    font-weight: 500;
                }
                .swatch {
                    display: inline-block;
                    width: 0.75rem;
                    height: 0.75rem;
                    border-radius: 50%;
                    margin-right: 0.5rem;
                }
                @media (max-width: 768px) {
                    .tokenomics-layout {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </section>
    }
}
