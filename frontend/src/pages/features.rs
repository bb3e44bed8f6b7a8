use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::catalog::{filter, CategoryOption, FilterCriteria};
use crate::content::features::{FeatureSection, FEATURES};
use crate::view_state::ViewState;

#[function_component(Features)]
pub fn features() -> Html {
    let section = use_state(|| FeatureSection::General);
    let expanded = use_state(ViewState::<u32>::new);
    let hovered = use_state(ViewState::<u32>::new);

    let visible = filter(FEATURES, &FilterCriteria::category(*section));

    html! {
        <div class="page page-gradient features-page">
            <style>{r#"
                .features-page .tabs {
                    margin-bottom: 3rem;
                }
                .feature-card {
                    position: relative;
                    cursor: pointer;
                    overflow: hidden;
                }
                .feature-card.hovered {
                    transform: translateY(-8px);
                }
                .feature-card.expanded {
                    box-shadow: 0 0 0 2px #6366f1, 0 20px 35px -10px rgba(99, 102, 241, 0.35);
                }
                .feature-icon {
                    width: 56px;
                    height: 56px;
                    border-radius: 0.9rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.75rem;
                    margin-bottom: 1.25rem;
                    transition: transform 0.3s ease;
                }
                .feature-card.hovered .feature-icon {
                    transform: scale(1.1) rotate(-4deg);
                }
                .feature-card h3 {
                    margin: 0 0 0.75rem;
                }
                .feature-card p {
                    color: #4b5563;
                    margin: 0;
                }
                .feature-details {
                    margin: 1.25rem 0 0;
                    padding: 1rem 0 0 1.25rem;
                    border-top: 1px solid #e5e7eb;
                    color: #374151;
                }
                .feature-details li {
                    margin-bottom: 0.4rem;
                }
                .feature-toggle {
                    margin-top: 1rem;
                    font-size: 0.85rem;
                    color: #6366f1;
                    font-weight: 600;
                }
            "#}</style>
            <div class="container">
                <div class="page-header fade-in-up">
                    <span class="pill">{"Powerful Features"}</span>
                    <h1>{"Everything you need to run your finances"}</h1>
                    <p>{"From everyday bookkeeping to advanced reporting, every tool works together out of the box."}</p>
                </div>

                <div class="tabs">
                    {
                        FeatureSection::ALL.iter().map(|&option| {
                            let onclick = {
                                let section = section.clone();
                                let expanded = expanded.clone();
                                Callback::from(move |_: MouseEvent| {
                                    section.set(option);
                                    if expanded.active().is_some() {
                                        expanded.set(ViewState::new());
                                    }
                                })
                            };
                            html! {
                                <button
                                    class={classes!("tab", (*section == option).then(|| "active"))}
                                    {onclick}
                                >
                                    {option.label()}
                                </button>
                            }
                        }).collect::<Html>()
                    }
                </div>

                <div class="grid grid-3">
                    {
                        visible.into_iter().map(|feature| {
                            let id = feature.id;
                            let is_expanded = expanded.is_active(&id);
                            let onclick = {
                                let expanded = expanded.clone();
                                Callback::from(move |_: MouseEvent| {
                                    expanded.set((*expanded).clone().toggle(id));
                                })
                            };
                            let onmouseenter = {
                                let hovered = hovered.clone();
                                Callback::from(move |_: MouseEvent| {
                                    hovered.set((*hovered).clone().activate(id));
                                })
                            };
                            let onmouseleave = {
                                let hovered = hovered.clone();
                                Callback::from(move |_: MouseEvent| {
                                    hovered.set((*hovered).clone().clear());
                                })
                            };
                            let (from, to) = feature.gradient;

                            html! {
                                <div
                                    key={id}
                                    class={classes!(
                                        "card",
                                        "feature-card",
                                        "fade-in-up",
                                        hovered.is_active(&id).then(|| "hovered"),
                                        is_expanded.then(|| "expanded"),
                                    )}
                                    {onclick}
                                    {onmouseenter}
                                    {onmouseleave}
                                >
                                    <div
                                        class="feature-icon"
                                        style={format!("background: linear-gradient(135deg, {}, {});", from, to)}
                                    >
                                        {feature.icon}
                                    </div>
                                    <h3>{feature.title}</h3>
                                    <p>{feature.description}</p>
                                    if is_expanded {
                                        <ul class="feature-details">
                                            {
                                                feature.details.iter().map(|detail| html! {
                                                    <li>{*detail}</li>
                                                }).collect::<Html>()
                                            }
                                        </ul>
                                    }
                                    <div class="feature-toggle">
                                        { if is_expanded { "Show less ↑" } else { "Learn more ↓" } }
                                    </div>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>

                <div class="cta-banner">
                    <h2>{"See every feature in action"}</h2>
                    <p>{"Start your free trial today. No credit card required."}</p>
                    <Link<Route> to={Route::Pricing} classes="btn btn-light">
                        {"Choose a plan"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
