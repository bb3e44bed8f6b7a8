use yew::prelude::*;
use yew_router::prelude::*;
use gloo_timers::callback::Timeout;
use log::{error, info};
use serde::Serialize;

use crate::Route;
use crate::content::pricing::{
    featured_tier, max_annual_savings_percent, BillingPeriod, PricingTier, PRICING_TIERS, TRUST_BADGES,
};
use crate::view_state::ViewState;

/// Query string handed to the sign-up page.
#[derive(Serialize, Clone, PartialEq, Debug)]
pub struct PlanQuery {
    pub plan: String,
    pub billing: BillingPeriod,
}

const PLAN_REDIRECT_DELAY_MS: u32 = 500;

#[derive(Properties, PartialEq)]
struct TierCardProps {
    tier: &'static PricingTier,
    billing: BillingPeriod,
    tooltip: ViewState<(&'static str, usize)>,
    on_hover: Callback<Option<usize>>,
    selected: bool,
    on_select: Callback<&'static PricingTier>,
}

#[function_component(TierCard)]
fn tier_card(props: &TierCardProps) -> Html {
    let tier = props.tier;
    let (from, to) = tier.gradient;
    let price = tier.price(props.billing);

    let onclick = {
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(tier))
    };

    html! {
        <div
            class={classes!("card", "tier-card", tier.popular.then(|| "popular"))}
            style={format!("--tier-glow: rgba({}, 0.35);", tier.shadow_rgb)}
        >
            if tier.popular {
                <div class="popular-badge">{"Most Popular"}</div>
            }
            <h3 class="tier-name">{tier.name}</h3>
            <div class="tier-price">
                <span
                    class="tier-amount"
                    style={format!("background: linear-gradient(90deg, {}, {}); -webkit-background-clip: text; -webkit-text-fill-color: transparent;", from, to)}
                >
                    {format!("${}", price)}
                </span>
                <span class="tier-period">{"/month"}</span>
            </div>
            <p class="tier-billing-note">
                {
                    match props.billing {
                        BillingPeriod::Annual => format!("billed annually (${} / year)", price * 12),
                        BillingPeriod::Monthly => "billed monthly".to_string(),
                    }
                }
            </p>
            <ul class="tier-features">
                {
                    tier.features.iter().enumerate().map(|(index, feature)| {
                        let onmouseenter = {
                            let on_hover = props.on_hover.clone();
                            Callback::from(move |_: MouseEvent| on_hover.emit(Some(index)))
                        };
                        let onmouseleave = {
                            let on_hover = props.on_hover.clone();
                            Callback::from(move |_: MouseEvent| on_hover.emit(None))
                        };
                        html! {
                            <li {onmouseenter} {onmouseleave}>
                                <span class="check">{"✓"}</span>
                                {feature.name}
                                if props.tooltip.is_active(&(tier.name, index)) {
                                    <div class="feature-tooltip">{feature.description}</div>
                                }
                            </li>
                        }
                    }).collect::<Html>()
                }
            </ul>
            <button
                class={classes!("btn", "btn-block", if tier.popular { "btn-gradient" } else { "btn-primary" })}
                disabled={props.selected}
                {onclick}
            >
                if props.selected {
                    <>
                        <span class="spinner"></span>
                        {"Redirecting..."}
                    </>
                } else {
                    {"Get Started"}
                }
            </button>
        </div>
    }
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    let billing = use_state(BillingPeriod::default);
    let tooltip = use_state(ViewState::<(&'static str, usize)>::new);
    let selected_plan = use_state(|| None::<&'static str>);
    let navigator = use_navigator();

    let toggle_billing = {
        let billing = billing.clone();
        Callback::from(move |_: MouseEvent| billing.set(billing.flipped()))
    };

    let on_select = {
        let billing = billing.clone();
        let selected_plan = selected_plan.clone();
        Callback::from(move |tier: &'static PricingTier| {
            if selected_plan.is_some() {
                return;
            }
            info!("Selected plan {} ({:?})", tier.name, *billing);
            selected_plan.set(Some(tier.name));
            let query = PlanQuery {
                plan: tier.name.to_string(),
                billing: *billing,
            };
            let navigator = navigator.clone();
            let selected_plan = selected_plan.clone();
            Timeout::new(PLAN_REDIRECT_DELAY_MS, move || {
                match navigator {
                    Some(navigator) => {
                        if let Err(e) = navigator.push_with_query(&Route::SignUp, &query) {
                            error!("Failed to navigate to sign-up: {:?}", e);
                            selected_plan.set(None);
                        }
                    }
                    None => {
                        error!("No navigator available");
                        selected_plan.set(None);
                    }
                }
            })
            .forget();
        })
    };

    let cta_onclick = {
        let on_select = on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(featured_tier()))
    };

    html! {
        <div class="page page-gradient pricing-page">
            <style>{r#"
                .billing-toggle {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    margin-bottom: 1rem;
                    font-weight: 500;
                }
                .billing-toggle .muted {
                    color: #9ca3af;
                }
                .switch {
                    width: 56px;
                    height: 30px;
                    border-radius: 9999px;
                    border: none;
                    padding: 3px;
                    background: #6366f1;
                    cursor: pointer;
                    display: flex;
                }
                .switch span {
                    width: 24px;
                    height: 24px;
                    border-radius: 50%;
                    background: #ffffff;
                    transition: transform 0.3s ease;
                }
                .switch.monthly span {
                    transform: translateX(26px);
                }
                .savings-badge {
                    display: block;
                    width: fit-content;
                    margin: 0 auto 3rem;
                    padding: 0.35rem 1rem;
                    border-radius: 9999px;
                    background: #dcfce7;
                    color: #15803d;
                    font-size: 0.9rem;
                    font-weight: 600;
                }
                .tier-card {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                }
                .tier-card:hover {
                    transform: translateY(-8px);
                    box-shadow: 0 25px 40px -12px var(--tier-glow);
                }
                .tier-card.popular {
                    border: 2px solid #6366f1;
                    transform: scale(1.03);
                }
                .popular-badge {
                    position: absolute;
                    top: -14px;
                    left: 50%;
                    transform: translateX(-50%);
                    padding: 0.3rem 1rem;
                    border-radius: 9999px;
                    background: linear-gradient(90deg, #6366f1, #2563eb);
                    color: #ffffff;
                    font-size: 0.8rem;
                    font-weight: 600;
                }
                .tier-name {
                    margin: 0 0 1rem;
                    font-size: 1.5rem;
                }
                .tier-amount {
                    font-size: 3rem;
                    font-weight: 800;
                }
                .tier-period {
                    color: #6b7280;
                }
                .tier-billing-note {
                    color: #6b7280;
                    font-size: 0.9rem;
                    margin: 0.25rem 0 1.5rem;
                }
                .tier-features {
                    list-style: none;
                    padding: 0;
                    margin: 0 0 2rem;
                    flex-grow: 1;
                }
                .tier-features li {
                    position: relative;
                    padding: 0.5rem 0;
                    cursor: default;
                }
                .tier-features .check {
                    color: #22c55e;
                    margin-right: 0.6rem;
                    font-weight: 700;
                }
                .feature-tooltip {
                    position: absolute;
                    left: 1.5rem;
                    bottom: 100%;
                    z-index: 10;
                    padding: 0.5rem 0.75rem;
                    border-radius: 0.5rem;
                    background: #1f2937;
                    color: #ffffff;
                    font-size: 0.8rem;
                    white-space: nowrap;
                }
                .compare {
                    margin-top: 6rem;
                    text-align: center;
                }
                .compare p {
                    color: #4b5563;
                }
                .trust-badges {
                    display: flex;
                    justify-content: center;
                    flex-wrap: wrap;
                    gap: 2rem;
                    margin-top: 3rem;
                    color: #4b5563;
                    font-weight: 500;
                }
                .trust-badges span::before {
                    content: "🛡️ ";
                }
            "#}</style>
            <div class="container">
                <div class="page-header fade-in-up">
                    <span class="pill">{"Simple, transparent pricing"}</span>
                    <h1>{"Choose the plan that fits your business"}</h1>
                    <p>{"Every plan includes a 14-day free trial. Upgrade, downgrade or cancel at any time."}</p>
                </div>

                <div class="billing-toggle">
                    <span class={classes!((*billing != BillingPeriod::Annual).then(|| "muted"))}>{"Annual"}</span>
                    <button
                        class={classes!("switch", (*billing == BillingPeriod::Monthly).then(|| "monthly"))}
                        onclick={toggle_billing}
                        aria-label="Toggle billing period"
                    >
                        <span></span>
                    </button>
                    <span class={classes!((*billing != BillingPeriod::Monthly).then(|| "muted"))}>{"Monthly"}</span>
                </div>
                <span class="savings-badge">
                    {format!("Save up to {}% with annual billing", max_annual_savings_percent())}
                </span>

                <div class="grid grid-3">
                    {
                        PRICING_TIERS.iter().map(|tier| {
                            let on_hover = {
                                let tooltip = tooltip.clone();
                                Callback::from(move |index: Option<usize>| {
                                    let next = match index {
                                        Some(index) => (*tooltip).clone().activate((tier.name, index)),
                                        None => (*tooltip).clone().clear(),
                                    };
                                    tooltip.set(next);
                                })
                            };
                            html! {
                                <TierCard
                                    key={tier.name}
                                    {tier}
                                    billing={*billing}
                                    tooltip={(*tooltip).clone()}
                                    {on_hover}
                                    selected={*selected_plan == Some(tier.name)}
                                    on_select={on_select.clone()}
                                />
                            }
                        }).collect::<Html>()
                    }
                </div>

                <div class="compare">
                    <h2>{"Compare features"}</h2>
                    <p>{"Hover any feature to see what it includes. Still unsure? Our help center answers the most common billing questions."}</p>
                    <Link<Route> to={Route::Help} classes="btn btn-primary">
                        {"Read the FAQ"}
                    </Link<Route>>
                </div>

                <div class="cta-banner">
                    <h2>{format!("Start with {} today", featured_tier().name)}</h2>
                    <p>{"Our most popular plan, with everything a growing team needs."}</p>
                    <button class="btn btn-light" onclick={cta_onclick} disabled={selected_plan.is_some()}>
                        {"Get Started"}
                    </button>
                </div>

                <div class="trust-badges">
                    {
                        TRUST_BADGES.iter().map(|badge| html! {
                            <span>{*badge}</span>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </div>
    }
}
