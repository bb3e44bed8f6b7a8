use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement};

use crate::Route;
use crate::catalog::{filter, CategoryFilter, CategoryOption, FilterCriteria};
use crate::content::company::support_mailto;
use crate::content::help::{HelpCategory, FAQS, QUICK_LINKS};
use crate::view_state::ViewState;

#[function_component(Help)]
pub fn help() -> Html {
    let criteria = use_state(FilterCriteria::<HelpCategory>::default);
    // Keyed by FAQ id so narrowing the list never moves the open answer.
    let expanded = use_state(ViewState::<u32>::new);

    let on_search = {
        let criteria = criteria.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            criteria.set((*criteria).clone().with_query(input.value()));
        })
    };

    let on_category = {
        let criteria = criteria.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            criteria.set((*criteria).clone().with_category(CategoryFilter::from_slug(&select.value())));
        })
    };

    let faqs = filter(FAQS, &*criteria);

    html! {
        <div class="page page-gradient help-page">
            <style>{r#"
                .help-controls {
                    display: flex;
                    gap: 1rem;
                    max-width: 44rem;
                    margin: 0 auto 4rem;
                }
                .help-controls .search-input {
                    flex: 2;
                }
                .help-controls .category-select {
                    flex: 1;
                }
                .quick-link {
                    text-align: center;
                }
                .quick-link:hover {
                    transform: translateY(-6px);
                }
                .quick-link-icon {
                    font-size: 2.5rem;
                }
                .faq-section {
                    max-width: 52rem;
                    margin: 5rem auto 0;
                }
                .faq-section h2 {
                    text-align: center;
                    margin-bottom: 2rem;
                }
                .faq-item {
                    padding: 0;
                    margin-bottom: 1rem;
                    overflow: hidden;
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    padding: 1.25rem 1.5rem;
                    border: none;
                    background: none;
                    text-align: left;
                    font-size: 1.05rem;
                    font-weight: 600;
                    cursor: pointer;
                    color: #111827;
                }
                .faq-chevron {
                    transition: transform 0.3s ease;
                    color: #6366f1;
                }
                .faq-item.open .faq-chevron {
                    transform: rotate(180deg);
                }
                .faq-answer {
                    padding: 0 1.5rem 1.25rem;
                    color: #4b5563;
                    line-height: 1.7;
                }
                .still-need-help {
                    margin-top: 5rem;
                    text-align: center;
                }
                .still-need-help .actions {
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                    flex-wrap: wrap;
                    margin-top: 1.5rem;
                }
                @media (max-width: 768px) {
                    .help-controls {
                        flex-direction: column;
                    }
                }
            "#}</style>
            <div class="container">
                <div class="page-header fade-in-up">
                    <span class="pill">{"Help Center"}</span>
                    <h1>{"How can we help?"}</h1>
                    <p>{"Search our knowledge base or browse answers by category."}</p>
                </div>

                <div class="help-controls">
                    <input
                        class="search-input"
                        type="search"
                        placeholder="Search for answers..."
                        value={criteria.query.clone()}
                        oninput={on_search}
                    />
                    <select class="category-select" onchange={on_category}>
                        <option value="all" selected={criteria.category.slug() == "all"}>
                            {"All Categories"}
                        </option>
                        {
                            HelpCategory::ALL.iter().map(|&category| html! {
                                <option
                                    value={category.slug()}
                                    selected={criteria.category.slug() == category.slug()}
                                >
                                    {category.label()}
                                </option>
                            }).collect::<Html>()
                        }
                    </select>
                </div>

                <div class="grid grid-3">
                    {
                        QUICK_LINKS.iter().map(|link| html! {
                            <div class="card quick-link">
                                <div class="quick-link-icon">{link.icon}</div>
                                <h3>{link.title}</h3>
                                <p>{link.description}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>

                <section class="faq-section">
                    <h2>{"Frequently Asked Questions"}</h2>
                    if faqs.is_empty() {
                        <div class="empty-state">
                            <h3>{"No answers match your search"}</h3>
                            <p>{"Try another keyword, or contact our support team."}</p>
                        </div>
                    }
                    {
                        faqs.into_iter().map(|faq| {
                            let id = faq.id;
                            let is_open = expanded.is_active(&id);
                            let onclick = {
                                let expanded = expanded.clone();
                                Callback::from(move |_: MouseEvent| {
                                    expanded.set((*expanded).clone().toggle(id));
                                })
                            };
                            html! {
                                <div key={id} class={classes!("card", "faq-item", is_open.then(|| "open"))}>
                                    <button class="faq-question" {onclick} aria-expanded={is_open.to_string()}>
                                        <span>{faq.question}</span>
                                        <span class="faq-chevron">{"▾"}</span>
                                    </button>
                                    if is_open {
                                        <div class="faq-answer">{faq.answer}</div>
                                    }
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </section>

                <div class="card still-need-help">
                    <h2>{"Still need help?"}</h2>
                    <p>{"Our support team is available Monday to Friday, 9 AM - 6 PM EST."}</p>
                    <div class="actions">
                        <Link<Route> to={Route::Contact} classes="btn btn-primary">
                            {"Contact Support"}
                        </Link<Route>>
                        <a class="btn btn-light" href={support_mailto("Help Center request")}>
                            {"Email Us"}
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}
