use yew::prelude::*;
use yew_router::prelude::*;
use chrono::Datelike;

use crate::Route;
use crate::components::logo::Logo;
use crate::components::newsletter::NewsletterSignup;
use crate::content::company::{PRODUCT_NAME, SOCIAL_LINKS, TAGLINE};

const FOOTER_COLUMNS: &[(&str, &[(&str, Route)])] = &[
    ("Quick Links", &[
        ("Home", Route::Home),
        ("Features", Route::Features),
        ("Pricing", Route::Pricing),
        ("Download", Route::Download),
    ]),
    ("Resources", &[
        ("Blog", Route::Blog),
        ("Help Center", Route::Help),
        ("Dashboard", Route::Dashboard),
    ]),
    ("Company", &[
        ("About", Route::About),
        ("Contact", Route::Contact),
        ("Sign Up", Route::SignUp),
    ]),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <style>{r#"
                .site-footer {
                    background: #0f172a;
                    color: #cbd5e1;
                    padding: 4rem 0 2rem;
                }
                .footer-grid {
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr 1fr;
                    gap: 2.5rem;
                }
                .footer-brand {
                    display: flex;
                    align-items: center;
                    gap: 0.6rem;
                    font-size: 1.3rem;
                    font-weight: 700;
                    color: #ffffff;
                }
                .footer-column h4 {
                    color: #ffffff;
                    margin: 0 0 1rem;
                }
                .footer-column ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                }
                .footer-column li {
                    margin-bottom: 0.6rem;
                }
                .footer-column a, .footer-social a {
                    color: #94a3b8;
                    text-decoration: none;
                }
                .footer-column a:hover, .footer-social a:hover {
                    color: #ffffff;
                }
                .footer-newsletter {
                    margin-top: 1.5rem;
                }
                .footer-newsletter input {
                    background: #1e293b;
                    border-color: #334155;
                    color: #ffffff;
                }
                .footer-bottom {
                    margin-top: 3rem;
                    padding-top: 1.5rem;
                    border-top: 1px solid #1e293b;
                    display: flex;
                    justify-content: space-between;
                    flex-wrap: wrap;
                    gap: 1rem;
                    font-size: 0.9rem;
                }
                .footer-social {
                    display: flex;
                    gap: 1.25rem;
                }
                @media (max-width: 768px) {
                    .footer-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                }
            "#}</style>
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <div class="footer-brand">
                            <Logo size={32} />
                            {PRODUCT_NAME}
                        </div>
                        <p>{TAGLINE}</p>
                        <p>{"Subscribe to our newsletter for product updates and accounting tips."}</p>
                        <NewsletterSignup class="footer-newsletter" />
                    </div>
                    {
                        FOOTER_COLUMNS.iter().map(|(title, links)| html! {
                            <div class="footer-column">
                                <h4>{*title}</h4>
                                <ul>
                                    {
                                        links.iter().map(|(label, route)| html! {
                                            <li>
                                                <Link<Route> to={route.clone()}>{*label}</Link<Route>>
                                            </li>
                                        }).collect::<Html>()
                                    }
                                </ul>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
                <div class="footer-bottom">
                    <span>{format!("© {} {}. All rights reserved.", year, PRODUCT_NAME)}</span>
                    <div class="footer-social">
                        {
                            SOCIAL_LINKS.iter().map(|(name, url)| html! {
                                <a href={*url} target="_blank" rel="noopener noreferrer">{*name}</a>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>
        </footer>
    }
}
