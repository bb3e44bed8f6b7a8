use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::content::company::{DEMO_FEATURES, HIGHLIGHTS, PRODUCT_NAME, TAGLINE, TESTIMONIALS};

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home">
            <style>{r#"
                .hero {
                    min-height: 90vh;
                    display: flex;
                    align-items: center;
                    padding: 8rem 0 4rem;
                    background: linear-gradient(135deg, #1e3a8a 0%, #4f46e5 60%, #6366f1 100%);
                    color: #ffffff;
                }
                .hero-content {
                    max-width: 720px;
                }
                .hero h1 {
                    font-size: 3.5rem;
                    line-height: 1.1;
                    margin: 0 0 1.5rem;
                }
                .hero p {
                    font-size: 1.25rem;
                    color: #c7d2fe;
                    margin-bottom: 2.5rem;
                }
                .hero-actions {
                    display: flex;
                    gap: 1rem;
                    flex-wrap: wrap;
                }
                .hero-actions .btn-outline {
                    border: 2px solid #ffffff;
                    color: #ffffff;
                    background: transparent;
                }
                .home-section {
                    padding: 6rem 0;
                }
                .home-section h2 {
                    text-align: center;
                    font-size: 2.25rem;
                    margin: 0 0 3rem;
                }
                .highlight-card {
                    text-align: center;
                }
                .highlight-card:hover {
                    transform: translateY(-6px);
                }
                .highlight-icon {
                    font-size: 2.75rem;
                    margin-bottom: 1rem;
                }
                .demo {
                    background: #f8fafc;
                }
                .demo-layout {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }
                .demo-list {
                    list-style: none;
                    padding: 0;
                }
                .demo-list li {
                    padding: 0.75rem 0;
                    font-size: 1.1rem;
                    border-bottom: 1px solid #e5e7eb;
                }
                .demo-list li::before {
                    content: "✓";
                    color: #22c55e;
                    font-weight: 700;
                    margin-right: 0.75rem;
                }
                .demo-preview {
                    height: 320px;
                    border-radius: 1rem;
                    background: linear-gradient(135deg, #dbeafe, #e0e7ff);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 5rem;
                }
                .testimonial-card blockquote {
                    margin: 0 0 1.5rem;
                    font-style: italic;
                    color: #374151;
                }
                .testimonial-author {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .testimonial-author img {
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                }
                .testimonial-author span {
                    display: block;
                    font-size: 0.85rem;
                    color: #6b7280;
                }
                @media (max-width: 768px) {
                    .hero h1 { font-size: 2.5rem; }
                    .demo-layout { grid-template-columns: 1fr; }
                }
            "#}</style>

            <section class="hero">
                <div class="container">
                    <div class="hero-content fade-in-up">
                        <span class="pill">{format!("Welcome to {}", PRODUCT_NAME)}</span>
                        <h1>{TAGLINE}</h1>
                        <p>
                            {"Smart, AI-powered accounting for growing businesses. Automate bookkeeping, track cash flow and stay tax-ready from one place."}
                        </p>
                        <div class="hero-actions">
                            <Link<Route> to={Route::SignUp} classes="btn btn-light">
                                {"Start Free Trial"}
                            </Link<Route>>
                            <Link<Route> to={Route::Features} classes="btn btn-outline">
                                {"Explore Features"}
                            </Link<Route>>
                        </div>
                    </div>
                </div>
            </section>

            <section class="home-section">
                <div class="container">
                    <h2>{"Why businesses choose us"}</h2>
                    <div class="grid grid-3">
                        {
                            HIGHLIGHTS.iter().enumerate().map(|(i, highlight)| html! {
                                <div
                                    class="card highlight-card fade-in-up"
                                    style={format!("animation-delay: {}ms;", i * 150)}
                                >
                                    <div class="highlight-icon">{highlight.icon}</div>
                                    <h3>{highlight.title}</h3>
                                    <p>{highlight.description}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <section class="home-section demo">
                <div class="container demo-layout">
                    <div>
                        <h2 style="text-align: left;">{"See it in action"}</h2>
                        <ul class="demo-list">
                            {
                                DEMO_FEATURES.iter().map(|feature| html! {
                                    <li>{*feature}</li>
                                }).collect::<Html>()
                            }
                        </ul>
                        <Link<Route> to={Route::Dashboard} classes="btn btn-primary">
                            {"View Sample Dashboard"}
                        </Link<Route>>
                    </div>
                    <div class="demo-preview float">{"📊"}</div>
                </div>
            </section>

            <section class="home-section">
                <div class="container">
                    <h2>{"What our customers say"}</h2>
                    <div class="grid grid-3">
                        {
                            TESTIMONIALS.iter().map(|testimonial| html! {
                                <div class="card testimonial-card">
                                    <blockquote>{format!("\u{201c}{}\u{201d}", testimonial.quote)}</blockquote>
                                    <div class="testimonial-author">
                                        <img src={testimonial.avatar} alt={testimonial.name} />
                                        <div>
                                            <strong>{testimonial.name}</strong>
                                            <span>{testimonial.role}</span>
                                        </div>
                                    </div>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <section class="container">
                <div class="cta-banner">
                    <h2>{"Ready to transform your accounting?"}</h2>
                    <p>{"Join thousands of businesses already growing with us."}</p>
                    <Link<Route> to={Route::Pricing} classes="btn btn-light">
                        {"See Pricing"}
                    </Link<Route>>
                </div>
                <div style="height: 5rem;"></div>
            </section>
        </div>
    }
}
