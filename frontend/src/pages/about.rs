use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::content::company::{ABOUT_INTRO, MILESTONES, MISSION, PRODUCT_NAME, TEAM};

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="page page-gradient about-page">
            <style>{r#"
                .about-section {
                    margin-bottom: 5rem;
                }
                .about-section h2 {
                    text-align: center;
                    font-size: 2rem;
                    margin-bottom: 2.5rem;
                }
                .mission {
                    max-width: 48rem;
                    margin: 0 auto;
                    font-size: 1.15rem;
                    line-height: 1.8;
                    color: #374151;
                    text-align: center;
                }
                .timeline {
                    position: relative;
                    max-width: 40rem;
                    margin: 0 auto;
                    padding-left: 2rem;
                    border-left: 3px solid #c7d2fe;
                }
                .timeline-item {
                    position: relative;
                    margin-bottom: 2rem;
                }
                .timeline-item::before {
                    content: "";
                    position: absolute;
                    left: calc(-2rem - 9px);
                    top: 0.35rem;
                    width: 15px;
                    height: 15px;
                    border-radius: 50%;
                    background: #6366f1;
                }
                .timeline-year {
                    font-weight: 800;
                    color: #4f46e5;
                    margin-right: 0.75rem;
                }
                .team-card {
                    text-align: center;
                }
                .team-card:hover {
                    transform: translateY(-6px);
                }
                .team-card img {
                    width: 140px;
                    height: 140px;
                    border-radius: 50%;
                    object-fit: cover;
                    margin-bottom: 1rem;
                    border: 4px solid #e0e7ff;
                }
                .team-role {
                    color: #6366f1;
                    font-weight: 600;
                    margin-bottom: 0.5rem;
                }
            "#}</style>
            <div class="container">
                <div class="page-header fade-in-up">
                    <span class="pill">{"About Us"}</span>
                    <h1>{format!("The story behind {}", PRODUCT_NAME)}</h1>
                    <p>{ABOUT_INTRO}</p>
                </div>

                <section class="about-section">
                    <h2>{"Our Mission"}</h2>
                    <p class="mission">{MISSION}</p>
                </section>

                <section class="about-section">
                    <h2>{"Our Journey"}</h2>
                    <div class="timeline">
                        {
                            MILESTONES.iter().map(|milestone| html! {
                                <div class="timeline-item">
                                    <span class="timeline-year">{milestone.year}</span>
                                    <span>{milestone.event}</span>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </section>

                <section class="about-section">
                    <h2>{"Meet the Team"}</h2>
                    <div class="grid grid-2">
                        {
                            TEAM.iter().map(|member| html! {
                                <div class="card team-card">
                                    <img src={member.image} alt={member.name} />
                                    <h3>{member.name}</h3>
                                    <div class="team-role">{member.role}</div>
                                    <p>{member.description}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </section>

                <div class="cta-banner">
                    <h2>{"Want to work with us?"}</h2>
                    <p>{"We would love to hear from you."}</p>
                    <Link<Route> to={Route::Contact} classes="btn btn-light">
                        {"Get in touch"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
