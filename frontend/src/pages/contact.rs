use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};

use crate::content::company::{support_mailto, CONTACT_CHANNELS, OFFICE_HOURS, SOCIAL_LINKS};
use crate::submission::{
    dispatch_submission, ContactMessage, EmailRelay, SubmissionAction, SubmissionState,
};
use crate::view_state::ViewState;

#[derive(Clone, Copy)]
enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    fn set(self, form: &mut ContactMessage, value: String) {
        match self {
            Field::Name => form.name = value,
            Field::Email => form.email = value,
            Field::Subject => form.subject = value,
            Field::Message => form.message = value,
        }
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_state(ContactMessage::default);
    let open_channel = use_state(ViewState::<&'static str>::new);
    let submission = use_reducer(SubmissionState::default);

    // Clear the form once the relay accepted it.
    {
        let form = form.clone();
        use_effect_with_deps(move |sent| {
            if *sent {
                form.set(ContactMessage::default());
            }
            || ()
        }, submission.is_sent());
    }

    let on_field = |field: Field| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            field.set(&mut next, value);
            form.set(next);
        })
    };

    let input_handler = |field: Field| {
        let on_field = on_field(field);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_field.emit(input.value());
        })
    };

    let on_message = {
        let on_field = on_field(Field::Message);
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            on_field.emit(input.value());
        })
    };

    let onsubmit = {
        let form = form.clone();
        let submission = submission.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !form.is_complete() {
                return;
            }
            dispatch_submission(EmailRelay::default(), (*form).clone(), submission.clone());
        })
    };

    let send_another = {
        let submission = submission.clone();
        Callback::from(move |_: MouseEvent| submission.dispatch(SubmissionAction::Reset))
    };

    let pending = submission.is_pending();

    html! {
        <div class="page page-gradient contact-page">
            <style>{r#"
                .contact-layout {
                    display: grid;
                    grid-template-columns: 1fr 1.2fr;
                    gap: 3rem;
                    align-items: start;
                }
                .channel-card {
                    padding: 1.25rem 1.5rem;
                    margin-bottom: 1rem;
                    cursor: pointer;
                }
                .channel-head {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .channel-icon {
                    font-size: 1.75rem;
                }
                .channel-head h3 {
                    margin: 0;
                    font-size: 1.05rem;
                }
                .channel-head p {
                    margin: 0.2rem 0 0;
                    color: #4b5563;
                }
                .channel-extra {
                    margin-top: 0.75rem;
                    font-size: 0.9rem;
                    color: #6366f1;
                }
                .office-hours table {
                    width: 100%;
                    border-collapse: collapse;
                }
                .office-hours td {
                    padding: 0.4rem 0;
                    border-bottom: 1px solid #f3f4f6;
                }
                .office-hours td:last-child {
                    text-align: right;
                    color: #4b5563;
                }
                .social-links {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    margin-top: 1.5rem;
                }
                .social-links a {
                    color: #4f46e5;
                    font-weight: 500;
                }
                .thank-you {
                    text-align: center;
                }
                .thank-you .icon {
                    font-size: 3.5rem;
                }
                .map-placeholder {
                    margin-top: 4rem;
                    height: 320px;
                    border-radius: 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: linear-gradient(135deg, #e0e7ff, #dbeafe);
                    color: #4338ca;
                    font-size: 1.1rem;
                    font-weight: 500;
                }
                @media (max-width: 900px) {
                    .contact-layout {
                        grid-template-columns: 1fr;
                    }
                }
            "#}</style>
            <div class="container">
                <div class="page-header fade-in-up">
                    <span class="pill">{"Contact Us"}</span>
                    <h1>{"We'd love to hear from you"}</h1>
                    <p>{"Questions about features, pricing or your account? Our team is ready to help."}</p>
                </div>

                <div class="contact-layout">
                    <div>
                        {
                            CONTACT_CHANNELS.iter().map(|channel| {
                                let title = channel.title;
                                let is_open = open_channel.is_active(&title);
                                let onclick = {
                                    let open_channel = open_channel.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        open_channel.set((*open_channel).clone().toggle(title));
                                    })
                                };
                                html! {
                                    <div class="card channel-card" {onclick}>
                                        <div class="channel-head">
                                            <span class="channel-icon">{channel.icon}</span>
                                            <div>
                                                <h3>{title}</h3>
                                                <p>{channel.details}</p>
                                            </div>
                                        </div>
                                        if is_open {
                                            <div class="channel-extra">{channel.additional_info}</div>
                                        }
                                    </div>
                                }
                            }).collect::<Html>()
                        }

                        <div class="card office-hours">
                            <h3>{"Office Hours"}</h3>
                            <table>
                                {
                                    OFFICE_HOURS.iter().map(|(days, hours)| html! {
                                        <tr>
                                            <td>{*days}</td>
                                            <td>{*hours}</td>
                                        </tr>
                                    }).collect::<Html>()
                                }
                            </table>
                            <div class="social-links">
                                {
                                    SOCIAL_LINKS.iter().map(|(name, url)| html! {
                                        <a href={*url} target="_blank" rel="noopener noreferrer">{*name}</a>
                                    }).collect::<Html>()
                                }
                            </div>
                        </div>
                    </div>

                    <div class="card">
                        if submission.is_sent() {
                            <div class="thank-you">
                                <div class="icon">{"✉️"}</div>
                                <h2>{"Thank you!"}</h2>
                                <p>{"Your message has been sent. We'll get back to you within 24 hours."}</p>
                                <button class="btn btn-primary" onclick={send_another}>
                                    {"Send another message"}
                                </button>
                            </div>
                        } else {
                            <form {onsubmit}>
                                <h2>{"Send us a message"}</h2>
                                <div class="field">
                                    <label for="contact-name">{"Name"}</label>
                                    <input
                                        id="contact-name"
                                        type="text"
                                        required=true
                                        value={form.name.clone()}
                                        oninput={input_handler(Field::Name)}
                                    />
                                </div>
                                <div class="field">
                                    <label for="contact-email">{"Email"}</label>
                                    <input
                                        id="contact-email"
                                        type="email"
                                        required=true
                                        value={form.email.clone()}
                                        oninput={input_handler(Field::Email)}
                                    />
                                </div>
                                <div class="field">
                                    <label for="contact-subject">{"Subject"}</label>
                                    <input
                                        id="contact-subject"
                                        type="text"
                                        required=true
                                        value={form.subject.clone()}
                                        oninput={input_handler(Field::Subject)}
                                    />
                                </div>
                                <div class="field">
                                    <label for="contact-message">{"Message"}</label>
                                    <textarea
                                        id="contact-message"
                                        rows="6"
                                        required=true
                                        value={form.message.clone()}
                                        oninput={on_message}
                                    />
                                </div>
                                if let Some(message) = submission.error() {
                                    <div class="error-message">{message.to_string()}</div>
                                }
                                <button type="submit" class="btn btn-gradient btn-block" disabled={pending}>
                                    if pending {
                                        <>
                                            <span class="spinner"></span>
                                            {"Sending..."}
                                        </>
                                    } else {
                                        {"Send Message"}
                                    }
                                </button>
                                <p style="text-align: center; font-size: 0.9rem; color: #6b7280;">
                                    {"Prefer email? "}
                                    <a href={support_mailto("Question about Groww Book")}>
                                        {"Write to support directly"}
                                    </a>
                                </p>
                            </form>
                        }
                    </div>
                </div>

                <div class="map-placeholder">{"📍 123 Business Avenue, Silicon Valley, CA 94025"}</div>
            </div>
        </div>
    }
}
