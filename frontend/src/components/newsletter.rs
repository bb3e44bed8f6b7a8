use yew::prelude::*;
use web_sys::HtmlInputElement;

use crate::submission::{dispatch_submission, ConsoleGateway, NewsletterSubscription, SubmissionState};

#[derive(Properties, PartialEq)]
pub struct NewsletterSignupProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or("Subscribe".to_string())]
    pub button_label: String,
}

#[function_component(NewsletterSignup)]
pub fn newsletter_signup(props: &NewsletterSignupProps) -> Html {
    let email = use_state(String::new);
    let submission = use_reducer(SubmissionState::default);

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let submission = submission.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if email.trim().is_empty() {
                return;
            }
            dispatch_submission(
                ConsoleGateway::new("Newsletter"),
                NewsletterSubscription { email: (*email).clone() },
                submission.clone(),
            );
            email.set(String::new());
        })
    };

    html! {
        <form class={classes!("newsletter-form", props.class.clone())} {onsubmit}>
            <style>{r#"
                .newsletter-form {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }
                .newsletter-form input {
                    flex: 1 1 200px;
                    padding: 0.65rem 1rem;
                    border-radius: 0.5rem;
                    border: 1px solid #d1d5db;
                    font-size: 0.95rem;
                }
                .newsletter-form .newsletter-note {
                    flex-basis: 100%;
                    font-size: 0.85rem;
                    margin: 0.25rem 0 0;
                }
            "#}</style>
            <input
                type="email"
                placeholder="Enter your email"
                required=true
                value={(*email).clone()}
                {oninput}
            />
            <button type="submit" class="btn btn-primary" disabled={submission.is_pending()}>
                {props.button_label.clone()}
            </button>
            if submission.is_sent() {
                <p class="newsletter-note success-message">{"Thanks for subscribing!"}</p>
            }
            if let Some(message) = submission.error() {
                <p class="newsletter-note error-message">{message.to_string()}</p>
            }
        </form>
    }
}
