const AUTH_STYLES: &str = r#"
.auth-page {
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 7rem 1.5rem 4rem;
    background: linear-gradient(135deg, #eff6ff 0%, #eef2ff 50%, #ffffff 100%);
}
.auth-container {
    width: 100%;
    max-width: 460px;
    background: #ffffff;
    border-radius: 1rem;
    padding: 2.5rem;
    box-shadow: 0 20px 40px -12px rgba(30, 58, 138, 0.25);
}
.auth-container h1 {
    text-align: center;
    margin: 0 0 0.5rem;
    font-size: 1.9rem;
}
.auth-container .subtitle {
    text-align: center;
    color: #6b7280;
    margin-bottom: 2rem;
}
.selected-plan {
    padding: 0.75rem 1rem;
    border-radius: 0.5rem;
    background: #eef2ff;
    color: #4338ca;
    font-weight: 600;
    text-align: center;
    margin-bottom: 1.5rem;
}
.terms {
    display: flex;
    align-items: flex-start;
    gap: 0.6rem;
    font-size: 0.9rem;
    color: #4b5563;
    margin-bottom: 1.25rem;
}
.auth-switch {
    text-align: center;
    margin-top: 1.5rem;
    color: #6b7280;
    font-size: 0.95rem;
}
.auth-switch a {
    color: #2563eb;
    font-weight: 600;
}
"#;

pub mod signup {
    use yew::prelude::*;
    use yew_router::prelude::*;
    use yew_hooks::prelude::*;
    use web_sys::HtmlInputElement;
    use log::warn;

    use crate::Route;
    use crate::content::pricing::{find_tier, BillingPeriod, PricingTier};
    use crate::submission::{dispatch_submission, ConsoleGateway, SignupError, SignupForm, SubmissionState};

    /// Resolves the `plan` and `billing` query values sent by the pricing page.
    /// Unknown plans are dropped; a missing or unknown billing value means annual.
    pub fn selected_plan(
        plan: Option<&str>,
        billing: Option<&str>,
    ) -> Option<(&'static PricingTier, BillingPeriod)> {
        let tier = find_tier(plan?)?;
        let billing = billing
            .and_then(|value| serde_json::from_value(serde_json::Value::String(value.to_string())).ok())
            .unwrap_or_default();
        Some((tier, billing))
    }

    #[derive(Clone, Copy)]
    enum Field {
        FullName,
        Email,
        Password,
        ConfirmPassword,
    }

    #[function_component]
    pub fn SignUp() -> Html {
        let plan_param = use_search_param("plan".to_string());
        let billing_param = use_search_param("billing".to_string());
        let plan = selected_plan(plan_param.as_deref(), billing_param.as_deref());

        let form = use_state(SignupForm::default);
        let validation = use_state(|| None::<SignupError>);
        let submission = use_reducer(SubmissionState::default);

        if plan_param.is_some() && plan.is_none() {
            warn!("Ignoring unknown plan {:?}", plan_param);
        }

        let input_handler = |field: Field| {
            let form = form.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                let mut next = (*form).clone();
                let value = input.value();
                match field {
                    Field::FullName => next.full_name = value,
                    Field::Email => next.email = value,
                    Field::Password => next.password = value,
                    Field::ConfirmPassword => next.confirm_password = value,
                }
                form.set(next);
            })
        };

        let on_terms = {
            let form = form.clone();
            Callback::from(move |e: Event| {
                let input: HtmlInputElement = e.target_unchecked_into();
                let mut next = (*form).clone();
                next.agree_to_terms = input.checked();
                form.set(next);
            })
        };

        let onsubmit = {
            let form = form.clone();
            let validation = validation.clone();
            let submission = submission.clone();
            Callback::from(move |e: SubmitEvent| {
                e.prevent_default();
                let mut payload = (*form).clone();
                if let Some((tier, billing)) = plan {
                    payload.plan = Some(tier.name.to_string());
                    payload.billing = Some(billing);
                }
                match payload.validate() {
                    Ok(()) => {
                        validation.set(None);
                        dispatch_submission(ConsoleGateway::new("Sign up"), payload, submission.clone());
                    }
                    Err(e) => validation.set(Some(e)),
                }
            })
        };

        html! {
            <div class="auth-page">
                <style>{super::AUTH_STYLES}</style>
                <div class="auth-container">
                    <h1>{"Create your account"}</h1>
                    <p class="subtitle">{"Start your 14-day free trial. No credit card required."}</p>
                    if let Some((tier, billing)) = plan {
                        <div class="selected-plan">
                            {format!("Selected Plan: {} - ${}/month", tier.name, tier.price(billing))}
                        </div>
                    }
                    if submission.is_sent() {
                        <>
                            <div class="success-message">
                                {"Account created! Your dashboard is ready."}
                            </div>
                            <Link<Route> to={Route::Dashboard} classes="btn btn-primary btn-block">
                                {"Go to Dashboard"}
                            </Link<Route>>
                        </>
                    } else {
                        <form {onsubmit}>
                            <div class="field">
                                <label for="full-name">{"Full Name"}</label>
                                <input
                                    id="full-name"
                                    type="text"
                                    placeholder="John Doe"
                                    required=true
                                    value={form.full_name.clone()}
                                    oninput={input_handler(Field::FullName)}
                                />
                            </div>
                            <div class="field">
                                <label for="signup-email">{"Email"}</label>
                                <input
                                    id="signup-email"
                                    type="email"
                                    placeholder="john@example.com"
                                    required=true
                                    value={form.email.clone()}
                                    oninput={input_handler(Field::Email)}
                                />
                            </div>
                            <div class="field">
                                <label for="signup-password">{"Password"}</label>
                                <input
                                    id="signup-password"
                                    type="password"
                                    required=true
                                    value={form.password.clone()}
                                    oninput={input_handler(Field::Password)}
                                />
                            </div>
                            <div class="field">
                                <label for="confirm-password">{"Confirm Password"}</label>
                                <input
                                    id="confirm-password"
                                    type="password"
                                    required=true
                                    value={form.confirm_password.clone()}
                                    oninput={input_handler(Field::ConfirmPassword)}
                                />
                            </div>
                            <label class="terms">
                                <input type="checkbox" checked={form.agree_to_terms} onchange={on_terms} />
                                <span>{"I agree to the Terms of Service and Privacy Policy"}</span>
                            </label>
                            if let Some(error) = *validation {
                                <div class="error-message">{error.to_string()}</div>
                            }
                            if let Some(message) = submission.error() {
                                <div class="error-message">{message.to_string()}</div>
                            }
                            <button
                                type="submit"
                                class="btn btn-gradient btn-block"
                                disabled={submission.is_pending()}
                            >
                                {"Create Account"}
                            </button>
                        </form>
                    }
                    <div class="auth-switch">
                        {"Already have an account? "}
                        <Link<Route> to={Route::Login}>{"Log in"}</Link<Route>>
                    </div>
                </div>
            </div>
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn plan_from_pricing_redirect() {
            let (tier, billing) = selected_plan(Some("Professional"), Some("monthly")).unwrap();
            assert_eq!(tier.name, "Professional");
            assert_eq!(billing, BillingPeriod::Monthly);
            assert_eq!(tier.price(billing), 59);
        }

        #[test]
        fn billing_defaults_to_annual() {
            let (_, billing) = selected_plan(Some("basic"), None).unwrap();
            assert_eq!(billing, BillingPeriod::Annual);
            let (_, billing) = selected_plan(Some("basic"), Some("weekly")).unwrap();
            assert_eq!(billing, BillingPeriod::Annual);
        }

        #[test]
        fn unknown_or_missing_plan_is_ignored() {
            assert!(selected_plan(Some("Platinum"), Some("annual")).is_none());
            assert!(selected_plan(None, Some("annual")).is_none());
        }
    }
}

pub mod login {
    use yew::prelude::*;
    use yew_router::prelude::*;
    use web_sys::HtmlInputElement;

    use crate::Route;
    use crate::submission::{dispatch_submission, ConsoleGateway, LoginForm, SubmissionState};

    #[function_component]
    pub fn Login() -> Html {
        let form = use_state(LoginForm::default);
        let submission = use_reducer(SubmissionState::default);

        let on_email = {
            let form = form.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                form.set(LoginForm { email: input.value(), ..(*form).clone() });
            })
        };

        let on_password = {
            let form = form.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                form.set(LoginForm { password: input.value(), ..(*form).clone() });
            })
        };

        let onsubmit = {
            let form = form.clone();
            let submission = submission.clone();
            Callback::from(move |e: SubmitEvent| {
                e.prevent_default();
                if form.email.trim().is_empty() || form.password.is_empty() {
                    return;
                }
                dispatch_submission(ConsoleGateway::new("Login"), (*form).clone(), submission.clone());
            })
        };

        html! {
            <div class="auth-page">
                <style>{super::AUTH_STYLES}</style>
                <div class="auth-container">
                    <h1>{"Welcome back"}</h1>
                    <p class="subtitle">{"Log in to manage your books."}</p>
                    if submission.is_sent() {
                        <>
                            <div class="success-message">{"Logged in successfully."}</div>
                            <Link<Route> to={Route::Dashboard} classes="btn btn-primary btn-block">
                                {"Go to Dashboard"}
                            </Link<Route>>
                        </>
                    } else {
                        <form {onsubmit}>
                            <div class="field">
                                <label for="login-email">{"Email"}</label>
                                <input
                                    id="login-email"
                                    type="email"
                                    required=true
                                    value={form.email.clone()}
                                    oninput={on_email}
                                />
                            </div>
                            <div class="field">
                                <label for="login-password">{"Password"}</label>
                                <input
                                    id="login-password"
                                    type="password"
                                    required=true
                                    value={form.password.clone()}
                                    oninput={on_password}
                                />
                            </div>
                            if let Some(message) = submission.error() {
                                <div class="error-message">{message.to_string()}</div>
                            }
                            <button
                                type="submit"
                                class="btn btn-gradient btn-block"
                                disabled={submission.is_pending()}
                            >
                                {"Log In"}
                            </button>
                        </form>
                    }
                    <div class="auth-switch">
                        {"Don't have an account? "}
                        <Link<Route> to={Route::SignUp}>{"Sign up"}</Link<Route>>
                    </div>
                </div>
            </div>
        }
    }
}
