//! Form payloads and the gateways that deliver them.
//!
//! Pages never await a gateway themselves: they hand the payload to
//! [`dispatch_submission`], which drives a [`SubmissionState`] reducer through
//! `Start` and exactly one `Resolve`. The reducer is the only place the UI
//! reads progress from.

use std::future::Future;
use std::pin::pin;
use std::rc::Rc;

use futures::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::{error, info};
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config;
use crate::content::pricing::BillingPeriod;

/// The only failure text users ever see.
pub const FAILURE_MESSAGE: &str = "Failed to send message. Please try again.";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("relay rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("no response within {0} ms")]
    Timeout(u32),
    #[error("could not encode payload: {0}")]
    Encode(String),
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SignupError {
    #[error("Please fill in every field.")]
    MissingField,
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("Please agree to the Terms of Service and Privacy Policy.")]
    TermsNotAccepted,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ack {
    pub detail: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SignupForm {
    pub full_name: String,
    pub email: String,
    #[serde(skip)]
    pub password: String,
    #[serde(skip)]
    pub confirm_password: String,
    pub agree_to_terms: bool,
    pub plan: Option<String>,
    pub billing: Option<BillingPeriod>,
}

impl SignupForm {
    pub fn validate(&self) -> Result<(), SignupError> {
        if self.full_name.trim().is_empty() || self.email.trim().is_empty() || self.password.is_empty() {
            return Err(SignupError::MissingField);
        }
        if self.password != self.confirm_password {
            return Err(SignupError::PasswordMismatch);
        }
        if !self.agree_to_terms {
            return Err(SignupError::TermsNotAccepted);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LoginForm {
    pub email: String,
    #[serde(skip)]
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NewsletterSubscription {
    pub email: String,
}

/// Delivers one payload and reports a single outcome.
#[allow(async_fn_in_trait)]
pub trait SubmissionGateway<P> {
    async fn submit(&self, payload: &P) -> Result<Ack, SubmitError>;
}

/// EmailJS REST relay used by the contact form.
#[derive(Clone, Debug, PartialEq)]
pub struct EmailRelay {
    pub url: &'static str,
    pub service_id: &'static str,
    pub template_id: &'static str,
    pub public_key: &'static str,
    pub timeout_ms: u32,
}

impl Default for EmailRelay {
    fn default() -> Self {
        Self {
            url: config::get_mail_relay_url(),
            service_id: config::EMAILJS_SERVICE_ID,
            template_id: config::EMAILJS_TEMPLATE_ID,
            public_key: config::EMAILJS_PUBLIC_KEY,
            timeout_ms: config::SUBMISSION_TIMEOUT_MS,
        }
    }
}

#[derive(Serialize)]
struct RelayRequest<'a, P: Serialize> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a P,
}

impl EmailRelay {
    fn request_body<'a>(&'a self, payload: &'a ContactMessage) -> RelayRequest<'a, ContactMessage> {
        RelayRequest {
            service_id: self.service_id,
            template_id: self.template_id,
            user_id: self.public_key,
            template_params: payload,
        }
    }

    async fn send(&self, payload: &ContactMessage) -> Result<Ack, SubmitError> {
        let request = Request::post(self.url)
            .json(&self.request_body(payload))
            .map_err(|e| SubmitError::Encode(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;
        let body = response.text().await.unwrap_or_default();
        if response.ok() {
            Ok(Ack { detail: body })
        } else {
            Err(SubmitError::Rejected {
                status: response.status(),
                body,
            })
        }
    }
}

impl SubmissionGateway<ContactMessage> for EmailRelay {
    async fn submit(&self, payload: &ContactMessage) -> Result<Ack, SubmitError> {
        with_timeout(self.send(payload), self.timeout_ms).await
    }
}

/// Stand-in for flows with no backend (sign-up, login, newsletter): dumps the
/// payload to the browser console and succeeds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConsoleGateway {
    pub label: &'static str,
}

impl ConsoleGateway {
    pub fn new(label: &'static str) -> Self {
        Self { label }
    }
}

impl<P: Serialize> SubmissionGateway<P> for ConsoleGateway {
    async fn submit(&self, payload: &P) -> Result<Ack, SubmitError> {
        let json = serde_json::to_string(payload).map_err(|e| SubmitError::Encode(e.to_string()))?;
        gloo_console::log!(format!("{} submitted:", self.label), json.clone());
        Ok(Ack { detail: json })
    }
}

async fn with_timeout<T>(
    request: impl Future<Output = Result<T, SubmitError>>,
    timeout_ms: u32,
) -> Result<T, SubmitError> {
    let request = pin!(request);
    let timer = pin!(TimeoutFuture::new(timeout_ms));
    match select(request, timer).await {
        Either::Left((outcome, _)) => outcome,
        Either::Right(_) => Err(SubmitError::Timeout(timeout_ms)),
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Pending,
    Sent,
    Failed(String),
}

pub enum SubmissionAction {
    Start,
    Resolve(Result<Ack, SubmitError>),
    Reset,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmissionState {
    pub status: SubmissionStatus,
    pub attempts: u32,
}

impl SubmissionState {
    pub fn is_pending(&self) -> bool {
        self.status == SubmissionStatus::Pending
    }

    pub fn is_sent(&self) -> bool {
        self.status == SubmissionStatus::Sent
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            SubmissionStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl Reducible for SubmissionState {
    type Action = SubmissionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let pending = self.is_pending();
        match action {
            // One request in flight at a time.
            SubmissionAction::Start if pending => self,
            SubmissionAction::Start => Rc::new(Self {
                status: SubmissionStatus::Pending,
                attempts: self.attempts + 1,
            }),
            SubmissionAction::Resolve(outcome) if pending => {
                let status = match outcome {
                    Ok(_) => SubmissionStatus::Sent,
                    Err(_) => SubmissionStatus::Failed(FAILURE_MESSAGE.to_string()),
                };
                Rc::new(Self {
                    status,
                    attempts: self.attempts,
                })
            }
            // Stale resolution after a reset.
            SubmissionAction::Resolve(_) => self,
            SubmissionAction::Reset => Rc::new(Self {
                status: SubmissionStatus::Idle,
                attempts: self.attempts,
            }),
        }
    }
}

/// Starts one submission unless another is still pending.
pub fn dispatch_submission<G, P>(gateway: G, payload: P, state: UseReducerHandle<SubmissionState>)
where
    G: SubmissionGateway<P> + 'static,
    P: 'static,
{
    if state.is_pending() {
        return;
    }
    state.dispatch(SubmissionAction::Start);
    spawn_local(async move {
        let outcome = gateway.submit(&payload).await;
        match &outcome {
            Ok(ack) => info!("Submission delivered: {}", ack.detail),
            Err(e) => error!("Submission failed: {}", e),
        }
        state.dispatch(SubmissionAction::Resolve(outcome));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: SubmissionState, action: SubmissionAction) -> SubmissionState {
        (*Rc::new(state).reduce(action)).clone()
    }

    fn ack() -> Ack {
        Ack {
            detail: "OK".to_string(),
        }
    }

    #[test]
    fn start_then_success() {
        let pending = reduce(SubmissionState::default(), SubmissionAction::Start);
        assert!(pending.is_pending());
        assert_eq!(pending.attempts, 1);

        let sent = reduce(pending, SubmissionAction::Resolve(Ok(ack())));
        assert!(sent.is_sent());
        assert_eq!(sent.error(), None);
    }

    #[test]
    fn any_failure_surfaces_the_same_message() {
        for err in [
            SubmitError::Network("offline".into()),
            SubmitError::Timeout(15_000),
            SubmitError::Rejected {
                status: 400,
                body: "The user ID is invalid".into(),
            },
        ] {
            let pending = reduce(SubmissionState::default(), SubmissionAction::Start);
            let failed = reduce(pending, SubmissionAction::Resolve(Err(err)));
            assert_eq!(failed.error(), Some(FAILURE_MESSAGE));
        }
    }

    #[test]
    fn second_start_while_pending_is_ignored() {
        let pending = reduce(SubmissionState::default(), SubmissionAction::Start);
        let again = reduce(pending.clone(), SubmissionAction::Start);
        assert_eq!(again, pending);
    }

    #[test]
    fn failed_submission_can_be_retried_by_hand() {
        let pending = reduce(SubmissionState::default(), SubmissionAction::Start);
        let failed = reduce(pending, SubmissionAction::Resolve(Err(SubmitError::Timeout(1))));
        let retry = reduce(failed, SubmissionAction::Start);
        assert!(retry.is_pending());
        assert_eq!(retry.attempts, 2);
    }

    #[test]
    fn resolution_without_pending_request_is_dropped() {
        let idle = reduce(SubmissionState::default(), SubmissionAction::Resolve(Ok(ack())));
        assert_eq!(idle, SubmissionState::default());
    }

    #[test]
    fn relay_body_matches_emailjs_shape() {
        let relay = EmailRelay::default();
        let message = ContactMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Pricing".into(),
            message: "Do you offer discounts?".into(),
        };
        let body = serde_json::to_value(relay.request_body(&message)).unwrap();
        assert_eq!(body["service_id"], config::EMAILJS_SERVICE_ID);
        assert_eq!(body["template_id"], config::EMAILJS_TEMPLATE_ID);
        assert_eq!(body["user_id"], config::EMAILJS_PUBLIC_KEY);
        assert_eq!(body["template_params"]["subject"], "Pricing");
        assert_eq!(body["template_params"]["message"], "Do you offer discounts?");
    }

    #[test]
    fn contact_message_needs_every_field() {
        let mut message = ContactMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hi".into(),
            message: "  ".into(),
        };
        assert!(!message.is_complete());
        message.message = "Hello".into();
        assert!(message.is_complete());
    }

    #[test]
    fn signup_validation() {
        let mut form = SignupForm {
            full_name: "John Doe".into(),
            email: "john@example.com".into(),
            password: "hunter22".into(),
            confirm_password: "hunter2".into(),
            agree_to_terms: false,
            ..Default::default()
        };
        assert_eq!(form.validate(), Err(SignupError::PasswordMismatch));
        form.confirm_password = "hunter22".into();
        assert_eq!(form.validate(), Err(SignupError::TermsNotAccepted));
        form.agree_to_terms = true;
        assert_eq!(form.validate(), Ok(()));
        form.full_name.clear();
        assert_eq!(form.validate(), Err(SignupError::MissingField));
    }

    #[test]
    fn passwords_never_serialize() {
        let form = SignupForm {
            password: "secret".into(),
            confirm_password: "secret".into(),
            ..Default::default()
        };
        let json = serde_json::to_string(&form).unwrap();
        assert!(!json.contains("secret"));
        let login = LoginForm {
            email: "a@b.c".into(),
            password: "secret".into(),
        };
        assert!(!serde_json::to_string(&login).unwrap().contains("secret"));
    }
}
