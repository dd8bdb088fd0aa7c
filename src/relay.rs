//! Contact form delivery through the EmailJS REST API.
//!
//! Submitting never blocks the frame loop: the request runs on the async
//! runtime (tokio natively, the browser's microtask queue on the web) and the
//! outcome comes back through a channel that the app polls every frame.

use crate::config::RelayConfig;
use serde::{Deserialize, Serialize};
use std::future::Future;
use tokio::sync::mpsc;

pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const MESSAGE_TITLE: &str = "Message from Portfolio Contact Form";

#[derive(thiserror::Error, Debug)]
pub enum RelayError {
    #[error("the contact form is not configured")]
    NotConfigured,

    #[error("{0}")]
    InvalidForm(&'static str),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("relay rejected the message (HTTP {status}): {body}")]
    Rejected { status: u16, body: String },
}

// ---------------------------------------------------------------------------
// Form
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// # Errors
    ///
    /// [`RelayError::InvalidForm`] naming the first field that is missing or
    /// malformed.
    pub fn validate(&self) -> Result<(), RelayError> {
        if self.name.trim().is_empty() {
            return Err(RelayError::InvalidForm("Please enter your name."));
        }
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(RelayError::InvalidForm("Please enter a valid email address."));
        }
        if self.message.trim().is_empty() {
            return Err(RelayError::InvalidForm("Please write a message."));
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

// ---------------------------------------------------------------------------
// Wire format
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
    pub to_name: String,
    pub time: String,
    pub title: String,
}

/// Body of the EmailJS send call. `user_id` carries the public key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailRequest {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    pub template_params: TemplateParams,
}

/// Validate and package a submission.
///
/// # Errors
///
/// [`RelayError::NotConfigured`] when credentials are missing, otherwise
/// whatever [`ContactForm::validate`] reports.
pub fn build_request(
    config: &RelayConfig,
    form: &ContactForm,
    to_name: &str,
    time: String,
) -> Result<EmailRequest, RelayError> {
    if !config.is_configured() {
        return Err(RelayError::NotConfigured);
    }
    form.validate()?;
    Ok(EmailRequest {
        service_id: config.service_id.clone(),
        template_id: config.template_id.clone(),
        user_id: config.public_key.clone(),
        template_params: TemplateParams {
            from_name: form.name.trim().to_owned(),
            from_email: form.email.trim().to_owned(),
            message: form.message.trim().to_owned(),
            to_name: to_name.to_owned(),
            time,
            title: MESSAGE_TITLE.to_owned(),
        },
    })
}

/// POST one request. No retries.
///
/// # Errors
///
/// [`RelayError::Transport`] if the request could not be made,
/// [`RelayError::Rejected`] for any non-2xx answer.
pub async fn send(client: &reqwest::Client, request: &EmailRequest) -> Result<(), RelayError> {
    let response = client.post(EMAILJS_ENDPOINT).json(request).send().await?;
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let body = response.text().await.unwrap_or_default();
    Err(RelayError::Rejected {
        status: status.as_u16(),
        body,
    })
}

// ---------------------------------------------------------------------------
// Relay handle
// ---------------------------------------------------------------------------

pub type Outcome = Result<(), RelayError>;

/// Owns the HTTP client and the outcome channel. At most one submission is
/// in flight at a time.
pub struct Relay {
    config: RelayConfig,
    client: reqwest::Client,
    outcome_tx: mpsc::UnboundedSender<Outcome>,
    outcome_rx: mpsc::UnboundedReceiver<Outcome>,
    in_flight: bool,
}

impl Default for Relay {
    fn default() -> Self {
        Self::new(RelayConfig::from_build_env())
    }
}

impl Relay {
    pub fn new(config: RelayConfig) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            config,
            client: reqwest::Client::new(),
            outcome_tx,
            outcome_rx,
            in_flight: false,
        }
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Start sending `form`. The result arrives later through [`Self::poll`].
    ///
    /// # Errors
    ///
    /// Fails immediately, without touching the network, if a send is already
    /// running, the relay is not configured or the form is invalid.
    pub fn submit(&mut self, form: &ContactForm, to_name: &str) -> Result<(), RelayError> {
        if self.in_flight {
            return Err(RelayError::InvalidForm("A message is already being sent."));
        }
        let time = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let request = build_request(&self.config, form, to_name, time)?;

        log::info!("sending contact form from {}", request.template_params.from_email);
        self.in_flight = true;
        let client = self.client.clone();
        let tx = self.outcome_tx.clone();
        spawn(async move {
            let outcome = send(&client, &request).await;
            if tx.send(outcome).is_err() {
                log::warn!("contact form outcome dropped: app is gone");
            }
        });
        Ok(())
    }

    /// The outcome of the running submission, once it has finished.
    pub fn poll(&mut self) -> Option<Outcome> {
        let outcome = self.outcome_rx.try_recv().ok()?;
        self.in_flight = false;
        match &outcome {
            Ok(()) => log::info!("contact form delivered"),
            Err(e) => log::warn!("contact form failed: {e}"),
        }
        Some(outcome)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn spawn(task: impl Future<Output = ()> + Send + 'static) {
    tokio::spawn(task);
}

#[cfg(target_arch = "wasm32")]
fn spawn(task: impl Future<Output = ()> + 'static) {
    wasm_bindgen_futures::spawn_local(task);
}
