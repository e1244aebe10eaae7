//! Outbound mail for RecipeHub, built on lettre.

use std::sync::Arc;

use lettre::{
    Message, SmtpTransport,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use serde::Deserialize;
use validator::Validate;

use crate::{Feedback, Relay};

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,
    /// Sender address, defaults to `smtp_username` when empty.
    #[serde(default)]
    pub from_address: String,
    /// Recipient of contact form feedback.
    pub feedback_address: String,
    /// Talk plain SMTP without authentication (MailDev and similar local
    /// relays). Off by default, STARTTLS with credentials is required then.
    #[serde(default)]
    pub insecure_local_relay: bool,
}

impl EmailConfig {
    fn sender(&self) -> &str {
        if self.from_address.is_empty() {
            &self.smtp_username
        } else {
            &self.from_address
        }
    }

    fn credentials(&self) -> Option<Credentials> {
        if self.smtp_username.is_empty() || self.smtp_password.is_empty() {
            return None;
        }

        Some(Credentials::new(
            self.smtp_username.to_owned(),
            self.smtp_password.to_owned(),
        ))
    }

    /// Check the settings needed to reach the relay and to address mail.
    pub fn validate(&self) -> Result<(), String> {
        if self.feedback_address.is_empty() {
            return Err("Email feedback_address must be set".to_owned());
        }
        if self.sender().is_empty() {
            return Err("Email from_address or smtp_username must be set".to_owned());
        }
        if !self.insecure_local_relay && self.credentials().is_none() {
            return Err(
                "Email smtp credentials are required without insecure_local_relay".to_owned(),
            );
        }
        Ok(())
    }

    /// STARTTLS with credentials, or plain SMTP when `insecure_local_relay` is set.
    fn transport(&self) -> anyhow::Result<SmtpTransport> {
        if self.insecure_local_relay {
            tracing::warn!(
                host = %self.smtp_host,
                port = self.smtp_port,
                "insecure local relay, smtp without tls or authentication"
            );

            return Ok(SmtpTransport::builder_dangerous(&self.smtp_host)
                .port(self.smtp_port)
                .build());
        }

        let Some(credentials) = self.credentials() else {
            anyhow::bail!("smtp credentials are required for a starttls relay");
        };

        tracing::info!(host = %self.smtp_host, port = self.smtp_port, "smtp relay over starttls");

        Ok(SmtpTransport::starttls_relay(&self.smtp_host)?
            .port(self.smtp_port)
            .credentials(credentials)
            .build())
    }
}

#[derive(Clone)]
pub struct EmailService {
    relay: Arc<dyn Relay>,
    from: String,
    feedback_address: String,
}

impl EmailService {
    /// Build the service over a real SMTP relay.
    ///
    /// Fails when credentials are missing and `insecure_local_relay` is off.
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        Ok(Self::with_relay(config, Arc::new(config.transport()?)))
    }

    pub fn with_relay(config: &EmailConfig, relay: Arc<dyn Relay>) -> Self {
        Self {
            relay,
            from: config.sender().to_owned(),
            feedback_address: config.feedback_address.clone(),
        }
    }

    #[tracing::instrument(skip(self, body))]
    pub async fn send_plain(&self, to: &str, subject: &str, body: String) -> anyhow::Result<()> {
        let message = Message::builder()
            .from(self.from.parse::<Mailbox>()?)
            .to(to.parse::<Mailbox>()?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body)?;

        self.relay.send(message).await?;
        tracing::info!("email relayed");

        Ok(())
    }

    /// Relay a contact form submission to the feedback address.
    ///
    /// Empty fields are rejected before any connection to the relay is made.
    pub async fn send_feedback(&self, feedback: &Feedback) -> recipehub_shared::Result<()> {
        feedback.validate()?;

        self.send_plain(&self.feedback_address, &feedback.subject(), feedback.body())
            .await?;

        Ok(())
    }
}
