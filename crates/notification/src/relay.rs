use std::sync::{Mutex, PoisonError};

use lettre::{Message, SmtpTransport, Transport};

/// Outbound transport used by [`crate::EmailService`].
#[async_trait::async_trait]
pub trait Relay: Send + Sync {
    async fn send(&self, message: Message) -> anyhow::Result<()>;
}

#[async_trait::async_trait]
impl Relay for SmtpTransport {
    async fn send(&self, message: Message) -> anyhow::Result<()> {
        let mailer = self.clone();

        // The SMTP exchange is blocking, keep it off the async workers
        tokio::task::spawn_blocking(move || Transport::send(&mailer, &message)).await??;

        Ok(())
    }
}

/// Relay that keeps messages in memory instead of delivering them.
///
/// Intended for tests and local runs without an SMTP server.
#[derive(Default)]
pub struct MemoryRelay {
    messages: Mutex<Vec<Message>>,
    failure: Option<String>,
}

impl MemoryRelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// A relay that rejects every message with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            messages: Mutex::default(),
            failure: Some(reason.into()),
        }
    }

    pub fn messages(&self) -> Vec<Message> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn sent(&self) -> usize {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[async_trait::async_trait]
impl Relay for MemoryRelay {
    async fn send(&self, message: Message) -> anyhow::Result<()> {
        if let Some(reason) = &self.failure {
            anyhow::bail!("{reason}");
        }

        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message);

        Ok(())
    }
}
