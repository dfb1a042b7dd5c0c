//! # loan-notify
//!
//! Status-change notifications for loantrack.
//!
//! Delivery is best effort and at most once: a failed send is logged and
//! dropped. Nothing is queued and nothing is retried, so two identical status
//! updates send two identical emails.

mod error;
mod message;
mod smtp;

pub use error::NotifyError;
pub use message::StatusNotification;
pub use smtp::SmtpNotifier;

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use loan_config::MailConfig;
use loan_core::entities::Application;

/// Outbound channel for status notifications.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Attempt a single delivery.
    async fn send(&self, notification: &StatusNotification) -> Result<(), NotifyError>;
}

/// Compose and send the status email for `application`.
///
/// Errors are logged and swallowed; the caller never sees them.
pub async fn notify_status_change(notifier: &dyn Notifier, application: &Application, status: &str) {
    let notification = StatusNotification::compose(application, status);
    if let Err(error) = notifier.send(&notification).await {
        tracing::error!(
            application_id = application.id,
            %error,
            "failed to send status email"
        );
    }
}

/// Pick the sender for the given mail configuration.
///
/// An unconfigured relay falls back to [`LogNotifier`].
///
/// # Errors
///
/// Returns `NotifyError` if the relay is configured with an invalid host or sender.
///
/// # Panics
///
/// Panics outside a Tokio runtime when the relay is configured, since
/// building the SMTP transport spawns onto the current runtime.
pub fn notifier_from_config(config: &MailConfig) -> Result<Arc<dyn Notifier>, NotifyError> {
    if config.is_configured() {
        Ok(Arc::new(SmtpNotifier::from_config(config)?))
    } else {
        tracing::warn!("mail relay not configured; status emails will only be logged");
        Ok(Arc::new(LogNotifier))
    }
}

/// Writes notifications to the log instead of sending them.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, notification: &StatusNotification) -> Result<(), NotifyError> {
        tracing::info!(
            application_id = notification.application_id,
            to = %notification.to,
            subject = %notification.subject,
            "status email (not sent, relay unconfigured)"
        );
        Ok(())
    }
}

/// Keeps every notification in memory. Used by tests to observe dispatch.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<StatusNotification>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything sent so far, oldest first.
    #[must_use]
    pub fn sent(&self) -> Vec<StatusNotification> {
        self.sent
            .lock()
            .map(|sent| sent.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, notification: &StatusNotification) -> Result<(), NotifyError> {
        self.sent
            .lock()
            .map_err(|_| NotifyError::Other(anyhow::anyhow!("recording outbox poisoned")))?
            .push(notification.clone());
        Ok(())
    }
}
