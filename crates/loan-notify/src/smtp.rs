//! Delivery through an SMTP relay.

use std::time::Duration;

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use loan_config::MailConfig;

use crate::error::NotifyError;
use crate::message::StatusNotification;
use crate::Notifier;

fn parse_mailbox(address: &str) -> Result<Mailbox, NotifyError> {
    address.parse().map_err(|source| NotifyError::Address {
        address: address.to_string(),
        source,
    })
}

/// Sends each notification once through the configured relay.
pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpNotifier {
    /// Build a sender from the mail section of the configuration.
    ///
    /// No connection is opened until the first send.
    ///
    /// # Errors
    ///
    /// Returns `NotifyError` if the relay host or sender address is invalid.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime: the pooled transport
    /// spawns its connection reaper on construction.
    pub fn from_config(config: &MailConfig) -> Result<Self, NotifyError> {
        let builder = if config.starttls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
        };
        let transport = builder
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .timeout(Some(Duration::from_secs(config.timeout_secs)))
            .build();

        Ok(Self {
            transport,
            from: parse_mailbox(&config.default_sender)?,
        })
    }

    fn build_message(&self, notification: &StatusNotification) -> Result<Message, NotifyError> {
        Ok(Message::builder()
            .from(self.from.clone())
            .to(parse_mailbox(&notification.to)?)
            .subject(notification.subject.as_str())
            .header(ContentType::TEXT_PLAIN)
            .body(notification.body.clone())?)
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn send(&self, notification: &StatusNotification) -> Result<(), NotifyError> {
        let message = self.build_message(notification)?;
        self.transport.send(message).await?;
        tracing::info!(
            application_id = notification.application_id,
            to = %notification.to,
            "status email sent"
        );
        Ok(())
    }
}
