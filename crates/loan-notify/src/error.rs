//! Notification error types.

use thiserror::Error;

/// Errors from composing or delivering a notification.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Sender or recipient is not a valid mailbox.
    #[error("Invalid address '{address}': {source}")]
    Address {
        address: String,
        #[source]
        source: lettre::address::AddressError,
    },

    /// The message could not be assembled.
    #[error("Failed to build message: {0}")]
    Message(#[from] lettre::error::Error),

    /// The relay refused the message or could not be reached.
    #[error("Mail transport failed: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
