//! Validation errors raised while parsing client input.
//!
//! Storage and delivery failures have their own types (`DatabaseError`,
//! `NotifyError`); they meet this one in `loan-server`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Input failed validation. The message is safe to show to the client.
    #[error("{0}")]
    Validation(String),
}
