//! Parsing of submitted application forms.

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Status assigned to every freshly submitted application.
pub const DEFAULT_STATUS: &str = "New";

/// A validated application submission, ready to be persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewApplication {
    pub applicant_name: String,
    pub email: String,
    pub loan_amount: f64,
}

impl NewApplication {
    /// Build a submission from raw form text.
    ///
    /// Name and email are kept verbatim. The amount must parse as a finite
    /// number; zero and negative amounts are accepted.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the amount is not a finite number.
    pub fn parse(
        applicant_name: impl Into<String>,
        email: impl Into<String>,
        amount: &str,
    ) -> Result<Self, CoreError> {
        Ok(Self {
            applicant_name: applicant_name.into(),
            email: email.into(),
            loan_amount: parse_amount(amount)?,
        })
    }
}

/// Parse a loan amount typed into a form field.
///
/// # Errors
///
/// Returns `CoreError::Validation` for non-numeric text, NaN, or infinities.
pub fn parse_amount(raw: &str) -> Result<f64, CoreError> {
    let trimmed = raw.trim();
    let amount: f64 = trimmed
        .parse()
        .map_err(|_| CoreError::Validation(format!("Invalid loan amount: {trimmed}")))?;
    if !amount.is_finite() {
        return Err(CoreError::Validation(format!(
            "Invalid loan amount: {trimmed}"
        )));
    }
    Ok(amount)
}
