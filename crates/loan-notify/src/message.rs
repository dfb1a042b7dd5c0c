//! Status-change message composition.

use loan_core::entities::Application;

/// A plain-text email telling an applicant their status changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusNotification {
    pub to: String,
    pub applicant_name: String,
    pub application_id: i64,
    pub status: String,
    pub subject: String,
    pub body: String,
}

impl StatusNotification {
    /// Build the message for `application` moving to `status`.
    #[must_use]
    pub fn compose(application: &Application, status: &str) -> Self {
        let subject = format!("Loan Application #{} Status Update", application.id);
        let body = format!(
            "Hello {},\n\n\
             Your loan application (ID: {}) status has been updated to: {}.\n\n\
             Thank you,\nLoan Management Team",
            application.applicant_name, application.id, status
        );
        Self {
            to: application.email.clone(),
            applicant_name: application.applicant_name.clone(),
            application_id: application.id,
            status: status.to_string(),
            subject,
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn application() -> Application {
        Application {
            id: 17,
            applicant_name: "Alice".into(),
            email: "a@x.com".into(),
            loan_amount: 5000.0,
            status: "Approved".into(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn compose_addresses_applicant() {
        let msg = StatusNotification::compose(&application(), "Approved");
        assert_eq!(msg.to, "a@x.com");
        assert_eq!(msg.application_id, 17);
        assert_eq!(msg.subject, "Loan Application #17 Status Update");
    }

    #[test]
    fn compose_body_text() {
        let msg = StatusNotification::compose(&application(), "In Review");
        assert_eq!(
            msg.body,
            "Hello Alice,\n\nYour loan application (ID: 17) status has been updated to: In Review.\n\nThank you,\nLoan Management Team"
        );
    }
}
