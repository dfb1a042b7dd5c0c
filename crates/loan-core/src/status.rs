//! Application status labels.
//!
//! Status is free text. Any label may follow any other and there is no
//! terminal state. The suggestions below only feed the quick links on the
//! detail page.

pub use crate::intake::DEFAULT_STATUS;

/// Labels offered as one-click updates on the detail page.
pub const SUGGESTED_STATUSES: [&str; 5] = ["New", "In Review", "Approved", "Rejected", "Funded"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_status_is_first_suggestion() {
        assert_eq!(SUGGESTED_STATUSES[0], DEFAULT_STATUS);
    }
}
