//! Standard checklist seeded for every new application.

use chrono::{DateTime, Duration, Utc};

/// `(task name, due offset in days)` pairs, in checklist order.
pub const STANDARD_TASKS: [(&str, i64); 5] = [
    ("Initial Review", 1),
    ("Document Verification", 2),
    ("Credit Check", 3),
    ("Approval Meeting", 5),
    ("Funds Disbursement", 7),
];

/// Compute the five `(name, due_at)` pairs for an application created at `created_at`.
///
/// Offsets are static: they never depend on the completion of earlier tasks.
#[must_use]
pub fn standard_schedule(created_at: DateTime<Utc>) -> Vec<(&'static str, DateTime<Utc>)> {
    STANDARD_TASKS
        .iter()
        .map(|&(name, days)| (name, created_at + Duration::days(days)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn schedule_has_five_tasks_in_order() {
        let created = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap();
        let names: Vec<_> = standard_schedule(created).into_iter().map(|(n, _)| n).collect();
        assert_eq!(
            names,
            vec![
                "Initial Review",
                "Document Verification",
                "Credit Check",
                "Approval Meeting",
                "Funds Disbursement",
            ]
        );
    }

    #[test]
    fn due_dates_are_offsets_from_creation() {
        let created = Utc.with_ymd_and_hms(2026, 2, 26, 23, 0, 0).unwrap();
        let offsets: Vec<i64> = standard_schedule(created)
            .into_iter()
            .map(|(_, due)| (due - created).num_days())
            .collect();
        assert_eq!(offsets, vec![1, 2, 3, 5, 7]);

        let (_, last) = standard_schedule(created)[4];
        assert_eq!(last, Utc.with_ymd_and_hms(2026, 3, 5, 23, 0, 0).unwrap());
    }
}
