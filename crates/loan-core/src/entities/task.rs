use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A checklist item seeded for an application at submission time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: i64,
    pub application_id: i64,
    pub name: String,
    pub due_at: DateTime<Utc>,
    pub completed: bool,
}
