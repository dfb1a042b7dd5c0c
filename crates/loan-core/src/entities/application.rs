use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Document, Task};

/// A single loan request and its current processing stage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Application {
    pub id: i64,
    pub applicant_name: String,
    pub email: String,
    pub loan_amount: f64,
    /// Free-text label; any value may follow any other.
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// An application together with its checklist and uploaded documents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApplicationDetail {
    pub application: Application,
    pub tasks: Vec<Task>,
    pub documents: Vec<Document>,
}

impl ApplicationDetail {
    /// Number of checklist tasks already completed.
    #[must_use]
    pub fn completed_tasks(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }
}
