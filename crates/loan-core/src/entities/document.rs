use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An uploaded file attached to an application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    pub id: i64,
    pub application_id: i64,
    /// Storage key under the upload directory.
    pub filename: String,
    /// Sanitized name as submitted by the uploader.
    pub original_filename: String,
    pub category: String,
    pub signed: bool,
    pub uploaded_at: DateTime<Utc>,
}
