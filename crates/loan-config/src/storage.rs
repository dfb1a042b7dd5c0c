//! Database location.

use serde::{Deserialize, Serialize};

fn default_database_path() -> String {
    "loan_applications.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Path of the libSQL database file, created on first run.
    /// `":memory:"` keeps everything in process.
    #[serde(default = "default_database_path")]
    pub database_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
        }
    }
}

impl StorageConfig {
    /// Whether the database lives only in memory.
    pub fn is_in_memory(&self) -> bool {
        self.database_path == ":memory:"
    }
}
