//! # loan-db
//!
//! libSQL storage for loantrack.
//!
//! Holds the three relational entities (applications, tasks, documents) in a
//! single local database file. Rows are created and mutated in place; nothing
//! is ever deleted.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle.
///
/// Wraps a libSQL database and the single connection every repo method uses.
pub struct LoanDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl LoanDb {
    /// Open a local database at the given path, creating the file if needed.
    ///
    /// Runs migrations automatically on every open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let loan_db = Self { db, conn };
        loan_db.run_migrations().await?;
        tracing::debug!(path, "opened loan database");
        Ok(loan_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_db() -> LoanDb {
        LoanDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;

        for table in ["applications", "tasks", "documents"] {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [table],
                )
                .await
                .unwrap();
            let row = rows.next().await.unwrap();
            assert!(row.is_some(), "table '{table}' should exist");
        }
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn schema_defaults_apply() {
        let db = test_db().await;
        db.conn()
            .execute(
                "INSERT INTO applications (applicant_name, email, loan_amount) VALUES ('Ann', 'ann@x.com', 10.0)",
                (),
            )
            .await
            .unwrap();

        let mut rows = db
            .conn()
            .query("SELECT status, created_at FROM applications", ())
            .await
            .unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<String>(0).unwrap(), "New");
        assert!(helpers::parse_datetime(&row.get::<String>(1).unwrap()).is_ok());
    }

    #[tokio::test]
    async fn task_requires_existing_application() {
        let db = test_db().await;
        let result = db
            .conn()
            .execute(
                "INSERT INTO tasks (application_id, name, due_at) VALUES (999, 'Orphan', '2026-01-01 00:00:00')",
                (),
            )
            .await;
        assert!(result.is_err(), "foreign key should reject orphan task");
    }

    #[tokio::test]
    async fn file_database_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("loans.db");
        let path = path.to_str().unwrap();

        {
            let db = LoanDb::open_local(path).await.unwrap();
            db.conn()
                .execute(
                    "INSERT INTO applications (applicant_name, email, loan_amount) VALUES ('Ann', 'ann@x.com', 10.0)",
                    (),
                )
                .await
                .unwrap();
        }

        let db = LoanDb::open_local(path).await.unwrap();
        let mut rows = db
            .conn()
            .query("SELECT COUNT(*) FROM applications", ())
            .await
            .unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<i64>(0).unwrap(), 1);
    }
}
