//! Document repository: upload records and signing.

use chrono::Utc;

use loan_core::entities::Document;

use crate::error::DatabaseError;
use crate::helpers::{flag, get_flag, parse_datetime};
use crate::service::LoanService;

const SELECT_COLS: &str =
    "id, application_id, filename, original_filename, category, signed, uploaded_at";

fn row_to_document(row: &libsql::Row) -> Result<Document, DatabaseError> {
    Ok(Document {
        id: row.get(0)?,
        application_id: row.get(1)?,
        filename: row.get(2)?,
        original_filename: row.get(3)?,
        category: row.get(4)?,
        signed: get_flag(row, 5)?,
        uploaded_at: parse_datetime(&row.get::<String>(6)?)?,
    })
}

impl LoanService {
    /// Record an uploaded file. The bytes must already be in the file store.
    pub async fn create_document(
        &self,
        application_id: i64,
        filename: &str,
        original_filename: &str,
        category: &str,
    ) -> Result<Document, DatabaseError> {
        let now = Utc::now();
        let guard = self.begin_write().await;
        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO documents ({SELECT_COLS}) VALUES (NULL, ?1, ?2, ?3, ?4, ?5, ?6)"
                ),
                libsql::params![
                    application_id,
                    filename,
                    original_filename,
                    category,
                    flag(false),
                    now.to_rfc3339()
                ],
            )
            .await?;
        let id = self.db().conn().last_insert_rowid();
        drop(guard);

        tracing::info!(document_id = id, application_id, filename, "document stored");
        Ok(Document {
            id,
            application_id,
            filename: filename.to_string(),
            original_filename: original_filename.to_string(),
            category: category.to_string(),
            signed: false,
            uploaded_at: now,
        })
    }

    pub async fn find_document(&self, id: i64) -> Result<Option<Document>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM documents WHERE id = ?1"),
                [id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_document(&row)?)),
            None => Ok(None),
        }
    }

    pub async fn documents_for_application(
        &self,
        application_id: i64,
    ) -> Result<Vec<Document>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM documents WHERE application_id = ?1 ORDER BY id"
                ),
                [application_id],
            )
            .await?;

        let mut documents = Vec::new();
        while let Some(row) = rows.next().await? {
            documents.push(row_to_document(&row)?);
        }
        Ok(documents)
    }

    /// Number of document rows pointing at one storage key.
    pub async fn count_documents_with_filename(&self, filename: &str) -> Result<u64, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query("SELECT COUNT(*) FROM documents WHERE filename = ?1", [filename])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let count = row.get::<i64>(0)?;
        u64::try_from(count)
            .map_err(|_| DatabaseError::CorruptRow(format!("negative count {count}")))
    }

    /// Mark a document signed. Signing twice is a no-op.
    ///
    /// Returns `None` when `id` does not resolve.
    pub async fn sign_document(&self, id: i64) -> Result<Option<Document>, DatabaseError> {
        let guard = self.begin_write().await;
        let changed = self
            .db()
            .conn()
            .execute("UPDATE documents SET signed = 1 WHERE id = ?1", [id])
            .await?;
        drop(guard);

        if changed == 0 {
            return Ok(None);
        }
        tracing::info!(document_id = id, "document signed");
        self.find_document(id).await
    }
}
