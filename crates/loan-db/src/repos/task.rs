//! Task repository: checklist lookup and completion.

use loan_core::entities::Task;

use crate::error::DatabaseError;
use crate::helpers::{get_flag, parse_datetime};
use crate::service::LoanService;

const SELECT_COLS: &str = "id, application_id, name, due_at, completed";

fn row_to_task(row: &libsql::Row) -> Result<Task, DatabaseError> {
    Ok(Task {
        id: row.get(0)?,
        application_id: row.get(1)?,
        name: row.get(2)?,
        due_at: parse_datetime(&row.get::<String>(3)?)?,
        completed: get_flag(row, 4)?,
    })
}

impl LoanService {
    pub async fn find_task(&self, id: i64) -> Result<Option<Task>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM tasks WHERE id = ?1"), [id])
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_task(&row)?)),
            None => Ok(None),
        }
    }

    pub async fn tasks_for_application(
        &self,
        application_id: i64,
    ) -> Result<Vec<Task>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM tasks WHERE application_id = ?1 ORDER BY due_at, id"
                ),
                [application_id],
            )
            .await?;

        let mut tasks = Vec::new();
        while let Some(row) = rows.next().await? {
            tasks.push(row_to_task(&row)?);
        }
        Ok(tasks)
    }

    /// Mark a task completed. Completing twice is a no-op.
    ///
    /// Returns `None` when `id` does not resolve.
    pub async fn complete_task(&self, id: i64) -> Result<Option<Task>, DatabaseError> {
        let guard = self.begin_write().await;
        let changed = self
            .db()
            .conn()
            .execute("UPDATE tasks SET completed = 1 WHERE id = ?1", [id])
            .await?;
        drop(guard);

        if changed == 0 {
            return Ok(None);
        }
        tracing::info!(task_id = id, "task completed");
        self.find_task(id).await
    }
}
