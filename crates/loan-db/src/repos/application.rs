//! Application repository: intake, lookup, listing, and status changes.

use chrono::Utc;

use loan_core::entities::{Application, ApplicationDetail, Task};
use loan_core::intake::{DEFAULT_STATUS, NewApplication};
use loan_core::schedule::standard_schedule;

use crate::error::DatabaseError;
use crate::helpers::parse_datetime;
use crate::service::LoanService;

const SELECT_COLS: &str = "id, applicant_name, email, loan_amount, status, created_at";

fn row_to_application(row: &libsql::Row) -> Result<Application, DatabaseError> {
    Ok(Application {
        id: row.get(0)?,
        applicant_name: row.get(1)?,
        email: row.get(2)?,
        loan_amount: row.get(3)?,
        status: row.get(4)?,
        created_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

impl LoanService {
    /// Persist a submission together with its five standard tasks.
    ///
    /// The application row and the task batch commit in one transaction.
    pub async fn create_application(
        &self,
        new: &NewApplication,
    ) -> Result<ApplicationDetail, DatabaseError> {
        let now = Utc::now();
        let _guard = self.begin_write().await;
        let tx = self.db().conn().transaction().await?;

        tx.execute(
            "INSERT INTO applications (applicant_name, email, loan_amount, status, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            libsql::params![
                new.applicant_name.as_str(),
                new.email.as_str(),
                new.loan_amount,
                DEFAULT_STATUS,
                now.to_rfc3339()
            ],
        )
        .await?;
        let id = tx.last_insert_rowid();

        let mut tasks = Vec::new();
        for (name, due_at) in standard_schedule(now) {
            tx.execute(
                "INSERT INTO tasks (application_id, name, due_at, completed) VALUES (?1, ?2, ?3, 0)",
                libsql::params![id, name, due_at.to_rfc3339()],
            )
            .await?;
            tasks.push(Task {
                id: tx.last_insert_rowid(),
                application_id: id,
                name: name.to_string(),
                due_at,
                completed: false,
            });
        }

        tx.commit().await?;
        tracing::info!(application_id = id, tasks = tasks.len(), "application submitted");

        Ok(ApplicationDetail {
            application: Application {
                id,
                applicant_name: new.applicant_name.clone(),
                email: new.email.clone(),
                loan_amount: new.loan_amount,
                status: DEFAULT_STATUS.to_string(),
                created_at: now,
            },
            tasks,
            documents: Vec::new(),
        })
    }

    pub async fn find_application(&self, id: i64) -> Result<Option<Application>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM applications WHERE id = ?1"),
                [id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_application(&row)?)),
            None => Ok(None),
        }
    }

    /// Load an application with its tasks (by due date) and documents (by upload order).
    pub async fn application_detail(
        &self,
        id: i64,
    ) -> Result<Option<ApplicationDetail>, DatabaseError> {
        let Some(application) = self.find_application(id).await? else {
            return Ok(None);
        };
        let tasks = self.tasks_for_application(id).await?;
        let documents = self.documents_for_application(id).await?;
        Ok(Some(ApplicationDetail {
            application,
            tasks,
            documents,
        }))
    }

    /// All applications, newest first.
    pub async fn list_applications(&self) -> Result<Vec<Application>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM applications ORDER BY id DESC"),
                (),
            )
            .await?;

        let mut applications = Vec::new();
        while let Some(row) = rows.next().await? {
            applications.push(row_to_application(&row)?);
        }
        Ok(applications)
    }

    /// Overwrite the status label. Any text is accepted, after any other.
    ///
    /// Returns `None` without touching anything when `id` does not resolve.
    pub async fn update_status(
        &self,
        id: i64,
        status: &str,
    ) -> Result<Option<Application>, DatabaseError> {
        let guard = self.begin_write().await;
        let changed = self
            .db()
            .conn()
            .execute(
                "UPDATE applications SET status = ?1 WHERE id = ?2",
                libsql::params![status, id],
            )
            .await?;
        drop(guard);

        if changed == 0 {
            tracing::debug!(application_id = id, "status update for unknown application");
            return Ok(None);
        }
        tracing::info!(application_id = id, status, "application status updated");
        self.find_application(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{submit, test_service};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn create_application_seeds_five_tasks() {
        let svc = test_service().await;
        let new = NewApplication::parse("Alice", "a@x.com", "5000").unwrap();

        let detail = svc.create_application(&new).await.unwrap();
        let app = &detail.application;
        assert_eq!(app.applicant_name, "Alice");
        assert_eq!(app.email, "a@x.com");
        assert!((app.loan_amount - 5000.0).abs() < f64::EPSILON);
        assert_eq!(app.status, "New");

        let stored = svc.application_detail(app.id).await.unwrap().unwrap();
        assert_eq!(stored.application, detail.application);
        assert_eq!(stored.tasks, detail.tasks);

        let offsets: Vec<i64> = stored
            .tasks
            .iter()
            .map(|t| (t.due_at - app.created_at).num_days())
            .collect();
        assert_eq!(offsets, vec![1, 2, 3, 5, 7]);
        assert!(stored.tasks.iter().all(|t| !t.completed));
        assert!(stored.documents.is_empty());
    }

    #[tokio::test]
    async fn due_dates_are_exact_day_offsets() {
        let svc = test_service().await;
        let detail = submit(&svc, "Exact").await;
        let created = detail.application.created_at;
        for (task, days) in detail.tasks.iter().zip([1, 2, 3, 5, 7]) {
            assert_eq!(task.due_at - created, chrono::Duration::days(days));
        }
    }

    #[tokio::test]
    async fn each_submission_creates_its_own_rows() {
        let svc = test_service().await;
        let first = submit(&svc, "Alice").await;
        let second = submit(&svc, "Alice").await;
        assert_ne!(first.application.id, second.application.id);

        let mut rows = svc
            .db()
            .conn()
            .query("SELECT COUNT(*) FROM tasks", ())
            .await
            .unwrap();
        let count: i64 = rows.next().await.unwrap().unwrap().get(0).unwrap();
        assert_eq!(count, 10);
    }

    #[tokio::test]
    async fn negative_amount_is_stored() {
        let svc = test_service().await;
        let new = NewApplication::parse("Neg", "n@x.com", "-10").unwrap();
        let detail = svc.create_application(&new).await.unwrap();
        let stored = svc
            .find_application(detail.application.id)
            .await
            .unwrap()
            .unwrap();
        assert!((stored.loan_amount + 10.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn list_applications_newest_first() {
        let svc = test_service().await;
        let a = submit(&svc, "Alice").await;
        let b = submit(&svc, "Bob").await;

        let ids: Vec<i64> = svc
            .list_applications()
            .await
            .unwrap()
            .into_iter()
            .map(|app| app.id)
            .collect();
        assert_eq!(ids, vec![b.application.id, a.application.id]);
    }

    #[tokio::test]
    async fn update_status_accepts_any_text_in_any_order() {
        let svc = test_service().await;
        let id = submit(&svc, "Alice").await.application.id;

        for status in ["Approved", "New", "waiting on bank", "Rejected"] {
            let updated = svc.update_status(id, status).await.unwrap().unwrap();
            assert_eq!(updated.status, status);
        }
        let stored = svc.find_application(id).await.unwrap().unwrap();
        assert_eq!(stored.status, "Rejected");
    }

    #[tokio::test]
    async fn update_status_unknown_id_is_none() {
        let svc = test_service().await;
        let id = submit(&svc, "Alice").await.application.id;

        assert!(svc.update_status(id + 100, "Approved").await.unwrap().is_none());
        let untouched = svc.find_application(id).await.unwrap().unwrap();
        assert_eq!(untouched.status, "New");
    }

    #[tokio::test]
    async fn missing_application_detail_is_none() {
        let svc = test_service().await;
        assert!(svc.application_detail(42).await.unwrap().is_none());
        assert!(svc.find_application(42).await.unwrap().is_none());
    }
}
