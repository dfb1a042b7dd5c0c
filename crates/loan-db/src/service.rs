//! Service layer wrapping the database handle.
//!
//! `LoanService` owns a `LoanDb` and serializes writes on its shared
//! connection. All repo methods are implemented as `impl LoanService`.

use tokio::sync::{Mutex, MutexGuard};

use crate::LoanDb;
use crate::error::DatabaseError;

/// Entry point for every storage operation.
///
/// Reads run freely. Writes take the write lock so a multi-statement write
/// (a transaction) never interleaves with another write on the same
/// connection. The lock does not order concurrent writers: whichever
/// acquires it last wins.
pub struct LoanService {
    db: LoanDb,
    write_lock: Mutex<()>,
}

impl LoanService {
    /// Create a new service over a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = LoanDb::open_local(db_path).await?;
        Ok(Self::from_db(db))
    }

    /// Create from an existing `LoanDb`.
    #[must_use]
    pub fn from_db(db: LoanDb) -> Self {
        Self {
            db,
            write_lock: Mutex::new(()),
        }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &LoanDb {
        &self.db
    }

    pub(crate) async fn begin_write(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn service_new_local() {
        let svc = LoanService::new_local(":memory:").await.unwrap();
        assert!(svc.list_applications().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn write_lock_releases_on_drop() {
        let svc = LoanService::new_local(":memory:").await.unwrap();
        drop(svc.begin_write().await);
        let _guard = svc.begin_write().await;
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn service_is_shareable_across_tasks() {
        assert_send_sync::<LoanService>();
    }
}
