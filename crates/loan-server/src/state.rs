//! Shared handles injected into every handler.

use std::sync::Arc;

use loan_config::LoanConfig;
use loan_db::service::LoanService;
use loan_notify::{Notifier, notifier_from_config};

use crate::error::ServerError;
use crate::files::FileStore;
use crate::pages::Pages;

/// Handles built once at startup and cloned into each request.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<LoanService>,
    pub files: Arc<FileStore>,
    pub notifier: Arc<dyn Notifier>,
    pub pages: Arc<Pages>,
}

impl AppState {
    /// Assemble state from already-opened handles.
    ///
    /// # Errors
    ///
    /// Returns `ServerError::Template` if an embedded template fails to parse.
    pub fn new(
        service: LoanService,
        files: FileStore,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, ServerError> {
        Ok(Self {
            service: Arc::new(service),
            files: Arc::new(files),
            notifier,
            pages: Arc::new(Pages::new()?),
        })
    }

    /// Open the database, upload directory, and mail sender named by `config`.
    ///
    /// # Errors
    ///
    /// Returns `ServerError` if any of them cannot be opened.
    pub async fn from_config(config: &LoanConfig) -> Result<Self, ServerError> {
        let service = LoanService::new_local(&config.storage.database_path).await?;
        let files = FileStore::open(&config.uploads)?;
        let notifier = notifier_from_config(&config.mail)?;
        tracing::info!(
            database = %config.storage.database_path,
            uploads = %files.root().display(),
            collision = ?config.uploads.collision,
            "storage ready"
        );
        Self::new(service, files, notifier)
    }
}
