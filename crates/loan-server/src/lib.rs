//! # loan-server
//!
//! HTTP front end for loantrack: server-rendered pages over the
//! application, task, and document storage, plus the upload directory.

pub mod error;
pub mod files;
pub mod http;
pub mod pages;
pub mod state;

pub use error::ServerError;
pub use files::FileStore;
pub use pages::Pages;
pub use state::AppState;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn;
use axum::routing::{get, post};

use crate::http::{applications, documents, intake, tasks};

/// Build the full route table over `state`.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.files.max_bytes();

    Router::new()
        .route("/", get(intake::home))
        .route("/apply", get(intake::apply_form))
        .route("/submit", post(intake::submit))
        .route("/dashboard", get(applications::dashboard))
        .route("/application/:app_id", get(applications::detail))
        .route(
            "/update_status/:app_id/:status",
            get(applications::update_status),
        )
        .route("/upload/:app_id", post(documents::upload))
        .route("/documents/:filename", get(documents::download))
        .route("/sign_document/:doc_id", get(documents::sign))
        .route("/complete_task/:task_id", get(tasks::complete))
        .route("/healthz", get(crate::http::healthz))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(from_fn(crate::http::middleware::trace_requests))
        .with_state(state)
}
