//! Request handlers, grouped by the entity they act on.

pub mod applications;
pub mod documents;
pub mod intake;
pub mod middleware;
pub mod tasks;

use axum::response::Redirect;
use serde::Deserialize;

/// Optional banner text carried on page URLs.
#[derive(Debug, Default, Deserialize)]
pub struct NoticeQuery {
    pub notice: Option<String>,
}

/// Redirect to an application's detail page.
pub(crate) fn to_application(id: i64) -> Redirect {
    Redirect::to(&format!("/application/{id}"))
}

/// Redirect to the dashboard with a banner.
pub(crate) fn to_dashboard_with_notice(notice: &str) -> Redirect {
    Redirect::to(&format!("/dashboard?notice={}", urlencoding::encode(notice)))
}

pub async fn healthz() -> &'static str {
    "ok"
}
