//! Dashboard, detail page, and status changes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use loan_notify::notify_status_change;

use super::NoticeQuery;
use crate::error::ServerError;
use crate::state::AppState;

pub async fn dashboard(
    State(state): State<AppState>,
    Query(query): Query<NoticeQuery>,
) -> Result<Html<String>, ServerError> {
    let applications = state.service.list_applications().await?;
    Ok(Html(
        state
            .pages
            .dashboard(&applications, query.notice.as_deref())?,
    ))
}

pub async fn detail(
    State(state): State<AppState>,
    Path(app_id): Path<i64>,
    Query(query): Query<NoticeQuery>,
) -> Result<Response, ServerError> {
    let Some(detail) = state.service.application_detail(app_id).await? else {
        let page = state
            .pages
            .not_found(&format!("Application {app_id} not found"))?;
        return Ok((StatusCode::NOT_FOUND, Html(page)).into_response());
    };
    let page = state.pages.application(
        &detail,
        state.files.allowed_extensions(),
        query.notice.as_deref(),
    )?;
    Ok(Html(page).into_response())
}

/// Set the status label and email the applicant.
///
/// Unknown ids change nothing and send nothing. Either way the browser
/// lands on the dashboard.
pub async fn update_status(
    State(state): State<AppState>,
    Path((app_id, status)): Path<(i64, String)>,
) -> Result<Redirect, ServerError> {
    if let Some(application) = state.service.update_status(app_id, &status).await? {
        notify_status_change(state.notifier.as_ref(), &application, &status).await;
    }
    Ok(Redirect::to("/dashboard"))
}
