use axum::extract::{Path, State};
use axum::response::Redirect;

use super::{to_application, to_dashboard_with_notice};
use crate::error::ServerError;
use crate::state::AppState;

pub async fn complete(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
) -> Result<Redirect, ServerError> {
    match state.service.complete_task(task_id).await? {
        Some(task) => Ok(to_application(task.application_id)),
        None => Ok(to_dashboard_with_notice(&format!("Task {task_id} not found"))),
    }
}
