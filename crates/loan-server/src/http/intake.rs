//! Application form and submission.

use axum::Form;
use axum::extract::State;
use axum::response::{Html, Redirect};
use loan_core::intake::NewApplication;
use serde::Deserialize;

use crate::error::ServerError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SubmitForm {
    pub name: String,
    pub email: String,
    pub amount: String,
}

pub async fn home() -> Redirect {
    Redirect::to("/apply")
}

pub async fn apply_form(State(state): State<AppState>) -> Result<Html<String>, ServerError> {
    Ok(Html(state.pages.apply()?))
}

/// Persist a submission and its checklist, then show the dashboard.
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<SubmitForm>,
) -> Result<Redirect, ServerError> {
    let new = NewApplication::parse(form.name, form.email, &form.amount)?;
    state.service.create_application(&new).await?;
    Ok(Redirect::to("/dashboard"))
}
