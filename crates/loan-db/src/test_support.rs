//! Shared test utilities for loan-db unit tests.

use loan_core::entities::ApplicationDetail;
use loan_core::intake::NewApplication;

use crate::service::LoanService;

/// Create an in-memory service.
pub async fn test_service() -> LoanService {
    LoanService::new_local(":memory:").await.unwrap()
}

/// Submit an application for `name` and return it with its seeded tasks.
pub async fn submit(svc: &LoanService, name: &str) -> ApplicationDetail {
    let email = format!("{}@example.com", name.to_lowercase());
    let new = NewApplication::parse(name, email, "5000").unwrap();
    svc.create_application(&new).await.unwrap()
}
