//! End-to-end storage flows against a file-backed database.

use std::sync::Arc;

use loan_core::intake::NewApplication;
use loan_db::service::LoanService;
use tempfile::TempDir;

async fn file_service(dir: &TempDir) -> LoanService {
    let path = dir.path().join("loan_applications.db");
    LoanService::new_local(path.to_str().unwrap()).await.unwrap()
}

#[tokio::test]
async fn concurrent_status_updates_last_write_wins() {
    let dir = TempDir::new().unwrap();
    let svc = Arc::new(file_service(&dir).await);
    let new = NewApplication::parse("Alice", "a@x.com", "5000").unwrap();
    let id = svc.create_application(&new).await.unwrap().application.id;

    let left = {
        let svc = Arc::clone(&svc);
        tokio::spawn(async move { svc.update_status(id, "Approved").await })
    };
    let right = {
        let svc = Arc::clone(&svc);
        tokio::spawn(async move { svc.update_status(id, "Rejected").await })
    };
    left.await.unwrap().unwrap().unwrap();
    right.await.unwrap().unwrap().unwrap();

    let status = svc.find_application(id).await.unwrap().unwrap().status;
    assert!(
        status == "Approved" || status == "Rejected",
        "unexpected final status {status}"
    );
}

#[tokio::test]
async fn state_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let (app_id, task_id, doc_id) = {
        let svc = file_service(&dir).await;
        let new = NewApplication::parse("Bob", "b@x.com", "1200.50").unwrap();
        let detail = svc.create_application(&new).await.unwrap();
        let app_id = detail.application.id;
        let doc = svc
            .create_document(app_id, "paystub.pdf", "paystub.pdf", "Income")
            .await
            .unwrap();
        svc.update_status(app_id, "In Review").await.unwrap();
        svc.complete_task(detail.tasks[0].id).await.unwrap();
        svc.sign_document(doc.id).await.unwrap();
        (app_id, detail.tasks[0].id, doc.id)
    };

    let svc = file_service(&dir).await;
    let detail = svc.application_detail(app_id).await.unwrap().unwrap();
    assert_eq!(detail.application.status, "In Review");
    assert_eq!(detail.tasks.len(), 5);
    assert!(detail.tasks.iter().find(|t| t.id == task_id).unwrap().completed);
    assert_eq!(detail.completed_tasks(), 1);
    assert_eq!(detail.documents.len(), 1);
    assert_eq!(detail.documents[0].id, doc_id);
    assert!(detail.documents[0].signed);
    assert_eq!(detail.documents[0].category, "Income");
}
