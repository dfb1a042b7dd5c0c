//! Server-rendered pages.
//!
//! Templates are embedded at compile time and rendered with handlebars.
//! View structs pre-format timestamps and amounts so templates stay dumb.

use handlebars::Handlebars;
use loan_core::entities::{Application, ApplicationDetail, Document, Task};
use loan_core::status::SUGGESTED_STATUSES;
use serde::Serialize;

use crate::error::ServerError;

const TEMPLATES: [(&str, &str); 4] = [
    ("apply", include_str!("../templates/apply.hbs")),
    ("dashboard", include_str!("../templates/dashboard.hbs")),
    ("application", include_str!("../templates/application.hbs")),
    ("not_found", include_str!("../templates/not_found.hbs")),
];

const PARTIALS: [(&str, &str); 2] = [
    ("header", include_str!("../templates/header.hbs")),
    ("footer", include_str!("../templates/footer.hbs")),
];

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

#[derive(Serialize)]
struct ApplicationRow<'a> {
    id: i64,
    applicant_name: &'a str,
    email: &'a str,
    amount: String,
    status: &'a str,
    created: String,
}

impl<'a> From<&'a Application> for ApplicationRow<'a> {
    fn from(app: &'a Application) -> Self {
        Self {
            id: app.id,
            applicant_name: &app.applicant_name,
            email: &app.email,
            amount: format!("{:.2}", app.loan_amount),
            status: &app.status,
            created: app.created_at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

#[derive(Serialize)]
struct TaskRow<'a> {
    id: i64,
    name: &'a str,
    due: String,
    completed: bool,
}

impl<'a> From<&'a Task> for TaskRow<'a> {
    fn from(task: &'a Task) -> Self {
        Self {
            id: task.id,
            name: &task.name,
            due: task.due_at.format("%Y-%m-%d").to_string(),
            completed: task.completed,
        }
    }
}

#[derive(Serialize)]
struct DocumentRow<'a> {
    id: i64,
    name: &'a str,
    href: String,
    category: &'a str,
    signed: bool,
    uploaded: String,
}

impl<'a> From<&'a Document> for DocumentRow<'a> {
    fn from(doc: &'a Document) -> Self {
        Self {
            id: doc.id,
            name: &doc.original_filename,
            href: format!("/documents/{}", urlencoding::encode(&doc.filename)),
            category: &doc.category,
            signed: doc.signed,
            uploaded: doc.uploaded_at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

#[derive(Serialize)]
struct StatusLink {
    label: &'static str,
    href: String,
}

#[derive(Serialize)]
struct ApplyView {
    title: &'static str,
    notice: Option<String>,
}

#[derive(Serialize)]
struct DashboardView<'a> {
    title: &'static str,
    notice: Option<&'a str>,
    applications: Vec<ApplicationRow<'a>>,
}

#[derive(Serialize)]
struct DetailView<'a> {
    title: String,
    notice: Option<&'a str>,
    application: ApplicationRow<'a>,
    statuses: Vec<StatusLink>,
    tasks: Vec<TaskRow<'a>>,
    documents: Vec<DocumentRow<'a>>,
    completed: usize,
    total: usize,
    accept: String,
}

#[derive(Serialize)]
struct NotFoundView<'a> {
    title: &'static str,
    notice: Option<String>,
    message: &'a str,
}

/// Compiled page templates.
pub struct Pages {
    registry: Handlebars<'static>,
}

impl Pages {
    /// Compile every embedded template.
    ///
    /// # Errors
    ///
    /// Returns `ServerError::Template` if a template does not parse.
    pub fn new() -> Result<Self, ServerError> {
        let mut registry = Handlebars::new();
        for (name, source) in PARTIALS {
            registry.register_partial(name, source)?;
        }
        for (name, source) in TEMPLATES {
            registry.register_template_string(name, source)?;
        }
        Ok(Self { registry })
    }

    /// Submission form.
    pub fn apply(&self) -> Result<String, ServerError> {
        let view = ApplyView {
            title: "Apply",
            notice: None,
        };
        Ok(self.registry.render("apply", &view)?)
    }

    /// Listing of every application.
    pub fn dashboard(
        &self,
        applications: &[Application],
        notice: Option<&str>,
    ) -> Result<String, ServerError> {
        let view = DashboardView {
            title: "Dashboard",
            notice,
            applications: applications.iter().map(ApplicationRow::from).collect(),
        };
        Ok(self.registry.render("dashboard", &view)?)
    }

    /// One application with its checklist, documents, and upload form.
    pub fn application(
        &self,
        detail: &ApplicationDetail,
        allowed_extensions: &[String],
        notice: Option<&str>,
    ) -> Result<String, ServerError> {
        let app = &detail.application;
        let statuses = SUGGESTED_STATUSES
            .iter()
            .map(|&label| StatusLink {
                label,
                href: format!("/update_status/{}/{}", app.id, urlencoding::encode(label)),
            })
            .collect();
        let accept = allowed_extensions
            .iter()
            .map(|ext| format!(".{ext}"))
            .collect::<Vec<_>>()
            .join(",");

        let view = DetailView {
            title: format!("Application #{}", app.id),
            notice,
            application: ApplicationRow::from(app),
            statuses,
            tasks: detail.tasks.iter().map(TaskRow::from).collect(),
            documents: detail.documents.iter().map(DocumentRow::from).collect(),
            completed: detail.completed_tasks(),
            total: detail.tasks.len(),
            accept,
        };
        Ok(self.registry.render("application", &view)?)
    }

    /// Body of a 404 page.
    pub fn not_found(&self, message: &str) -> Result<String, ServerError> {
        let view = NotFoundView {
            title: "Not found",
            notice: None,
            message,
        };
        Ok(self.registry.render("not_found", &view)?)
    }
}
