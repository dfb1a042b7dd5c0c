//! Entity structs for all loantrack domain objects.
//!
//! Each entity maps to a table in the libSQL database. All structs derive
//! `Serialize` and `Deserialize` so pages can render them directly.

mod application;
mod document;
mod task;

pub use application::{Application, ApplicationDetail};
pub use document::Document;
pub use task::Task;
