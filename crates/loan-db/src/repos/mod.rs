//! Repository modules implementing the storage operations.
//!
//! Each module adds methods to `LoanService` via `impl LoanService` blocks.
//! Identifier lookups return `Option` so every caller decides what a
//! missing row means.

pub mod application;
pub mod document;
pub mod task;
