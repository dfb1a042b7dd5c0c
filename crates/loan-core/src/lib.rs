//! # loan-core
//!
//! Core types and rules shared by every loantrack crate.
//!
//! This crate provides:
//! - Entity structs for applications, checklist tasks, and uploaded documents
//! - Intake parsing for new applications
//! - The standard task template seeded at submission time
//! - Upload rules (extension allow-list, filename sanitizing, content types)
//! - Cross-cutting error types

pub mod entities;
pub mod errors;
pub mod intake;
pub mod schedule;
pub mod status;
pub mod uploads;
