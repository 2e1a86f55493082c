//! AWS-oriented adapters and handlers for the resume-site backend.
//!
//! This crate owns runtime integration details (Lambda handlers, the
//! DynamoDB-backed counter store, and the SES-backed email sender). Domain
//! contracts and configuration live in `resume_api_core`.

pub mod adapters;
pub mod handlers;
