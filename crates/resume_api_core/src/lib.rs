//! Shared resume-backend domain primitives.
//!
//! This crate owns the persisted counter contract, the contact-form message
//! contract, email composition, and deployment configuration. It intentionally
//! excludes AWS SDK and Lambda runtime concerns.

pub mod compose;
pub mod config;
pub mod contract;
