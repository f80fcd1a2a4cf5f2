//! Core domain concepts shared across the session subdomain.
//!
//! - [`model::Model`]: opaque identifier of a served model
//! - [`error::DomainError`]: domain-level errors
//! - [`text::excerpt`]: UTF-8 safe shortening of long payloads

pub mod error;
pub mod model;
pub mod text;
