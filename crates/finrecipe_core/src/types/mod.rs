//! Parameter roles, validity domains and error types.
//!
//! This module provides:
//! - `domain`: The [`Parameter`] roles and the closed [`Domain`] interval of each
//! - `error`: [`DomainError`], raised when a scalar falls outside its domain
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level.

pub mod domain;
pub mod error;

// Re-export commonly used types at module level
pub use domain::{Domain, Parameter};
pub use error::DomainError;
