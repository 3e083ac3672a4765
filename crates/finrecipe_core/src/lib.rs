//! # finrecipe_core: Input Contracts for Option Formulas
//!
//! ## Foundation Layer Role
//!
//! finrecipe_core is the bottom layer of the workspace, providing:
//! - Parameter roles and validity domains (`types::domain`)
//! - Domain-contract errors: `DomainError` (`types::error`)
//! - Validation predicates, checked forms and the `enforce` contract utility
//!   (`validation`)
//!
//! ## Zero Dependency Principle
//!
//! This crate has no dependencies on other finrecipe crates, with minimal
//! external dependencies:
//! - thiserror: Error derive
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use finrecipe_core::types::Parameter;
//! use finrecipe_core::validation::{check, is_valid_time};
//!
//! // One trading hour is the shortest admissible expiry
//! assert!(is_valid_time(1.0 / (253.0 * 24.0)));
//! assert!(!is_valid_time(0.0));
//!
//! let err = check(Parameter::Spot, -5.0).unwrap_err();
//! assert_eq!(err.parameter(), Parameter::Spot);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `Parameter`, `Domain` and `DomainError`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;
pub mod validation;

pub use types::{Domain, DomainError, Parameter};
