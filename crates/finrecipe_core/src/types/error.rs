//! Error types for domain validation.
//!
//! This module provides:
//! - `DomainError`: A scalar input fell outside the validity domain of its role

use thiserror::Error;

use super::domain::Parameter;

/// Domain-contract violations.
///
/// Produced when a scalar handed to a pricing formula is not finite or lies
/// outside the closed interval documented for its [`Parameter`] role.
///
/// # Variants
/// - `NotFinite`: NaN or ±∞
/// - `OutOfRange`: finite but outside `[min, max]`
///
/// # Examples
/// ```
/// use finrecipe_core::types::{DomainError, Parameter};
///
/// let err = DomainError::OutOfRange {
///     parameter: Parameter::Expiry,
///     value: 25.0,
///     min: 0.5,
///     max: 20.0,
/// };
/// assert_eq!(
///     format!("{}", err),
///     "time to expiry (T) = 25 outside valid range [0.5, 20]"
/// );
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DomainError {
    /// Value is NaN or infinite.
    #[error("{parameter} = {value} is not a finite number")]
    NotFinite {
        /// Role of the offending argument
        parameter: Parameter,
        /// The offending value
        value: f64,
    },

    /// Value is finite but outside the closed validity interval.
    #[error("{parameter} = {value} outside valid range [{min}, {max}]")]
    OutOfRange {
        /// Role of the offending argument
        parameter: Parameter,
        /// The offending value
        value: f64,
        /// Lower bound of the interval
        min: f64,
        /// Upper bound of the interval
        max: f64,
    },
}

impl DomainError {
    /// Returns the parameter role that failed validation.
    pub fn parameter(&self) -> Parameter {
        match self {
            DomainError::NotFinite { parameter, .. }
            | DomainError::OutOfRange { parameter, .. } => *parameter,
        }
    }

    /// Returns the rejected value.
    pub fn value(&self) -> f64 {
        match self {
            DomainError::NotFinite { value, .. } | DomainError::OutOfRange { value, .. } => *value,
        }
    }
}
