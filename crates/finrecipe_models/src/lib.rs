//! # finrecipe_models: Option Pricing Formulas
//!
//! Closed-form and semi-analytic option formulas on scalar inputs.
//!
//! This crate provides:
//! - The cumulative normal distribution used by every formula
//! - Plain and generalised Black-Scholes European pricers
//! - The Bjerksund-Stensland American approximation with put-call transform
//! - A validated parameter bundle for callers that price several styles
//!
//! ## Usage Examples
//!
//! ```rust
//! use finrecipe_models::analytical::{american_approx, black_scholes, cnd, gbs};
//!
//! let phi: f64 = cnd(0.0);
//! let european = black_scholes(true, 100.0, 100.0, 1.0, 0.05, 0.3);
//! let generalised = gbs(true, 100.0, 100.0, 1.0, 0.05, 0.05, 0.3);
//! let american = american_approx(false, 100.0, 100.0, 1.0, 0.05, 0.05, 0.3);
//!
//! # assert!((phi - 0.5).abs() < 1e-6);
//! # assert!((european - generalised).abs() < 1e-12);
//! # assert!(american > 0.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `OptionParams` and the domain types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
