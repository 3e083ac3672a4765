//! Analytical pricing formulas for European and American options.
//!
//! This module provides closed-form and semi-analytic solutions:
//! - Black-Scholes (1973) for European stock options
//! - Generalised Black-Scholes with cost of carry
//! - Bjerksund-Stensland (1993) approximation for American options
//!
//! ## Design Principles
//!
//! - **Scalar in, scalar out**: every formula is a pure function of `f64` inputs
//! - **Validate before computing**: each argument is checked against its
//!   domain in `finrecipe_core` before any arithmetic
//! - **Two calling conventions**: `try_*` functions return
//!   `Result<f64, AnalyticalError>`; the plain functions treat bad input as a
//!   contract violation and panic
//! - **Never a silent NaN**: non-finite intermediates and results are reported

pub mod american;
pub mod black_scholes;
pub mod distributions;
pub mod error;
pub mod generalized;
pub mod params;

// Re-export main types at module level
pub use american::{
    american_approx, american_call_approx, try_american_approx, try_american_call_approx,
};
pub use black_scholes::{black_scholes, try_black_scholes};
pub use distributions::{cnd, normdist, try_cnd};
pub use error::AnalyticalError;
pub use generalized::{gbs, try_gbs};
pub use params::OptionParams;
