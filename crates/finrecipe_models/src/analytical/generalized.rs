//! Generalised Black-Scholes (GBS) with cost of carry.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^((b-r)T)·N(d₁) - X·e^(-rT)·N(d₂)
//! **Put Price**: P = X·e^(-rT)·N(-d₂) - S·e^((b-r)T)·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/X) + (b + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! The cost of carry `b` selects the underlying:
//! - b = r: stock without dividends (Black-Scholes 1973)
//! - b = r - q: stock with continuous yield q (Merton 1973)
//! - b = 0: futures (Black 1976)
//! - b = r - r_f: currency (Garman-Kohlhagen 1983)

use finrecipe_core::validation::{
    check_cost_of_carry, check_interest_rate, check_price, check_strike, check_time,
    check_volatility, enforce,
};

use super::distributions::cnd;
use super::error::{finite, AnalyticalError};

/// Computes a generalised European option price, returning an error on bad input.
///
/// # Arguments
/// * `is_call` - True for call, false for put
/// * `s` - Spot price
/// * `x` - Strike price
/// * `t` - Time to expiry in trading years
/// * `r` - Risk-free rate
/// * `b` - Cost of carry
/// * `v` - Volatility
///
/// # Errors
/// - `AnalyticalError::Domain` if any argument is outside its domain
/// - `AnalyticalError::NumericalInstability` if `σ√T` or the price is not finite
///
/// # Examples
/// ```
/// use finrecipe_models::analytical::try_gbs;
///
/// // Black (1976) futures option: b = 0
/// let price = try_gbs(true, 19.0, 19.0, 0.75, 0.10, 0.0, 0.28).unwrap();
/// assert!((price - 1.7011).abs() < 1e-3);
/// ```
pub fn try_gbs(
    is_call: bool,
    s: f64,
    x: f64,
    t: f64,
    r: f64,
    b: f64,
    v: f64,
) -> Result<f64, AnalyticalError> {
    let s = check_price(s)?;
    let x = check_strike(x)?;
    let t = check_time(t)?;
    let r = check_interest_rate(r)?;
    let b = check_cost_of_carry(b)?;
    let v = check_volatility(v)?;

    let vst = finite("vst", v * t.sqrt())?;
    let d1 = finite("d1", ((s / x).ln() + (b + v * v / 2.0) * t) / vst)?;
    let d2 = finite("d2", d1 - vst)?;
    let ebrt = ((b - r) * t).exp();
    let ert = (-r * t).exp();

    let price = if is_call {
        s * ebrt * cnd(d1) - x * ert * cnd(d2)
    } else {
        x * ert * cnd(-d2) - s * ebrt * cnd(-d1)
    };

    finite("result", price)
}

/// Computes a generalised European option price.
///
/// Same as [`try_gbs`] but treats invalid input as a contract violation.
///
/// # Panics
/// If any argument is outside its domain, or the price is not finite.
///
/// # Examples
/// ```
/// use finrecipe_models::analytical::{black_scholes, gbs};
///
/// // b = r reduces to plain Black-Scholes
/// let generalised = gbs(true, 100.0, 95.0, 0.5, 0.05, 0.05, 0.25);
/// let plain = black_scholes(true, 100.0, 95.0, 0.5, 0.05, 0.25);
/// assert!((generalised - plain).abs() < 1e-12);
/// ```
#[track_caller]
pub fn gbs(is_call: bool, s: f64, x: f64, t: f64, r: f64, b: f64, v: f64) -> f64 {
    enforce(try_gbs(is_call, s, x, t, r, b, v))
}
