//! Bjerksund-Stensland (1993) approximation for American options.
//!
//! The early-exercise boundary of an American call is approximated by a flat
//! trigger price `I`. Below `I` the option value is a closed-form combination
//! of the auxiliary function `phi`; at or above `I` the option is exercised
//! immediately.
//!
//! ## Boundary
//!
//! - β = (1/2 - b/σ²) + √((b/σ² - 1/2)² + 2r/σ²)
//! - B∞ = β/(β-1)·X
//! - B₀ = max(X, r/(r-b)·X)
//! - h(T) = -(bT + 2σ√T)·B₀/(B∞ - B₀)
//! - I = B₀ + (B∞ - B₀)(1 - e^h(T))
//!
//! ## Value below the boundary
//!
//! C = α·S^β - α·φ(S,T,β,I,I) + φ(S,T,1,I,I) - φ(S,T,1,X,I)
//!     - X·φ(S,T,0,I,I) + X·φ(S,T,0,X,I),  α = (I - X)·I^(-β)
//!
//! Puts use the put-call transformation
//! P(S, X, T, r, b, σ) = C(X, S, T, r - b, -b, σ), which is exact under the
//! model. Because the transformed rate `r - b` must itself be a valid rate,
//! puts require `b <= r`.

use finrecipe_core::validation::{
    check_cost_of_carry, check_interest_rate, check_price, check_strike, check_time,
    check_volatility, enforce,
};
use tracing::{debug, trace};

use super::distributions::cnd;
use super::error::{finite, AnalyticalError};
use super::generalized::try_gbs;

/// Auxiliary function φ(S, T, γ, H, I) of the approximation.
///
/// The operation order follows the published formula term by term; the
/// approximation cancels large terms against each other, so reordering
/// changes results in the last digits.
#[allow(clippy::too_many_arguments)]
fn phi(
    s: f64,
    t: f64,
    gamma: f64,
    h: f64,
    i: f64,
    r: f64,
    b: f64,
    v: f64,
) -> Result<f64, AnalyticalError> {
    let s = check_price(s)?;
    let t = check_time(t)?;
    let r = check_interest_rate(r)?;
    let v = check_volatility(v)?;

    let vst = v * t.sqrt();
    let vv = v * v;

    let lambda = (-r + gamma * b + 0.5 * gamma * (gamma - 1.0) * vv) * t;
    let d = finite("d", -((s / h).ln() + (b + (gamma - 0.5) * vv) * t) / vst)?;
    let d_reflected = finite("d_reflected", d - 2.0 * (i / s).ln() / vst)?;
    let kappa = 2.0 * b / vv + (2.0 * gamma - 1.0);

    Ok(lambda.exp() * s.powf(gamma) * (cnd(d) - (i / s).powf(kappa) * cnd(d_reflected)))
}

/// Approximates an American call price, returning an error on bad input.
///
/// When `b >= r` early exercise is never optimal and the generalised European
/// price is returned.
///
/// # Arguments
/// * `s` - Spot price
/// * `x` - Strike price
/// * `t` - Time to expiry in trading years
/// * `r` - Risk-free rate
/// * `b` - Cost of carry
/// * `v` - Volatility
///
/// # Errors
/// - `AnalyticalError::Domain` if an argument is outside its domain
/// - `AnalyticalError::NumericalInstability` naming the first boundary
///   quantity (`vv`, `Beta`, `BInfinity`, `B0`, `ht`, `I`), `phi` argument
///   (`d`, `d_reflected`) or the result that is not finite
///
/// # Examples
/// ```
/// use finrecipe_models::analytical::try_american_call_approx;
///
/// let price = try_american_call_approx(42.0, 40.0, 0.75, 0.04, -0.04, 0.35).unwrap();
/// assert!((price - 5.2704).abs() < 1e-4);
/// ```
pub fn try_american_call_approx(
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
    let v = check_volatility(v)?;

    if b >= r {
        debug!(b, r, "cost of carry at or above rate, pricing as European");
        return try_gbs(true, s, x, t, r, b, v);
    }

    let vv = finite("vv", v * v)?;

    let skew = b / vv - 0.5;
    let beta = finite("Beta", (0.5 - b / vv) + (skew * skew + 2.0 * r / vv).sqrt())?;
    let b_infinity = finite("BInfinity", beta / (beta - 1.0) * x)?;
    let b0 = finite("B0", x.max(r / (r - b) * x))?;
    let ht = finite("ht", -(b * t + 2.0 * v * t.sqrt()) * b0 / (b_infinity - b0))?;
    let i = finite("I", b0 + (b_infinity - b0) * (1.0 - ht.exp()))?;

    trace!(beta, b_infinity, b0, ht, boundary = i, "exercise boundary");

    if s >= i {
        debug!(s, boundary = i, "spot at or beyond exercise boundary");
        return Ok(s - x);
    }

    let alpha = (i - x) * i.powf(-beta);

    let phi_beta = phi(s, t, beta, i, i, r, b, v)?;
    let phi_one_i = phi(s, t, 1.0, i, i, r, b, v)?;
    let phi_one_x = phi(s, t, 1.0, x, i, r, b, v)?;
    let phi_zero_i = phi(s, t, 0.0, i, i, r, b, v)?;
    let phi_zero_x = phi(s, t, 0.0, x, i, r, b, v)?;

    let value = alpha * s.powf(beta) - alpha * phi_beta + phi_one_i
        - phi_one_x
        - x * phi_zero_i
        + x * phi_zero_x;

    finite("result", value)
}

/// Approximates an American call price.
///
/// Same as [`try_american_call_approx`] but treats invalid input and
/// numerical degeneracy as contract violations.
///
/// # Panics
/// If an argument is outside its domain or a boundary quantity is not finite.
#[track_caller]
pub fn american_call_approx(s: f64, x: f64, t: f64, r: f64, b: f64, v: f64) -> f64 {
    enforce(try_american_call_approx(s, x, t, r, b, v))
}

/// Approximates an American call or put price, returning an error on bad input.
///
/// Calls go straight to [`try_american_call_approx`]. Puts are priced as the
/// call with spot and strike swapped, rate `r - b` and carry `-b`.
///
/// # Errors
/// As [`try_american_call_approx`]. For puts the domain check on the rate
/// applies to `r - b`, so `b > r` is rejected.
///
/// # Examples
/// ```
/// use finrecipe_models::analytical::{try_american_approx, try_gbs};
///
/// let american = try_american_approx(false, 42.0, 40.0, 0.75, 0.04, -0.04, 0.35).unwrap();
/// let european = try_gbs(false, 42.0, 40.0, 0.75, 0.04, -0.04, 0.35).unwrap();
/// assert!(american >= european);
/// ```
pub fn try_american_approx(
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

    let price = if is_call {
        try_american_call_approx(s, x, t, r, b, v)?
    } else {
        try_american_call_approx(x, s, t, r - b, -b, v)?
    };

    finite("result", price)
}

/// Approximates an American call or put price.
///
/// Same as [`try_american_approx`] but treats invalid input and numerical
/// degeneracy as contract violations.
///
/// # Panics
/// If an argument is outside its domain or a boundary quantity is not finite.
///
/// # Examples
/// ```
/// use finrecipe_models::analytical::american_approx;
///
/// let call = american_approx(true, 42.0, 40.0, 0.75, 0.04, -0.04, 0.35);
/// assert!((call - 5.2704).abs() < 1e-4);
/// ```
#[track_caller]
pub fn american_approx(is_call: bool, s: f64, x: f64, t: f64, r: f64, b: f64, v: f64) -> f64 {
    enforce(try_american_approx(is_call, s, x, t, r, b, v))
}
