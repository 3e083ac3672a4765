//! Parameter roles and their validity domains.
//!
//! Every scalar accepted by the pricing formulas plays one of the roles in
//! [`Parameter`]. Each role has a fixed closed interval; values outside it, or
//! values that are not finite, are contract violations.
//!
//! | Role | Symbol | Domain |
//! |---|---|---|
//! | Spot price | S | \[1e-6, 1e12\] |
//! | Strike price | X | \[1e-6, 1e12\] |
//! | Time to expiry | T | \[1/(253·24), 20\] |
//! | Risk-free rate | r | \[0, 1000\] |
//! | Cost of carry | b | \[-1000, 1000\] |
//! | Volatility | v | \[1e-7, 100.99999\] |
//!
//! Time is measured in trading years of 253 days, so the lower bound is one
//! trading hour.

use std::fmt;

/// Closed interval `[min, max]` of admissible values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Domain {
    /// Smallest admissible value
    pub min: f64,
    /// Largest admissible value
    pub max: f64,
}

impl Domain {
    /// Creates a new closed interval.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns true iff `x` is finite and `min <= x <= max`.
    ///
    /// # Examples
    /// ```
    /// use finrecipe_core::types::domain::TIME;
    ///
    /// assert!(TIME.contains(1.0));
    /// assert!(!TIME.contains(21.0));
    /// assert!(!TIME.contains(f64::NAN));
    /// ```
    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        x.is_finite() && x >= self.min && x <= self.max
    }
}

/// Spot price domain. Nothing is free, so the minimum is strictly positive.
pub const PRICE: Domain = Domain::new(0.000001, 1_000_000_000_000.0);

/// Strike domain, identical to [`PRICE`].
pub const STRIKE: Domain = PRICE;

/// Time to expiry domain in trading years: one trading hour up to 20 years.
pub const TIME: Domain = Domain::new(1.0 / (253.0 * 24.0), 20.0);

/// Risk-free rate domain. Zero is admissible; negative rates are not.
pub const INTEREST_RATE: Domain = Domain::new(0.0, 1000.0);

/// Cost of carry domain, symmetric around zero.
pub const COST_OF_CARRY: Domain = Domain::new(-INTEREST_RATE.max, INTEREST_RATE.max);

/// Volatility domain.
pub const VOLATILITY: Domain = Domain::new(0.0000001, 100.99999);

/// Role of a scalar argument to a pricing formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Parameter {
    /// Current underlying price (S)
    Spot,
    /// Option strike (X)
    Strike,
    /// Time to expiry as a fraction of a trading year (T)
    Expiry,
    /// Annualised risk-free rate (r)
    Rate,
    /// Annualised cost of carry (b)
    CostOfCarry,
    /// Annualised volatility (v)
    Volatility,
}

impl Parameter {
    /// All parameter roles, in formula argument order.
    pub const ALL: [Parameter; 6] = [
        Parameter::Spot,
        Parameter::Strike,
        Parameter::Expiry,
        Parameter::Rate,
        Parameter::CostOfCarry,
        Parameter::Volatility,
    ];

    /// Returns the validity domain of this role.
    pub const fn domain(&self) -> Domain {
        match self {
            Parameter::Spot => PRICE,
            Parameter::Strike => STRIKE,
            Parameter::Expiry => TIME,
            Parameter::Rate => INTEREST_RATE,
            Parameter::CostOfCarry => COST_OF_CARRY,
            Parameter::Volatility => VOLATILITY,
        }
    }

    /// Conventional formula symbol.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Parameter::Spot => "S",
            Parameter::Strike => "X",
            Parameter::Expiry => "T",
            Parameter::Rate => "r",
            Parameter::CostOfCarry => "b",
            Parameter::Volatility => "v",
        }
    }

    /// Human-readable name.
    pub const fn name(&self) -> &'static str {
        match self {
            Parameter::Spot => "spot price",
            Parameter::Strike => "strike price",
            Parameter::Expiry => "time to expiry",
            Parameter::Rate => "risk-free rate",
            Parameter::CostOfCarry => "cost of carry",
            Parameter::Volatility => "volatility",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.symbol())
    }
}
