//! Integration tests for module exports.
//!
//! Verify that the public formulas are reachable both through their defining
//! modules and through the `analytical` re-exports.

/// Test that formulas are accessible via their defining modules.
#[test]
fn test_module_paths() {
    use finrecipe_models::analytical::american::american_approx;
    use finrecipe_models::analytical::black_scholes::black_scholes;
    use finrecipe_models::analytical::distributions::{cnd, normdist};
    use finrecipe_models::analytical::generalized::gbs;

    let _ = cnd(0.5_f64);
    let _ = normdist(0.5_f64);
    let _ = black_scholes(true, 100.0, 100.0, 1.0, 0.05, 0.2);
    let _ = gbs(false, 100.0, 100.0, 1.0, 0.05, 0.0, 0.2);
    let _ = american_approx(false, 100.0, 100.0, 1.0, 0.05, 0.0, 0.2);
}

/// Test that the `try_` forms and the error type are re-exported together.
#[test]
fn test_fallible_reexports() {
    use finrecipe_core::DomainError;
    use finrecipe_models::analytical::{
        try_american_approx, try_american_call_approx, try_black_scholes, try_cnd, try_gbs,
        AnalyticalError,
    };

    let err: AnalyticalError = try_black_scholes(true, 100.0, 100.0, 1.0, 0.05, f64::NAN)
        .unwrap_err();
    assert!(matches!(err, AnalyticalError::Domain(DomainError::NotFinite { .. })));

    assert!(matches!(
        try_cnd(f64::INFINITY),
        Err(AnalyticalError::NotFinite { .. })
    ));
    assert!(try_gbs(true, 100.0, 100.0, 1.0, 0.05, 0.0, 0.2).is_ok());
    assert!(try_american_call_approx(100.0, 100.0, 1.0, 0.05, 0.0, 0.2).is_ok());
    assert!(try_american_approx(true, 100.0, 100.0, 1.0, 0.05, 0.0, 0.2).is_ok());
}

/// Test that the parameter bundle is re-exported.
#[test]
fn test_params_reexport() {
    use finrecipe_models::analytical::OptionParams;

    let params = OptionParams::new(100.0, 100.0, 1.0, 0.05, 0.0, 0.2).unwrap();
    assert!(params.american(false).unwrap() >= params.gbs(false).unwrap());
}
