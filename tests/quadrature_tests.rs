//! Tests for the composite quadrature rules.
//!
//! ## Test Organization
//!
//! 1. **Exactness** - constants and low-degree polynomials
//! 2. **Rule Semantics** - Simpson rounding, orientation, Gauss-Legendre panels
//! 3. **Validation** - rejected subdivision and node counts

use approx::{assert_abs_diff_eq, assert_relative_eq};

use numlab::math::curve::targetfunction::TargetFunction;
use numlab::math::interpolation::newtonpolynomial::NewtonPolynomial;
use numlab::math::numericalerror::NumericalError;
use numlab::math::polynomial::polynomial::Polynomial;
use numlab::math::quadrature::gausslegendre::GaussLegendreNodes;
use numlab::math::quadrature::integrate::{integrate, integrate_curve, integrate_polynomial};
use numlab::math::quadrature::newtoncotes::simpson;
use numlab::math::quadrature::quadraturejob::{Integrand, QuadratureJob};
use numlab::math::quadrature::quadraturerule::{QuadratureConfig, QuadratureRule};

fn all_rules(n: usize) -> Vec<QuadratureRule> {
    vec![
        QuadratureRule::Midpoint { subdivisions: n },
        QuadratureRule::Trapezoid { subdivisions: n },
        QuadratureRule::Simpson { subdivisions: n },
        QuadratureRule::GaussLegendre { nodes: 2, panels: n },
        QuadratureRule::GaussLegendre { nodes: 3, panels: n },
        QuadratureRule::GaussLegendre { nodes: 4, panels: n },
    ]
}

// ============================================================================
// Exactness
// ============================================================================

/// Every rule integrates a constant exactly, for any subdivision count.
#[test]
fn test_constant_function_gives_interval_length() {
    for n in [1, 2, 3, 7, 50] {
        for rule in all_rules(n) {
            let value = integrate(|_| 1.0, -0.5, 2.25, rule).unwrap();
            assert_relative_eq!(value, 2.75, epsilon = 1e-12);
        }
    }
}

/// Simpson is exact for cubics even on the coarsest grid.
#[test]
fn test_simpson_exact_for_cubic() {
    // ∫_0^2 (x^3 - x) dx = 4 - 2 = 2
    let value = integrate(|x| x * x * x - x, 0.0, 2.0, QuadratureRule::Simpson { subdivisions: 2 }).unwrap();
    assert_relative_eq!(value, 2.0, epsilon = 1e-12);
}

/// Square on [0, 1] with Simpson n = 200 and midpoint n = 400.
#[test]
fn test_square_on_unit_interval() {
    let s = integrate(|x| x * x, 0.0, 1.0, QuadratureRule::Simpson { subdivisions: 200 }).unwrap();
    assert_abs_diff_eq!(s, 1.0 / 3.0, epsilon = 1e-6);

    let m = integrate(|x| x * x, 0.0, 1.0, QuadratureRule::Midpoint { subdivisions: 400 }).unwrap();
    assert_abs_diff_eq!(m, 1.0 / 3.0, epsilon = 1e-6);
}

/// Trapezoid error on x^2 is exactly (b-a) h^2 / 6 for a quadratic.
#[test]
fn test_trapezoid_error_on_quadratic() {
    let value = integrate(|x| x * x, 0.0, 1.0, QuadratureRule::Trapezoid { subdivisions: 10 }).unwrap();
    assert_relative_eq!(value, 1.0 / 3.0 + 0.01 / 6.0, epsilon = 1e-12);
}

/// Four-node Gauss-Legendre on 1 - x^2 over [0, 1].
#[test]
fn test_polynomial_gauss_legendre() {
    let value = integrate_polynomial(
        &[1.0, 0.0, -1.0],
        0.0,
        1.0,
        QuadratureRule::GaussLegendre { nodes: 4, panels: 20 },
    )
    .unwrap();
    assert_abs_diff_eq!(value, 2.0 / 3.0, epsilon = 1e-7);
}

/// A k-node rule on a single panel is exact up to degree 2k - 1.
#[test]
fn test_gauss_legendre_degree_of_exactness() {
    // ∫_{-1}^{1} x^6 dx = 2/7, exact for 4 nodes (degree 7)
    let four = integrate(|x| x.powi(6), -1.0, 1.0, QuadratureRule::GaussLegendre { nodes: 4, panels: 1 }).unwrap();
    assert_relative_eq!(four, 2.0 / 7.0, epsilon = 1e-12);

    // ∫_{-1}^{1} x^4 dx = 2/5, 2 nodes only reach degree 3
    let two = integrate(|x| x.powi(4), -1.0, 1.0, QuadratureRule::GaussLegendre { nodes: 2, panels: 1 }).unwrap();
    assert_relative_eq!(two, 2.0 / 9.0, epsilon = 1e-12);
}

/// Polynomial integration goes through Horner plus the chosen rule,
/// so midpoint is not exact on a quartic.
#[test]
fn test_polynomial_integration_uses_numerical_rule() {
    // P(x) = x^4 - 9x^3 - 5x^2 - 2 on [-2, 2]: exact = 64/5 - 80/3 - 8
    let poly = [-2.0, 0.0, -5.0, -9.0, 1.0];
    let exact = 64.0 / 5.0 - 80.0 / 3.0 - 8.0;

    let coarse = integrate_polynomial(&poly, -2.0, 2.0, QuadratureRule::Midpoint { subdivisions: 4 }).unwrap();
    assert!((coarse - exact).abs() > 1e-3);

    let gauss = integrate_polynomial(&poly, -2.0, 2.0, QuadratureRule::GaussLegendre { nodes: 3, panels: 10 }).unwrap();
    assert_relative_eq!(gauss, exact, epsilon = 1e-10);
}

#[test]
fn test_empty_polynomial_integrates_to_zero() {
    let value = integrate_polynomial(&[], 0.0, 3.0, QuadratureRule::simpson()).unwrap();
    assert_eq!(value, 0.0);
}

// ============================================================================
// Rule Semantics
// ============================================================================

/// Odd Simpson counts round up instead of failing.
#[test]
fn test_simpson_rounds_odd_count_up() {
    let f = |x: f64| x.exp() * x.sin();
    let one = integrate(f, 0.0, 1.0, QuadratureRule::Simpson { subdivisions: 1 }).unwrap();
    let two = integrate(f, 0.0, 1.0, QuadratureRule::Simpson { subdivisions: 2 }).unwrap();
    assert_eq!(one, two);

    let nine = simpson(f, 0.0, 1.0, 9).unwrap();
    let ten = simpson(f, 0.0, 1.0, 10).unwrap();
    assert_eq!(nine, ten);
}

/// Reversed limits flip the sign.
#[test]
fn test_reversed_interval_is_signed() {
    for rule in all_rules(16) {
        let forward = integrate(|x| x * x, 0.0, 2.0, rule).unwrap();
        let backward = integrate(|x| x * x, 2.0, 0.0, rule).unwrap();
        assert_relative_eq!(backward, -forward, epsilon = 1e-12);
        assert!(backward < 0.0);
    }
}

#[test]
fn test_degenerate_interval_is_zero() {
    for rule in all_rules(5) {
        assert_eq!(integrate(|x| x.cos(), 1.0, 1.0, rule).unwrap(), 0.0);
    }
}

/// Non-finite function values propagate instead of raising.
#[test]
fn test_nan_propagates() {
    let value = integrate(|x| if x > 0.5 { f64::NAN } else { x }, 0.0, 1.0, QuadratureRule::trapezoid()).unwrap();
    assert!(value.is_nan());
}

/// Curves and configs route through the same engine.
#[test]
fn test_curve_and_config_integration() {
    let rule = QuadratureRule::Simpson { subdivisions: 64 };
    let polynomial = Polynomial::new(vec![0.0, 0.0, 3.0]);
    assert_relative_eq!(integrate_curve(&polynomial, 0.0, 1.0, rule).unwrap(), 1.0, epsilon = 1e-12);

    let newton = NewtonPolynomial::new(vec![0.0, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();
    assert_relative_eq!(integrate_curve(&newton, 0.0, 3.0, rule).unwrap(), 9.0, epsilon = 1e-10);

    let config = QuadratureConfig::new(0.0, std::f64::consts::PI, QuadratureRule::gauss_legendre());
    let sine = config.integrate(|x| TargetFunction::Sin.evaluate(x)).unwrap();
    assert_abs_diff_eq!(sine, 2.0, epsilon = 0.1);
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_zero_subdivisions_rejected() {
    for rule in all_rules(0) {
        let result = integrate(|x| x, 0.0, 1.0, rule);
        assert!(matches!(result, Err(NumericalError::InvalidArgument(_))), "{rule:?}");
    }
}

/// Only 2, 3 and 4 nodes are supported.
#[test]
fn test_unsupported_node_count_rejected() {
    let result = integrate(|x| x * x, 0.0, 1.0, QuadratureRule::GaussLegendre { nodes: 5, panels: 10 });
    assert!(matches!(result, Err(NumericalError::InvalidArgument(_))));

    for nodes in [0, 1, 5, 10] {
        assert!(GaussLegendreNodes::try_from(nodes).is_err());
    }
    assert_eq!(GaussLegendreNodes::try_from(3).unwrap().count(), 3);
}

#[test]
fn test_node_tables_are_symmetric() {
    for nodes in [2, 3, 4] {
        let rule = GaussLegendreNodes::try_from(nodes).unwrap();
        let (abscissas, weights) = rule.abscissas_and_weights();
        assert_eq!(abscissas.len(), nodes);
        assert_relative_eq!(weights.iter().sum::<f64>(), 2.0, epsilon = 1e-14);
        for i in 0..nodes {
            assert_relative_eq!(abscissas[i], -abscissas[nodes - 1 - i]);
        }
    }
}

/// A count that cannot be rounded up to even is rejected, not wrapped.
#[test]
fn test_simpson_maximal_odd_count_rejected() {
    let result = integrate(|_| 1.0, 0.0, 1.0, QuadratureRule::Simpson { subdivisions: usize::MAX });
    assert!(matches!(result, Err(NumericalError::InvalidArgument(_))));
}

#[test]
fn test_job_runs_through_its_config() {
    let job = QuadratureJob {
        integrand: Integrand::Polynomial(vec![0.0, 0.0, 3.0]),
        a: 0.0,
        b: 2.0,
        rule: QuadratureRule::Simpson { subdivisions: 10 },
    };
    let config = job.config();
    assert_eq!(config, QuadratureConfig::new(0.0, 2.0, QuadratureRule::Simpson { subdivisions: 10 }));
    assert_relative_eq!(job.run().unwrap(), 8.0, epsilon = 1e-12);
}
