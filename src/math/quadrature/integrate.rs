use crate::math::curve::curve::Curve;
use crate::math::numericalerror::NumericalError;
use crate::math::polynomial::polynomial::evaluate_polynomial;

use super::gausslegendre::gauss_legendre;
use super::newtoncotes::{
    midpoint,
    simpson,
    trapezoid
};
use super::quadraturerule::QuadratureRule;

/// 依 `rule` 計算 ∫_a^b f(x) dx。
///
/// 不檢查 a < b：a > b 回傳帶負號的積分值。
pub fn integrate<F>(f: F, a: f64, b: f64, rule: QuadratureRule) -> Result<f64, NumericalError>
where
    F: Fn(f64) -> f64,
{
    match rule {
        QuadratureRule::Midpoint { subdivisions } => midpoint(f, a, b, subdivisions),
        QuadratureRule::Trapezoid { subdivisions } => trapezoid(f, a, b, subdivisions),
        QuadratureRule::Simpson { subdivisions } => simpson(f, a, b, subdivisions),
        QuadratureRule::GaussLegendre { nodes, panels } => gauss_legendre(f, a, b, nodes, panels),
    }
}

/// 多項式積分：以 Horner 求值後套用同一數值規則，並非解析反導數，
/// 精度受規則階數限制。
pub fn integrate_polynomial(
    coefs: &[f64],
    a: f64,
    b: f64,
    rule: QuadratureRule,
) -> Result<f64, NumericalError> {
    integrate(|x| evaluate_polynomial(coefs, x), a, b, rule)
}

pub fn integrate_curve<C>(curve: &C, a: f64, b: f64, rule: QuadratureRule) -> Result<f64, NumericalError>
where
    C: Curve + ?Sized,
{
    integrate(|x| curve.value(x), a, b, rule)
}
