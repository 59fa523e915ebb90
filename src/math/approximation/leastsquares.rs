use crate::math::linalg::eliminationobserver::SilentObserver;
use crate::math::linalg::gaussianelimination::{
    SolverOptions,
    solve_linear_system_with
};
use crate::math::numericalerror::NumericalError;
use crate::math::polynomial::polynomial::evaluate_polynomial;

use super::normalequations::assemble;

/// 最小平方多項式逼近，回傳 [c_0, c_1, ..., c_m]。
///
/// 對 3 次以下的多項式 f，Simpson 精確，結果重現 f 的係數。
pub fn approximate<F>(
    f: F,
    a: f64,
    b: f64,
    degree: usize,
    subdivisions: usize,
) -> Result<Vec<f64>, NumericalError>
where
    F: Fn(f64) -> f64,
{
    approximate_with(f, a, b, degree, subdivisions, &SolverOptions::default())
}

pub fn approximate_with<F>(
    f: F,
    a: f64,
    b: f64,
    degree: usize,
    subdivisions: usize,
    options: &SolverOptions,
) -> Result<Vec<f64>, NumericalError>
where
    F: Fn(f64) -> f64,
{
    let system = assemble(f, a, b, degree, subdivisions)?;
    solve_linear_system_with(&system.matrix, &system.rhs, options, &mut SilentObserver)
}

/// 在 [a, b] 上 samples + 1 個等距控制點的 RMS 誤差。
pub fn rms_error<F>(f: F, coefs: &[f64], a: f64, b: f64, samples: usize) -> f64
where
    F: Fn(f64) -> f64,
{
    let points = samples.max(1);
    let sum_sq: f64 = (0..=points)
        .map(|k| {
            let x = a + (b - a) * k as f64 / points as f64;
            let e = f(x) - evaluate_polynomial(coefs, x);
            e * e
        })
        .sum();
    (sum_sq / (points + 1) as f64).sqrt()
}
