use crate::math::curve::curve::Curve;
use crate::math::numericalerror::NumericalError;

use super::lagrangepolynomial::check_nodes;

// ─────────────────────────────────────────────────────────────────────────────
// NewtonPolynomial
// ─────────────────────────────────────────────────────────────────────────────
//
// Newton form：
//   N(x) = f[x0] + f[x0,x1]·(x-x0) + ... + f[x0..x_{n-1}]·(x-x0)...(x-x_{n-2})
//
// 係數 f[x0..xi] 以 divided differences 原地計算，求值採巢狀形式。

fn divided_differences(x_data: &[f64], y_data: &[f64]) -> Vec<f64> {
    let n = x_data.len();
    let mut f = y_data.to_vec();
    for j in 1..n {
        for i in (j..n).rev() {
            f[i] = (f[i] - f[i - 1]) / (x_data[i] - x_data[i - j]);
        }
    }
    f
}

fn nested_value(coefs: &[f64], x_data: &[f64], x: f64) -> f64 {
    let n = coefs.len();
    let mut result = coefs[n - 1];
    for i in (0..n - 1).rev() {
        result = result * (x - x_data[i]) + coefs[i];
    }
    result
}

pub fn newton_coefficients(x_data: &[f64], y_data: &[f64]) -> Result<Vec<f64>, NumericalError> {
    check_nodes(x_data, y_data)?;
    Ok(divided_differences(x_data, y_data))
}

pub fn newton_evaluate(coefs: &[f64], x_data: &[f64], x: f64) -> Result<f64, NumericalError> {
    if coefs.is_empty() {
        return Err(NumericalError::dimension_mismatch("no newton coefficients given"));
    }
    if coefs.len() != x_data.len() {
        return Err(NumericalError::dimension_mismatch(format!(
            "{} coefficients but {} nodes",
            coefs.len(),
            x_data.len()
        )));
    }
    Ok(nested_value(coefs, x_data, x))
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewtonPolynomial {
    x_data: Vec<f64>,
    coefs: Vec<f64>,
}

impl NewtonPolynomial {
    pub fn new(x_data: Vec<f64>, y_data: &[f64]) -> Result<NewtonPolynomial, NumericalError> {
        let coefs = newton_coefficients(&x_data, y_data)?;
        Ok(NewtonPolynomial { x_data, coefs })
    }

    pub fn x_data(&self) -> &[f64] {
        &self.x_data
    }

    /// divided differences [f[x0], f[x0,x1], ...]
    pub fn coefs(&self) -> &[f64] {
        &self.coefs
    }

    /// 展開為 monomial form [a_0, ..., a_{n-1}]，可直接交給 `evaluate_polynomial`。
    ///
    /// 由最高階係數開始，每一步先乘 (x - x_i) 再加上 f[x0..xi]。
    pub fn to_monomial(&self) -> Vec<f64> {
        let n = self.coefs.len();
        let mut monomial = vec![0.0; n];
        monomial[0] = self.coefs[n - 1];

        for i in (0..n - 1).rev() {
            for k in (1..n).rev() {
                monomial[k] = monomial[k - 1] - self.x_data[i] * monomial[k];
            }
            monomial[0] = -self.x_data[i] * monomial[0] + self.coefs[i];
        }

        monomial
    }
}

impl Curve for NewtonPolynomial {
    fn value(&self, x: f64) -> f64 {
        nested_value(&self.coefs, &self.x_data, x)
    }
}
