use serde::{
    Deserialize,
    Serialize
};

use crate::math::curve::curve::Curve;

// ─────────────────────────────────────────────
// Horner
// ─────────────────────────────────────────────
//
// 係數由低次到高次排列：coefs[i] 為 x^i 的係數。
//
//   p(x) = c0 + x·(c1 + x·(c2 + ... + x·c_n))

/// 以 Horner 法計算多項式值，空係數回傳 0。
pub fn evaluate_polynomial(coefs: &[f64], x: f64) -> f64 {
    match coefs.split_last() {
        None => 0.0,
        Some((&last, rest)) => rest
            .iter()
            .rev()
            .fold(last, |result, &c| result * x + c),
    }
}

/// 逐項 Σ c_i·x^i，僅供與 Horner 比較使用。
pub fn evaluate_power_sum(coefs: &[f64], x: f64) -> f64 {
    coefs
        .iter()
        .enumerate()
        .map(|(i, &c)| c * x.powi(i as i32))
        .sum()
}

fn compute_deriv_coefs(coefs: &[f64]) -> Vec<f64> {
    if coefs.len() <= 1 {
        vec![0.0]
    } else {
        coefs[1..]
            .iter()
            .enumerate()
            .map(|(i, &c)| (i + 1) as f64 * c)
            .collect()
    }
}

// ─────────────────────────────────────────────
// Polynomial
// ─────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polynomial {
    coefs: Vec<f64>,
}

impl Polynomial {
    pub fn new(coefs: Vec<f64>) -> Polynomial {
        Polynomial { coefs }
    }

    pub fn coefs(&self) -> &[f64] {
        &self.coefs
    }

    /// 空係數視為零多項式，degree 為 0
    pub fn degree(&self) -> usize {
        self.coefs.len().saturating_sub(1)
    }

    pub fn derivative(&self) -> Polynomial {
        Polynomial::new(compute_deriv_coefs(&self.coefs))
    }
}

impl From<Vec<f64>> for Polynomial {
    fn from(coefs: Vec<f64>) -> Polynomial {
        Polynomial::new(coefs)
    }
}

impl Curve for Polynomial {
    fn value(&self, x: f64) -> f64 {
        evaluate_polynomial(&self.coefs, x)
    }
}
