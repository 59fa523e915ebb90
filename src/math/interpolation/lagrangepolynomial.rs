use crate::math::curve::curve::Curve;
use crate::math::numericalerror::NumericalError;

// ─────────────────────────────────────────────────────────────────────────────
// LagrangePolynomial
// ─────────────────────────────────────────────────────────────────────────────
//
//   L(x) = Σ_i y_i · Π_{j≠i} (x - x_j) / (x_i - x_j)
//
// 每次求值 O(n²)。全域插值，節點多時可能出現 Runge 振盪。
// 節點重複時分母為 0，結果依 IEEE-754 成為 Inf / NaN。

pub(crate) fn check_nodes(x_data: &[f64], y_data: &[f64]) -> Result<(), NumericalError> {
    if x_data.is_empty() {
        Err(NumericalError::dimension_mismatch("no interpolation nodes given"))
    } else if x_data.len() != y_data.len() {
        Err(NumericalError::dimension_mismatch(format!(
            "{} nodes but {} values",
            x_data.len(),
            y_data.len()
        )))
    } else {
        Ok(())
    }
}

fn lagrange_unchecked(x_data: &[f64], y_data: &[f64], x: f64) -> f64 {
    let mut result = 0.0;
    for (i, (&xi, &yi)) in x_data.iter().zip(y_data).enumerate() {
        let mut term = yi;
        for (j, &xj) in x_data.iter().enumerate() {
            if j != i {
                term *= (x - xj) / (xi - xj);
            }
        }
        result += term;
    }
    result
}

pub fn lagrange(x_data: &[f64], y_data: &[f64], x: f64) -> Result<f64, NumericalError> {
    check_nodes(x_data, y_data)?;
    Ok(lagrange_unchecked(x_data, y_data, x))
}

#[derive(Debug, Clone, PartialEq)]
pub struct LagrangePolynomial {
    x_data: Vec<f64>,
    y_data: Vec<f64>,
}

impl LagrangePolynomial {
    pub fn new(x_data: Vec<f64>, y_data: Vec<f64>) -> Result<LagrangePolynomial, NumericalError> {
        check_nodes(&x_data, &y_data)?;
        Ok(LagrangePolynomial { x_data, y_data })
    }

    pub fn x_data(&self) -> &[f64] {
        &self.x_data
    }

    pub fn y_data(&self) -> &[f64] {
        &self.y_data
    }
}

impl Curve for LagrangePolynomial {
    fn value(&self, x: f64) -> f64 {
        lagrange_unchecked(&self.x_data, &self.y_data, x)
    }
}
