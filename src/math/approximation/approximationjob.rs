use serde::{
    Deserialize,
    Serialize
};

use crate::math::curve::targetfunction::TargetFunction;
use crate::math::linalg::gaussianelimination::SolverOptions;
use crate::math::numericalerror::NumericalError;

use super::leastsquares::approximate_with;
use super::normalequations::{
    checked_degree,
    validate_interval
};

/// 設定檔中的一筆逼近工作。
///
/// degree 與 subdivisions 以帶號整數讀入，負值在這裡轉成 InvalidArgument。
/// 檢查順序與 `assemble` 相同：degree、區間、subdivisions。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApproximationJob {
    pub function: TargetFunction,
    pub a: f64,
    pub b: f64,
    pub degree: i64,
    pub subdivisions: i64,
}

impl ApproximationJob {
    pub fn run(&self, options: &SolverOptions) -> Result<Vec<f64>, NumericalError> {
        let degree = checked_degree(self.degree)?;
        validate_interval(self.a, self.b)?;
        let subdivisions = usize::try_from(self.subdivisions).map_err(|_| {
            NumericalError::invalid_argument(format!(
                "insufficient subdivisions: need at least 2, got {}",
                self.subdivisions
            ))
        })?;
        let function = self.function;
        approximate_with(move |x| function.evaluate(x), self.a, self.b, degree, subdivisions, options)
    }
}
