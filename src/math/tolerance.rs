use serde::{
    Deserialize,
    Serialize
};

use super::numericalerror::NumericalError;

/// 消去法中 |pivot| 低於此值即視為奇異矩陣
pub const SINGULARITY_THRESHOLD: f64 = 1e-12;

pub const ROOT_TOLERANCE: f64 = 1e-10;

pub const MAX_ITERATIONS: usize = 100;

/// secant / Newton 分母小於此值時停止迭代
pub const FLAT_DENOMINATOR: f64 = 1e-14;

pub const DEFAULT_SUBDIVISIONS: usize = 200;

pub const DEFAULT_GAUSS_NODES: usize = 3;

pub const DEFAULT_GAUSS_PANELS: usize = 1;

/// 可由設定檔覆寫的全域預設值。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerances {
    pub singularity_threshold: f64,
    pub root_tolerance: f64,
    pub max_iterations: usize,
}

impl Default for Tolerances {
    fn default() -> Tolerances {
        Tolerances {
            singularity_threshold: SINGULARITY_THRESHOLD,
            root_tolerance: ROOT_TOLERANCE,
            max_iterations: MAX_ITERATIONS,
        }
    }
}

impl Tolerances {
    pub fn validate(&self) -> Result<(), NumericalError> {
        if !(self.singularity_threshold.is_finite() && self.singularity_threshold >= 0.0) {
            return Err(NumericalError::invalid_argument(format!(
                "singularity threshold must be finite and non-negative, got {}",
                self.singularity_threshold
            )));
        }
        if !(self.root_tolerance.is_finite() && self.root_tolerance > 0.0) {
            return Err(NumericalError::invalid_argument(format!(
                "root tolerance must be finite and positive, got {}",
                self.root_tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(NumericalError::invalid_argument("max iterations must be positive"));
        }
        Ok(())
    }
}
