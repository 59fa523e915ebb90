use serde::{
    Deserialize,
    Serialize
};

use super::curve::Curve;

/// 設定檔可引用的內建函數。
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum TargetFunction {
    Identity,
    Square,
    Cube,
    Sin,
    Cos,
    Exp,
    /// x·cos³(x)
    XCosCubed,
}

impl TargetFunction {
    pub fn evaluate(&self, x: f64) -> f64 {
        match self {
            TargetFunction::Identity => x,
            TargetFunction::Square => x * x,
            TargetFunction::Cube => x * x * x,
            TargetFunction::Sin => x.sin(),
            TargetFunction::Cos => x.cos(),
            TargetFunction::Exp => x.exp(),
            TargetFunction::XCosCubed => x * x.cos().powi(3),
        }
    }
}

impl Curve for TargetFunction {
    fn value(&self, x: f64) -> f64 {
        self.evaluate(x)
    }
}
