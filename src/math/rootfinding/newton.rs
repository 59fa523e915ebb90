use crate::math::tolerance::FLAT_DENOMINATOR;

use super::rootfinder::{
    IterationRecord,
    RootFindingOptions,
    record
};

/// 導數接近 0 時停止，回傳目前的近似值
pub fn newton<F, D>(
    f: F,
    df: D,
    mut x0: f64,
    options: &RootFindingOptions,
    mut trace: Option<&mut Vec<IterationRecord>>,
) -> f64
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    for k in 1..=options.max_iterations {
        let dfx = df(x0);
        if dfx.abs() < FLAT_DENOMINATOR {
            break;
        }
        let x1 = x0 - f(x0) / dfx;
        record(&mut trace, k, x1);
        if (x1 - x0).abs() < options.tolerance {
            return x1;
        }
        x0 = x1;
    }
    x0
}
