use crate::math::tolerance::FLAT_DENOMINATOR;

use super::rootfinder::{
    IterationRecord,
    RootFindingOptions,
    record
};

pub fn secant<F>(
    f: F,
    mut x0: f64,
    mut x1: f64,
    options: &RootFindingOptions,
    mut trace: Option<&mut Vec<IterationRecord>>,
) -> f64
where
    F: Fn(f64) -> f64,
{
    let mut f0 = f(x0);
    let mut f1 = f(x1);
    for k in 1..=options.max_iterations {
        if (f1 - f0).abs() < FLAT_DENOMINATOR {
            break;
        }
        let x2 = x1 - f1 * (x1 - x0) / (f1 - f0);
        record(&mut trace, k, x2);
        if (x2 - x1).abs() < options.tolerance {
            return x2;
        }
        x0 = x1;
        f0 = f1;
        x1 = x2;
        f1 = f(x1);
    }
    x1
}
