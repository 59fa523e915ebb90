use serde::{
    Deserialize,
    Serialize
};

use crate::math::tolerance::{
    MAX_ITERATIONS,
    ROOT_TOLERANCE,
    Tolerances
};

use super::bisection::bisection;
use super::newton::newton;
use super::regulafalsi::regula_falsi;
use super::secant::secant;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IterationRecord {
    pub iteration: usize,
    pub x: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootFindingOptions {
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for RootFindingOptions {
    fn default() -> RootFindingOptions {
        RootFindingOptions {
            tolerance: ROOT_TOLERANCE,
            max_iterations: MAX_ITERATIONS,
        }
    }
}

impl From<&Tolerances> for RootFindingOptions {
    fn from(tolerances: &Tolerances) -> RootFindingOptions {
        RootFindingOptions {
            tolerance: tolerances.root_tolerance,
            max_iterations: tolerances.max_iterations,
        }
    }
}

pub enum RootMethod<'a> {
    Bisection { a: f64, b: f64 },
    Secant { x0: f64, x1: f64 },
    RegulaFalsi { a: f64, b: f64 },
    Newton { x0: f64, derivative: &'a dyn Fn(f64) -> f64 },
}

/// 依 `method` 求 f(x) = 0 的根。
///
/// 區間法在端點同號或非有限值時回傳 NaN；
/// 達到 max_iterations 仍未收斂時回傳最後一個近似值。
/// 提供 `trace` 時，每次迭代的近似值都會依序寫入。
pub fn find_root<F>(
    f: F,
    method: RootMethod<'_>,
    options: &RootFindingOptions,
    trace: Option<&mut Vec<IterationRecord>>,
) -> f64
where
    F: Fn(f64) -> f64,
{
    match method {
        RootMethod::Bisection { a, b } => bisection(f, a, b, options, trace),
        RootMethod::Secant { x0, x1 } => secant(f, x0, x1, options, trace),
        RootMethod::RegulaFalsi { a, b } => regula_falsi(f, a, b, options, trace),
        RootMethod::Newton { x0, derivative } => newton(f, derivative, x0, options, trace),
    }
}

pub(crate) fn record(trace: &mut Option<&mut Vec<IterationRecord>>, iteration: usize, x: f64) {
    if let Some(records) = trace.as_mut() {
        records.push(IterationRecord { iteration, x });
    }
}

/// f(a)、f(b) 皆為有限值且不同號
pub(crate) fn is_bracket(fa: f64, fb: f64) -> bool {
    fa.is_finite() && fb.is_finite() && fa * fb <= 0.0
}
