use serde::{
    Deserialize,
    Serialize
};

use crate::math::numericalerror::NumericalError;

use super::odestep::StepMethod;

/// 步數取整時容許的相對誤差，避免 (t_end - t0) / h 恰為整數卻被截掉一步
const STEP_COUNT_SLACK: f64 = 1e-9;

/// 最後一個取樣點距 t_end 超過此值才補一個不足步
const END_GAP: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatePoint {
    pub t: f64,
    pub y: f64,
}

/// 以固定步長 h 由 t0 積分到 t_end，回傳包含起點的軌跡。
///
/// 取樣點為 t0 + i·h；若最後一點未達 t_end，再以 t_end - t 的不足步補齊。
pub fn integrate_ode<F>(
    y0: f64,
    t0: f64,
    t_end: f64,
    h: f64,
    rhs: F,
    method: StepMethod,
) -> Result<Vec<StatePoint>, NumericalError>
where
    F: Fn(f64, f64) -> f64,
{
    if !(h.is_finite() && h > 0.0) {
        return Err(NumericalError::invalid_argument(format!(
            "step size must be positive and finite, got {h}"
        )));
    }
    if !(t0.is_finite() && t_end.is_finite()) || t_end < t0 {
        return Err(NumericalError::invalid_argument(format!(
            "cannot integrate from t0 = {t0} to t_end = {t_end}"
        )));
    }

    let steps = ((t_end - t0) / h + STEP_COUNT_SLACK).floor() as usize;
    let mut trajectory = Vec::with_capacity(steps + 2);

    let mut y = y0;
    trajectory.push(StatePoint { t: t0, y });
    for i in 0..steps {
        let t = t0 + i as f64 * h;
        y = method.step(y, t, h, &rhs);
        trajectory.push(StatePoint { t: t0 + (i + 1) as f64 * h, y });
    }

    let t_last = t0 + steps as f64 * h;
    if t_last < t_end - END_GAP {
        y = method.step(y, t_last, t_end - t_last, &rhs);
        trajectory.push(StatePoint { t: t_end, y });
    }

    Ok(trajectory)
}
