use serde::{
    Deserialize,
    Serialize
};

// ─────────────────────────────────────────────
// 顯式單步法
// ─────────────────────────────────────────────
//
// y' = f(t, y)，由 (t, y) 前進一步 h：
//
//   euler    : y + h·k1                                  O(h)
//   heun     : y + h/2·(k1 + f(t+h, y+h·k1))             O(h²)
//   midpoint : y + h·f(t+h/2, y+h/2·k1)                  O(h²)
//   rk4      : y + h/6·(k1 + 2k2 + 2k3 + k4)             O(h⁴)

pub fn euler<F>(y: f64, t: f64, h: f64, f: &F) -> f64
where
    F: Fn(f64, f64) -> f64,
{
    y + h * f(t, y)
}

pub fn heun<F>(y: f64, t: f64, h: f64, f: &F) -> f64
where
    F: Fn(f64, f64) -> f64,
{
    let k1 = f(t, y);
    let k2 = f(t + h, y + h * k1);
    y + 0.5 * h * (k1 + k2)
}

pub fn midpoint<F>(y: f64, t: f64, h: f64, f: &F) -> f64
where
    F: Fn(f64, f64) -> f64,
{
    let k1 = f(t, y);
    let k2 = f(t + 0.5 * h, y + 0.5 * h * k1);
    y + h * k2
}

pub fn rk4<F>(y: f64, t: f64, h: f64, f: &F) -> f64
where
    F: Fn(f64, f64) -> f64,
{
    let k1 = f(t, y);
    let k2 = f(t + 0.5 * h, y + 0.5 * h * k1);
    let k3 = f(t + 0.5 * h, y + 0.5 * h * k2);
    let k4 = f(t + h, y + h * k3);
    y + h * (k1 + 2.0 * k2 + 2.0 * k3 + k4) / 6.0
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize)]
pub enum StepMethod {
    Euler,
    Heun,
    Midpoint,
    #[default]
    RungeKutta4,
}

impl StepMethod {
    pub fn step<F>(&self, y: f64, t: f64, h: f64, f: &F) -> f64
    where
        F: Fn(f64, f64) -> f64,
    {
        match self {
            StepMethod::Euler => euler(y, t, h, f),
            StepMethod::Heun => heun(y, t, h, f),
            StepMethod::Midpoint => midpoint(y, t, h, f),
            StepMethod::RungeKutta4 => rk4(y, t, h, f),
        }
    }
}
