use super::rootfinder::{
    IterationRecord,
    RootFindingOptions,
    is_bracket,
    record
};

/// False position：以割線與 x 軸交點取代中點，區間始終保持變號。
pub fn regula_falsi<F>(
    f: F,
    mut a: f64,
    mut b: f64,
    options: &RootFindingOptions,
    mut trace: Option<&mut Vec<IterationRecord>>,
) -> f64
where
    F: Fn(f64) -> f64,
{
    let mut fa = f(a);
    let mut fb = f(b);
    if !is_bracket(fa, fb) {
        return f64::NAN;
    }

    let mut x = a;
    for k in 1..=options.max_iterations {
        x = (a * fb - b * fa) / (fb - fa);
        let fx = f(x);
        record(&mut trace, k, x);
        if fx.abs() < options.tolerance {
            return x;
        }
        if fa * fx < 0.0 {
            b = x;
            fb = fx;
        } else {
            a = x;
            fa = fx;
        }
    }
    x
}
