use super::rootfinder::{
    IterationRecord,
    RootFindingOptions,
    is_bracket,
    record
};

pub fn bisection<F>(
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
    let fb = f(b);
    if !is_bracket(fa, fb) {
        return f64::NAN;
    }
    if fa == 0.0 {
        return a;
    }
    if fb == 0.0 {
        return b;
    }

    for k in 1..=options.max_iterations {
        let c = 0.5 * (a + b);
        let fc = f(c);
        record(&mut trace, k, c);
        if fc.abs() < options.tolerance || 0.5 * (b - a) < options.tolerance {
            return c;
        }
        if fa * fc < 0.0 {
            b = c;
        } else {
            a = c;
            fa = fc;
        }
    }
    0.5 * (a + b)
}
