use crate::math::numericalerror::NumericalError;

// ─────────────────────────────────────────────
// 複合 Newton-Cotes 規則
// ─────────────────────────────────────────────
//
// 區間 [a, b] 等分為 n 段，h = (b - a) / n。
// a > b 時 h 為負，結果自然帶負號；a == b 時結果為 0。
//
//   midpoint  : h · Σ f(a + (i + ½)h)
//   trapezoid : h · [ ½f(a) + Σ f(a + ih) + ½f(b) ]
//   simpson   : h/3 · [ f(a) + 4Σ f(奇數點) + 2Σ f(偶數點) + f(b) ]

fn check_subdivisions(n: usize, rule: &str) -> Result<(), NumericalError> {
    if n == 0 {
        Err(NumericalError::invalid_argument(format!(
            "{rule}: subdivision count must be positive"
        )))
    } else {
        Ok(())
    }
}

pub fn midpoint<F>(f: F, a: f64, b: f64, n: usize) -> Result<f64, NumericalError>
where
    F: Fn(f64) -> f64,
{
    check_subdivisions(n, "midpoint")?;
    let h = (b - a) / n as f64;
    let sum: f64 = (0..n)
        .map(|i| f(a + (i as f64 + 0.5) * h))
        .sum();
    Ok(sum * h)
}

pub fn trapezoid<F>(f: F, a: f64, b: f64, n: usize) -> Result<f64, NumericalError>
where
    F: Fn(f64) -> f64,
{
    check_subdivisions(n, "trapezoid")?;
    let h = (b - a) / n as f64;
    let interior: f64 = (1..n)
        .map(|i| f(a + i as f64 * h))
        .sum();
    Ok((0.5 * (f(a) + f(b)) + interior) * h)
}

/// 奇數 n 會進位為 n + 1，不視為錯誤。
pub fn simpson<F>(f: F, a: f64, b: f64, n: usize) -> Result<f64, NumericalError>
where
    F: Fn(f64) -> f64,
{
    check_subdivisions(n, "simpson")?;
    let n = even_subdivisions(n)?;
    let h = (b - a) / n as f64;
    let interior: f64 = (1..n)
        .map(|i| {
            let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
            weight * f(a + i as f64 * h)
        })
        .sum();
    Ok((f(a) + f(b) + interior) * h / 3.0)
}

pub fn even_subdivisions(n: usize) -> Result<usize, NumericalError> {
    if n % 2 == 0 {
        return Ok(n);
    }
    n.checked_add(1).ok_or_else(|| {
        NumericalError::invalid_argument(format!("simpson: subdivision count {n} cannot be rounded up to even"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_counts_round_up() {
        assert_eq!(even_subdivisions(1).unwrap(), 2);
        assert_eq!(even_subdivisions(7).unwrap(), 8);
        assert_eq!(even_subdivisions(10).unwrap(), 10);
        assert!(even_subdivisions(usize::MAX).is_err());
    }

    #[test]
    fn zero_subdivisions_are_rejected() {
        assert!(matches!(
            midpoint(|x| x, 0.0, 1.0, 0),
            Err(NumericalError::InvalidArgument(_))
        ));
        assert!(matches!(
            trapezoid(|x| x, 0.0, 1.0, 0),
            Err(NumericalError::InvalidArgument(_))
        ));
        assert!(matches!(
            simpson(|x| x, 0.0, 1.0, 0),
            Err(NumericalError::InvalidArgument(_))
        ));
    }
}
