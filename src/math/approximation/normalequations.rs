use crate::math::numericalerror::NumericalError;
use crate::math::quadrature::newtoncotes::simpson;

// ─────────────────────────────────────────────
// Normal equations
// ─────────────────────────────────────────────
//
// 在 [a, b] 上以 m 次多項式 p(x) = Σ c_j·x^j 逼近 f，
// 最小化 ∫ (f - p)² dx 得到 A·c = B：
//
//   A[i][j] = ∫_a^b x^(i+j) dx
//   B[i]    = ∫_a^b f(x)·x^i dx
//
// 所有積分一律使用 Simpson（同一個 n），A 與 B 混用不同規則會讓擬合產生偏差。
// A 雖對稱，上下三角仍各自計算。

#[derive(Debug, Clone, PartialEq)]
pub struct NormalEquations {
    pub matrix: Vec<Vec<f64>>,
    pub rhs: Vec<f64>,
}

impl NormalEquations {
    pub fn dimension(&self) -> usize {
        self.rhs.len()
    }
}

pub fn assemble<F>(
    f: F,
    a: f64,
    b: f64,
    degree: usize,
    subdivisions: usize,
) -> Result<NormalEquations, NumericalError>
where
    F: Fn(f64) -> f64,
{
    validate_interval(a, b)?;
    if subdivisions < 2 {
        return Err(NumericalError::invalid_argument(format!(
            "insufficient subdivisions: need at least 2, got {subdivisions}"
        )));
    }

    let size = degree + 1;
    let mut matrix = vec![vec![0.0; size]; size];
    for (i, row) in matrix.iter_mut().enumerate() {
        for (j, entry) in row.iter_mut().enumerate() {
            let power = (i + j) as i32;
            *entry = simpson(|x| x.powi(power), a, b, subdivisions)?;
        }
    }

    let rhs = (0..size)
        .map(|i| {
            let power = i as i32;
            simpson(|x| f(x) * x.powi(power), a, b, subdivisions)
        })
        .collect::<Result<Vec<f64>, NumericalError>>()?;

    Ok(NormalEquations { matrix, rhs })
}

/// 帶號整數版本的次數檢查，供設定檔等外部輸入使用
pub fn checked_degree(degree: i64) -> Result<usize, NumericalError> {
    usize::try_from(degree).map_err(|_| {
        NumericalError::invalid_argument(format!("negative degree: {degree}"))
    })
}

pub(crate) fn validate_interval(a: f64, b: f64) -> Result<(), NumericalError> {
    // !(a < b) 同時擋下 NaN 端點
    if !(a < b) {
        Err(NumericalError::invalid_argument(format!(
            "empty interval: [{a}, {b}] requires a < b"
        )))
    } else {
        Ok(())
    }
}
