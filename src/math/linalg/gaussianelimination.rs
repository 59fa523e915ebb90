use nalgebra::DMatrix;

use crate::math::numericalerror::NumericalError;
use crate::math::tolerance::{
    SINGULARITY_THRESHOLD,
    Tolerances
};

use super::eliminationobserver::{
    EliminationObserver,
    SilentObserver,
    TracePrinter
};

/// 以列為單位的稠密矩陣，rows[i][j] 為第 i 列第 j 行
pub type Matrix = Vec<Vec<f64>>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverOptions {
    pub singularity_threshold: f64,
}

impl Default for SolverOptions {
    fn default() -> SolverOptions {
        SolverOptions { singularity_threshold: SINGULARITY_THRESHOLD }
    }
}

impl From<&Tolerances> for SolverOptions {
    fn from(tolerances: &Tolerances) -> SolverOptions {
        SolverOptions { singularity_threshold: tolerances.singularity_threshold }
    }
}

// ─────────────────────────────────────────────
// Gaussian elimination with partial pivoting
// ─────────────────────────────────────────────
//
// 1. 複製為 n × (n+1) 增廣矩陣 [A | b]，呼叫端的資料不會被修改
// 2. 對第 i 行，在 [i, n) 中選 |a_ki| 最大的列換到第 i 列（同值取第一個）
// 3. |pivot| < threshold → SingularMatrix
// 4. 消去第 i 列以下各列
// 5. 由最後一列往上回代

pub fn solve_linear_system(a: &[Vec<f64>], b: &[f64]) -> Result<Vec<f64>, NumericalError> {
    solve_linear_system_with(a, b, &SolverOptions::default(), &mut SilentObserver)
}

/// 同 `solve_linear_system`，並把每一步的增廣矩陣印到 stdout。
pub fn solve_linear_system_verbose(a: &[Vec<f64>], b: &[f64]) -> Result<Vec<f64>, NumericalError> {
    let mut printer = TracePrinter::stdout();
    solve_linear_system_with(a, b, &SolverOptions::default(), &mut printer)
}

pub fn solve_linear_system_with<O>(
    a: &[Vec<f64>],
    b: &[f64],
    options: &SolverOptions,
    observer: &mut O,
) -> Result<Vec<f64>, NumericalError>
where
    O: EliminationObserver + ?Sized,
{
    let mut augmented = build_augmented(a, b)?;
    let n = a.len();
    observer.on_augmented(&augmented);

    for i in 0..n {
        let pivot_row = select_pivot_row(&augmented, i);
        if pivot_row != i {
            augmented.swap_rows(i, pivot_row);
        }

        let pivot = augmented[(i, i)];
        if pivot.abs() < options.singularity_threshold {
            return Err(NumericalError::SingularMatrix {
                column: i,
                pivot: pivot.abs(),
                threshold: options.singularity_threshold,
            });
        }

        for k in (i + 1)..n {
            let factor = augmented[(k, i)] / pivot;
            for j in i..=n {
                let delta = factor * augmented[(i, j)];
                augmented[(k, j)] -= delta;
            }
            observer.on_row_eliminated(k, i, &augmented);
        }
    }

    Ok(back_substitute(&augmented))
}

fn build_augmented(a: &[Vec<f64>], b: &[f64]) -> Result<DMatrix<f64>, NumericalError> {
    let n = a.len();
    if n == 0 {
        return Err(NumericalError::dimension_mismatch("system has no equations"));
    }
    if b.len() != n {
        return Err(NumericalError::dimension_mismatch(format!(
            "{n} equations but right-hand side has length {}",
            b.len()
        )));
    }
    if let Some((i, row)) = a.iter().enumerate().find(|(_, row)| row.len() != n) {
        return Err(NumericalError::dimension_mismatch(format!(
            "row {i} has {} columns, expected {n}",
            row.len()
        )));
    }

    Ok(DMatrix::from_fn(n, n + 1, |i, j| if j < n { a[i][j] } else { b[i] }))
}

fn select_pivot_row(augmented: &DMatrix<f64>, column: usize) -> usize {
    let mut max_row = column;
    for k in (column + 1)..augmented.nrows() {
        if augmented[(k, column)].abs() > augmented[(max_row, column)].abs() {
            max_row = k;
        }
    }
    max_row
}

fn back_substitute(augmented: &DMatrix<f64>) -> Vec<f64> {
    let n = augmented.nrows();
    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let mut value = augmented[(i, n)];
        for j in (i + 1)..n {
            value -= augmented[(i, j)] * x[j];
        }
        x[i] = value / augmented[(i, i)];
    }
    x
}
