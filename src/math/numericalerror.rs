use thiserror::Error;

/// 數值運算共用的錯誤型別。
///
/// 所有檢查都在進入數值計算之前完成，失敗時不會回傳部分結果。
/// 使用者函數內部產生的 NaN / Infinity 不在此列，依 IEEE-754 直接傳遞。
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumericalError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("dimension mismatch: {context}")]
    DimensionMismatch { context: String },

    #[error("singular matrix: |pivot| = {pivot:e} in column {column} is below {threshold:e}")]
    SingularMatrix {
        column: usize,
        pivot: f64,
        threshold: f64,
    },
}

impl NumericalError {
    pub fn invalid_argument(message: impl Into<String>) -> NumericalError {
        NumericalError::InvalidArgument(message.into())
    }

    pub fn dimension_mismatch(context: impl Into<String>) -> NumericalError {
        NumericalError::DimensionMismatch { context: context.into() }
    }
}
