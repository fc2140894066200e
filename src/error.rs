use thiserror::Error;

/// 계산 단계에서 발생 가능한 오류.
///
/// 모든 계산은 순수 함수이므로 재시도는 의미가 없다. 오류가 나면 부분 결과 없이
/// 해당 계산 전체가 실패한다.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// 0 이하이거나 유한하지 않은 입력값
    #[error("{field} must be a positive number (got {value})")]
    InvalidInput { field: &'static str, value: f64 },
}

/// 값이 유한한 양수인지 확인한다.
pub(crate) fn ensure_positive(field: &'static str, value: f64) -> Result<f64, CalcError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CalcError::InvalidInput { field, value })
    }
}

/// 값이 유한한 0 이상인지 확인한다.
pub(crate) fn ensure_non_negative(field: &'static str, value: f64) -> Result<f64, CalcError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(CalcError::InvalidInput { field, value })
    }
}
