//! 매물 속성으로부터 가격을 추정하는 전략 모음.

pub mod coefficient;
pub mod comparable;
pub mod linear;

use std::fmt;

use crate::error::CalcError;
use crate::property::PropertyAttributes;

pub use coefficient::CoefficientModel;
pub use comparable::ComparableModel;
pub use linear::LinearModel;

/// 가격을 매길 수 없는 이유.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnpricedReason {
    /// 역까지 거리가 모델의 가격 구간을 벗어남
    BeyondStationRange { minutes: u32, max_minutes: u32 },
}

impl fmt::Display for UnpricedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnpricedReason::BeyondStationRange {
                minutes,
                max_minutes,
            } => write!(
                f,
                "{minutes} minutes to station is beyond the priced range (up to {max_minutes} minutes)"
            ),
        }
    }
}

/// 가격 추정 결과. 구간 밖 매물은 0엔이 아니라 `Unpriced`로 구분한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriceEstimate {
    Priced(f64),
    Unpriced(UnpricedReason),
}

impl PriceEstimate {
    pub fn is_priced(&self) -> bool {
        matches!(self, PriceEstimate::Priced(_))
    }

    /// 추정 가격. 가격을 매길 수 없으면 `None`.
    pub fn price(&self) -> Option<f64> {
        match self {
            PriceEstimate::Priced(p) => Some(*p),
            PriceEstimate::Unpriced(_) => None,
        }
    }
}

/// 가격 추정 전략의 공통 인터페이스.
pub trait PriceStrategy {
    /// 보고서에 표시할 전략 이름
    fn name(&self) -> &'static str;

    /// 속성으로부터 가격을 추정한다. 면적이 0 이하이면 `InvalidInput`.
    fn estimate(&self, attrs: &PropertyAttributes) -> Result<PriceEstimate, CalcError>;
}
