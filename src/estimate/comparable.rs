//! 비교 거래 기반 추정. 층/역거리/연수 보정 없이 면적 비례로만 환산한다.

use tracing::debug;

use super::{PriceEstimate, PriceStrategy};
use crate::error::{ensure_positive, CalcError};
use crate::property::PropertyAttributes;

/// 1평(坪)의 면적 [㎡]
pub const SQM_PER_TSUBO: f64 = 3.306;

/// 비교 대상 가격 정보.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Comparable {
    /// 실제 거래 한 건의 총액과 면적
    Transaction { total_price: f64, sqm: f64 },
    /// 평단가 [엔/평]
    PerTsubo { price_per_tsubo: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparableModel {
    comparable: Comparable,
}

impl ComparableModel {
    pub fn from_transaction(total_price: f64, sqm: f64) -> Result<Self, CalcError> {
        ensure_positive("comparable_price", total_price)?;
        ensure_positive("comparable_sqm", sqm)?;
        Ok(Self {
            comparable: Comparable::Transaction { total_price, sqm },
        })
    }

    pub fn from_price_per_tsubo(price_per_tsubo: f64) -> Result<Self, CalcError> {
        ensure_positive("price_per_tsubo", price_per_tsubo)?;
        Ok(Self {
            comparable: Comparable::PerTsubo { price_per_tsubo },
        })
    }

    pub fn comparable(&self) -> Comparable {
        self.comparable
    }

    /// ㎡당 단가 [엔]
    pub fn price_per_sqm(&self) -> f64 {
        match self.comparable {
            Comparable::Transaction { total_price, sqm } => total_price / sqm,
            Comparable::PerTsubo { price_per_tsubo } => price_per_tsubo / SQM_PER_TSUBO,
        }
    }
}

impl PriceStrategy for ComparableModel {
    fn name(&self) -> &'static str {
        "comparable price"
    }

    fn estimate(&self, attrs: &PropertyAttributes) -> Result<PriceEstimate, CalcError> {
        attrs.validate()?;
        let per_sqm = self.price_per_sqm();
        let price = per_sqm * attrs.sqm;
        debug!(per_sqm, price, "comparable price");
        Ok(PriceEstimate::Priced(price))
    }
}
