//! 소득 기준 최대 임대료와 보유 비용 대비 비율 분석.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ensure_positive, CalcError};

/// 소득 대비 임대료 예산 가정.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AffordabilityAssumptions {
    /// 월 소득 중 임대료에 쓸 수 있는 비율 (30% 룰)
    pub rent_share: f64,
}

impl Default for AffordabilityAssumptions {
    fn default() -> Self {
        Self { rent_share: 0.30 }
    }
}

/// 보유 비용 대비 임대료 비율 구간. 선언 순서가 곧 비싼 순서이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Recommendation {
    /// [0, 40)
    GoodDeal,
    /// [40, 50)
    OkayDeal,
    /// [50, 70)
    Expensive,
    /// [70, ∞)
    VeryExpensive,
}

impl Recommendation {
    /// 모든 구간을 낮은 비율부터 나열한다.
    pub const ALL: [Recommendation; 4] = [
        Recommendation::GoodDeal,
        Recommendation::OkayDeal,
        Recommendation::Expensive,
        Recommendation::VeryExpensive,
    ];

    /// 비율(%)을 구간으로 분류한다. 반열린 구간을 앞에서부터 검사한다.
    pub fn classify(percentage_of_cost: f64) -> Self {
        if percentage_of_cost < 40.0 {
            Recommendation::GoodDeal
        } else if percentage_of_cost < 50.0 {
            Recommendation::OkayDeal
        } else if percentage_of_cost < 70.0 {
            Recommendation::Expensive
        } else {
            Recommendation::VeryExpensive
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Recommendation::GoodDeal => "good deal",
            Recommendation::OkayDeal => "okay deal",
            Recommendation::Expensive => "expensive",
            Recommendation::VeryExpensive => "very expensive",
        }
    }

    /// 보고서에 붙는 설명 문장.
    pub fn advice(&self) -> &'static str {
        match self {
            Recommendation::GoodDeal => "You're paying less than 40% of owner's costs",
            Recommendation::OkayDeal => "You're paying 40-50% of owner's costs",
            Recommendation::Expensive => "You're paying 50-70% of owner's costs",
            Recommendation::VeryExpensive => "Consider buying instead if possible",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 임대 분석 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffordabilityResult {
    /// 소득 기준 최대 임대료 [엔/월]
    pub max_rent: f64,
    /// 최대 임대료가 보유 비용의 몇 %인지
    pub percentage_of_cost: f64,
    pub recommendation: Recommendation,
}

/// 기본 30% 룰로 분석한다.
pub fn analyze(monthly_income: f64, owner_cost: f64) -> Result<AffordabilityResult, CalcError> {
    analyze_with(monthly_income, owner_cost, &AffordabilityAssumptions::default())
}

/// `owner_cost`는 월 보유 비용(`CostBreakdown::total_monthly_cost`)을 기대한다.
pub fn analyze_with(
    monthly_income: f64,
    owner_cost: f64,
    assumptions: &AffordabilityAssumptions,
) -> Result<AffordabilityResult, CalcError> {
    let income = ensure_positive("monthly_income", monthly_income)?;
    let owner_cost = ensure_positive("owner_cost", owner_cost)?;

    let max_rent = income * assumptions.rent_share;
    let percentage_of_cost = (max_rent / owner_cost) * 100.0;
    let recommendation = Recommendation::classify(percentage_of_cost);

    debug!(max_rent, percentage_of_cost, %recommendation, "affordability analysed");

    Ok(AffordabilityResult {
        max_rent,
        percentage_of_cost,
        recommendation,
    })
}
