//! 매입가 기준 월간 보유 비용 추정.
//!
//! 이자는 원금 상환에 따라 줄어들지 않고 전체 대출액에 대해 단리로 계산하는 근사식을
//! 사용한다. 표준 상환 스케줄보다 비용을 다소 높게 본다.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ensure_non_negative, ensure_positive, CalcError};

/// 일본 주택담보대출의 최대 상환 기간 [년]
pub const DEFAULT_LOAN_YEARS: u32 = 35;
/// 기본 연 금리 (소수)
pub const DEFAULT_ANNUAL_RATE: f64 = 0.01;

/// 매입가 대비 비율로 표현한 보유 비용 가정.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostAssumptions {
    /// 계약금 비율
    pub down_payment_ratio: f64,
    /// 연간 세금/보험 비율
    pub tax_insurance_rate: f64,
    /// 연간 수선/관리 비율
    pub maintenance_rate: f64,
    /// 5% 룰 비교값에 쓰는 연간 비율
    pub benchmark_rate: f64,
}

impl Default for CostAssumptions {
    fn default() -> Self {
        Self {
            down_payment_ratio: 0.20,
            tax_insurance_rate: 0.015,
            maintenance_rate: 0.01,
            benchmark_rate: 0.05,
        }
    }
}

/// 비용 계산 입력.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanTerms {
    /// 매입가 [엔]
    pub price: f64,
    /// 상환 기간 [년]
    pub years: u32,
    /// 연 금리 (0.01 = 1%)
    pub annual_rate: f64,
}

impl LoanTerms {
    /// 기본 기간(35년)과 금리(1%)를 적용한 입력을 만든다.
    pub fn with_defaults(price: f64) -> Self {
        Self {
            price,
            years: DEFAULT_LOAN_YEARS,
            annual_rate: DEFAULT_ANNUAL_RATE,
        }
    }
}

/// 월간 보유 비용 내역. 모든 금액은 엔 단위이다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostBreakdown {
    pub property_price: f64,
    pub down_payment: f64,
    pub loan_amount: f64,
    pub monthly_principal: f64,
    pub monthly_interest: f64,
    /// 원금 + 이자
    pub monthly_mortgage: f64,
    pub monthly_tax_insurance: f64,
    pub monthly_maintenance: f64,
    pub total_monthly_cost: f64,
    /// 5% 룰 기준 월 비용. 상세 계산과 무관한 비교용 값이다.
    pub five_percent_monthly: f64,
}

impl CostBreakdown {
    /// 월 보유 비용의 절반. 임대료 비교 시 참고선으로 쓴다.
    pub fn half_monthly_cost(&self) -> f64 {
        self.total_monthly_cost * 0.5
    }
}

/// 기본 가정으로 월간 보유 비용을 계산한다.
pub fn calculate_costs(terms: LoanTerms) -> Result<CostBreakdown, CalcError> {
    calculate_costs_with(terms, &CostAssumptions::default())
}

/// 주어진 가정으로 월간 보유 비용을 계산한다.
pub fn calculate_costs_with(
    terms: LoanTerms,
    assumptions: &CostAssumptions,
) -> Result<CostBreakdown, CalcError> {
    let price = ensure_positive("price", terms.price)?;
    let years = ensure_positive("years", f64::from(terms.years))?;
    let rate = ensure_non_negative("annual_rate", terms.annual_rate)?;

    let down_payment = price * assumptions.down_payment_ratio;
    let loan_amount = price - down_payment;

    let monthly_principal = loan_amount / (years * 12.0);
    let monthly_interest = (loan_amount * rate) / 12.0;
    let monthly_mortgage = monthly_principal + monthly_interest;

    let monthly_tax_insurance = (price * assumptions.tax_insurance_rate) / 12.0;
    let monthly_maintenance = (price * assumptions.maintenance_rate) / 12.0;
    let total_monthly_cost = monthly_mortgage + monthly_tax_insurance + monthly_maintenance;

    let five_percent_monthly = (price * assumptions.benchmark_rate) / 12.0;

    debug!(
        price,
        years = terms.years,
        rate,
        loan_amount,
        total_monthly_cost,
        "ownership costs computed"
    );

    Ok(CostBreakdown {
        property_price: price,
        down_payment,
        loan_amount,
        monthly_principal,
        monthly_interest,
        monthly_mortgage,
        monthly_tax_insurance,
        monthly_maintenance,
        total_monthly_cost,
        five_percent_monthly,
    })
}
