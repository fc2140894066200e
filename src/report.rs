//! 계산 결과를 사람이 읽을 수 있는 텍스트로 정리한다.

use std::fmt;

use crate::affordability::AffordabilityResult;
use crate::amortization::{CostBreakdown, LoanTerms};
use crate::money::{format_percent, format_yen};
use crate::property::PropertyAttributes;

/// 한 번의 시나리오 실행 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// 가격을 정한 방법
    pub pricing: &'static str,
    /// 속성으로 추정한 경우에만 존재
    pub attributes: Option<PropertyAttributes>,
    pub terms: LoanTerms,
    pub costs: CostBreakdown,
    /// 최대 임대료 산정에 쓴 소득 비율
    pub rent_share: f64,
    pub analysis: AffordabilityResult,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.costs;
        let a = &self.analysis;

        writeln!(f, "Pricing: {}", self.pricing)?;
        if let Some(p) = &self.attributes {
            writeln!(
                f,
                "Property: {} sqm, floor {}, {} min to station, {} years old",
                p.sqm, p.floor, p.minutes_to_station, p.age_years
            )?;
        }
        writeln!(f, "Property Price: {}", format_yen(c.property_price))?;
        writeln!(
            f,
            "Loan: {} years at {:.2}%",
            self.terms.years,
            self.terms.annual_rate * 100.0
        )?;

        writeln!(f, "\nOwner's Costs:")?;
        writeln!(f, "Down Payment: {}", format_yen(c.down_payment))?;
        writeln!(f, "Loan Amount: {}", format_yen(c.loan_amount))?;
        writeln!(f, "Monthly Principal: {}", format_yen(c.monthly_principal))?;
        writeln!(f, "Monthly Interest: {}", format_yen(c.monthly_interest))?;
        writeln!(f, "Monthly Mortgage: {}", format_yen(c.monthly_mortgage))?;
        writeln!(
            f,
            "Monthly Tax/Insurance: {}",
            format_yen(c.monthly_tax_insurance)
        )?;
        writeln!(f, "Monthly Maintenance: {}", format_yen(c.monthly_maintenance))?;
        writeln!(f, "Total Monthly Cost: {}", format_yen(c.total_monthly_cost))?;
        writeln!(
            f,
            "\n5% Rule Monthly Amount: {}",
            format_yen(c.five_percent_monthly)
        )?;

        writeln!(f, "\nRental Analysis:")?;
        writeln!(
            f,
            "50% Monthly of owner's costs: {}",
            format_yen(c.half_monthly_cost())
        )?;
        writeln!(
            f,
            "Your Max Rent ({:.0}% of income): {}",
            self.rent_share * 100.0,
            format_yen(a.max_rent)
        )?;
        writeln!(
            f,
            "This covers {} of owner's costs",
            format_percent(a.percentage_of_cost)
        )?;
        write!(
            f,
            "Recommendation: {} - {}",
            a.recommendation.label().to_uppercase(),
            a.recommendation.advice()
        )
    }
}

