use thiserror::Error;
use tracing::info;

use crate::affordability;
use crate::amortization::{self, LoanTerms};
use crate::cli::{Cli, Commands, FinanceArgs, PropertyArgs};
use crate::config::{self, Config, ConfigError};
use crate::error::CalcError;
use crate::estimate::{ComparableModel, PriceEstimate, PriceStrategy, UnpricedReason};
use crate::property::PropertyAttributes;
use crate::report::Report;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 계산 입력 오류
    #[error(transparent)]
    Calc(#[from] CalcError),
    /// 설정 저장/로드 오류
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// 추정 모델이 가격을 매기지 못함
    #[error("property could not be priced: {0}")]
    Unpriced(UnpricedReason),
    /// 인자 조합 오류
    #[error("{0}")]
    Usage(&'static str),
}

/// 가격을 정하는 방법.
pub enum Pricing<'a> {
    /// 이미 알고 있는 매입가
    Flat(f64),
    /// 속성과 추정 전략
    Estimate {
        strategy: &'a dyn PriceStrategy,
        attributes: PropertyAttributes,
    },
}

/// 한 번 실행할 시나리오. 기간/금리가 없으면 설정값을 쓴다.
pub struct Scenario<'a> {
    pub pricing: Pricing<'a>,
    pub monthly_income: f64,
    pub years: Option<u32>,
    pub annual_rate: Option<f64>,
}

/// 가격 추정 → 보유 비용 → 임대 분석 순으로 계산한다.
///
/// 임대 분석은 항상 월 보유 비용 합계를 기준으로 한다. 가격을 매기지 못한 추정은
/// 0엔으로 흘려보내지 않고 `AppError::Unpriced`로 돌려준다.
pub fn run_scenario(cfg: &Config, scenario: &Scenario<'_>) -> Result<Report, AppError> {
    let (pricing, attributes, price) = match &scenario.pricing {
        Pricing::Flat(price) => ("flat price", None, *price),
        Pricing::Estimate {
            strategy,
            attributes,
        } => {
            info!(strategy = strategy.name(), "estimating price");
            match strategy.estimate(attributes)? {
                PriceEstimate::Priced(price) => (strategy.name(), Some(*attributes), price),
                PriceEstimate::Unpriced(reason) => return Err(AppError::Unpriced(reason)),
            }
        }
    };

    let terms = LoanTerms {
        price,
        years: scenario.years.unwrap_or(cfg.loan.years),
        annual_rate: scenario.annual_rate.unwrap_or(cfg.loan.annual_rate),
    };
    info!(price, years = terms.years, "computing ownership costs");
    let costs = amortization::calculate_costs_with(terms, &cfg.costs)?;

    let analysis = affordability::analyze_with(
        scenario.monthly_income,
        costs.total_monthly_cost,
        &cfg.affordability,
    )?;

    Ok(Report {
        pricing,
        attributes,
        terms,
        costs,
        rent_share: cfg.affordability.rent_share,
        analysis,
    })
}

fn attributes_from(args: &PropertyArgs) -> Result<PropertyAttributes, CalcError> {
    PropertyAttributes::new(args.sqm, args.floor, args.minutes, args.age)
}

fn scenario_with<'a>(pricing: Pricing<'a>, finance: &FinanceArgs) -> Scenario<'a> {
    Scenario {
        pricing,
        monthly_income: finance.income,
        years: finance.years,
        annual_rate: finance.rate,
    }
}

/// 파싱된 명령을 실행하고 표준 출력에 쓸 텍스트를 돌려준다.
pub fn execute(cli: &Cli) -> Result<String, AppError> {
    let load = || config::load_or_default(cli.config.as_deref());

    let report = match &cli.command {
        Commands::InitConfig { path, force } => {
            Config::default().save(path, *force)?;
            return Ok(format!(
                "Wrote default configuration to {}",
                path.display()
            ));
        }
        Commands::Flat { price, finance } => {
            run_scenario(&load()?, &scenario_with(Pricing::Flat(*price), finance))?
        }
        Commands::Linear { property, finance } => {
            let cfg = load()?;
            let pricing = Pricing::Estimate {
                strategy: &cfg.linear_model,
                attributes: attributes_from(property)?,
            };
            run_scenario(&cfg, &scenario_with(pricing, finance))?
        }
        Commands::Coefficient { property, finance } => {
            let cfg = load()?;
            let pricing = Pricing::Estimate {
                strategy: &cfg.coefficient_model,
                attributes: attributes_from(property)?,
            };
            run_scenario(&cfg, &scenario_with(pricing, finance))?
        }
        Commands::Comparable {
            sqm,
            comparable_price,
            comparable_sqm,
            price_per_tsubo,
            finance,
        } => {
            let model = match (comparable_price, comparable_sqm, price_per_tsubo) {
                (Some(total), Some(area), _) => ComparableModel::from_transaction(*total, *area)?,
                (None, None, Some(per_tsubo)) => ComparableModel::from_price_per_tsubo(*per_tsubo)?,
                _ => {
                    return Err(AppError::Usage(
                        "give either --comparable-price with --comparable-sqm, or --price-per-tsubo",
                    ))
                }
            };
            // 비교 거래 모델은 면적만 사용한다.
            let pricing = Pricing::Estimate {
                strategy: &model,
                attributes: PropertyAttributes::new(*sqm, 0, 0, 0)?,
            };
            run_scenario(&load()?, &scenario_with(pricing, finance))?
        }
    };

    Ok(report.to_string())
}

/// 명령을 실행하고 결과를 표준 출력에 쓴다.
pub fn run(cli: &Cli) -> Result<(), AppError> {
    let output = execute(cli)?;
    println!("{output}");
    Ok(())
}
