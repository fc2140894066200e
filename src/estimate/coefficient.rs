//! 계수 모델.
//!
//! 가격 = 역거리 구간 ㎡단가 × 면적 × 층 계수 × 연수 계수.
//! 층/연수 계수는 한 단계(층, 년)마다 해당 구간의 증분을 누적하는 구조이며,
//! 재귀 대신 구간별 겹치는 단계 수 × 증분의 합으로 닫힌 형태로 계산한다.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{PriceEstimate, PriceStrategy, UnpricedReason};
use crate::error::CalcError;
use crate::property::PropertyAttributes;

/// 역까지 `max_minutes`분 이내에 적용하는 ㎡단가.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StationBand {
    pub max_minutes: u32,
    pub price_per_sqm: f64,
}

/// `from`..=`to` 단계마다 `increment`씩 누적하는 구간. `to`가 없으면 상한 없음.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepBand {
    pub from: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<u32>,
    pub increment: f64,
}

impl StepBand {
    /// `1..=n` 중 이 구간에 속하는 단계 수.
    fn steps_through(&self, n: u32) -> u32 {
        let upper = match self.to {
            Some(to) => to.min(n),
            None => n,
        };
        if upper < self.from {
            0
        } else {
            upper - self.from + 1
        }
    }
}

fn accumulate(bands: &[StepBand], n: u32) -> f64 {
    bands
        .iter()
        .map(|b| f64::from(b.steps_through(n)) * b.increment)
        .sum()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoefficientModel {
    /// 연수 계수 하한
    pub min_age_coefficient: f64,
    /// `max_minutes` 오름차순
    pub station_bands: Vec<StationBand>,
    pub floor_bands: Vec<StepBand>,
    pub age_bands: Vec<StepBand>,
}

impl Default for CoefficientModel {
    fn default() -> Self {
        Self {
            min_age_coefficient: 0.2,
            station_bands: vec![
                StationBand {
                    max_minutes: 5,
                    price_per_sqm: 1_100_000.0,
                },
                StationBand {
                    max_minutes: 10,
                    price_per_sqm: 980_000.0,
                },
                StationBand {
                    max_minutes: 15,
                    price_per_sqm: 870_000.0,
                },
                StationBand {
                    max_minutes: 20,
                    price_per_sqm: 760_000.0,
                },
            ],
            floor_bands: vec![
                StepBand {
                    from: 2,
                    to: Some(5),
                    increment: 0.15,
                },
                StepBand {
                    from: 6,
                    to: Some(10),
                    increment: 0.125,
                },
                StepBand {
                    from: 11,
                    to: Some(15),
                    increment: 0.1,
                },
                StepBand {
                    from: 16,
                    to: None,
                    increment: 0.075,
                },
            ],
            age_bands: vec![
                StepBand {
                    from: 1,
                    to: Some(5),
                    increment: 0.02,
                },
                StepBand {
                    from: 6,
                    to: Some(10),
                    increment: 0.015,
                },
                StepBand {
                    from: 11,
                    to: Some(15),
                    increment: 0.01,
                },
                StepBand {
                    from: 16,
                    to: None,
                    increment: 0.005,
                },
            ],
        }
    }
}

impl CoefficientModel {
    /// 역거리 구간 ㎡단가. 모든 구간을 벗어나면 `None`.
    pub fn base_per_sqm(&self, minutes: u32) -> Option<f64> {
        self.station_bands
            .iter()
            .find(|b| minutes <= b.max_minutes)
            .map(|b| b.price_per_sqm)
    }

    /// 가격을 매길 수 있는 최대 도보 시간.
    pub fn max_priced_minutes(&self) -> u32 {
        self.station_bands
            .last()
            .map(|b| b.max_minutes)
            .unwrap_or(0)
    }

    /// 1층 이하 1.0, 이후 층마다 해당 구간 증분을 더한다.
    pub fn floor_coefficient(&self, floor: u32) -> f64 {
        1.0 + accumulate(&self.floor_bands, floor)
    }

    /// 신축 1.0, 이후 해마다 해당 구간 감분을 빼며 하한에서 멈춘다.
    pub fn age_coefficient(&self, years: u32) -> f64 {
        (1.0 - accumulate(&self.age_bands, years)).max(self.min_age_coefficient)
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.station_bands.is_empty() {
            return Err("coefficient_model.station_bands must not be empty".into());
        }
        if self
            .station_bands
            .windows(2)
            .any(|w| w[0].max_minutes >= w[1].max_minutes)
        {
            return Err("coefficient_model.station_bands must be sorted by max_minutes".into());
        }
        if self
            .station_bands
            .iter()
            .any(|b| !b.price_per_sqm.is_finite() || b.price_per_sqm <= 0.0)
        {
            return Err("coefficient_model station prices must be positive".into());
        }
        validate_steps("coefficient_model.floor_bands", &self.floor_bands, 2)?;
        validate_steps("coefficient_model.age_bands", &self.age_bands, 1)?;
        if !(0.0..=1.0).contains(&self.min_age_coefficient) {
            return Err("coefficient_model.min_age_coefficient must lie in [0, 1]".into());
        }
        Ok(())
    }
}

/// 구간은 `first`에서 시작해 빈틈과 겹침 없이 이어져야 하고, 마지막 구간만 상한이 없다.
fn validate_steps(name: &str, bands: &[StepBand], first: u32) -> Result<(), String> {
    let Some(head) = bands.first() else {
        return Err(format!("{name} must not be empty"));
    };
    if head.from != first {
        return Err(format!("{name} must start at {first} (got {})", head.from));
    }
    for (i, band) in bands.iter().enumerate() {
        if !band.increment.is_finite() || band.increment <= 0.0 {
            return Err(format!("{name}[{i}].increment must be positive"));
        }
        let is_last = i + 1 == bands.len();
        match (band.to, bands.get(i + 1)) {
            (Some(to), _) if to < band.from => {
                return Err(format!("{name}[{i}] ends before it starts"));
            }
            (Some(to), Some(next)) if to.checked_add(1) != Some(next.from) => {
                return Err(format!(
                    "{name}[{}] must start at {} to follow the previous band",
                    i + 1,
                    to.saturating_add(1)
                ));
            }
            (None, _) if !is_last => {
                return Err(format!("{name}[{i}] is open-ended but is not the last band"));
            }
            (Some(_), None) => {
                return Err(format!("{name} last band must be open-ended (no `to`)"));
            }
            _ => {}
        }
    }
    Ok(())
}

impl PriceStrategy for CoefficientModel {
    fn name(&self) -> &'static str {
        "coefficient"
    }

    fn estimate(&self, attrs: &PropertyAttributes) -> Result<PriceEstimate, CalcError> {
        attrs.validate()?;
        let Some(base) = self.base_per_sqm(attrs.minutes_to_station) else {
            let reason = UnpricedReason::BeyondStationRange {
                minutes: attrs.minutes_to_station,
                max_minutes: self.max_priced_minutes(),
            };
            warn!(%reason, "property left unpriced");
            return Ok(PriceEstimate::Unpriced(reason));
        };
        let floor_coef = self.floor_coefficient(attrs.floor);
        let age_coef = self.age_coefficient(attrs.age_years);
        let price = base * attrs.sqm * floor_coef * age_coef;
        debug!(base, floor_coef, age_coef, price, "coefficient model price");
        Ok(PriceEstimate::Priced(price))
    }
}
