//! 선형 보정 모델.
//!
//! ㎡당 고정 단가에 층/역거리/연수 보정을 더하고 빼는 방식이다. 상수항은 기준 관측치
//! 하나에 맞춰 역산하므로 기준 속성을 넣으면 기준 가격이 그대로 나온다.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{PriceEstimate, PriceStrategy};
use crate::error::{ensure_positive, CalcError};
use crate::property::PropertyAttributes;

/// 상수항 보정에 쓰는 기준 관측치.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub sqm: f64,
    pub floor: u32,
    pub minutes: u32,
    pub age: u32,
    /// 관측 가격 [엔]
    pub price: f64,
}

impl Default for Anchor {
    fn default() -> Self {
        // 1분, 40㎡, 신축, 1층 관측치
        Self {
            sqm: 40.0,
            floor: 1,
            minutes: 1,
            age: 0,
            price: 163_990.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinearModel {
    /// ㎡당 단가 [엔]
    pub price_per_sqm: f64,
    /// 2층부터 한 층 올라갈 때마다 더하는 금액
    pub floor_increment: f64,
    /// 도보권 안에서 1분당 빼는 금액
    pub near_station_rate: f64,
    /// 도보권 밖에서 1분당 빼는 금액
    pub far_station_rate: f64,
    /// 도보권 한계 [분]
    pub near_station_limit: u32,
    /// 1년당 빼는 금액
    pub age_decrement: f64,
    pub anchor: Anchor,
}

impl Default for LinearModel {
    fn default() -> Self {
        Self {
            price_per_sqm: 2017.0,
            floor_increment: 1670.0,
            near_station_rate: 1010.0,
            far_station_rate: 10.0,
            near_station_limit: 15,
            age_decrement: 850.0,
            anchor: Anchor::default(),
        }
    }
}

impl LinearModel {
    pub fn area_price(&self, sqm: f64) -> f64 {
        sqm * self.price_per_sqm
    }

    /// 1층 이하는 보정 없음.
    pub fn floor_adjustment(&self, floor: u32) -> f64 {
        if floor < 2 {
            0.0
        } else {
            f64::from(floor - 1) * self.floor_increment
        }
    }

    pub fn station_adjustment(&self, minutes: u32) -> f64 {
        if minutes <= self.near_station_limit {
            f64::from(minutes) * self.near_station_rate
        } else {
            let extra = minutes - self.near_station_limit;
            f64::from(self.near_station_limit) * self.near_station_rate
                + f64::from(extra) * self.far_station_rate
        }
    }

    pub fn age_adjustment(&self, years: u32) -> f64 {
        f64::from(years) * self.age_decrement
    }

    fn adjusted(&self, sqm: f64, floor: u32, minutes: u32, age: u32) -> f64 {
        self.area_price(sqm) + self.floor_adjustment(floor)
            - self.station_adjustment(minutes)
            - self.age_adjustment(age)
    }

    /// 기준 관측치에서 역산한 상수항.
    pub fn base_offset(&self) -> f64 {
        let a = &self.anchor;
        a.price - self.adjusted(a.sqm, a.floor, a.minutes, a.age)
    }

    /// 가격을 계산한다. 보정 결과가 0 이하가 되면 `InvalidInput`.
    pub fn price(&self, attrs: &PropertyAttributes) -> Result<f64, CalcError> {
        attrs.validate()?;
        let base = self.base_offset();
        let price = base
            + self.adjusted(
                attrs.sqm,
                attrs.floor,
                attrs.minutes_to_station,
                attrs.age_years,
            );
        debug!(base, price, "linear model price");
        ensure_positive("estimated price", price)
    }

    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        let positive = |x: f64| x.is_finite() && x > 0.0;
        if !positive(self.price_per_sqm) {
            return Err("linear_model.price_per_sqm must be positive");
        }
        if !(positive(self.anchor.sqm) && positive(self.anchor.price)) {
            return Err("linear_model.anchor needs a positive sqm and price");
        }
        let rates = [
            self.floor_increment,
            self.near_station_rate,
            self.far_station_rate,
            self.age_decrement,
        ];
        if rates.iter().any(|r| !r.is_finite() || *r < 0.0) {
            return Err("linear_model adjustments must be non-negative");
        }
        Ok(())
    }
}

impl PriceStrategy for LinearModel {
    fn name(&self) -> &'static str {
        "linear adjustment"
    }

    fn estimate(&self, attrs: &PropertyAttributes) -> Result<PriceEstimate, CalcError> {
        self.price(attrs).map(PriceEstimate::Priced)
    }
}
