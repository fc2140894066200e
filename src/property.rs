use crate::error::{ensure_positive, CalcError};

/// 매물의 물리적 속성.
///
/// 층수, 역까지 도보 시간, 건물 연수는 음수가 될 수 없으므로 부호 없는 정수로 받는다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyAttributes {
    /// 전용 면적 [㎡]
    pub sqm: f64,
    /// 층수 (0 = 지하/반지하, 1 = 1층)
    pub floor: u32,
    /// 가장 가까운 역까지 도보 시간 [분]
    pub minutes_to_station: u32,
    /// 건물 연수 [년]
    pub age_years: u32,
}

impl PropertyAttributes {
    /// 면적을 검증한 뒤 속성을 생성한다.
    pub fn new(
        sqm: f64,
        floor: u32,
        minutes_to_station: u32,
        age_years: u32,
    ) -> Result<Self, CalcError> {
        ensure_positive("sqm", sqm)?;
        Ok(Self {
            sqm,
            floor,
            minutes_to_station,
            age_years,
        })
    }

    /// 필드를 직접 채운 경우 면적을 다시 검증한다.
    pub fn validate(&self) -> Result<(), CalcError> {
        ensure_positive("sqm", self.sqm).map(|_| ())
    }
}
