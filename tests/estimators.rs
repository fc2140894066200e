//! 가격 추정 전략 테스트.
use property_cost_estimator::estimate::comparable::SQM_PER_TSUBO;
use property_cost_estimator::estimate::{
    CoefficientModel, ComparableModel, LinearModel, PriceEstimate, PriceStrategy, UnpricedReason,
};
use property_cost_estimator::property::PropertyAttributes;
use property_cost_estimator::CalcError;
use proptest::prelude::*;
use rstest::rstest;

fn attrs(sqm: f64, floor: u32, minutes: u32, age: u32) -> PropertyAttributes {
    PropertyAttributes::new(sqm, floor, minutes, age).expect("attributes")
}

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "{label} expected {expected} got {actual}"
    );
}

#[test]
fn attributes_reject_non_positive_area() {
    for sqm in [0.0, -12.5, f64::NAN] {
        let err = PropertyAttributes::new(sqm, 1, 1, 0).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { field: "sqm", .. }));
    }
}

#[test]
fn linear_reproduces_anchor_price() {
    let model = LinearModel::default();
    let estimate = model.estimate(&attrs(40.0, 1, 1, 0)).expect("estimate");
    assert_eq!(estimate, PriceEstimate::Priced(163_990.0));
}

#[test]
fn linear_typical_unit() {
    // 30㎡, 5층, 역 15분, 10년
    let model = LinearModel::default();
    let price = model.price(&attrs(30.0, 5, 15, 10)).expect("price");
    assert_eq!(price, 127_860.0);
}

#[test]
fn linear_floor_adjustment_starts_at_second_floor() {
    let model = LinearModel::default();
    assert_eq!(model.floor_adjustment(0), 0.0);
    assert_eq!(model.floor_adjustment(1), 0.0);
    assert_eq!(model.floor_adjustment(2), 1670.0);
    assert_eq!(model.floor_adjustment(10), 9.0 * 1670.0);
}

#[test]
fn linear_station_penalty_flattens_after_walking_range() {
    let model = LinearModel::default();
    assert_eq!(model.station_adjustment(15), 15.0 * 1010.0);
    assert_eq!(model.station_adjustment(16), 15.0 * 1010.0 + 10.0);
    assert_eq!(model.station_adjustment(20), 15.0 * 1010.0 + 50.0);
}

#[test]
fn linear_rejects_result_below_zero() {
    let model = LinearModel::default();
    let err = model.estimate(&attrs(1.0, 1, 1, 200)).unwrap_err();
    assert!(matches!(
        err,
        CalcError::InvalidInput {
            field: "estimated price",
            ..
        }
    ));
}

#[test]
fn strategies_reject_hand_built_bad_area() {
    let bad = PropertyAttributes {
        sqm: -3.0,
        floor: 2,
        minutes_to_station: 3,
        age_years: 1,
    };
    let comparable = ComparableModel::from_transaction(10_000_000.0, 20.0).unwrap();
    let strategies: [&dyn PriceStrategy; 3] = [
        &LinearModel::default(),
        &CoefficientModel::default(),
        &comparable,
    ];
    for s in strategies {
        assert!(s.estimate(&bad).is_err(), "{} accepted sqm=-3", s.name());
    }
}

#[test]
fn coefficient_floor_coefficient_steps() {
    let model = CoefficientModel::default();
    assert_eq!(model.floor_coefficient(0), 1.0);
    assert_eq!(model.floor_coefficient(1), 1.0);
    assert_close(
        "floor 6",
        model.floor_coefficient(6),
        model.floor_coefficient(5) + 0.125,
        1e-12,
    );
}

#[test]
fn coefficient_age_coefficient_starts_at_one_and_floors_out() {
    let model = CoefficientModel::default();
    assert_eq!(model.age_coefficient(0), 1.0);
    assert_close("age 5", model.age_coefficient(5), 0.9, 1e-12);
    assert_eq!(model.age_coefficient(10_000), model.min_age_coefficient);
}

#[rstest]
#[case(0, Some(1_100_000.0))]
#[case(5, Some(1_100_000.0))]
#[case(6, Some(980_000.0))]
#[case(10, Some(980_000.0))]
#[case(15, Some(870_000.0))]
#[case(20, Some(760_000.0))]
#[case(21, None)]
fn coefficient_station_bands(#[case] minutes: u32, #[case] expected: Option<f64>) {
    assert_eq!(CoefficientModel::default().base_per_sqm(minutes), expected);
}

#[test]
fn coefficient_new_ground_floor_unit() {
    let model = CoefficientModel::default();
    let estimate = model.estimate(&attrs(50.0, 1, 3, 0)).expect("estimate");
    assert_eq!(estimate, PriceEstimate::Priced(55_000_000.0));
}

#[test]
fn coefficient_beyond_station_range_is_flagged() {
    let model = CoefficientModel::default();
    let estimate = model.estimate(&attrs(50.0, 3, 25, 5)).expect("estimate");
    assert!(!estimate.is_priced());
    assert_eq!(estimate.price(), None);
    assert_eq!(
        estimate,
        PriceEstimate::Unpriced(UnpricedReason::BeyondStationRange {
            minutes: 25,
            max_minutes: 20,
        })
    );
    assert_ne!(estimate, PriceEstimate::Priced(0.0));
}

#[test]
fn comparable_scales_by_area() {
    let model = ComparableModel::from_transaction(56_400_000.0, 30.0).unwrap();
    assert_close("per sqm", model.price_per_sqm(), 1_880_000.0, 1e-6);
    let estimate = model.estimate(&attrs(60.0, 12, 30, 40)).unwrap();
    assert_close(
        "price",
        estimate.price().unwrap(),
        112_800_000.0,
        1e-3,
    );
}

#[test]
fn comparable_from_price_per_tsubo() {
    let model = ComparableModel::from_price_per_tsubo(6_980_000.0).unwrap();
    assert_close(
        "per sqm",
        model.price_per_sqm(),
        6_980_000.0 / SQM_PER_TSUBO,
        1e-9,
    );
}

#[test]
fn comparable_rejects_bad_reference() {
    assert!(ComparableModel::from_transaction(10_000_000.0, 0.0).is_err());
    assert!(ComparableModel::from_transaction(0.0, 30.0).is_err());
    assert!(ComparableModel::from_price_per_tsubo(-1.0).is_err());
}

proptest! {
    #[test]
    fn floor_coefficient_strictly_increases(floor in 1u32..500) {
        let model = CoefficientModel::default();
        prop_assert!(model.floor_coefficient(floor + 1) > model.floor_coefficient(floor));
    }

    #[test]
    fn age_coefficient_never_increases(years in 0u32..1000) {
        let model = CoefficientModel::default();
        prop_assert!(model.age_coefficient(years + 1) <= model.age_coefficient(years));
    }

    #[test]
    fn linear_price_falls_with_age(age in 0u32..60) {
        let model = LinearModel::default();
        let a = attrs(70.0, 3, 5, age);
        let b = attrs(70.0, 3, 5, age + 1);
        prop_assert!(model.price(&b).unwrap() < model.price(&a).unwrap());
    }
}
