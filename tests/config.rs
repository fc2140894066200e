//! 설정 파일 로드/저장 테스트.
use property_cost_estimator::config::{self, Config, ConfigError};
use rstest::rstest;

#[test]
fn default_config_survives_toml() {
    let cfg = Config::default();
    let text = cfg.to_toml().expect("serialize");
    assert!(text.contains("[loan]"));
    assert!(text.contains("[coefficient_model]"));
    let parsed = Config::from_toml(&text).expect("parse");
    assert_eq!(parsed, cfg);
}

#[test]
fn partial_file_keeps_other_defaults() {
    let cfg = Config::from_toml(
        r#"
[loan]
years = 25

[affordability]
rent_share = 0.25
"#,
    )
    .expect("parse");
    assert_eq!(cfg.loan.years, 25);
    assert_eq!(cfg.loan.annual_rate, 0.01);
    assert_eq!(cfg.affordability.rent_share, 0.25);
    assert_eq!(cfg.costs, Config::default().costs);
    assert_eq!(cfg.linear_model, Config::default().linear_model);
}

#[test]
fn rejects_out_of_range_values() {
    let cases = [
        "[loan]\nyears = 0\n",
        "[loan]\nannual_rate = -0.1\n",
        "[costs]\ndown_payment_ratio = 1.5\n",
        "[affordability]\nrent_share = 0.0\n",
        "[linear_model]\nprice_per_sqm = 0.0\n",
        "[coefficient_model]\nstation_bands = []\n",
    ];
    for src in cases {
        let err = Config::from_toml(src).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "{src:?} gave {err:?}");
    }
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = Config::from_toml("[loan\nyears = ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn save_refuses_to_overwrite_without_force() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("property_cost.toml");
    let cfg = Config::default();

    cfg.save(&path, false).expect("first save");
    let err = cfg.save(&path, false).unwrap_err();
    assert!(matches!(err, ConfigError::AlreadyExists(_)));
    cfg.save(&path, true).expect("forced save");

    let loaded = config::load(&path).expect("load");
    assert_eq!(loaded, cfg);
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("missing.toml");
    let err = config::load_or_default(Some(&path)).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

fn step_bands(table: &str, bands: &[(u32, Option<u32>, f64)]) -> String {
    let mut src = String::new();
    for (from, to, increment) in bands {
        src.push_str(&format!("[[coefficient_model.{table}]]\nfrom = {from}\n"));
        if let Some(to) = to {
            src.push_str(&format!("to = {to}\n"));
        }
        src.push_str(&format!("increment = {increment:?}\n"));
    }
    src
}

#[rstest]
#[case::gap(&[(2, Some(5), 0.15), (8, None, 0.1)])]
#[case::overlap(&[(2, Some(5), 0.15), (3, None, 0.1)])]
#[case::starts_late(&[(3, Some(5), 0.15), (6, None, 0.1)])]
#[case::open_band_not_last(&[(2, None, 0.15), (6, None, 0.1)])]
#[case::closed_last_band(&[(2, Some(5), 0.15), (6, Some(10), 0.1)])]
#[case::reversed(&[(2, Some(1), 0.15), (2, None, 0.1)])]
#[case::empty(&[])]
fn floor_bands_must_tile_from_second_floor(#[case] bands: &[(u32, Option<u32>, f64)]) {
    let src = if bands.is_empty() {
        "[coefficient_model]\nfloor_bands = []\n".to_string()
    } else {
        step_bands("floor_bands", bands)
    };
    let err = Config::from_toml(&src).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)), "{src} gave {err:?}");
}

#[rstest]
#[case::gap(&[(1, Some(5), 0.02), (7, None, 0.01)])]
#[case::overlap(&[(1, Some(5), 0.02), (5, None, 0.01)])]
#[case::starts_at_zero(&[(0, Some(5), 0.02), (6, None, 0.01)])]
#[case::starts_late(&[(2, Some(5), 0.02), (6, None, 0.01)])]
fn age_bands_must_tile_from_first_year(#[case] bands: &[(u32, Option<u32>, f64)]) {
    let src = step_bands("age_bands", bands);
    let err = Config::from_toml(&src).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)), "{src} gave {err:?}");
}

#[test]
fn contiguous_custom_bands_are_accepted() {
    let src = step_bands("floor_bands", &[(2, Some(3), 0.2), (4, None, 0.05)]);
    let cfg = Config::from_toml(&src).expect("parse");
    let model = &cfg.coefficient_model;
    assert!((model.floor_coefficient(3) - 1.4).abs() < 1e-12);
    assert!((model.floor_coefficient(4) - 1.45).abs() < 1e-12);
    assert!(model.floor_coefficient(5) > model.floor_coefficient(4));
}

#[test]
fn nan_anchor_is_rejected() {
    let src = "[linear_model.anchor]\nsqm = nan\nfloor = 1\nminutes = 1\nage = 0\nprice = 163990.0\n";
    let err = Config::from_toml(src).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)), "{err:?}");

    let src = "[linear_model.anchor]\nsqm = 40.0\nfloor = 1\nminutes = 1\nage = 0\nprice = inf\n";
    assert!(matches!(
        Config::from_toml(src).unwrap_err(),
        ConfigError::Invalid(_)
    ));
}
