use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::affordability::AffordabilityAssumptions;
use crate::amortization::{CostAssumptions, DEFAULT_ANNUAL_RATE, DEFAULT_LOAN_YEARS};
use crate::estimate::{CoefficientModel, LinearModel};

/// 별도 지정이 없을 때 찾는 설정 파일 이름.
pub const DEFAULT_CONFIG_FILE: &str = "property_cost.toml";

/// 대출 기본 조건. CLI 인자로 실행마다 덮어쓸 수 있다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoanDefaults {
    pub years: u32,
    pub annual_rate: f64,
}

impl Default for LoanDefaults {
    fn default() -> Self {
        Self {
            years: DEFAULT_LOAN_YEARS,
            annual_rate: DEFAULT_ANNUAL_RATE,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub loan: LoanDefaults,
    pub costs: CostAssumptions,
    pub affordability: AffordabilityAssumptions,
    pub linear_model: LinearModel,
    pub coefficient_model: CoefficientModel,
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
    #[error("{} already exists (use --force to overwrite)", .0.display())]
    AlreadyExists(PathBuf),
}

impl Config {
    /// TOML 문자열에서 설정을 읽고 검증한다.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let cfg: Config = toml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// 비율과 모델 상수가 계산 가능한 범위인지 확인한다.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));

        if self.loan.years == 0 {
            return invalid("loan.years must be at least 1");
        }
        if !self.loan.annual_rate.is_finite() || self.loan.annual_rate < 0.0 {
            return invalid("loan.annual_rate must be zero or positive");
        }
        let ratios = [
            ("costs.down_payment_ratio", self.costs.down_payment_ratio),
            ("costs.tax_insurance_rate", self.costs.tax_insurance_rate),
            ("costs.maintenance_rate", self.costs.maintenance_rate),
            ("costs.benchmark_rate", self.costs.benchmark_rate),
        ];
        for (name, value) in ratios {
            if !(0.0..1.0).contains(&value) {
                return Err(ConfigError::Invalid(format!("{name} must lie in [0, 1)")));
            }
        }
        let share = self.affordability.rent_share;
        if share.is_nan() || share <= 0.0 || share > 1.0 {
            return invalid("affordability.rent_share must lie in (0, 1]");
        }
        self.linear_model
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        self.coefficient_model
            .validate()
            .map_err(ConfigError::Invalid)?;
        Ok(())
    }

    /// 설정을 파일에 저장한다. `force`가 아니면 기존 파일을 덮어쓰지 않는다.
    pub fn save(&self, path: &Path, force: bool) -> Result<(), ConfigError> {
        if path.exists() && !force {
            return Err(ConfigError::AlreadyExists(path.to_path_buf()));
        }
        let content = self.to_toml()?;
        fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "configuration written");
        Ok(())
    }
}

/// 지정한 파일을 읽는다. 파일이 없으면 오류이다.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg = Config::from_toml(&content)?;
    debug!(path = %path.display(), "configuration loaded");
    Ok(cfg)
}

/// `--config` 경로, 현재 디렉터리의 property_cost.toml, 기본값 순으로 설정을 정한다.
/// 로드 과정에서 파일을 쓰지는 않는다.
pub fn load_or_default(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    if let Some(path) = explicit {
        return load(path);
    }
    let path = Path::new(DEFAULT_CONFIG_FILE);
    if path.exists() {
        load(path)
    } else {
        debug!("no configuration file found, using defaults");
        Ok(Config::default())
    }
}
