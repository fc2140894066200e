//! 핵심 계산 로직을 라이브러리로 분리하여 CLI 는 얇은 실행기로만 둔다.

pub mod affordability;
pub mod amortization;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod estimate;
pub mod logging;
pub mod money;
pub mod property;
pub mod report;

pub use error::CalcError;
