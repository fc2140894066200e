use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::DEFAULT_CONFIG_FILE;

#[derive(Debug, Parser)]
#[command(name = "property_cost_estimator")]
#[command(about = "Estimate property price, ownership cost and rent affordability.")]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to ./property_cost.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Use a known purchase price
    #[command(alias = "f")]
    Flat {
        /// Purchase price in yen
        #[arg(long)]
        price: f64,
        #[command(flatten)]
        finance: FinanceArgs,
    },
    /// Per-sqm rate with linear floor, station and age adjustments
    #[command(alias = "l")]
    Linear {
        #[command(flatten)]
        property: PropertyArgs,
        #[command(flatten)]
        finance: FinanceArgs,
    },
    /// Station-band rate with floor and age coefficients
    #[command(alias = "c")]
    Coefficient {
        #[command(flatten)]
        property: PropertyArgs,
        #[command(flatten)]
        finance: FinanceArgs,
    },
    /// Scale a comparable transaction by floor area
    Comparable {
        /// Floor area of the target unit in sqm
        #[arg(long)]
        sqm: f64,
        /// Total price of the comparable transaction in yen
        #[arg(long, requires = "comparable_sqm", conflicts_with = "price_per_tsubo")]
        comparable_price: Option<f64>,
        /// Floor area of the comparable unit in sqm
        #[arg(long, requires = "comparable_price")]
        comparable_sqm: Option<f64>,
        /// Comparable unit price in yen per tsubo
        #[arg(long, required_unless_present = "comparable_price")]
        price_per_tsubo: Option<f64>,
        #[command(flatten)]
        finance: FinanceArgs,
    },
    /// Write the default configuration file
    InitConfig {
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        path: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, Args)]
pub struct PropertyArgs {
    /// Floor area in sqm
    #[arg(long)]
    pub sqm: f64,
    /// Floor number
    #[arg(long, default_value_t = 1)]
    pub floor: u32,
    /// Walking minutes to the nearest station
    #[arg(long)]
    pub minutes: u32,
    /// Building age in years
    #[arg(long, default_value_t = 0)]
    pub age: u32,
}

#[derive(Debug, Clone, Copy, Args)]
pub struct FinanceArgs {
    /// Gross monthly income in yen
    #[arg(long)]
    pub income: f64,
    /// Loan term in years (overrides the configuration)
    #[arg(long)]
    pub years: Option<u32>,
    /// Annual interest rate as a fraction, e.g. 0.01 (overrides the configuration)
    #[arg(long)]
    pub rate: Option<f64>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
