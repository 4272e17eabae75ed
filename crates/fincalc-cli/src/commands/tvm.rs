use clap::Args;
use serde_json::Value;

use fincalc_core::calculator::{self, Calculation};

/// Arguments for a future value calculation
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct FvArgs {
    /// Present value at time 0
    #[arg(long, alias = "pv")]
    pub present_value: f64,

    /// Per-period interest rate (e.g. 0.08 for 8%)
    #[arg(long)]
    pub rate: f64,

    /// Number of compounding periods
    #[arg(long)]
    pub periods: f64,

    /// Payment at the end of each period
    #[arg(long, alias = "pmt", default_value_t = 0.0)]
    pub payment: f64,
}

/// Arguments for a present value calculation
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct PvArgs {
    /// Target future value
    #[arg(long, alias = "fv")]
    pub future_value: f64,

    /// Per-period interest rate (e.g. 0.08 for 8%)
    #[arg(long)]
    pub rate: f64,

    /// Number of compounding periods
    #[arg(long)]
    pub periods: f64,

    /// Payment at the end of each period
    #[arg(long, alias = "pmt", default_value_t = 0.0)]
    pub payment: f64,
}

/// Arguments for solving the interest rate
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct RateArgs {
    /// Target future value
    #[arg(long, alias = "fv")]
    pub future_value: f64,

    /// Present value at time 0 (must be > 0)
    #[arg(long, alias = "pv")]
    pub present_value: f64,

    /// Number of compounding periods (must be > 0)
    #[arg(long)]
    pub periods: f64,

    /// Payment per period (must be 0)
    #[arg(long, alias = "pmt", default_value_t = 0.0)]
    pub payment: f64,
}

/// Arguments for solving the number of periods
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct PeriodsArgs {
    /// Target future value (must be > 0)
    #[arg(long, alias = "fv")]
    pub future_value: f64,

    /// Present value at time 0 (must be > 0)
    #[arg(long, alias = "pv")]
    pub present_value: f64,

    /// Per-period interest rate, non-zero (e.g. 0.07 for 7%)
    #[arg(long)]
    pub rate: f64,

    /// Payment per period (must be 0)
    #[arg(long, alias = "pmt", default_value_t = 0.0)]
    pub payment: f64,
}

pub fn run_fv(args: FvArgs) -> Result<Value, Box<dyn std::error::Error>> {
    solve(Calculation::FutureValue {
        present_value: args.present_value,
        rate: args.rate,
        periods: args.periods,
        payment: args.payment,
    })
}

pub fn run_pv(args: PvArgs) -> Result<Value, Box<dyn std::error::Error>> {
    solve(Calculation::PresentValue {
        future_value: args.future_value,
        rate: args.rate,
        periods: args.periods,
        payment: args.payment,
    })
}

pub fn run_rate(args: RateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    solve(Calculation::InterestRate {
        future_value: args.future_value,
        present_value: args.present_value,
        periods: args.periods,
        payment: args.payment,
    })
}

pub fn run_periods(args: PeriodsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    solve(Calculation::NumberOfPeriods {
        future_value: args.future_value,
        present_value: args.present_value,
        rate: args.rate,
        payment: args.payment,
    })
}

fn solve(calc: Calculation) -> Result<Value, Box<dyn std::error::Error>> {
    let result = calculator::solve(&calc)?;
    Ok(serde_json::to_value(result)?)
}
