use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;

use crate::time_value;
use crate::types::{with_metadata, ComputationOutput, Money, Periods, Quantity, Rate};
use crate::FinCalcResult;

/// A single time-value-of-money request: the quantity to solve for plus the
/// inputs that determine it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "solve_for", rename_all = "snake_case")]
pub enum Calculation {
    FutureValue {
        present_value: Money,
        /// Per-period rate as a decimal
        rate: Rate,
        periods: Periods,
        /// Ordinary annuity payment per period
        #[serde(default)]
        payment: Money,
    },
    PresentValue {
        future_value: Money,
        rate: Rate,
        periods: Periods,
        #[serde(default)]
        payment: Money,
    },
    InterestRate {
        future_value: Money,
        present_value: Money,
        periods: Periods,
        /// Must be zero
        #[serde(default)]
        payment: Money,
    },
    NumberOfPeriods {
        future_value: Money,
        present_value: Money,
        rate: Rate,
        /// Must be zero
        #[serde(default)]
        payment: Money,
    },
}

impl Calculation {
    pub fn quantity(&self) -> Quantity {
        match self {
            Calculation::FutureValue { .. } => Quantity::FutureValue,
            Calculation::PresentValue { .. } => Quantity::PresentValue,
            Calculation::InterestRate { .. } => Quantity::InterestRate,
            Calculation::NumberOfPeriods { .. } => Quantity::NumberOfPeriods,
        }
    }
}

/// Output of a solved calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationOutput {
    /// The quantity that was solved for
    pub quantity: Quantity,
    /// Solved value. Interest rates are in percent.
    pub value: f64,
}

impl CalculationOutput {
    pub fn render(&self, decimals: usize) -> String {
        self.quantity.render(self.value, decimals)
    }
}

/// Solve a calculation and wrap the answer in the computation envelope.
pub fn solve(calc: &Calculation) -> FinCalcResult<ComputationOutput<CalculationOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let (value, methodology) = match *calc {
        Calculation::FutureValue {
            present_value,
            rate,
            periods,
            payment,
        } => {
            let fv = time_value::future_value(present_value, rate, periods, payment)?;
            rate_warnings(rate, &mut warnings);
            (fv, growth_methodology(rate, Quantity::FutureValue))
        }
        Calculation::PresentValue {
            future_value,
            rate,
            periods,
            payment,
        } => {
            let pv = time_value::present_value(future_value, rate, periods, payment)?;
            rate_warnings(rate, &mut warnings);
            (pv, growth_methodology(rate, Quantity::PresentValue))
        }
        Calculation::InterestRate {
            future_value,
            present_value,
            periods,
            payment,
        } => {
            let rate = time_value::interest_rate(future_value, present_value, periods, payment)?;
            warnings.push("Rate is expressed in percent per period".into());
            (rate, "Geometric growth rate (fv/pv)^(1/n) - 1")
        }
        Calculation::NumberOfPeriods {
            future_value,
            present_value,
            rate,
            payment,
        } => {
            let n = time_value::number_of_periods(future_value, present_value, rate, payment)?;
            if rate < 0.0 {
                warnings.push(format!(
                    "Negative rate ({rate}): value shrinks each period"
                ));
            }
            if n < 0.0 {
                warnings.push(
                    "Target future value is below the present value at this rate; the period count is negative"
                        .into(),
                );
            } else if n.fract() != 0.0 {
                warnings.push(format!(
                    "Result is a fractional number of periods; {} whole periods are needed to reach the target",
                    n.ceil()
                ));
            }
            (n, "Logarithmic solve ln(fv/pv) / ln(1 + i)")
        }
    };

    let output = CalculationOutput {
        quantity: calc.quantity(),
        value,
    };
    debug!(?calc, value, "solved {}", output.quantity);

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(methodology, calc, warnings, elapsed, output))
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn growth_methodology(rate: Rate, quantity: Quantity) -> &'static str {
    match quantity {
        _ if rate == 0.0 => "Linear accumulation (zero rate)",
        Quantity::PresentValue => "Compound discounting with ordinary annuity",
        _ => "Compound growth with ordinary annuity",
    }
}

fn rate_warnings(rate: Rate, warnings: &mut Vec<String>) {
    if rate <= -1.0 {
        warnings.push(format!(
            "Rate of {rate} is at or below -100%: the principal is wiped out"
        ));
    } else if rate < 0.0 {
        warnings.push(format!(
            "Negative rate ({rate}): value shrinks each period"
        ));
    }
}
