use serde::{Deserialize, Serialize};
use std::fmt;

/// Monetary amounts at a point in time.
pub type Money = f64;

/// Per-period rates expressed as decimals (0.08 = 8%).
pub type Rate = f64;

/// Count of compounding periods. May be fractional.
pub type Periods = f64;

/// The quantity a calculation solves for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    FutureValue,
    PresentValue,
    InterestRate,
    NumberOfPeriods,
}

impl Quantity {
    pub const ALL: [Quantity; 4] = [
        Quantity::FutureValue,
        Quantity::PresentValue,
        Quantity::InterestRate,
        Quantity::NumberOfPeriods,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Quantity::FutureValue => "Future Value",
            Quantity::PresentValue => "Present Value",
            Quantity::InterestRate => "Interest Rate",
            Quantity::NumberOfPeriods => "Number of Periods",
        }
    }

    /// Suffix appended to a rendered value. Solved rates come back in percent.
    pub fn unit(self) -> &'static str {
        match self {
            Quantity::InterestRate => "%",
            _ => "",
        }
    }

    /// One-line human rendering, e.g. `Interest Rate: 7.18%`.
    pub fn render(self, value: f64, decimals: usize) -> String {
        format!("{}: {:.*}{}", self.label(), decimals, value, self.unit())
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "f64".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_appends_percent_for_rates() {
        assert_eq!(
            Quantity::InterestRate.render(7.177346, 2),
            "Interest Rate: 7.18%"
        );
        assert_eq!(
            Quantity::FutureValue.render(2158.924997, 2),
            "Future Value: 2158.92"
        );
    }

    #[test]
    fn test_render_respects_decimals() {
        assert_eq!(
            Quantity::NumberOfPeriods.render(10.244768, 4),
            "Number of Periods: 10.2448"
        );
        assert_eq!(Quantity::PresentValue.render(99.6, 0), "Present Value: 100");
    }

    #[test]
    fn test_quantity_serializes_snake_case() {
        let json = serde_json::to_string(&Quantity::NumberOfPeriods).unwrap();
        assert_eq!(json, "\"number_of_periods\"");
    }
}
