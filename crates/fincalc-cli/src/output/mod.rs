pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value, decimals: usize) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value, decimals),
        OutputFormat::Csv => csv_out::print_csv(value, decimals),
        OutputFormat::Minimal => minimal::print_minimal(value, decimals),
    }
}

/// Render a scalar JSON value for human-facing formats. Floats are rounded
/// to `decimals` places; integers and strings pass through.
pub(crate) fn format_scalar(value: &Value, decimals: usize) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) if n.is_f64() => match n.as_f64() {
            Some(f) => format!("{:.*}", decimals, f),
            None => n.to_string(),
        },
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(arr) => arr
            .iter()
            .map(|v| format_scalar(v, decimals))
            .collect::<Vec<_>>()
            .join("; "),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
