use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::format_scalar;

/// Format output as a table using the tabled crate.
pub fn print_table(value: &Value, decimals: usize) {
    println!("{}", render_table(value, decimals));
}

fn render_table(value: &Value, decimals: usize) -> String {
    let Value::Object(envelope) = value else {
        return format_scalar(value, decimals);
    };

    let rows = match envelope.get("result") {
        Some(Value::Object(result)) => result,
        _ => envelope,
    };

    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in rows {
        builder.push_record([key.as_str(), &format_scalar(val, decimals)]);
    }
    let mut out = Table::from(builder).to_string();

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            out.push_str("\n\nWarnings:");
            for w in warnings.iter().filter_map(Value::as_str) {
                out.push_str(&format!("\n  - {}", w));
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        out.push_str(&format!("\n\nMethodology: {}", meth));
    }

    out
}
