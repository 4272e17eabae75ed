use serde_json::Value;

use super::format_scalar;

/// Print just the solved value.
pub fn print_minimal(value: &Value, decimals: usize) {
    println!("{}", minimal_line(value, decimals));
}

fn minimal_line(value: &Value, decimals: usize) -> String {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    match result_obj.get("value") {
        Some(val) if !val.is_null() => format_scalar(val, decimals),
        _ => format_scalar(result_obj, decimals),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_picks_solved_value() {
        let envelope = json!({
            "result": { "quantity": "interest_rate", "value": 7.177346253629313 },
            "methodology": "Geometric growth rate (fv/pv)^(1/n) - 1",
        });
        assert_eq!(minimal_line(&envelope, 3), "7.177");
    }

    #[test]
    fn test_minimal_without_envelope() {
        assert_eq!(minimal_line(&json!(150.5), 1), "150.5");
    }
}
