use serde_json::Value;
use std::io::{self, Write};

use super::format_scalar;

/// Write the result as two-column CSV (`field,value`) to stdout.
pub fn print_csv(value: &Value, decimals: usize) {
    let stdout = io::stdout();
    if let Err(e) = write_csv(stdout.lock(), value, decimals) {
        eprintln!("CSV output error: {}", e);
    }
}

fn write_csv<W: Write>(writer: W, value: &Value, decimals: usize) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    match value {
        Value::Object(map) => {
            wtr.write_record(["field", "value"])?;
            let rows = match map.get("result") {
                Some(Value::Object(result)) => result,
                _ => map,
            };
            for (key, val) in rows {
                wtr.write_record([key.as_str(), &format_scalar(val, decimals)])?;
            }
            if let Some(Value::String(meth)) = map.get("methodology") {
                wtr.write_record(["methodology", meth.as_str()])?;
            }
        }
        _ => {
            wtr.write_record([&format_scalar(value, decimals)])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
