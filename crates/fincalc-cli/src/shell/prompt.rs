use std::io::{self, BufRead, Write};

/// Constraints a scalar entry must satisfy before it is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputRule {
    /// Reject values below zero
    pub non_negative: bool,
    /// Reject exactly zero
    pub non_zero: bool,
}

impl InputRule {
    pub const ANY: InputRule = InputRule {
        non_negative: false,
        non_zero: false,
    };
    pub const NON_NEGATIVE: InputRule = InputRule {
        non_negative: true,
        non_zero: false,
    };
    pub const NON_ZERO: InputRule = InputRule {
        non_negative: false,
        non_zero: true,
    };

    /// The message shown when `value` breaks the rule, if it does.
    fn violation(self, value: f64) -> Option<&'static str> {
        if self.non_negative && value < 0.0 {
            Some("Value must be positive. Try again.")
        } else if self.non_zero && value == 0.0 {
            Some("Value must be non-zero. Try again.")
        } else {
            None
        }
    }
}

/// Write `prompt` and read one line. End of input is reported as
/// `UnexpectedEof` so callers can unwind the session with `?`.
pub fn read_line<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> io::Result<String> {
    write!(out, "{}", prompt)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
    }
    Ok(line.trim().to_string())
}

/// Prompt until the user enters a finite number that satisfies `rule`.
pub fn read_number<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
    rule: InputRule,
) -> io::Result<f64> {
    loop {
        let line = read_line(input, out, prompt)?;
        let value = match line.parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => {
                writeln!(out, "Invalid input. Please enter a numeric value.")?;
                continue;
            }
        };
        if let Some(msg) = rule.violation(value) {
            writeln!(out, "{}", msg)?;
            continue;
        }
        return Ok(value);
    }
}
