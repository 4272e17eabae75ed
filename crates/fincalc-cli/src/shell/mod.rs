//! Interactive menu-driven calculator session.
//!
//! The session is generic over its input and output streams so the whole
//! dialogue can be driven from in-memory buffers.

pub mod menu;
pub mod prompt;

use std::io::{self, BufRead, Write};
use tracing::{debug, info};

use fincalc_core::calculator::{self, Calculation};
use fincalc_core::Quantity;

use menu::{MenuChoice, MenuStyle};
use prompt::{read_line, read_number, InputRule};

const RULE: &str = "========================================";

const RATE_PROMPT: &str = "Enter the interest rate (as a decimal, e.g., 0.08 for 8%): ";
const PERIODS_PROMPT: &str = "Enter the number of periods: ";
const PAYMENT_PROMPT: &str = "Enter the payment (enter 0 if none): ";
const ZERO_PAYMENT_PROMPT: &str = "Enter the payment (must be 0 for this calculation): ";

pub struct Session<R, W> {
    input: R,
    out: W,
    decimals: usize,
    menu_style: MenuStyle,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W, decimals: usize) -> Self {
        Self {
            input,
            out,
            decimals,
            menu_style: MenuStyle::Numbered,
        }
    }

    pub fn with_menu_style(mut self, menu_style: MenuStyle) -> Self {
        self.menu_style = menu_style;
        self
    }

    /// Run until the user exits or input is exhausted.
    pub fn run(&mut self) -> io::Result<()> {
        info!("interactive session started");

        match self.menu_loop() {
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                debug!("input closed, ending session");
                writeln!(self.out)?;
            }
            other => other?,
        }

        writeln!(self.out, "Goodbye!")?;
        self.out.flush()?;
        info!("interactive session finished");
        Ok(())
    }

    fn menu_loop(&mut self) -> io::Result<()> {
        loop {
            let choice = match self.menu_style {
                MenuStyle::ArrowKeys => menu::select_with_keys(&mut self.out)?,
                MenuStyle::Numbered => menu::select(&mut self.input, &mut self.out)?,
            };
            let quantity = match choice {
                MenuChoice::Calculate(q) => q,
                MenuChoice::Exit => return Ok(()),
            };

            writeln!(self.out, "\n{RULE}\n")?;
            self.calculate(quantity)?;
            writeln!(self.out, "\n{RULE}")?;

            let answer = read_line(
                &mut self.input,
                &mut self.out,
                "\nDo you want to perform another calculation? (y/n): ",
            )?;
            if !answer.eq_ignore_ascii_case("y") {
                return Ok(());
            }
        }
    }

    fn calculate(&mut self, quantity: Quantity) -> io::Result<()> {
        writeln!(self.out, "Calculate {}", quantity.label())?;

        let calc = self.gather(quantity)?;
        match calculator::solve(&calc) {
            Ok(output) => {
                for w in &output.warnings {
                    debug!(warning = %w, "calculation warning");
                }
                writeln!(self.out, "{}", output.result.render(self.decimals))?;
            }
            Err(e) => {
                debug!(error = %e, "calculation rejected");
                writeln!(self.out, "An error occurred: {}", e)?;
            }
        }
        Ok(())
    }

    /// Prompt for the inputs `quantity` depends on, in menu order.
    fn gather(&mut self, quantity: Quantity) -> io::Result<Calculation> {
        let calc = match quantity {
            Quantity::FutureValue => Calculation::FutureValue {
                present_value: self.number("Enter the present value: ", InputRule::NON_NEGATIVE)?,
                rate: self.number(RATE_PROMPT, InputRule::ANY)?,
                periods: self.number(PERIODS_PROMPT, InputRule::NON_NEGATIVE)?,
                payment: self.number(PAYMENT_PROMPT, InputRule::ANY)?,
            },
            Quantity::PresentValue => Calculation::PresentValue {
                future_value: self.number("Enter the future value: ", InputRule::NON_NEGATIVE)?,
                rate: self.number(RATE_PROMPT, InputRule::ANY)?,
                periods: self.number(PERIODS_PROMPT, InputRule::NON_NEGATIVE)?,
                payment: self.number(PAYMENT_PROMPT, InputRule::ANY)?,
            },
            Quantity::InterestRate => Calculation::InterestRate {
                future_value: self.number("Enter the future value: ", InputRule::NON_NEGATIVE)?,
                present_value: self.number("Enter the present value: ", InputRule::NON_NEGATIVE)?,
                periods: self.number(PERIODS_PROMPT, InputRule::NON_NEGATIVE)?,
                payment: self.number(ZERO_PAYMENT_PROMPT, InputRule::ANY)?,
            },
            Quantity::NumberOfPeriods => Calculation::NumberOfPeriods {
                future_value: self.number("Enter the future value: ", InputRule::NON_NEGATIVE)?,
                present_value: self.number("Enter the present value: ", InputRule::NON_NEGATIVE)?,
                rate: self.number(RATE_PROMPT, InputRule::NON_ZERO)?,
                payment: self.number(ZERO_PAYMENT_PROMPT, InputRule::ANY)?,
            },
        };
        Ok(calc)
    }

    fn number(&mut self, prompt: &str, rule: InputRule) -> io::Result<f64> {
        read_number(&mut self.input, &mut self.out, prompt, rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;
    use std::sync::{Arc, Mutex};
    use tracing::Level;

    fn transcript(typed: &str) -> String {
        let mut out = Vec::new();
        let mut session = Session::new(Cursor::new(typed.as_bytes().to_vec()), &mut out, 2);
        session.run().unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_exit_from_menu() {
        let text = transcript("5\n");
        assert!(text.starts_with("\n===== FinCalc-CLI =====\n"));
        assert!(text.ends_with("Enter your choice (1-5): Goodbye!\n"));
    }

    #[test]
    fn test_future_value_session() {
        let text = transcript("1\n1000\n0.08\n10\n0\nn\n");
        let body = text
            .split("Enter your choice (1-5): ")
            .nth(1)
            .unwrap();
        assert_eq!(
            body,
            "\n========================================\n\n\
             Calculate Future Value\n\
             Enter the present value: \
             Enter the interest rate (as a decimal, e.g., 0.08 for 8%): \
             Enter the number of periods: \
             Enter the payment (enter 0 if none): \
             Future Value: 2158.92\n\
             \n========================================\n\
             \nDo you want to perform another calculation? (y/n): \
             Goodbye!\n"
        );
    }

    #[test]
    fn test_domain_error_keeps_loop_alive() {
        // Rate with a payment fails, then the user runs a second calculation.
        let text = transcript("3\n2000\n1000\n10\n5\ny\n4\n2000\n1000\n0.07\n0\nN\n");
        assert!(text.contains(
            "An error occurred: Invalid argument: payment — Payment must be zero for interest rate calculation\n"
        ));
        assert!(text.contains("Number of Periods: 10.24\n"));
        assert!(text.ends_with("Goodbye!\n"));
    }

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_domain_error_reported_once() {
        // Default verbosity logs at WARN; a rejected input must not show up there.
        let logs = SharedBuf::default();
        let sink = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::WARN)
            .with_writer(move || sink.clone())
            .finish();
        let text = tracing::subscriber::with_default(subscriber, || {
            transcript("3\n2000\n1000\n10\n5\nn\n")
        });

        assert!(logs.0.lock().unwrap().is_empty());
        let reports: Vec<&str> = text
            .lines()
            .filter(|l| l.contains("Payment must be zero"))
            .collect();
        assert_eq!(
            reports,
            vec!["An error occurred: Invalid argument: payment — Payment must be zero for interest rate calculation"]
        );
    }

    #[test]
    fn test_periods_still_checks_payment_after_rate() {
        let text = transcript("4\n2000\n1000\n0.07\n5\nn\n");
        assert!(text.contains(
            "An error occurred: Invalid argument: payment — Payment must be zero for calculating number of periods\n"
        ));
        assert!(!text.contains("Number of Periods:"));
    }

    #[test]
    fn test_interest_rate_printed_as_percent() {
        let text = transcript("3\n2000\n1000\n10\n0\nno\n");
        assert!(text.contains("Interest Rate: 7.18%\n"));
    }

    #[test]
    fn test_invalid_entries_reprompt() {
        let text = transcript("2\n-150\nabc\n150\n0\n5\n10\nn\n");
        assert!(text.contains("Value must be positive. Try again.\n"));
        assert!(text.contains("Invalid input. Please enter a numeric value.\n"));
        assert!(text.contains("Present Value: 100.00\n"));
    }

    #[test]
    fn test_zero_rate_rejected_at_prompt_for_periods() {
        let text = transcript("4\n2000\n1000\n0\n0.07\n0\nn\n");
        assert!(text.contains("Value must be non-zero. Try again.\n"));
        assert!(text.contains("Number of Periods: 10.24\n"));
    }

    #[test]
    fn test_eof_mid_calculation_ends_cleanly() {
        let text = transcript("1\n1000\n");
        assert!(text.ends_with("Enter the interest rate (as a decimal, e.g., 0.08 for 8%): \nGoodbye!\n"));
    }

    #[test]
    fn test_decimals_setting() {
        let mut out = Vec::new();
        let typed = b"1\n100\n0\n5\n10\nn\n".to_vec();
        Session::new(Cursor::new(typed), &mut out, 0).run().unwrap();
        assert!(String::from_utf8(out).unwrap().contains("Future Value: 150\n"));
    }
}
