use crate::error::FinCalcError;
use crate::types::{Money, Periods, Rate};
use crate::FinCalcResult;

fn ensure_finite(field: &str, value: f64) -> FinCalcResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(FinCalcError::invalid(field, "Value must be a finite number"))
    }
}

fn finite_result(operation: &str, value: f64) -> FinCalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FinCalcError::NonFiniteResult {
            operation: operation.into(),
            value,
        })
    }
}

/// Future value of `present_value` plus an ordinary annuity of `payment`
/// after `periods` compounding periods at `rate`.
///
/// fv = pv * (1 + i)^n + pmt * ((1 + i)^n - 1) / i
///
/// A zero rate takes the linear path `pv + pmt * n`.
pub fn future_value(
    present_value: Money,
    rate: Rate,
    periods: Periods,
    payment: Money,
) -> FinCalcResult<Money> {
    ensure_finite("present_value", present_value)?;
    ensure_finite("rate", rate)?;
    ensure_finite("periods", periods)?;
    ensure_finite("payment", payment)?;

    if periods < 0.0 {
        return Err(FinCalcError::invalid(
            "periods",
            "Number of periods cannot be negative",
        ));
    }

    if rate == 0.0 {
        return finite_result("future_value", present_value + payment * periods);
    }

    let growth = (1.0 + rate).powf(periods);
    finite_result(
        "future_value",
        present_value * growth + payment * (growth - 1.0) / rate,
    )
}

/// Present value needed to reach `future_value` after `periods` periods at
/// `rate`, net of an ordinary annuity of `payment`.
///
/// pv = (fv - pmt * ((1 + i)^n - 1) / i) / (1 + i)^n
pub fn present_value(
    future_value: Money,
    rate: Rate,
    periods: Periods,
    payment: Money,
) -> FinCalcResult<Money> {
    ensure_finite("future_value", future_value)?;
    ensure_finite("rate", rate)?;
    ensure_finite("periods", periods)?;
    ensure_finite("payment", payment)?;

    if periods < 0.0 {
        return Err(FinCalcError::invalid(
            "periods",
            "Number of periods cannot be negative",
        ));
    }

    if rate == 0.0 {
        return finite_result("present_value", future_value - payment * periods);
    }

    let growth = (1.0 + rate).powf(periods);
    finite_result(
        "present_value",
        (future_value - payment * (growth - 1.0) / rate) / growth,
    )
}

/// Per-period rate, in percent, that grows `present_value` into
/// `future_value` over `periods` periods.
///
/// Only the zero-payment case has a closed form, so a non-zero `payment` is
/// rejected.
pub fn interest_rate(
    future_value: Money,
    present_value: Money,
    periods: Periods,
    payment: Money,
) -> FinCalcResult<Rate> {
    ensure_finite("future_value", future_value)?;
    ensure_finite("present_value", present_value)?;
    ensure_finite("periods", periods)?;
    ensure_finite("payment", payment)?;

    if payment != 0.0 {
        return Err(FinCalcError::invalid(
            "payment",
            "Payment must be zero for interest rate calculation",
        ));
    }
    if periods <= 0.0 {
        return Err(FinCalcError::invalid(
            "periods",
            "Number of periods must be greater than zero",
        ));
    }
    if present_value <= 0.0 {
        return Err(FinCalcError::invalid(
            "present_value",
            "Present value must be greater than zero",
        ));
    }

    finite_result(
        "interest_rate",
        100.0 * ((future_value / present_value).powf(1.0 / periods) - 1.0),
    )
}

/// Number of periods for `present_value` to grow into `future_value` at
/// `rate`. Zero-payment only.
pub fn number_of_periods(
    future_value: Money,
    present_value: Money,
    rate: Rate,
    payment: Money,
) -> FinCalcResult<Periods> {
    ensure_finite("future_value", future_value)?;
    ensure_finite("present_value", present_value)?;
    ensure_finite("rate", rate)?;
    ensure_finite("payment", payment)?;

    if payment != 0.0 {
        return Err(FinCalcError::invalid(
            "payment",
            "Payment must be zero for calculating number of periods",
        ));
    }
    if rate == 0.0 {
        return Err(FinCalcError::invalid(
            "rate",
            "Interest rate cannot be zero for calculating number of periods",
        ));
    }
    if future_value <= 0.0 || present_value <= 0.0 {
        return Err(FinCalcError::invalid(
            "future_value/present_value",
            "Future and present values must be greater than zero",
        ));
    }
    if rate <= -1.0 {
        return Err(FinCalcError::invalid(
            "rate",
            "Interest rate must be greater than -100%",
        ));
    }

    finite_result(
        "number_of_periods",
        (future_value / present_value).ln() / (1.0 + rate).ln(),
    )
}
