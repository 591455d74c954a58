//! Closed-form annuity formulas: future value, present value, periodic
//! payment, number of periods.
//!
//! All four solve the standard compound-interest relation
//! `pv*(1+r)^n + pmt*k*((1+r)^n - 1)/r + fv = 0` (with `k` the payment-timing
//! factor), degenerating to `n*pmt + pv + fv = 0` when the rate is zero.
//! Signs follow the spreadsheet convention: cash paid out is negative, cash
//! received is positive. Rates are per period, not annualized.

use serde::{Deserialize, Serialize};

/// When during each period the payment falls due
///
/// Spreadsheet functions encode this as the trailing `type` argument
/// (0 = end of period, 1 = start of period).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaymentTiming {
    /// Ordinary annuity: payment at the end of each period
    #[default]
    DueAtPeriodEnd,
    /// Annuity-due: payment at the start of each period
    DueAtPeriodStart,
}

impl PaymentTiming {
    /// Multiplier applied to the payment term: a start-of-period payment
    /// accrues one extra period of interest
    pub fn payment_factor(self, rate: f64) -> f64 {
        match self {
            PaymentTiming::DueAtPeriodStart => rate + 1.0,
            PaymentTiming::DueAtPeriodEnd => 1.0,
        }
    }
}

/// Calculate the future value of a present amount plus a stream of level
/// payments.
///
/// # Arguments
/// * `rate` - Interest rate per period (0.05 = 5%); may be zero
/// * `nper` - Number of periods; fractional periods are allowed
/// * `pmt` - Payment per period, signed
/// * `pv` - Present value, signed
/// * `timing` - Whether payments fall at the start or end of each period
///
/// # Returns
/// The future value. Degenerate inputs (e.g. `rate` of -1) yield NaN or
/// Infinity, which propagate to the caller untrapped.
pub fn future_value(rate: f64, nper: f64, pmt: f64, pv: f64, timing: PaymentTiming) -> f64 {
    if rate == 0.0 {
        -(pv + nper * pmt)
    } else {
        let rate1 = rate + 1.0;
        ((1.0 - rate1.powf(nper)) * timing.payment_factor(rate) * pmt) / rate
            - pv * rate1.powf(nper)
    }
}

/// Calculate the present value of a future amount plus a stream of level
/// payments.
///
/// Algebraic inverse of [`future_value`] for the same payment and timing.
/// Arguments mirror `future_value` with `fv` (the target future value) in
/// place of `pv`.
pub fn present_value(rate: f64, nper: f64, pmt: f64, fv: f64, timing: PaymentTiming) -> f64 {
    if rate == 0.0 {
        -(nper * pmt + fv)
    } else {
        let rate1 = rate + 1.0;
        (((1.0 - rate1.powf(nper)) / rate) * timing.payment_factor(rate) * pmt - fv)
            / rate1.powf(nper)
    }
}

/// Calculate the level payment per period that carries `pv` to `fv` over
/// `nper` periods at `rate`.
///
/// With `rate` of zero this is simply `-(fv + pv) / nper`; a zero `nper`
/// then divides by zero and the non-finite result propagates.
pub fn periodic_payment(rate: f64, nper: f64, pv: f64, fv: f64, timing: PaymentTiming) -> f64 {
    if rate == 0.0 {
        -(fv + pv) / nper
    } else {
        let rate1 = rate + 1.0;
        (fv + pv * rate1.powf(nper)) * rate
            / (timing.payment_factor(rate) * (1.0 - rate1.powf(nper)))
    }
}

/// Calculate the number of periods needed for a stream of level payments to
/// reach `fv`.
///
/// The nonzero-rate branch picks the logarithm arguments by the sign of
/// `pmt*k/rate - fv`, keeping them positive where possible; this sign
/// convention matches the spreadsheet reference formula and is kept as-is.
/// Inputs that drive a logarithm argument non-positive yield NaN, propagated
/// untrapped. Note the nonzero-rate branch does not read `pv`; only the
/// zero-rate form `-(fv + pv) / pmt` uses it.
pub fn number_of_periods(rate: f64, pmt: f64, pv: f64, fv: f64, timing: PaymentTiming) -> f64 {
    if rate == 0.0 {
        -(fv + pv) / pmt
    } else {
        let rate1 = rate + 1.0;
        let rate2 = timing.payment_factor(rate) * pmt / rate;

        let term1 = if rate2 - fv < 0.0 {
            (fv - rate2).ln()
        } else {
            (rate2 - fv).ln()
        };
        let term2 = if rate2 - fv < 0.0 {
            (-pmt - rate2).ln()
        } else {
            (rate2 + pmt).ln()
        };

        (term1 - term2) / rate1.ln()
    }
}
