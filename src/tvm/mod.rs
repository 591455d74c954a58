//! Time-value-of-money formulas with spreadsheet semantics

mod annuity;
mod npv;

pub use annuity::{
    future_value, number_of_periods, periodic_payment, present_value, PaymentTiming,
};
pub use npv::net_present_value;
