//! Financial Formulas - closed-form time-value-of-money calculations
//!
//! This library provides:
//! - Future value and present value of an annuity plus a lump sum
//! - Net present value of a periodic cash-flow series
//! - Periodic payment solving for a target present/future value
//! - Number of periods solving for a target future value
//!
//! Every function is pure and synchronous: scalar/slice inputs in, one
//! `f64` out. Numerically degenerate inputs (a rate of -1, a logarithm of a
//! non-positive number) produce IEEE-754 NaN or Infinity rather than an
//! error; callers interpret non-finite results under their own conventions.

pub mod tvm;

// Re-export commonly used items
pub use tvm::{
    future_value, net_present_value, number_of_periods, periodic_payment, present_value,
    PaymentTiming,
};
