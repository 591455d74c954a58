//! Net present value of a periodic cash-flow series

/// Calculate the net present value of a series of cash flows at a constant
/// discount rate.
///
/// The first cash flow is discounted one full period, the second two, and so
/// on: Σ cash_flows[i] / (1+rate)^(i+1). Accumulation runs in ascending
/// index order with a running divisor, so results are reproducible
/// bit-for-bit across calls. Income should be positive, payments negative.
///
/// An empty series yields 0.0. A rate of -1 divides by zero and the
/// resulting Infinity/NaN propagates; a rate of zero simply sums the raw
/// cash flows.
pub fn net_present_value(rate: f64, cash_flows: &[f64]) -> f64 {
    let rate1 = rate + 1.0;
    let mut divisor = rate1;
    let mut npv = 0.0;
    for &cf in cash_flows {
        npv += cf / divisor;
        divisor *= rate1;
    }
    npv
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_series_is_zero() {
        assert_eq!(net_present_value(0.1, &[]), 0.0);
    }

    #[test]
    fn test_single_cash_flow() {
        // NPV(rate, [c]) == c / (1 + rate)
        assert_relative_eq!(net_present_value(0.08, &[108.0]), 100.0, max_relative = 1e-12);
        assert_relative_eq!(
            net_present_value(0.1, &[250.0]),
            250.0 / 1.1,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_level_cash_flows() {
        // 100/1.1 + 100/1.21 + 100/1.331
        let npv = net_present_value(0.1, &[100.0, 100.0, 100.0]);
        assert!((npv - 248.6851991).abs() < 1e-6, "got {}", npv);
    }

    #[test]
    fn test_zero_rate_sums_raw_flows() {
        let npv = net_present_value(0.0, &[50.0, -20.0, 10.0]);
        assert_eq!(npv, 40.0);
    }

    #[test]
    fn test_rate_of_minus_one_propagates() {
        // Divisor is zero from the first period on
        assert!(net_present_value(-1.0, &[100.0]).is_infinite());
    }

    #[test]
    fn test_order_matches_running_divisor() {
        // Same series through an explicit powf accumulation agrees to
        // within normal floating-point tolerance
        let flows = [-5000.0, 2000.0, 2500.0, 3000.0];
        let rate: f64 = 0.1;
        let expected: f64 = flows
            .iter()
            .enumerate()
            .map(|(i, &cf)| cf / (1.0 + rate).powi(i as i32 + 1))
            .sum();
        assert_relative_eq!(net_present_value(rate, &flows), expected, max_relative = 1e-12);
    }
}
