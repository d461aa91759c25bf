//! ROI estimation formulas
//!
//! The single pure transformation from an input record to the derived
//! business metrics. No I/O, no state, no randomness: identical inputs
//! always produce identical outputs.

use crate::inputs::{CallInputs, DEFAULT_HORIZON_MONTHS};

use super::metrics::RoiMetrics;

/// Calendar approximation for converting weekly call volume to monthly
pub const WEEKS_PER_MONTH: f64 = 4.33;

/// Staff hours spent per manual recontact attempt (15 minutes)
pub const AVG_HANDLE_FRACTION_HOUR: f64 = 0.25;

/// Full-time hours backing a monthly labor budget
pub const HOURS_PER_LABOR_MONTH: f64 = 160.0;

/// Clamp a rate at 1.0 without flooring it below.
///
/// Written as a comparison so a NaN rate falls through unchanged;
/// `f64::min` would discard the NaN operand.
fn cap_at_one(rate: f64) -> f64 {
    if rate > 1.0 {
        1.0
    } else {
        rate
    }
}

/// Floor a saving at zero. NaN falls through unchanged.
fn floor_at_zero(value: f64) -> f64 {
    if value < 0.0 {
        0.0
    } else {
        value
    }
}

/// Compute the derived metrics for one input record
///
/// Produces the baseline scenario, the with-automation scenario, and their
/// delta. Never panics for numeric input; out-of-range values (an answer
/// rate above 1, a negative uplift driving a rate below 0) propagate into
/// well-defined outputs rather than being corrected, and a non-numeric
/// (NaN) input propagates through every downstream field.
///
/// # Arguments
/// * `inputs` - Coerced input record; cost fields read as zero when absent
///
/// # Returns
/// * `RoiMetrics` - The fourteen derived metrics
pub fn compute_metrics(inputs: &CallInputs) -> RoiMetrics {
    let aor = inputs.average_order_revenue;
    let answer_rate = inputs.answer_rate;
    let conv_answered = inputs.conversion_answered;
    let conv_retry = inputs.conversion_missed_retry;
    let voice_cost = inputs.voice_ai_cost_month;

    // A zero horizon reads as unset and falls back to a year.
    let horizon = if inputs.horizon_months == 0.0 {
        DEFAULT_HORIZON_MONTHS
    } else {
        inputs.horizon_months
    };

    let monthly_calls = inputs.calls_per_week * WEEKS_PER_MONTH;

    let missed_calls_month = monthly_calls * (1.0 - answer_rate);
    let bookings_current = monthly_calls * answer_rate * conv_answered;

    // Bookings forgone on missed calls, priced at the answered conversion
    // rate as a deliberate conservative proxy, not the retry rate.
    let lost_bookings_conservative = monthly_calls * (1.0 - answer_rate) * conv_answered;
    let revenue_lost_conservative = lost_bookings_conservative * aor;

    // Separate, more optimistic estimate of a manual recontact campaign.
    let recovered_bookings_if_recontacted = missed_calls_month * conv_retry;
    let revenue_recovered_if_recontacted = recovered_bookings_if_recontacted * aor;

    // Post-automation rates: clamped at 1, not floored at 0.
    let answer_rate_with_ai = cap_at_one(answer_rate + inputs.uplift_answer_rate);
    let conversion_with_ai = cap_at_one(conv_answered + inputs.uplift_conversion);
    let bookings_with_ai = monthly_calls * answer_rate_with_ai * conversion_with_ai;

    let net_revenue_gain_monthly = (bookings_with_ai - bookings_current) * aor - voice_cost;

    // Floor of 0.1 months; a very large gain would otherwise read as an
    // instant payback.
    let payback_months = if net_revenue_gain_monthly > 0.0 {
        (voice_cost / net_revenue_gain_monthly).max(0.1)
    } else {
        f64::INFINITY
    };

    let annualized_gain = net_revenue_gain_monthly * 12.0;
    let cumulative_gain_horizon = net_revenue_gain_monthly * horizon;

    // Hours no longer spent recontacting the missed calls that would still
    // not convert; the converted share needs handling either way.
    let labor_hours_saved_monthly =
        (missed_calls_month - missed_calls_month * conv_retry) * AVG_HANDLE_FRACTION_HOUR;
    let labor_cost_saved_monthly = floor_at_zero(
        labor_hours_saved_monthly * (inputs.labor_cost_month / HOURS_PER_LABOR_MONTH),
    );

    RoiMetrics {
        missed_calls_month,
        bookings_current,
        lost_bookings_conservative,
        revenue_lost_conservative,
        recovered_bookings_if_recontacted,
        revenue_recovered_if_recontacted,
        answer_rate_with_ai,
        conversion_with_ai,
        bookings_with_ai,
        net_revenue_gain_monthly,
        payback_months,
        annualized_gain,
        cumulative_gain_horizon,
        labor_hours_saved_monthly,
        labor_cost_saved_monthly,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_shop_scenario() {
        let metrics = compute_metrics(&CallInputs::default_shop());

        assert_relative_eq!(metrics.missed_calls_month, 77.94, max_relative = 1e-12);
        assert_relative_eq!(metrics.bookings_current, 21.8232, max_relative = 1e-12);
        assert_relative_eq!(
            metrics.lost_bookings_conservative,
            9.3528,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            metrics.revenue_lost_conservative,
            3741.12,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            metrics.recovered_bookings_if_recontacted,
            3.897,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            metrics.revenue_recovered_if_recontacted,
            1558.8,
            max_relative = 1e-12
        );
        assert_relative_eq!(metrics.answer_rate_with_ai, 0.9, max_relative = 1e-12);
        assert_relative_eq!(metrics.conversion_with_ai, 0.15, max_relative = 1e-12);
        assert_relative_eq!(metrics.bookings_with_ai, 35.073, max_relative = 1e-12);
        assert_relative_eq!(
            metrics.net_revenue_gain_monthly,
            4699.92,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            metrics.payback_months,
            600.0 / 4699.92,
            max_relative = 1e-12
        );
        assert_relative_eq!(metrics.annualized_gain, 56399.04, max_relative = 1e-12);
        assert_relative_eq!(
            metrics.cumulative_gain_horizon,
            56399.04,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            metrics.labor_hours_saved_monthly,
            18.51075,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            metrics.labor_cost_saved_monthly,
            277.66125,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_outputs_finite_for_in_range_inputs() {
        let metrics = compute_metrics(&CallInputs::default_shop());

        for value in [
            metrics.missed_calls_month,
            metrics.bookings_current,
            metrics.lost_bookings_conservative,
            metrics.revenue_lost_conservative,
            metrics.recovered_bookings_if_recontacted,
            metrics.revenue_recovered_if_recontacted,
            metrics.answer_rate_with_ai,
            metrics.conversion_with_ai,
            metrics.bookings_with_ai,
            metrics.net_revenue_gain_monthly,
            metrics.payback_months,
            metrics.annualized_gain,
            metrics.cumulative_gain_horizon,
            metrics.labor_hours_saved_monthly,
            metrics.labor_cost_saved_monthly,
        ] {
            assert!(value.is_finite(), "expected finite metric, got {}", value);
        }
    }

    #[test]
    fn test_bookings_bounded_by_call_volume() {
        let inputs = CallInputs::default_shop();
        let metrics = compute_metrics(&inputs);

        assert!(metrics.bookings_current <= inputs.calls_per_week * WEEKS_PER_MONTH);
    }

    #[test]
    fn test_zero_call_volume() {
        let inputs = CallInputs {
            calls_per_week: 0.0,
            ..CallInputs::default_shop()
        };
        let metrics = compute_metrics(&inputs);

        assert_eq!(metrics.missed_calls_month, 0.0);
        assert_eq!(metrics.bookings_current, 0.0);
        assert_eq!(metrics.revenue_lost_conservative, 0.0);
        assert_eq!(metrics.revenue_recovered_if_recontacted, 0.0);
        assert_eq!(metrics.bookings_with_ai, 0.0);
        // Only the subscription cost remains, so no payback is ever reached.
        assert_eq!(metrics.net_revenue_gain_monthly, -600.0);
        assert!(metrics.payback_months.is_infinite());
    }

    #[test]
    fn test_uplift_clamps_answer_rate_at_one() {
        let inputs = CallInputs {
            answer_rate: 0.9,
            uplift_answer_rate: 0.5,
            ..CallInputs::default_shop()
        };
        let metrics = compute_metrics(&inputs);

        assert_eq!(metrics.answer_rate_with_ai, 1.0);
    }

    #[test]
    fn test_negative_uplift_is_not_floored() {
        let inputs = CallInputs {
            conversion_answered: 0.05,
            uplift_conversion: -0.2,
            ..CallInputs::default_shop()
        };
        let metrics = compute_metrics(&inputs);

        assert_relative_eq!(metrics.conversion_with_ai, -0.15, max_relative = 1e-12);
        assert!(metrics.bookings_with_ai < 0.0);
    }

    #[test]
    fn test_payback_floor_with_zero_cost() {
        let inputs = CallInputs {
            voice_ai_cost_month: 0.0,
            ..CallInputs::default_shop()
        };
        let metrics = compute_metrics(&inputs);

        assert!(metrics.net_revenue_gain_monthly > 0.0);
        assert_eq!(metrics.payback_months, 0.1);
    }

    #[test]
    fn test_no_payback_when_gain_is_not_positive() {
        let inputs = CallInputs {
            uplift_answer_rate: 0.0,
            uplift_conversion: 0.0,
            ..CallInputs::default_shop()
        };
        let metrics = compute_metrics(&inputs);

        assert!(metrics.net_revenue_gain_monthly <= 0.0);
        assert!(metrics.payback_months.is_infinite());
    }

    #[test]
    fn test_annualized_gain_ignores_horizon() {
        let base = compute_metrics(&CallInputs::default_shop());
        let longer = compute_metrics(&CallInputs {
            horizon_months: 36.0,
            ..CallInputs::default_shop()
        });

        assert_eq!(longer.annualized_gain, base.annualized_gain);
        assert_relative_eq!(
            longer.annualized_gain,
            longer.net_revenue_gain_monthly * 12.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            longer.cumulative_gain_horizon,
            longer.net_revenue_gain_monthly * 36.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_zero_horizon_falls_back_to_a_year() {
        let metrics = compute_metrics(&CallInputs {
            horizon_months: 0.0,
            ..CallInputs::default_shop()
        });

        assert_relative_eq!(
            metrics.cumulative_gain_horizon,
            metrics.net_revenue_gain_monthly * DEFAULT_HORIZON_MONTHS,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_labor_saving_never_negative() {
        // A negative labor budget would otherwise flip the saving negative.
        let negative_labor = compute_metrics(&CallInputs {
            labor_cost_month: -2400.0,
            ..CallInputs::default_shop()
        });
        assert_eq!(negative_labor.labor_cost_saved_monthly, 0.0);

        // A retry conversion above 1 drives the saved hours negative.
        let high_retry = compute_metrics(&CallInputs {
            conversion_missed_retry: 1.5,
            ..CallInputs::default_shop()
        });
        assert!(high_retry.labor_hours_saved_monthly < 0.0);
        assert_eq!(high_retry.labor_cost_saved_monthly, 0.0);
    }

    #[test]
    fn test_idempotent() {
        let inputs = CallInputs::default_shop();

        assert_eq!(compute_metrics(&inputs), compute_metrics(&inputs));
    }

    #[test]
    fn test_nan_input_propagates() {
        let inputs = CallInputs {
            answer_rate: f64::NAN,
            ..CallInputs::default_shop()
        };
        let metrics = compute_metrics(&inputs);

        assert!(metrics.missed_calls_month.is_nan());
        assert!(metrics.answer_rate_with_ai.is_nan());
        assert!(metrics.net_revenue_gain_monthly.is_nan());
        // A NaN gain fails the > 0 test, so payback lands on the sentinel.
        assert!(metrics.payback_months.is_infinite());
    }
}
