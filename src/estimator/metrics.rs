//! Derived-metrics output record

use serde::Serialize;

/// The fourteen derived business metrics for one estimation
///
/// A fresh value returned per call; never mutated or merged with prior
/// results. `payback_months` carries `f64::INFINITY` when the subscription
/// never pays for itself, which serializes to JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoiMetrics {
    /// Expected monthly call volume that goes unanswered at baseline
    #[serde(rename = "MissedCallsMonth")]
    pub missed_calls_month: f64,

    /// Baseline monthly bookings from answered calls
    #[serde(rename = "BookingsCurrent")]
    pub bookings_current: f64,

    /// Bookings forgone on missed calls, priced at the answered conversion rate
    #[serde(rename = "LostBookingsConservative")]
    pub lost_bookings_conservative: f64,

    /// Revenue forgone on missed calls (conservative)
    #[serde(rename = "RevenueLostConservative")]
    pub revenue_lost_conservative: f64,

    /// Bookings a manual recontact campaign could recover
    #[serde(rename = "RecoveredBookingsIfRecontacted")]
    pub recovered_bookings_if_recontacted: f64,

    /// Revenue a manual recontact campaign could recover
    #[serde(rename = "RevenueRecoveredIfRecontacted")]
    pub revenue_recovered_if_recontacted: f64,

    /// Answer rate after adopting the service, clamped at 1
    #[serde(rename = "AR_ai")]
    pub answer_rate_with_ai: f64,

    /// Answered-call conversion rate after adopting the service, clamped at 1
    #[serde(rename = "CR_ai")]
    pub conversion_with_ai: f64,

    /// Monthly bookings after adopting the service
    #[serde(rename = "BookingsWithAI")]
    pub bookings_with_ai: f64,

    /// Monthly revenue gain net of the subscription cost
    #[serde(rename = "NetRevenueGainMonthly")]
    pub net_revenue_gain_monthly: f64,

    /// Months for cumulative gain to offset the subscription; infinite when
    /// the gain is not positive
    #[serde(rename = "PaybackMonths")]
    pub payback_months: f64,

    /// Net gain over twelve months, independent of the horizon
    #[serde(rename = "AnnualizedGain")]
    pub annualized_gain: f64,

    /// Net gain over the requested horizon
    #[serde(rename = "CumulativeGainT")]
    pub cumulative_gain_horizon: f64,

    /// Staff hours per month no longer spent on manual recontact
    #[serde(rename = "LaborHoursSavedMonthly")]
    pub labor_hours_saved_monthly: f64,

    /// Labor cost saved per month, floored at zero
    #[serde(rename = "LaborCostSavedMonthly")]
    pub labor_cost_saved_monthly: f64,
}

impl RoiMetrics {
    /// Whether the subscription ever pays for itself
    pub fn has_payback(&self) -> bool {
        self.payback_months.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use crate::estimator::compute_metrics;
    use crate::inputs::CallInputs;

    #[test]
    fn test_wire_names_and_infinite_payback_encoding() {
        // Zero uplift leaves the gain negative, so payback is the sentinel.
        let inputs = CallInputs {
            uplift_answer_rate: 0.0,
            uplift_conversion: 0.0,
            ..CallInputs::default_shop()
        };
        let metrics = compute_metrics(&inputs);
        assert!(!metrics.has_payback());

        let json = serde_json::to_value(&metrics).unwrap();
        assert!(json.get("MissedCallsMonth").unwrap().is_number());
        assert!(json.get("BookingsWithAI").unwrap().is_number());
        assert!(json.get("AR_ai").unwrap().is_number());
        assert!(json.get("CumulativeGainT").unwrap().is_number());
        assert!(json.get("PaybackMonths").unwrap().is_null());
    }
}
