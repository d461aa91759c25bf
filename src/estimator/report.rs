//! Formatted rendering of the derived metrics
//!
//! Currency with two decimals, counts with one, and an infinite payback
//! shown as "Never" — the same presentation the calculator form uses.

use super::metrics::RoiMetrics;

/// Format a currency amount with two decimals
pub fn format_currency(value: f64) -> String {
    format!("${:.2}", value)
}

/// Format a count with one decimal
pub fn format_count(value: f64) -> String {
    format!("{:.1}", value)
}

/// Format the payback period, rendering the infinite sentinel as "Never"
pub fn format_payback(months: f64) -> String {
    if months.is_finite() {
        format!("{:.1}", months)
    } else {
        "Never".to_string()
    }
}

/// Render the ten-line results report
pub fn render_report(metrics: &RoiMetrics) -> String {
    let mut out = String::new();

    let mut line = |label: &str, value: String| {
        out.push_str(label);
        out.push_str(": ");
        out.push_str(&value);
        out.push('\n');
    };

    line("Missed calls / month", format_count(metrics.missed_calls_month));
    line("Bookings now / month", format_count(metrics.bookings_current));
    line(
        "Estimated revenue lost / month (conservative)",
        format_currency(metrics.revenue_lost_conservative),
    );
    line(
        "Estimated recovered revenue if recontacted / month",
        format_currency(metrics.revenue_recovered_if_recontacted),
    );
    line(
        "Bookings with Voice AI / month",
        format_count(metrics.bookings_with_ai),
    );
    line(
        "Net monthly revenue gain after voice cost",
        format_currency(metrics.net_revenue_gain_monthly),
    );
    line("Payback months", format_payback(metrics.payback_months));
    line(
        "Annualized net gain",
        format_currency(metrics.annualized_gain),
    );
    line(
        "Cumulative net gain",
        format_currency(metrics.cumulative_gain_horizon),
    );
    line(
        "Estimated labor cost saved / month",
        format_currency(metrics.labor_cost_saved_monthly),
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::compute_metrics;
    use crate::inputs::CallInputs;

    #[test]
    fn test_currency_two_decimals() {
        assert_eq!(format_currency(1234.5), "$1234.50");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(-600.0), "$-600.00");
    }

    #[test]
    fn test_count_one_decimal() {
        assert_eq!(format_count(77.94), "77.9");
        assert_eq!(format_count(35.073), "35.1");
    }

    #[test]
    fn test_payback_renders_never_when_infinite() {
        assert_eq!(format_payback(f64::INFINITY), "Never");
        assert_eq!(format_payback(0.1), "0.1");
    }

    #[test]
    fn test_report_lines() {
        let metrics = compute_metrics(&CallInputs::default_shop());
        let report = render_report(&metrics);

        assert_eq!(report.lines().count(), 10);
        assert!(report.contains("Missed calls / month: 77.9"));
        assert!(report.contains("Net monthly revenue gain after voice cost: $4699.92"));
        assert!(report.contains("Payback months: 0.1"));
    }
}
