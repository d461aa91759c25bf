//! Compare ROI outcomes across the prefilled shop profiles
//!
//! Usage: cargo run --bin compare_profiles

use voice_roi::estimator::format_payback;
use voice_roi::inputs::builtin_profiles;
use voice_roi::ScenarioRunner;

fn main() {
    env_logger::init();

    let runner = ScenarioRunner::new();
    let outcomes = runner.run_profiles(&builtin_profiles());

    println!("{}", "=".repeat(96));
    println!(
        "{:<28} {:>10} {:>12} {:>14} {:>10} {:>14}",
        "Profile", "Calls/wk", "Missed/mo", "Net gain/mo", "Payback", "Annualized"
    );
    println!("{}", "=".repeat(96));

    for outcome in &outcomes {
        println!(
            "{:<28} {:>10.1} {:>12.1} {:>14.2} {:>10} {:>14.2}",
            outcome.name,
            outcome.inputs.calls_per_week,
            outcome.metrics.missed_calls_month,
            outcome.metrics.net_revenue_gain_monthly,
            format_payback(outcome.metrics.payback_months),
            outcome.metrics.annualized_gain,
        );
    }
}
