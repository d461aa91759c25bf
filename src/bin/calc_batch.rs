//! Run ROI estimates for a batch of input records from CSV
//!
//! Reads one input record per row and writes the fourteen derived metrics
//! per row for comparison across shops.

use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use rayon::prelude::*;
use voice_roi::compute_metrics;
use voice_roi::inputs::load_inputs_csv;

fn main() {
    env_logger::init();

    let input_path = env::args()
        .nth(1)
        .unwrap_or_else(|| "roi_inputs.csv".to_string());
    let output_path = env::args()
        .nth(2)
        .unwrap_or_else(|| "roi_batch_output.csv".to_string());

    let start = Instant::now();
    println!("Loading input records from {}...", input_path);

    let inputs = load_inputs_csv(Path::new(&input_path)).expect("Failed to load input records");
    println!("Loaded {} records in {:?}", inputs.len(), start.elapsed());

    println!("Running estimates...");
    let calc_start = Instant::now();

    // Rows are independent, so estimate them in parallel
    let results: Vec<_> = inputs.par_iter().map(compute_metrics).collect();

    println!("Estimates complete in {:?}", calc_start.elapsed());

    let mut file = File::create(&output_path).expect("Failed to create output file");

    writeln!(
        file,
        "MissedCallsMonth,BookingsCurrent,LostBookingsConservative,RevenueLostConservative,\
         RecoveredBookingsIfRecontacted,RevenueRecoveredIfRecontacted,AR_ai,CR_ai,\
         BookingsWithAI,NetRevenueGainMonthly,PaybackMonths,AnnualizedGain,CumulativeGainT,\
         LaborHoursSavedMonthly,LaborCostSavedMonthly"
    )
    .unwrap();

    for m in &results {
        writeln!(
            file,
            "{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.6},{:.6},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4}",
            m.missed_calls_month,
            m.bookings_current,
            m.lost_bookings_conservative,
            m.revenue_lost_conservative,
            m.recovered_bookings_if_recontacted,
            m.revenue_recovered_if_recontacted,
            m.answer_rate_with_ai,
            m.conversion_with_ai,
            m.bookings_with_ai,
            m.net_revenue_gain_monthly,
            m.payback_months,
            m.annualized_gain,
            m.cumulative_gain_horizon,
            m.labor_hours_saved_monthly,
            m.labor_cost_saved_monthly,
        )
        .unwrap();
    }

    println!("Results written to: {}", output_path);
}
