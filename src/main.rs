//! Voice ROI CLI
//!
//! Command-line interface for running ROI estimates

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use voice_roi::estimator::render_report;
use voice_roi::inputs::{builtin_profiles, load_profiles};
use voice_roi::{compute_metrics, CallInputs, InputOverrides};

/// Estimate the ROI of adopting automated voice-call handling
#[derive(Debug, Parser)]
#[command(name = "voice_roi", version)]
struct Cli {
    /// Apply a named profile from the catalog before any field overrides
    #[arg(long)]
    profile: Option<String>,

    /// Load the profile catalog from a JSON file instead of the built-ins
    #[arg(long, value_name = "PATH")]
    profiles_file: Option<PathBuf>,

    /// Average order/booking revenue
    #[arg(long)]
    aor: Option<f64>,

    /// Calls received per week
    #[arg(long)]
    calls_per_week: Option<f64>,

    /// Baseline answer rate, 0-1
    #[arg(long)]
    answer_rate: Option<f64>,

    /// Conversion rate for answered calls, 0-1
    #[arg(long)]
    conversion_answered: Option<f64>,

    /// Conversion rate for recontacted missed calls, 0-1
    #[arg(long)]
    conversion_missed_retry: Option<f64>,

    /// Monthly front-desk labor cost
    #[arg(long)]
    labor_month: Option<f64>,

    /// Monthly subscription cost of the voice service
    #[arg(long)]
    voice_ai_cost: Option<f64>,

    /// Expected answer-rate increase from adopting the service
    #[arg(long)]
    uplift_answer_rate: Option<f64>,

    /// Expected conversion increase from adopting the service
    #[arg(long)]
    uplift_conversion: Option<f64>,

    /// Time horizon for the cumulative projection, in months
    #[arg(long)]
    horizon_months: Option<f64>,

    /// Print the raw metrics record as JSON instead of the report
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn overrides(&self) -> InputOverrides {
        InputOverrides {
            average_order_revenue: self.aor,
            calls_per_week: self.calls_per_week,
            answer_rate: self.answer_rate,
            conversion_answered: self.conversion_answered,
            conversion_missed_retry: self.conversion_missed_retry,
            labor_cost_month: self.labor_month,
            voice_ai_cost_month: self.voice_ai_cost,
            uplift_answer_rate: self.uplift_answer_rate,
            uplift_conversion: self.uplift_conversion,
            horizon_months: self.horizon_months,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let catalog = match &cli.profiles_file {
        Some(path) => load_profiles(path)
            .with_context(|| format!("loading profile catalog from {}", path.display()))?,
        None => builtin_profiles(),
    };

    let mut inputs = CallInputs::default_shop();
    if let Some(name) = &cli.profile {
        let Some(profile) = catalog.iter().find(|p| p.name == *name) else {
            let available: Vec<_> = catalog.iter().map(|p| p.name.as_str()).collect();
            bail!(
                "unknown profile {:?} (available: {})",
                name,
                available.join(", ")
            );
        };
        inputs = profile.inputs(&inputs);
    }
    inputs = cli.overrides().apply(&inputs);

    let metrics = compute_metrics(&inputs);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&metrics)?);
        return Ok(());
    }

    println!("Voice ROI v0.1.0");
    println!("================\n");

    println!("Inputs:");
    println!("  Calls per week: {:.1}", inputs.calls_per_week);
    println!("  Answer rate: {:.2}", inputs.answer_rate);
    println!("  Conversion if answered: {:.2}", inputs.conversion_answered);
    println!(
        "  Conversion if recontacted: {:.2}",
        inputs.conversion_missed_retry
    );
    println!(
        "  Average booking revenue: ${:.2}",
        inputs.average_order_revenue
    );
    println!("  Voice AI cost / month: ${:.2}", inputs.voice_ai_cost_month);
    println!("  Horizon: {:.0} months", inputs.horizon_months);
    println!();

    println!("Results:");
    for line in render_report(&metrics).lines() {
        println!("  {}", line);
    }

    Ok(())
}
