//! Estimation engine: the pure metrics computation and its presentation

mod engine;
mod metrics;
mod report;

pub use engine::{
    compute_metrics, AVG_HANDLE_FRACTION_HOUR, HOURS_PER_LABOR_MONTH, WEEKS_PER_MONTH,
};
pub use metrics::RoiMetrics;
pub use report::{format_count, format_currency, format_payback, render_report};
