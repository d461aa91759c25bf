//! Voice ROI - estimation engine for automated voice-call handling adoption
//!
//! This library provides:
//! - Missed-call, lost-revenue, and recovered-revenue estimation from weekly call volume
//! - Baseline vs automated-answering scenario comparison
//! - Payback, annualized, and cumulative net-gain projection
//! - Prefilled shop profiles and batch scenario runs

pub mod estimator;
pub mod inputs;
pub mod scenario;

// Re-export commonly used types
pub use estimator::{compute_metrics, RoiMetrics};
pub use inputs::{CallInputs, InputOverrides, Profile};
pub use scenario::ScenarioRunner;
