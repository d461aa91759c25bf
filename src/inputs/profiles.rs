//! Prefilled input profiles
//!
//! Named preset input bundles applied by merging over the defaults. A small
//! catalog is built in; an alternative catalog can be loaded from a JSON
//! file holding an array of profile objects.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::data::CallInputs;

/// Error loading a profile catalog
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to read profile catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse profile catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Sparse overlay of the input record
///
/// Unset fields keep the base value when applied. Wire names match
/// [`CallInputs`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputOverrides {
    #[serde(rename = "AOR", default, skip_serializing_if = "Option::is_none")]
    pub average_order_revenue: Option<f64>,

    #[serde(rename = "CPW", default, skip_serializing_if = "Option::is_none")]
    pub calls_per_week: Option<f64>,

    #[serde(rename = "AR", default, skip_serializing_if = "Option::is_none")]
    pub answer_rate: Option<f64>,

    #[serde(rename = "CR_answered", default, skip_serializing_if = "Option::is_none")]
    pub conversion_answered: Option<f64>,

    #[serde(
        rename = "CR_missed_retry",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub conversion_missed_retry: Option<f64>,

    #[serde(rename = "Labor_month", default, skip_serializing_if = "Option::is_none")]
    pub labor_cost_month: Option<f64>,

    #[serde(
        rename = "VoiceAICostPerMonth",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub voice_ai_cost_month: Option<f64>,

    #[serde(
        rename = "Uplift_answer_rate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub uplift_answer_rate: Option<f64>,

    #[serde(
        rename = "Uplift_conversion",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub uplift_conversion: Option<f64>,

    #[serde(rename = "T_months", default, skip_serializing_if = "Option::is_none")]
    pub horizon_months: Option<f64>,
}

impl InputOverrides {
    /// Merge the set fields over a base record
    pub fn apply(&self, base: &CallInputs) -> CallInputs {
        CallInputs {
            average_order_revenue: self
                .average_order_revenue
                .unwrap_or(base.average_order_revenue),
            calls_per_week: self.calls_per_week.unwrap_or(base.calls_per_week),
            answer_rate: self.answer_rate.unwrap_or(base.answer_rate),
            conversion_answered: self
                .conversion_answered
                .unwrap_or(base.conversion_answered),
            conversion_missed_retry: self
                .conversion_missed_retry
                .unwrap_or(base.conversion_missed_retry),
            labor_cost_month: self.labor_cost_month.unwrap_or(base.labor_cost_month),
            voice_ai_cost_month: self
                .voice_ai_cost_month
                .unwrap_or(base.voice_ai_cost_month),
            uplift_answer_rate: self
                .uplift_answer_rate
                .unwrap_or(base.uplift_answer_rate),
            uplift_conversion: self.uplift_conversion.unwrap_or(base.uplift_conversion),
            horizon_months: self.horizon_months.unwrap_or(base.horizon_months),
        }
    }
}

/// A named preset input bundle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name shown in the profile picker
    pub name: String,

    /// Fields this profile overrides
    #[serde(flatten)]
    pub overrides: InputOverrides,
}

impl Profile {
    /// Inputs for this profile, merged over the given base
    pub fn inputs(&self, base: &CallInputs) -> CallInputs {
        self.overrides.apply(base)
    }
}

/// Built-in profile catalog
pub fn builtin_profiles() -> Vec<Profile> {
    vec![
        Profile {
            name: "Single-bay garage".to_string(),
            overrides: InputOverrides {
                average_order_revenue: Some(320.0),
                calls_per_week: Some(25.0),
                answer_rate: Some(0.55),
                labor_cost_month: Some(1200.0),
                ..Default::default()
            },
        },
        Profile {
            name: "Mid-size repair shop".to_string(),
            overrides: InputOverrides {
                average_order_revenue: Some(400.0),
                calls_per_week: Some(60.0),
                answer_rate: Some(0.7),
                ..Default::default()
            },
        },
        Profile {
            name: "High-volume service center".to_string(),
            overrides: InputOverrides {
                average_order_revenue: Some(520.0),
                calls_per_week: Some(140.0),
                answer_rate: Some(0.78),
                labor_cost_month: Some(4800.0),
                voice_ai_cost_month: Some(900.0),
                ..Default::default()
            },
        },
    ]
}

/// Load a profile catalog from a JSON file (an array of profile objects)
pub fn load_profiles(path: &Path) -> Result<Vec<Profile>, ProfileError> {
    let file = File::open(path)?;
    let profiles: Vec<Profile> = serde_json::from_reader(BufReader::new(file))?;
    log::debug!("loaded {} profiles from {}", profiles.len(), path.display());
    Ok(profiles)
}
