//! Estimation input record matching the calculator wire format

use serde::{Deserialize, Deserializer, Serialize};

/// Horizon applied when the caller leaves `T_months` unset
pub const DEFAULT_HORIZON_MONTHS: f64 = 12.0;

fn default_horizon_months() -> f64 {
    DEFAULT_HORIZON_MONTHS
}

/// Absent volume/rate fields read as NaN so the omission is visible in
/// every derived metric rather than silently zeroed.
fn nan_when_absent() -> f64 {
    f64::NAN
}

/// A single estimation input record
///
/// Field names on the wire use the calculator form's short spellings
/// (`AOR`, `CPW`, ...). All fields are numeric; values arriving as
/// numeric strings are coerced on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallInputs {
    /// Average order/booking revenue
    #[serde(
        rename = "AOR",
        default = "nan_when_absent",
        deserialize_with = "coerce_number"
    )]
    pub average_order_revenue: f64,

    /// Calls received per week
    #[serde(
        rename = "CPW",
        default = "nan_when_absent",
        deserialize_with = "coerce_number"
    )]
    pub calls_per_week: f64,

    /// Baseline answer rate, in [0, 1]
    #[serde(
        rename = "AR",
        default = "nan_when_absent",
        deserialize_with = "coerce_number"
    )]
    pub answer_rate: f64,

    /// Conversion rate for an answered call, in [0, 1]
    #[serde(
        rename = "CR_answered",
        default = "nan_when_absent",
        deserialize_with = "coerce_number"
    )]
    pub conversion_answered: f64,

    /// Conversion rate for a missed call that is later recontacted, in [0, 1]
    #[serde(
        rename = "CR_missed_retry",
        default = "nan_when_absent",
        deserialize_with = "coerce_number"
    )]
    pub conversion_missed_retry: f64,

    /// Monthly front-desk labor cost (0 when absent)
    #[serde(rename = "Labor_month", default, deserialize_with = "coerce_number")]
    pub labor_cost_month: f64,

    /// Monthly subscription cost of the voice service (0 when absent)
    #[serde(
        rename = "VoiceAICostPerMonth",
        default,
        deserialize_with = "coerce_number"
    )]
    pub voice_ai_cost_month: f64,

    /// Expected answer-rate increase from adopting the service
    #[serde(
        rename = "Uplift_answer_rate",
        default = "nan_when_absent",
        deserialize_with = "coerce_number"
    )]
    pub uplift_answer_rate: f64,

    /// Expected conversion increase from adopting the service
    #[serde(
        rename = "Uplift_conversion",
        default = "nan_when_absent",
        deserialize_with = "coerce_number"
    )]
    pub uplift_conversion: f64,

    /// Time horizon for the cumulative projection, in months
    #[serde(
        rename = "T_months",
        default = "default_horizon_months",
        deserialize_with = "coerce_number"
    )]
    pub horizon_months: f64,
}

impl CallInputs {
    /// Form-prefill defaults for a mid-size repair shop
    pub fn default_shop() -> Self {
        Self {
            average_order_revenue: 400.0,
            calls_per_week: 60.0,
            answer_rate: 0.7,
            conversion_answered: 0.12,
            conversion_missed_retry: 0.05,
            labor_cost_month: 2400.0,
            voice_ai_cost_month: 600.0,
            uplift_answer_rate: 0.2,
            uplift_conversion: 0.03,
            horizon_months: 12.0,
        }
    }
}

impl Default for CallInputs {
    fn default() -> Self {
        Self::default_shop()
    }
}

/// Loose numeric coercion for wire values
///
/// Numbers pass through; numeric strings parse (whitespace trimmed); an
/// empty string or `null` reads as 0; booleans read as 1/0; anything else
/// becomes NaN and propagates through every derived metric.
fn coerce_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(coerce_value(&raw))
}

fn coerce_value(raw: &serde_json::Value) -> f64 {
    use serde_json::Value;

    match raw {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => coerce_str(s),
        Value::Bool(true) => 1.0,
        Value::Bool(false) => 0.0,
        Value::Null => 0.0,
        _ => f64::NAN,
    }
}

fn coerce_str(s: &str) -> f64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        0.0
    } else {
        trimmed.parse().unwrap_or(f64::NAN)
    }
}
