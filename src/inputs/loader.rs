//! CSV-based batch input loader
//!
//! Loads one estimation input record per row for batch runs.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

use super::data::{CallInputs, DEFAULT_HORIZON_MONTHS};

/// Expected CSV header columns, in order
pub const CSV_COLUMNS: [&str; 10] = [
    "AOR",
    "CPW",
    "AR",
    "CR_answered",
    "CR_missed_retry",
    "Labor_month",
    "VoiceAICostPerMonth",
    "Uplift_answer_rate",
    "Uplift_conversion",
    "T_months",
];

/// Error loading batch input records
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open input file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read input row: {0}")]
    Csv(#[from] csv::Error),

    #[error("unexpected header column {found:?} at position {index}, expected {expected:?}")]
    Header {
        index: usize,
        found: String,
        expected: &'static str,
    },
}

/// Read input records from CSV data
///
/// A blank cell takes the same missing-field default as the wire format
/// (costs read as 0, the horizon as 12, everything else as NaN); any other
/// cell coerces like a wire value.
pub fn read_inputs_csv<R: Read>(reader: R) -> Result<Vec<CallInputs>, LoadError> {
    let mut rdr = csv::Reader::from_reader(reader);

    {
        let headers = rdr.headers()?;
        for (index, expected) in CSV_COLUMNS.iter().enumerate() {
            let found = headers.get(index).unwrap_or("");
            if found != *expected {
                return Err(LoadError::Header {
                    index,
                    found: found.to_string(),
                    expected,
                });
            }
        }
    }

    let mut inputs = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let get = |i: usize| record.get(i).unwrap_or("");

        inputs.push(CallInputs {
            average_order_revenue: cell(get(0), f64::NAN),
            calls_per_week: cell(get(1), f64::NAN),
            answer_rate: cell(get(2), f64::NAN),
            conversion_answered: cell(get(3), f64::NAN),
            conversion_missed_retry: cell(get(4), f64::NAN),
            labor_cost_month: cell(get(5), 0.0),
            voice_ai_cost_month: cell(get(6), 0.0),
            uplift_answer_rate: cell(get(7), f64::NAN),
            uplift_conversion: cell(get(8), f64::NAN),
            horizon_months: cell(get(9), DEFAULT_HORIZON_MONTHS),
        });
    }

    Ok(inputs)
}

fn cell(raw: &str, missing: f64) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        missing
    } else {
        trimmed.parse().unwrap_or(f64::NAN)
    }
}

/// Load input records from a CSV file
pub fn load_inputs_csv(path: &Path) -> Result<Vec<CallInputs>, LoadError> {
    let file = File::open(path)?;
    let inputs = read_inputs_csv(file)?;
    log::debug!("loaded {} input records from {}", inputs.len(), path.display());
    Ok(inputs)
}
