//! Estimation input records, prefilled profiles, and batch loading

mod data;
mod loader;
mod profiles;

pub use data::{CallInputs, DEFAULT_HORIZON_MONTHS};
pub use loader::{load_inputs_csv, read_inputs_csv, LoadError, CSV_COLUMNS};
pub use profiles::{builtin_profiles, load_profiles, InputOverrides, Profile, ProfileError};
