//! Scenario runner for batch estimations
//!
//! Pre-seeds a base input record, then runs many estimates with profile
//! overlays or ad-hoc records without rebuilding the base each time.

use crate::estimator::{compute_metrics, RoiMetrics};
use crate::inputs::{CallInputs, InputOverrides, Profile};

/// Outcome of one profile run
#[derive(Debug, Clone)]
pub struct ProfileOutcome {
    /// Profile name as listed in the catalog
    pub name: String,

    /// Inputs after merging the profile over the base
    pub inputs: CallInputs,

    /// Derived metrics for those inputs
    pub metrics: RoiMetrics,
}

/// Pre-seeded runner for batch estimations
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
///
/// for outcome in runner.run_profiles(&builtin_profiles()) {
///     println!("{}: {:?}", outcome.name, outcome.metrics);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    /// Base inputs every run starts from
    base_inputs: CallInputs,
}

impl ScenarioRunner {
    /// Create runner seeded with the form-prefill defaults
    pub fn new() -> Self {
        Self {
            base_inputs: CallInputs::default_shop(),
        }
    }

    /// Create runner seeded with specific base inputs
    pub fn with_base(base_inputs: CallInputs) -> Self {
        Self { base_inputs }
    }

    /// Run a single estimate on the base inputs
    pub fn run(&self) -> RoiMetrics {
        compute_metrics(&self.base_inputs)
    }

    /// Run a single estimate with an overlay merged over the base
    pub fn run_with(&self, overrides: &InputOverrides) -> RoiMetrics {
        compute_metrics(&overrides.apply(&self.base_inputs))
    }

    /// Run every profile in a catalog over the base inputs
    pub fn run_profiles(&self, profiles: &[Profile]) -> Vec<ProfileOutcome> {
        profiles
            .iter()
            .map(|profile| {
                let inputs = profile.inputs(&self.base_inputs);
                let metrics = compute_metrics(&inputs);
                ProfileOutcome {
                    name: profile.name.clone(),
                    inputs,
                    metrics,
                }
            })
            .collect()
    }

    /// Run estimates for a batch of independent input records
    pub fn run_batch(&self, batch: &[CallInputs]) -> Vec<RoiMetrics> {
        batch.iter().map(compute_metrics).collect()
    }

    /// Get reference to the base inputs for inspection
    pub fn base_inputs(&self) -> &CallInputs {
        &self.base_inputs
    }

    /// Get mutable reference to the base inputs for customization
    pub fn base_inputs_mut(&mut self) -> &mut CallInputs {
        &mut self.base_inputs
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::builtin_profiles;

    #[test]
    fn test_run_profiles() {
        let runner = ScenarioRunner::new();
        let outcomes = runner.run_profiles(&builtin_profiles());

        assert_eq!(outcomes.len(), builtin_profiles().len());

        // Profiles only overlay a few fields; the rest come from the base.
        for outcome in &outcomes {
            assert_eq!(
                outcome.inputs.conversion_answered,
                runner.base_inputs().conversion_answered
            );
        }
    }

    #[test]
    fn test_larger_uplift_yields_larger_gain() {
        let runner = ScenarioRunner::new();

        let gains: Vec<_> = [0.1, 0.2, 0.3]
            .iter()
            .map(|&uplift| {
                let overrides = InputOverrides {
                    uplift_answer_rate: Some(uplift),
                    ..Default::default()
                };
                runner.run_with(&overrides).net_revenue_gain_monthly
            })
            .collect();

        assert!(gains[1] > gains[0]);
        assert!(gains[2] > gains[1]);
    }

    #[test]
    fn test_run_batch() {
        let runner = ScenarioRunner::new();
        let batch = vec![CallInputs::default_shop(); 3];

        let results = runner.run_batch(&batch);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0], results[2]);
    }
}
