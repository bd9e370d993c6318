use std::collections::HashMap;

use crate::models::{NetworkComparison, Plan};

/// Supplies doctor and pharmacy overlap between two plan networks.
///
/// Real provider-network matching lives behind this trait so the placeholder
/// data below can be swapped for an actual provider directory lookup.
pub trait NetworkSource {
    fn compare(&self, baseline: &Plan, candidate: &Plan) -> NetworkComparison;
}

/// Placeholder network data keyed by candidate plan id.
///
/// Doctor overlap and coverage notes come from the per-plan table; pharmacy
/// gain is derived from the candidate's own coverage count. The baseline is
/// ignored entirely, which is as far as placeholder data can go.
#[derive(Debug, Default)]
pub struct StaticNetworkSource {
    overrides: HashMap<String, NetworkComparison>,
}

impl StaticNetworkSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register placeholder overlap data for a plan id.
    pub fn with_override(mut self, plan_id: &str, comparison: NetworkComparison) -> Self {
        self.overrides.insert(plan_id.to_lowercase(), comparison);
        self
    }
}

impl NetworkSource for StaticNetworkSource {
    fn compare(&self, _baseline: &Plan, candidate: &Plan) -> NetworkComparison {
        let mut comparison = self
            .overrides
            .get(&candidate.key())
            .cloned()
            .unwrap_or_default();

        comparison.pharmacies_gained = if candidate.pharmacies_covered > 0 { 1 } else { 0 };
        comparison
    }
}

/// The placeholder overlap table for the sample catalog.
pub fn sample_network_source() -> StaticNetworkSource {
    StaticNetworkSource::new()
        .with_override(
            "2",
            NetworkComparison {
                doctors_lost: 1,
                ..Default::default()
            },
        )
        .with_override(
            "3",
            NetworkComparison {
                doctors_gained: 2,
                coverage_changes: vec!["Better prescription drug coverage".to_string()],
                ..Default::default()
            },
        )
        .with_override(
            "4",
            NetworkComparison {
                doctors_gained: 1,
                coverage_changes: vec![
                    "Enhanced dental coverage".to_string(),
                    "Vision coverage included".to_string(),
                ],
                ..Default::default()
            },
        )
}
