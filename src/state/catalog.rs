use std::collections::HashMap;

use strsim::jaro_winkler;

use crate::models::Plan;
use crate::state::persistence::PlanState;

/// Similarity floor for fuzzy plan-name resolution.
const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Manages the plan catalog and the user's optional current plan.
pub struct PlanCatalog {
    /// All plans keyed by lowercase id.
    plans: HashMap<String, Plan>,
    current_plan: Option<Plan>,
}

impl PlanCatalog {
    /// Create a catalog from a list of plans.
    ///
    /// Deduplicates by lowercase id (last occurrence wins).
    pub fn new(plans: Vec<Plan>) -> Self {
        let mut map = HashMap::new();
        for plan in plans {
            map.insert(plan.key(), plan);
        }
        Self {
            plans: map,
            current_plan: None,
        }
    }

    pub fn from_state(state: PlanState) -> Self {
        let mut catalog = Self::new(state.plans);
        catalog.current_plan = state.current_plan;
        catalog
    }

    pub fn to_state(&self) -> PlanState {
        PlanState {
            plans: self.sorted_plans().into_iter().cloned().collect(),
            current_plan: self.current_plan.clone(),
        }
    }

    /// Get a plan by id (case-insensitive).
    pub fn get_plan(&self, id: &str) -> Option<&Plan> {
        self.plans.get(&id.to_lowercase())
    }

    /// Resolve a plan by id or exact name only (case-insensitive).
    ///
    /// Interactive callers fall back to [`Self::fuzzy_matches`] with user
    /// confirmation; nothing is silently guessed here.
    pub fn resolve_exact(&self, query: &str) -> Option<&Plan> {
        if let Some(plan) = self.get_plan(query) {
            return Some(plan);
        }

        let lowered = query.to_lowercase();
        self.plans
            .values()
            .find(|p| p.plan_name.to_lowercase() == lowered)
    }

    /// Resolve a plan by id, exact name, or best fuzzy name match.
    pub fn resolve(&self, query: &str) -> Option<&Plan> {
        if let Some(plan) = self.resolve_exact(query) {
            return Some(plan);
        }

        self.fuzzy_matches(query, 1).into_iter().next().map(|(p, _)| p)
    }

    /// Rank plans by name similarity to a query, best first.
    ///
    /// Only matches above the similarity floor are returned.
    pub fn fuzzy_matches(&self, query: &str, limit: usize) -> Vec<(&Plan, f64)> {
        let lowered = query.to_lowercase();

        let mut candidates: Vec<(&Plan, f64)> = self
            .plans
            .values()
            .map(|p| {
                let name_score = jaro_winkler(&p.plan_name.to_lowercase(), &lowered);
                let carrier_score = jaro_winkler(&p.carrier.to_lowercase(), &lowered);
                (p, name_score.max(carrier_score))
            })
            .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        candidates.truncate(limit);
        candidates
    }

    pub fn current_plan(&self) -> Option<&Plan> {
        self.current_plan.as_ref()
    }

    pub fn set_current_plan(&mut self, plan: Plan) {
        self.current_plan = Some(plan);
    }

    pub fn clear_current_plan(&mut self) {
        self.current_plan = None;
    }

    /// All plans in display order: recommended first, then by match score
    /// descending, then by name for a stable order.
    pub fn sorted_plans(&self) -> Vec<&Plan> {
        let mut plans: Vec<&Plan> = self.plans.values().collect();
        plans.sort_by(|a, b| {
            b.recommended
                .cmp(&a.recommended)
                .then(b.match_score.cmp(&a.match_score))
                .then_with(|| a.plan_name.cmp(&b.plan_name))
        });
        plans
    }

    /// Count of plans in the catalog.
    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}
