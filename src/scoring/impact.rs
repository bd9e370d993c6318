use crate::models::{NetworkComparison, Plan, PlanChangeImpact};
use crate::scoring::constants::MONTHS_PER_YEAR;

/// Compute the delta of switching from `baseline` to `candidate`.
///
/// Returns `None` when no baseline plan is on file; that is a defined no-op
/// state, not an error. Network overlap counts and coverage notes come from
/// the injected network source result and are forwarded unchanged.
///
/// Callers should check [`PlanChangeImpact::should_display`] before
/// rendering; a result with zero savings and no losses carries nothing worth
/// showing even when gains are present.
pub fn compute_impact(
    baseline: Option<&Plan>,
    candidate: &Plan,
    network: &NetworkComparison,
) -> Option<PlanChangeImpact> {
    let baseline = baseline?;

    let current_yearly = baseline.monthly_premium * MONTHS_PER_YEAR;
    let candidate_yearly = candidate.monthly_premium * MONTHS_PER_YEAR;
    let yearly_savings = (current_yearly - candidate_yearly).round() as i64;

    Some(PlanChangeImpact {
        yearly_savings,
        doctors_lost: network.doctors_lost,
        doctors_gained: network.doctors_gained,
        pharmacies_lost: network.pharmacies_lost,
        pharmacies_gained: network.pharmacies_gained,
        coverage_changes: network.coverage_changes.clone(),
    })
}
