use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};
use crate::models::Plan;

/// On-disk state: the plan catalog plus the user's current plan, if any.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanState {
    pub plans: Vec<Plan>,

    #[serde(rename = "currentPlan", default)]
    pub current_plan: Option<Plan>,
}

/// Load plan state from a JSON file.
///
/// Every plan must pass validation; a malformed record fails the whole load
/// so the scoring engines only ever see well-formed numbers.
pub fn load_state<P: AsRef<Path>>(path: P) -> Result<PlanState> {
    let content = fs::read_to_string(path)?;
    let state: PlanState = serde_json::from_str(&content)?;

    for plan in &state.plans {
        if !plan.is_valid() {
            return Err(MatchError::InvalidInput(format!(
                "plan {} has out-of-range fields",
                plan.id
            )));
        }
    }

    Ok(state)
}

/// Save plan state to a JSON file.
pub fn save_state<P: AsRef<Path>>(path: P, state: &PlanState) -> Result<()> {
    let json = serde_json::to_string_pretty(state)?;
    fs::write(path, json)?;
    Ok(())
}
