use dialoguer::{Confirm, Input, Select};

use crate::error::{MatchError, Result};
use crate::models::{parse_currency, Plan};
use crate::state::PlanCatalog;

/// Collect the user's current plan details.
///
/// Only the fields a user can be expected to know are asked for; the rest of
/// the record gets neutral defaults via [`Plan::current_plan_entry`].
pub fn prompt_current_plan() -> Result<Plan> {
    let plan_name_raw: String = Input::new()
        .with_prompt("Your current plan name (e.g., AARP Medicare Advantage)")
        .interact_text()?;
    let plan_name = require_nonempty(&plan_name_raw, "Plan name")?;

    let carrier_raw: String = Input::new()
        .with_prompt("Insurance carrier (e.g., UnitedHealthcare)")
        .interact_text()?;
    let carrier = require_nonempty(&carrier_raw, "Carrier")?;

    let premium_raw: String = Input::new()
        .with_prompt("Monthly premium ($)")
        .default("0".to_string())
        .interact_text()?;

    let monthly_premium = parse_currency(&premium_raw)
        .ok_or_else(|| MatchError::InvalidInput(format!("Invalid amount: {}", premium_raw)))?;

    if monthly_premium < 0.0 {
        return Err(MatchError::InvalidInput(
            "Monthly premium cannot be negative".to_string(),
        ));
    }

    Ok(Plan::current_plan_entry(plan_name, carrier, monthly_premium))
}

/// Resolve a plan query against the catalog, falling back to interactive
/// fuzzy suggestions when there is no direct hit.
pub fn resolve_plan_interactive<'a>(
    catalog: &'a PlanCatalog,
    query: &str,
) -> Result<Option<&'a Plan>> {
    if let Some(plan) = catalog.resolve_exact(query) {
        return Ok(Some(plan));
    }

    let candidates = catalog.fuzzy_matches(query, 5);
    if candidates.is_empty() {
        return Ok(None);
    }

    if candidates.len() == 1 {
        let plan = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", plan.plan_name))
            .default(true)
            .interact()?;
        return Ok(if confirm { Some(plan) } else { None });
    }

    // Multiple near-matches: let the user pick
    let mut options: Vec<String> = candidates.iter().map(|(p, _)| p.plan_name.clone()).collect();
    options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which plan did you mean?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(candidates.get(selection).map(|(p, _)| *p))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Reject blank free-text input, trimming surrounding whitespace.
fn require_nonempty(value: &str, field: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(MatchError::InvalidInput(format!(
            "{} cannot be empty",
            field
        )));
    }
    Ok(trimmed.to_string())
}
