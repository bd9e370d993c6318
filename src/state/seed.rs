use crate::models::Plan;
use crate::state::persistence::PlanState;

/// The sample catalog: four 2026 plan-year offerings with placeholder match
/// scores, used by `init` and by the test suites.
pub fn sample_plans() -> Vec<Plan> {
    vec![
        Plan {
            id: "1".to_string(),
            plan_name: "AARP Medicare Advantage Patriot No Rx KS-MA01 (PPO)".to_string(),
            carrier: "UnitedHealthcare".to_string(),
            year: 2026,
            star_rating: 3,
            monthly_premium: 0.0,
            medical_deductible: 0.0,
            out_of_pocket_max: 6700.0,
            rx_drug_deductible: 0.0,
            estimated_annual_rx_cost: 0.0,
            pharmacies_covered: 0,
            doctor_name: None,
            match_score: 85,
            recommended: false,
        },
        Plan {
            id: "2".to_string(),
            plan_name: "Aetna Medicare Value Plus (HMO) H2663-053".to_string(),
            carrier: "Aetna Medicare".to_string(),
            year: 2026,
            star_rating: 4,
            monthly_premium: 44.1,
            medical_deductible: 0.0,
            out_of_pocket_max: 4500.0,
            rx_drug_deductible: 615.0,
            estimated_annual_rx_cost: 0.0,
            pharmacies_covered: 1,
            doctor_name: Some("Tommy Rose".to_string()),
            match_score: 95,
            recommended: false,
        },
        Plan {
            id: "3".to_string(),
            plan_name: "UnitedHealthcare AARP Medicare Advantage Plan 1".to_string(),
            carrier: "UnitedHealthcare".to_string(),
            year: 2026,
            star_rating: 5,
            monthly_premium: 0.0,
            medical_deductible: 250.0,
            out_of_pocket_max: 5500.0,
            rx_drug_deductible: 0.0,
            estimated_annual_rx_cost: 175.0,
            pharmacies_covered: 1,
            doctor_name: Some("Dr. Sarah Johnson".to_string()),
            match_score: 90,
            recommended: false,
        },
        Plan {
            id: "4".to_string(),
            plan_name: "Humana Gold Plus H1036-239 (HMO)".to_string(),
            carrier: "Humana".to_string(),
            year: 2026,
            star_rating: 4,
            monthly_premium: 32.5,
            medical_deductible: 150.0,
            out_of_pocket_max: 4800.0,
            rx_drug_deductible: 480.0,
            estimated_annual_rx_cost: 120.0,
            pharmacies_covered: 1,
            doctor_name: None,
            match_score: 82,
            recommended: false,
        },
    ]
}

/// A fresh state file payload: sample catalog, no current plan yet.
pub fn sample_state() -> PlanState {
    PlanState {
        plans: sample_plans(),
        current_plan: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_plans_are_valid() {
        for plan in sample_plans() {
            assert!(plan.is_valid(), "sample plan {} is invalid", plan.id);
        }
    }

    #[test]
    fn test_sample_ids_are_unique() {
        let plans = sample_plans();
        let mut ids: Vec<String> = plans.iter().map(|p| p.key()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), plans.len());
    }
}
