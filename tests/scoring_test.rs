use medicare_match_rs::models::{NetworkComparison, Plan};
use medicare_match_rs::scoring::{
    compute_breakdown, compute_impact, FactorStatus, MAX_TOTAL_SCORE,
};

fn make_plan(
    id: &str,
    premium: f64,
    stars: u8,
    doctor: Option<&str>,
    pharmacies: u32,
    oop_max: f64,
    rx_deductible: f64,
) -> Plan {
    Plan {
        id: id.to_string(),
        plan_name: format!("Plan {}", id),
        carrier: "Test Carrier".to_string(),
        year: 2026,
        star_rating: stars,
        monthly_premium: premium,
        medical_deductible: 0.0,
        out_of_pocket_max: oop_max,
        rx_drug_deductible: rx_deductible,
        estimated_annual_rx_cost: 0.0,
        pharmacies_covered: pharmacies,
        doctor_name: doctor.map(str::to_string),
        match_score: 75,
        recommended: false,
    }
}

#[test]
fn test_breakdown_always_five_factors_in_range() {
    let extremes = [
        make_plan("a", 0.0, 5, Some("Dr. A"), 3, 1000.0, 0.0),
        make_plan("b", 500.0, 1, None, 0, 20000.0, 5000.0),
        make_plan("c", 49.99, 3, None, 1, 7000.0, 500.0),
        make_plan("d", 50.0, 4, Some("Dr. D"), 0, 5000.0, 615.0),
    ];

    for plan in &extremes {
        let breakdown = compute_breakdown(plan);
        assert_eq!(breakdown.factors.len(), 5);

        let sum: u32 = breakdown.factors.iter().map(|f| f.weight).sum();
        assert_eq!(breakdown.total, sum, "total must equal the factor sum");
        assert!(breakdown.total <= MAX_TOTAL_SCORE);
    }
}

#[test]
fn test_best_and_worst_case_totals() {
    // All factors fully matched: 30 + 20 + 25 + 15 + 10
    let best = make_plan("best", 0.0, 5, Some("Dr. Best"), 2, 4000.0, 0.0);
    assert_eq!(compute_breakdown(&best).total, 100);

    // All factors at their floor: 15 + 5 + 5 + 5 + 3
    let worst = make_plan("worst", 200.0, 1, None, 0, 9000.0, 1000.0);
    assert_eq!(compute_breakdown(&worst).total, 33);
}

#[test]
fn test_premium_boundary_values() {
    let zero = make_plan("z", 0.0, 4, None, 1, 4000.0, 0.0);
    assert_eq!(compute_breakdown(&zero).factors[0].weight, 30);

    let just_under = make_plan("u", 49.99, 4, None, 1, 4000.0, 0.0);
    assert_eq!(compute_breakdown(&just_under).factors[0].weight, 25);

    let at_fifty = make_plan("f", 50.0, 4, None, 1, 4000.0, 0.0);
    let factor = &compute_breakdown(&at_fifty).factors[0];
    assert_eq!(factor.weight, 15);
    assert_eq!(factor.status, FactorStatus::Partial);
}

#[test]
fn test_star_rating_boundary() {
    let three = make_plan("t", 0.0, 3, None, 1, 4000.0, 0.0);
    let factor = &compute_breakdown(&three).factors[1];
    assert_eq!(factor.weight, 12);
    assert_eq!(factor.status, FactorStatus::Partial);

    let four = make_plan("q", 0.0, 4, None, 1, 4000.0, 0.0);
    let factor = &compute_breakdown(&four).factors[1];
    assert_eq!(factor.weight, 20);
    assert_eq!(factor.status, FactorStatus::Matched);
}

#[test]
fn test_oop_boundary_values() {
    let strong = make_plan("s", 0.0, 4, None, 1, 5000.0, 0.0);
    assert_eq!(compute_breakdown(&strong).factors[3].weight, 15);

    let moderate = make_plan("m", 0.0, 4, None, 1, 5000.01, 0.0);
    assert_eq!(compute_breakdown(&moderate).factors[3].weight, 10);

    let weak = make_plan("w", 0.0, 4, None, 1, 7000.01, 0.0);
    assert_eq!(compute_breakdown(&weak).factors[3].weight, 5);
}

#[test]
fn test_doctor_without_pharmacies_is_partial_and_mentions_doctor_only() {
    let plan = make_plan("p", 0.0, 4, Some("Tommy Rose"), 0, 4000.0, 0.0);
    let factor = &compute_breakdown(&plan).factors[2];

    assert_eq!(factor.weight, 15);
    assert_eq!(factor.status, FactorStatus::Partial);
    assert!(factor.description.contains("Tommy Rose"));
    assert!(factor.description.contains("limited pharmacy coverage"));
}

#[test]
fn test_descriptions_embed_decision_values() {
    let plan = make_plan("d", 87.65, 5, Some("Dr. X"), 4, 6100.0, 321.0);
    let breakdown = compute_breakdown(&plan);

    assert!(breakdown.factors[0].description.contains("$87.65"));
    assert!(breakdown.factors[1].description.contains('5'));
    assert!(breakdown.factors[2].description.contains("4 pharmacy"));
    assert!(breakdown.factors[3].description.contains("$6,100.00"));
    assert!(breakdown.factors[4].description.contains("$321.00"));
}

#[test]
fn test_reference_aetna_plan_end_to_end() {
    // premium 44.10, 4 stars, Tommy Rose + 1 pharmacy, OOP 4500, Rx 615
    let plan = make_plan("2", 44.1, 4, Some("Tommy Rose"), 1, 4500.0, 615.0);
    let breakdown = compute_breakdown(&plan);

    let weights: Vec<u32> = breakdown.factors.iter().map(|f| f.weight).collect();
    assert_eq!(weights, vec![25, 20, 25, 15, 3]);
    assert_eq!(breakdown.total, 88);
}

#[test]
fn test_breakdown_idempotent() {
    let plan = make_plan("i", 44.1, 4, Some("Tommy Rose"), 1, 4500.0, 615.0);
    assert_eq!(compute_breakdown(&plan), compute_breakdown(&plan));
}

#[test]
fn test_impact_none_without_baseline() {
    let candidate = make_plan("2", 44.1, 4, None, 1, 4500.0, 0.0);
    let network = NetworkComparison {
        doctors_gained: 5,
        ..Default::default()
    };
    assert!(compute_impact(None, &candidate, &network).is_none());
}

#[test]
fn test_impact_reference_savings() {
    // round(65 * 12 - 44.10 * 12) = round(250.8) = 251
    let baseline = make_plan("current", 65.0, 3, None, 1, 0.0, 0.0);
    let candidate = make_plan("2", 44.1, 4, None, 1, 4500.0, 0.0);

    let impact =
        compute_impact(Some(&baseline), &candidate, &NetworkComparison::default()).unwrap();
    assert_eq!(impact.yearly_savings, 251);
}

#[test]
fn test_impact_suppressed_despite_gains() {
    let baseline = make_plan("current", 30.0, 3, None, 1, 0.0, 0.0);
    let candidate = make_plan("5", 30.0, 4, None, 1, 4500.0, 0.0);
    let network = NetworkComparison {
        doctors_gained: 2,
        pharmacies_gained: 1,
        ..Default::default()
    };

    let impact = compute_impact(Some(&baseline), &candidate, &network).unwrap();
    assert_eq!(impact.yearly_savings, 0);
    assert!(!impact.should_display(), "pure gains must stay suppressed");
}

#[test]
fn test_impact_idempotent() {
    let baseline = make_plan("current", 65.0, 3, None, 1, 0.0, 0.0);
    let candidate = make_plan("2", 44.1, 4, None, 1, 4500.0, 0.0);
    let network = NetworkComparison {
        doctors_lost: 1,
        coverage_changes: vec!["Vision coverage included".to_string()],
        ..Default::default()
    };

    let first = compute_impact(Some(&baseline), &candidate, &network);
    let second = compute_impact(Some(&baseline), &candidate, &network);
    assert_eq!(first, second);
}
