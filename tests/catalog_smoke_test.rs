use assert_float_eq::assert_float_absolute_eq;
use tempfile::NamedTempFile;

use medicare_match_rs::interface::export_comparison_csv;
use medicare_match_rs::models::Plan;
use medicare_match_rs::network::{sample_network_source, NetworkSource};
use medicare_match_rs::scoring::{compute_breakdown, compute_impact};
use medicare_match_rs::state::{load_state, sample_state, save_state, PlanCatalog};

#[test]
fn test_state_file_roundtrip_preserves_catalog() {
    let file = NamedTempFile::new().unwrap();
    save_state(file.path(), &sample_state()).unwrap();

    let state = load_state(file.path()).unwrap();
    let catalog = PlanCatalog::from_state(state);

    assert_eq!(catalog.len(), 4);
    assert!(catalog.current_plan().is_none());

    let aetna = catalog.get_plan("2").unwrap();
    assert_float_absolute_eq!(aetna.monthly_premium, 44.1, 0.001);
    assert_float_absolute_eq!(aetna.yearly_premium(), 529.2, 0.001);
}

#[test]
fn test_seeded_catalog_breakdown_totals() {
    let catalog = PlanCatalog::new(medicare_match_rs::state::sample_plans());

    // Recomputed totals for the sample catalog, per the factor rules
    let expected = [("1", 67), ("2", 88), ("3", 95), ("4", 82)];
    for (id, total) in expected {
        let plan = catalog.get_plan(id).unwrap();
        let breakdown = compute_breakdown(plan);
        assert_eq!(breakdown.total, total, "plan {} total", id);

        // Stored score and recomputed total stay decoupled
        assert_eq!(breakdown.factors.len(), 5);
    }
}

#[test]
fn test_fuzzy_resolution_against_seeded_names() {
    let catalog = PlanCatalog::new(medicare_match_rs::state::sample_plans());

    assert_eq!(catalog.resolve("humana gold plus").unwrap().id, "4");
    assert_eq!(
        catalog
            .resolve("Aetna Medicare Value Plus (HMO) H2663-053")
            .unwrap()
            .id,
        "2"
    );
    assert!(catalog.resolve("completely unrelated query").is_none());
}

#[test]
fn test_impact_pipeline_with_current_plan() {
    let mut catalog = PlanCatalog::new(medicare_match_rs::state::sample_plans());
    catalog.set_current_plan(Plan::current_plan_entry(
        "My Old PPO".to_string(),
        "Cigna".to_string(),
        65.0,
    ));

    let network = sample_network_source();
    let current = catalog.current_plan().unwrap();

    // Aetna candidate: savings 251, one doctor lost from the override table
    let aetna = catalog.get_plan("2").unwrap();
    let comparison = network.compare(current, aetna);
    let impact = compute_impact(Some(current), aetna, &comparison).unwrap();

    assert_eq!(impact.yearly_savings, 251);
    assert_eq!(impact.doctors_lost, 1);
    assert_eq!(impact.pharmacies_gained, 1);
    assert!(impact.should_display());

    // UnitedHealthcare candidate: zero-premium plan, coverage note forwarded
    let uhc = catalog.get_plan("3").unwrap();
    let comparison = network.compare(current, uhc);
    let impact = compute_impact(Some(current), uhc, &comparison).unwrap();

    assert_eq!(impact.yearly_savings, 780);
    assert_eq!(impact.doctors_gained, 2);
    assert_eq!(
        impact.coverage_changes,
        vec!["Better prescription drug coverage".to_string()]
    );
}

#[test]
fn test_impact_suppression_in_pipeline() {
    let mut catalog = PlanCatalog::new(medicare_match_rs::state::sample_plans());

    // Baseline priced exactly like the zero-premium AARP Patriot plan
    catalog.set_current_plan(Plan::current_plan_entry(
        "Zero Premium Baseline".to_string(),
        "UnitedHealthcare".to_string(),
        0.0,
    ));

    let network = sample_network_source();
    let current = catalog.current_plan().unwrap();

    // Plan 1 has no override entry and covers no pharmacies: nothing to show
    let patriot = catalog.get_plan("1").unwrap();
    let comparison = network.compare(current, patriot);
    let impact = compute_impact(Some(current), patriot, &comparison).unwrap();

    assert_eq!(impact.yearly_savings, 0);
    assert!(!impact.has_losses());
    assert!(!impact.should_display());
}

#[test]
fn test_comparison_csv_export_end_to_end() {
    let catalog = PlanCatalog::new(medicare_match_rs::state::sample_plans());
    let selected = [
        catalog.get_plan("2").unwrap(),
        catalog.get_plan("3").unwrap(),
    ];

    let file = NamedTempFile::new().unwrap();
    export_comparison_csv(file.path(), &selected).unwrap();

    let content = std::fs::read_to_string(file.path()).unwrap();
    assert!(content.contains("Feature"));
    assert!(content.contains("Monthly Premium"));
    assert!(content.contains("$44.10"));
    assert!(content.contains("95%"));
    assert!(content.contains("Yes"));
}
