use clap::Parser;
use std::path::Path;

use medicare_match_rs::cli::{Cli, Command};
use medicare_match_rs::error::{MatchError, Result};
use medicare_match_rs::interface::{
    display_breakdown, display_comparison, display_plan_card, export_comparison_csv,
    prompt_current_plan, prompt_yes_no, resolve_plan_interactive,
};
use medicare_match_rs::models::{format_usd_compact, Plan};
use medicare_match_rs::network::{sample_network_source, NetworkSource};
use medicare_match_rs::scoring::{compute_breakdown, compute_impact};
use medicare_match_rs::state::{load_state, sample_state, save_state, PlanCatalog};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Init { force } => cmd_init(&cli.file, force),
        Command::List => cmd_list(&cli.file),
        Command::Breakdown { plan } => cmd_breakdown(&cli.file, &plan),
        Command::Compare { plans, export } => cmd_compare(&cli.file, &plans, export.as_deref()),
        Command::Current { clear } => cmd_current(&cli.file, clear),
    }
}

fn load_catalog(file_path: &str) -> Result<PlanCatalog> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Plan state file not found: {}", file_path);
        eprintln!("Run 'medicare_match init' to create one with the sample catalog.");
        return Err(MatchError::EmptyCatalog);
    }

    let state = load_state(path)?;
    let catalog = PlanCatalog::from_state(state);

    if catalog.is_empty() {
        return Err(MatchError::EmptyCatalog);
    }

    Ok(catalog)
}

/// Seed the state file with the sample plan catalog.
fn cmd_init(file_path: &str, force: bool) -> Result<()> {
    let path = Path::new(file_path);

    if path.exists() && !force {
        println!("State file already exists: {}", file_path);
        println!("Use 'init --force' to overwrite it.");
        return Ok(());
    }

    let state = sample_state();
    save_state(path, &state)?;
    println!("Wrote {} plans to {}", state.plans.len(), file_path);

    Ok(())
}

/// List plans with recomputed score totals and switch impact.
fn cmd_list(file_path: &str) -> Result<()> {
    let catalog = load_catalog(file_path)?;
    let network = sample_network_source();

    println!("{} plans found", catalog.len());

    match catalog.current_plan() {
        Some(current) => {
            println!(
                "Current plan: {} ({} | {}/month) - viewing potential savings",
                current.plan_name,
                current.carrier,
                format_usd_compact(current.monthly_premium)
            );
        }
        None => {
            println!("No current plan on file. Run 'medicare_match current' to add yours.");
        }
    }
    println!();

    for plan in catalog.sorted_plans() {
        let breakdown = compute_breakdown(plan);
        let impact = catalog.current_plan().and_then(|current| {
            let comparison = network.compare(current, plan);
            compute_impact(Some(current), plan, &comparison)
        });

        let visible = impact.as_ref().filter(|i| i.should_display());
        display_plan_card(plan, &breakdown, visible);
    }

    Ok(())
}

/// Show the full factor breakdown for one plan.
fn cmd_breakdown(file_path: &str, query: &str) -> Result<()> {
    let catalog = load_catalog(file_path)?;

    let plan = resolve_plan_interactive(&catalog, query)?
        .ok_or_else(|| MatchError::PlanNotFound(query.to_string()))?;

    let breakdown = compute_breakdown(plan);
    display_breakdown(plan, &breakdown);

    Ok(())
}

/// Compare plans side by side, optionally exporting to CSV.
fn cmd_compare(file_path: &str, queries: &[String], export: Option<&str>) -> Result<()> {
    if queries.len() < 2 {
        return Err(MatchError::InvalidInput(
            "Select at least 2 plans to compare".to_string(),
        ));
    }

    let catalog = load_catalog(file_path)?;

    let mut selected: Vec<&Plan> = Vec::with_capacity(queries.len());
    for query in queries {
        // Same confirm-before-fuzzy flow as breakdown: a typo should never
        // silently compare the wrong plan
        let plan = resolve_plan_interactive(&catalog, query)?
            .ok_or_else(|| MatchError::PlanNotFound(query.clone()))?;
        selected.push(plan);
    }

    display_comparison(&selected);

    if let Some(export_path) = export {
        export_comparison_csv(export_path, &selected)?;
        println!("Comparison exported to {}", export_path);
    }

    Ok(())
}

/// Record or clear the user's current plan.
fn cmd_current(file_path: &str, clear: bool) -> Result<()> {
    let mut catalog = load_catalog(file_path)?;

    if clear {
        if catalog.current_plan().is_none() {
            println!("No current plan on file.");
            return Ok(());
        }
        catalog.clear_current_plan();
        save_state(file_path, &catalog.to_state())?;
        println!("Current plan cleared.");
        return Ok(());
    }

    if let Some(current) = catalog.current_plan() {
        println!(
            "Current plan on file: {} ({})",
            current.plan_name, current.carrier
        );
        let replace = prompt_yes_no("Replace it?", true)?;
        if !replace {
            return Ok(());
        }
    }

    let plan = prompt_current_plan()?;
    println!("Recorded current plan: {}", plan.plan_name);
    catalog.set_current_plan(plan);

    save_state(file_path, &catalog.to_state())?;
    println!("Plan state saved.");

    Ok(())
}
