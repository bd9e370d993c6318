use crate::models::{format_usd_compact, group_thousands, Plan, PlanChangeImpact};
use crate::scoring::{ScoreBreakdown, MAX_TOTAL_SCORE};

/// Width of the overall-score progress bar in characters.
const SCORE_BAR_WIDTH: u32 = 20;

/// Maximum characters of a plan name shown in a comparison column header.
const NAME_COL_MAX: usize = 30;

/// Shorten a plan name to at most `max_chars` characters, ellipsized.
///
/// Counts characters rather than bytes; plan names are free text and may
/// contain multibyte characters.
fn truncate_name(name: &str, max_chars: usize) -> String {
    if name.chars().count() <= max_chars {
        return name.to_string();
    }
    let mut short: String = name.chars().take(max_chars.saturating_sub(3)).collect();
    short.push_str("...");
    short
}

/// Render a star rating as filled/empty stars: `★★★★☆`.
pub fn render_stars(rating: u8) -> String {
    (1..=5)
        .map(|star| if star <= rating { '★' } else { '☆' })
        .collect()
}

fn score_bar(total: u32) -> String {
    let filled = (total.min(MAX_TOTAL_SCORE) * SCORE_BAR_WIDTH) / MAX_TOTAL_SCORE;
    let mut bar = String::new();
    for i in 0..SCORE_BAR_WIDTH {
        bar.push(if i < filled { '#' } else { '-' });
    }
    bar
}

/// Display one plan as a card: header line, key costs, scores, and the
/// switch impact banner when there is one worth showing.
pub fn display_plan_card(
    plan: &Plan,
    breakdown: &ScoreBreakdown,
    impact: Option<&PlanChangeImpact>,
) {
    println!("{}", plan.plan_name);
    println!(
        "  {} | {} | {} | {}/month",
        plan.carrier,
        plan.year,
        render_stars(plan.star_rating),
        format_usd_compact(plan.monthly_premium)
    );
    println!(
        "  Match score {}% (breakdown total {}%) | Out-of-pocket max {}",
        plan.match_score,
        breakdown.total,
        format_usd_compact(plan.out_of_pocket_max)
    );

    if let Some(doctor) = &plan.doctor_name {
        println!("  In network: {}", doctor);
    }

    if let Some(impact) = impact {
        display_impact(impact);
    }

    println!();
}

/// Display the full match score breakdown for a plan.
pub fn display_breakdown(plan: &Plan, breakdown: &ScoreBreakdown) {
    println!();
    println!("=== Match Score Breakdown ===");
    println!();
    println!("{}", plan.plan_name);
    println!("{} | Listed match score: {}%", plan.carrier, plan.match_score);
    println!();
    println!(
        "Overall Score: {:>3}%  [{}]",
        breakdown.total,
        score_bar(breakdown.total)
    );
    println!();

    let max_category_len = breakdown
        .factors
        .iter()
        .map(|f| f.category.len())
        .max()
        .unwrap_or(10);

    for factor in &breakdown.factors {
        println!(
            "  {} {:<width$}  {:>3}%  {}",
            factor.status.glyph(),
            factor.category,
            factor.weight,
            factor.description,
            width = max_category_len
        );
    }

    println!();
    println!(
        "Note: the listed match score comes from your basic profile. The \
         breakdown above is recomputed from plan details and may differ."
    );
    println!();
}

/// Display the impact banner for switching to a plan.
///
/// Callers should skip plans where `should_display` is false; this prints
/// nothing for those to keep the suppression rule in one place.
pub fn display_impact(impact: &PlanChangeImpact) {
    if !impact.should_display() {
        return;
    }

    let title = if impact.has_savings() {
        "Potential Savings"
    } else {
        "Plan Change Impact"
    };
    println!("  --- {} ---", title);

    if impact.yearly_savings != 0 {
        let amount = group_thousands(impact.yearly_savings.unsigned_abs());
        if impact.yearly_savings > 0 {
            println!(
                "  ✓ Switching to this plan may save you approx ${}/year",
                amount
            );
        } else {
            println!(
                "  ⚠ Switching to this plan may cost you approx ${}/year more",
                amount
            );
        }
    }

    if impact.doctors_lost > 0 {
        let noun = if impact.doctors_lost == 1 {
            "specialist doctor"
        } else {
            "specialist doctors"
        };
        println!("  ⚠ But you may lose {} {}", impact.doctors_lost, noun);
    }

    if impact.doctors_gained > 0 {
        let noun = if impact.doctors_gained == 1 {
            "doctor"
        } else {
            "doctors"
        };
        println!(
            "  + You'll gain access to {} additional {}",
            impact.doctors_gained, noun
        );
    }

    if impact.pharmacies_lost > 0 {
        let noun = if impact.pharmacies_lost == 1 {
            "pharmacy"
        } else {
            "pharmacies"
        };
        println!(
            "  ⚠ You may lose coverage at {} {}",
            impact.pharmacies_lost, noun
        );
    }

    if impact.pharmacies_gained > 0 {
        let noun = if impact.pharmacies_gained == 1 {
            "pharmacy"
        } else {
            "pharmacies"
        };
        println!(
            "  + You'll gain coverage at {} additional {}",
            impact.pharmacies_gained, noun
        );
    }

    for change in &impact.coverage_changes {
        println!("  * {}", change);
    }
}

/// One row of the side-by-side comparison table.
pub struct ComparisonRow {
    pub label: &'static str,
    pub value: fn(&Plan) -> String,
}

/// The comparison features, in display order.
pub fn comparison_rows() -> Vec<ComparisonRow> {
    vec![
        ComparisonRow {
            label: "Monthly Premium",
            value: |p| format_usd_compact(p.monthly_premium),
        },
        ComparisonRow {
            label: "Star Rating",
            value: |p| render_stars(p.star_rating),
        },
        ComparisonRow {
            label: "Match Score",
            value: |p| format!("{}%", p.match_score),
        },
        ComparisonRow {
            label: "Medical Deductible",
            value: |p| format_usd_compact(p.medical_deductible),
        },
        ComparisonRow {
            label: "Out of Pocket Max",
            value: |p| format_usd_compact(p.out_of_pocket_max),
        },
        ComparisonRow {
            label: "Rx Drug Deductible",
            value: |p| format_usd_compact(p.rx_drug_deductible),
        },
        ComparisonRow {
            label: "Annual Rx Drug Cost",
            value: |p| format_usd_compact(p.estimated_annual_rx_cost),
        },
        ComparisonRow {
            label: "Pharmacies Covered",
            value: |p| p.pharmacies_covered.to_string(),
        },
        ComparisonRow {
            label: "Your Doctor In Network",
            value: |p| {
                if p.doctor_name.is_some() {
                    "Yes".to_string()
                } else {
                    "No".to_string()
                }
            },
        },
    ]
}

/// Display a side-by-side comparison table for two or more plans.
pub fn display_comparison(plans: &[&Plan]) {
    if plans.is_empty() {
        println!("No plans selected for comparison.");
        return;
    }

    println!();
    println!("=== Detailed Plan Comparison ({} plans) ===", plans.len());
    println!();

    let rows = comparison_rows();
    let label_width = rows.iter().map(|r| r.label.len()).max().unwrap_or(10);

    let columns: Vec<Vec<String>> = plans
        .iter()
        .map(|plan| rows.iter().map(|row| (row.value)(plan)).collect())
        .collect();

    // Column width driven by the widest value or header per plan.
    // Widths count characters, not bytes, so star glyphs and accented plan
    // names still line up.
    let widths: Vec<usize> = plans
        .iter()
        .zip(&columns)
        .map(|(plan, values)| {
            values
                .iter()
                .map(|v| v.chars().count())
                .chain(std::iter::once(
                    plan.plan_name.chars().count().min(NAME_COL_MAX),
                ))
                .max()
                .unwrap_or(10)
        })
        .collect();

    print!("{:<width$}", "Feature", width = label_width);
    for (plan, col_width) in plans.iter().zip(&widths) {
        print!(
            "  {:<width$}",
            truncate_name(&plan.plan_name, NAME_COL_MAX),
            width = col_width
        );
    }
    println!();

    for (i, row) in rows.iter().enumerate() {
        print!("{:<width$}", row.label, width = label_width);
        for (values, col_width) in columns.iter().zip(&widths) {
            print!("  {:<width$}", values[i], width = col_width);
        }
        println!();
    }

    println!();
    for plan in plans {
        println!("  {} • {}", plan.carrier, plan.year);
    }
    println!();
}
