use crate::models::{format_usd, Plan};
use crate::scoring::constants::*;

/// How well a single requirement matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactorStatus {
    Matched,
    Partial,
    NotMatched,
}

impl FactorStatus {
    pub fn label(self) -> &'static str {
        match self {
            FactorStatus::Matched => "matched",
            FactorStatus::Partial => "partial",
            FactorStatus::NotMatched => "not_matched",
        }
    }

    /// Terminal marker used when rendering factor rows.
    pub fn glyph(self) -> &'static str {
        match self {
            FactorStatus::Matched => "✓",
            FactorStatus::Partial => "⚠",
            FactorStatus::NotMatched => "✗",
        }
    }
}

/// One weighted contribution to a match score breakdown.
///
/// The description embeds the currency- or count-formatted value the branch
/// decision was based on, so the result can be audited without the plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreFactor {
    pub category: &'static str,
    pub matched: bool,
    pub weight: u32,
    pub description: String,
    pub status: FactorStatus,
}

/// The per-factor decomposition explaining a plan's match quality.
///
/// Always exactly 5 factors in fixed order: cost, quality, network,
/// out-of-pocket, prescription. The total is re-derived from the weights and
/// deliberately independent of the plan's stored `match_score`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub factors: [ScoreFactor; 5],
    pub total: u32,
}

/// Decompose a plan's match quality into 5 weighted factors.
///
/// Pure and total: every branch covers its full input domain, identical
/// input always yields identical output.
pub fn compute_breakdown(plan: &Plan) -> ScoreBreakdown {
    let factors = [
        cost_effectiveness(plan),
        quality_rating(plan),
        network_coverage(plan),
        out_of_pocket_protection(plan),
        prescription_coverage(plan),
    ];
    let total = factors.iter().map(|f| f.weight).sum();

    ScoreBreakdown { factors, total }
}

/// Cost Effectiveness (max 30): premium == 0, under $50, or $50 and up.
fn cost_effectiveness(plan: &Plan) -> ScoreFactor {
    let premium = plan.monthly_premium;

    if premium == 0.0 {
        ScoreFactor {
            category: "Cost Effectiveness",
            matched: true,
            weight: COST_WEIGHT_ZERO_PREMIUM,
            description: "✓ $0 monthly premium - Excellent value".to_string(),
            status: FactorStatus::Matched,
        }
    } else if premium < LOW_PREMIUM_THRESHOLD {
        ScoreFactor {
            category: "Cost Effectiveness",
            matched: true,
            weight: COST_WEIGHT_LOW_PREMIUM,
            description: format!("✓ Low monthly premium of {}", format_usd(premium)),
            status: FactorStatus::Matched,
        }
    } else {
        ScoreFactor {
            category: "Cost Effectiveness",
            matched: false,
            weight: COST_WEIGHT_HIGH_PREMIUM,
            description: format!("⚠ Higher monthly premium of {}", format_usd(premium)),
            status: FactorStatus::Partial,
        }
    }
}

/// Quality Rating (max 20): 4+ stars, exactly 3, or below 3.
fn quality_rating(plan: &Plan) -> ScoreFactor {
    if plan.star_rating >= HIGH_QUALITY_STARS {
        ScoreFactor {
            category: "Quality Rating",
            matched: true,
            weight: QUALITY_WEIGHT_HIGH,
            description: format!(
                "✓ High quality plan with {} star rating",
                plan.star_rating
            ),
            status: FactorStatus::Matched,
        }
    } else if plan.star_rating == AVERAGE_QUALITY_STARS {
        ScoreFactor {
            category: "Quality Rating",
            matched: false,
            weight: QUALITY_WEIGHT_AVERAGE,
            description: "⚠ Average 3 star rating".to_string(),
            status: FactorStatus::Partial,
        }
    } else {
        ScoreFactor {
            category: "Quality Rating",
            matched: false,
            weight: QUALITY_WEIGHT_LOW,
            description: "✗ Below average star rating".to_string(),
            status: FactorStatus::NotMatched,
        }
    }
}

/// Network Coverage (max 25): doctor and pharmacies, exactly one, or neither.
fn network_coverage(plan: &Plan) -> ScoreFactor {
    let has_pharmacies = plan.pharmacies_covered > 0;

    match (&plan.doctor_name, has_pharmacies) {
        (Some(doctor), true) => ScoreFactor {
            category: "Network Coverage",
            matched: true,
            weight: NETWORK_WEIGHT_FULL,
            description: format!(
                "✓ Your doctor ({}) and {} pharmacy in network",
                doctor, plan.pharmacies_covered
            ),
            status: FactorStatus::Matched,
        },
        (Some(doctor), false) => ScoreFactor {
            category: "Network Coverage",
            matched: false,
            weight: NETWORK_WEIGHT_PARTIAL,
            description: format!(
                "⚠ Your doctor ({}) in network, but limited pharmacy coverage",
                doctor
            ),
            status: FactorStatus::Partial,
        },
        (None, true) => ScoreFactor {
            category: "Network Coverage",
            matched: false,
            weight: NETWORK_WEIGHT_PARTIAL,
            description: "⚠ Pharmacy coverage available, but doctor not in network".to_string(),
            status: FactorStatus::Partial,
        },
        (None, false) => ScoreFactor {
            category: "Network Coverage",
            matched: false,
            weight: NETWORK_WEIGHT_NONE,
            description: "✗ Limited network coverage - verify your providers".to_string(),
            status: FactorStatus::NotMatched,
        },
    }
}

/// Out-of-Pocket Protection (max 15): <= $5,000, <= $7,000, or above.
fn out_of_pocket_protection(plan: &Plan) -> ScoreFactor {
    let max_oop = plan.out_of_pocket_max;

    if max_oop <= STRONG_OOP_MAX {
        ScoreFactor {
            category: "Out-of-Pocket Protection",
            matched: true,
            weight: OOP_WEIGHT_STRONG,
            description: format!("✓ Strong protection with {} max", format_usd(max_oop)),
            status: FactorStatus::Matched,
        }
    } else if max_oop <= MODERATE_OOP_MAX {
        ScoreFactor {
            category: "Out-of-Pocket Protection",
            matched: false,
            weight: OOP_WEIGHT_MODERATE,
            description: format!("⚠ Moderate protection with {} max", format_usd(max_oop)),
            status: FactorStatus::Partial,
        }
    } else {
        ScoreFactor {
            category: "Out-of-Pocket Protection",
            matched: false,
            weight: OOP_WEIGHT_WEAK,
            description: format!("✗ Higher out-of-pocket max of {}", format_usd(max_oop)),
            status: FactorStatus::NotMatched,
        }
    }
}

/// Prescription Coverage (max 10): no deductible, <= $500, or above.
fn prescription_coverage(plan: &Plan) -> ScoreFactor {
    let deductible = plan.rx_drug_deductible;

    if deductible == 0.0 {
        ScoreFactor {
            category: "Prescription Coverage",
            matched: true,
            weight: RX_WEIGHT_NO_DEDUCTIBLE,
            description: "✓ No prescription drug deductible".to_string(),
            status: FactorStatus::Matched,
        }
    } else if deductible <= LOW_RX_DEDUCTIBLE_MAX {
        ScoreFactor {
            category: "Prescription Coverage",
            matched: false,
            weight: RX_WEIGHT_LOW_DEDUCTIBLE,
            description: format!("⚠ Low Rx deductible of {}", format_usd(deductible)),
            status: FactorStatus::Partial,
        }
    } else {
        ScoreFactor {
            category: "Prescription Coverage",
            matched: false,
            weight: RX_WEIGHT_HIGH_DEDUCTIBLE,
            description: format!("✗ Higher Rx deductible of {}", format_usd(deductible)),
            status: FactorStatus::NotMatched,
        }
    }
}
