//! Factor weights and thresholds for the match score breakdown.
//!
//! The five factor maxima sum to 100 (30 + 20 + 25 + 15 + 10), so a total
//! built from any combination of branch weights stays in the 0-100 range.

/// Cost Effectiveness weights (max 30).
pub const COST_WEIGHT_ZERO_PREMIUM: u32 = 30;
pub const COST_WEIGHT_LOW_PREMIUM: u32 = 25;
pub const COST_WEIGHT_HIGH_PREMIUM: u32 = 15;

/// Monthly premium below this counts as low cost (exclusive bound).
pub const LOW_PREMIUM_THRESHOLD: f64 = 50.0;

/// Quality Rating weights (max 20).
pub const QUALITY_WEIGHT_HIGH: u32 = 20;
pub const QUALITY_WEIGHT_AVERAGE: u32 = 12;
pub const QUALITY_WEIGHT_LOW: u32 = 5;

/// Star ratings at or above this count as high quality.
pub const HIGH_QUALITY_STARS: u8 = 4;
pub const AVERAGE_QUALITY_STARS: u8 = 3;

/// Network Coverage weights (max 25).
pub const NETWORK_WEIGHT_FULL: u32 = 25;
pub const NETWORK_WEIGHT_PARTIAL: u32 = 15;
pub const NETWORK_WEIGHT_NONE: u32 = 5;

/// Out-of-Pocket Protection weights (max 15).
pub const OOP_WEIGHT_STRONG: u32 = 15;
pub const OOP_WEIGHT_MODERATE: u32 = 10;
pub const OOP_WEIGHT_WEAK: u32 = 5;

/// Out-of-pocket maxima at or below these bounds (inclusive).
pub const STRONG_OOP_MAX: f64 = 5000.0;
pub const MODERATE_OOP_MAX: f64 = 7000.0;

/// Prescription Coverage weights (max 10).
pub const RX_WEIGHT_NO_DEDUCTIBLE: u32 = 10;
pub const RX_WEIGHT_LOW_DEDUCTIBLE: u32 = 7;
pub const RX_WEIGHT_HIGH_DEDUCTIBLE: u32 = 3;

/// Rx deductibles at or below this count as low (inclusive).
pub const LOW_RX_DEDUCTIBLE_MAX: f64 = 500.0;

/// Upper bound of any breakdown total.
pub const MAX_TOTAL_SCORE: u32 = 100;

/// Months in a plan year, for premium annualization.
pub const MONTHS_PER_YEAR: f64 = 12.0;
