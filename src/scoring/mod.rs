pub mod breakdown;
pub mod constants;
pub mod impact;

pub use breakdown::{compute_breakdown, FactorStatus, ScoreBreakdown, ScoreFactor};
pub use constants::*;
pub use impact::compute_impact;
