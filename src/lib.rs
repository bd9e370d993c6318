pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod network;
pub mod scoring;
pub mod state;

pub use error::{MatchError, Result};
pub use models::{NetworkComparison, Plan, PlanChangeImpact};
pub use scoring::{compute_breakdown, compute_impact, FactorStatus, ScoreBreakdown, ScoreFactor};
