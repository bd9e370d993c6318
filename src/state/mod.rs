pub mod catalog;
pub mod persistence;
pub mod seed;

pub use catalog::PlanCatalog;
pub use persistence::{load_state, save_state, PlanState};
pub use seed::{sample_plans, sample_state};
