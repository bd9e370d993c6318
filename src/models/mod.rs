pub mod impact;
pub mod money;
pub mod plan;

pub use impact::{NetworkComparison, PlanChangeImpact};
pub use money::{format_usd, format_usd_compact, group_thousands, parse_currency};
pub use plan::Plan;
