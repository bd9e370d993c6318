pub mod export;
pub mod prompts;
pub mod render;

pub use export::export_comparison_csv;
pub use prompts::{prompt_current_plan, prompt_yes_no, resolve_plan_interactive};
pub use render::{
    display_breakdown, display_comparison, display_impact, display_plan_card, render_stars,
};
