use clap::{Parser, Subcommand};

/// MedicareMatch — compare Medicare plans on cost, quality, and network fit.
#[derive(Parser, Debug)]
#[command(name = "medicare_match")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the plan state JSON file.
    #[arg(short, long, default_value = "plan_state.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Seed the state file with the sample plan catalog.
    Init {
        /// Overwrite an existing state file.
        #[arg(long)]
        force: bool,
    },

    /// List available plans with scores and switch impact.
    List,

    /// Show the match score breakdown for one plan (by id or name).
    Breakdown {
        /// Plan id or (possibly partial) plan name.
        plan: String,
    },

    /// Compare two or more plans side by side.
    Compare {
        /// Plan ids or names.
        plans: Vec<String>,

        /// Also write the comparison table to a CSV file.
        #[arg(long, value_name = "FILE")]
        export: Option<String>,
    },

    /// Record or clear your current plan for savings comparisons.
    Current {
        /// Remove the stored current plan.
        #[arg(long)]
        clear: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::List
    }
}
