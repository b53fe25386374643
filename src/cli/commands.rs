use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "adplan", about = "Weekly ad-budget planner")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute a weekly plan for a strategy without storing it
    Plan {
        /// Strategy (launching, analysis, optimization, express_launching, setup)
        strategy: String,
        /// JSON with startDate, budget, answerMessages
        json: String,
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,
    },
    /// Compute the currency-aware setup plan and store it for a user
    Setup {
        /// User the plan belongs to; replaces any stored plan
        user_id: String,
        /// JSON with startDate, budget, answerMessages, currency
        json: String,
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,
    },
    /// Show the stored plan for a user
    Show {
        user_id: String,
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,
    },
    /// List stored plans, newest first
    List {
        #[arg(long, default_value = "20")]
        limit: usize,
    },
    /// Delete the stored plan for a user
    Delete { user_id: String },
    /// Print every strategy's percentage table
    Strategies,
}
