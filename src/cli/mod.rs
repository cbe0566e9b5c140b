pub mod advice;
pub mod dashboard;
pub mod report;
pub mod status;
pub mod transactions;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tally",
    about = "Personal finance tracking dashboard for the terminal."
)]
pub struct Cli {
    /// Display language: en or ar
    #[arg(long, global = true, default_value = "en")]
    pub lang: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record a new transaction.
    Add {
        /// What the money was for
        #[arg(long)]
        description: String,
        /// Non-negative amount; income/expense is set by --type
        #[arg(long)]
        amount: f64,
        /// Calendar day: YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
        /// income or expense
        #[arg(long = "type", default_value = "expense")]
        kind: String,
        /// Category label, e.g. Groceries
        #[arg(long)]
        category: String,
    },
    /// List all transactions, newest first.
    List,
    /// Replace a transaction's fields by id.
    Edit {
        /// Transaction id (shown in `tally list`)
        id: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        date: String,
        #[arg(long = "type")]
        kind: String,
        #[arg(long)]
        category: String,
    },
    /// Delete a transaction by id.
    Delete {
        /// Transaction id (shown in `tally list`)
        id: String,
    },
    /// Income, expense, and net totals for the current period.
    Summary {
        /// monthly or annually
        #[arg(long, default_value = "monthly")]
        period: String,
    },
    /// Expense totals grouped by category.
    Breakdown,
    /// Ask the AI endpoint for financial advice on the current data.
    Advice,
    /// Show the data file location and record statistics.
    Status,
}
