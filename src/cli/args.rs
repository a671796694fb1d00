use clap::{Parser, Subcommand, ValueEnum};
use std::fmt;

#[derive(Parser)]
#[command(name = "cost-calc")]
#[command(about = "Multiply an item quantity by its unit price")]
#[command(version = "0.1.0")]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format for computed costs (defaults to COST_OUTPUT_FORMAT)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the cost and print its bare value
    #[command(allow_negative_numbers = true)]
    Report {
        /// Item quantity
        #[arg(allow_hyphen_values = true)]
        qty: String,
        /// Unit price
        #[arg(allow_hyphen_values = true)]
        price: String,
    },
    /// Compute the cost and render it in the chosen format
    #[command(allow_negative_numbers = true)]
    Compute {
        /// Item quantity
        #[arg(allow_hyphen_values = true)]
        qty: String,
        /// Unit price
        #[arg(allow_hyphen_values = true)]
        price: String,
    },
    /// Prompt for quantity and price
    Interactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
    Table,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Table => write!(f, "table"),
        }
    }
}
