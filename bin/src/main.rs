//! Cadiz CLI binary.
//!
//! Provides the command-line interface for the Cadiz portfolio engine.

mod cmd;
mod data;

use anyhow::Result;
use cadiz_traits::SelectionConfig;
use clap::{Args, Parser, Subcommand};
use std::process;

#[derive(Parser)]
#[command(name = "cadiz")]
#[command(about = "Portfolio selection and backtesting for index universes", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Inputs shared by every subcommand: the data files, the evaluation
/// window, and the engine knobs.
#[derive(Args)]
pub(crate) struct WindowArgs {
    /// Price CSV file (symbol,date,adj_close)
    #[arg(long)]
    pub(crate) prices: String,

    /// Membership CSV file (symbol,start_date,end_date)
    #[arg(long)]
    pub(crate) members: String,

    /// Window start date (YYYY-MM-DD)
    #[arg(long)]
    pub(crate) start: String,

    /// Window end date (YYYY-MM-DD)
    #[arg(long)]
    pub(crate) end: String,

    /// Historical lookback in months
    #[arg(long, default_value = "36")]
    pub(crate) lookback_months: u32,

    /// Minimum monthly observations for a symbol to be considered
    #[arg(long, default_value = "24")]
    pub(crate) min_history_months: usize,

    /// Sharpe pre-screen size
    #[arg(long, default_value = "100")]
    pub(crate) screen_size: usize,

    /// Target portfolio cardinality
    #[arg(long, default_value = "45")]
    pub(crate) portfolio_size: usize,

    /// Annual risk-free rate for the Sharpe screen
    #[arg(long, default_value = "0.04")]
    pub(crate) risk_free_rate: f64,

    /// Minimum per-asset weight
    #[arg(long, default_value = "0.005")]
    pub(crate) min_weight: f64,

    /// Maximum per-asset weight
    #[arg(long, default_value = "0.03")]
    pub(crate) max_weight: f64,

    /// Covariance diagonal regularizer floor
    #[arg(long, default_value = "0.1")]
    pub(crate) ridge: f64,

    /// Estimate expected returns from raw pre-demeaning column means
    #[arg(long)]
    pub(crate) raw_means: bool,

    /// Output format (text or json)
    #[arg(long, default_value = "text")]
    pub(crate) format: String,
}

impl WindowArgs {
    /// Engine configuration from the CLI flags.
    pub(crate) fn to_config(&self) -> SelectionConfig {
        SelectionConfig {
            lookback_months: self.lookback_months,
            min_history_months: self.min_history_months,
            screen_size: self.screen_size,
            portfolio_size: self.portfolio_size,
            risk_free_rate: self.risk_free_rate,
            min_weight: self.min_weight,
            max_weight: self.max_weight,
            ridge: self.ridge,
            raw_means: self.raw_means,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Select a portfolio for one evaluation window
    Select {
        #[command(flatten)]
        window: WindowArgs,
    },

    /// Select a portfolio and report its forward performance
    Backtest {
        #[command(flatten)]
        window: WindowArgs,
    },
}

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Select { window } => cmd::select::run(&window).await,
        Commands::Backtest { window } => cmd::backtest::run(&window).await,
    }
}
