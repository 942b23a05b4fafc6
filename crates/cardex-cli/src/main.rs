//! cardex CLI - MCP server for the card database.

use clap::{Parser, Subcommand};
use tracing_subscriber::fmt::format::FmtSpan;

mod commands;
mod output;

/// cardex - card-database search tools over MCP.
#[derive(Debug, Parser)]
#[command(name = "cardex", version, about)]
struct Cli {
    /// Configuration file path.
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log output format: plain (default) or json (for log aggregation).
    #[arg(long, global = true, default_value = "plain", value_parser = ["plain", "json"])]
    log_format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Start the MCP server over stdio or HTTP.
    Serve(commands::serve::ServeArgs),
    /// Search cards from the command line.
    Search(commands::search::SearchArgs),
    /// Look up marketplace prices for a card.
    Price(commands::price::PriceArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = cardex_config::load_config(cli.config.as_deref())?;

    // Initialize tracing: verbosity flags override the configured level.
    let filter = match cli.verbose {
        0 => config.logging.level.clone(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    };
    match cli.log_format.as_str() {
        "json" => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .init(),
        _ => tracing_subscriber::fmt().with_env_filter(filter).init(),
    };

    tracing::debug!(config = ?cli.config, "cardex starting");

    match &cli.command {
        Commands::Serve(args) => commands::serve::execute(args, &config).await,
        Commands::Search(args) => commands::search::execute(args, &config).await,
        Commands::Price(args) => commands::price::execute(args, &config).await,
    }
}
