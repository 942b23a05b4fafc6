//! `cardex price` command.
//!
//! Runs the same price-lookup path the MCP tool uses and pretty-prints
//! the resulting summary.

use clap::Args;
use serde_json::{json, Value};

use cardex_config::CardexConfig;
use cardex_mcp::tools::price;
use cardex_types::DiagnosticError;

use crate::commands;
use crate::output;

/// Look up marketplace prices for a card.
#[derive(Debug, Args)]
pub struct PriceArgs {
    /// Card name (use * for wildcards, leading ! for exact match).
    pub name: String,
    /// Set id to pick a specific printing.
    #[arg(long)]
    pub set_id: Option<String>,
    /// Set name to pick a specific printing.
    #[arg(long)]
    pub set_name: Option<String>,
}

/// Executes the price command.
pub async fn execute(args: &PriceArgs, config: &CardexConfig) -> anyhow::Result<()> {
    let source = commands::open_source(config)?;

    let mut arguments = json!({ "name": &args.name });
    if args.set_id.is_some() || args.set_name.is_some() {
        arguments["set"] = json!({ "id": &args.set_id, "name": &args.set_name });
    }

    let reply = price::execute(source.as_ref(), arguments)
        .await
        .map_err(|e| {
            if let Some(hint) = e.hint() {
                eprintln!("\n  Cause: {hint}");
            }
            if let Some(fix) = e.fix() {
                eprintln!("  Fix:   {fix}\n");
            }
            anyhow::anyhow!("price lookup failed: {e}")
        })?;
    let summary: Value = serde_json::from_str(&reply)?;

    if let Some(error) = summary.get("error").and_then(Value::as_str) {
        output::print_warning(error);
        return Ok(());
    }

    output::print_success(&format!(
        "{} — {}",
        summary["name"].as_str().unwrap_or("?"),
        summary["set"].as_str().unwrap_or("unknown set")
    ));
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
