//! The `get_card_prices` tool: marketplace price lookup by name.

use serde::Deserialize;
use serde_json::{json, Value};

use cardex_client::CardSource;
use cardex_protocol::mcp::tools::McpToolDefinition;
use cardex_types::{Card, SearchFilter, SetFilter};

use crate::error::ToolError;

/// MCP name of the price-lookup tool.
pub const TOOL_NAME: &str = "get_card_prices";

/// Arguments accepted by the price-lookup tool.
#[derive(Debug, Deserialize)]
struct PriceArgs {
    /// Card name, same matching rules as the search tool.
    name: String,
    /// Optional set constraint to disambiguate reprints.
    #[serde(default)]
    set: Option<SetFilter>,
}

/// Builds the MCP definition of the price-lookup tool.
pub fn definition() -> McpToolDefinition {
    McpToolDefinition {
        name: TOOL_NAME.to_string(),
        description: Some(
            "Look up marketplace prices for a card by name. Returns the TCGplayer \
             and Cardmarket pricing blocks of the first matching card."
                .to_string(),
        ),
        input_schema: json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "Card name. Use * for wildcards or a leading ! \
                                    for an exact match."
                },
                "set": {
                    "type": ["object", "string"],
                    "properties": {
                        "id": { "type": "string" },
                        "name": { "type": "string" },
                        "series": { "type": "string" }
                    },
                    "description": "Optional set constraint to pick a specific printing."
                }
            },
            "required": ["name"]
        }),
    }
}

/// Executes the price lookup.
///
/// Zero matches is data, not a fault: the reply carries an `error` field
/// and the call itself succeeds.
///
/// # Errors
///
/// Returns `ToolError::InvalidArguments` for malformed input and
/// `ToolError::Upstream` when the card database fails.
pub async fn execute(source: &dyn CardSource, arguments: Value) -> Result<String, ToolError> {
    let args: PriceArgs = serde_json::from_value(arguments)
        .map_err(|e| ToolError::InvalidArguments(e.to_string()))?;

    let filter = SearchFilter {
        name: Some(args.name.clone()),
        set: args.set,
        ..Default::default()
    };
    let query = cardex_query::compile(&filter);
    tracing::debug!(%query, "compiled price query");

    let page = source.search(&query).await?;
    let payload = match page.data.first() {
        Some(card) => price_summary(card),
        None => json!({
            "error": format!("No cards found matching \"{}\"", args.name),
        }),
    };
    Ok(serde_json::to_string(&payload)?)
}

/// Reshapes a card into the reduced price summary.
///
/// Marketplace blocks mirror the source record: absent blocks serialize
/// as `null` rather than being dropped.
fn price_summary(card: &Card) -> Value {
    json!({
        "name": &card.name,
        "set": card.set.as_ref().map(|s| &s.name),
        "tcgplayer": &card.tcgplayer,
        "cardmarket": &card.cardmarket,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardex_types::{SetInfo, TcgplayerBlock};

    fn bare_card() -> Card {
        serde_json::from_value(json!({
            "id": "base1-4",
            "name": "Charizard",
        }))
        .expect("card")
    }

    #[test]
    fn summary_keeps_nullable_blocks() {
        let summary = price_summary(&bare_card());
        assert_eq!(summary["name"], "Charizard");
        assert!(summary["set"].is_null());
        assert!(summary["tcgplayer"].is_null());
        assert!(summary["cardmarket"].is_null());
    }

    #[test]
    fn summary_carries_marketplace_block() {
        let mut card = bare_card();
        card.set = Some(SetInfo {
            id: "base1".into(),
            name: "Base".into(),
            series: None,
            release_date: None,
            images: None,
        });
        card.tcgplayer = Some(TcgplayerBlock {
            url: "https://prices.example/base1-4".into(),
            updated_at: Some("2024/03/01".into()),
            prices: None,
        });
        let summary = price_summary(&card);
        assert_eq!(summary["set"], "Base");
        assert_eq!(summary["tcgplayer"]["url"], "https://prices.example/base1-4");
        assert!(summary["cardmarket"].is_null());
    }
}
