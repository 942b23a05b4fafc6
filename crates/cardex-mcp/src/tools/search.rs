//! The `search_cards` tool: full-filter card search.

use serde_json::{json, Value};

use cardex_client::CardSource;
use cardex_protocol::mcp::tools::McpToolDefinition;
use cardex_types::SearchFilter;

use crate::error::ToolError;

/// MCP name of the search tool.
pub const TOOL_NAME: &str = "search_cards";

/// Card subtypes accepted by the `subtypes` argument.
pub(crate) const SUBTYPES: &[&str] = &[
    "ACE SPEC",
    "Ancient",
    "BREAK",
    "Baby",
    "Basic",
    "EX",
    "Eternamax",
    "Fusion Strike",
    "Future",
    "GX",
    "Item",
    "LEGEND",
    "Level-Up",
    "MEGA",
    "Pokémon Tool",
    "Prime",
    "Prism Star",
    "Radiant",
    "Rapid Strike",
    "Restored",
    "SP",
    "Single Strike",
    "Special",
    "Stadium",
    "Stage 1",
    "Stage 2",
    "Star",
    "Supporter",
    "TAG TEAM",
    "Team Plasma",
    "Technical Machine",
    "Tera",
    "Ultra Beast",
    "V",
    "V-UNION",
    "VMAX",
    "VSTAR",
    "ex",
];

const RANGE_SYNTAX: &str = "A number, an inclusive range \"[a TO b]\", an exclusive range \
                            \"{a TO b}\" (either bound may be *), or a negated value \"!n\".";

/// Builds the MCP definition of the search tool.
pub fn definition() -> McpToolDefinition {
    McpToolDefinition {
        name: TOOL_NAME.to_string(),
        description: Some(
            "Search the card database. Filters compile into a single query string; \
             all given filters must match (implicit AND)."
                .to_string(),
        ),
        input_schema: input_schema(),
    }
}

fn input_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "name": {
                "type": "string",
                "description": "Card name. Matched as a quoted literal (hyphens kept \
                                as-is); use * for wildcards or a leading ! for an \
                                exact, non-fuzzy match (both disable quoting)."
            },
            "subtypes": {
                "type": "array",
                "items": { "type": "string", "enum": SUBTYPES },
                "description": "Card subtypes. Multiple values are OR-ed together."
            },
            "legalities": {
                "type": "object",
                "properties": {
                    "standard": { "type": "string", "enum": ["legal", "banned"] },
                    "expanded": { "type": "string", "enum": ["legal", "banned"] },
                    "unlimited": { "type": "string", "enum": ["legal", "banned"] }
                },
                "description": "Per-format legality constraints."
            },
            "types": {
                "type": "array",
                "items": { "type": "string" },
                "description": "Energy types (Colorless, Darkness, Dragon, Fairy, \
                                Fighting, Fire, Grass, Lightning, Metal, Psychic, \
                                Water). Prefix a value with - to exclude it."
            },
            "evolvesTo": {
                "type": "array",
                "items": { "type": "string" },
                "description": "Names this card evolves into. OR-ed together."
            },
            "hp": {
                "type": ["integer", "string"],
                "description": format!("Hit points. {RANGE_SYNTAX}")
            },
            "convertedRetreatCost": {
                "type": ["integer", "string"],
                "description": format!("Retreat cost. 0 is a valid value. {RANGE_SYNTAX}")
            },
            "nationalPokedexNumbers": {
                "type": ["integer", "string"],
                "description": format!("National pokédex number. {RANGE_SYNTAX}")
            },
            "page": {
                "type": ["integer", "string"],
                "description": "Result page to return."
            },
            "pageSize": {
                "type": ["integer", "string"],
                "description": "Number of results per page."
            },
            "set": {
                "type": ["object", "string"],
                "properties": {
                    "id": { "type": "string" },
                    "name": { "type": "string" },
                    "series": { "type": "string" }
                },
                "description": "Set constraint: structured fields, or a raw query \
                                fragment such as \"set.id:sm1\"."
            },
            "attacks": {
                "type": ["array", "string"],
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "cost": { "type": "string" },
                        "convertedEnergyCost": { "type": "integer" },
                        "damage": { "type": "string" },
                        "text": { "type": "string" }
                    }
                },
                "description": "Attack constraints: structured objects, or a raw \
                                query fragment such as \"attacks.name:Surf\"."
            },
            "weaknesses": {
                "type": ["array", "string"],
                "items": {
                    "type": "object",
                    "properties": {
                        "type": { "type": "string" },
                        "value": { "type": "string" }
                    }
                },
                "description": "Weakness constraints: structured objects, or a raw \
                                query fragment such as \"weaknesses.type:Water\"."
            },
            "regulationMark": {
                "type": "string",
                "description": "Regulation mark printed on the card (D, E, F, G, H)."
            }
        }
    })
}

/// Executes the search tool.
///
/// # Errors
///
/// Returns `ToolError::InvalidArguments` for malformed input and
/// `ToolError::Upstream` when the card database fails.
pub async fn execute(source: &dyn CardSource, arguments: Value) -> Result<String, ToolError> {
    // Absent arguments mean "no filters", not a malformed call.
    let filter: SearchFilter = if arguments.is_null() {
        SearchFilter::default()
    } else {
        serde_json::from_value(arguments).map_err(|e| ToolError::InvalidArguments(e.to_string()))?
    };

    let query = cardex_query::compile(&filter);
    tracing::debug!(%query, "compiled search query");

    let page = source.search(&query).await?;
    let payload = json!({
        "total": page.total_count,
        "cards": page.data,
    });
    Ok(serde_json::to_string(&payload)?)
}
