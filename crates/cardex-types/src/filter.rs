//! Structured search filter accepted by the tool surface.
//!
//! Fields that the wire protocol accepts as "either a raw query string or a
//! structured object" are modeled as untagged enums, so the compiler can
//! pattern-match on the shape instead of sniffing at runtime.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;

/// Structured search parameters for the card database.
///
/// Every field is optional; an empty filter compiles to an empty query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchFilter {
    /// Card name. Quoted literal unless it carries `!` or `*` markers.
    pub name: Option<String>,
    /// Card subtypes (Basic, EX, VMAX, ...). OR-grouped.
    pub subtypes: Option<Vec<String>>,
    /// Format legality constraints.
    pub legalities: Option<LegalityFilter>,
    /// Energy types. A leading `-` on a value excludes it.
    pub types: Option<Vec<String>>,
    /// Evolution targets. OR-grouped.
    pub evolves_to: Option<Vec<String>>,
    /// Hit points: number or range expression.
    pub hp: Option<NumericFilter>,
    /// Converted retreat cost: number or range expression.
    pub converted_retreat_cost: Option<NumericFilter>,
    /// National pokédex number: number or range expression.
    pub national_pokedex_numbers: Option<NumericFilter>,
    /// Result page.
    pub page: Option<NumericFilter>,
    /// Results per page.
    pub page_size: Option<NumericFilter>,
    /// Set constraint.
    pub set: Option<SetFilter>,
    /// Attack constraints.
    pub attacks: Option<AttackFilter>,
    /// Weakness constraints.
    pub weaknesses: Option<WeaknessFilter>,
    /// Regulation mark (D, E, F, G, H, ...).
    pub regulation_mark: Option<String>,
}

/// Numeric field value: a plain number, or a pre-formatted expression.
///
/// Expressions carry the search grammar verbatim: inclusive `[a TO b]`,
/// exclusive `{a TO b}`, unbounded `[* TO b]`, or negated `!v`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericFilter {
    /// Plain numeric value. `0` is a real value, not "unset".
    Value(u32),
    /// Pre-formatted range or negation expression.
    Expr(String),
}

impl FromStr for NumericFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<u32>() {
            Ok(n) => NumericFilter::Value(n),
            Err(_) => NumericFilter::Expr(s.to_string()),
        })
    }
}

/// Legality constraint: raw clause or per-format map.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LegalityFilter {
    /// Pre-formatted query fragment.
    Raw(String),
    /// Per-format legality values ("legal" / "banned").
    Formats(LegalityFields),
}

/// Per-format legality values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LegalityFields {
    pub standard: Option<String>,
    pub expanded: Option<String>,
    pub unlimited: Option<String>,
}

/// Set constraint: raw clause or structured fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SetFilter {
    /// Pre-formatted query fragment.
    Raw(String),
    /// Structured set fields.
    Fields(SetFields),
}

/// Structured set constraint fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SetFields {
    pub id: Option<String>,
    pub name: Option<String>,
    pub series: Option<String>,
}

/// Attack constraint: raw clause or a sequence of structured attacks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttackFilter {
    /// Pre-formatted query fragment.
    Raw(String),
    /// Structured attack constraints, one clause set per element.
    Items(Vec<AttackFields>),
}

/// Structured attack constraint fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttackFields {
    pub name: Option<String>,
    pub cost: Option<String>,
    pub converted_energy_cost: Option<u32>,
    pub damage: Option<String>,
    pub text: Option<String>,
}

/// Weakness constraint: raw clause or a sequence of structured weaknesses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WeaknessFilter {
    /// Pre-formatted query fragment.
    Raw(String),
    /// Structured weakness constraints, one clause set per element.
    Items(Vec<WeaknessFields>),
}

/// Structured weakness constraint fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaknessFields {
    #[serde(rename = "type")]
    pub weakness_type: Option<String>,
    pub value: Option<String>,
}
