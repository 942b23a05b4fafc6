//! `cardex search` command.
//!
//! Builds a search filter from flags, compiles it, and queries the
//! card database. `--dry-run` prints the compiled query instead.

use clap::Args;

use cardex_client::CardSource;
use cardex_config::CardexConfig;
use cardex_types::{Card, DiagnosticError, NumericFilter, SearchFilter, SetFields, SetFilter};

use crate::commands;
use crate::output;

/// Search for cards in the remote database.
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Card name (use * for wildcards, leading ! for exact match).
    #[arg(long)]
    pub name: Option<String>,
    /// Card subtype; repeat for OR alternatives.
    #[arg(long = "subtype")]
    pub subtypes: Vec<String>,
    /// Energy type; prefix with - to exclude. Repeatable.
    #[arg(long = "card-type", allow_hyphen_values = true)]
    pub card_types: Vec<String>,
    /// Evolution target; repeatable.
    #[arg(long = "evolves-to")]
    pub evolves_to: Vec<String>,
    /// Hit points (number or range like "[100 TO 200]").
    #[arg(long)]
    pub hp: Option<NumericFilter>,
    /// Converted retreat cost (number or range).
    #[arg(long)]
    pub retreat_cost: Option<NumericFilter>,
    /// National pokédex number (number or range).
    #[arg(long)]
    pub pokedex_number: Option<NumericFilter>,
    /// Result page.
    #[arg(long)]
    pub page: Option<NumericFilter>,
    /// Results per page.
    #[arg(long)]
    pub page_size: Option<NumericFilter>,
    /// Set id (e.g. "sv4pt5").
    #[arg(long)]
    pub set_id: Option<String>,
    /// Set name.
    #[arg(long)]
    pub set_name: Option<String>,
    /// Set series.
    #[arg(long)]
    pub series: Option<String>,
    /// Regulation mark.
    #[arg(long)]
    pub regulation_mark: Option<String>,
    /// Print the compiled query without calling the API.
    #[arg(long)]
    pub dry_run: bool,
}

impl SearchArgs {
    /// Converts the flags into a structured filter.
    fn to_filter(&self) -> SearchFilter {
        let set = if self.set_id.is_some() || self.set_name.is_some() || self.series.is_some() {
            Some(SetFilter::Fields(SetFields {
                id: self.set_id.clone(),
                name: self.set_name.clone(),
                series: self.series.clone(),
            }))
        } else {
            None
        };

        SearchFilter {
            name: self.name.clone(),
            subtypes: non_empty(&self.subtypes),
            types: non_empty(&self.card_types),
            evolves_to: non_empty(&self.evolves_to),
            hp: self.hp.clone(),
            converted_retreat_cost: self.retreat_cost.clone(),
            national_pokedex_numbers: self.pokedex_number.clone(),
            page: self.page.clone(),
            page_size: self.page_size.clone(),
            set,
            regulation_mark: self.regulation_mark.clone(),
            ..Default::default()
        }
    }
}

fn non_empty(values: &[String]) -> Option<Vec<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values.to_vec())
    }
}

/// Executes the search command.
pub async fn execute(args: &SearchArgs, config: &CardexConfig) -> anyhow::Result<()> {
    let query = cardex_query::compile(&args.to_filter());

    if args.dry_run {
        println!("{query}");
        return Ok(());
    }

    let source = commands::open_source(config)?;
    output::print_info(&format!("Searching for '{query}'..."));
    let page = source.search(&query).await.map_err(|e| {
        if let Some(hint) = e.hint() {
            eprintln!("\n  Cause: {hint}");
        }
        if let Some(fix) = e.fix() {
            eprintln!("  Fix:   {fix}\n");
        }
        anyhow::anyhow!("search failed: {e}")
    })?;

    if page.data.is_empty() {
        output::print_warning("No cards found");
        return Ok(());
    }

    output::print_success(&format!(
        "Found {} card(s), showing {}:",
        page.total_count,
        page.data.len()
    ));
    for card in &page.data {
        println!("  {}", describe(card));
    }
    Ok(())
}

/// One-line human summary of a card.
fn describe(card: &Card) -> String {
    let set = card
        .set
        .as_ref()
        .map(|s| s.name.as_str())
        .unwrap_or("unknown set");
    let rarity = card.rarity.as_deref().unwrap_or("-");
    format!("{:<14} {} [{}] {}", card.id, card.name, set, rarity)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> SearchArgs {
        SearchArgs {
            name: None,
            subtypes: vec![],
            card_types: vec![],
            evolves_to: vec![],
            hp: None,
            retreat_cost: None,
            pokedex_number: None,
            page: None,
            page_size: None,
            set_id: None,
            set_name: None,
            series: None,
            regulation_mark: None,
            dry_run: false,
        }
    }

    #[test]
    fn empty_args_compile_to_empty_query() {
        assert_eq!(cardex_query::compile(&base_args().to_filter()), "");
    }

    #[test]
    fn flags_map_onto_filter_fields() {
        let args = SearchArgs {
            name: Some("chien-pao".into()),
            subtypes: vec!["EX".into()],
            card_types: vec!["-Water".into()],
            set_id: Some("sv4pt5".into()),
            ..base_args()
        };
        let query = cardex_query::compile(&args.to_filter());
        assert_eq!(
            query,
            "name:\"chien-pao\" subtypes:EX -types:Water set.id:sv4pt5"
        );
    }

    #[test]
    fn range_flag_passes_through() {
        let args = SearchArgs {
            hp: Some("[100 TO 200]".parse().expect("filter")),
            ..base_args()
        };
        assert_eq!(cardex_query::compile(&args.to_filter()), "hp:[100 TO 200]");
    }
}
