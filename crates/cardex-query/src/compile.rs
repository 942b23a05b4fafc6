//! Filter-to-query-string compilation.

use cardex_types::{
    AttackFields, AttackFilter, LegalityFilter, SearchFilter, SetFilter, WeaknessFields,
    WeaknessFilter,
};

use crate::clause::{nested_clause, numeric_clause, raw_clause, value_clause};

/// Compiles a structured filter into one space-joined query string.
///
/// Clauses are appended in a fixed order so identical filters always
/// produce identical strings. Space-joining is the grammar's implicit AND.
pub fn compile(filter: &SearchFilter) -> String {
    let mut clauses: Vec<String> = Vec::new();

    if let Some(clause) = filter.name.as_deref().and_then(name_clause) {
        clauses.push(clause);
    }
    if let Some(subtypes) = &filter.subtypes {
        clauses.extend(value_clause("subtypes", subtypes, false));
    }
    if let Some(legalities) = &filter.legalities {
        clauses.extend(legality_clauses(legalities));
    }
    if let Some(types) = &filter.types {
        clauses.extend(type_clauses(types));
    }
    if let Some(evolves_to) = &filter.evolves_to {
        clauses.extend(value_clause("evolvesTo", evolves_to, false));
    }
    if let Some(hp) = &filter.hp {
        clauses.extend(numeric_clause("hp", hp));
    }
    if let Some(cost) = &filter.converted_retreat_cost {
        clauses.extend(numeric_clause("convertedRetreatCost", cost));
    }
    if let Some(dex) = &filter.national_pokedex_numbers {
        clauses.extend(numeric_clause("nationalPokedexNumbers", dex));
    }
    if let Some(page) = &filter.page {
        clauses.extend(numeric_clause("page", page));
    }
    if let Some(page_size) = &filter.page_size {
        clauses.extend(numeric_clause("pageSize", page_size));
    }
    if let Some(set) = &filter.set {
        clauses.extend(set_clauses(set));
    }
    if let Some(attacks) = &filter.attacks {
        clauses.extend(attack_clauses(attacks));
    }
    if let Some(weaknesses) = &filter.weaknesses {
        clauses.extend(weakness_clauses(weaknesses));
    }
    if let Some(mark) = filter.regulation_mark.as_deref().filter(|m| !m.is_empty()) {
        clauses.push(format!("regulationMark:{mark}"));
    }

    clauses.join(" ")
}

/// Name clause: `!` or `*` markers keep the name unquoted so the grammar
/// sees them; everything else is a quoted literal with hyphens intact.
fn name_clause(name: &str) -> Option<String> {
    if name.is_empty() {
        return None;
    }
    if name.starts_with('!') || name.contains('*') {
        Some(format!("name:{name}"))
    } else {
        Some(format!("name:\"{name}\""))
    }
}

/// Splits `-`-prefixed values into an exclusion pass: positives compile
/// normally, negatives re-enter the same routine in negation mode.
fn type_clauses(types: &[String]) -> Vec<String> {
    let (included, excluded): (Vec<String>, Vec<String>) =
        types.iter().cloned().partition(|t| !t.starts_with('-'));
    let excluded: Vec<String> = excluded
        .iter()
        .map(|t| t.strip_prefix('-').unwrap_or(t).to_string())
        .collect();

    let mut clauses = Vec::new();
    clauses.extend(value_clause("types", &included, false));
    clauses.extend(value_clause("types", &excluded, true));
    clauses
}

fn legality_clauses(filter: &LegalityFilter) -> Vec<String> {
    match filter {
        LegalityFilter::Raw(raw) => raw_clause("legalities", raw).into_iter().collect(),
        LegalityFilter::Formats(formats) => [
            nested_clause("legalities", "standard", formats.standard.as_deref()),
            nested_clause("legalities", "expanded", formats.expanded.as_deref()),
            nested_clause("legalities", "unlimited", formats.unlimited.as_deref()),
        ]
        .into_iter()
        .flatten()
        .collect(),
    }
}

fn set_clauses(filter: &SetFilter) -> Vec<String> {
    match filter {
        SetFilter::Raw(raw) => raw_clause("set", raw).into_iter().collect(),
        SetFilter::Fields(fields) => [
            nested_clause("set", "id", fields.id.as_deref()),
            nested_clause("set", "name", fields.name.as_deref()),
            nested_clause("set", "series", fields.series.as_deref()),
        ]
        .into_iter()
        .flatten()
        .collect(),
    }
}

fn attack_clauses(filter: &AttackFilter) -> Vec<String> {
    match filter {
        AttackFilter::Raw(raw) => raw_clause("attacks", raw).into_iter().collect(),
        AttackFilter::Items(items) => items.iter().flat_map(attack_item_clauses).collect(),
    }
}

fn attack_item_clauses(attack: &AttackFields) -> Vec<String> {
    let cost_clause = attack
        .converted_energy_cost
        .map(|c| format!("attacks.convertedEnergyCost:{c}"));
    [
        nested_clause("attacks", "name", attack.name.as_deref()),
        nested_clause("attacks", "cost", attack.cost.as_deref()),
        cost_clause,
        nested_clause("attacks", "damage", attack.damage.as_deref()),
        nested_clause("attacks", "text", attack.text.as_deref()),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn weakness_clauses(filter: &WeaknessFilter) -> Vec<String> {
    match filter {
        WeaknessFilter::Raw(raw) => raw_clause("weaknesses", raw).into_iter().collect(),
        WeaknessFilter::Items(items) => items.iter().flat_map(weakness_item_clauses).collect(),
    }
}

fn weakness_item_clauses(weakness: &WeaknessFields) -> Vec<String> {
    [
        nested_clause("weaknesses", "type", weakness.weakness_type.as_deref()),
        nested_clause("weaknesses", "value", weakness.value.as_deref()),
    ]
    .into_iter()
    .flatten()
    .collect()
}
