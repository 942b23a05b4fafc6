//! Reusable clause builders for the query grammar.

use cardex_types::NumericFilter;

/// Builds an OR-group clause for a multi-value field.
///
/// Per value: a dotted value is already a nested-field expression and
/// passes through unchanged; a `!` prefix marks an exact match and wins
/// over negation mode; otherwise the value is scoped to `field`, with a
/// `-` prefix when `negated` is set.
///
/// Two or more alternatives are parenthesized and joined with ` OR `;
/// a single alternative is emitted bare; none yields `None`.
pub(crate) fn value_clause(field: &str, values: &[String], negated: bool) -> Option<String> {
    let parts: Vec<String> = values
        .iter()
        .filter(|v| !v.is_empty())
        .map(|v| {
            if v.contains('.') {
                v.clone()
            } else if v.starts_with('!') {
                format!("{field}:{v}")
            } else if negated {
                format!("-{field}:{v}")
            } else {
                format!("{field}:{v}")
            }
        })
        .collect();

    match parts.len() {
        0 => None,
        1 => parts.into_iter().next(),
        _ => Some(format!("({})", parts.join(" OR "))),
    }
}

/// Scopes a raw pre-formatted fragment to `field`.
///
/// A fragment that already contains a dot is a complete nested-field
/// expression and passes through unchanged.
pub(crate) fn raw_clause(field: &str, raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else if raw.contains('.') {
        Some(raw.to_string())
    } else {
        Some(format!("{field}:{raw}"))
    }
}

/// Builds one nested dotted-field clause, skipping undefined keys.
pub(crate) fn nested_clause(field: &str, key: &str, value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.is_empty())
        .map(|v| format!("{field}.{key}:{v}"))
}

/// Builds a numeric clause.
///
/// The `Expr` arm is the passthrough for caller-supplied range/negation
/// syntax (`[a TO b]`, `{a TO b}`, `!v`); an empty expression contributes
/// no clause. A plain value always compiles, including `0`.
pub(crate) fn numeric_clause(field: &str, filter: &NumericFilter) -> Option<String> {
    match filter {
        NumericFilter::Value(n) => Some(format!("{field}:{n}")),
        NumericFilter::Expr(expr) if expr.is_empty() => None,
        NumericFilter::Expr(expr) => Some(format!("{field}:{expr}")),
    }
}
