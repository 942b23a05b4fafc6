//! # cardex-query
//!
//! Compiles a [`SearchFilter`](cardex_types::SearchFilter) into a single
//! Lucene-style query string for the remote card database.
//!
//! The compiler is a pure function: no I/O, no failure modes. Malformed or
//! empty input simply yields fewer clauses, down to the empty string.

mod clause;
mod compile;

pub use compile::compile;
