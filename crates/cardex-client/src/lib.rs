//! # cardex-client
//!
//! Remote lookup collaborator: fetches card records from the card-database
//! HTTP API. The [`CardSource`] trait is the port; [`CardClient`] is the
//! reqwest-backed adapter.

pub mod client;
pub mod error;
pub mod source;

pub use client::CardClient;
pub use error::ClientError;
pub use source::CardSource;
