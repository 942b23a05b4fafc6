//! Abstract source trait (port) for card lookups.

use async_trait::async_trait;

use cardex_types::CardPage;

use crate::error::ClientError;

/// Abstract trait for querying the card database.
///
/// The production implementation is [`CardClient`](crate::CardClient);
/// tests substitute in-memory fakes.
#[async_trait]
pub trait CardSource: Send + Sync {
    /// Runs a compiled query string and returns the matching page.
    async fn search(&self, query: &str) -> Result<CardPage, ClientError>;
}
