//! CLI subcommand implementations.

pub mod price;
pub mod search;
pub mod serve;

use std::sync::Arc;

use cardex_client::{CardClient, CardSource};
use cardex_config::CardexConfig;

/// Builds the shared card-database client from configuration.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed.
pub(crate) fn open_source(config: &CardexConfig) -> anyhow::Result<Arc<dyn CardSource>> {
    let client = CardClient::new(&config.api.base_url, config.api.timeout())
        .map_err(|e| anyhow::anyhow!("client init error: {e}"))?;
    Ok(Arc::new(client))
}
