//! Builds the authenticated API client for an invocation.

use tracing::debug;

use crate::{
    api::{ApiError, LinkdingClient},
    config::ResolvedConfig,
};

/// Connect to the instance named by the resolved configuration.
///
/// # Errors
///
/// Fails when the configured URL is unusable or the HTTP client cannot be built.
pub fn connect(config: &ResolvedConfig) -> Result<LinkdingClient, ApiError> {
    let client = LinkdingClient::new(config.url(), config.token())?;
    debug!(base = %client.base_url(), "linkding client ready");
    Ok(client)
}
