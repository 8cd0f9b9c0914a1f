use anyhow::Result;

use crate::api::{DevBackend, EntryGateway, SupabaseClient};
use crate::config::StudyConfig;

/// The gateway to run against plus a short label for the header.
pub fn remote_gateway(config: &StudyConfig) -> Result<(Box<dyn EntryGateway>, String)> {
    config.require_remote()?;
    let client = SupabaseClient::new(&config.api_url, &config.api_key, &config.table)?;
    let label = format!(
        "{} / {}",
        config
            .api_url
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_end_matches('/'),
        config.table
    );
    tracing::info!(url = %config.api_url, table = %config.table, "using remote record store");
    Ok((Box::new(client), label))
}

pub fn dev_gateway() -> (Box<dyn EntryGateway>, String) {
    tracing::info!("using in-memory dev backend");
    (Box::new(DevBackend::new()), "dev (in-memory)".to_string())
}
