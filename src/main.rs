use std::sync::Arc;

use color_eyre::eyre::Result;
use dotenv::dotenv;
use slotproxy_api::config::ApiConfig;
use slotproxy_provider::{client::CalComClient, config::ProviderConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;
    let provider_config = ProviderConfig::from_env()?;

    // Build the provider client once; it is shared by every request
    let client = CalComClient::new(provider_config)?;

    // Start API server
    slotproxy_api::start_server(config, Arc::new(client)).await?;

    Ok(())
}
