use color_eyre::eyre::Result;
use dotenv::dotenv;
use openday_api::config::ApiConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Initialize logging before anything talks to the store
    openday_api::init_tracing(config.log_level)?;

    // Build the store client; the schema is provisioned by db-migrate, not here
    let store = openday_api::connect_store(&config.store)?;

    // Start API server
    openday_api::start_server(config, store).await?;

    Ok(())
}
