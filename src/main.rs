use anyhow::{Context, Result};
use weatherlab_core::Config;
use weatherlab_narrative::Narrator;
use weatherlab_server::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    weatherlab_core::init()?;

    let (config, _validation) = Config::load_validated()?;
    tracing::info!("Config directory: {}", config.config_dir.display());

    let narrator =
        Narrator::from_config(&config.narrative).context("Failed to set up the narrator")?;
    let state = AppState::new(narrator, config.simulation);

    if let Err(e) = weatherlab_server::serve(&config.server, state).await {
        tracing::error!("{}", e);
        anyhow::bail!(e.user_message());
    }

    Ok(())
}
