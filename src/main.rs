//! Energy Audit - Main entry point
//!
//! Serves the appliance energy calculator over HTTP.

use energy_audit_lib::core::Config;
use energy_audit_lib::server::{start_server, AppState};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Failed to load config, using defaults: {}", e);
            Config::default()
        }
    };

    log::info!(
        "Default rate {:.4} {}/kWh, replacement threshold {}%",
        config.pricing.default_rate_per_kwh,
        config.pricing.currency_symbol,
        config.audit.replace_threshold_percent
    );

    let state = Arc::new(AppState::new(&config));
    start_server(state, &config.server).await?;

    Ok(())
}
