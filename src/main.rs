mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use std::sync::Arc;

use anyhow::Result;

use config::DashboardConfig;
use data::loader;
use state::DashboardState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = DashboardConfig::default();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_filter()))
        .init();

    // Any malformed row stops the process here, before the server binds.
    let traffic = loader::load_traffic(&config.traffic_csv)?;
    let stations = loader::load_stations(&config.stations_csv)?;
    if traffic.is_empty() || stations.is_empty() {
        log::warn!("A dataset is empty; the matching charts will be blank");
    }

    let state = Arc::new(DashboardState::new(traffic, stations));
    app::serve(state, &config).await
}
