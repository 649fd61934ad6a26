use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use board_server::board::BoardConfig;
use board_server::cache::{CacheConfig, CachedSlClient};
use board_server::config::AppConfig;
use board_server::domain::stockholm_now;
use board_server::feed::DepartureFeed;
use board_server::settings::SettingsStore;
use board_server::sl::{DepartureSource, MockSlClient, SlClient, SlConfig};
use board_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("board_server=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    // Recorded data if asked for, otherwise the live API
    let source = match &config.mock_dir {
        Some(dir) => {
            let mock = MockSlClient::new(dir)?;
            info!(dir = %dir.display(), sites = ?mock.sites(), "serving recorded departures");
            DepartureSource::Mock(mock)
        }
        None => {
            let sl_config = SlConfig::new().with_base_url(&config.sl_base_url);
            info!(base_url = %config.sl_base_url, "using live SL API");
            DepartureSource::Live(SlClient::new(sl_config)?)
        }
    };

    let sl = Arc::new(CachedSlClient::new(source, &CacheConfig::default()));

    let board = BoardConfig::default();
    let feed = Arc::new(DepartureFeed::new(sl.clone(), board.sites()));

    // Refresh the snapshot in the background; the first tick fires at once
    let feed_refresh = feed.clone();
    let refresh_interval = config.refresh_interval;
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(refresh_interval);
        loop {
            interval.tick().await;
            if let Err(e) = feed_refresh.refresh(stockholm_now()).await {
                warn!(error = %e, "departure refresh failed, keeping previous snapshot");
            }
        }
    });

    let settings = match &config.settings_path {
        Some(path) => SettingsStore::load(path)?,
        None => SettingsStore::in_memory(),
    };

    let state = AppState::new(feed, sl, board, settings, config.refresh_interval);
    let app = create_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!("departure board listening on http://{}", config.addr);
    info!("  GET  /                              - board page");
    info!("  GET  /board                         - board fragment");
    info!("  GET  /api/board                     - board as JSON");
    info!("  GET  /api/sites/{{site}}/departures   - raw departures for a site");
    info!("  GET  /api/settings, POST /api/settings - screen settings");

    axum::serve(listener, app).await?;
    Ok(())
}
