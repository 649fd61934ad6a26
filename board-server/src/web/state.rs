//! Application state for the web layer.

use std::sync::Arc;
use std::time::Duration;

use crate::board::BoardConfig;
use crate::cache::CachedSlClient;
use crate::feed::DepartureFeed;
use crate::settings::SettingsStore;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Latest departure snapshot for the board
    pub feed: Arc<DepartureFeed>,

    /// Cached SL client, shared with the feed
    pub sl: Arc<CachedSlClient>,

    /// Board layout
    pub board: Arc<BoardConfig>,

    /// Screen settings
    pub settings: SettingsStore,

    /// How often the page asks to be reloaded, in seconds
    pub refresh_secs: u64,
}

impl AppState {
    /// Create a new app state.
    ///
    /// The page reload hint follows the feed's refresh interval, so the
    /// screen never reloads more often than new data can arrive.
    pub fn new(
        feed: Arc<DepartureFeed>,
        sl: Arc<CachedSlClient>,
        board: BoardConfig,
        settings: SettingsStore,
        refresh_interval: Duration,
    ) -> Self {
        Self {
            feed,
            sl,
            board: Arc::new(board),
            settings,
            refresh_secs: refresh_interval.as_secs().max(1),
        }
    }
}
