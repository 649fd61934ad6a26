//! Screen presentation settings.
//!
//! Settings are read by the page template and changed through the JSON API.

mod error;
mod model;
mod store;

pub use error::SettingsError;
pub use model::{MIN_SLIDE_INTERVAL_MS, ScreenSettings};
pub use store::SettingsStore;
