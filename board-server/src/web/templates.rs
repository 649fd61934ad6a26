//! Askama templates for the screen.
//!
//! Handlers return these directly; `askama_axum` renders them into HTML
//! responses.

use askama_axum::Template;

use crate::board::DepartureBoard;
use crate::settings::ScreenSettings;

/// The full page: layout, settings and the board.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub board: DepartureBoard,
    pub settings: ScreenSettings,
    pub refresh_secs: u64,
    /// "HH:MM" of the snapshot, if one has loaded.
    pub updated_at: Option<String>,
}

/// Board fragment, for reloading the board without the page around it.
#[derive(Template)]
#[template(path = "board.html")]
pub struct BoardTemplate {
    pub board: DepartureBoard,
}
