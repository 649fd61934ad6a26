//! Web layer for the departure board.
//!
//! Serves the board as a page for the screen, as a reloadable fragment and
//! as JSON, plus the screen settings API.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
