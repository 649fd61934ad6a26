//! HTTP route handlers.

use std::path::Path as FsPath;

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::NaiveDateTime;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::board::DepartureBoard;
use crate::domain::{SiteId, stockholm_now};
use crate::settings::{ScreenSettings, SettingsError};
use crate::sl::SlError;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &FsPath) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/board", get(board_fragment))
        .route("/health", get(health))
        .route("/api/board", get(board_json))
        .route("/api/sites/:site_id/departures", get(site_departures))
        .route("/api/settings", get(get_settings).post(update_settings))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Build the board from the current snapshot.
async fn current_board(state: &AppState, now: NaiveDateTime) -> (DepartureBoard, Option<NaiveDateTime>) {
    let snapshot = state.feed.snapshot().await;
    let board = DepartureBoard::build(&snapshot, now, &state.board);
    (board, snapshot.fetched_at())
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// The screen: full page with the board.
async fn index_page(State(state): State<AppState>) -> IndexTemplate {
    let (board, fetched_at) = current_board(&state, stockholm_now()).await;

    IndexTemplate {
        board,
        settings: state.settings.get().await,
        refresh_secs: state.refresh_secs,
        updated_at: fetched_at.map(|t| t.format("%H:%M").to_string()),
    }
}

/// The board alone, for reloading in place.
async fn board_fragment(State(state): State<AppState>) -> BoardTemplate {
    let (board, _) = current_board(&state, stockholm_now()).await;
    BoardTemplate { board }
}

/// The board as JSON.
async fn board_json(State(state): State<AppState>) -> Json<BoardResponse> {
    let now = stockholm_now();
    let (board, fetched_at) = current_board(&state, now).await;

    Json(BoardResponse {
        generated_at: now,
        fetched_at,
        board,
    })
}

/// Raw departures for any site, through the cache.
async fn site_departures(
    State(state): State<AppState>,
    Path(site_id): Path<String>,
) -> Result<Json<SiteDeparturesResult>, AppError> {
    let site = site_id
        .trim()
        .parse::<u32>()
        .map(SiteId)
        .map_err(|_| AppError::BadRequest {
            message: format!("Invalid site id: {}", site_id),
        })?;

    let departures = state.sl.get_departures(site).await?;

    Ok(Json(SiteDeparturesResult {
        site,
        departures: departures.as_ref().clone(),
    }))
}

/// Current screen settings.
async fn get_settings(State(state): State<AppState>) -> Json<ScreenSettings> {
    Json(state.settings.get().await)
}

/// Replace the screen settings.
async fn update_settings(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ScreenSettings>, AppError> {
    // Parse JSON manually so a rejected body can be logged
    let settings: ScreenSettings = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "invalid settings JSON");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    state.settings.update(settings.clone()).await?;
    info!(
        dark_mode = settings.dark_mode,
        slide_interval_ms = settings.slide_interval_ms,
        "screen settings updated"
    );

    Ok(Json(settings))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<SlError> for AppError {
    fn from(e: SlError) -> Self {
        match e {
            SlError::SiteNotFound(_) => AppError::NotFound {
                message: e.to_string(),
            },
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl From<SettingsError> for AppError {
    fn from(e: SettingsError) -> Self {
        match e {
            SettingsError::Validation(message) => AppError::BadRequest { message },
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
