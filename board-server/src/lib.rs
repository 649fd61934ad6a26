//! SL departure board server.
//!
//! Polls the SL transport API for the stations on the board and renders the
//! next catchable departures per line for a wall-mounted screen.

pub mod board;
pub mod cache;
pub mod config;
pub mod domain;
pub mod feed;
pub mod settings;
pub mod sl;
pub mod web;
