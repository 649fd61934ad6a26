//! SL (Storstockholms Lokaltrafik) departures client.
//!
//! This module provides an HTTP client for the SL transport API, which
//! serves real-time departures per site.
//!
//! Key characteristics of the feed:
//! - Departures are per *site*; a site bundles every stop point of a
//!   station, across modes
//! - Times are local Stockholm time without an offset
//!   ("2026-10-16T08:12:00")
//! - Each departure carries a ready-made countdown string (`display`)

mod client;
mod convert;
mod error;
mod mock;
mod source;
mod types;

pub use client::{DEFAULT_BASE_URL, SlClient, SlConfig};
pub use convert::{ConversionError, convert_departure, convert_site_departures};
pub use error::SlError;
pub use mock::MockSlClient;
pub use source::DepartureSource;
pub use types::{DepartureDto, LineDto, SiteDeparturesResponse};
