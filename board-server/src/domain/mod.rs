//! Domain types for the departure board.
//!
//! Departures are plain records as delivered by the SL feed. The identifier
//! newtypes exist so that board selectors compare like with like: a site id
//! can never be matched against a line id by accident.

mod clock;
mod departure;
mod ids;
mod transport_mode;

pub use clock::{stockholm_now, stockholm_time};
pub use departure::{Departure, Snapshot};
pub use ids::{DirectionCode, LineId, SiteId};
pub use transport_mode::TransportMode;
