//! The departure board proper.
//!
//! Everything in here is a pure function of a [`Snapshot`](crate::domain::Snapshot)
//! and the current time. Rendering the same snapshot twice can differ only
//! because a departure crossed the margin in between.

mod assemble;
mod card;
mod config;
mod selector;

#[cfg(test)]
pub(crate) mod fixtures;

pub use assemble::{DepartureBoard, LOADING, SectionView};
pub use card::{DepartureCard, LineBadge, PLACEHOLDER, PrimaryDeparture};
pub use config::{BoardConfig, BoardSection, CardConfig, TEKNISKA_HOGSKOLAN};
pub use selector::LineSelector;
