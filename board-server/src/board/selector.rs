//! Selecting the departures that belong on one card.

use serde::Serialize;

use crate::domain::{Departure, DirectionCode, LineId, SiteId, TransportMode};

/// Identifies one line in one direction at one site.
///
/// Matching is exact on all four keys. There is no wildcard: a selector for
/// direction 2 never picks up direction 1, even on the same line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LineSelector {
    pub site: SiteId,
    pub direction: DirectionCode,
    pub mode: TransportMode,
    pub line: LineId,
}

impl LineSelector {
    pub const fn new(
        site: SiteId,
        direction: DirectionCode,
        mode: TransportMode,
        line: LineId,
    ) -> Self {
        Self {
            site,
            direction,
            mode,
            line,
        }
    }

    /// Whether the departure belongs to this line, direction and site.
    pub fn matches(&self, departure: &Departure) -> bool {
        departure.site_id == self.site
            && departure.direction_code == self.direction
            && departure.transport_mode == self.mode
            && departure.line_id == self.line
    }

    /// The matching departures, in their original order.
    pub fn select<'a>(&self, departures: &'a [Departure]) -> Vec<&'a Departure> {
        departures.iter().filter(|d| self.matches(d)).collect()
    }
}
