//! Board layout and card configuration.

use chrono::Duration;

use crate::domain::{DirectionCode, LineId, SiteId, TransportMode};

use super::selector::LineSelector;

/// Tekniska högskolan: metro (red line) and Roslagsbanan.
pub const TEKNISKA_HOGSKOLAN: SiteId = SiteId(9204);

/// How a single card picks what to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardConfig {
    /// Departures sooner than this (minutes) are too close to catch.
    pub margin_mins: i64,

    /// Maximum number of departures on one card.
    pub count: usize,
}

impl CardConfig {
    pub fn new(margin_mins: i64, count: usize) -> Self {
        Self { margin_mins, count }
    }

    /// Returns the margin as a Duration.
    pub fn margin(&self) -> Duration {
        Duration::minutes(self.margin_mins)
    }
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            margin_mins: 6,
            count: 4,
        }
    }
}

/// A titled group of cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSection {
    pub title: String,
    /// One card per selector, in display order.
    pub lines: Vec<LineSelector>,
}

impl BoardSection {
    pub fn new(title: impl Into<String>, lines: Vec<LineSelector>) -> Self {
        Self {
            title: title.into(),
            lines,
        }
    }
}

/// Which lines appear on the board, in what order, and how cards behave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    pub sections: Vec<BoardSection>,
    pub card: CardConfig,
}

impl BoardConfig {
    pub fn new(sections: Vec<BoardSection>, card: CardConfig) -> Self {
        Self { sections, card }
    }

    /// Distinct sites referenced by any section, in first-seen order.
    ///
    /// This is what the feed has to poll.
    pub fn sites(&self) -> Vec<SiteId> {
        let mut sites = Vec::new();
        for selector in self.sections.iter().flat_map(|s| &s.lines) {
            if !sites.contains(&selector.site) {
                sites.push(selector.site);
            }
        }
        sites
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        let metro = |direction| {
            LineSelector::new(
                TEKNISKA_HOGSKOLAN,
                DirectionCode(direction),
                TransportMode::Metro,
                LineId(14),
            )
        };
        let roslagsbanan = |line| {
            LineSelector::new(
                TEKNISKA_HOGSKOLAN,
                DirectionCode(2),
                TransportMode::Tram,
                LineId(line),
            )
        };

        Self {
            sections: vec![
                BoardSection::new("Tekniska Högskolan", vec![metro(1), metro(2)]),
                BoardSection::new(
                    "Roslagsbanan",
                    vec![roslagsbanan(27), roslagsbanan(28), roslagsbanan(29)],
                ),
            ],
            card: CardConfig::default(),
        }
    }
}
