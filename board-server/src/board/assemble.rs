//! Assembling the whole board from a snapshot.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::Snapshot;

use super::card::DepartureCard;
use super::config::BoardConfig;

/// Text of a board whose snapshot has not loaded yet.
pub const LOADING: &str = "Laddar tidtabell...";

/// One rendered section: a heading and its cards in configured order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionView {
    pub title: String,
    pub cards: Vec<DepartureCard>,
}

/// What the board displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DepartureBoard {
    /// The snapshot is empty. No cards are rendered, not even placeholders.
    Loading,

    Sections { sections: Vec<SectionView> },
}

impl DepartureBoard {
    /// Build the board for `snapshot` as seen at `now`.
    pub fn build(snapshot: &Snapshot, now: NaiveDateTime, config: &BoardConfig) -> Self {
        if snapshot.is_empty() {
            return DepartureBoard::Loading;
        }

        let departures = snapshot.departures();
        let sections = config
            .sections
            .iter()
            .map(|section| SectionView {
                title: section.title.clone(),
                cards: section
                    .lines
                    .iter()
                    .map(|selector| {
                        DepartureCard::build(&selector.select(departures), now, &config.card)
                    })
                    .collect(),
            })
            .collect();

        DepartureBoard::Sections { sections }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DepartureBoard::Loading)
    }

    /// Rendered sections; empty while loading.
    pub fn sections(&self) -> &[SectionView] {
        match self {
            DepartureBoard::Loading => &[],
            DepartureBoard::Sections { sections } => sections,
        }
    }
}
