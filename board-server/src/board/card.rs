//! The card for one line: the next catchable departure plus a short list.
//!
//! A card shows the soonest departure that is still worth running for, with
//! its badge and destination, and the countdowns of the few after it. What
//! counts as "worth running for" is the margin in [`CardConfig`]: anything
//! leaving sooner than `now + margin` is dropped.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::{Departure, TransportMode};

use super::config::CardConfig;

/// Text of a card with nothing to show.
pub const PLACEHOLDER: &str = "---";

/// Badge identifying a line: mode, line group and designation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineBadge {
    pub mode: TransportMode,
    pub group: Option<String>,
    pub designation: String,
}

impl LineBadge {
    pub fn from_departure(departure: &Departure) -> Self {
        Self {
            mode: departure.transport_mode,
            group: departure.line_group.clone(),
            designation: departure.line_designation.clone(),
        }
    }

    /// CSS classes for the badge, e.g.
    /// `"sl-badge sl-badge-metro sl-group-tunnelbanans-roda-linje"`.
    pub fn css_class(&self) -> String {
        let mut class = format!("sl-badge sl-badge-{}", self.mode.as_str());
        if let Some(group) = self.group.as_deref() {
            let slug = slugify(group);
            if !slug.is_empty() {
                class.push_str(" sl-group-");
                class.push_str(&slug);
            }
        }
        class
    }
}

/// Lower-case ASCII slug: Swedish letters folded, everything else
/// non-alphanumeric collapsed to single dashes.
fn slugify(s: &str) -> String {
    let mut slug = String::with_capacity(s.len());
    let mut pending_dash = false;

    for c in s.chars().flat_map(char::to_lowercase) {
        let c = match c {
            'å' | 'ä' | 'á' | 'à' => 'a',
            'ö' | 'ó' => 'o',
            'é' | 'è' => 'e',
            'ü' => 'u',
            c => c,
        };
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// The departure shown in full at the top of a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrimaryDeparture {
    pub badge: LineBadge,
    pub destination: String,
    pub display_time: String,
}

impl PrimaryDeparture {
    pub fn from_departure(departure: &Departure) -> Self {
        Self {
            badge: LineBadge::from_departure(departure),
            destination: departure.destination.clone(),
            display_time: departure.display_time.clone(),
        }
    }
}

/// What one card displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DepartureCard {
    /// Nothing to show, rendered as [`PLACEHOLDER`].
    Placeholder,

    /// The next catchable departure and the display times of the ones after.
    Lines {
        primary: PrimaryDeparture,
        rest: Vec<String>,
    },
}

impl DepartureCard {
    /// Build the card for one line's departures as seen at `now`.
    ///
    /// Departures are ordered by expected time before filtering. The sort is
    /// stable, so input that is already in time order (as SL delivers it)
    /// keeps its order exactly.
    pub fn build(departures: &[&Departure], now: NaiveDateTime, config: &CardConfig) -> Self {
        if departures.is_empty() {
            return DepartureCard::Placeholder;
        }

        let Some(earliest) = now.checked_add_signed(config.margin()) else {
            return DepartureCard::Placeholder;
        };

        let mut ordered = departures.to_vec();
        ordered.sort_by_key(|d| d.expected_time);

        let mut shown = ordered
            .into_iter()
            .filter(|d| d.expected_time >= earliest)
            .take(config.count);

        let Some(first) = shown.next() else {
            return DepartureCard::Placeholder;
        };

        DepartureCard::Lines {
            primary: PrimaryDeparture::from_departure(first),
            rest: shown.map(|d| d.display_time.clone()).collect(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, DepartureCard::Placeholder)
    }

    pub fn primary(&self) -> Option<&PrimaryDeparture> {
        match self {
            DepartureCard::Placeholder => None,
            DepartureCard::Lines { primary, .. } => Some(primary),
        }
    }

    /// Display times of the departures after the primary one.
    pub fn rest(&self) -> &[String] {
        match self {
            DepartureCard::Placeholder => &[],
            DepartureCard::Lines { rest, .. } => rest,
        }
    }

    /// The trailing list as shown: `"20 min, 30 min"`.
    pub fn rest_summary(&self) -> String {
        self.rest().join(", ")
    }

    /// Number of departures the card displays, primary included.
    pub fn shown_count(&self) -> usize {
        match self {
            DepartureCard::Placeholder => 0,
            DepartureCard::Lines { rest, .. } => 1 + rest.len(),
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::board::fixtures::{metro_in, now};
    use proptest::prelude::*;

    /// Minute offsets from now, unsorted, possibly in the past.
    fn arb_offsets() -> impl Strategy<Value = Vec<i64>> {
        prop::collection::vec(-10i64..90, 0..15)
    }

    fn card_for(offsets: &[i64], config: &CardConfig) -> (Vec<Departure>, DepartureCard) {
        let deps: Vec<Departure> = offsets.iter().copied().map(metro_in).collect();
        let refs: Vec<&Departure> = deps.iter().collect();
        let card = DepartureCard::build(&refs, now(), config);
        (deps, card)
    }

    proptest! {
        /// A card never shows more than the configured count.
        #[test]
        fn never_exceeds_count(offsets in arb_offsets(), count in 0usize..6) {
            let config = CardConfig::new(6, count);
            let (_, card) = card_for(&offsets, &config);
            prop_assert!(card.shown_count() <= count);
        }

        /// Nothing leaving inside the margin is ever shown.
        #[test]
        fn nothing_inside_margin(offsets in arb_offsets(), margin in 0i64..15) {
            let config = CardConfig::new(margin, 4);
            let (_, card) = card_for(&offsets, &config);

            let shown: Vec<&str> = card
                .primary()
                .map(|p| p.display_time.as_str())
                .into_iter()
                .chain(card.rest().iter().map(String::as_str))
                .collect();
            for text in shown {
                let mins: i64 = text.trim_end_matches(" min").parse().unwrap();
                prop_assert!(mins >= margin);
            }
        }

        /// The primary departure is the soonest one outside the margin.
        #[test]
        fn primary_is_soonest_qualifying(offsets in arb_offsets()) {
            let config = CardConfig::default();
            let (_, card) = card_for(&offsets, &config);

            let soonest = offsets.iter().copied().filter(|&m| m >= 6).min();
            match soonest {
                None => prop_assert!(card.is_placeholder()),
                Some(mins) => {
                    let primary = card.primary().unwrap();
                    prop_assert_eq!(&primary.display_time, &format!("{mins} min"));
                }
            }
        }

        /// Shown count is min(count, qualifying).
        #[test]
        fn shows_every_qualifying_up_to_count(offsets in arb_offsets()) {
            let config = CardConfig::default();
            let (_, card) = card_for(&offsets, &config);

            let qualifying = offsets.iter().filter(|&&m| m >= 6).count();
            prop_assert_eq!(card.shown_count(), qualifying.min(config.count));
        }
    }
}
