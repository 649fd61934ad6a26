//! Numeric identifiers issued by SL.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An SL site identifier.
///
/// A site groups the stop points of one station, e.g. `9204` for
/// Tekniska högskolan (metro, Roslagsbanan and buses).
///
/// # Examples
///
/// ```
/// use board_server::domain::SiteId;
///
/// let site = SiteId(9204);
/// assert_eq!(site.to_string(), "9204");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteId(pub u32);

impl fmt::Debug for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SiteId({})", self.0)
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An SL line identifier (`14` for the red metro line to Mörby centrum).
///
/// This is the numeric line id, not the designation shown on the badge;
/// the two usually coincide but designations may carry letters ("28S").
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(pub u32);

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Direction of travel for a line at a site.
///
/// SL uses `1` and `2`; which is "inbound" depends on the line.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DirectionCode(pub u8);

impl fmt::Debug for DirectionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DirectionCode({})", self.0)
    }
}

impl fmt::Display for DirectionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
