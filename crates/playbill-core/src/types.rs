//! # Domain Types
//!
//! Input and output records of the statement engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  INPUT                                 OUTPUT                           │
//! │  ┌─────────────────┐                   ┌──────────────────────────┐    │
//! │  │    Invoice      │                   │      StatementData       │    │
//! │  │  customer       │ ──── compute ───► │  customer                │    │
//! │  │  performances[] │                   │  performances[] enriched │    │
//! │  └────────┬────────┘                   │  total_amount            │    │
//! │           │                            │  total_volume_credits    │    │
//! │  ┌────────▼────────┐                   └──────────────────────────┘    │
//! │  │  Performance    │   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  play_id ───────┼──►│  PlayCatalog    │──►│      Play       │       │
//! │  │  audience       │   │  id → Play      │   │  name, genre    │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Names
//! Fixtures use camelCase keys (`playID`, `type`, `volumeCredits`), so the
//! serde attributes here pin those names explicitly.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Genre
// =============================================================================

/// Genre tag of a play.
///
/// The tag is open-ended on the wire. Unrecognized tags are kept verbatim in
/// [`Genre::Other`] so the amount calculator can report them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Genre {
    Tragedy,
    Comedy,
    Other(String),
}

impl Genre {
    /// Returns the wire tag (`"tragedy"`, `"comedy"`, or the original tag).
    pub fn as_str(&self) -> &str {
        match self {
            Genre::Tragedy => "tragedy",
            Genre::Comedy => "comedy",
            Genre::Other(tag) => tag,
        }
    }
}

impl From<String> for Genre {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "tragedy" => Genre::Tragedy,
            "comedy" => Genre::Comedy,
            _ => Genre::Other(tag),
        }
    }
}

impl From<&str> for Genre {
    fn from(tag: &str) -> Self {
        Genre::from(tag.to_string())
    }
}

impl From<Genre> for String {
    fn from(genre: Genre) -> Self {
        match genre {
            Genre::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Play
// =============================================================================

/// Catalog entry describing a play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    /// Display name printed on the statement.
    pub name: String,

    /// Genre tag. Serialized as `type`.
    #[serde(rename = "type")]
    pub genre: Genre,
}

impl Play {
    pub fn new(name: impl Into<String>, genre: impl Into<Genre>) -> Self {
        Play {
            name: name.into(),
            genre: genre.into(),
        }
    }
}

/// Play catalog keyed by `playID`.
pub type PlayCatalog = HashMap<String, Play>;

// =============================================================================
// Performance
// =============================================================================

/// One invoice line: a play performed for an audience.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
    /// Foreign key into the [`PlayCatalog`].
    #[serde(rename = "playID")]
    pub play_id: String,

    /// Seat count.
    pub audience: u32,
}

impl Performance {
    pub fn new(play_id: impl Into<String>, audience: u32) -> Self {
        Performance {
            play_id: play_id.into(),
            audience,
        }
    }
}

// =============================================================================
// Invoice
// =============================================================================

/// A customer's billing request. Performance order is preserved in output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub customer: String,
    pub performances: Vec<Performance>,
}

impl Invoice {
    pub fn new(customer: impl Into<String>, performances: Vec<Performance>) -> Self {
        Invoice {
            customer: customer.into(),
            performances,
        }
    }
}

// =============================================================================
// Enriched Performance
// =============================================================================

/// A performance with its resolved play and computed charges.
///
/// Carries the original `play_id`/`audience` unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedPerformance {
    #[serde(rename = "playID")]
    pub play_id: String,
    pub audience: u32,
    pub play: Play,
    /// Charge in cents.
    pub amount: Money,
    pub volume_credits: u64,
}

// =============================================================================
// Statement Data
// =============================================================================

/// Output of the statement engine and sole input to the renderers.
///
/// Fields are read-only so the totals always match the performance list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementData {
    pub(crate) customer: String,
    pub(crate) performances: Vec<EnrichedPerformance>,
    pub(crate) total_amount: Money,
    pub(crate) total_volume_credits: u64,
}

impl StatementData {
    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn performances(&self) -> &[EnrichedPerformance] {
        &self.performances
    }

    pub fn total_amount(&self) -> Money {
        self.total_amount
    }

    pub fn total_volume_credits(&self) -> u64 {
        self.total_volume_credits
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_from_tag() {
        assert_eq!(Genre::from("tragedy"), Genre::Tragedy);
        assert_eq!(Genre::from("comedy"), Genre::Comedy);
        assert_eq!(Genre::from("history"), Genre::Other("history".to_string()));
        // Tags are case-sensitive, same as the fixtures.
        assert_eq!(Genre::from("Comedy"), Genre::Other("Comedy".to_string()));
    }

    #[test]
    fn test_genre_tag_survives_serde() {
        let play: Play = serde_json::from_str(r#"{"name":"Henry V","type":"history"}"#).unwrap();
        assert_eq!(play.genre.as_str(), "history");

        let json = serde_json::to_string(&play).unwrap();
        assert_eq!(json, r#"{"name":"Henry V","type":"history"}"#);
    }

    #[test]
    fn test_invoice_fixture_shape() {
        let invoice: Invoice = serde_json::from_str(
            r#"{"customer":"BigCo","performances":[{"playID":"hamlet","audience":55}]}"#,
        )
        .unwrap();

        assert_eq!(invoice.customer, "BigCo");
        assert_eq!(invoice.performances, vec![Performance::new("hamlet", 55)]);
    }

    #[test]
    fn test_negative_audience_rejected_at_parse() {
        let result: Result<Performance, _> =
            serde_json::from_str(r#"{"playID":"hamlet","audience":-1}"#);
        assert!(result.is_err());
    }
}
