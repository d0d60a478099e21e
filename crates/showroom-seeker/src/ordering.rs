//! Sort keys and the ranking stage.
//!
//! Each [`SortKey`] maps to exactly one comparator over a field and a
//! [`Dir`]. [`rank`] applies it with a stable sort, so listings that
//! compare equal keep the order they arrived in.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use deunicode::deunicode;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SeekerError};
use crate::listing::{Listing, Metric};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Applies this direction to an ordering.
    ///
    /// For `Asc`, returns the ordering unchanged.
    /// For `Desc`, reverses the ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }
}

/// How the result list is ordered.
///
/// | Key | Field | Direction |
/// |-----|-------|-----------|
/// | `relevance` | none, input order kept | - |
/// | `newest` / `oldest` | year | desc / asc |
/// | `priceHigh` / `priceLow` | normalized price | desc / asc |
/// | `brandAZ` / `brandZA` | brand, case and accent folded | asc / desc |
///
/// `relevance` is what lets the closest-first order of the fallback search
/// reach the caller unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortKey {
    #[serde(rename = "relevance")]
    Relevance,
    #[default]
    #[serde(rename = "newest")]
    Newest,
    #[serde(rename = "oldest")]
    Oldest,
    #[serde(rename = "priceHigh")]
    PriceHigh,
    #[serde(rename = "priceLow")]
    PriceLow,
    #[serde(rename = "brandAZ")]
    BrandAZ,
    #[serde(rename = "brandZA")]
    BrandZA,
}

impl SortKey {
    pub const ALL: [SortKey; 7] = [
        SortKey::Relevance,
        SortKey::Newest,
        SortKey::Oldest,
        SortKey::PriceHigh,
        SortKey::PriceLow,
        SortKey::BrandAZ,
        SortKey::BrandZA,
    ];

    pub fn dir(self) -> Dir {
        match self {
            SortKey::Relevance | SortKey::Oldest | SortKey::PriceLow | SortKey::BrandAZ => Dir::Asc,
            SortKey::Newest | SortKey::PriceHigh | SortKey::BrandZA => Dir::Desc,
        }
    }

    /// Compares two listings under this key.
    pub fn compare(self, a: &Listing, b: &Listing) -> Ordering {
        let base = match self {
            SortKey::Relevance => Ordering::Equal,
            SortKey::Newest | SortKey::Oldest => a.year.cmp(&b.year),
            SortKey::PriceHigh | SortKey::PriceLow => a
                .metric(Metric::Price)
                .total_cmp(&b.metric(Metric::Price)),
            SortKey::BrandAZ | SortKey::BrandZA => {
                collation_key(&a.brand).cmp(&collation_key(&b.brand))
            }
        };
        self.dir().apply(base)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::PriceHigh => "priceHigh",
            SortKey::PriceLow => "priceLow",
            SortKey::BrandAZ => "brandAZ",
            SortKey::BrandZA => "brandZA",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = SeekerError;

    fn from_str(s: &str) -> Result<Self> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| SeekerError::UnknownSortKey(s.to_string()))
    }
}

/// Folds case and accents so "Škoda" sorts beside "Skoda".
fn collation_key(text: &str) -> String {
    deunicode(text).to_lowercase()
}

/// The ranking stage.
///
/// Returns a new vector ordered by `key`; the input is left as is. The sort
/// is stable for every key.
pub fn rank<'a>(listings: &[&'a Listing], key: SortKey) -> Vec<&'a Listing> {
    let mut ranked = listings.to_vec();
    if key != SortKey::Relevance {
        ranked.sort_by(|a, b| key.compare(a, b));
    }
    ranked
}
