//! Showroom Seeker - query pipeline for a vehicle catalog.
//!
//! Seeker takes an in-memory collection of [`Listing`]s and a user's
//! criteria and produces the ordered subset to display. It provides:
//!
//! - Numeric normalization of display strings (`"₹12.5 Lakh"`, `"45,000 km"`)
//! - Range calibration from the loaded collection
//! - Strict structured filtering with copy-on-write [`FilterState`]
//! - Typo-tolerant fallback search when strict filtering finds nothing
//! - Stable ranking by a fixed set of [`SortKey`]s
//!
//! # Quick Start
//!
//! ```rust
//! use showroom_seeker::{Catalog, Interval, Listing, Metric, SortKey};
//!
//! let catalog = Catalog::new(vec![
//!     Listing { id: "a".into(), brand: "Tata".into(), price: "₹10 Lakh".into(), ..Listing::default() },
//!     Listing { id: "b".into(), brand: "Kia".into(), price: "₹25 Lakh".into(), ..Listing::default() },
//!     Listing { id: "c".into(), brand: "Audi".into(), price: "₹50 Lakh".into(), ..Listing::default() },
//! ]);
//!
//! let filters = catalog
//!     .unconstrained_filters()
//!     .with_range(Metric::Price, Interval::new(1_500_000.0, 5_000_000.0).unwrap());
//!
//! let query = catalog.new_query().with_filters(filters).with_sort(SortKey::PriceHigh);
//! let outcome = catalog.run(&query);
//!
//! let ids: Vec<&str> = outcome.listings.iter().map(|l| l.id.as_str()).collect();
//! assert_eq!(ids, ["c", "b"]);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! exact = listings where (every dimension passes) ∧ (search text ⊇ term)
//! candidates = exact, or fallback_search(listings, term) if exact = ∅ ∧ term ≠ ""
//! result = rank(candidates, sort)
//! ```
//!
//! Within a multi-select dimension values combine with OR; across
//! dimensions everything combines with AND. Ranges are inclusive on both
//! ends. The stages are also exported individually: [`exact_filter`],
//! [`fallback_search`], [`rank`], [`calibrate`] and [`normalize`].

mod calibrate;
mod error;
mod facets;
mod filter;
mod fuzzy;
mod interval;
mod listing;
mod normalize;
mod ordering;
mod query;
mod search;

// Re-export public API
pub use calibrate::{calibrate, RangeBounds};
pub use error::{Result, SeekerError};
pub use facets::Facets;
pub use filter::{exact_filter, Dimension, FilterState};
pub use fuzzy::{fallback_search, FuzzyMatcher};
pub use interval::Interval;
pub use listing::{Attribute, Facet, Listing, Metric, TextField};
pub use normalize::normalize;
pub use ordering::{rank, Dir, SortKey};
pub use query::{evaluate, Catalog, Query, QueryOutcome};
pub use search::{SearchConfig, SearchTerm, DEFAULT_THRESHOLD};
