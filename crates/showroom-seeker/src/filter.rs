//! Structured filter state and the exact filter stage.
//!
//! [`FilterState`] holds one value per filter dimension:
//!
//! | Kind | Dimensions | Passes when |
//! |------|------------|-------------|
//! | Multi-select | [`Facet`], seating capacity | selection is empty, or holds the listing's value |
//! | Range | [`Metric`] | normalized value lies in the interval, ends included |
//! | Optional | [`Attribute`] | unset, or equal to the listing's value |
//!
//! A listing survives [`exact_filter`] only if every dimension passes and,
//! when a search term is present, its joined search text contains the term.
//!
//! Filter states are values. Every `with_*` method returns a new state and
//! leaves the receiver untouched, so a reader holding a state never sees a
//! half-applied change.

use std::collections::BTreeSet;

use crate::calibrate::RangeBounds;
use crate::interval::Interval;
use crate::listing::{Attribute, Facet, Listing, Metric};
use crate::search::{SearchConfig, SearchTerm};

/// One filter dimension, used to address a single criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Facet(Facet),
    SeatingCapacity,
    Range(Metric),
    Attribute(Attribute),
}

impl Dimension {
    /// Returns every dimension a [`FilterState`] holds.
    pub fn all() -> impl Iterator<Item = Dimension> {
        Facet::ALL
            .into_iter()
            .map(Dimension::Facet)
            .chain(std::iter::once(Dimension::SeatingCapacity))
            .chain(Metric::ALL.into_iter().map(Dimension::Range))
            .chain(Attribute::ALL.into_iter().map(Dimension::Attribute))
    }
}

/// The complete set of user-selected criteria at one point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    selections: [BTreeSet<String>; Facet::COUNT],
    seating: BTreeSet<u8>,
    ranges: [Interval; Metric::COUNT],
    attributes: [Option<String>; Attribute::COUNT],
}

impl FilterState {
    /// Creates a state that admits every listing within `bounds`.
    pub fn unconstrained(bounds: &RangeBounds) -> Self {
        FilterState {
            selections: Default::default(),
            seating: BTreeSet::new(),
            ranges: Metric::ALL.map(|metric| bounds.get(metric)),
            attributes: Default::default(),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn selection(&self, facet: Facet) -> &BTreeSet<String> {
        &self.selections[facet.index()]
    }

    pub fn seating(&self) -> &BTreeSet<u8> {
        &self.seating
    }

    pub fn range(&self, metric: Metric) -> Interval {
        self.ranges[metric.index()]
    }

    pub fn attribute(&self, attribute: Attribute) -> Option<&str> {
        self.attributes[attribute.index()].as_deref()
    }

    // ========================================================================
    // Copy-on-write updates
    // ========================================================================

    /// Returns a state with `facet` set to exactly `values`.
    pub fn with_selection<I, S>(&self, facet: Facet, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut next = self.clone();
        next.selections[facet.index()] = values.into_iter().map(Into::into).collect();
        next
    }

    /// Returns a state with `value` added to or removed from `facet`.
    ///
    /// This is the checkbox interaction of a multi-select control.
    pub fn toggled(&self, facet: Facet, value: &str) -> Self {
        let mut next = self.clone();
        let selection = &mut next.selections[facet.index()];
        if !selection.remove(value) {
            selection.insert(value.to_string());
        }
        next
    }

    pub fn with_seating<I>(&self, capacities: I) -> Self
    where
        I: IntoIterator<Item = u8>,
    {
        let mut next = self.clone();
        next.seating = capacities.into_iter().collect();
        next
    }

    pub fn with_range(&self, metric: Metric, interval: Interval) -> Self {
        let mut next = self.clone();
        next.ranges[metric.index()] = interval;
        next
    }

    pub fn with_attribute(&self, attribute: Attribute, value: Option<&str>) -> Self {
        let mut next = self.clone();
        next.attributes[attribute.index()] = value.map(str::to_string);
        next
    }

    /// Returns a state with one dimension put back to unconstrained.
    pub fn relaxed(&self, dimension: Dimension, bounds: &RangeBounds) -> Self {
        match dimension {
            Dimension::Facet(facet) => self.with_selection(facet, std::iter::empty::<String>()),
            Dimension::SeatingCapacity => self.with_seating(std::iter::empty()),
            Dimension::Range(metric) => self.with_range(metric, bounds.get(metric)),
            Dimension::Attribute(attribute) => self.with_attribute(attribute, None),
        }
    }

    /// Returns the unconstrained state for `bounds`.
    pub fn reset(&self, bounds: &RangeBounds) -> Self {
        FilterState::unconstrained(bounds)
    }

    // ========================================================================
    // Bookkeeping
    // ========================================================================

    /// Returns `true` if `dimension` currently narrows the result.
    ///
    /// A range counts as active when it no longer covers the calibrated
    /// bounds.
    pub fn is_active(&self, dimension: Dimension, bounds: &RangeBounds) -> bool {
        match dimension {
            Dimension::Facet(facet) => !self.selection(facet).is_empty(),
            Dimension::SeatingCapacity => !self.seating.is_empty(),
            Dimension::Range(metric) => !self.range(metric).covers(&bounds.get(metric)),
            Dimension::Attribute(attribute) => self.attribute(attribute).is_some(),
        }
    }

    /// Counts the dimensions that currently narrow the result.
    pub fn active_count(&self, bounds: &RangeBounds) -> usize {
        Dimension::all()
            .filter(|dimension| self.is_active(*dimension, bounds))
            .count()
    }

    pub fn is_unconstrained(&self, bounds: &RangeBounds) -> bool {
        self.active_count(bounds) == 0
    }

    /// Returns `true` if every range satisfies `min <= max`.
    ///
    /// Always holds for states built through this API.
    pub fn is_well_formed(&self) -> bool {
        self.ranges.iter().all(|range| range.min() <= range.max())
    }

    // ========================================================================
    // Evaluation
    // ========================================================================

    /// Tests a single dimension against a listing.
    pub fn passes(&self, listing: &Listing, dimension: Dimension) -> bool {
        match dimension {
            Dimension::Facet(Facet::Feature) => {
                let selected = self.selection(Facet::Feature);
                selected.is_empty() || listing.features.iter().any(|f| selected.contains(f))
            }
            Dimension::Facet(facet) => {
                let selected = self.selection(facet);
                selected.is_empty()
                    || listing
                        .facet(facet)
                        .is_some_and(|value| selected.contains(value))
            }
            Dimension::SeatingCapacity => {
                self.seating.is_empty()
                    || listing
                        .seating_capacity
                        .is_some_and(|seats| self.seating.contains(&seats))
            }
            Dimension::Range(metric) => self.range(metric).contains(listing.metric(metric)),
            Dimension::Attribute(attribute) => self
                .attribute(attribute)
                .map_or(true, |wanted| listing.attribute(attribute) == wanted),
        }
    }

    /// Tests every dimension against a listing.
    pub fn matches(&self, listing: &Listing) -> bool {
        Dimension::all().all(|dimension| self.passes(listing, dimension))
    }
}

/// The exact filter stage.
///
/// Returns the listings that pass every dimension of `state` and, when
/// `term` is non-empty, whose exact-search text contains `term` as a
/// literal substring. Input order is preserved.
pub fn exact_filter<'a>(
    listings: &'a [Listing],
    state: &FilterState,
    term: &SearchTerm,
    config: &SearchConfig,
) -> Vec<&'a Listing> {
    listings
        .iter()
        .filter(|listing| state.matches(listing) && config.contains_term(listing, term))
        .collect()
}
