//! The query pipeline and the catalog it runs over.
//!
//! A [`Query`] bundles the three user inputs: structured filters, a search
//! term and a sort key. [`evaluate`] runs them through the stages:
//!
//! ```text
//! listings ─▶ exact_filter ─┬─ non-empty ────────────────────────┬─▶ rank ─▶ outcome
//!                           └─ empty + term ─▶ fallback_search ──┘
//! ```
//!
//! The fallback stage runs only when the exact stage found nothing and the
//! search term is non-empty, so it never hides a listing that satisfies the
//! exact criteria.

use crate::calibrate::{calibrate, RangeBounds};
use crate::facets::Facets;
use crate::filter::{exact_filter, FilterState};
use crate::fuzzy::fallback_search;
use crate::listing::Listing;
use crate::ordering::{rank, SortKey};
use crate::search::{SearchConfig, SearchTerm};

/// User criteria for one pipeline evaluation.
///
/// Like [`FilterState`], a query is a value: the `with_*` methods return an
/// updated copy.
///
/// # Example
///
/// ```
/// use showroom_seeker::{Catalog, Facet, Listing, Query, SortKey};
///
/// let catalog = Catalog::new(vec![
///     Listing { brand: "Tata".into(), model: "Nexon".into(), year: 2021, ..Listing::default() },
///     Listing { brand: "Kia".into(), model: "Sonet".into(), year: 2023, ..Listing::default() },
/// ]);
///
/// let query = catalog
///     .new_query()
///     .with_search("sonet")
///     .with_sort(SortKey::Newest);
///
/// let outcome = catalog.run(&query);
/// assert_eq!(outcome.listings.len(), 1);
/// assert!(!outcome.used_fallback);
///
/// // A misspelling finds nothing exactly, so the fallback search runs.
/// let outcome = catalog.run(&query.with_search("sonnet"));
/// assert_eq!(outcome.listings[0].model, "Sonet");
/// assert!(outcome.used_fallback);
///
/// let filters = catalog
///     .unconstrained_filters()
///     .with_selection(Facet::Brand, ["Tata"]);
/// let outcome = catalog.run(&Query::new(filters));
/// assert_eq!(outcome.listings[0].model, "Nexon");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    filters: FilterState,
    search: SearchTerm,
    sort: Option<SortKey>,
}

impl Query {
    /// Creates a query with no search term and no explicit sort.
    pub fn new(filters: FilterState) -> Self {
        Query {
            filters,
            search: SearchTerm::default(),
            sort: None,
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn search(&self) -> &SearchTerm {
        &self.search
    }

    /// The sort key the caller asked for, if any.
    ///
    /// Without one, exact results are ranked by [`SortKey::default`] and
    /// fallback results keep their closest-first order.
    pub fn sort(&self) -> Option<SortKey> {
        self.sort
    }

    pub fn with_filters(&self, filters: FilterState) -> Self {
        Query {
            filters,
            ..self.clone()
        }
    }

    pub fn with_search(&self, search: impl Into<SearchTerm>) -> Self {
        Query {
            search: search.into(),
            ..self.clone()
        }
    }

    pub fn with_sort(&self, sort: SortKey) -> Self {
        Query {
            sort: Some(sort),
            ..self.clone()
        }
    }
}

/// The ordered result of one evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOutcome<'a> {
    /// Listings to display, in display order.
    pub listings: Vec<&'a Listing>,
    /// `true` when the fallback search ran; the presentation layer shows a
    /// "closest matches" notice.
    pub used_fallback: bool,
    /// The key the listings were ranked by.
    pub sort: SortKey,
}

impl QueryOutcome<'_> {
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

/// Runs the full pipeline over `listings`.
pub fn evaluate<'a>(
    listings: &'a [Listing],
    query: &Query,
    config: &SearchConfig,
) -> QueryOutcome<'a> {
    debug_assert!(
        query.filters.is_well_formed(),
        "filter state reached the pipeline with an inverted range"
    );

    let exact = exact_filter(listings, &query.filters, &query.search, config);
    let exact_count = exact.len();

    let used_fallback = exact.is_empty() && !query.search.is_empty();
    let candidates = if used_fallback {
        fallback_search(listings, &query.search, config)
    } else {
        exact
    };

    let sort = query.sort.unwrap_or(if used_fallback {
        SortKey::Relevance
    } else {
        SortKey::default()
    });
    let ranked = rank(&candidates, sort);
    tracing::debug!(
        exact = exact_count,
        used_fallback,
        results = ranked.len(),
        %sort,
        "evaluated catalog query"
    );

    QueryOutcome {
        listings: ranked,
        used_fallback,
        sort,
    }
}

/// A loaded, read-only collection of listings.
///
/// Construction calibrates the range bounds and collects facet options
/// once; every later query reuses them.
#[derive(Debug, Clone)]
pub struct Catalog {
    listings: Vec<Listing>,
    bounds: RangeBounds,
    facets: Facets,
    config: SearchConfig,
}

impl Catalog {
    /// Loads a snapshot with the default [`SearchConfig`].
    pub fn new(listings: Vec<Listing>) -> Self {
        Catalog::with_config(listings, SearchConfig::default())
    }

    pub fn with_config(listings: Vec<Listing>, config: SearchConfig) -> Self {
        let bounds = calibrate(&listings);
        let facets = Facets::collect(&listings);
        Catalog {
            listings,
            bounds,
            facets,
            config,
        }
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn bounds(&self) -> &RangeBounds {
        &self.bounds
    }

    pub fn facets(&self) -> &Facets {
        &self.facets
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Returns the filter state that admits every listing.
    pub fn unconstrained_filters(&self) -> FilterState {
        FilterState::unconstrained(&self.bounds)
    }

    /// Returns a query over the unconstrained filters.
    pub fn new_query(&self) -> Query {
        Query::new(self.unconstrained_filters())
    }

    pub fn run(&self, query: &Query) -> QueryOutcome<'_> {
        evaluate(&self.listings, query, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::Interval;
    use crate::listing::{Facet, Metric};

    fn car(id: &str, brand: &str, model: &str, year: u16, price: &str) -> Listing {
        Listing {
            id: id.into(),
            brand: brand.into(),
            model: model.into(),
            year,
            price: price.into(),
            ..Listing::default()
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            car("swift", "Maruti", "Swift", 2019, "₹6 Lakh"),
            car("creta", "Hyundai", "Creta", 2022, "₹14 Lakh"),
            car("cclass", "Mercedes-Benz", "C-Class", 2020, "₹42 Lakh"),
            car("i20", "Hyundai", "i20", 2021, "₹8 Lakh"),
        ])
    }

    fn ids(outcome: &QueryOutcome<'_>) -> Vec<String> {
        outcome.listings.iter().map(|l| l.id.clone()).collect()
    }

    #[test]
    fn default_query_returns_everything_newest_first() {
        let catalog = catalog();
        let outcome = catalog.run(&catalog.new_query());
        assert_eq!(ids(&outcome), ["creta", "i20", "cclass", "swift"]);
        assert!(!outcome.used_fallback);
        assert_eq!(outcome.sort, SortKey::Newest);
    }

    #[test]
    fn exact_hits_skip_fallback() {
        let catalog = catalog();
        let outcome = catalog.run(&catalog.new_query().with_search("hyundai"));
        assert_eq!(ids(&outcome), ["creta", "i20"]);
        assert!(!outcome.used_fallback);
    }

    #[test]
    fn misspelling_falls_back() {
        let catalog = catalog();
        let outcome = catalog.run(&catalog.new_query().with_search("Mersedes"));
        assert_eq!(ids(&outcome), ["cclass"]);
        assert!(outcome.used_fallback);
    }

    #[test]
    fn no_term_no_fallback() {
        let catalog = catalog();
        let filters = catalog
            .unconstrained_filters()
            .with_selection(Facet::Brand, ["Tata"]);
        let outcome = catalog.run(&Query::new(filters));
        assert!(outcome.is_empty());
        assert!(!outcome.used_fallback);
    }

    #[test]
    fn fallback_flag_set_even_when_nothing_found() {
        let catalog = catalog();
        let outcome = catalog.run(&catalog.new_query().with_search("zzzzzz"));
        assert!(outcome.is_empty());
        assert!(outcome.used_fallback);
    }

    #[test]
    fn relevance_keeps_fallback_order() {
        let catalog = Catalog::new(vec![
            car("seltos", "Kia", "Seltos", 2023, ""),
            car("sonet", "Kia", "Sonet", 2020, ""),
        ]);
        let query = catalog
            .new_query()
            .with_search("sonnet")
            .with_sort(SortKey::Relevance);
        let outcome = catalog.run(&query);
        assert!(outcome.used_fallback);
        assert_eq!(ids(&outcome)[0], "sonet");
    }

    #[test]
    fn explicit_sort_reorders_fallback() {
        let catalog = Catalog::new(vec![
            car("old", "Mercedes-Benz", "E-Class", 2015, ""),
            car("new", "Mercedes-Benz", "GLA", 2023, ""),
        ]);
        let query = catalog
            .new_query()
            .with_search("mercedez")
            .with_sort(SortKey::Newest);
        let outcome = catalog.run(&query);
        assert!(outcome.used_fallback);
        assert_eq!(outcome.sort, SortKey::Newest);
        assert_eq!(ids(&outcome), ["new", "old"]);
    }

    #[test]
    fn unsorted_fallback_stays_closest_first() {
        let catalog = Catalog::new(vec![
            car("far", "Mersey", "Roadster", 2023, ""),
            car("close", "Mercedes-Benz", "E-Class", 2016, ""),
        ]);
        let outcome = catalog.run(&catalog.new_query().with_search("mersedes"));
        assert!(outcome.used_fallback);
        assert_eq!(outcome.sort, SortKey::Relevance);
        assert_eq!(ids(&outcome), ["close", "far"]);

        let exact = catalog.run(&catalog.new_query().with_search("mersey"));
        assert!(!exact.used_fallback);
        assert_eq!(exact.sort, SortKey::Newest);
    }

    #[test]
    fn ranges_and_sort_combine() {
        let catalog = catalog();
        let filters = catalog
            .unconstrained_filters()
            .with_range(Metric::Price, Interval::new(700_000.0, 1_500_000.0).unwrap());
        let outcome = catalog.run(&Query::new(filters).with_sort(SortKey::PriceLow));
        assert_eq!(ids(&outcome), ["i20", "creta"]);
    }

    #[test]
    fn query_updates_are_copies() {
        let catalog = catalog();
        let base = catalog.new_query();
        let searched = base.with_search("  Creta ");
        assert!(base.search().is_empty());
        assert_eq!(searched.search().as_str(), "creta");
        assert_eq!(searched.sort(), base.sort());
    }

    #[test]
    fn catalog_exposes_calibration() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.bounds().get(Metric::Year), Interval::new(2019.0, 2022.0).unwrap());
        assert_eq!(catalog.facets().brands.len(), 3);
    }
}
