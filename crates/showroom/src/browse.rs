//! Turning command-line criteria into a catalog query.

use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Serialize;
use showroom_seeker::{Attribute, Catalog, Facet, FilterState, Interval, Metric, Query, SortKey};
use showroom_slider::{ListenerRegistry, RangeSlider, Track};

use crate::cli::{Cli, RangeArg};
use crate::settings::Steps;

/// The extremes and step a range slider offers for one metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RangeControl {
    pub metric: Metric,
    pub bounds: Interval,
    pub step: f64,
}

/// Builds the filter state the flags describe.
///
/// Range flags are taken as typed: the listing's value must lie within
/// `[MIN, MAX]`. An open side reaches to the calibrated extreme.
pub fn filters(cli: &Cli, catalog: &Catalog) -> Result<FilterState> {
    let mut filters = catalog.unconstrained_filters();

    for facet in Facet::ALL {
        let values = cli.selection(facet);
        if !values.is_empty() {
            filters = filters.with_selection(facet, values.iter().cloned());
        }
    }
    if !cli.seating_capacity.is_empty() {
        filters = filters.with_seating(cli.seating_capacity.iter().copied());
    }

    for metric in Metric::ALL {
        let Some(range) = cli.range(metric) else {
            continue;
        };
        let selection = requested(range, catalog.bounds().get(metric))
            .with_context(|| format!("invalid {metric} range"))?;
        tracing::debug!(%metric, min = selection.min(), max = selection.max(), "range selected");
        filters = filters.with_range(metric, selection);
    }

    for attribute in Attribute::ALL {
        if let Some(value) = cli.attribute(attribute) {
            filters = filters.with_attribute(attribute, Some(value));
        }
    }

    Ok(filters)
}

/// Builds the complete query.
///
/// `--sort` wins over the configured default. With neither, the catalog
/// picks: newest first, or closest first when the fallback search ran.
pub fn query(cli: &Cli, catalog: &Catalog, default_sort: Option<SortKey>) -> Result<Query> {
    let query = Query::new(filters(cli, catalog)?)
        .with_search(cli.search.as_deref().unwrap_or_default());
    Ok(match cli.sort.or(default_sort) {
        Some(sort) => query.with_sort(sort),
        None => query,
    })
}

/// Lays out one slider per metric over the calibrated bounds.
pub fn range_controls(catalog: &Catalog, steps: &Steps) -> Result<Vec<RangeControl>> {
    let registry = Arc::new(ListenerRegistry::new());
    let track = Track::new(0.0, 1.0)?;
    Metric::ALL
        .into_iter()
        .map(|metric| -> Result<RangeControl> {
            let slider = RangeSlider::calibrated(
                catalog.bounds(),
                metric,
                steps.get(metric),
                track,
                registry.clone(),
            )
            .with_context(|| format!("cannot build {metric} range control"))?;
            Ok(RangeControl {
                metric,
                bounds: slider.bounds(),
                step: slider.step(),
            })
        })
        .collect()
}

fn requested(range: RangeArg, bounds: Interval) -> Result<Interval> {
    // An open side never crosses the side that was given.
    let min = range
        .min
        .unwrap_or_else(|| range.max.map_or(bounds.min(), |max| bounds.min().min(max)));
    let max = range.max.unwrap_or_else(|| bounds.max().max(min));
    Ok(Interval::new(min, max)?)
}
