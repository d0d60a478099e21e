//! Deriving range bounds from the loaded collection.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::interval::Interval;
use crate::listing::{Listing, Metric};

/// The observed `[min, max]` of every range dimension.
///
/// Produced by [`calibrate`]; seeds the unconstrained
/// [`FilterState`](crate::FilterState) and the extremes of each range
/// control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeBounds {
    intervals: [Interval; Metric::COUNT],
}

impl RangeBounds {
    /// The bounds used when there is nothing to calibrate from.
    ///
    /// See [`Metric::fallback_interval`].
    pub fn fallback() -> Self {
        RangeBounds {
            intervals: Metric::ALL.map(Metric::fallback_interval),
        }
    }

    pub fn get(&self, metric: Metric) -> Interval {
        self.intervals[metric.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Metric, Interval)> + '_ {
        Metric::ALL.into_iter().map(|metric| (metric, self.get(metric)))
    }
}

impl Default for RangeBounds {
    fn default() -> Self {
        RangeBounds::fallback()
    }
}

impl Serialize for RangeBounds {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Metric::COUNT))?;
        for (metric, interval) in self.iter() {
            map.serialize_entry(metric.as_str(), &interval)?;
        }
        map.end()
    }
}

/// Scans `listings` once and returns the observed bounds per dimension.
///
/// Every listing takes part, including those whose figures normalize to
/// zero, so the resulting bounds admit the whole collection. An empty
/// collection yields [`RangeBounds::fallback`].
///
/// Run this once per loaded collection; [`Catalog`](crate::Catalog) does so
/// on construction.
pub fn calibrate(listings: &[Listing]) -> RangeBounds {
    let Some((first, rest)) = listings.split_first() else {
        tracing::debug!("no listings to calibrate, using fallback bounds");
        return RangeBounds::fallback();
    };

    let mut intervals = Metric::ALL.map(|metric| {
        let value = first.metric(metric);
        Interval::from_ordered(value, value)
    });
    for listing in rest {
        for metric in Metric::ALL {
            let slot = &mut intervals[metric.index()];
            *slot = slot.extend(listing.metric(metric));
        }
    }

    let bounds = RangeBounds { intervals };
    tracing::debug!(listings = listings.len(), ?bounds, "calibrated range bounds");
    bounds
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priced(price: &str, year: u16, mileage: &str) -> Listing {
        Listing {
            price: price.into(),
            year,
            mileage: mileage.into(),
            ..Listing::default()
        }
    }

    #[test]
    fn empty_collection_uses_fallback() {
        assert_eq!(calibrate(&[]), RangeBounds::fallback());
        assert_eq!(calibrate(&[]).get(Metric::Year), Metric::Year.fallback_interval());
    }

    #[test]
    fn observed_extremes() {
        let listings = vec![
            priced("₹6.5 Lakh", 2019, "52,000 km"),
            priced("₹14 Lakh", 2023, "8,500 km"),
            priced("₹9 Lakh", 2021, "31,000 km"),
        ];
        let bounds = calibrate(&listings);

        assert_eq!(bounds.get(Metric::Price), Interval::new(650_000.0, 1_400_000.0).unwrap());
        assert_eq!(bounds.get(Metric::Year), Interval::new(2019.0, 2023.0).unwrap());
        assert_eq!(bounds.get(Metric::Mileage), Interval::new(8_500.0, 52_000.0).unwrap());
    }

    #[test]
    fn missing_figures_pull_minimum_to_zero() {
        let listings = vec![priced("₹6.5 Lakh", 2019, ""), priced("", 2020, "12,000 km")];
        let bounds = calibrate(&listings);

        assert_eq!(bounds.get(Metric::Price).min(), 0.0);
        assert_eq!(bounds.get(Metric::Mileage), Interval::new(0.0, 12_000.0).unwrap());
    }

    #[test]
    fn single_listing_gives_point_bounds() {
        let bounds = calibrate(&[priced("₹5 Lakh", 2020, "10,000 km")]);
        assert_eq!(bounds.get(Metric::Price).width(), 0.0);
    }

    #[test]
    fn calibration_is_idempotent() {
        let listings = vec![priced("₹6.5 Lakh", 2019, "1 km"), priced("₹7 Lakh", 2018, "2 km")];
        assert_eq!(calibrate(&listings), calibrate(&listings));
    }

    #[test]
    fn serializes_as_named_map() {
        let json = serde_json::to_value(RangeBounds::fallback()).unwrap();
        assert_eq!(json["year"]["min"], 2000.0);
        assert_eq!(json["horsepower"]["max"], 1000.0);
    }
}
