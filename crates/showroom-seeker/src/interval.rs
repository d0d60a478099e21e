//! Inclusive numeric intervals for range dimensions.

use serde::Serialize;

use crate::error::{Result, SeekerError};

/// An inclusive `[min, max]` interval with `min <= max`.
///
/// The ordering invariant is checked at construction, so any `Interval`
/// held by a filter is well formed.
///
/// ```
/// use showroom_seeker::Interval;
///
/// let price = Interval::new(1_500_000.0, 5_000_000.0).unwrap();
/// assert!(price.contains(2_500_000.0));
/// assert!(price.contains(5_000_000.0));
/// assert!(!price.contains(1_000_000.0));
///
/// assert!(Interval::new(10.0, 5.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Interval {
    min: f64,
    max: f64,
}

impl Interval {
    /// Creates an interval, rejecting non-finite or inverted bounds.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() {
            return Err(SeekerError::NonFiniteBound(min));
        }
        if !max.is_finite() {
            return Err(SeekerError::NonFiniteBound(max));
        }
        if min > max {
            return Err(SeekerError::InvertedInterval { min, max });
        }
        Ok(Interval { min, max })
    }

    /// Creates a single-value interval.
    pub fn point(value: f64) -> Result<Self> {
        Interval::new(value, value)
    }

    /// Builds an interval from bounds the caller has already ordered.
    pub(crate) fn from_ordered(min: f64, max: f64) -> Self {
        debug_assert!(min <= max, "inverted interval [{min}, {max}]");
        Interval { min, max }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Returns `true` if `value` lies within the interval, ends included.
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Returns `true` if `other` lies entirely within this interval.
    pub fn covers(&self, other: &Interval) -> bool {
        self.min <= other.min && other.max <= self.max
    }

    /// Clamps `value` into the interval.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Returns the smallest interval holding both this one and `value`.
    pub fn extend(self, value: f64) -> Self {
        Interval {
            min: self.min.min(value),
            max: self.max.max(value),
        }
    }

    /// Returns a copy with the lower end moved to `value`, held at or below
    /// the upper end. Non-finite values leave the interval unchanged.
    pub fn with_min(self, value: f64) -> Self {
        if !value.is_finite() {
            return self;
        }
        Interval {
            min: value.min(self.max),
            max: self.max,
        }
    }

    /// Returns a copy with the upper end moved to `value`, held at or above
    /// the lower end. Non-finite values leave the interval unchanged.
    pub fn with_max(self, value: f64) -> Self {
        if !value.is_finite() {
            return self;
        }
        Interval {
            min: self.min,
            max: value.max(self.min),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inclusive_on_both_ends() {
        let interval = Interval::new(2.0, 4.0).unwrap();
        assert!(interval.contains(2.0));
        assert!(interval.contains(4.0));
        assert!(!interval.contains(1.999));
        assert!(!interval.contains(4.001));
    }

    #[test]
    fn rejects_inverted_bounds() {
        assert_eq!(
            Interval::new(5.0, 1.0),
            Err(SeekerError::InvertedInterval { min: 5.0, max: 1.0 })
        );
    }

    #[test]
    fn rejects_non_finite_bounds() {
        assert!(matches!(
            Interval::new(f64::NAN, 1.0),
            Err(SeekerError::NonFiniteBound(_))
        ));
        assert_eq!(
            Interval::new(0.0, f64::INFINITY),
            Err(SeekerError::NonFiniteBound(f64::INFINITY))
        );
    }

    #[test]
    fn point_interval() {
        let point = Interval::point(3.0).unwrap();
        assert_eq!(point.width(), 0.0);
        assert!(point.contains(3.0));
    }

    #[test]
    fn clamp_and_extend() {
        let interval = Interval::new(0.0, 10.0).unwrap();
        assert_eq!(interval.clamp(-5.0), 0.0);
        assert_eq!(interval.clamp(12.0), 10.0);

        let wider = interval.extend(15.0).extend(-2.0);
        assert_eq!((wider.min(), wider.max()), (-2.0, 15.0));
        assert!(wider.covers(&interval));
        assert!(!interval.covers(&wider));
    }

    #[test]
    fn moving_an_end_never_inverts() {
        let interval = Interval::new(2.0, 8.0).unwrap();
        assert_eq!(interval.with_min(5.0), Interval::new(5.0, 8.0).unwrap());
        assert_eq!(interval.with_min(9.0), Interval::point(8.0).unwrap());
        assert_eq!(interval.with_max(1.0), Interval::point(2.0).unwrap());
        assert_eq!(interval.with_max(f64::NAN), interval);
    }
}
