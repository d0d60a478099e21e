//! The vehicle record and the dimensions it can be filtered on.
//!
//! A [`Listing`] mirrors what the inventory feed delivers: numeric figures
//! stay in their display form and are normalized on every read, categorical
//! fields are plain strings, and anything the feed omits deserializes to an
//! empty value.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SeekerError};
use crate::interval::Interval;
use crate::normalize::normalize;

/// One vehicle in the catalog.
///
/// Listings are read-only once loaded. Numeric values such as
/// [`metric`](Self::metric) are derived on every call and never cached on
/// the record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Listing {
    pub id: String,
    pub brand: String,
    pub model: String,
    pub variant: String,
    pub year: u16,
    /// Display price, e.g. `"₹12.5 Lakh"`.
    pub price: String,
    /// Display odometer reading, e.g. `"45,000 km"`.
    pub mileage: String,
    /// Display engine displacement, e.g. `"1,498 cc"`.
    pub engine: String,
    /// Display power figure, e.g. `"118 bhp"`.
    pub horsepower: String,
    pub fuel_type: String,
    pub transmission: String,
    pub ownership: String,
    pub body_type: String,
    pub drive_type: String,
    pub seating_capacity: Option<u8>,
    pub color_exterior: String,
    pub color_interior: String,
    pub condition: String,
    pub features: Vec<String>,
}

impl Listing {
    /// Returns the normalized value of a range dimension.
    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Price => normalize(&self.price),
            Metric::Year => f64::from(self.year),
            Metric::Mileage => normalize(&self.mileage),
            Metric::Engine => normalize(&self.engine),
            Metric::Horsepower => normalize(&self.horsepower),
        }
    }

    /// Returns the single value a listing holds for a multi-select dimension.
    ///
    /// [`Facet::Feature`] is the one set-valued dimension; for it this
    /// returns `None` and callers should look at [`features`](Self::features).
    pub fn facet(&self, facet: Facet) -> Option<&str> {
        match facet {
            Facet::Brand => Some(&self.brand),
            Facet::Model => Some(&self.model),
            Facet::FuelType => Some(&self.fuel_type),
            Facet::Transmission => Some(&self.transmission),
            Facet::Ownership => Some(&self.ownership),
            Facet::BodyType => Some(&self.body_type),
            Facet::DriveType => Some(&self.drive_type),
            Facet::Feature => None,
        }
    }

    /// Returns the value of an optional single-choice attribute.
    pub fn attribute(&self, attribute: Attribute) -> &str {
        match attribute {
            Attribute::ColorExterior => &self.color_exterior,
            Attribute::ColorInterior => &self.color_interior,
            Attribute::Condition => &self.condition,
        }
    }

    /// Returns a field as text for search matching.
    pub fn text(&self, field: TextField) -> Cow<'_, str> {
        match field {
            TextField::Brand => Cow::Borrowed(&self.brand),
            TextField::Model => Cow::Borrowed(&self.model),
            TextField::Variant => Cow::Borrowed(&self.variant),
            TextField::Year if self.year == 0 => Cow::Borrowed(""),
            TextField::Year => Cow::Owned(self.year.to_string()),
            TextField::FuelType => Cow::Borrowed(&self.fuel_type),
            TextField::Transmission => Cow::Borrowed(&self.transmission),
            TextField::BodyType => Cow::Borrowed(&self.body_type),
            TextField::DriveType => Cow::Borrowed(&self.drive_type),
            TextField::ColorExterior => Cow::Borrowed(&self.color_exterior),
            TextField::ColorInterior => Cow::Borrowed(&self.color_interior),
            TextField::Condition => Cow::Borrowed(&self.condition),
        }
    }
}

/// A range dimension: a numeric figure filtered by an inclusive interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    Price,
    Year,
    Mileage,
    Engine,
    Horsepower,
}

impl Metric {
    /// Every range dimension, in display order.
    pub const ALL: [Metric; 5] = [
        Metric::Price,
        Metric::Year,
        Metric::Mileage,
        Metric::Engine,
        Metric::Horsepower,
    ];

    pub(crate) const COUNT: usize = Metric::ALL.len();

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Bounds used when there is no listing to calibrate from.
    ///
    /// | Metric | Fallback |
    /// |--------|----------|
    /// | price | 0 – 10,000,000 |
    /// | year | 2000 – 2025 |
    /// | mileage | 0 – 200,000 |
    /// | engine | 0 – 5,000 |
    /// | horsepower | 0 – 1,000 |
    pub fn fallback_interval(self) -> Interval {
        let (min, max) = match self {
            Metric::Price => (0.0, 10_000_000.0),
            Metric::Year => (2000.0, 2025.0),
            Metric::Mileage => (0.0, 200_000.0),
            Metric::Engine => (0.0, 5_000.0),
            Metric::Horsepower => (0.0, 1_000.0),
        };
        Interval::from_ordered(min, max)
    }

    /// Returns the display name of this metric.
    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Price => "price",
            Metric::Year => "year",
            Metric::Mileage => "mileage",
            Metric::Engine => "engine",
            Metric::Horsepower => "horsepower",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A multi-select dimension over string values.
///
/// An empty selection admits every listing; otherwise a listing must hold
/// one of the selected values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Facet {
    Brand,
    Model,
    FuelType,
    Transmission,
    Ownership,
    BodyType,
    DriveType,
    Feature,
}

impl Facet {
    pub const ALL: [Facet; 8] = [
        Facet::Brand,
        Facet::Model,
        Facet::FuelType,
        Facet::Transmission,
        Facet::Ownership,
        Facet::BodyType,
        Facet::DriveType,
        Facet::Feature,
    ];

    pub(crate) const COUNT: usize = Facet::ALL.len();

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Facet::Brand => "brand",
            Facet::Model => "model",
            Facet::FuelType => "fuelType",
            Facet::Transmission => "transmission",
            Facet::Ownership => "ownership",
            Facet::BodyType => "bodyType",
            Facet::DriveType => "driveType",
            Facet::Feature => "features",
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An optional single-choice dimension. `None` leaves it unconstrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Attribute {
    ColorExterior,
    ColorInterior,
    Condition,
}

impl Attribute {
    pub const ALL: [Attribute; 3] = [
        Attribute::ColorExterior,
        Attribute::ColorInterior,
        Attribute::Condition,
    ];

    pub(crate) const COUNT: usize = Attribute::ALL.len();

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Attribute::ColorExterior => "colorExterior",
            Attribute::ColorInterior => "colorInterior",
            Attribute::Condition => "condition",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A listing field that free-text search can look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextField {
    Brand,
    Model,
    Variant,
    Year,
    FuelType,
    Transmission,
    BodyType,
    DriveType,
    ColorExterior,
    ColorInterior,
    Condition,
}

impl TextField {
    pub fn as_str(self) -> &'static str {
        match self {
            TextField::Brand => "brand",
            TextField::Model => "model",
            TextField::Variant => "variant",
            TextField::Year => "year",
            TextField::FuelType => "fuelType",
            TextField::Transmission => "transmission",
            TextField::BodyType => "bodyType",
            TextField::DriveType => "driveType",
            TextField::ColorExterior => "colorExterior",
            TextField::ColorInterior => "colorInterior",
            TextField::Condition => "condition",
        }
    }
}

impl fmt::Display for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TextField {
    type Err = SeekerError;

    fn from_str(s: &str) -> Result<Self> {
        let field = match s {
            "brand" => TextField::Brand,
            "model" => TextField::Model,
            "variant" => TextField::Variant,
            "year" => TextField::Year,
            "fuelType" => TextField::FuelType,
            "transmission" => TextField::Transmission,
            "bodyType" => TextField::BodyType,
            "driveType" => TextField::DriveType,
            "colorExterior" => TextField::ColorExterior,
            "colorInterior" => TextField::ColorInterior,
            "condition" => TextField::Condition,
            other => return Err(SeekerError::UnknownField(other.to_string())),
        };
        Ok(field)
    }
}
