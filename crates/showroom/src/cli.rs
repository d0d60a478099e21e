//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use showroom_seeker::{normalize, Attribute, Facet, Metric, SortKey};

/// Browse a vehicle inventory: filter, search and sort listings.
///
/// Repeat a multi-select flag to accept several values, e.g.
/// `--brand Kia --brand Tata`. Ranges take `MIN..MAX` with either side
/// optional, and accept display units: `--price "5 lakh..12 lakh"`.
#[derive(Debug, Parser)]
#[command(name = "showroom", version)]
pub struct Cli {
    /// Inventory file (.json, .yaml or .yml)
    #[arg(value_name = "INVENTORY")]
    pub inventory: PathBuf,

    /// Free-text search; falls back to closest matches when nothing matches exactly
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort order: relevance, newest, oldest, priceHigh, priceLow, brandAZ, brandZA
    #[arg(long)]
    pub sort: Option<SortKey>,

    #[arg(long, value_name = "BRAND")]
    pub brand: Vec<String>,

    #[arg(long, value_name = "MODEL")]
    pub model: Vec<String>,

    #[arg(long = "fuel", value_name = "FUEL")]
    pub fuel_type: Vec<String>,

    #[arg(long, value_name = "TRANSMISSION")]
    pub transmission: Vec<String>,

    #[arg(long, value_name = "OWNERSHIP")]
    pub ownership: Vec<String>,

    #[arg(long = "body", value_name = "BODY")]
    pub body_type: Vec<String>,

    #[arg(long = "drive", value_name = "DRIVE")]
    pub drive_type: Vec<String>,

    /// Match listings carrying any of these features
    #[arg(long, value_name = "FEATURE")]
    pub feature: Vec<String>,

    #[arg(long = "seats", value_name = "SEATS")]
    pub seating_capacity: Vec<u8>,

    #[arg(long, value_parser = parse_range, value_name = "MIN..MAX")]
    pub price: Option<RangeArg>,

    #[arg(long, value_parser = parse_range, value_name = "MIN..MAX")]
    pub year: Option<RangeArg>,

    #[arg(long, value_parser = parse_range, value_name = "MIN..MAX")]
    pub mileage: Option<RangeArg>,

    #[arg(long, value_parser = parse_range, value_name = "MIN..MAX")]
    pub engine: Option<RangeArg>,

    #[arg(long, value_parser = parse_range, value_name = "MIN..MAX")]
    pub horsepower: Option<RangeArg>,

    #[arg(long, value_name = "COLOR")]
    pub color_exterior: Option<String>,

    #[arg(long, value_name = "COLOR")]
    pub color_interior: Option<String>,

    #[arg(long, value_name = "CONDITION")]
    pub condition: Option<String>,

    /// Show at most this many listings
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Print the available filter options and ranges instead of listings
    #[arg(long)]
    pub facets: bool,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Configuration file (defaults to ./showroom.toml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn selection(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::Brand => &self.brand,
            Facet::Model => &self.model,
            Facet::FuelType => &self.fuel_type,
            Facet::Transmission => &self.transmission,
            Facet::Ownership => &self.ownership,
            Facet::BodyType => &self.body_type,
            Facet::DriveType => &self.drive_type,
            Facet::Feature => &self.feature,
        }
    }

    pub fn range(&self, metric: Metric) -> Option<RangeArg> {
        match metric {
            Metric::Price => self.price,
            Metric::Year => self.year,
            Metric::Mileage => self.mileage,
            Metric::Engine => self.engine,
            Metric::Horsepower => self.horsepower,
        }
    }

    pub fn attribute(&self, attribute: Attribute) -> Option<&str> {
        match attribute {
            Attribute::ColorExterior => self.color_exterior.as_deref(),
            Attribute::ColorInterior => self.color_interior.as_deref(),
            Attribute::Condition => self.condition.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// A range flag; an open side means "up to the calibrated extreme".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeArg {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

fn parse_range(raw: &str) -> Result<RangeArg, String> {
    let (min, max) = raw
        .split_once("..")
        .ok_or_else(|| format!("expected MIN..MAX, got '{raw}'"))?;
    let range = RangeArg {
        min: parse_bound(min)?,
        max: parse_bound(max)?,
    };
    if let (Some(min), Some(max)) = (range.min, range.max) {
        if min > max {
            return Err(format!("range minimum {min} exceeds maximum {max}"));
        }
    }
    Ok(range)
}

fn parse_bound(raw: &str) -> Result<Option<f64>, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    if !raw.chars().any(|c| c.is_ascii_digit()) {
        return Err(format!("'{raw}' is not a number"));
    }
    Ok(Some(normalize(raw)))
}
