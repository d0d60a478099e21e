//! Layered configuration.
//!
//! Sources, later ones overriding earlier ones:
//!
//! 1. built-in defaults
//! 2. `showroom.toml` in the working directory, or the file given with
//!    `--config` (which must then exist)
//! 3. `SHOWROOM__*` environment variables, `__` separating nested keys,
//!    e.g. `SHOWROOM__SEARCH__THRESHOLD=0.3`
//!
//! ```toml
//! default_sort = "priceLow"
//!
//! [search]
//! threshold = 0.35
//! fuzzy_fields = ["brand", "model"]
//!
//! [steps]
//! price = 50000
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;
use showroom_seeker::{Metric, SearchConfig, SortKey, DEFAULT_THRESHOLD};

const DEFAULT_FILE: &str = "showroom";
const ENV_PREFIX: &str = "SHOWROOM";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub steps: Steps,
    /// Sort used when `--sort` is absent. Unset, exact results come newest
    /// first and fallback results closest first.
    #[serde(default)]
    pub default_sort: Option<SortKey>,
}

/// Slider step per range dimension.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Steps {
    pub price: f64,
    pub year: f64,
    pub mileage: f64,
    pub engine: f64,
    pub horsepower: f64,
}

impl Default for Steps {
    fn default() -> Self {
        Steps {
            price: 10_000.0,
            year: 1.0,
            mileage: 1_000.0,
            engine: 100.0,
            horsepower: 10.0,
        }
    }
}

impl Steps {
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Price => self.price,
            Metric::Year => self.year,
            Metric::Mileage => self.mileage,
            Metric::Engine => self.engine,
            Metric::Horsepower => self.horsepower,
        }
    }
}

impl Settings {
    /// Loads settings from the layered sources.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let file = match explicit {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_FILE).required(false),
        };

        let settings: Settings = Config::builder()
            .set_default("search.threshold", DEFAULT_THRESHOLD)?
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()
            .context("failed to read configuration")?
            .try_deserialize()
            .context("invalid configuration")?;

        settings.search.validate()?;
        tracing::debug!(?settings, "configuration loaded");
        Ok(settings)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            search: SearchConfig::default(),
            steps: Steps::default(),
            default_sort: None,
        }
    }
}
