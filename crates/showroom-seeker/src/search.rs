//! Free-text search input and the fields it looks at.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SeekerError};
use crate::listing::{Listing, TextField};

/// A normalized free-text search term.
///
/// The raw input is trimmed and lowercased once, at construction; an
/// all-whitespace input is the empty term and disables text matching.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn new(raw: &str) -> Self {
        SearchTerm(raw.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for SearchTerm {
    fn from(raw: &str) -> Self {
        SearchTerm::new(raw)
    }
}

impl From<String> for SearchTerm {
    fn from(raw: String) -> Self {
        SearchTerm::new(&raw)
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which fields the two search stages examine, and how tolerant the fuzzy
/// stage is.
///
/// Deserializes from configuration with every key optional:
///
/// ```toml
/// [search]
/// threshold = 0.35
/// exact_fields = ["brand", "model", "variant"]
/// fuzzy_fields = ["brand", "model"]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Largest fuzzy distance, in `[0, 1]`, the fallback stage accepts.
    pub threshold: f64,
    /// Fields joined for the literal substring test.
    pub exact_fields: Vec<TextField>,
    /// Fields scored by the fallback stage.
    pub fuzzy_fields: Vec<TextField>,
}

/// Default fuzzy threshold.
pub const DEFAULT_THRESHOLD: f64 = 0.4;

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            threshold: DEFAULT_THRESHOLD,
            exact_fields: vec![
                TextField::Brand,
                TextField::Model,
                TextField::Year,
                TextField::FuelType,
                TextField::Transmission,
                TextField::Variant,
            ],
            fuzzy_fields: vec![TextField::Brand, TextField::Model, TextField::Variant],
        }
    }
}

impl SearchConfig {
    /// Returns a copy with a different fuzzy threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Result<Self> {
        self.threshold = threshold;
        self.validate()?;
        Ok(self)
    }

    /// Checks that the threshold lies in `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if (0.0..=1.0).contains(&self.threshold) {
            Ok(())
        } else {
            Err(SeekerError::InvalidThreshold(self.threshold))
        }
    }

    /// Returns `true` if the listing's exact-search text contains `term`.
    ///
    /// The configured fields are joined with spaces and lowercased, then
    /// tested for a literal substring. An empty term matches everything.
    pub fn contains_term(&self, listing: &Listing, term: &SearchTerm) -> bool {
        if term.is_empty() {
            return true;
        }
        self.haystack(listing).contains(term.as_str())
    }

    fn haystack(&self, listing: &Listing) -> String {
        self.exact_fields
            .iter()
            .map(|field| listing.text(*field))
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creta() -> Listing {
        Listing {
            brand: "Hyundai".into(),
            model: "Creta".into(),
            variant: "SX Turbo".into(),
            year: 2022,
            fuel_type: "Petrol".into(),
            transmission: "Automatic".into(),
            color_exterior: "Titan Grey".into(),
            ..Listing::default()
        }
    }

    #[test]
    fn term_is_trimmed_and_lowercased() {
        let term = SearchTerm::new("  Creta SX \t");
        assert_eq!(term.as_str(), "creta sx");
        assert!(SearchTerm::new("   ").is_empty());
    }

    #[test]
    fn substring_across_joined_fields() {
        let config = SearchConfig::default();
        let listing = creta();
        assert!(config.contains_term(&listing, &"hyundai creta".into()));
        assert!(config.contains_term(&listing, &"2022 petrol".into()));
        assert!(config.contains_term(&listing, &"TURBO".into()));
        assert!(!config.contains_term(&listing, &"creta diesel".into()));
    }

    #[test]
    fn unlisted_fields_are_not_searched() {
        let config = SearchConfig::default();
        assert!(!config.contains_term(&creta(), &"grey".into()));

        let config = SearchConfig {
            exact_fields: vec![TextField::ColorExterior],
            ..SearchConfig::default()
        };
        assert!(config.contains_term(&creta(), &"grey".into()));
    }

    #[test]
    fn empty_term_matches() {
        assert!(SearchConfig::default().contains_term(&Listing::default(), &SearchTerm::default()));
    }

    #[test]
    fn threshold_validation() {
        assert!(SearchConfig::default().with_threshold(0.0).is_ok());
        assert!(SearchConfig::default().with_threshold(1.0).is_ok());
        assert_eq!(
            SearchConfig::default().with_threshold(1.5),
            Err(SeekerError::InvalidThreshold(1.5))
        );
    }

    #[test]
    fn partial_config_uses_defaults() {
        let config: SearchConfig = serde_json::from_str(r#"{"threshold": 0.2}"#).unwrap();
        assert_eq!(config.threshold, 0.2);
        assert_eq!(config.fuzzy_fields, SearchConfig::default().fuzzy_fields);
    }
}
