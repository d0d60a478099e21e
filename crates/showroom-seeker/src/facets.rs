//! Option lists for multi-select and single-choice controls.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::listing::{Attribute, Facet, Listing};

/// The distinct values present in a collection, per dimension.
///
/// Empty strings are skipped, so a listing with no drive type does not add
/// a blank option.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Facets {
    pub brands: BTreeSet<String>,
    /// Models grouped by brand.
    pub models: BTreeMap<String, BTreeSet<String>>,
    pub fuel_types: BTreeSet<String>,
    pub transmissions: BTreeSet<String>,
    pub ownerships: BTreeSet<String>,
    pub body_types: BTreeSet<String>,
    pub drive_types: BTreeSet<String>,
    pub features: BTreeSet<String>,
    pub seating_capacities: BTreeSet<u8>,
    pub colors_exterior: BTreeSet<String>,
    pub colors_interior: BTreeSet<String>,
    pub conditions: BTreeSet<String>,
}

impl Facets {
    pub fn collect(listings: &[Listing]) -> Self {
        let mut facets = Facets::default();
        for listing in listings {
            insert(&mut facets.brands, &listing.brand);
            if !listing.model.is_empty() {
                insert(
                    facets.models.entry(listing.brand.clone()).or_default(),
                    &listing.model,
                );
            }
            insert(&mut facets.fuel_types, &listing.fuel_type);
            insert(&mut facets.transmissions, &listing.transmission);
            insert(&mut facets.ownerships, &listing.ownership);
            insert(&mut facets.body_types, &listing.body_type);
            insert(&mut facets.drive_types, &listing.drive_type);
            for feature in &listing.features {
                insert(&mut facets.features, feature);
            }
            facets.seating_capacities.extend(listing.seating_capacity);
            insert(&mut facets.colors_exterior, &listing.color_exterior);
            insert(&mut facets.colors_interior, &listing.color_interior);
            insert(&mut facets.conditions, &listing.condition);
        }
        facets
    }

    /// Returns the options for a multi-select dimension.
    ///
    /// For [`Facet::Model`] this is every model across all brands; use
    /// [`models_for`](Self::models_for) to narrow by the selected brands.
    pub fn options(&self, facet: Facet) -> BTreeSet<&str> {
        match facet {
            Facet::Brand => as_strs(&self.brands),
            Facet::Model => self
                .models
                .values()
                .flat_map(|models| models.iter().map(String::as_str))
                .collect(),
            Facet::FuelType => as_strs(&self.fuel_types),
            Facet::Transmission => as_strs(&self.transmissions),
            Facet::Ownership => as_strs(&self.ownerships),
            Facet::BodyType => as_strs(&self.body_types),
            Facet::DriveType => as_strs(&self.drive_types),
            Facet::Feature => as_strs(&self.features),
        }
    }

    pub fn attribute_options(&self, attribute: Attribute) -> BTreeSet<&str> {
        match attribute {
            Attribute::ColorExterior => as_strs(&self.colors_exterior),
            Attribute::ColorInterior => as_strs(&self.colors_interior),
            Attribute::Condition => as_strs(&self.conditions),
        }
    }

    /// Returns the models offered under the given brands.
    ///
    /// An empty brand selection means every brand, matching how an empty
    /// selection filters.
    pub fn models_for(&self, brands: &BTreeSet<String>) -> BTreeSet<&str> {
        if brands.is_empty() {
            return self.options(Facet::Model);
        }
        brands
            .iter()
            .filter_map(|brand| self.models.get(brand))
            .flat_map(|models| models.iter().map(String::as_str))
            .collect()
    }
}

fn insert(set: &mut BTreeSet<String>, value: &str) {
    if !value.is_empty() && !set.contains(value) {
        set.insert(value.to_string());
    }
}

fn as_strs(set: &BTreeSet<String>) -> BTreeSet<&str> {
    set.iter().map(String::as_str).collect()
}
