//! Loading listing files.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use showroom_seeker::Listing;

/// Accepts either a bare list or a document with a `listings` key.
#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    Bare(Vec<Listing>),
    Wrapped { listings: Vec<Listing> },
}

impl Document {
    fn into_listings(self) -> Vec<Listing> {
        match self {
            Document::Bare(listings) | Document::Wrapped { listings } => listings,
        }
    }
}

/// Reads a JSON or YAML inventory, choosing the format by extension.
pub fn load(path: &Path) -> Result<Vec<Listing>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read inventory {}", path.display()))?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let document: Document = match extension.as_deref() {
        Some("json") => serde_json::from_str(&contents)
            .with_context(|| format!("invalid JSON inventory {}", path.display()))?,
        Some("yaml" | "yml") => serde_yaml::from_str(&contents)
            .with_context(|| format!("invalid YAML inventory {}", path.display()))?,
        _ => bail!(
            "unsupported inventory format for {}: expected .json, .yaml or .yml",
            path.display()
        ),
    };

    let listings = document.into_listings();
    tracing::info!(count = listings.len(), path = %path.display(), "loaded inventory");
    Ok(listings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn json_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "cars.json",
            r#"[{"id": "1", "brand": "Kia", "fuelType": "Diesel", "seatingCapacity": 5}]"#,
        );
        let listings = load(&path).unwrap();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].fuel_type, "Diesel");
        assert_eq!(listings[0].seating_capacity, Some(5));
    }

    #[test]
    fn yaml_document_with_listings_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "cars.YML",
            "listings:\n  - brand: Tata\n    price: \"₹9.8 Lakh\"\n    features: [ADAS]\n",
        );
        let listings = load(&path).unwrap();
        assert_eq!(listings[0].brand, "Tata");
        assert_eq!(listings[0].features, ["ADAS"]);
    }

    #[test]
    fn errors_name_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let csv = write(&dir, "cars.csv", "brand\nKia\n");
        assert!(load(&csv).unwrap_err().to_string().contains("unsupported"));

        let broken = write(&dir, "cars.json", "{");
        assert!(load(&broken).unwrap_err().to_string().contains("cars.json"));

        let missing = dir.path().join("nope.json");
        assert!(load(&missing).unwrap_err().to_string().contains("failed to read"));
    }
}
