//! End-to-end runs of the command over inventory files on disk.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use showroom::{run, Cli};
use tempfile::TempDir;

const INVENTORY: &str = r#"[
  {"id": "swift", "brand": "Maruti", "model": "Swift", "variant": "VXi", "year": 2019,
   "price": "₹6.5 Lakh", "mileage": "42,000 km", "fuelType": "Petrol", "transmission": "Manual"},
  {"id": "creta", "brand": "Hyundai", "model": "Creta", "variant": "SX", "year": 2022,
   "price": "₹14 Lakh", "mileage": "12,000 km", "fuelType": "Diesel", "transmission": "Automatic"},
  {"id": "nexon", "brand": "Tata", "model": "Nexon", "variant": "XZ+", "year": 2021,
   "price": "₹9.8 Lakh", "mileage": "25,000 km", "fuelType": "Petrol", "transmission": "Manual"},
  {"id": "cclass", "brand": "Mercedes-Benz", "model": "C-Class", "variant": "200", "year": 2020,
   "price": "₹42 Lakh", "mileage": "30,000 km", "fuelType": "Petrol", "transmission": "Automatic"}
]"#;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new(config: &str) -> Self {
        Fixture::with_inventory(INVENTORY, config)
    }

    fn with_inventory(inventory: &str, config: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("cars.json"), inventory).unwrap();
        fs::write(dir.path().join("showroom.toml"), config).unwrap();
        Fixture { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn run(&self, args: &[&str]) -> anyhow::Result<String> {
        let inventory = self.path("cars.json");
        let config = self.path("showroom.toml");
        let mut argv = vec![
            "showroom".to_string(),
            inventory.display().to_string(),
            "--config".to_string(),
            config.display().to_string(),
            "--no-color".to_string(),
        ];
        argv.extend(args.iter().map(|arg| arg.to_string()));

        let cli = Cli::try_parse_from(argv)?;
        let mut out: Vec<u8> = Vec::new();
        run(&cli, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    fn ids(&self, args: &[&str]) -> Vec<String> {
        let mut args = args.to_vec();
        args.extend(["--output", "json"]);
        let value: serde_json::Value = serde_json::from_str(&self.run(&args).unwrap()).unwrap();
        value["listings"]
            .as_array()
            .unwrap()
            .iter()
            .map(|listing| listing["id"].as_str().unwrap().to_string())
            .collect()
    }
}

#[test]
fn price_range_sorted_low_to_high() {
    let fixture = Fixture::new("");
    let output = fixture
        .run(&["--price", "..10 lakh", "--sort", "priceLow"])
        .unwrap();
    insta::assert_snapshot!(output, @r"
    2 listings, sorted by priceLow, 1 filter applied

     1. 2019 Maruti Swift VXi
        ₹6.5 Lakh · 42,000 km · Petrol · Manual

     2. 2021 Tata Nexon XZ+
        ₹9.8 Lakh · 25,000 km · Petrol · Manual
    ");
}

#[test]
fn misspelled_search_shows_closest_matches() {
    let fixture = Fixture::new("");
    let output = fixture.run(&["--search", "Mersedes"]).unwrap();
    insta::assert_snapshot!(output, @r#"
    No exact matches for "mersedes"; showing closest matches.
    1 listing, sorted by relevance

     1. 2020 Mercedes-Benz C-Class 200
        ₹42 Lakh · 30,000 km · Petrol · Automatic
    "#);
}

#[test]
fn exact_search_does_not_fall_back() {
    let fixture = Fixture::new("");
    let output = fixture.run(&["--search", "petrol", "--output", "json"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["usedFallback"], false);
    assert_eq!(value["matched"], 3);
}

#[test]
fn limit_keeps_the_match_count() {
    let fixture = Fixture::new("");
    let output = fixture.run(&["-n", "1", "--output", "json"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["matched"], 4);
    assert_eq!(value["listings"].as_array().unwrap().len(), 1);
    assert_eq!(value["listings"][0]["id"], "creta");
}

#[test]
fn configured_default_sort_applies() {
    let fixture = Fixture::new("default_sort = \"priceHigh\"\n");
    assert_eq!(fixture.ids(&[]), ["cclass", "creta", "nexon", "swift"]);
    assert_eq!(fixture.ids(&["--sort", "brandAZ"]), ["creta", "swift", "cclass", "nexon"]);
}

#[test]
fn filters_combine() {
    let fixture = Fixture::new("");
    assert_eq!(
        fixture.ids(&["--fuel", "Petrol", "--transmission", "Automatic"]),
        ["cclass"]
    );
    assert_eq!(
        fixture.ids(&["--brand", "Tata", "--brand", "Maruti", "--year", "2020.."]),
        ["nexon"]
    );
    assert!(fixture.ids(&["--brand", "Kia"]).is_empty());
}

#[test]
fn strict_threshold_disables_fuzzy_hits() {
    let fixture = Fixture::new("[search]\nthreshold = 0.0\n");
    let output = fixture.run(&["--search", "Mersedes"]).unwrap();
    insta::assert_snapshot!(output, @r#"
    No exact matches for "mersedes"; showing closest matches.
    No listings match.
    "#);
}

#[test]
fn facets_list_options_and_ranges() {
    let fixture = Fixture::new("");
    let output = fixture.run(&["--facets"]).unwrap();
    insta::assert_snapshot!(output, @r"
    brand: Hyundai, Maruti, Mercedes-Benz, Tata
    model: Hyundai (Creta), Maruti (Swift), Mercedes-Benz (C-Class), Tata (Nexon)
    fuelType: Diesel, Petrol
    transmission: Automatic, Manual
    price: 650000..4200000 step 10000
    year: 2019..2022 step 1
    mileage: 12000..42000 step 1000
    engine: 0..0 step 100
    horsepower: 0..0 step 10
    ");
}

#[test]
fn price_cap_is_inclusive_and_exact() {
    let fixture = Fixture::new("");
    assert_eq!(
        fixture.ids(&["--price", "..9.75 lakh", "--sort", "priceLow"]),
        ["swift"]
    );
    assert_eq!(
        fixture.ids(&["--price", "..9.8 lakh", "--sort", "priceLow"]),
        ["swift", "nexon"]
    );
}

#[test]
fn ranges_beyond_the_inventory_match_nothing() {
    let fixture = Fixture::new("");
    for range in ["..3 lakh", "50 lakh.."] {
        let output = fixture.run(&["--price", range]).unwrap();
        assert_eq!(output, "No listings match.\n", "{range}");
    }
    assert!(fixture.ids(&["--year", "1990..1995"]).is_empty());
}

#[test]
fn fallback_without_sort_keeps_closest_first() {
    let fixture = Fixture::with_inventory(
        r#"[
  {"id": "far", "brand": "Mersey", "model": "Roadster", "year": 2023},
  {"id": "close", "brand": "Mercedes-Benz", "model": "E-Class", "year": 2016}
]"#,
        "",
    );
    assert_eq!(fixture.ids(&["--search", "mersedes"]), ["close", "far"]);
    assert_eq!(
        fixture.ids(&["--search", "mersedes", "--sort", "newest"]),
        ["far", "close"]
    );

    let output = fixture.run(&["--search", "mersedes", "--output", "json"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["usedFallback"], true);
    assert_eq!(value["sort"], "relevance");
}

#[test]
fn missing_inventory_is_an_error() {
    let fixture = Fixture::new("");
    let cli = Cli::try_parse_from([
        "showroom".to_string(),
        fixture.path("absent.json").display().to_string(),
        "--config".to_string(),
        fixture.path("showroom.toml").display().to_string(),
    ])
    .unwrap();
    let err = run(&cli, &mut Vec::<u8>::new()).unwrap_err();
    assert!(format!("{err:#}").contains("absent.json"));
}
