//! Showroom - browse a vehicle inventory from the command line.
//!
//! Loads a JSON or YAML listing file into a
//! [`Catalog`](showroom_seeker::Catalog), turns command-line flags into a
//! query and prints the ordered result:
//!
//! ```text
//! showroom cars.json --brand Hyundai --price "..15 lakh" --sort priceLow
//! showroom cars.yaml --search mersedes
//! showroom cars.json --facets -o json
//! ```
//!
//! Range flags select exactly the typed `[MIN, MAX]`. `--facets` lists
//! each metric as the [`RangeSlider`](showroom_slider::RangeSlider) would
//! offer it, extremes widened to the configured step.

pub mod browse;
pub mod cli;
pub mod inventory;
pub mod render;
pub mod settings;

use std::io::Write;

use anyhow::{Context, Result};
use showroom_seeker::Catalog;

pub use cli::{Cli, OutputFormat};
pub use settings::Settings;

/// Runs one invocation, writing the rendered output to `out`.
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    let listings = inventory::load(&cli.inventory)?;
    let catalog = Catalog::with_config(listings, settings.search.clone());
    let color = !cli.no_color && console::colors_enabled();

    let rendered = if cli.facets {
        let controls = browse::range_controls(&catalog, &settings.steps)?;
        match cli.output {
            OutputFormat::Text => render::facets_text(catalog.facets(), &controls),
            OutputFormat::Json => render::facets_json(catalog.facets(), &controls)?,
        }
    } else {
        let query = browse::query(cli, &catalog, settings.default_sort)?;
        let outcome = catalog.run(&query);
        if outcome.used_fallback {
            tracing::info!(search = %query.search(), "no exact matches, showing closest matches");
        }

        let summary = render::Summary {
            matched: outcome.len(),
            used_fallback: outcome.used_fallback,
            sort: outcome.sort,
            search: query.search().clone(),
            active_filters: query.filters().active_count(catalog.bounds()),
        };
        let shown = &outcome.listings[..cli.limit.unwrap_or(usize::MAX).min(outcome.len())];
        match cli.output {
            OutputFormat::Text => render::results_text(shown, &summary, color),
            OutputFormat::Json => render::results_json(shown, &summary)?,
        }
    };

    write!(out, "{rendered}").context("failed to write output")?;
    if cli.output == OutputFormat::Json {
        writeln!(out).context("failed to write output")?;
    }
    Ok(())
}
