//! Text and JSON output.

use std::fmt::Write as _;

use anyhow::Result;
use console::Style;
use serde::Serialize;
use showroom_seeker::{Attribute, Facet, Facets, Listing, SearchTerm, SortKey};

use crate::browse::RangeControl;

/// What the header line reports about a result.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Listings the pipeline returned, before any display limit.
    pub matched: usize,
    pub used_fallback: bool,
    pub sort: SortKey,
    pub search: SearchTerm,
    pub active_filters: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResultsDocument<'a> {
    matched: usize,
    used_fallback: bool,
    sort: SortKey,
    search: &'a str,
    active_filters: usize,
    listings: &'a [&'a Listing],
}

#[derive(Serialize)]
struct FacetsDocument<'a> {
    facets: &'a Facets,
    ranges: &'a [RangeControl],
}

struct Styles {
    notice: Style,
    header: Style,
    title: Style,
    detail: Style,
}

impl Styles {
    fn new(color: bool) -> Self {
        Styles {
            notice: Style::new().yellow().force_styling(color),
            header: Style::new().bold().force_styling(color),
            title: Style::new().cyan().bold().force_styling(color),
            detail: Style::new().dim().force_styling(color),
        }
    }
}

/// Renders listings as a numbered list.
pub fn results_text(listings: &[&Listing], summary: &Summary, color: bool) -> String {
    let styles = Styles::new(color);
    let mut out = String::new();

    if summary.used_fallback {
        let _ = writeln!(
            out,
            "{}",
            styles.notice.apply_to(format!(
                "No exact matches for \"{}\"; showing closest matches.",
                summary.search
            ))
        );
    }

    if listings.is_empty() {
        let _ = writeln!(out, "{}", styles.header.apply_to("No listings match."));
        return out;
    }

    let _ = writeln!(out, "{}", styles.header.apply_to(header(listings.len(), summary)));
    for (index, listing) in listings.iter().enumerate() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{:>2}. {}", index + 1, styles.title.apply_to(title(listing)));
        let details = details(listing);
        if !details.is_empty() {
            let _ = writeln!(out, "    {}", styles.detail.apply_to(details));
        }
    }
    out
}

/// Renders listings and the summary as pretty JSON.
pub fn results_json(listings: &[&Listing], summary: &Summary) -> Result<String> {
    let document = ResultsDocument {
        matched: summary.matched,
        used_fallback: summary.used_fallback,
        sort: summary.sort,
        search: summary.search.as_str(),
        active_filters: summary.active_filters,
        listings,
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Renders the filter options and range controls, one dimension per line.
pub fn facets_text(facets: &Facets, ranges: &[RangeControl]) -> String {
    let mut out = String::new();
    for facet in Facet::ALL {
        let line = match facet {
            Facet::Model => facets
                .models
                .iter()
                .map(|(brand, models)| format!("{brand} ({})", join(models)))
                .collect::<Vec<_>>()
                .join(", "),
            _ => join(facets.options(facet)),
        };
        push_line(&mut out, facet.as_str(), &line);
    }

    let seats = join(facets.seating_capacities.iter().map(u8::to_string));
    push_line(&mut out, "seatingCapacity", &seats);

    for attribute in Attribute::ALL {
        push_line(&mut out, attribute.as_str(), &join(facets.attribute_options(attribute)));
    }
    for range in ranges {
        let _ = writeln!(
            out,
            "{}: {}..{} step {}",
            range.metric,
            range.bounds.min(),
            range.bounds.max(),
            range.step
        );
    }
    out
}

pub fn facets_json(facets: &Facets, ranges: &[RangeControl]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&FacetsDocument { facets, ranges })?)
}

fn header(shown: usize, summary: &Summary) -> String {
    let noun = if summary.matched == 1 { "listing" } else { "listings" };
    let mut header = if shown < summary.matched {
        format!("{shown} of {} {noun}", summary.matched)
    } else {
        format!("{} {noun}", summary.matched)
    };
    let _ = write!(header, ", sorted by {}", summary.sort);
    match summary.active_filters {
        0 => {}
        1 => header.push_str(", 1 filter applied"),
        n => {
            let _ = write!(header, ", {n} filters applied");
        }
    }
    header
}

fn title(listing: &Listing) -> String {
    let year = (listing.year > 0).then(|| listing.year.to_string());
    year.iter()
        .map(String::as_str)
        .chain([
            listing.brand.as_str(),
            listing.model.as_str(),
            listing.variant.as_str(),
        ])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn details(listing: &Listing) -> String {
    [
        listing.price.as_str(),
        listing.mileage.as_str(),
        listing.fuel_type.as_str(),
        listing.transmission.as_str(),
    ]
    .into_iter()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(" · ")
}

fn join<I>(values: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    values
        .into_iter()
        .map(|value| value.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn push_line(out: &mut String, label: &str, values: &str) {
    if !values.is_empty() {
        let _ = writeln!(out, "{label}: {values}");
    }
}
