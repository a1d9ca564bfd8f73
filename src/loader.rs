//! Load season rows from a CSV file on disk or over HTTP.
//!
//! Rows are validated once here (non-empty, non-negative finite viewership,
//! unique years) and returned sorted by year, so every later stage can rely on
//! those invariants.

use crate::error::{ChartError, Result};
use crate::models::Season;
use csv::ReaderBuilder;
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

/// Load from a local path or an `http(s)://` URL.
pub fn load_source(source: &str) -> Result<Vec<Season>> {
    if source.starts_with("http://") || source.starts_with("https://") {
        fetch_url(source)
    } else {
        load_csv(source)
    }
}

/// Parse a CSV file with a header row.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Season>> {
    let path = path.as_ref();
    log::info!("loading seasons from {}", path.display());
    let rdr = ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;
    collect_rows(rdr)
}

/// Parse CSV from any reader (header row required).
pub fn load_reader<R: Read>(reader: R) -> Result<Vec<Season>> {
    let rdr = ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    collect_rows(rdr)
}

/// Download a CSV document and parse it.
pub fn fetch_url(url: &str) -> Result<Vec<Season>> {
    log::info!("fetching seasons from {url}");
    let http = HttpClient::builder()
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .redirect(Policy::limited(5))
        .user_agent(concat!("season-viewers/", env!("CARGO_PKG_VERSION")))
        .build()?;
    let body = http.get(url).send()?.error_for_status()?.text()?;
    load_reader(body.as_bytes())
}

fn collect_rows<R: Read>(mut rdr: csv::Reader<R>) -> Result<Vec<Season>> {
    let mut rows = Vec::new();
    for rec in rdr.deserialize::<Season>() {
        rows.push(rec?);
    }
    validate(&mut rows)?;
    log::debug!("loaded {} seasons", rows.len());
    Ok(rows)
}

/// Enforce row invariants and order rows by year.
pub fn validate(rows: &mut [Season]) -> Result<()> {
    if rows.is_empty() {
        return Err(ChartError::EmptyData);
    }
    let mut seen = BTreeSet::new();
    for r in rows.iter() {
        let v = r.avg_viewers_mil.value();
        if !v.is_finite() || v < 0.0 {
            return Err(ChartError::InvalidRow {
                year: r.year,
                reason: format!("average viewers must be >= 0, got {}", r.avg_viewers_mil),
            });
        }
        if !seen.insert(r.year) {
            return Err(ChartError::DuplicateYear(r.year));
        }
    }
    rows.sort_by_key(|r| r.year);
    Ok(())
}
