use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use serde::Deserialize;

use super::model::{CollisionDataset, CollisionRecord};

/// Row cap matching the dashboard's sampled working set.
pub const DEFAULT_ROW_LIMIT: usize = 10_000;

/// Column labels every source file must carry, in their normalized
/// (lowercase) form. Lookup is by name, so column order is free.
const REQUIRED_COLUMNS: [&str; 9] = [
    "crash_date",
    "crash_time",
    "latitude",
    "longitude",
    "injured_persons",
    "injured_pedestrians",
    "injured_cyclists",
    "injured_motorists",
    "on_street_name",
];

// ---------------------------------------------------------------------------
// Raw row – the CSV shape before normalization
// ---------------------------------------------------------------------------

/// One CSV row, deserialized against the lowercased header record.
/// Blank fields become `None`; columns outside this set are ignored.
#[derive(Debug, Deserialize)]
struct RawCollisionRow {
    crash_date: String,
    crash_time: String,
    latitude: Option<f64>,
    longitude: Option<f64>,
    injured_persons: Option<u32>,
    injured_pedestrians: Option<u32>,
    injured_cyclists: Option<u32>,
    injured_motorists: Option<u32>,
    on_street_name: Option<String>,
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the collision dataset, memoized per (path, row limit).
///
/// The cache lock is held across the load, so population happens at most
/// once per key even with concurrent callers; hits share one `Arc`.
pub fn load_cached(path: &Path, nrows: usize) -> Result<Arc<CollisionDataset>> {
    static CACHE: Lazy<Mutex<HashMap<(PathBuf, usize), Arc<CollisionDataset>>>> =
        Lazy::new(|| Mutex::new(HashMap::new()));

    let key = (path.to_path_buf(), nrows);
    let mut cache = CACHE.lock().unwrap();
    if let Some(dataset) = cache.get(&key) {
        log::debug!("cache hit for {:?} (limit {nrows})", key.0);
        return Ok(Arc::clone(dataset));
    }

    let dataset = Arc::new(load_csv(path, nrows)?);
    cache.insert(key, Arc::clone(&dataset));
    Ok(dataset)
}

/// Read up to `nrows` rows from a collisions CSV and produce the
/// normalized working set.
///
/// Normalization happens once, up front: all column labels are lowercased
/// before any field access, crash date and crash time are combined into a
/// single timestamp, and rows missing either coordinate are dropped.
/// No partial results: a structurally bad file or row fails the whole
/// load.
pub fn load_csv(path: &Path, nrows: usize) -> Result<CollisionDataset> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    // Lowercase the header record once; every later lookup (including
    // serde's) sees only the normalized labels.
    let normalized: csv::StringRecord = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_ascii_lowercase())
        .collect();

    for required in REQUIRED_COLUMNS {
        if !normalized.iter().any(|h| h == required) {
            bail!("CSV is missing required column '{required}'");
        }
    }
    reader.set_headers(normalized);

    let mut records = Vec::new();
    let mut dropped = 0usize;

    for (row_no, result) in reader.deserialize().take(nrows).enumerate() {
        let raw: RawCollisionRow = result.with_context(|| format!("CSV row {row_no}"))?;

        // dropna on coordinates: absent or non-finite → not in the working set
        let (latitude, longitude) = match (raw.latitude, raw.longitude) {
            (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => (lat, lon),
            _ => {
                dropped += 1;
                continue;
            }
        };

        let timestamp = combine_date_time(&raw.crash_date, &raw.crash_time)
            .with_context(|| format!("CSV row {row_no}"))?;

        records.push(CollisionRecord {
            timestamp,
            latitude,
            longitude,
            injured_persons: raw.injured_persons,
            injured_pedestrians: raw.injured_pedestrians,
            injured_cyclists: raw.injured_cyclists,
            injured_motorists: raw.injured_motorists,
            on_street_name: normalize_street(raw.on_street_name),
        });
    }

    log::info!(
        "loaded {} collision records from {} ({dropped} rows dropped for missing coordinates)",
        records.len(),
        path.display(),
    );

    Ok(CollisionDataset { records })
}

// ---------------------------------------------------------------------------
// Field normalization helpers
// ---------------------------------------------------------------------------

/// Combine the separate date and time fields into one timestamp.
fn combine_date_time(date: &str, time: &str) -> Result<NaiveDateTime> {
    let date = date.trim();
    let time = time.trim();

    let d = NaiveDate::parse_from_str(date, "%m/%d/%Y")
        .or_else(|_| NaiveDate::parse_from_str(date, "%Y-%m-%d"))
        .with_context(|| format!("unrecognized crash date '{date}'"))?;
    let t = NaiveTime::parse_from_str(time, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M:%S"))
        .with_context(|| format!("unrecognized crash time '{time}'"))?;

    Ok(d.and_time(t))
}

/// Whitespace-only street names count as absent.
fn normalize_street(street: Option<String>) -> Option<String> {
    street
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}
