//! Dataset loading and validation.
//!
//! The map core itself never touches the filesystem; this module is the
//! collaborator that produces the validated [`MapData`] it consumes.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{JourneyError, Result};
use crate::models::{MapData, MapLocation, ValidityMode};

/// Validation result with details
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// Violations that make the dataset unusable
    pub errors: Vec<String>,
    /// Data-quality issues that are tolerated
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, location: &str, reason: impl Into<String>) {
        self.errors.push(format!("{}: {}", location, reason.into()));
    }

    fn warning(&mut self, location: &str, reason: impl Into<String>) {
        self.warnings.push(format!("{}: {}", location, reason.into()));
    }
}

/// Check a parsed dataset against the location schema
pub fn validate(locations: &[MapLocation]) -> ValidationReport {
    let mut report = ValidationReport::default();
    let mut seen_keys = HashSet::new();

    for (idx, location) in locations.iter().enumerate() {
        let at = format!("locations[{}] ({})", idx, location.id());

        let [lng, lat] = location.coordinates;
        if !lng.is_finite() || !lat.is_finite() {
            report.error(&at, "Coordinates must be finite");
        } else {
            if !(-180.0..=180.0).contains(&lng) {
                report.error(&at, format!("Longitude {} outside [-180, 180]", lng));
            }
            if !(-90.0..=90.0).contains(&lat) {
                report.error(&at, format!("Latitude {} outside [-90, 90]", lat));
            }
        }

        if !seen_keys.insert(location.id()) {
            report.warning(&at, "Duplicate location key; lookups resolve to the first occurrence");
        }

        let mut entry_ids = HashSet::new();
        for (entry_idx, entry) in location.entries.iter().enumerate() {
            let entry_at = format!("{}.entries[{}]", at, entry_idx);

            if entry.id.is_empty() {
                report.error(&entry_at, "Entry id must not be empty");
            } else if !entry_ids.insert(entry.id.as_str()) {
                report.error(&entry_at, format!("Duplicate entry id '{}'", entry.id));
            }

            for link in &entry.links {
                if !is_absolute_url(&link.url) {
                    report.error(&entry_at, format!("Link '{}' has invalid url '{}'", link.label, link.url));
                }
            }
        }
    }

    report
}

/// `scheme://rest` with an RFC 3986 scheme and a non-empty remainder
fn is_absolute_url(url: &str) -> bool {
    let Some((scheme, rest)) = url.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    let scheme_ok = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    scheme_ok && !rest.is_empty() && !rest.chars().any(char::is_whitespace)
}

/// Parse and validate a dataset from JSON text
pub fn parse_map_data(json: &str, mode: ValidityMode) -> Result<MapData> {
    let locations: Vec<MapLocation> = match serde_json::from_str(json) {
        Ok(locations) => locations,
        Err(e) => {
            return fallback(
                mode,
                JourneyError::DatasetParse { path: "<inline>".into(), reason: e.to_string() },
            )
        }
    };
    check(locations, mode)
}

/// Read, parse, and validate a dataset file
pub fn load_map_data<P: AsRef<Path>>(path: P, mode: ValidityMode) -> Result<MapData> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(JourneyError::DatasetNotFound { path: path.to_path_buf() });
    }

    let content = fs::read_to_string(path)?;
    let locations: Vec<MapLocation> = match serde_json::from_str(&content) {
        Ok(locations) => locations,
        Err(e) => {
            return fallback(
                mode,
                JourneyError::DatasetParse { path: path.to_path_buf(), reason: e.to_string() },
            )
        }
    };

    let data = check(locations, mode)?;
    tracing::info!(
        path = %path.display(),
        locations = data.len(),
        entries = data.entry_count(),
        "Loaded map dataset"
    );
    Ok(data)
}

fn check(locations: Vec<MapLocation>, mode: ValidityMode) -> Result<MapData> {
    let report = validate(&locations);
    for warning in &report.warnings {
        tracing::warn!("{}", warning);
    }

    if report.is_valid() {
        Ok(MapData::new(locations))
    } else {
        fallback(mode, JourneyError::InvalidDataset { errors: report.errors })
    }
}

/// Strict mode surfaces the error; lenient mode logs it and uses an empty dataset
fn fallback(mode: ValidityMode, err: JourneyError) -> Result<MapData> {
    match mode {
        ValidityMode::Strict => Err(err),
        ValidityMode::Lenient => {
            tracing::error!(error = %err, "Invalid map data, using an empty dataset");
            Ok(MapData::empty())
        }
    }
}
