use std::fs;

use camino::Utf8Path;
use chrono::{DateTime, Local};
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::classify::annotation_labels;
use crate::enrich::EnrichedLocation;
use crate::error::SurveyError;
use crate::inat::Observation;
use crate::lookup::LabelCatalog;

// Sorts after every real month or day value.
const DATE_SENTINEL: u32 = 99;
const TAXON_WIDTH: usize = 28;
const ELEVATION_WIDTH: usize = 6;
const STATUS_WIDTH: usize = 20;
const PLACE_WIDTH: usize = 24;

/// Orders records by (month, day) ascending with unknown components last.
/// Two stable passes, day first then month, so records that tie on the
/// composite key keep their fetched order.
pub fn sort_by_observed_date(records: &mut [EnrichedLocation]) {
    records.sort_by_key(|record| record.day.unwrap_or(DATE_SENTINEL));
    records.sort_by_key(|record| record.month.unwrap_or(DATE_SENTINEL));
}

pub fn render_line(record: &EnrichedLocation) -> String {
    let date = date_cell(record.month, record.day);
    let taxon = truncate_name(&record.taxon_name, TAXON_WIDTH);
    let elevation = record.elevation.to_string();
    let place = record
        .places
        .first()
        .map(|info| info.name.as_str())
        .unwrap_or("");
    let obscured = if record.geoprivacy.as_deref() == Some("obscured") {
        " (obscured)"
    } else {
        ""
    };
    format!(
        "{date}  {taxon:<TAXON_WIDTH$}  {elevation:>ELEVATION_WIDTH$}  {status:<STATUS_WIDTH$}  {place:<PLACE_WIDTH$}  {url}{obscured}",
        status = record.status,
        url = record.url,
    )
}

fn date_cell(month: Option<u32>, day: Option<u32>) -> String {
    let month = match month {
        Some(month) => format!("{month:02}"),
        None => "??".to_string(),
    };
    let day = match day {
        Some(day) => format!("{day:02}"),
        None => "??".to_string(),
    };
    format!("{month}/{day}")
}

fn truncate_name(name: &str, width: usize) -> String {
    if name.chars().count() <= width {
        return name.to_string();
    }
    let head: String = name.chars().take(width.saturating_sub(1)).collect();
    format!("{head}…")
}

// Column order matches the export header contract.
#[derive(Debug, Serialize)]
struct CsvRow {
    id: u64,
    observed_on: String,
    created_at: String,
    place_guess: String,
    latitude: String,
    longitude: String,
    positional_accuracy: String,
    geoprivacy: String,
    taxon_name: String,
    common_name: String,
    user_login: String,
    user_name: String,
    quality_grade: String,
    annotations: String,
    description: String,
    url: String,
}

fn csv_row(observation: &Observation, catalog: &LabelCatalog) -> CsvRow {
    let (latitude, longitude) = split_location(observation.location.as_deref());
    let annotations = observation
        .annotations
        .iter()
        .map(|annotation| {
            let (term, value) = annotation_labels(catalog, annotation);
            format!("{term}: {value}")
        })
        .collect::<Vec<_>>()
        .join("; ");
    CsvRow {
        id: observation.id,
        observed_on: observation.observed_on.clone().unwrap_or_default(),
        created_at: observation.created_at.clone().unwrap_or_default(),
        place_guess: observation.place_guess.clone().unwrap_or_default(),
        latitude,
        longitude,
        positional_accuracy: observation
            .positional_accuracy
            .map(|meters| meters.to_string())
            .unwrap_or_default(),
        geoprivacy: observation.geoprivacy.clone().unwrap_or_default(),
        taxon_name: observation
            .taxon
            .as_ref()
            .and_then(|taxon| taxon.name.clone())
            .unwrap_or_else(|| "Unknown".to_string()),
        common_name: observation
            .taxon
            .as_ref()
            .and_then(|taxon| taxon.preferred_common_name.clone())
            .unwrap_or_default(),
        user_login: observation
            .user
            .as_ref()
            .and_then(|user| user.login.clone())
            .unwrap_or_else(|| "Unknown".to_string()),
        user_name: observation
            .user
            .as_ref()
            .and_then(|user| user.name.clone())
            .unwrap_or_default(),
        quality_grade: observation
            .quality_grade
            .as_ref()
            .map(|grade| grade.as_str().to_string())
            .unwrap_or_default(),
        annotations,
        description: observation.description.clone().unwrap_or_default(),
        url: observation.url(),
    }
}

// The combined location field is "lat,lng"; both halves stay verbatim.
fn split_location(location: Option<&str>) -> (String, String) {
    match location {
        Some(location) => {
            let mut parts = location.splitn(2, ',');
            let latitude = parts.next().unwrap_or("").to_string();
            let longitude = parts.next().unwrap_or("").to_string();
            (latitude, longitude)
        }
        None => (String::new(), String::new()),
    }
}

pub fn write_csv(
    path: &Utf8Path,
    observations: &[Observation],
    catalog: &LabelCatalog,
) -> Result<(), SurveyError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for observation in observations {
        writer
            .serialize(csv_row(observation, catalog))
            .map_err(|err| SurveyError::Csv(err.to_string()))?;
    }
    let content = writer
        .into_inner()
        .map_err(|err| SurveyError::Csv(err.to_string()))?;
    write_bytes_atomic(path, &content)
}

pub fn write_json_raw(path: &Utf8Path, raw_results: &[Value]) -> Result<(), SurveyError> {
    let content = serde_json::to_vec_pretty(raw_results)
        .map_err(|err| SurveyError::Filesystem(err.to_string()))?;
    write_bytes_atomic(path, &content)
}

fn write_bytes_atomic(path: &Utf8Path, content: &[u8]) -> Result<(), SurveyError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent.as_std_path())
            .map_err(|err| SurveyError::Filesystem(err.to_string()))?;
    }
    let tmp_path = path.with_extension("tmp");
    fs::write(tmp_path.as_std_path(), content)
        .map_err(|err| SurveyError::Filesystem(err.to_string()))?;
    fs::rename(tmp_path.as_std_path(), path.as_std_path())
        .map_err(|err| SurveyError::Filesystem(err.to_string()))?;
    Ok(())
}

/// Lower-cases the species name, strips everything outside `[\w\s-]`, and
/// collapses runs of whitespace and hyphens into single hyphens.
pub fn slugify_species(species: &str) -> String {
    let lowered = species.to_lowercase();
    let stripped = Regex::new(r"[^\w\s-]")
        .unwrap()
        .replace_all(&lowered, "");
    let collapsed = Regex::new(r"[-\s]+")
        .unwrap()
        .replace_all(&stripped, "-");
    collapsed
        .trim_matches(|c| c == '-' || c == '_')
        .to_string()
}

pub fn export_basename(species: &str, now: DateTime<Local>) -> String {
    format!(
        "{}_all_{}",
        slugify_species(species),
        now.format("%Y%m%d_%H%M%S")
    )
}

/// Oldest and newest observed dates. Pages arrive ordered by observed date
/// descending, so the oldest record is the last one fetched.
pub fn date_range(observations: &[Observation]) -> Option<(String, String)> {
    let newest = observations.first()?;
    let oldest = observations.last()?;
    Some((
        oldest.observed_on.clone().unwrap_or_default(),
        newest.observed_on.clone().unwrap_or_default(),
    ))
}
