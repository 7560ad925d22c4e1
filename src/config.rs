use std::fs;
use std::path::PathBuf;

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

use crate::domain::{BoundingBox, ElevationSource};
use crate::error::SurveyError;
use crate::inat::DEFAULT_PER_PAGE;

pub const DEFAULT_OUTPUT_DIR: &str = "results";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SurveyConfig {
    #[serde(default)]
    pub species: Option<String>,
    #[serde(default)]
    pub place: Option<String>,
    #[serde(default)]
    pub bbox: Option<String>,
    #[serde(default)]
    pub term_id: Option<u32>,
    #[serde(default)]
    pub term_value_id: Option<u32>,
    #[serde(default)]
    pub elevation_provider: Option<ElevationSource>,
    #[serde(default)]
    pub per_page: Option<u32>,
    #[serde(default)]
    pub output_dir: Option<String>,
    #[serde(default)]
    pub cache_dir: Option<String>,
    #[serde(default)]
    pub cache_ttl_secs: Option<u64>,
}

#[derive(Debug, Clone)]
pub enum AreaSpec {
    PlaceName(String),
    Bbox(BoundingBox),
}

#[derive(Debug, Clone)]
pub struct SurveyRequest {
    pub species: String,
    pub area: AreaSpec,
    pub term_id: Option<u32>,
    pub term_value_id: Option<u32>,
    pub per_page: u32,
    pub output_dir: Utf8PathBuf,
}

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn resolve(path: Option<&str>) -> Result<SurveyConfig, SurveyError> {
        let config_path = match path {
            Some(path) => PathBuf::from(path),
            None => PathBuf::from("inat-survey.json"),
        };

        if path.is_none() && !config_path.exists() {
            return Err(SurveyError::MissingConfig);
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|_| SurveyError::ConfigRead(config_path.clone()))?;
        serde_json::from_str(&content).map_err(|err| SurveyError::ConfigParse(err.to_string()))
    }
}

impl SurveyConfig {
    /// Field-wise overlay with `overrides` winning. Supplying either area
    /// field in the overrides replaces the file's area entirely, so a CLI
    /// `--bbox` never mixes with a configured place name.
    pub fn merged(self, overrides: SurveyConfig) -> SurveyConfig {
        let area_overridden = overrides.place.is_some() || overrides.bbox.is_some();
        SurveyConfig {
            species: overrides.species.or(self.species),
            place: if area_overridden {
                overrides.place
            } else {
                self.place
            },
            bbox: if area_overridden {
                overrides.bbox
            } else {
                self.bbox
            },
            term_id: overrides.term_id.or(self.term_id),
            term_value_id: overrides.term_value_id.or(self.term_value_id),
            elevation_provider: overrides.elevation_provider.or(self.elevation_provider),
            per_page: overrides.per_page.or(self.per_page),
            output_dir: overrides.output_dir.or(self.output_dir),
            cache_dir: overrides.cache_dir.or(self.cache_dir),
            cache_ttl_secs: overrides.cache_ttl_secs.or(self.cache_ttl_secs),
        }
    }

    pub fn into_request(self) -> Result<SurveyRequest, SurveyError> {
        let species = self
            .species
            .ok_or_else(|| SurveyError::InvalidRequest("a species name is required".to_string()))?;
        let area = match (self.place, self.bbox) {
            (Some(_), Some(_)) => {
                return Err(SurveyError::InvalidRequest(
                    "place and bbox are mutually exclusive".to_string(),
                ));
            }
            (Some(place), None) => AreaSpec::PlaceName(place),
            (None, Some(bbox)) => AreaSpec::Bbox(bbox.parse()?),
            (None, None) => {
                return Err(SurveyError::InvalidRequest(
                    "a place name or bounding box is required".to_string(),
                ));
            }
        };
        Ok(SurveyRequest {
            species,
            area,
            term_id: self.term_id,
            term_value_id: self.term_value_id,
            per_page: self.per_page.unwrap_or(DEFAULT_PER_PAGE),
            output_dir: Utf8PathBuf::from(
                self.output_dir
                    .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string()),
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn cli_fields_win_over_file() {
        let file = SurveyConfig {
            species: Some("Sedum laxum".to_string()),
            place: Some("California".to_string()),
            per_page: Some(50),
            ..SurveyConfig::default()
        };
        let overrides = SurveyConfig {
            species: Some("Arabis aculeolata".to_string()),
            ..SurveyConfig::default()
        };

        let merged = file.merged(overrides);
        assert_eq!(merged.species.as_deref(), Some("Arabis aculeolata"));
        assert_eq!(merged.place.as_deref(), Some("California"));
        assert_eq!(merged.per_page, Some(50));
    }

    #[test]
    fn override_area_replaces_file_area() {
        let file = SurveyConfig {
            species: Some("Sedum laxum".to_string()),
            place: Some("California".to_string()),
            ..SurveyConfig::default()
        };
        let overrides = SurveyConfig {
            bbox: Some("41.0,-123.0,42.0,-122.0".to_string()),
            ..SurveyConfig::default()
        };

        let merged = file.merged(overrides);
        assert!(merged.place.is_none());
        let request = merged.into_request().unwrap();
        assert_matches!(request.area, AreaSpec::Bbox(_));
    }

    #[test]
    fn request_requires_species_and_area() {
        let missing_species = SurveyConfig {
            place: Some("California".to_string()),
            ..SurveyConfig::default()
        };
        assert_matches!(
            missing_species.into_request(),
            Err(SurveyError::InvalidRequest(_))
        );

        let missing_area = SurveyConfig {
            species: Some("Sedum laxum".to_string()),
            ..SurveyConfig::default()
        };
        assert_matches!(
            missing_area.into_request(),
            Err(SurveyError::InvalidRequest(_))
        );
    }

    #[test]
    fn request_rejects_both_area_forms() {
        let config = SurveyConfig {
            species: Some("Sedum laxum".to_string()),
            place: Some("California".to_string()),
            bbox: Some("41.0,-123.0,42.0,-122.0".to_string()),
            ..SurveyConfig::default()
        };
        assert_matches!(config.into_request(), Err(SurveyError::InvalidRequest(_)));
    }

    #[test]
    fn request_applies_defaults() {
        let config = SurveyConfig {
            species: Some("Sedum laxum".to_string()),
            place: Some("California".to_string()),
            ..SurveyConfig::default()
        };
        let request = config.into_request().unwrap();
        assert_eq!(request.per_page, DEFAULT_PER_PAGE);
        assert_eq!(request.output_dir.as_str(), DEFAULT_OUTPUT_DIR);
    }

    #[test]
    fn resolve_reads_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("survey.json");
        fs::write(
            &path,
            r#"{"species": "Sedum laxum", "place": "Siskiyou", "term_id": 12}"#,
        )
        .unwrap();

        let config = ConfigLoader::resolve(path.to_str()).unwrap();
        assert_eq!(config.species.as_deref(), Some("Sedum laxum"));
        assert_eq!(config.term_id, Some(12));
    }

    #[test]
    fn resolve_missing_explicit_path_is_read_error() {
        let result = ConfigLoader::resolve(Some("/nonexistent/survey.json"));
        assert_matches!(result, Err(SurveyError::ConfigRead(_)));
    }
}
