use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum SurveyError {
    #[error("no taxon matched species name: {0}")]
    TaxonNotFound(String),

    #[error("no place matched name: {0}")]
    PlaceNotFound(String),

    #[error("invalid bounding box: {0}")]
    InvalidBoundingBox(String),

    #[error("invalid survey request: {0}")]
    InvalidRequest(String),

    #[error("missing config file inat-survey.json in current directory")]
    MissingConfig,

    #[error("failed to read config file at {0}")]
    ConfigRead(PathBuf),

    #[error("failed to parse JSON config: {0}")]
    ConfigParse(String),

    #[error("failed to build http client: {0}")]
    HttpClient(String),

    #[error("iNaturalist request failed: {0}")]
    InatHttp(String),

    #[error("iNaturalist returned status {status}: {message}")]
    UpstreamStatus { status: u16, message: String },

    #[error("elevation request failed: {0}")]
    ElevationHttp(String),

    #[error("elevation service returned status {status}: {message}")]
    ElevationStatus { status: u16, message: String },

    #[error("elevation response unusable: {0}")]
    ElevationLookup(String),

    #[error("csv export failed: {0}")]
    Csv(String),

    #[error("filesystem error: {0}")]
    Filesystem(String),
}
