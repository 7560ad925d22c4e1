use serde_json::Value;

use crate::cache::CachedHttp;
use crate::domain::ElevationSource;
use crate::error::SurveyError;

const USGS_BASE_URL: &str = "https://epqs.nationalmap.gov/v1/json";
const MACROSTRAT_BASE_URL: &str = "https://macrostrat.org/api/v2/elevation";

// EPQS reports this sentinel instead of an error status for points with no
// coverage.
const USGS_NO_DATA: f64 = -1_000_000.0;

pub trait ElevationClient: Send + Sync {
    fn elevation_feet(&self, lng: f64, lat: f64) -> Result<f64, SurveyError>;
}

#[derive(Clone)]
pub struct UsgsElevationClient {
    http: CachedHttp,
    base_url: String,
}

impl UsgsElevationClient {
    pub fn new(http: CachedHttp) -> Self {
        Self {
            http,
            base_url: USGS_BASE_URL.to_string(),
        }
    }
}

impl ElevationClient for UsgsElevationClient {
    fn elevation_feet(&self, lng: f64, lat: f64) -> Result<f64, SurveyError> {
        let url = format!(
            "{}?x={lng}&y={lat}&wkid=4326&units=Feet&includeDate=false",
            self.base_url
        );
        let payload = get_json(&self.http, &url)?;
        parse_usgs_value(&payload)
    }
}

#[derive(Clone)]
pub struct MacrostratElevationClient {
    http: CachedHttp,
    base_url: String,
}

impl MacrostratElevationClient {
    pub fn new(http: CachedHttp) -> Self {
        Self {
            http,
            base_url: MACROSTRAT_BASE_URL.to_string(),
        }
    }
}

impl ElevationClient for MacrostratElevationClient {
    fn elevation_feet(&self, lng: f64, lat: f64) -> Result<f64, SurveyError> {
        let url = format!("{}?lng={lng}&lat={lat}", self.base_url);
        let payload = get_json(&self.http, &url)?;
        let meters = parse_macrostrat_meters(&payload)?;
        Ok(meters_to_feet(meters))
    }
}

/// Static-dispatch wrapper so the provider can be picked at runtime.
#[derive(Clone)]
pub enum ElevationProvider {
    Usgs(UsgsElevationClient),
    Macrostrat(MacrostratElevationClient),
}

impl ElevationProvider {
    pub fn for_source(source: ElevationSource, http: CachedHttp) -> Self {
        match source {
            ElevationSource::Usgs => ElevationProvider::Usgs(UsgsElevationClient::new(http)),
            ElevationSource::Macrostrat => {
                ElevationProvider::Macrostrat(MacrostratElevationClient::new(http))
            }
        }
    }
}

impl ElevationClient for ElevationProvider {
    fn elevation_feet(&self, lng: f64, lat: f64) -> Result<f64, SurveyError> {
        match self {
            ElevationProvider::Usgs(client) => client.elevation_feet(lng, lat),
            ElevationProvider::Macrostrat(client) => client.elevation_feet(lng, lat),
        }
    }
}

pub fn meters_to_feet(meters: f64) -> f64 {
    (meters * 3.28084).round()
}

fn get_json(http: &CachedHttp, url: &str) -> Result<Value, SurveyError> {
    let response = http.get(url).map_err(SurveyError::ElevationHttp)?;
    if response.status != 200 {
        return Err(SurveyError::ElevationStatus {
            status: response.status,
            message: response.body,
        });
    }
    serde_json::from_str(&response.body).map_err(|err| SurveyError::ElevationLookup(err.to_string()))
}

// EPQS has served the value both as a JSON number and as a decimal string.
pub(crate) fn parse_usgs_value(payload: &Value) -> Result<f64, SurveyError> {
    let value = payload
        .get("value")
        .ok_or_else(|| SurveyError::ElevationLookup("response has no value field".to_string()))?;
    let feet = value
        .as_f64()
        .or_else(|| value.as_str().and_then(|text| text.trim().parse().ok()))
        .ok_or_else(|| SurveyError::ElevationLookup(format!("unusable value: {value}")))?;
    if feet <= USGS_NO_DATA {
        return Err(SurveyError::ElevationLookup(
            "no elevation data for this point".to_string(),
        ));
    }
    Ok(feet)
}

pub(crate) fn parse_macrostrat_meters(payload: &Value) -> Result<f64, SurveyError> {
    payload
        .get("success")
        .and_then(|v| v.get("data"))
        .and_then(|v| v.as_array())
        .and_then(|rows| rows.first())
        .and_then(|row| row.get("elevation"))
        .and_then(|v| v.as_f64())
        .ok_or_else(|| SurveyError::ElevationLookup("response has no elevation".to_string()))
}
