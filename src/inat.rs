use std::time::Duration;

use reqwest::Url;
use serde::Deserialize;
use serde_json::Value;

use crate::cache::CachedHttp;
use crate::domain::{PlaceId, QualityGrade, SearchArea, TaxonId};
use crate::error::SurveyError;

pub const BASE_URL: &str = "https://api.inaturalist.org/v1";
pub const DEFAULT_PER_PAGE: u32 = 200;

// Observation pages go stale quickly while a survey is being refined, so they
// get a much shorter lifetime than the autocomplete and place lookups.
pub const OBSERVATIONS_PAGE_TTL: Duration = Duration::from_secs(30);

const AUTOCOMPLETE_PER_PAGE: u32 = 10;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Taxon {
    pub name: Option<String>,
    pub preferred_common_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct User {
    pub login: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ObservedOnDetails {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct GeoJson {
    #[serde(default)]
    pub coordinates: Vec<f64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Annotation {
    pub controlled_attribute_id: Option<u32>,
    pub controlled_value_id: Option<u32>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Observation {
    pub id: u64,
    pub observed_on: Option<String>,
    pub observed_on_details: Option<ObservedOnDetails>,
    pub created_at: Option<String>,
    pub place_guess: Option<String>,
    pub location: Option<String>,
    pub geojson: Option<GeoJson>,
    pub positional_accuracy: Option<f64>,
    pub geoprivacy: Option<String>,
    #[serde(default)]
    pub place_ids: Vec<u64>,
    pub quality_grade: Option<QualityGrade>,
    pub taxon: Option<Taxon>,
    pub user: Option<User>,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    pub description: Option<String>,
}

impl Observation {
    pub fn url(&self) -> String {
        format!("https://www.inaturalist.org/observations/{}", self.id)
    }

    /// Coordinates as (longitude, latitude). The geojson point is
    /// `[lng, lat]`; the `location` string is `"lat,lng"`.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        if let Some(geo) = &self.geojson {
            if let [lng, lat] = geo.coordinates[..] {
                return Some((lng, lat));
            }
        }
        let location = self.location.as_deref()?;
        let (lat, lng) = location.split_once(',')?;
        Some((lng.parse().ok()?, lat.parse().ok()?))
    }

    pub fn observed_month_day(&self) -> (Option<u32>, Option<u32>) {
        if let Some(details) = &self.observed_on_details {
            if details.month.is_some() || details.day.is_some() {
                return (details.month, details.day);
            }
        }
        if let Some(date) = &self.observed_on {
            let mut parts = date.split('-');
            let _year = parts.next();
            let month = parts.next().and_then(|part| part.parse().ok());
            let day = parts.next().and_then(|part| part.parse().ok());
            return (month, day);
        }
        (None, None)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TaxonCandidate {
    pub id: u64,
    pub name: Option<String>,
    pub preferred_common_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaceCandidate {
    pub id: u64,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaceDetail {
    pub id: u64,
    pub name: Option<String>,
    pub bbox_area: Option<f64>,
    pub place_type: Option<u32>,
}

#[derive(Debug, Clone, Default)]
pub struct SearchPage {
    pub total_results: u64,
    pub observations: Vec<Observation>,
    pub raw_results: Vec<Value>,
}

#[derive(Debug, Clone)]
pub struct ObservationQuery {
    pub taxon_id: TaxonId,
    pub area: SearchArea,
    pub term_id: Option<u32>,
    pub term_value_id: Option<u32>,
    pub per_page: u32,
}

impl ObservationQuery {
    pub fn params(&self, page: u32) -> Vec<(&'static str, String)> {
        let mut params = vec![("taxon_id", self.taxon_id.to_string())];
        match &self.area {
            SearchArea::Place(id) => params.push(("place_id", id.to_string())),
            SearchArea::Bbox(bbox) => {
                // A bounding box query still needs place_id=any so the API
                // does not scope it to the default place.
                params.push(("place_id", "any".to_string()));
                params.push(("swlat", bbox.swlat.to_string()));
                params.push(("swlng", bbox.swlng.to_string()));
                params.push(("nelat", bbox.nelat.to_string()));
                params.push(("nelng", bbox.nelng.to_string()));
            }
        }
        params.push(("per_page", self.per_page.to_string()));
        params.push(("page", page.to_string()));
        params.push(("order_by", "observed_on".to_string()));
        params.push(("order", "desc".to_string()));
        if let Some(term_id) = self.term_id {
            params.push(("term_id", term_id.to_string()));
        }
        if let Some(value_id) = self.term_value_id {
            params.push(("term_value_id", value_id.to_string()));
        }
        params
    }
}

pub trait InatClient: Send + Sync {
    fn taxa_autocomplete(&self, query: &str) -> Result<Vec<TaxonCandidate>, SurveyError>;
    fn places_autocomplete(&self, query: &str) -> Result<Vec<PlaceCandidate>, SurveyError>;
    fn observations_page(
        &self,
        query: &ObservationQuery,
        page: u32,
    ) -> Result<SearchPage, SurveyError>;
    fn place_detail(&self, id: PlaceId) -> Result<PlaceDetail, SurveyError>;
}

#[derive(Clone)]
pub struct InatHttpClient {
    http: CachedHttp,
    base_url: String,
}

impl InatHttpClient {
    pub fn new(http: CachedHttp) -> Self {
        Self {
            http,
            base_url: BASE_URL.to_string(),
        }
    }

    fn endpoint_url(&self, path: &str, params: &[(&str, String)]) -> Result<String, SurveyError> {
        let url = Url::parse_with_params(&format!("{}/{}", self.base_url, path), params)
            .map_err(|err| SurveyError::InatHttp(err.to_string()))?;
        Ok(url.into())
    }

    fn get_json(&self, url: &str, ttl: Option<Duration>) -> Result<Value, SurveyError> {
        let response = match ttl {
            Some(ttl) => self.http.get_with_ttl(url, ttl),
            None => self.http.get(url),
        }
        .map_err(SurveyError::InatHttp)?;
        if response.status != 200 {
            return Err(SurveyError::UpstreamStatus {
                status: response.status,
                message: response.body,
            });
        }
        serde_json::from_str(&response.body).map_err(|err| SurveyError::InatHttp(err.to_string()))
    }
}

impl InatClient for InatHttpClient {
    fn taxa_autocomplete(&self, query: &str) -> Result<Vec<TaxonCandidate>, SurveyError> {
        let url = self.endpoint_url(
            "taxa/autocomplete",
            &[
                ("q", query.to_string()),
                ("per_page", AUTOCOMPLETE_PER_PAGE.to_string()),
            ],
        )?;
        let payload = self.get_json(&url, None)?;
        parse_results(&payload)
    }

    fn places_autocomplete(&self, query: &str) -> Result<Vec<PlaceCandidate>, SurveyError> {
        let url = self.endpoint_url(
            "places/autocomplete",
            &[
                ("q", query.to_string()),
                ("per_page", AUTOCOMPLETE_PER_PAGE.to_string()),
            ],
        )?;
        let payload = self.get_json(&url, None)?;
        parse_results(&payload)
    }

    fn observations_page(
        &self,
        query: &ObservationQuery,
        page: u32,
    ) -> Result<SearchPage, SurveyError> {
        let url = self.endpoint_url("observations", &query.params(page))?;
        let payload = self.get_json(&url, Some(OBSERVATIONS_PAGE_TTL))?;
        parse_search_page(&payload)
    }

    fn place_detail(&self, id: PlaceId) -> Result<PlaceDetail, SurveyError> {
        let url = format!("{}/places/{}", self.base_url, id);
        let payload = self.get_json(&url, None)?;
        parse_place_detail(&payload)
    }
}

fn parse_results<T: serde::de::DeserializeOwned>(payload: &Value) -> Result<Vec<T>, SurveyError> {
    let results = match payload.get("results").and_then(|v| v.as_array()) {
        Some(results) => results,
        None => return Ok(Vec::new()),
    };
    results
        .iter()
        .map(|value| {
            serde_json::from_value(value.clone())
                .map_err(|err| SurveyError::InatHttp(err.to_string()))
        })
        .collect()
}

pub(crate) fn parse_search_page(payload: &Value) -> Result<SearchPage, SurveyError> {
    let total_results = payload
        .get("total_results")
        .and_then(|v| v.as_u64())
        .unwrap_or(0);
    let raw_results = payload
        .get("results")
        .and_then(|v| v.as_array())
        .cloned()
        .unwrap_or_default();
    let observations = raw_results
        .iter()
        .map(|value| {
            serde_json::from_value(value.clone())
                .map_err(|err| SurveyError::InatHttp(err.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(SearchPage {
        total_results,
        observations,
        raw_results,
    })
}

pub(crate) fn parse_place_detail(payload: &Value) -> Result<PlaceDetail, SurveyError> {
    let first = payload
        .get("results")
        .and_then(|v| v.as_array())
        .and_then(|results| results.first())
        .cloned()
        .ok_or_else(|| SurveyError::InatHttp("place lookup returned no results".to_string()))?;
    serde_json::from_value(first).map_err(|err| SurveyError::InatHttp(err.to_string()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::BoundingBox;

    #[test]
    fn observation_deserializes_from_api_payload() {
        let payload = json!({
            "id": 161234567_u64,
            "observed_on": "2023-06-15",
            "observed_on_details": {"year": 2023, "month": 6, "day": 15},
            "created_at": "2023-06-15T10:22:31-07:00",
            "place_guess": "Siskiyou County, CA, US",
            "location": "41.7354,-122.6345",
            "geojson": {"type": "Point", "coordinates": [-122.6345, 41.7354]},
            "positional_accuracy": 12,
            "quality_grade": "research",
            "place_ids": [1, 14, 2757],
            "taxon": {"name": "Amelanchier alnifolia", "preferred_common_name": "Saskatoon serviceberry"},
            "user": {"login": "naturewatcher", "name": null},
            "annotations": [
                {"controlled_attribute_id": 12, "controlled_value_id": 14}
            ],
            "unrecognized_field": {"ignored": true}
        });
        let obs: Observation = serde_json::from_value(payload).unwrap();
        assert_eq!(obs.id, 161234567);
        assert_eq!(obs.quality_grade, Some(QualityGrade::Research));
        assert_eq!(obs.place_ids, vec![1, 14, 2757]);
        assert_eq!(obs.positional_accuracy, Some(12.0));
        assert_eq!(obs.geoprivacy, None);
        assert_eq!(obs.annotations.len(), 1);
        assert_eq!(obs.url(), "https://www.inaturalist.org/observations/161234567");
    }

    #[test]
    fn sparse_observation_deserializes_with_defaults() {
        let obs: Observation = serde_json::from_value(json!({"id": 7})).unwrap();
        assert_eq!(obs.id, 7);
        assert!(obs.place_ids.is_empty());
        assert!(obs.annotations.is_empty());
        assert_eq!(obs.coordinates(), None);
        assert_eq!(obs.observed_month_day(), (None, None));
    }

    #[test]
    fn coordinates_prefer_geojson_point() {
        let obs = Observation {
            id: 1,
            location: Some("40.0,-120.0".to_string()),
            geojson: Some(GeoJson {
                coordinates: vec![-122.6345, 41.7354],
            }),
            ..Observation::default()
        };
        assert_eq!(obs.coordinates(), Some((-122.6345, 41.7354)));
    }

    #[test]
    fn coordinates_fall_back_to_location_string() {
        let obs = Observation {
            id: 1,
            location: Some("41.7354,-122.6345".to_string()),
            ..Observation::default()
        };
        // location is lat-first, the returned pair is (lng, lat)
        assert_eq!(obs.coordinates(), Some((-122.6345, 41.7354)));

        let malformed = Observation {
            id: 2,
            location: Some("41.7354".to_string()),
            ..Observation::default()
        };
        assert_eq!(malformed.coordinates(), None);
    }

    #[test]
    fn observed_month_day_prefers_details() {
        let obs = Observation {
            id: 1,
            observed_on: Some("2023-06-15".to_string()),
            observed_on_details: Some(ObservedOnDetails {
                year: Some(2023),
                month: Some(7),
                day: Some(2),
            }),
            ..Observation::default()
        };
        assert_eq!(obs.observed_month_day(), (Some(7), Some(2)));

        let from_string = Observation {
            id: 2,
            observed_on: Some("2021-11-03".to_string()),
            ..Observation::default()
        };
        assert_eq!(from_string.observed_month_day(), (Some(11), Some(3)));

        let year_only = Observation {
            id: 3,
            observed_on: Some("2021".to_string()),
            ..Observation::default()
        };
        assert_eq!(year_only.observed_month_day(), (None, None));
    }

    #[test]
    fn place_query_params() {
        let query = ObservationQuery {
            taxon_id: TaxonId(57668),
            area: SearchArea::Place(PlaceId(2757)),
            term_id: None,
            term_value_id: None,
            per_page: DEFAULT_PER_PAGE,
        };
        let params = query.params(3);
        assert_eq!(
            params,
            vec![
                ("taxon_id", "57668".to_string()),
                ("place_id", "2757".to_string()),
                ("per_page", "200".to_string()),
                ("page", "3".to_string()),
                ("order_by", "observed_on".to_string()),
                ("order", "desc".to_string()),
            ]
        );
    }

    #[test]
    fn bbox_query_params_include_corners_and_any_place() {
        let bbox: BoundingBox = "41.18,-123.72,42.0,-121.45".parse().unwrap();
        let query = ObservationQuery {
            taxon_id: TaxonId(57668),
            area: SearchArea::Bbox(bbox),
            term_id: Some(12),
            term_value_id: Some(14),
            per_page: 200,
        };
        let params = query.params(1);
        assert!(params.contains(&("place_id", "any".to_string())));
        assert!(params.contains(&("swlat", "41.18".to_string())));
        assert!(params.contains(&("swlng", "-123.72".to_string())));
        assert!(params.contains(&("nelat", "42".to_string())));
        assert!(params.contains(&("nelng", "-121.45".to_string())));
        assert!(params.contains(&("term_id", "12".to_string())));
        assert!(params.contains(&("term_value_id", "14".to_string())));
    }

    #[test]
    fn search_page_parses_totals_and_results() {
        let payload = json!({
            "total_results": 412,
            "results": [
                {"id": 1, "quality_grade": "research"},
                {"id": 2, "quality_grade": "casual"}
            ]
        });
        let page = parse_search_page(&payload).unwrap();
        assert_eq!(page.total_results, 412);
        assert_eq!(page.observations.len(), 2);
        assert_eq!(page.raw_results.len(), 2);
        assert_eq!(page.observations[1].id, 2);
    }

    #[test]
    fn empty_page_parses_cleanly() {
        let page = parse_search_page(&json!({"total_results": 0, "results": []})).unwrap();
        assert_eq!(page.total_results, 0);
        assert!(page.observations.is_empty());
    }

    #[test]
    fn place_detail_takes_first_result() {
        let payload = json!({
            "results": [
                {"id": 2757, "name": "Siskiyou", "bbox_area": 1.99, "place_type": 9},
                {"id": 999, "name": "Other"}
            ]
        });
        let detail = parse_place_detail(&payload).unwrap();
        assert_eq!(detail.id, 2757);
        assert_eq!(detail.name.as_deref(), Some("Siskiyou"));
        assert_eq!(detail.place_type, Some(9));

        let err = parse_place_detail(&json!({"results": []})).unwrap_err();
        assert!(matches!(err, SurveyError::InatHttp(_)));
    }
}
