use camino::Utf8PathBuf;
use serde_json::{Value, json};

use inat_occurrence_survey::app::{App, ProgressEvent, ProgressSink};
use inat_occurrence_survey::config::{AreaSpec, SurveyRequest};
use inat_occurrence_survey::domain::{PlaceId, TaxonId};
use inat_occurrence_survey::elevation::ElevationClient;
use inat_occurrence_survey::error::SurveyError;
use inat_occurrence_survey::inat::{
    InatClient, ObservationQuery, PlaceCandidate, PlaceDetail, SearchPage, TaxonCandidate,
};
use inat_occurrence_survey::lookup::LabelCatalog;

struct ScriptedInat {
    pages: Vec<SearchPage>,
    fail_on: Option<u32>,
}

impl InatClient for ScriptedInat {
    fn taxa_autocomplete(&self, _query: &str) -> Result<Vec<TaxonCandidate>, SurveyError> {
        Ok(vec![TaxonCandidate {
            id: 47903,
            name: Some("Sedum laxum".to_string()),
            preferred_common_name: Some("roseflower stonecrop".to_string()),
        }])
    }

    fn places_autocomplete(&self, _query: &str) -> Result<Vec<PlaceCandidate>, SurveyError> {
        Ok(vec![PlaceCandidate {
            id: 2757,
            display_name: Some("Siskiyou County, CA, US".to_string()),
        }])
    }

    fn observations_page(
        &self,
        _query: &ObservationQuery,
        page: u32,
    ) -> Result<SearchPage, SurveyError> {
        if self.fail_on == Some(page) {
            return Err(SurveyError::UpstreamStatus {
                status: 500,
                message: "internal error".to_string(),
            });
        }
        Ok(self
            .pages
            .get(page as usize - 1)
            .cloned()
            .unwrap_or_default())
    }

    fn place_detail(&self, id: PlaceId) -> Result<PlaceDetail, SurveyError> {
        Err(SurveyError::InatHttp(format!("no detail for {id}")))
    }
}

struct RidgeElevation;

impl ElevationClient for RidgeElevation {
    fn elevation_feet(&self, _lng: f64, _lat: f64) -> Result<f64, SurveyError> {
        Ok(2460.0)
    }
}

struct SilentSink;

impl ProgressSink for SilentSink {
    fn event(&self, _event: ProgressEvent) {}
}

fn page_from(values: Vec<Value>, total: u64) -> SearchPage {
    let observations = values
        .iter()
        .map(|value| serde_json::from_value(value.clone()).unwrap())
        .collect();
    SearchPage {
        total_results: total,
        observations,
        raw_results: values,
    }
}

fn survey_observation(id: u64, observed_on: &str, quality_grade: &str) -> Value {
    json!({
        "id": id,
        "observed_on": observed_on,
        "created_at": format!("{observed_on}T09:00:00-08:00"),
        "place_guess": "Siskiyou County, CA, US",
        "location": "41.7354,-122.6345",
        "geojson": {"type": "Point", "coordinates": [-122.6345, 41.7354]},
        "positional_accuracy": 50,
        "quality_grade": quality_grade,
        "place_ids": [1, 14, 2757],
        "taxon": {"name": "Sedum laxum", "preferred_common_name": "roseflower stonecrop"},
        "user": {"login": "botanist"}
    })
}

fn request(output_dir: Utf8PathBuf) -> SurveyRequest {
    SurveyRequest {
        species: "Sedum laxum".to_string(),
        area: AreaSpec::PlaceName("Siskiyou".to_string()),
        term_id: None,
        term_value_id: None,
        per_page: 2,
        output_dir,
    }
}

#[test]
fn survey_exports_every_observation_across_pages() {
    let temp = tempfile::tempdir().unwrap();
    let output_dir =
        Utf8PathBuf::from_path_buf(temp.path().join("results")).unwrap();

    let mut first = survey_observation(501, "2023-06-15", "research");
    first["annotations"] =
        json!([{"controlled_attribute_id": 12, "controlled_value_id": 13}]);
    let client = ScriptedInat {
        pages: vec![
            page_from(vec![first, survey_observation(502, "2023-03-02", "research")], 3),
            page_from(vec![survey_observation(503, "2023-03-20", "needs_id")], 3),
        ],
        fail_on: None,
    };
    let app = App::new(LabelCatalog::builtin(), client, RidgeElevation);

    let outcome = app.run(&request(output_dir), &SilentSink).unwrap();

    assert_eq!(outcome.report.taxon_id, TaxonId(47903));
    assert_eq!(outcome.report.search_area, "place 2757");
    assert_eq!(outcome.report.total_reported, 3);
    assert_eq!(outcome.report.total_retrieved, 3);
    assert_eq!(outcome.report.pages_fetched, 2);
    assert!(outcome.report.failure.is_none());
    assert_eq!(outcome.report.annotations.annotated, 1);

    // research-grade rows with tight accuracy land in the accurate bucket,
    // sorted by observed month and day
    let accurate_ids: Vec<u64> = outcome.accurate.iter().map(|r| r.id).collect();
    assert_eq!(accurate_ids, vec![502, 501]);
    let other_ids: Vec<u64> = outcome.other.iter().map(|r| r.id).collect();
    assert_eq!(other_ids, vec![503]);

    let exports = outcome.report.exports.expect("exports written");
    let csv = std::fs::read_to_string(&exports.csv).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[0],
        "id,observed_on,created_at,place_guess,latitude,longitude,\
         positional_accuracy,geoprivacy,taxon_name,common_name,user_login,\
         user_name,quality_grade,annotations,description,url"
    );
    // rows stay in retrieval order, not report order
    assert!(lines[1].starts_with("501,2023-06-15,"));
    assert!(lines[2].starts_with("502,2023-03-02,"));
    assert!(lines[3].starts_with("503,2023-03-20,"));
    assert!(lines[1].contains("\"Siskiyou County, CA, US\""));
    assert!(lines[1].contains("Plant Phenology: Flowering"));

    let raw: Vec<Value> =
        serde_json::from_str(&std::fs::read_to_string(&exports.json).unwrap()).unwrap();
    assert_eq!(raw.len(), 3);
    assert_eq!(raw[0]["id"], json!(501));
}

#[test]
fn survey_keeps_partial_results_when_a_page_fails() {
    let temp = tempfile::tempdir().unwrap();
    let output_dir =
        Utf8PathBuf::from_path_buf(temp.path().join("results")).unwrap();

    let client = ScriptedInat {
        pages: vec![page_from(
            vec![
                survey_observation(601, "2022-07-04", "research"),
                survey_observation(602, "2022-08-09", "casual"),
            ],
            4,
        )],
        fail_on: Some(2),
    };
    let app = App::new(LabelCatalog::builtin(), client, RidgeElevation);

    let outcome = app.run(&request(output_dir), &SilentSink).unwrap();

    let failure = outcome.report.failure.expect("failure recorded");
    assert_eq!(failure.status, 500);
    assert_eq!(failure.page, 2);
    assert_eq!(outcome.report.total_reported, 4);
    assert_eq!(outcome.report.total_retrieved, 2);

    // the prefix fetched before the failure is still exported
    let exports = outcome.report.exports.expect("exports written");
    let csv = std::fs::read_to_string(&exports.csv).unwrap();
    assert_eq!(csv.lines().count(), 3);
}
