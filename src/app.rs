use std::collections::BTreeMap;
use std::time::Duration;

use chrono::Local;
use serde::Serialize;

use crate::classify::{analyze_annotations, partition, quality_grade_tally};
use crate::config::{AreaSpec, SurveyRequest};
use crate::domain::{PlaceId, SearchArea, TaxonId};
use crate::elevation::ElevationClient;
use crate::enrich::{EnrichedLocation, enrich};
use crate::error::SurveyError;
use crate::fetch::{UpstreamFailure, fetch_all};
use crate::inat::{InatClient, ObservationQuery};
use crate::lookup::LabelCatalog;
use crate::report::{
    date_range, export_basename, sort_by_observed_date, write_csv, write_json_raw,
};
use crate::resolve::{resolve_place, resolve_taxon};

#[derive(Debug, Clone)]
pub struct ProgressEvent {
    pub message: String,
    pub elapsed: Option<Duration>,
}

pub trait ProgressSink {
    fn event(&self, event: ProgressEvent);
}

#[derive(Debug, Clone, Serialize)]
pub struct DateRange {
    pub oldest: String,
    pub newest: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnnotationSummary {
    pub annotated: usize,
    pub percentage: f64,
    pub breakdown: BTreeMap<String, BTreeMap<String, u64>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BackfilledPlace {
    pub id: u64,
    pub name: Option<String>,
    pub bbox_area: Option<f64>,
    pub place_type: Option<u32>,
    pub place_type_label: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportRecord {
    pub csv: String,
    pub json: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClearResult {
    pub cleared: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PruneResult {
    pub removed: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SurveyReport {
    pub species: String,
    pub taxon_id: TaxonId,
    pub search_area: String,
    pub generated_at: String,
    pub total_reported: u64,
    pub total_retrieved: usize,
    pub pages_fetched: u32,
    pub failure: Option<UpstreamFailure>,
    pub date_range: Option<DateRange>,
    pub quality_grades: BTreeMap<String, u64>,
    pub annotations: AnnotationSummary,
    pub accurate_count: usize,
    pub other_count: usize,
    pub backfilled_places: Vec<BackfilledPlace>,
    pub missing_term_ids: Vec<u32>,
    pub missing_value_ids: Vec<u32>,
    pub exports: Option<ExportRecord>,
}

#[derive(Debug, Clone)]
pub struct SurveyOutcome {
    pub report: SurveyReport,
    pub accurate: Vec<EnrichedLocation>,
    pub other: Vec<EnrichedLocation>,
}

pub struct App<C: InatClient, E: ElevationClient> {
    catalog: LabelCatalog,
    client: C,
    elevation: E,
}

impl<C: InatClient, E: ElevationClient> App<C, E> {
    pub fn new(catalog: LabelCatalog, client: C, elevation: E) -> Self {
        Self {
            catalog,
            client,
            elevation,
        }
    }

    pub fn run(
        &self,
        request: &SurveyRequest,
        sink: &dyn ProgressSink,
    ) -> Result<SurveyOutcome, SurveyError> {
        let taxon_id = resolve_taxon(&self.client, &request.species, sink)?;
        let area = match &request.area {
            AreaSpec::PlaceName(name) => {
                SearchArea::Place(resolve_place(&self.client, name, sink)?)
            }
            AreaSpec::Bbox(bbox) => SearchArea::Bbox(*bbox),
        };

        let query = ObservationQuery {
            taxon_id,
            area: area.clone(),
            term_id: request.term_id,
            term_value_id: request.term_value_id,
            per_page: request.per_page,
        };

        sink.event(ProgressEvent {
            message: format!("phase=Fetch; observations of {}", request.species),
            elapsed: None,
        });
        sink.event(ProgressEvent {
            message: "inat.request".to_string(),
            elapsed: None,
        });
        let start = std::time::Instant::now();
        let fetched = fetch_all(&self.client, &query, sink)?;
        let latency = start.elapsed().as_millis();
        sink.event(ProgressEvent {
            message: format!("inat.response latency_ms={latency}"),
            elapsed: None,
        });

        sink.event(ProgressEvent {
            message: format!("phase=Enrich; {} observations", fetched.observations.len()),
            elapsed: None,
        });
        let enriched: Vec<EnrichedLocation> = fetched
            .observations
            .iter()
            .map(|observation| enrich(observation, &self.catalog, &self.elevation))
            .collect();

        let annotation_stats = analyze_annotations(&fetched.observations, &self.catalog);
        let quality_grades = quality_grade_tally(&fetched.observations);
        let (mut accurate, mut other) = partition(enriched);
        sort_by_observed_date(&mut accurate);
        sort_by_observed_date(&mut other);

        let backfilled_places = self.backfill_missing_places(sink);

        let exports = if fetched.observations.is_empty() {
            None
        } else {
            sink.event(ProgressEvent {
                message: "phase=Export; writing csv and json".to_string(),
                elapsed: None,
            });
            let basename = export_basename(&request.species, Local::now());
            let csv_path = request.output_dir.join(format!("{basename}.csv"));
            let json_path = request.output_dir.join(format!("{basename}.json"));
            write_csv(&csv_path, &fetched.observations, &self.catalog)?;
            write_json_raw(&json_path, &fetched.raw_results)?;
            sink.event(ProgressEvent {
                message: format!("Data saved to {csv_path}"),
                elapsed: None,
            });
            sink.event(ProgressEvent {
                message: format!("Data saved to {json_path}"),
                elapsed: None,
            });
            Some(ExportRecord {
                csv: csv_path.into_string(),
                json: json_path.into_string(),
            })
        };

        let annotations = AnnotationSummary {
            annotated: annotation_stats.annotated_count(),
            percentage: annotation_stats.percentage(),
            breakdown: annotation_stats.breakdown,
        };

        let report = SurveyReport {
            species: request.species.clone(),
            taxon_id,
            search_area: area.to_string(),
            generated_at: iso_timestamp(),
            total_reported: fetched.total_reported,
            total_retrieved: fetched.observations.len(),
            pages_fetched: fetched.pages_fetched,
            failure: fetched.failure,
            date_range: date_range(&fetched.observations)
                .map(|(oldest, newest)| DateRange { oldest, newest }),
            quality_grades,
            annotations,
            accurate_count: accurate.len(),
            other_count: other.len(),
            backfilled_places,
            missing_term_ids: self.catalog.missing_term_ids(),
            missing_value_ids: self.catalog.missing_value_ids(),
            exports,
        };

        Ok(SurveyOutcome {
            report,
            accurate,
            other,
        })
    }

    /// One-shot backfill for place ids the catalog did not know. Each id is
    /// fetched once; a failed fetch is logged and recorded without a retry.
    fn backfill_missing_places(&self, sink: &dyn ProgressSink) -> Vec<BackfilledPlace> {
        let missing = self.catalog.missing_place_ids();
        if missing.is_empty() {
            return Vec::new();
        }

        sink.event(ProgressEvent {
            message: format!("phase=Backfill; {} unknown place ids", missing.len()),
            elapsed: None,
        });

        let mut backfilled = Vec::new();
        for id in missing {
            match self.client.place_detail(PlaceId(id)) {
                Ok(detail) => {
                    sink.event(ProgressEvent {
                        message: format!(
                            "place table row: StaticPlace {{ id: {}, name: {:?}, bbox_area: {:?}, place_type: {:?} }},",
                            detail.id,
                            detail.name.as_deref().unwrap_or(""),
                            detail.bbox_area.unwrap_or(0.0),
                            detail.place_type,
                        ),
                        elapsed: None,
                    });
                    let place_type_label = detail
                        .place_type
                        .and_then(|code| self.catalog.place_type_label(code))
                        .map(str::to_string);
                    backfilled.push(BackfilledPlace {
                        id: detail.id,
                        name: detail.name,
                        bbox_area: detail.bbox_area,
                        place_type: detail.place_type,
                        place_type_label,
                    });
                }
                Err(err) => {
                    tracing::warn!("place backfill failed for {}: {}", id, err);
                    backfilled.push(BackfilledPlace {
                        id,
                        name: None,
                        bbox_area: None,
                        place_type: None,
                        place_type_label: None,
                    });
                }
            }
        }
        backfilled
    }
}

fn iso_timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use camino::Utf8PathBuf;

    use super::*;
    use crate::inat::{
        Observation, PlaceCandidate, PlaceDetail, SearchPage, TaxonCandidate,
    };

    struct MockInat {
        pages: Vec<SearchPage>,
        place_detail_calls: Mutex<Vec<u64>>,
    }

    impl MockInat {
        fn with_pages(pages: Vec<SearchPage>) -> Self {
            Self {
                pages,
                place_detail_calls: Mutex::new(Vec::new()),
            }
        }
    }

    impl InatClient for MockInat {
        fn taxa_autocomplete(&self, _query: &str) -> Result<Vec<TaxonCandidate>, SurveyError> {
            Ok(vec![TaxonCandidate {
                id: 54321,
                name: Some("Sedum laxum".to_string()),
                preferred_common_name: None,
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
            Ok(self
                .pages
                .get(page as usize - 1)
                .cloned()
                .unwrap_or_default())
        }

        fn place_detail(&self, id: PlaceId) -> Result<PlaceDetail, SurveyError> {
            self.place_detail_calls.lock().unwrap().push(id.0);
            Ok(PlaceDetail {
                id: id.0,
                name: Some("Shasta Valley".to_string()),
                bbox_area: Some(0.5),
                place_type: Some(9),
            })
        }
    }

    struct FixedElevation;

    impl ElevationClient for FixedElevation {
        fn elevation_feet(&self, _lng: f64, _lat: f64) -> Result<f64, SurveyError> {
            Ok(2000.0)
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        messages: Mutex<Vec<String>>,
    }

    impl ProgressSink for RecordingSink {
        fn event(&self, event: ProgressEvent) {
            self.messages.lock().unwrap().push(event.message);
        }
    }

    fn observation(id: u64, place_ids: Vec<u64>) -> Observation {
        Observation {
            id,
            observed_on: Some("2023-06-15".to_string()),
            location: Some("41.7,-122.6".to_string()),
            place_ids,
            ..Observation::default()
        }
    }

    fn page(observations: Vec<Observation>, total: u64) -> SearchPage {
        let raw_results = observations
            .iter()
            .map(|observation| serde_json::json!({"id": observation.id}))
            .collect();
        SearchPage {
            total_results: total,
            observations,
            raw_results,
        }
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
    fn run_retrieves_all_pages_and_exports() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        let client = MockInat::with_pages(vec![
            page(vec![observation(1, vec![1]), observation(2, vec![1])], 3),
            page(vec![observation(3, vec![1])], 3),
        ]);
        let app = App::new(LabelCatalog::builtin(), client, FixedElevation);
        let sink = RecordingSink::default();

        let outcome = app.run(&request(output_dir), &sink).unwrap();

        assert_eq!(outcome.report.taxon_id, TaxonId(54321));
        assert_eq!(outcome.report.total_retrieved, 3);
        assert_eq!(outcome.report.pages_fetched, 2);
        assert!(outcome.report.failure.is_none());
        assert_eq!(
            outcome.accurate.len() + outcome.other.len(),
            outcome.report.total_retrieved
        );
        let exports = outcome.report.exports.expect("exports written");
        assert!(std::path::Path::new(&exports.csv).exists());
        assert!(std::path::Path::new(&exports.json).exists());
    }

    #[test]
    fn run_skips_export_when_nothing_found() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        let client = MockInat::with_pages(vec![page(Vec::new(), 0)]);
        let app = App::new(LabelCatalog::builtin(), client, FixedElevation);
        let sink = RecordingSink::default();

        let outcome = app.run(&request(output_dir), &sink).unwrap();

        assert_eq!(outcome.report.total_retrieved, 0);
        assert!(outcome.report.exports.is_none());
        assert!(outcome.report.date_range.is_none());
    }

    #[test]
    fn backfill_fetches_each_unknown_place_once() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        let client = MockInat::with_pages(vec![page(
            vec![
                observation(1, vec![999_999]),
                observation(2, vec![999_999]),
            ],
            2,
        )]);
        let app = App::new(LabelCatalog::builtin(), client, FixedElevation);
        let sink = RecordingSink::default();

        let outcome = app.run(&request(output_dir), &sink).unwrap();

        assert_eq!(
            *app.client.place_detail_calls.lock().unwrap(),
            vec![999_999]
        );
        assert_eq!(outcome.report.backfilled_places.len(), 1);
        assert_eq!(
            outcome.report.backfilled_places[0].name.as_deref(),
            Some("Shasta Valley")
        );
        let messages = sink.messages.lock().unwrap();
        assert!(
            messages
                .iter()
                .any(|message| message.starts_with("place table row: StaticPlace {"))
        );
    }
}
