use serde::Serialize;
use serde_json::Value;

use crate::app::{ProgressEvent, ProgressSink};
use crate::error::SurveyError;
use crate::inat::{InatClient, Observation, ObservationQuery};

#[derive(Debug, Clone, Serialize)]
pub struct UpstreamFailure {
    pub status: u16,
    pub page: u32,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct FetchOutcome {
    pub observations: Vec<Observation>,
    pub raw_results: Vec<Value>,
    pub total_reported: u64,
    pub pages_fetched: u32,
    pub failure: Option<UpstreamFailure>,
}

/// Walks the paginated observation search until the server-reported total is
/// accumulated or a page comes back empty. A non-success page status ends the
/// walk and keeps the prefix fetched so far; transport errors propagate.
pub fn fetch_all<C: InatClient>(
    client: &C,
    query: &ObservationQuery,
    sink: &dyn ProgressSink,
) -> Result<FetchOutcome, SurveyError> {
    let mut outcome = FetchOutcome::default();
    let mut total_results: Option<u64> = None;
    let mut page = 1u32;

    loop {
        sink.event(ProgressEvent {
            message: format!("Fetching page {page}..."),
            elapsed: None,
        });
        let search_page = match client.observations_page(query, page) {
            Ok(search_page) => search_page,
            Err(SurveyError::UpstreamStatus { status, message }) => {
                sink.event(ProgressEvent {
                    message: format!("Error fetching data: {status}"),
                    elapsed: None,
                });
                outcome.failure = Some(UpstreamFailure {
                    status,
                    page,
                    message,
                });
                break;
            }
            Err(err) => return Err(err),
        };

        outcome.pages_fetched += 1;
        if total_results.is_none() {
            total_results = Some(search_page.total_results);
            sink.event(ProgressEvent {
                message: format!("Total observations found: {}", search_page.total_results),
                elapsed: None,
            });
        }

        if search_page.observations.is_empty() {
            break;
        }
        outcome.observations.extend(search_page.observations);
        outcome.raw_results.extend(search_page.raw_results);

        if outcome.observations.len() as u64 >= total_results.unwrap_or(0) {
            break;
        }
        page += 1;
    }

    outcome.total_reported = total_results.unwrap_or(0);
    Ok(outcome)
}
