use crate::app::{ProgressEvent, ProgressSink};
use crate::domain::{PlaceId, TaxonId};
use crate::error::SurveyError;
use crate::inat::InatClient;

pub fn resolve_taxon<C: InatClient>(
    client: &C,
    species_name: &str,
    sink: &dyn ProgressSink,
) -> Result<TaxonId, SurveyError> {
    sink.event(ProgressEvent {
        message: format!("phase=Resolve; taxon {species_name}"),
        elapsed: None,
    });
    let candidates = client.taxa_autocomplete(species_name)?;
    let wanted = species_name.to_lowercase();
    for candidate in &candidates {
        if let Some(name) = &candidate.name {
            if name.to_lowercase() == wanted {
                sink.event(ProgressEvent {
                    message: format!("Found taxon: {name} (ID: {})", candidate.id),
                    elapsed: None,
                });
                return Ok(TaxonId(candidate.id));
            }
        }
    }
    Err(SurveyError::TaxonNotFound(species_name.to_string()))
}

/// Exact display-name match wins, then substring containment, then the first
/// candidate. An empty candidate list is the only not-found case.
pub fn resolve_place<C: InatClient>(
    client: &C,
    place_name: &str,
    sink: &dyn ProgressSink,
) -> Result<PlaceId, SurveyError> {
    sink.event(ProgressEvent {
        message: format!("phase=Resolve; place {place_name}"),
        elapsed: None,
    });
    let candidates = client.places_autocomplete(place_name)?;
    let wanted = place_name.to_lowercase();

    let exact = candidates.iter().find(|candidate| {
        candidate
            .display_name
            .as_deref()
            .map(|name| name.to_lowercase() == wanted)
            .unwrap_or(false)
    });
    let substring = || {
        candidates.iter().find(|candidate| {
            candidate
                .display_name
                .as_deref()
                .map(|name| name.to_lowercase().contains(&wanted))
                .unwrap_or(false)
        })
    };

    match exact.or_else(substring).or_else(|| candidates.first()) {
        Some(candidate) => {
            let shown = candidate.display_name.as_deref().unwrap_or(place_name);
            sink.event(ProgressEvent {
                message: format!("Found place: {shown} (ID: {})", candidate.id),
                elapsed: None,
            });
            Ok(PlaceId(candidate.id))
        }
        None => Err(SurveyError::PlaceNotFound(place_name.to_string())),
    }
}
