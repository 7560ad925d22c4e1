use crate::domain::{Elevation, QualityGrade};
use crate::elevation::ElevationClient;
use crate::inat::Observation;
use crate::lookup::{
    LabelCatalog, PLACE_TYPE_COUNTRY, PLACE_TYPE_COUNTY, PLACE_TYPE_PARISH, PLACE_TYPE_STATE,
    PlaceInfo,
};

pub const PHENOLOGY_TERM_ID: u32 = 12;

// Positional accuracy at or beyond this many meters no longer pins an
// observation to a meaningful point.
pub const ACCURACY_THRESHOLD: f64 = 1000.0;

#[derive(Debug, Clone)]
pub struct EnrichedLocation {
    pub id: u64,
    pub url: String,
    pub taxon_name: String,
    pub geoprivacy: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub positional_accuracy: Option<f64>,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub quality_grade: Option<QualityGrade>,
    pub elevation: Elevation,
    pub accurate_location: bool,
    pub status: String,
    pub country: String,
    pub state: String,
    pub county: String,
    pub places: Vec<PlaceInfo>,
    pub place_ids: Vec<u64>,
}

pub fn is_accurate_location(geoprivacy: Option<&str>, positional_accuracy: Option<f64>) -> bool {
    let obscured = geoprivacy == Some("obscured");
    let accuracy_ok = positional_accuracy
        .map(|meters| meters < ACCURACY_THRESHOLD)
        .unwrap_or(true);
    !obscured && accuracy_ok
}

/// Builds the derived record for one observation. Elevation failures are
/// absorbed into the `Error` sentinel so a single bad lookup cannot stop the
/// run; when several places share a type slot the last one in the id list
/// wins.
pub fn enrich<E: ElevationClient>(
    observation: &Observation,
    catalog: &LabelCatalog,
    elevation_client: &E,
) -> EnrichedLocation {
    let coordinates = observation.coordinates();
    let elevation = match coordinates {
        Some((lng, lat)) => match elevation_client.elevation_feet(lng, lat) {
            Ok(feet) => Elevation::Feet(feet),
            Err(err) => {
                tracing::warn!(
                    "elevation lookup failed for observation {}: {}",
                    observation.id,
                    err
                );
                Elevation::Error
            }
        },
        None => {
            tracing::warn!("observation {} has no usable coordinates", observation.id);
            Elevation::Error
        }
    };

    let mut country = String::new();
    let mut state = String::new();
    let mut county = String::new();
    let mut places = Vec::with_capacity(observation.place_ids.len());
    for &place_id in &observation.place_ids {
        let info = catalog.place_info(place_id);
        match info.place_type {
            Some(PLACE_TYPE_COUNTY) | Some(PLACE_TYPE_PARISH) => county = info.name.clone(),
            Some(PLACE_TYPE_STATE) => state = info.name.clone(),
            Some(PLACE_TYPE_COUNTRY) => country = info.name.clone(),
            _ => {}
        }
        places.push(info);
    }
    places.sort_by(|a, b| a.bbox_area.total_cmp(&b.bbox_area));

    let status = observation
        .annotations
        .iter()
        .find(|annotation| annotation.controlled_attribute_id == Some(PHENOLOGY_TERM_ID))
        .and_then(|annotation| annotation.controlled_value_id)
        .map(|value_id| catalog.value_label(value_id))
        .unwrap_or_default();

    let (month, day) = observation.observed_month_day();
    let (longitude, latitude) = match coordinates {
        Some((lng, lat)) => (Some(lng), Some(lat)),
        None => (None, None),
    };

    EnrichedLocation {
        id: observation.id,
        url: observation.url(),
        taxon_name: observation
            .taxon
            .as_ref()
            .and_then(|taxon| taxon.name.clone())
            .unwrap_or_else(|| "Unknown".to_string()),
        geoprivacy: observation.geoprivacy.clone(),
        latitude,
        longitude,
        positional_accuracy: observation.positional_accuracy,
        month,
        day,
        quality_grade: observation.quality_grade.clone(),
        elevation,
        accurate_location: is_accurate_location(
            observation.geoprivacy.as_deref(),
            observation.positional_accuracy,
        ),
        status,
        country,
        state,
        county,
        places,
        place_ids: observation.place_ids.clone(),
    }
}
