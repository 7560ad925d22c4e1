use std::collections::{BTreeMap, BTreeSet};
use std::sync::Mutex;

use crate::labels;

pub const PLACE_TYPE_STATE: u32 = 8;
pub const PLACE_TYPE_COUNTY: u32 = 9;
pub const PLACE_TYPE_COUNTRY: u32 = 12;
pub const PLACE_TYPE_PARISH: u32 = 1001;

#[derive(Debug, Clone, PartialEq)]
pub struct PlaceInfo {
    pub name: String,
    pub bbox_area: f64,
    pub place_type: Option<u32>,
}

/// Label tables for annotation terms, annotation values, place types, and
/// places, with unknown-id bookkeeping. Ids that miss the tables resolve to a
/// `Not found (<id>)` placeholder and are recorded once for the backfill pass.
pub struct LabelCatalog {
    terms: BTreeMap<u32, String>,
    values: BTreeMap<u32, String>,
    place_types: BTreeMap<u32, String>,
    places: BTreeMap<u64, PlaceInfo>,
    missing_terms: Mutex<BTreeSet<u32>>,
    missing_values: Mutex<BTreeSet<u32>>,
    missing_places: Mutex<BTreeSet<u64>>,
}

impl LabelCatalog {
    pub fn new(
        terms: BTreeMap<u32, String>,
        values: BTreeMap<u32, String>,
        place_types: BTreeMap<u32, String>,
        places: BTreeMap<u64, PlaceInfo>,
    ) -> Self {
        Self {
            terms,
            values,
            place_types,
            places,
            missing_terms: Mutex::new(BTreeSet::new()),
            missing_values: Mutex::new(BTreeSet::new()),
            missing_places: Mutex::new(BTreeSet::new()),
        }
    }

    pub fn builtin() -> Self {
        let terms = labels::TERM_LABELS
            .iter()
            .map(|&(id, label)| (id, label.to_string()))
            .collect();
        let values = labels::VALUE_LABELS
            .iter()
            .map(|&(id, label)| (id, label.to_string()))
            .collect();
        let place_types = labels::PLACE_TYPE_LABELS
            .iter()
            .map(|&(code, label)| (code, label.to_string()))
            .collect();
        let places = labels::PLACES
            .iter()
            .map(|row| {
                (
                    row.id,
                    PlaceInfo {
                        name: row.name.to_string(),
                        bbox_area: row.bbox_area,
                        place_type: row.place_type,
                    },
                )
            })
            .collect();
        Self::new(terms, values, place_types, places)
    }

    pub fn term_label(&self, id: u32) -> String {
        match self.terms.get(&id) {
            Some(label) => label.clone(),
            None => {
                if record_missing(&self.missing_terms, id) {
                    tracing::warn!("annotation term id {} is not in the label table", id);
                }
                not_found(id)
            }
        }
    }

    pub fn value_label(&self, id: u32) -> String {
        match self.values.get(&id) {
            Some(label) => label.clone(),
            None => {
                if record_missing(&self.missing_values, id) {
                    tracing::warn!("annotation value id {} is not in the label table", id);
                }
                not_found(id)
            }
        }
    }

    pub fn place_type_label(&self, code: u32) -> Option<&str> {
        self.place_types.get(&code).map(String::as_str)
    }

    pub fn place_info(&self, id: u64) -> PlaceInfo {
        match self.places.get(&id) {
            Some(info) => info.clone(),
            None => {
                if record_missing(&self.missing_places, id) {
                    tracing::warn!("place id {} is not in the place table", id);
                }
                PlaceInfo {
                    name: not_found(id),
                    bbox_area: 0.0,
                    place_type: None,
                }
            }
        }
    }

    pub fn missing_term_ids(&self) -> Vec<u32> {
        snapshot(&self.missing_terms)
    }

    pub fn missing_value_ids(&self) -> Vec<u32> {
        snapshot(&self.missing_values)
    }

    pub fn missing_place_ids(&self) -> Vec<u64> {
        snapshot(&self.missing_places)
    }
}

fn not_found(id: impl std::fmt::Display) -> String {
    format!("Not found ({id})")
}

// Returns true only the first time an id is recorded.
fn record_missing<T: Ord + Copy>(set: &Mutex<BTreeSet<T>>, id: T) -> bool {
    let mut set = set.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    set.insert(id)
}

fn snapshot<T: Ord + Copy>(set: &Mutex<BTreeSet<T>>) -> Vec<T> {
    let set = set.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    set.iter().copied().collect()
}
