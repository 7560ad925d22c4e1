use std::collections::BTreeMap;

use crate::domain::QualityGrade;
use crate::enrich::EnrichedLocation;
use crate::inat::{Annotation, Observation};
use crate::lookup::LabelCatalog;

#[derive(Debug, Clone, Default)]
pub struct AnnotationStats {
    pub total_observations: usize,
    pub observation_ids_with_annotations: Vec<u64>,
    pub breakdown: BTreeMap<String, BTreeMap<String, u64>>,
}

impl AnnotationStats {
    pub fn annotated_count(&self) -> usize {
        self.observation_ids_with_annotations.len()
    }

    pub fn percentage(&self) -> f64 {
        if self.total_observations == 0 {
            0.0
        } else {
            self.annotated_count() as f64 / self.total_observations as f64 * 100.0
        }
    }
}

pub fn annotation_labels(catalog: &LabelCatalog, annotation: &Annotation) -> (String, String) {
    let term = annotation
        .controlled_attribute_id
        .map(|id| catalog.term_label(id))
        .unwrap_or_else(|| "Unknown Term".to_string());
    let value = annotation
        .controlled_value_id
        .map(|id| catalog.value_label(id))
        .unwrap_or_else(|| "Unknown Value".to_string());
    (term, value)
}

pub fn analyze_annotations(
    observations: &[Observation],
    catalog: &LabelCatalog,
) -> AnnotationStats {
    let mut stats = AnnotationStats {
        total_observations: observations.len(),
        ..AnnotationStats::default()
    };
    for observation in observations {
        if !observation.annotations.is_empty() {
            stats.observation_ids_with_annotations.push(observation.id);
        }
        for annotation in &observation.annotations {
            let (term, value) = annotation_labels(catalog, annotation);
            *stats
                .breakdown
                .entry(term)
                .or_default()
                .entry(value)
                .or_insert(0) += 1;
        }
    }
    stats
}

/// First bucket: research grade with an accurate location. Every record lands
/// in exactly one bucket.
pub fn partition(
    enriched: Vec<EnrichedLocation>,
) -> (Vec<EnrichedLocation>, Vec<EnrichedLocation>) {
    enriched.into_iter().partition(|record| {
        record.accurate_location
            && record
                .quality_grade
                .as_ref()
                .map(QualityGrade::is_research)
                .unwrap_or(false)
    })
}

pub fn quality_grade_tally(observations: &[Observation]) -> BTreeMap<String, u64> {
    let mut tally = BTreeMap::new();
    for observation in observations {
        let grade = observation
            .quality_grade
            .as_ref()
            .map(|grade| grade.as_str().to_string())
            .unwrap_or_else(|| "unknown".to_string());
        *tally.entry(grade).or_insert(0) += 1;
    }
    tally
}
