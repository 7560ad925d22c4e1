use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::SurveyError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxonId(pub u64);

impl fmt::Display for TaxonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceId(pub u64);

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QualityGrade {
    Research,
    NeedsId,
    Casual,
    Other(String),
}

impl QualityGrade {
    pub fn as_str(&self) -> &str {
        match self {
            QualityGrade::Research => "research",
            QualityGrade::NeedsId => "needs_id",
            QualityGrade::Casual => "casual",
            QualityGrade::Other(value) => value,
        }
    }

    pub fn is_research(&self) -> bool {
        matches!(self, QualityGrade::Research)
    }
}

impl From<String> for QualityGrade {
    fn from(value: String) -> Self {
        match value.as_str() {
            "research" => QualityGrade::Research,
            "needs_id" => QualityGrade::NeedsId,
            "casual" => QualityGrade::Casual,
            _ => QualityGrade::Other(value),
        }
    }
}

impl From<QualityGrade> for String {
    fn from(value: QualityGrade) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for QualityGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub swlat: f64,
    pub swlng: f64,
    pub nelat: f64,
    pub nelng: f64,
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "bbox({},{},{},{})",
            self.swlat, self.swlng, self.nelat, self.nelng
        )
    }
}

impl FromStr for BoundingBox {
    type Err = SurveyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let parts = value
            .split(',')
            .map(|part| part.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| SurveyError::InvalidBoundingBox(value.to_string()))?;
        let [swlat, swlng, nelat, nelng] = parts.as_slice() else {
            return Err(SurveyError::InvalidBoundingBox(value.to_string()));
        };
        let bbox = BoundingBox {
            swlat: *swlat,
            swlng: *swlng,
            nelat: *nelat,
            nelng: *nelng,
        };
        bbox.validate(value)?;
        Ok(bbox)
    }
}

impl BoundingBox {
    fn validate(&self, raw: &str) -> Result<(), SurveyError> {
        let lat_ok = (-90.0..=90.0).contains(&self.swlat)
            && (-90.0..=90.0).contains(&self.nelat)
            && self.swlat <= self.nelat;
        let lng_ok = (-180.0..=180.0).contains(&self.swlng) && (-180.0..=180.0).contains(&self.nelng);
        if !lat_ok || !lng_ok {
            return Err(SurveyError::InvalidBoundingBox(raw.to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchArea {
    Place(PlaceId),
    Bbox(BoundingBox),
}

impl fmt::Display for SearchArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchArea::Place(id) => write!(f, "place {id}"),
            SearchArea::Bbox(bbox) => write!(f, "{bbox}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Elevation {
    Feet(f64),
    Error,
}

impl fmt::Display for Elevation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Elevation::Feet(value) => write!(f, "{}", value.round() as i64),
            Elevation::Error => write!(f, "Error"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ElevationSource {
    Usgs,
    Macrostrat,
}

impl fmt::Display for ElevationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElevationSource::Usgs => write!(f, "usgs"),
            ElevationSource::Macrostrat => write!(f, "macrostrat"),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn quality_grade_from_raw_string() {
        assert_eq!(QualityGrade::from("research".to_string()), QualityGrade::Research);
        assert_eq!(QualityGrade::from("needs_id".to_string()), QualityGrade::NeedsId);
        assert_eq!(
            QualityGrade::from("verifiable".to_string()),
            QualityGrade::Other("verifiable".to_string())
        );
        assert_eq!(QualityGrade::from("casual".to_string()).as_str(), "casual");
    }

    #[test]
    fn quality_grade_research_check() {
        assert!(QualityGrade::Research.is_research());
        assert!(!QualityGrade::Casual.is_research());
        assert!(!QualityGrade::Other("x".to_string()).is_research());
    }

    #[test]
    fn parse_bounding_box_valid() {
        let bbox: BoundingBox = "41.18, -123.72, 42.0, -121.45".parse().unwrap();
        assert_eq!(bbox.swlat, 41.18);
        assert_eq!(bbox.nelng, -121.45);
    }

    #[test]
    fn parse_bounding_box_invalid() {
        let err = "41.18,-123.72,42.0".parse::<BoundingBox>().unwrap_err();
        assert_matches!(err, SurveyError::InvalidBoundingBox(_));

        let err = "95.0,-123.72,96.0,-121.45".parse::<BoundingBox>().unwrap_err();
        assert_matches!(err, SurveyError::InvalidBoundingBox(_));

        let err = "42.0,-123.72,41.0,-121.45".parse::<BoundingBox>().unwrap_err();
        assert_matches!(err, SurveyError::InvalidBoundingBox(_));
    }

    #[test]
    fn elevation_rendering() {
        assert_eq!(Elevation::Feet(4820.43).to_string(), "4820");
        assert_eq!(Elevation::Feet(4819.6).to_string(), "4820");
        assert_eq!(Elevation::Error.to_string(), "Error");
    }
}
