use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

// ---------------------------------------------------------------------------
// TrafficRecord – one row of the annual traffic file
// ---------------------------------------------------------------------------

/// Raw CSV row of the traffic file.
#[derive(Debug, Deserialize)]
struct TrafficRow {
    #[serde(rename = "Station")]
    station: String,
    #[serde(rename = "Réseau")]
    network: String,
    #[serde(rename = "Trafic")]
    traffic: u64,
    #[serde(rename = "Ville")]
    city: String,
}

/// Annual entering traffic of one station.
///
/// Only the columns used by the dashboard are mapped; the remaining
/// columns of the file (rank, connections, arrondissement) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "TrafficRow")]
pub struct TrafficRecord {
    pub station: String,
    /// Network category (`Métro`, `RER`, ...).  Never empty.
    pub network: String,
    pub traffic: u64,
    pub city: String,
}

impl TryFrom<TrafficRow> for TrafficRecord {
    type Error = RecordError;

    fn try_from(row: TrafficRow) -> Result<Self, Self::Error> {
        Ok(TrafficRecord {
            station: row.station,
            network: non_empty("Réseau", row.network)?,
            traffic: row.traffic,
            city: row.city,
        })
    }
}

// ---------------------------------------------------------------------------
// RecordError – a row that deserialized but cannot be used
// ---------------------------------------------------------------------------

/// Category columns feed the dropdowns, where an empty value would be
/// indistinguishable from "no filter"; such rows are rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("empty '{0}' field")]
    EmptyField(&'static str),
    #[error(transparent)]
    GeoPoint(#[from] GeoPointError),
}

fn non_empty(column: &'static str, value: String) -> Result<String, RecordError> {
    if value.trim().is_empty() {
        Err(RecordError::EmptyField(column))
    } else {
        Ok(value)
    }
}

// ---------------------------------------------------------------------------
// GeoPoint – "lat, lng" text field
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoPointError {
    #[error("expected \"lat, lng\" but found {0} part(s) in '{1}'")]
    PartCount(usize, String),
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeRange(f64),
    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeRange(f64),
}

/// A WGS84 position parsed from the `Geo Point` column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl FromStr for GeoPoint {
    type Err = GeoPointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 2 {
            return Err(GeoPointError::PartCount(parts.len(), s.to_string()));
        }

        let parse = |tok: &str| {
            let tok = tok.trim();
            tok.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| GeoPointError::NotANumber(tok.to_string()))
        };
        let lat = parse(parts[0])?;
        let lng = parse(parts[1])?;

        if !(-90.0..=90.0).contains(&lat) {
            return Err(GeoPointError::LatitudeRange(lat));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(GeoPointError::LongitudeRange(lng));
        }
        Ok(GeoPoint { lat, lng })
    }
}

// ---------------------------------------------------------------------------
// StationRecord – one row of the station location file
// ---------------------------------------------------------------------------

/// Raw CSV row, before the geo point is split.
#[derive(Debug, Deserialize)]
struct StationRow {
    nom: String,
    exploitant: String,
    ligne: String,
    #[serde(rename = "Geo Point")]
    geo_point: String,
}

/// A station with its operator, line and parsed location.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "StationRow")]
pub struct StationRecord {
    pub name: String,
    /// Operator running the station ("exploitant").  Never empty.
    pub operator: String,
    /// Never empty.
    pub line: String,
    /// The `Geo Point` text as read, used as hover label on the map.
    pub geo_point: String,
    pub position: GeoPoint,
}

impl TryFrom<StationRow> for StationRecord {
    type Error = RecordError;

    fn try_from(row: StationRow) -> Result<Self, Self::Error> {
        let position = row.geo_point.parse()?;
        Ok(StationRecord {
            name: row.nom,
            operator: non_empty("exploitant", row.exploitant)?,
            line: non_empty("ligne", row.ligne)?,
            geo_point: row.geo_point,
            position,
        })
    }
}

// ---------------------------------------------------------------------------
// Datasets
// ---------------------------------------------------------------------------

/// The traffic file, rows kept in file order.
#[derive(Debug, Clone, Default)]
pub struct TrafficDataset {
    pub records: Vec<TrafficRecord>,
}

impl TrafficDataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// The station file, rows kept in file order.
#[derive(Debug, Clone, Default)]
pub struct StationDataset {
    pub records: Vec<StationRecord>,
}

impl StationDataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// One bar of a grouped count: a category and how many rows carry it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_point_parses_trimmed_pair() {
        let p: GeoPoint = "48.8443, 2.3744".parse().unwrap();
        assert_eq!(p, GeoPoint { lat: 48.8443, lng: 2.3744 });

        let p: GeoPoint = "  -33.5 ,151.2 ".parse().unwrap();
        assert_eq!(p.lat, -33.5);
        assert_eq!(p.lng, 151.2);
    }

    #[test]
    fn test_geo_point_rejects_wrong_part_count() {
        assert!(matches!(
            "48.8".parse::<GeoPoint>(),
            Err(GeoPointError::PartCount(1, _))
        ));
        assert!(matches!(
            "48.8, 2.3, 7".parse::<GeoPoint>(),
            Err(GeoPointError::PartCount(3, _))
        ));
    }

    #[test]
    fn test_geo_point_rejects_non_numeric_and_out_of_range() {
        assert_eq!(
            "abc, 2.3".parse::<GeoPoint>(),
            Err(GeoPointError::NotANumber("abc".to_string()))
        );
        assert!(matches!(
            "nan, 2.3".parse::<GeoPoint>(),
            Err(GeoPointError::NotANumber(_))
        ));
        assert_eq!(
            "91.0, 2.3".parse::<GeoPoint>(),
            Err(GeoPointError::LatitudeRange(91.0))
        );
        assert_eq!(
            "48.0, -180.5".parse::<GeoPoint>(),
            Err(GeoPointError::LongitudeRange(-180.5))
        );
    }

    #[test]
    fn test_station_record_from_row() {
        let row = StationRow {
            nom: "Nation".into(),
            exploitant: "RATP".into(),
            ligne: "A".into(),
            geo_point: "48.848, 2.396".into(),
        };
        let rec = StationRecord::try_from(row).unwrap();
        assert_eq!(rec.operator, "RATP");
        assert_eq!(rec.geo_point, "48.848, 2.396");
        assert_eq!(rec.position.lng, 2.396);
    }

    #[test]
    fn test_empty_category_fields_are_rejected() {
        let row = |exploitant: &str, ligne: &str| StationRow {
            nom: "Nation".into(),
            exploitant: exploitant.into(),
            ligne: ligne.into(),
            geo_point: "48.848, 2.396".into(),
        };
        assert_eq!(
            StationRecord::try_from(row("", "A")),
            Err(RecordError::EmptyField("exploitant"))
        );
        assert_eq!(
            StationRecord::try_from(row("RATP", "  ")),
            Err(RecordError::EmptyField("ligne"))
        );

        let traffic = TrafficRow {
            station: "NATION".into(),
            network: String::new(),
            traffic: 10,
            city: "Paris".into(),
        };
        assert_eq!(
            TrafficRecord::try_from(traffic),
            Err(RecordError::EmptyField("Réseau"))
        );
    }

    #[test]
    fn test_bad_geo_point_surfaces_through_record_error() {
        let row = StationRow {
            nom: "Nation".into(),
            exploitant: "RATP".into(),
            ligne: "A".into(),
            geo_point: "48.848".into(),
        };
        assert!(matches!(
            StationRecord::try_from(row),
            Err(RecordError::GeoPoint(GeoPointError::PartCount(1, _)))
        ));
    }
}
