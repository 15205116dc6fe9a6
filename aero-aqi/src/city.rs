//! City air-quality records as served by the data API.

use crate::error::Result;
use crate::quality::QualityLevel;
use serde::{Deserialize, Serialize};

fn default_source() -> String {
    "live".to_string()
}

/// One city's air-quality snapshot.
///
/// Pollutant and ambient fields are optional on the wire; an absent value
/// means "unknown" and must not be rendered as zero.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct CityRecord {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    /// Air Quality Index, 0-500
    pub aqi: Option<u32>,
    /// Quality band label as reported by the source
    #[serde(default)]
    pub quality: String,
    /// PM2.5 concentration (ug/m3)
    pub pm25: Option<f64>,
    /// PM10 concentration (ug/m3)
    pub pm10: Option<f64>,
    pub o3: Option<f64>,
    pub no2: Option<f64>,
    pub so2: Option<f64>,
    pub co: Option<f64>,
    /// Ambient temperature (deg C)
    pub temperature: Option<f64>,
    /// Relative humidity (%)
    pub humidity: Option<f64>,
    #[serde(rename = "lastUpdated", default)]
    pub last_updated: String,
    /// Provenance label ("live" when the source omits it, "fallback" for
    /// substituted records)
    #[serde(default = "default_source")]
    pub source: String,
}

impl CityRecord {
    /// Quality band derived from the AQI value, if one is known.
    pub fn quality_band(&self) -> Option<QualityLevel> {
        self.aqi.map(QualityLevel::from_aqi)
    }

    /// Display label for the quality band, preferring the source-reported
    /// label over the locally derived one.
    pub fn quality_label(&self) -> String {
        if !self.quality.is_empty() {
            return self.quality.clone();
        }
        match self.quality_band() {
            Some(band) => band.label().to_string(),
            None => "Unknown".to_string(),
        }
    }
}

/// Parse a JSON array of city records.
pub fn parse_cities(body: &str) -> Result<Vec<CityRecord>> {
    let cities: Vec<CityRecord> = serde_json::from_str(body)?;
    Ok(cities)
}

#[cfg(test)]
mod tests {
    use super::parse_cities;

    #[test]
    fn test_parse_full_record() {
        let body = r#"[{
            "name": "Delhi", "lat": 28.6139, "lng": 77.209,
            "aqi": 168, "quality": "Unhealthy",
            "pm25": 100.8, "pm10": 134.4, "o3": 67.2, "no2": 50.4,
            "so2": 33.6, "co": 16.8,
            "temperature": 34.0, "humidity": 48.0,
            "lastUpdated": "2025-06-01T10:00:00Z", "source": "Ambee API"
        }]"#;
        let cities = parse_cities(body).unwrap();
        assert_eq!(cities.len(), 1);
        assert_eq!(cities[0].name, "Delhi");
        assert_eq!(cities[0].aqi, Some(168));
        assert_eq!(cities[0].pm25, Some(100.8));
        assert_eq!(cities[0].source, "Ambee API");
    }

    #[test]
    fn test_absent_numeric_fields_are_unknown_not_zero() {
        let body = r#"[{"name": "Pune", "lat": 18.5204, "lng": 73.8567}]"#;
        let cities = parse_cities(body).unwrap();
        let pune = &cities[0];
        assert_eq!(pune.aqi, None);
        assert_eq!(pune.pm25, None);
        assert_eq!(pune.temperature, None);
        assert_eq!(pune.source, "live");
        assert_eq!(pune.quality_label(), "Unknown");
    }

    #[test]
    fn test_quality_label_prefers_source_label() {
        let body = r#"[{"name": "Surat", "lat": 21.17, "lng": 72.83,
                        "aqi": 42, "quality": "Fine and dandy"}]"#;
        let cities = parse_cities(body).unwrap();
        assert_eq!(cities[0].quality_label(), "Fine and dandy");
    }

    #[test]
    fn test_quality_label_derives_from_aqi() {
        let body = r#"[{"name": "Surat", "lat": 21.17, "lng": 72.83, "aqi": 42}]"#;
        let cities = parse_cities(body).unwrap();
        assert_eq!(cities[0].quality_label(), "Good");
    }

    #[test]
    fn test_malformed_payload_is_an_error() {
        assert!(parse_cities("not json at all").is_err());
        assert!(parse_cities(r#"{"name": "Delhi"}"#).is_err());
        assert!(parse_cities(r#"[{"lat": 1.0, "lng": 2.0}]"#).is_err());
    }
}
