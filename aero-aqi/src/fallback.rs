//! Built-in fallback dataset.
//!
//! When the live source is unreachable the dashboard substitutes this fixed
//! set of plausible records rather than going blank. Availability over
//! freshness.

use crate::city::CityRecord;

/// Embedded JSON for the 20 monitored Indian cities.
pub static FALLBACK_JSON: &str = include_str!("../fixtures/fallback-cities.json");

/// The fallback dataset, every record tagged `source = "fallback"`.
pub fn fallback_cities() -> Vec<CityRecord> {
    serde_json::from_str(FALLBACK_JSON).expect("embedded fallback dataset must be valid JSON")
}

#[cfg(test)]
mod tests {
    use super::fallback_cities;
    use crate::quality::QualityLevel;
    use std::collections::HashSet;

    #[test]
    fn test_fallback_is_nonempty_and_tagged() {
        let cities = fallback_cities();
        assert_eq!(cities.len(), 20);
        assert!(cities.iter().all(|c| c.source == "fallback"));
    }

    #[test]
    fn test_fallback_names_are_unique() {
        let cities = fallback_cities();
        let names: HashSet<&str> = cities.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names.len(), cities.len());
    }

    #[test]
    fn test_fallback_quality_labels_match_bands() {
        for city in fallback_cities() {
            let aqi = city.aqi.expect("fallback records carry an AQI");
            assert_eq!(city.quality, QualityLevel::from_aqi(aqi).label());
        }
    }

    #[test]
    fn test_fallback_coordinates_are_plausible() {
        for city in fallback_cities() {
            assert!((6.0..38.0).contains(&city.lat), "{} lat", city.name);
            assert!((68.0..98.0).contains(&city.lng), "{} lng", city.name);
        }
    }
}
