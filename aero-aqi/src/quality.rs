//! AQI quality bands.

use std::fmt;

/// Air quality category band for an AQI value.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum QualityLevel {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl QualityLevel {
    /// Band for an AQI value (US EPA thresholds).
    pub fn from_aqi(aqi: u32) -> QualityLevel {
        match aqi {
            0..=50 => QualityLevel::Good,
            51..=100 => QualityLevel::Moderate,
            101..=150 => QualityLevel::UnhealthyForSensitiveGroups,
            151..=200 => QualityLevel::Unhealthy,
            201..=300 => QualityLevel::VeryUnhealthy,
            _ => QualityLevel::Hazardous,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QualityLevel::Good => "Good",
            QualityLevel::Moderate => "Moderate",
            QualityLevel::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            QualityLevel::Unhealthy => "Unhealthy",
            QualityLevel::VeryUnhealthy => "Very Unhealthy",
            QualityLevel::Hazardous => "Hazardous",
        }
    }

    /// Marker/badge color for this band.
    pub fn color(self) -> &'static str {
        match self {
            QualityLevel::Good => "#2ecc71",
            QualityLevel::Moderate => "#f1c40f",
            QualityLevel::UnhealthyForSensitiveGroups => "#e67e22",
            QualityLevel::Unhealthy => "#e74c3c",
            QualityLevel::VeryUnhealthy => "#8e44ad",
            QualityLevel::Hazardous => "#6e2c00",
        }
    }
}

impl fmt::Display for QualityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::QualityLevel;

    #[test]
    fn test_band_edges() {
        assert_eq!(QualityLevel::from_aqi(0), QualityLevel::Good);
        assert_eq!(QualityLevel::from_aqi(50), QualityLevel::Good);
        assert_eq!(QualityLevel::from_aqi(51), QualityLevel::Moderate);
        assert_eq!(QualityLevel::from_aqi(100), QualityLevel::Moderate);
        assert_eq!(
            QualityLevel::from_aqi(101),
            QualityLevel::UnhealthyForSensitiveGroups
        );
        assert_eq!(
            QualityLevel::from_aqi(150),
            QualityLevel::UnhealthyForSensitiveGroups
        );
        assert_eq!(QualityLevel::from_aqi(151), QualityLevel::Unhealthy);
        assert_eq!(QualityLevel::from_aqi(200), QualityLevel::Unhealthy);
        assert_eq!(QualityLevel::from_aqi(201), QualityLevel::VeryUnhealthy);
        assert_eq!(QualityLevel::from_aqi(300), QualityLevel::VeryUnhealthy);
        assert_eq!(QualityLevel::from_aqi(301), QualityLevel::Hazardous);
        assert_eq!(QualityLevel::from_aqi(999), QualityLevel::Hazardous);
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(
            QualityLevel::UnhealthyForSensitiveGroups.to_string(),
            "Unhealthy for Sensitive Groups"
        );
    }
}
