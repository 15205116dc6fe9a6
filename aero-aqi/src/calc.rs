//! AQI calculation from pollutant concentrations.
//!
//! Simplified US EPA method: PM2.5 and PM10 use piecewise-linear breakpoint
//! interpolation; the gas pollutants use linear scaling. The overall AQI is
//! that of the worst pollutant.

/// Breakpoint row: (conc_lo, conc_hi, aqi_lo, aqi_hi)
type Breakpoint = (f64, f64, f64, f64);

/// PM2.5 breakpoints (ug/m3)
const PM25_BREAKPOINTS: [Breakpoint; 6] = [
    (0.0, 12.0, 0.0, 50.0),
    (12.1, 35.4, 51.0, 100.0),
    (35.5, 55.4, 101.0, 150.0),
    (55.5, 150.4, 151.0, 200.0),
    (150.5, 250.4, 201.0, 300.0),
    (250.5, 500.4, 301.0, 500.0),
];

/// PM10 breakpoints (ug/m3)
const PM10_BREAKPOINTS: [Breakpoint; 6] = [
    (0.0, 54.0, 0.0, 50.0),
    (55.0, 154.0, 51.0, 100.0),
    (155.0, 254.0, 101.0, 150.0),
    (255.0, 354.0, 151.0, 200.0),
    (355.0, 424.0, 201.0, 300.0),
    (425.0, 604.0, 301.0, 500.0),
];

/// Pollutant concentrations entered into the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PollutantReadings {
    pub pm25: f64,
    pub pm10: f64,
    pub o3: f64,
    pub no2: f64,
    pub so2: f64,
    pub co: f64,
}

fn piecewise_aqi(concentration: f64, breakpoints: &[Breakpoint]) -> f64 {
    for &(conc_lo, conc_hi, aqi_lo, aqi_hi) in breakpoints {
        if concentration >= conc_lo && concentration <= conc_hi {
            return (aqi_hi - aqi_lo) / (conc_hi - conc_lo) * (concentration - conc_lo) + aqi_lo;
        }
    }
    // Above the last breakpoint
    500.0
}

/// Overall AQI for a set of pollutant readings, clamped to 0-500.
pub fn aqi_from_pollutants(readings: &PollutantReadings) -> u32 {
    let pm25_aqi = piecewise_aqi(readings.pm25.max(0.0), &PM25_BREAKPOINTS);
    let pm10_aqi = piecewise_aqi(readings.pm10.max(0.0), &PM10_BREAKPOINTS);
    let o3_aqi = (readings.o3.max(0.0) * 1.5).min(500.0);
    let no2_aqi = (readings.no2.max(0.0) * 2.0).min(500.0);
    let so2_aqi = (readings.so2.max(0.0) * 3.0).min(500.0);
    let co_aqi = (readings.co.max(0.0) * 10.0).min(500.0);

    let worst = pm25_aqi
        .max(pm10_aqi)
        .max(o3_aqi)
        .max(no2_aqi)
        .max(so2_aqi)
        .max(co_aqi);
    worst.round() as u32
}

#[cfg(test)]
mod tests {
    use super::{aqi_from_pollutants, PollutantReadings};

    #[test]
    fn test_clean_air_is_zero() {
        let aqi = aqi_from_pollutants(&PollutantReadings::default());
        assert_eq!(aqi, 0);
    }

    #[test]
    fn test_pm25_breakpoint_interpolation() {
        // 12.0 ug/m3 is the top of the Good band
        let readings = PollutantReadings {
            pm25: 12.0,
            ..Default::default()
        };
        assert_eq!(aqi_from_pollutants(&readings), 50);

        // 35.4 ug/m3 is the top of the Moderate band
        let readings = PollutantReadings {
            pm25: 35.4,
            ..Default::default()
        };
        assert_eq!(aqi_from_pollutants(&readings), 100);
    }

    #[test]
    fn test_worst_pollutant_wins() {
        let readings = PollutantReadings {
            pm25: 10.0, // AQI ~42
            no2: 60.0,  // AQI 120
            ..Default::default()
        };
        assert_eq!(aqi_from_pollutants(&readings), 120);
    }

    #[test]
    fn test_extreme_values_clamp_to_500() {
        let readings = PollutantReadings {
            pm25: 9999.0,
            co: 9999.0,
            ..Default::default()
        };
        assert_eq!(aqi_from_pollutants(&readings), 500);
    }
}
