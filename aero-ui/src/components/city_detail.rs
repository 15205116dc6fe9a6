//! Detail panel for the selected city.

use crate::state::AppState;
use aero_aqi::city::CityRecord;
use dioxus::prelude::*;

fn reading(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{:.1} {}", v, unit),
        None => "n/a".to_string(),
    }
}

/// Detail panel for the selected city.
///
/// The selection may dangle (city absent from the current dataset, e.g.
/// right after a refresh drops it); that renders as a placeholder, never an
/// error.
#[component]
pub fn CityDetail() -> Element {
    let state = use_context::<AppState>();
    let selected = state.selection.read().current().to_string();
    let city: Option<CityRecord> = state.store.read().city(&selected).cloned();

    let Some(city) = city else {
        return rsx! {
            div {
                style: "padding: 16px; background: #f8f9fa; border-radius: 6px; color: #888;",
                "No data available for \"{selected}\""
            }
        };
    };

    let aqi_text = match city.aqi {
        Some(aqi) => aqi.to_string(),
        None => "n/a".to_string(),
    };
    let quality_label = city.quality_label();
    let band_color = city
        .quality_band()
        .map(|band| band.color())
        .unwrap_or("#95a5a6");

    rsx! {
        div {
            style: "padding: 16px; background: #f8f9fa; border-radius: 6px;",
            h3 { style: "margin: 0 0 4px 0;", "{city.name}" }
            div {
                style: "display: flex; align-items: baseline; gap: 12px; margin-bottom: 8px;",
                span {
                    style: "font-size: 36px; font-weight: bold; color: {band_color};",
                    "{aqi_text}"
                }
                span { style: "color: #666;", "{quality_label}" }
            }
            table {
                style: "width: 100%; font-size: 13px; border-collapse: collapse;",
                tbody {
                    tr {
                        td { "PM2.5" }
                        td { {reading(city.pm25, "ug/m3")} }
                        td { "PM10" }
                        td { {reading(city.pm10, "ug/m3")} }
                    }
                    tr {
                        td { "O3" }
                        td { {reading(city.o3, "ug/m3")} }
                        td { "NO2" }
                        td { {reading(city.no2, "ug/m3")} }
                    }
                    tr {
                        td { "SO2" }
                        td { {reading(city.so2, "ug/m3")} }
                        td { "CO" }
                        td { {reading(city.co, "ug/m3")} }
                    }
                    tr {
                        td { "Temperature" }
                        td { {reading(city.temperature, "C")} }
                        td { "Humidity" }
                        td { {reading(city.humidity, "%")} }
                    }
                }
            }
        }
    }
}
