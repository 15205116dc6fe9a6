//! One component per dashboard sub-view.

use aero_aqi::calc::{aqi_from_pollutants, PollutantReadings};
use aero_aqi::client::{PredictionRequest, PredictionResponse};
use aero_aqi::quality::QualityLevel;
use aero_ui::components::{CityDetail, CitySelector, MapPanel, SearchBox};
use aero_ui::data;
use aero_ui::state::AppState;
use dioxus::prelude::*;

/// Map, selector, search, and the detail panel for the selected city.
#[component]
pub fn OverviewView() -> Element {
    let state = use_context::<AppState>();
    let in_flight = state.store.read().is_in_flight();

    rsx! {
        div {
            style: "display: grid; grid-template-columns: 2fr 1fr; gap: 16px; align-items: start;",
            MapPanel {}
            div {
                CitySelector {}
                SearchBox {}
                CityDetail {}
                button {
                    style: "margin-top: 8px; padding: 6px 14px; cursor: pointer;",
                    disabled: in_flight,
                    onclick: move |_| data::spawn_refresh(&state),
                    if in_flight { "Refreshing..." } else { "Refresh now" }
                }
            }
        }
    }
}

/// AQI ranking across all monitored cities, worst first.
#[component]
pub fn AnalyticsView() -> Element {
    let mut state = use_context::<AppState>();

    // (name, sort key, aqi text, quality label, band color)
    let mut rows: Vec<(String, u32, String, String, &'static str)> = state
        .store
        .read()
        .cities()
        .iter()
        .map(|c| {
            let color = c.quality_band().map(|b| b.color()).unwrap_or("#95a5a6");
            let aqi_text = c.aqi.map(|a| a.to_string()).unwrap_or_else(|| "n/a".to_string());
            (c.name.clone(), c.aqi.unwrap_or(0), aqi_text, c.quality_label(), color)
        })
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1));

    rsx! {
        div {
            h3 { "City ranking by AQI" }
            table {
                style: "width: 100%; border-collapse: collapse; font-size: 14px;",
                thead {
                    tr {
                        style: "text-align: left; border-bottom: 2px solid #ccc;",
                        th { style: "padding: 6px;", "#" }
                        th { style: "padding: 6px;", "City" }
                        th { style: "padding: 6px;", "AQI" }
                        th { style: "padding: 6px;", "Quality" }
                    }
                }
                tbody {
                    for (rank, (name, _, aqi_text, quality, color)) in rows.iter().enumerate() {
                        tr {
                            key: "{name}",
                            style: "border-bottom: 1px solid #eee; cursor: pointer;",
                            onclick: {
                                let name = name.clone();
                                move |_| state.selection.write().select(&name)
                            },
                            td { style: "padding: 6px;", {(rank + 1).to_string()} }
                            td { style: "padding: 6px;", "{name}" }
                            td {
                                style: "padding: 6px; font-weight: bold; color: {color};",
                                "{aqi_text}"
                            }
                            td { style: "padding: 6px;", "{quality}" }
                        }
                    }
                }
            }
        }
    }
}

/// Ambient readings for the selected city.
#[component]
pub fn WeatherView() -> Element {
    let state = use_context::<AppState>();
    let selected = state.selection.read().current().to_string();
    let readings = state.store.read().city(&selected).map(|c| {
        let fmt = |value: Option<f64>, unit: &str| match value {
            Some(v) => format!("{:.1} {}", v, unit),
            None => "n/a".to_string(),
        };
        (fmt(c.temperature, "C"), fmt(c.humidity, "%"))
    });

    let body = match readings {
        Some((temperature, humidity)) => rsx! {
            div {
                style: "display: flex; gap: 24px; padding: 16px; background: #f8f9fa; border-radius: 6px;",
                div {
                    div { style: "font-size: 12px; color: #666;", "Temperature" }
                    div { style: "font-size: 28px; font-weight: bold;", "{temperature}" }
                }
                div {
                    div { style: "font-size: 12px; color: #666;", "Humidity" }
                    div { style: "font-size: 28px; font-weight: bold;", "{humidity}" }
                }
            }
        },
        None => rsx! {
            div {
                style: "padding: 16px; color: #888;",
                "No weather data available for \"{selected}\""
            }
        },
    };

    rsx! {
        div {
            CitySelector {}
            {body}
        }
    }
}

/// AQI calculator over the six pollutant concentrations.
#[component]
pub fn CalculatorView() -> Element {
    let mut pm25 = use_signal(String::new);
    let mut pm10 = use_signal(String::new);
    let mut o3 = use_signal(String::new);
    let mut no2 = use_signal(String::new);
    let mut so2 = use_signal(String::new);
    let mut co = use_signal(String::new);
    let mut result = use_signal(|| None::<u32>);

    let on_calculate = move |_| {
        let readings = PollutantReadings {
            pm25: pm25().parse().unwrap_or(0.0),
            pm10: pm10().parse().unwrap_or(0.0),
            o3: o3().parse().unwrap_or(0.0),
            no2: no2().parse().unwrap_or(0.0),
            so2: so2().parse().unwrap_or(0.0),
            co: co().parse().unwrap_or(0.0),
        };
        result.set(Some(aqi_from_pollutants(&readings)));
    };

    let result_section = result().map(|aqi| {
        let band = QualityLevel::from_aqi(aqi);
        (aqi, band.label(), band.color())
    });

    rsx! {
        div {
            h3 { "AQI calculator" }
            p {
                style: "color: #666; font-size: 13px;",
                "Enter pollutant concentrations in ug/m3 (CO in mg/m3); the worst pollutant determines the overall AQI."
            }
            div {
                style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 12px; max-width: 600px;",
                PollutantInput { label: "PM2.5", value: pm25(), on_change: move |v| pm25.set(v) }
                PollutantInput { label: "PM10", value: pm10(), on_change: move |v| pm10.set(v) }
                PollutantInput { label: "O3", value: o3(), on_change: move |v| o3.set(v) }
                PollutantInput { label: "NO2", value: no2(), on_change: move |v| no2.set(v) }
                PollutantInput { label: "SO2", value: so2(), on_change: move |v| so2.set(v) }
                PollutantInput { label: "CO", value: co(), on_change: move |v| co.set(v) }
            }
            button {
                style: "margin-top: 12px; padding: 6px 14px; cursor: pointer;",
                onclick: on_calculate,
                "Calculate"
            }
            if let Some((aqi, label, color)) = result_section {
                div {
                    style: "margin-top: 12px; font-size: 20px;",
                    "AQI: "
                    span { style: "font-weight: bold; color: {color};", "{aqi}" }
                    span { style: "color: #666; margin-left: 8px;", "{label}" }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct PollutantInputProps {
    label: String,
    value: String,
    on_change: EventHandler<String>,
}

#[component]
fn PollutantInput(props: PollutantInputProps) -> Element {
    rsx! {
        label {
            style: "font-size: 13px;",
            "{props.label}"
            input {
                r#type: "number",
                min: "0",
                value: "{props.value}",
                style: "width: 100%; box-sizing: border-box; padding: 4px 6px;",
                oninput: move |evt: Event<FormData>| props.on_change.call(evt.value()),
            }
        }
    }
}

/// Personal AQI prediction with health advice from the prediction endpoint.
#[component]
pub fn PredictorView() -> Element {
    let state = use_context::<AppState>();
    let mut name = use_signal(String::new);
    let mut age = use_signal(String::new);
    let mut result = use_signal(|| None::<PredictionResponse>);
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let on_submit = move |_| {
        let client = state.client.peek().clone();
        let request = PredictionRequest {
            name: name(),
            city: state.selection.peek().current().to_string(),
            age: age().parse().unwrap_or(0),
        };
        busy.set(true);
        error.set(None);
        spawn(async move {
            match client.predict(&request).await {
                Ok(response) => result.set(Some(response)),
                Err(e) => error.set(Some(format!("Prediction unavailable: {}", e))),
            }
            busy.set(false);
        });
    };

    rsx! {
        div {
            h3 { "Personal exposure check" }
            div {
                style: "max-width: 400px; display: flex; flex-direction: column; gap: 8px;",
                input {
                    r#type: "text",
                    placeholder: "Your name",
                    value: "{name}",
                    style: "padding: 6px 8px;",
                    oninput: move |evt| name.set(evt.value()),
                }
                input {
                    r#type: "number",
                    placeholder: "Age",
                    min: "0",
                    value: "{age}",
                    style: "padding: 6px 8px;",
                    oninput: move |evt| age.set(evt.value()),
                }
                CitySelector {}
                button {
                    style: "padding: 6px 14px; cursor: pointer;",
                    disabled: busy(),
                    onclick: on_submit,
                    if busy() { "Checking..." } else { "Check my city" }
                }
            }
            if let Some(message) = error() {
                div {
                    style: "margin-top: 12px; padding: 10px; background: #fff8e1; color: #b26a00; border-radius: 4px;",
                    "{message}"
                }
            }
            if let Some(prediction) = result() {
                div {
                    style: "margin-top: 12px; padding: 12px; background: #f8f9fa; border-radius: 6px;",
                    div { "City: {prediction.city}" }
                    div { "AQI: {prediction.aqi} ({prediction.quality})" }
                    p { style: "margin: 8px 0 0 0;", "{prediction.advice}" }
                }
            }
        }
    }
}

/// Static background on the AQI scale.
#[component]
pub fn AboutView() -> Element {
    rsx! {
        div {
            style: "max-width: 700px;",
            h3 { "About AeroSense" }
            p {
                "AeroSense shows live air quality for 20 Indian cities. The Air Quality
                 Index (AQI) maps pollutant concentrations onto a 0-500 severity scale:"
            }
            ul {
                for (label, color) in [
                    QualityLevel::Good,
                    QualityLevel::Moderate,
                    QualityLevel::UnhealthyForSensitiveGroups,
                    QualityLevel::Unhealthy,
                    QualityLevel::VeryUnhealthy,
                    QualityLevel::Hazardous,
                ]
                .map(|band| (band.label(), band.color())) {
                    li {
                        key: "{label}",
                        span {
                            style: "display: inline-block; width: 10px; height: 10px; border-radius: 5px; background: {color}; margin-right: 6px;",
                        }
                        "{label}"
                    }
                }
            }
            p {
                style: "color: #666; font-size: 13px;",
                "When the live source is unreachable the dashboard falls back to a
                 built-in dataset; the badge in the header shows which one you are
                 looking at."
            }
        }
    }
}
