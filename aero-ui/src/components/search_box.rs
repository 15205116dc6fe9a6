//! City search box with a result list.
//!
//! Results stay in dataset order and only appear once the user has typed
//! something; clicking a result selects the city, which also clears the
//! query.

use crate::state::AppState;
use aero_sync::search::filter_cities;
use dioxus::prelude::*;

#[component]
pub fn SearchBox() -> Element {
    let mut state = use_context::<AppState>();
    let query = state.selection.read().query().to_string();
    let results_visible = state.selection.read().results_visible();

    // Owned (name, aqi text) pairs so the store borrow does not live into rsx.
    let hits: Vec<(String, String)> = if results_visible {
        let store = state.store.read();
        filter_cities(store.cities(), &query)
            .into_iter()
            .map(|c| {
                let aqi_text = c.aqi.map(|a| format!("AQI {}", a)).unwrap_or_default();
                (c.name.clone(), aqi_text)
            })
            .collect()
    } else {
        Vec::new()
    };

    let on_input = move |evt: Event<FormData>| {
        state.selection.write().set_query(&evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0; position: relative;",
            input {
                r#type: "text",
                placeholder: "Search city...",
                value: "{query}",
                style: "width: 100%; padding: 6px 8px; box-sizing: border-box;",
                oninput: on_input,
            }
            if results_visible {
                ul {
                    style: "list-style: none; margin: 4px 0 0 0; padding: 0; border: 1px solid #ddd; border-radius: 4px; background: #fff;",
                    if hits.is_empty() {
                        li {
                            style: "padding: 6px 8px; color: #999;",
                            "No matching cities"
                        }
                    }
                    for (name, aqi_text) in hits.iter() {
                        li {
                            key: "{name}",
                            style: "padding: 6px 8px; cursor: pointer; border-bottom: 1px solid #eee;",
                            onclick: {
                                let name = name.clone();
                                move |_| state.selection.write().select(&name)
                            },
                            "{name}"
                            if !aqi_text.is_empty() {
                                span {
                                    style: "float: right; color: #666;",
                                    "{aqi_text}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
