//! Dropdown selector for choosing a city.

use crate::state::AppState;
use dioxus::prelude::*;

/// City dropdown selector.
/// Reads the dataset from AppState and writes through the shared `select`.
#[component]
pub fn CitySelector() -> Element {
    let mut state = use_context::<AppState>();
    let names: Vec<String> = state
        .store
        .read()
        .cities()
        .iter()
        .map(|c| c.name.clone())
        .collect();
    let selected = state.selection.read().current().to_string();

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        state.selection.write().select(&value);
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "city-select",
                style: "font-weight: bold; margin-right: 8px;",
                "City: "
            }
            select {
                id: "city-select",
                onchange: on_change,
                for name in names.iter() {
                    option {
                        value: "{name}",
                        selected: *name == selected,
                        "{name}"
                    }
                }
            }
        }
    }
}
