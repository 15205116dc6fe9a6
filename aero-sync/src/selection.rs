//! The single selected-city value shared by every input surface.
//!
//! Map marker clicks, the dropdown, and search-result clicks all funnel into
//! `select`; no surface keeps a shadow selection. The selected name may
//! reference a city absent from the current dataset (e.g. right after a
//! refresh drops it) — consumers render a placeholder for that case.

/// Owns the selected city and the search query state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionCoordinator {
    selected: String,
    query: String,
    results_visible: bool,
}

impl SelectionCoordinator {
    pub fn new(default_city: &str) -> Self {
        SelectionCoordinator {
            selected: default_city.to_string(),
            query: String::new(),
            results_visible: false,
        }
    }

    /// Select a city unconditionally (no validation against the dataset).
    ///
    /// Selecting is the terminal action of a search interaction, so any
    /// in-progress query and its visible results are cleared.
    pub fn select(&mut self, city_name: &str) {
        self.selected = city_name.to_string();
        self.query.clear();
        self.results_visible = false;
    }

    pub fn current(&self) -> &str {
        &self.selected
    }

    /// Update the search query; results are visible only while the query is
    /// non-empty (an empty query is not "show all cities").
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.results_visible = !self.query.is_empty();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results_visible(&self) -> bool {
        self.results_visible
    }
}

#[cfg(test)]
mod tests {
    use super::SelectionCoordinator;

    #[test]
    fn test_select_sets_current_unconditionally() {
        let mut selection = SelectionCoordinator::new("Delhi");
        assert_eq!(selection.current(), "Delhi");

        selection.select("Mumbai");
        assert_eq!(selection.current(), "Mumbai");

        // Names absent from the dataset are still accepted.
        selection.select("Atlantis");
        assert_eq!(selection.current(), "Atlantis");
    }

    #[test]
    fn test_select_clears_search_state() {
        let mut selection = SelectionCoordinator::new("Delhi");
        selection.set_query("mum");
        assert!(selection.results_visible());

        selection.select("Mumbai");
        assert_eq!(selection.query(), "");
        assert!(!selection.results_visible());
    }

    #[test]
    fn test_results_visible_tracks_query() {
        let mut selection = SelectionCoordinator::new("Delhi");
        assert!(!selection.results_visible());
        selection.set_query("k");
        assert!(selection.results_visible());
        selection.set_query("");
        assert!(!selection.results_visible());
    }

    #[test]
    fn test_search_then_select_flow() {
        use crate::search::filter_cities;
        use aero_aqi::city::parse_cities;

        let cities = parse_cities(
            r#"[{"name": "Delhi", "lat": 28.6, "lng": 77.2, "aqi": 168},
                {"name": "Mumbai", "lat": 19.1, "lng": 72.9, "aqi": 95}]"#,
        )
        .unwrap();
        let mut selection = SelectionCoordinator::new("Mumbai");

        selection.set_query("de");
        let hits = filter_cities(&cities, selection.query());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Delhi");

        let picked = hits[0].name.clone();
        selection.select(&picked);
        assert_eq!(selection.current(), "Delhi");
        assert!(!selection.results_visible());
    }

    #[test]
    fn test_last_write_wins() {
        let mut selection = SelectionCoordinator::new("Delhi");
        selection.select("Pune");
        selection.select("Kolkata");
        assert_eq!(selection.current(), "Kolkata");
    }
}
