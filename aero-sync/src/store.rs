//! Authoritative owner of the city dataset.
//!
//! `CityDataStore` is a sans-IO state machine: the async driver (in the UI
//! layer) calls `begin_refresh` before issuing a request and `apply_refresh`
//! with the outcome. The dataset is replaced wholesale on every outcome, so
//! readers never observe a partial update, and a failed fetch substitutes the
//! built-in fallback set instead of surfacing an error.

use aero_aqi::city::CityRecord;
use aero_aqi::error::AqiError;
use aero_aqi::fallback::fallback_cities;
use chrono::{DateTime, Utc};
use log::{info, warn};
use std::collections::HashSet;

/// Where the current dataset snapshot came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Live,
    Fallback,
}

impl DataSource {
    pub fn label(self) -> &'static str {
        match self {
            DataSource::Live => "live",
            DataSource::Fallback => "fallback",
        }
    }
}

/// Owns the city dataset, the refresh in-flight guard, and the fetch
/// timestamp.
#[derive(Debug, Clone)]
pub struct CityDataStore {
    cities: Vec<CityRecord>,
    last_updated: Option<DateTime<Utc>>,
    source: DataSource,
    in_flight: bool,
    retired: bool,
}

impl Default for CityDataStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CityDataStore {
    /// An empty store; the first `refresh` populates it.
    pub fn new() -> Self {
        CityDataStore {
            cities: Vec::new(),
            last_updated: None,
            source: DataSource::Fallback,
            in_flight: false,
            retired: false,
        }
    }

    /// Claim the in-flight guard before issuing a request.
    ///
    /// Returns `false` when a refresh is already in flight (the caller must
    /// coalesce, not queue) or the store has been retired.
    pub fn begin_refresh(&mut self) -> bool {
        if self.in_flight || self.retired {
            return false;
        }
        self.in_flight = true;
        true
    }

    /// Record a refresh outcome.
    ///
    /// On success the dataset is replaced with the fetched records (duplicate
    /// names dropped, first occurrence wins). On failure the failure is
    /// logged and the fallback dataset is substituted, every record stamped
    /// `source = "fallback"`. A result arriving after `retire` is discarded.
    pub fn apply_refresh(&mut self, result: Result<Vec<CityRecord>, AqiError>) {
        self.in_flight = false;
        if self.retired {
            info!("Discarding refresh result for retired store");
            return;
        }
        match result {
            Ok(cities) => {
                self.cities = dedup_by_name(cities);
                self.source = DataSource::Live;
                info!("Dataset refreshed: {} cities (live)", self.cities.len());
            }
            Err(e) => {
                warn!("City fetch failed, substituting fallback dataset: {}", e);
                let mut cities = fallback_cities();
                for city in &mut cities {
                    city.source = "fallback".to_string();
                }
                self.cities = cities;
                self.source = DataSource::Fallback;
            }
        }
        self.last_updated = Some(Utc::now());
    }

    /// Stop accepting refreshes and discard any in-flight result.
    pub fn retire(&mut self) {
        self.retired = true;
    }

    /// The current dataset snapshot, in source order.
    pub fn cities(&self) -> &[CityRecord] {
        &self.cities
    }

    /// Look up one city by name. `None` covers the dangling-selection case.
    pub fn city(&self, name: &str) -> Option<&CityRecord> {
        self.cities.iter().find(|c| c.name == name)
    }

    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }

    pub fn source(&self) -> DataSource {
        self.source
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Whether at least one refresh outcome has been applied.
    pub fn has_loaded(&self) -> bool {
        self.last_updated.is_some()
    }
}

fn dedup_by_name(mut cities: Vec<CityRecord>) -> Vec<CityRecord> {
    let mut seen: HashSet<String> = HashSet::with_capacity(cities.len());
    cities.retain(|c| seen.insert(c.name.clone()));
    cities
}

#[cfg(test)]
mod tests {
    use super::{CityDataStore, DataSource};
    use aero_aqi::city::CityRecord;
    use aero_aqi::error::AqiError;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn sample(name: &str, aqi: u32) -> CityRecord {
        CityRecord {
            name: name.to_string(),
            lat: 20.0,
            lng: 77.0,
            aqi: Some(aqi),
            quality: String::new(),
            pm25: None,
            pm10: None,
            o3: None,
            no2: None,
            so2: None,
            co: None,
            temperature: None,
            humidity: None,
            last_updated: String::new(),
            source: "live".to_string(),
        }
    }

    #[test]
    fn test_successful_refresh_replaces_dataset() {
        let mut store = CityDataStore::new();
        assert!(store.begin_refresh());
        store.apply_refresh(Ok(vec![sample("Delhi", 168), sample("Mumbai", 95)]));
        assert_eq!(store.cities().len(), 2);
        assert_eq!(store.source(), DataSource::Live);
        assert!(store.has_loaded());
        assert!(!store.is_in_flight());

        assert!(store.begin_refresh());
        store.apply_refresh(Ok(vec![sample("Pune", 82)]));
        assert_eq!(store.cities().len(), 1);
        assert_eq!(store.cities()[0].name, "Pune");
    }

    #[test]
    fn test_failed_refresh_substitutes_fallback() {
        let mut store = CityDataStore::new();
        assert!(store.begin_refresh());
        store.apply_refresh(Err(AqiError::BadStatus(503)));
        assert!(!store.cities().is_empty());
        assert!(store.cities().iter().all(|c| c.source == "fallback"));
        assert_eq!(store.source(), DataSource::Fallback);
        assert!(store.has_loaded());
    }

    #[test]
    fn test_duplicate_names_first_occurrence_wins() {
        let mut store = CityDataStore::new();
        assert!(store.begin_refresh());
        store.apply_refresh(Ok(vec![
            sample("Delhi", 168),
            sample("Delhi", 40),
            sample("Mumbai", 95),
        ]));
        assert_eq!(store.cities().len(), 2);
        assert_eq!(store.city("Delhi").unwrap().aqi, Some(168));
    }

    #[test]
    fn test_in_flight_guard_coalesces() {
        let mut store = CityDataStore::new();
        assert!(store.begin_refresh());
        // A manual refresh arriving while one is airborne issues no request.
        assert!(!store.begin_refresh());
        store.apply_refresh(Ok(vec![sample("Delhi", 168)]));
        assert!(store.begin_refresh());
        store.apply_refresh(Ok(vec![sample("Delhi", 170)]));
    }

    #[test]
    fn test_retired_store_discards_results() {
        let mut store = CityDataStore::new();
        assert!(store.begin_refresh());
        store.retire();
        store.apply_refresh(Ok(vec![sample("Delhi", 168)]));
        assert!(store.cities().is_empty());
        assert!(!store.has_loaded());
        assert!(!store.begin_refresh());
    }

    #[tokio::test]
    async fn test_overlapping_refreshes_issue_one_request() {
        let store = Rc::new(RefCell::new(CityDataStore::new()));
        let requests = Rc::new(Cell::new(0usize));

        // Mirrors the UI driver: claim the guard, hit the fetch boundary,
        // apply the outcome.
        async fn refresh(store: Rc<RefCell<CityDataStore>>, requests: Rc<Cell<usize>>) {
            if !store.borrow_mut().begin_refresh() {
                return;
            }
            requests.set(requests.get() + 1);
            tokio::task::yield_now().await;
            store
                .borrow_mut()
                .apply_refresh(Ok(vec![sample("Delhi", 168)]));
        }

        tokio::join!(
            refresh(store.clone(), requests.clone()),
            refresh(store.clone(), requests.clone()),
        );

        assert_eq!(requests.get(), 1);
        assert!(!store.borrow().is_in_flight());
        assert_eq!(store.borrow().cities().len(), 1);
    }
}
