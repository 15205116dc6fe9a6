//! Pure city-name filtering for the search box.

use aero_aqi::city::CityRecord;

/// Filter a dataset by case-insensitive substring match on the city name.
///
/// Dataset order is preserved (no relevance re-sort). An empty query yields
/// an empty list: search results only appear once the user has typed
/// something.
pub fn filter_cities<'a>(cities: &'a [CityRecord], query: &str) -> Vec<&'a CityRecord> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    cities
        .iter()
        .filter(|city| city.name.to_lowercase().contains(&needle))
        .collect()
}
