//! HTTP client for the AeroSense data API.

use crate::city::{parse_cities, CityRecord};
use crate::error::{AqiError, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default fetch timeout; bounds how long the in-flight guard can hold.
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Connection settings for the data source.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the data source, e.g. `http://localhost:5000`
    pub base_url: String,
    pub fetch_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: "http://localhost:5000".to_string(),
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
        }
    }
}

/// User profile posted to the prediction endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionRequest {
    pub name: String,
    pub city: String,
    pub age: u32,
}

/// Prediction result: current AQI for the city plus free-text health advice.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PredictionResponse {
    #[serde(default)]
    pub name: String,
    pub city: String,
    pub aqi: u32,
    pub quality: String,
    pub advice: String,
    #[serde(default)]
    pub timestamp: String,
}

/// Client for the city-data and prediction endpoints.
///
/// Cheap to clone (the underlying `reqwest::Client` is reference-counted).
#[derive(Debug, Clone)]
pub struct AqiClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl AqiClient {
    pub fn new(config: ClientConfig) -> Self {
        AqiClient {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.config.fetch_timeout_secs)
    }

    /// Fetch the current snapshot for all monitored cities.
    ///
    /// Errors here are the caller's signal to substitute the fallback
    /// dataset; they are never surfaced to the user directly.
    pub async fn fetch_cities(&self) -> Result<Vec<CityRecord>> {
        let url = self.url("/api/cities");
        info!("Fetching city dataset from {}", url);

        let response = self
            .http
            .get(&url)
            .timeout(self.timeout())
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AqiError::BadStatus(status.as_u16()));
        }

        let body = response.text().await?;
        let cities = parse_cities(&body)?;
        if cities.is_empty() {
            return Err(AqiError::EmptyDataset);
        }
        Ok(cities)
    }

    /// Request an AQI prediction with health advice for a user profile.
    pub async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse> {
        let url = self.url("/api/predict-aqi");
        info!("Requesting prediction for {} in {}", request.name, request.city);

        let response = self
            .http
            .post(&url)
            .timeout(self.timeout())
            .json(request)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AqiError::BadStatus(status.as_u16()));
        }
        Ok(response.json().await?)
    }
}
