//! Core air-quality types and data API client for the AeroSense dashboard.

pub mod calc;
pub mod city;
pub mod client;
pub mod error;
pub mod fallback;
pub mod quality;
