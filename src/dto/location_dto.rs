use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Request to create or fully replace a location
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveLocationRequest {
    pub name: String,
    pub city: Option<String>,
    pub country: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub description: Option<String>,
}

// Location response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationResponse {
    pub id: Uuid,
    pub name: String,
    pub city: Option<String>,
    pub country: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

// Query parameters for /search; first non-null wins: name > country > city
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchLocationRequest {
    pub name: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
}
