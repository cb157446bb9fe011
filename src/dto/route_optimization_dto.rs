use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Request to create an optimization record for a trip. The totals and
// route payload are filled in by the optimizer, not by the caller.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRouteOptimizationRequest {
    pub trip_id: Uuid,
    pub total_travel_cost: Option<Decimal>,
    pub optimization_criteria: Option<String>,
    pub optimization_type: Option<String>,
}

// Request to fully replace an optimization record. The trip association
// is preserved from the existing record and cannot be changed here.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRouteOptimizationRequest {
    pub total_distance: Option<f64>,
    pub total_travel_time_minutes: Option<i32>,
    pub total_travel_cost: Option<Decimal>,
    pub route_json: Option<String>,
    pub optimization_criteria: Option<String>,
    pub optimization_type: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReoptimizeParams {
    pub criteria: Option<String>,
    #[serde(rename = "type")]
    pub optimization_type: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareParams {
    pub trip_id: Uuid,
    pub strategies: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteOptimizationResponse {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub total_distance: Option<f64>,
    pub total_travel_time_minutes: Option<i32>,
    pub total_travel_cost: Option<Decimal>,
    pub route_json: Option<String>,
    pub optimization_criteria: Option<String>,
    pub optimization_type: Option<String>,
    pub created_at: DateTime<Utc>,
}
