use crate::dto::location_dto::LocationResponse;
use crate::models::TransportationType;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Request to create or fully replace a transportation option
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveTransportationRequest {
    #[serde(rename = "type")]
    pub transport_type: TransportationType,
    pub origin_location_id: Uuid,
    pub destination_location_id: Uuid,
    pub price: Decimal,
    pub available_seats: i32,
    pub duration_in_minutes: i32,
    pub distance: Option<f64>,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub company_name: Option<String>,
}

// Transportation response with both endpoints embedded
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportationResponse {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub transport_type: TransportationType,
    pub origin_location: LocationResponse,
    pub destination_location: LocationResponse,
    pub price: Decimal,
    pub available_seats: i32,
    pub duration_in_minutes: i32,
    pub distance: Option<f64>,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub company_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

// Query parameters for the search endpoints

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRangeQuery {
    pub min: Decimal,
    pub max: Decimal,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationPairQuery {
    pub departure_id: Uuid,
    pub arrival_id: Uuid,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeWindowQuery {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyQuery {
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatsQuery {
    pub min_seats: i32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassengersQuery {
    pub passengers: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_request_wire_shape() {
        let body = r#"{
            "type": "TRAIN",
            "originLocationId": "6f9619ff-8b86-4d01-b42d-00cf4fc964ff",
            "destinationLocationId": "7f9619ff-8b86-4d01-b42d-00cf4fc964ff",
            "price": "49.90",
            "availableSeats": 120,
            "durationInMinutes": 95,
            "departureTime": "2025-06-01T08:00:00Z",
            "arrivalTime": "2025-06-01T09:35:00Z",
            "companyName": "SNCF"
        }"#;

        let request: SaveTransportationRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.transport_type, TransportationType::Train);
        assert_eq!(request.available_seats, 120);
        assert!(request.distance.is_none());
        assert_eq!(request.company_name.as_deref(), Some("SNCF"));
    }
}
