use crate::controllers::location_controller;
use crate::dto::transportation_dto::{SaveTransportationRequest, TransportationResponse};
use crate::models::TransportationType;
use crate::repositories::location_repository::{Location, LocationRepository};
use crate::repositories::transportation_repository::{Transportation, TransportationRepository};
use crate::utils::errors::{
    bad_request_error, internal_error, not_found_error, validation_error, AppError,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

pub struct TransportationController {
    repository: TransportationRepository,
    locations: LocationRepository,
}

impl TransportationController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: TransportationRepository::new(pool.clone()),
            locations: LocationRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<TransportationResponse>, AppError> {
        let rows = self.repository.find_all().await?;
        self.assemble_all(rows).await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<TransportationResponse, AppError> {
        let row = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Transportation", &id.to_string()))?;
        self.assemble_response(row).await
    }

    pub async fn list_by_type(
        &self,
        transport_type: TransportationType,
    ) -> Result<Vec<TransportationResponse>, AppError> {
        let rows = self.repository.find_by_type(transport_type.as_str()).await?;
        self.assemble_all(rows).await
    }

    pub async fn search_by_price(
        &self,
        min: Decimal,
        max: Decimal,
    ) -> Result<Vec<TransportationResponse>, AppError> {
        let rows = self.repository.find_by_price_between(min, max).await?;
        self.assemble_all(rows).await
    }

    pub async fn search_by_locations(
        &self,
        departure_id: Uuid,
        arrival_id: Uuid,
    ) -> Result<Vec<TransportationResponse>, AppError> {
        let rows = self
            .repository
            .find_by_locations(departure_id, arrival_id)
            .await?;
        self.assemble_all(rows).await
    }

    pub async fn search_available(
        &self,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Result<Vec<TransportationResponse>, AppError> {
        let rows = self
            .repository
            .find_available_between(start_time, end_time)
            .await?;
        self.assemble_all(rows).await
    }

    pub async fn search_by_company(
        &self,
        name: &str,
    ) -> Result<Vec<TransportationResponse>, AppError> {
        let rows = self.repository.find_by_company_name(name).await?;
        self.assemble_all(rows).await
    }

    pub async fn search_by_seats(
        &self,
        min_seats: i32,
    ) -> Result<Vec<TransportationResponse>, AppError> {
        let rows = self.repository.find_by_min_seats(min_seats).await?;
        self.assemble_all(rows).await
    }

    pub async fn create(
        &self,
        request: SaveTransportationRequest,
    ) -> Result<TransportationResponse, AppError> {
        validate_transportation(&request)?;
        let (origin, destination) = self.resolve_endpoints(&request).await?;

        let row = self
            .repository
            .create(
                request.transport_type.as_str(),
                origin.id,
                destination.id,
                request.price,
                request.available_seats,
                request.duration_in_minutes,
                request.distance,
                request.departure_time,
                request.arrival_time,
                request.company_name.as_deref(),
            )
            .await?;
        to_response(row, origin, destination)
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: SaveTransportationRequest,
    ) -> Result<TransportationResponse, AppError> {
        validate_transportation(&request)?;
        let (origin, destination) = self.resolve_endpoints(&request).await?;

        let row = self
            .repository
            .update(
                id,
                request.transport_type.as_str(),
                origin.id,
                destination.id,
                request.price,
                request.available_seats,
                request.duration_in_minutes,
                request.distance,
                request.departure_time,
                request.arrival_time,
                request.company_name.as_deref(),
            )
            .await?
            .ok_or_else(|| not_found_error("Transportation", &id.to_string()))?;
        to_response(row, origin, destination)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Transportation", &id.to_string()));
        }
        Ok(())
    }

    /// Minutes between the scheduled departure and arrival
    pub async fn calculate_duration(&self, id: Uuid) -> Result<i64, AppError> {
        let row = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Transportation", &id.to_string()))?;
        Ok(row.travel_duration_minutes())
    }

    /// Price times passenger count
    pub async fn calculate_cost(&self, id: Uuid, passengers: i32) -> Result<Decimal, AppError> {
        if passengers < 0 {
            return Err(bad_request_error("Passenger count cannot be negative"));
        }
        let row = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Transportation", &id.to_string()))?;
        Ok(row.total_cost(passengers))
    }

    /// Both endpoints must reference existing locations
    async fn resolve_endpoints(
        &self,
        request: &SaveTransportationRequest,
    ) -> Result<(Location, Location), AppError> {
        let origin = self
            .locations
            .find_by_id(request.origin_location_id)
            .await?
            .ok_or_else(|| {
                not_found_error("Location", &request.origin_location_id.to_string())
            })?;
        let destination = self
            .locations
            .find_by_id(request.destination_location_id)
            .await?
            .ok_or_else(|| {
                not_found_error("Location", &request.destination_location_id.to_string())
            })?;
        Ok((origin, destination))
    }

    async fn assemble_all(
        &self,
        rows: Vec<Transportation>,
    ) -> Result<Vec<TransportationResponse>, AppError> {
        let mut responses = Vec::with_capacity(rows.len());
        for row in rows {
            responses.push(self.assemble_response(row).await?);
        }
        Ok(responses)
    }

    async fn assemble_response(
        &self,
        row: Transportation,
    ) -> Result<TransportationResponse, AppError> {
        let origin = self
            .locations
            .find_by_id(row.origin_location_id)
            .await?
            .ok_or_else(|| internal_error("Transportation references a missing origin"))?;
        let destination = self
            .locations
            .find_by_id(row.destination_location_id)
            .await?
            .ok_or_else(|| internal_error("Transportation references a missing destination"))?;
        to_response(row, origin, destination)
    }
}

fn validate_transportation(request: &SaveTransportationRequest) -> Result<(), AppError> {
    // Equal departure and arrival is allowed; only an inverted schedule is not
    if request.departure_time > request.arrival_time {
        return Err(validation_error(
            "departureTime",
            "Departure time cannot be after arrival time",
        ));
    }
    if request.price < Decimal::ZERO {
        return Err(validation_error("price", "Price cannot be negative"));
    }
    if request.available_seats < 0 {
        return Err(validation_error(
            "availableSeats",
            "Available seats cannot be negative",
        ));
    }
    Ok(())
}

fn to_response(
    row: Transportation,
    origin: Location,
    destination: Location,
) -> Result<TransportationResponse, AppError> {
    let transport_type = TransportationType::parse(&row.transport_type)
        .ok_or_else(|| internal_error("Transportation row carries an unknown type"))?;

    Ok(TransportationResponse {
        id: row.id,
        transport_type,
        origin_location: location_controller::to_response(origin),
        destination_location: location_controller::to_response(destination),
        price: row.price,
        available_seats: row.available_seats,
        duration_in_minutes: row.duration_in_minutes,
        distance: row.distance,
        departure_time: row.departure_time,
        arrival_time: row.arrival_time,
        company_name: row.company_name,
        created_at: row.created_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(departure: &str, arrival: &str, price: Decimal, seats: i32) -> SaveTransportationRequest {
        SaveTransportationRequest {
            transport_type: TransportationType::Train,
            origin_location_id: Uuid::new_v4(),
            destination_location_id: Uuid::new_v4(),
            price,
            available_seats: seats,
            duration_in_minutes: 95,
            distance: None,
            departure_time: departure.parse().unwrap(),
            arrival_time: arrival.parse().unwrap(),
            company_name: None,
        }
    }

    #[test]
    fn test_rejects_departure_after_arrival() {
        let r = request(
            "2025-06-01T10:00:00Z",
            "2025-06-01T08:00:00Z",
            Decimal::from(50),
            10,
        );
        assert!(validate_transportation(&r).is_err());
    }

    #[test]
    fn test_accepts_equal_departure_and_arrival() {
        let r = request(
            "2025-06-01T08:00:00Z",
            "2025-06-01T08:00:00Z",
            Decimal::from(50),
            10,
        );
        assert!(validate_transportation(&r).is_ok());
    }

    #[test]
    fn test_rejects_negative_price() {
        let r = request(
            "2025-06-01T08:00:00Z",
            "2025-06-01T09:00:00Z",
            Decimal::from(-1),
            10,
        );
        assert!(validate_transportation(&r).is_err());
    }

    #[test]
    fn test_rejects_negative_seats() {
        let r = request(
            "2025-06-01T08:00:00Z",
            "2025-06-01T09:00:00Z",
            Decimal::from(50),
            -1,
        );
        assert!(validate_transportation(&r).is_err());
    }

    #[test]
    fn test_accepts_zero_price_and_zero_seats() {
        let r = request(
            "2025-06-01T08:00:00Z",
            "2025-06-01T09:00:00Z",
            Decimal::ZERO,
            0,
        );
        assert!(validate_transportation(&r).is_ok());
    }
}
