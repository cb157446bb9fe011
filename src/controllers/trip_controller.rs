use crate::controllers::location_controller;
use crate::dto::trip_dto::{SaveTripRequest, TripResponse, UpdateTripStatusRequest};
use crate::models::TripStatus;
use crate::repositories::location_repository::{Location, LocationRepository};
use crate::repositories::trip_repository::{Trip, TripRepository};
use crate::utils::errors::{internal_error, not_found_error, validation_error, AppError};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

pub struct TripController {
    repository: TripRepository,
    locations: LocationRepository,
}

impl TripController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: TripRepository::new(pool.clone()),
            locations: LocationRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<TripResponse>, AppError> {
        let trips = self.repository.find_all().await?;
        let mut responses = Vec::with_capacity(trips.len());
        for trip in trips {
            responses.push(self.assemble_response(trip).await?);
        }
        Ok(responses)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<TripResponse, AppError> {
        let trip = self.find_existing(id).await?;
        self.assemble_response(trip).await
    }

    pub async fn create(&self, request: SaveTripRequest) -> Result<TripResponse, AppError> {
        validate_trip(&request)?;

        // New trips default to PLANNED unless the caller says otherwise
        let status = request.status.unwrap_or(TripStatus::Planned);

        let (trip, start, end) = self
            .repository
            .create(
                request.name.trim(),
                &request.start_location,
                &request.end_location,
                request.start_date,
                request.end_date,
                request.budget,
                request.notes.as_deref(),
                status.as_str(),
            )
            .await?;
        to_response(trip, start, end)
    }

    pub async fn update(&self, id: Uuid, request: SaveTripRequest) -> Result<TripResponse, AppError> {
        validate_trip(&request)?;

        // An omitted status keeps whatever the stored record has; only an
        // explicit status in the body changes it
        let status = match request.status {
            Some(status) => status,
            None => {
                let existing = self.find_existing(id).await?;
                TripStatus::parse(&existing.status)
                    .ok_or_else(|| internal_error("Trip row carries an unknown status"))?
            }
        };

        let (trip, start, end) = self
            .repository
            .update(
                id,
                request.name.trim(),
                &request.start_location,
                &request.end_location,
                request.start_date,
                request.end_date,
                request.budget,
                request.notes.as_deref(),
                status.as_str(),
            )
            .await?;
        to_response(trip, start, end)
    }

    pub async fn update_status(
        &self,
        id: Uuid,
        request: UpdateTripStatusRequest,
    ) -> Result<TripResponse, AppError> {
        let trip = self
            .repository
            .update_status(id, request.status.as_str())
            .await?
            .ok_or_else(|| not_found_error("Trip", &id.to_string()))?;
        self.assemble_response(trip).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Trip", &id.to_string()));
        }
        Ok(())
    }

    /// Total transportation cost for the trip. Cost aggregation is not
    /// implemented upstream; this always reports zero.
    pub async fn calculate_cost(&self, id: Uuid) -> Result<Decimal, AppError> {
        self.find_existing(id).await?;
        Ok(Decimal::ZERO)
    }

    /// Trip length in days, both endpoints inclusive
    pub async fn calculate_duration(&self, id: Uuid) -> Result<i64, AppError> {
        let trip = self.find_existing(id).await?;
        Ok(trip.duration_in_days())
    }

    async fn find_existing(&self, id: Uuid) -> Result<Trip, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Trip", &id.to_string()))
    }

    /// Load the endpoint locations referenced by a trip row and build the
    /// response. The foreign keys guarantee both exist.
    async fn assemble_response(&self, trip: Trip) -> Result<TripResponse, AppError> {
        let start = self
            .locations
            .find_by_id(trip.start_location_id)
            .await?
            .ok_or_else(|| internal_error("Trip references a missing start location"))?;
        let end = self
            .locations
            .find_by_id(trip.end_location_id)
            .await?
            .ok_or_else(|| internal_error("Trip references a missing end location"))?;
        to_response(trip, start, end)
    }
}

fn validate_trip(request: &SaveTripRequest) -> Result<(), AppError> {
    if request.name.trim().is_empty() {
        return Err(validation_error("name", "Trip name is required"));
    }
    validate_date_range(request.start_date, request.end_date)
}

fn validate_date_range(start_date: NaiveDate, end_date: NaiveDate) -> Result<(), AppError> {
    if start_date > end_date {
        return Err(validation_error(
            "startDate",
            "Start date must not be after end date",
        ));
    }
    Ok(())
}

fn to_response(trip: Trip, start: Location, end: Location) -> Result<TripResponse, AppError> {
    let status = TripStatus::parse(&trip.status)
        .ok_or_else(|| internal_error("Trip row carries an unknown status"))?;

    Ok(TripResponse {
        id: trip.id,
        name: trip.name,
        start_location: location_controller::to_response(start),
        end_location: location_controller::to_response(end),
        start_date: trip.start_date,
        end_date: trip.end_date,
        budget: trip.budget,
        notes: trip.notes,
        status,
        created_at: trip.created_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::trip_dto::LocationInput;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn endpoint(name: &str) -> LocationInput {
        LocationInput {
            id: None,
            name: Some(name.to_string()),
            city: None,
            country: None,
            latitude: None,
            longitude: None,
            description: None,
        }
    }

    fn save_request(status: Option<TripStatus>) -> SaveTripRequest {
        SaveTripRequest {
            name: "Alps by rail".to_string(),
            start_location: endpoint("Zurich"),
            end_location: endpoint("Innsbruck"),
            start_date: date("2025-06-01"),
            end_date: date("2025-06-05"),
            budget: Decimal::from(1500),
            notes: None,
            status,
        }
    }

    #[test]
    fn test_date_range_rejects_inverted_dates() {
        assert!(validate_date_range(date("2025-06-05"), date("2025-06-01")).is_err());
    }

    #[test]
    fn test_date_range_accepts_single_day() {
        assert!(validate_date_range(date("2025-06-01"), date("2025-06-01")).is_ok());
    }

    #[test]
    fn test_date_range_accepts_normal_range() {
        assert!(validate_date_range(date("2025-06-01"), date("2025-06-05")).is_ok());
    }

    #[sqlx::test]
    async fn test_update_without_status_keeps_stored_status(pool: PgPool) {
        let controller = TripController::new(pool);
        let created = controller.create(save_request(None)).await.unwrap();
        controller
            .update_status(
                created.id,
                UpdateTripStatusRequest {
                    status: TripStatus::InProgress,
                },
            )
            .await
            .unwrap();

        let updated = controller.update(created.id, save_request(None)).await.unwrap();
        assert_eq!(updated.status, TripStatus::InProgress);
    }

    #[sqlx::test]
    async fn test_update_with_explicit_status_applies_it(pool: PgPool) {
        let controller = TripController::new(pool);
        let created = controller.create(save_request(None)).await.unwrap();
        assert_eq!(created.status, TripStatus::Planned);

        let updated = controller
            .update(created.id, save_request(Some(TripStatus::Completed)))
            .await
            .unwrap();
        assert_eq!(updated.status, TripStatus::Completed);
    }
}
