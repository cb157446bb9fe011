use crate::dto::trip_dto::LocationInput;
use crate::repositories::location_repository::{Location, LocationRepository};
use crate::utils::errors::{not_found_error, validation_error, AppError};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Trip {
    pub id: Uuid,
    pub name: String,
    pub start_location_id: Uuid,
    pub end_location_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget: Decimal,
    pub notes: Option<String>,
    pub status: String,
    pub created_at: chrono::DateTime<Utc>,
}

impl Trip {
    /// Duration in days, both endpoints inclusive
    pub fn duration_in_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

pub struct TripRepository {
    pool: PgPool,
}

impl TripRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<Trip>, AppError> {
        let trips = sqlx::query_as::<_, Trip>("SELECT * FROM trips ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;
        Ok(trips)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Trip>, AppError> {
        let trip = sqlx::query_as::<_, Trip>("SELECT * FROM trips WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(trip)
    }

    /// Persist a trip. Embedded locations without an id are inserted in
    /// the same transaction, so the trip and its endpoints land atomically.
    pub async fn create(
        &self,
        name: &str,
        start_location: &LocationInput,
        end_location: &LocationInput,
        start_date: NaiveDate,
        end_date: NaiveDate,
        budget: Decimal,
        notes: Option<&str>,
        status: &str,
    ) -> Result<(Trip, Location, Location), AppError> {
        let mut tx = self.pool.begin().await?;

        let start = resolve_location(&mut tx, start_location).await?;
        let end = resolve_location(&mut tx, end_location).await?;

        let trip = sqlx::query_as::<_, Trip>(
            r#"
            INSERT INTO trips (id, name, start_location_id, end_location_id, start_date, end_date, budget, notes, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(start.id)
        .bind(end.id)
        .bind(start_date)
        .bind(end_date)
        .bind(budget)
        .bind(notes)
        .bind(status)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok((trip, start, end))
    }

    /// Full replace keyed by the path id. Same transactional location
    /// handling as create.
    pub async fn update(
        &self,
        id: Uuid,
        name: &str,
        start_location: &LocationInput,
        end_location: &LocationInput,
        start_date: NaiveDate,
        end_date: NaiveDate,
        budget: Decimal,
        notes: Option<&str>,
        status: &str,
    ) -> Result<(Trip, Location, Location), AppError> {
        let mut tx = self.pool.begin().await?;

        let start = resolve_location(&mut tx, start_location).await?;
        let end = resolve_location(&mut tx, end_location).await?;

        let trip = sqlx::query_as::<_, Trip>(
            r#"
            UPDATE trips
            SET name = $2, start_location_id = $3, end_location_id = $4, start_date = $5,
                end_date = $6, budget = $7, notes = $8, status = $9
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(start.id)
        .bind(end.id)
        .bind(start_date)
        .bind(end_date)
        .bind(budget)
        .bind(notes)
        .bind(status)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| not_found_error("Trip", &id.to_string()))?;

        tx.commit().await?;
        Ok((trip, start, end))
    }

    /// Overwrite only the status field, leaving everything else untouched
    pub async fn update_status(&self, id: Uuid, status: &str) -> Result<Option<Trip>, AppError> {
        let trip =
            sqlx::query_as::<_, Trip>("UPDATE trips SET status = $2 WHERE id = $1 RETURNING *")
                .bind(id)
                .bind(status)
                .fetch_optional(&self.pool)
                .await?;
        Ok(trip)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM trips WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Turn a trip endpoint into a concrete location row: look it up when an
/// id is given, insert it otherwise.
async fn resolve_location(
    tx: &mut Transaction<'_, Postgres>,
    input: &LocationInput,
) -> Result<Location, AppError> {
    if let Some(id) = input.id {
        let location = sqlx::query_as::<_, Location>("SELECT * FROM locations WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut **tx)
            .await?
            .ok_or_else(|| not_found_error("Location", &id.to_string()))?;
        return Ok(location);
    }

    let name = input
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| validation_error("name", "An embedded location requires a name"))?;

    let location = LocationRepository::insert(
        &mut **tx,
        name,
        input.city.as_deref(),
        input.country.as_deref(),
        input.latitude,
        input.longitude,
        input.description.as_deref(),
    )
    .await?;
    Ok(location)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trip_with_dates(start: &str, end: &str) -> Trip {
        Trip {
            id: Uuid::new_v4(),
            name: "Test".to_string(),
            start_location_id: Uuid::new_v4(),
            end_location_id: Uuid::new_v4(),
            start_date: start.parse().unwrap(),
            end_date: end.parse().unwrap(),
            budget: Decimal::from(1000),
            notes: None,
            status: "PLANNED".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_duration_same_day_is_one() {
        let trip = trip_with_dates("2025-06-01", "2025-06-01");
        assert_eq!(trip.duration_in_days(), 1);
    }

    #[test]
    fn test_duration_is_inclusive() {
        let trip = trip_with_dates("2025-06-01", "2025-06-05");
        assert_eq!(trip.duration_in_days(), 5);
    }
}
