use crate::repositories::escape_like;
use crate::utils::errors::AppError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Transportation {
    pub id: Uuid,
    #[sqlx(rename = "type")]
    pub transport_type: String,
    pub origin_location_id: Uuid,
    pub destination_location_id: Uuid,
    pub price: Decimal,
    pub available_seats: i32,
    pub duration_in_minutes: i32,
    pub distance: Option<f64>,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub company_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Transportation {
    /// Minutes between departure and arrival, computed from the schedule
    /// rather than the stored duration field
    pub fn travel_duration_minutes(&self) -> i64 {
        (self.arrival_time - self.departure_time).num_minutes()
    }

    /// Ticket price multiplied by the passenger count
    pub fn total_cost(&self, passengers: i32) -> Decimal {
        self.price * Decimal::from(passengers)
    }
}

pub struct TransportationRepository {
    pool: PgPool,
}

impl TransportationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<Transportation>, AppError> {
        let rows = sqlx::query_as::<_, Transportation>(
            "SELECT * FROM transportation ORDER BY departure_time",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Transportation>, AppError> {
        let row = sqlx::query_as::<_, Transportation>("SELECT * FROM transportation WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn find_by_type(&self, transport_type: &str) -> Result<Vec<Transportation>, AppError> {
        let rows = sqlx::query_as::<_, Transportation>(
            "SELECT * FROM transportation WHERE type = $1 ORDER BY departure_time",
        )
        .bind(transport_type)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn find_by_price_between(
        &self,
        min: Decimal,
        max: Decimal,
    ) -> Result<Vec<Transportation>, AppError> {
        let rows = sqlx::query_as::<_, Transportation>(
            "SELECT * FROM transportation WHERE price BETWEEN $1 AND $2 ORDER BY price",
        )
        .bind(min)
        .bind(max)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn find_by_locations(
        &self,
        origin_id: Uuid,
        destination_id: Uuid,
    ) -> Result<Vec<Transportation>, AppError> {
        let rows = sqlx::query_as::<_, Transportation>(
            r#"
            SELECT * FROM transportation
            WHERE origin_location_id = $1 AND destination_location_id = $2
            ORDER BY departure_time
            "#,
        )
        .bind(origin_id)
        .bind(destination_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Options fully contained in the window: departure at or after the
    /// start, arrival at or before the end
    pub async fn find_available_between(
        &self,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Result<Vec<Transportation>, AppError> {
        let rows = sqlx::query_as::<_, Transportation>(
            r#"
            SELECT * FROM transportation
            WHERE departure_time >= $1 AND arrival_time <= $2
            ORDER BY departure_time
            "#,
        )
        .bind(start_time)
        .bind(end_time)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Case-insensitive substring match on the company name. The input
    /// is matched literally; `%` and `_` carry no wildcard meaning.
    pub async fn find_by_company_name(&self, pattern: &str) -> Result<Vec<Transportation>, AppError> {
        let rows = sqlx::query_as::<_, Transportation>(
            "SELECT * FROM transportation WHERE company_name ILIKE $1 ORDER BY departure_time",
        )
        .bind(format!("%{}%", escape_like(pattern)))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn find_by_min_seats(&self, min_seats: i32) -> Result<Vec<Transportation>, AppError> {
        let rows = sqlx::query_as::<_, Transportation>(
            "SELECT * FROM transportation WHERE available_seats >= $1 ORDER BY departure_time",
        )
        .bind(min_seats)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        transport_type: &str,
        origin_location_id: Uuid,
        destination_location_id: Uuid,
        price: Decimal,
        available_seats: i32,
        duration_in_minutes: i32,
        distance: Option<f64>,
        departure_time: DateTime<Utc>,
        arrival_time: DateTime<Utc>,
        company_name: Option<&str>,
    ) -> Result<Transportation, AppError> {
        let row = sqlx::query_as::<_, Transportation>(
            r#"
            INSERT INTO transportation (id, type, origin_location_id, destination_location_id, price,
                                        available_seats, duration_in_minutes, distance,
                                        departure_time, arrival_time, company_name, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(transport_type)
        .bind(origin_location_id)
        .bind(destination_location_id)
        .bind(price)
        .bind(available_seats)
        .bind(duration_in_minutes)
        .bind(distance)
        .bind(departure_time)
        .bind(arrival_time)
        .bind(company_name)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Full replace; returns None when the id does not exist
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        transport_type: &str,
        origin_location_id: Uuid,
        destination_location_id: Uuid,
        price: Decimal,
        available_seats: i32,
        duration_in_minutes: i32,
        distance: Option<f64>,
        departure_time: DateTime<Utc>,
        arrival_time: DateTime<Utc>,
        company_name: Option<&str>,
    ) -> Result<Option<Transportation>, AppError> {
        let row = sqlx::query_as::<_, Transportation>(
            r#"
            UPDATE transportation
            SET type = $2, origin_location_id = $3, destination_location_id = $4, price = $5,
                available_seats = $6, duration_in_minutes = $7, distance = $8,
                departure_time = $9, arrival_time = $10, company_name = $11
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(transport_type)
        .bind(origin_location_id)
        .bind(destination_location_id)
        .bind(price)
        .bind(available_seats)
        .bind(duration_in_minutes)
        .bind(distance)
        .bind(departure_time)
        .bind(arrival_time)
        .bind(company_name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM transportation WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(departure: &str, arrival: &str, price: Decimal) -> Transportation {
        Transportation {
            id: Uuid::new_v4(),
            transport_type: "TRAIN".to_string(),
            origin_location_id: Uuid::new_v4(),
            destination_location_id: Uuid::new_v4(),
            price,
            available_seats: 100,
            duration_in_minutes: 95,
            distance: None,
            departure_time: departure.parse().unwrap(),
            arrival_time: arrival.parse().unwrap(),
            company_name: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_travel_duration_from_schedule() {
        let row = sample(
            "2025-06-01T08:00:00Z",
            "2025-06-01T09:35:00Z",
            Decimal::from(50),
        );
        assert_eq!(row.travel_duration_minutes(), 95);
    }

    #[test]
    fn test_total_cost_scales_with_passengers() {
        let row = sample(
            "2025-06-01T08:00:00Z",
            "2025-06-01T09:35:00Z",
            Decimal::new(4990, 2),
        );
        assert_eq!(row.total_cost(3), Decimal::new(14970, 2));
    }
}
