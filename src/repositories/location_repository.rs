use crate::repositories::escape_like;
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Location {
    pub id: Uuid,
    pub name: String,
    pub city: Option<String>,
    pub country: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub description: Option<String>,
    pub created_at: chrono::DateTime<Utc>,
}

pub struct LocationRepository {
    pool: PgPool,
}

impl LocationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a location through any executor. The trip repository reuses
    /// this inside its transaction when a trip embeds a new location.
    pub async fn insert<'e, E>(
        executor: E,
        name: &str,
        city: Option<&str>,
        country: Option<&str>,
        latitude: Option<f64>,
        longitude: Option<f64>,
        description: Option<&str>,
    ) -> Result<Location, sqlx::Error>
    where
        E: sqlx::PgExecutor<'e>,
    {
        sqlx::query_as::<_, Location>(
            r#"
            INSERT INTO locations (id, name, city, country, latitude, longitude, description, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(city)
        .bind(country)
        .bind(latitude)
        .bind(longitude)
        .bind(description)
        .bind(Utc::now())
        .fetch_one(executor)
        .await
    }

    pub async fn create(
        &self,
        name: &str,
        city: Option<&str>,
        country: Option<&str>,
        latitude: Option<f64>,
        longitude: Option<f64>,
        description: Option<&str>,
    ) -> Result<Location, AppError> {
        let location =
            Self::insert(&self.pool, name, city, country, latitude, longitude, description)
                .await?;
        Ok(location)
    }

    pub async fn find_all(&self) -> Result<Vec<Location>, AppError> {
        let locations =
            sqlx::query_as::<_, Location>("SELECT * FROM locations ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(locations)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Location>, AppError> {
        let location = sqlx::query_as::<_, Location>("SELECT * FROM locations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(location)
    }

    pub async fn find_by_country(&self, country: &str) -> Result<Vec<Location>, AppError> {
        let locations = sqlx::query_as::<_, Location>(
            "SELECT * FROM locations WHERE country = $1 ORDER BY name",
        )
        .bind(country)
        .fetch_all(&self.pool)
        .await?;
        Ok(locations)
    }

    pub async fn find_by_city(&self, city: &str) -> Result<Vec<Location>, AppError> {
        let locations =
            sqlx::query_as::<_, Location>("SELECT * FROM locations WHERE city = $1 ORDER BY name")
                .bind(city)
                .fetch_all(&self.pool)
                .await?;
        Ok(locations)
    }

    /// Case-insensitive substring match on the location name. The input
    /// is matched literally; `%` and `_` carry no wildcard meaning.
    pub async fn search_by_name(&self, name_pattern: &str) -> Result<Vec<Location>, AppError> {
        let locations = sqlx::query_as::<_, Location>(
            "SELECT * FROM locations WHERE name ILIKE $1 ORDER BY name",
        )
        .bind(format!("%{}%", escape_like(name_pattern)))
        .fetch_all(&self.pool)
        .await?;
        Ok(locations)
    }

    /// Full replace; returns None when the id does not exist
    pub async fn update(
        &self,
        id: Uuid,
        name: &str,
        city: Option<&str>,
        country: Option<&str>,
        latitude: Option<f64>,
        longitude: Option<f64>,
        description: Option<&str>,
    ) -> Result<Option<Location>, AppError> {
        let location = sqlx::query_as::<_, Location>(
            r#"
            UPDATE locations
            SET name = $2, city = $3, country = $4, latitude = $5, longitude = $6, description = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(city)
        .bind(country)
        .bind(latitude)
        .bind(longitude)
        .bind(description)
        .fetch_optional(&self.pool)
        .await?;
        Ok(location)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM locations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::PgPool;

    #[sqlx::test]
    async fn test_search_treats_wildcards_literally(pool: PgPool) {
        let repository = LocationRepository::new(pool);
        repository
            .create("Lisbon", None, None, None, None, None)
            .await
            .unwrap();
        repository
            .create("100% Vista Point", None, None, None, None, None)
            .await
            .unwrap();

        let matches = repository.search_by_name("%").await.unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "100% Vista Point");
    }

    #[sqlx::test]
    async fn test_search_matches_substring_case_insensitively(pool: PgPool) {
        let repository = LocationRepository::new(pool);
        repository
            .create("Lisbon", None, None, None, None, None)
            .await
            .unwrap();

        let matches = repository.search_by_name("lis").await.unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Lisbon");
    }
}
