use crate::dto::location_dto::{LocationResponse, SaveLocationRequest, SearchLocationRequest};
use crate::repositories::location_repository::{Location, LocationRepository};
use crate::utils::errors::{not_found_error, validation_error, AppError};
use sqlx::PgPool;
use uuid::Uuid;

/// Which search filter applies; first non-null parameter wins
#[derive(Debug, PartialEq)]
enum SearchFilter {
    Name(String),
    Country(String),
    City(String),
    All,
}

impl SearchFilter {
    fn from_request(request: SearchLocationRequest) -> Self {
        if let Some(name) = request.name {
            SearchFilter::Name(name)
        } else if let Some(country) = request.country {
            SearchFilter::Country(country)
        } else if let Some(city) = request.city {
            SearchFilter::City(city)
        } else {
            SearchFilter::All
        }
    }
}

pub struct LocationController {
    repository: LocationRepository,
}

impl LocationController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: LocationRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<LocationResponse>, AppError> {
        let locations = self.repository.find_all().await?;
        Ok(locations.into_iter().map(to_response).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<LocationResponse, AppError> {
        let location = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Location", &id.to_string()))?;
        Ok(to_response(location))
    }

    pub async fn search(
        &self,
        request: SearchLocationRequest,
    ) -> Result<Vec<LocationResponse>, AppError> {
        let locations = match SearchFilter::from_request(request) {
            SearchFilter::Name(name) => self.repository.search_by_name(&name).await?,
            SearchFilter::Country(country) => self.repository.find_by_country(&country).await?,
            SearchFilter::City(city) => self.repository.find_by_city(&city).await?,
            SearchFilter::All => self.repository.find_all().await?,
        };
        Ok(locations.into_iter().map(to_response).collect())
    }

    pub async fn create(&self, request: SaveLocationRequest) -> Result<LocationResponse, AppError> {
        validate_location(&request)?;

        let location = self
            .repository
            .create(
                request.name.trim(),
                request.city.as_deref(),
                request.country.as_deref(),
                request.latitude,
                request.longitude,
                request.description.as_deref(),
            )
            .await?;
        Ok(to_response(location))
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: SaveLocationRequest,
    ) -> Result<LocationResponse, AppError> {
        validate_location(&request)?;

        let location = self
            .repository
            .update(
                id,
                request.name.trim(),
                request.city.as_deref(),
                request.country.as_deref(),
                request.latitude,
                request.longitude,
                request.description.as_deref(),
            )
            .await?
            .ok_or_else(|| not_found_error("Location", &id.to_string()))?;
        Ok(to_response(location))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Location", &id.to_string()));
        }
        Ok(())
    }
}

fn validate_location(request: &SaveLocationRequest) -> Result<(), AppError> {
    if request.name.trim().is_empty() {
        return Err(validation_error("name", "Location name is required"));
    }
    Ok(())
}

pub fn to_response(location: Location) -> LocationResponse {
    LocationResponse {
        id: location.id,
        name: location.name,
        city: location.city,
        country: location.country,
        latitude: location.latitude,
        longitude: location.longitude,
        description: location.description,
        created_at: location.created_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(
        name: Option<&str>,
        country: Option<&str>,
        city: Option<&str>,
    ) -> SearchLocationRequest {
        SearchLocationRequest {
            name: name.map(String::from),
            country: country.map(String::from),
            city: city.map(String::from),
        }
    }

    #[test]
    fn test_name_takes_priority_over_country_and_city() {
        let filter = SearchFilter::from_request(request(Some("tower"), Some("France"), Some("Paris")));
        assert_eq!(filter, SearchFilter::Name("tower".to_string()));
    }

    #[test]
    fn test_country_takes_priority_over_city() {
        let filter = SearchFilter::from_request(request(None, Some("France"), Some("Paris")));
        assert_eq!(filter, SearchFilter::Country("France".to_string()));
    }

    #[test]
    fn test_city_alone() {
        let filter = SearchFilter::from_request(request(None, None, Some("Paris")));
        assert_eq!(filter, SearchFilter::City("Paris".to_string()));
    }

    #[test]
    fn test_no_parameters_lists_everything() {
        let filter = SearchFilter::from_request(request(None, None, None));
        assert_eq!(filter, SearchFilter::All);
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let request = SaveLocationRequest {
            name: "   ".to_string(),
            city: None,
            country: None,
            latitude: None,
            longitude: None,
            description: None,
        };
        assert!(validate_location(&request).is_err());
    }
}
