//! Request/response types for the REST API

pub mod location_dto;
pub mod route_optimization_dto;
pub mod transportation_dto;
pub mod trip_dto;
