//! Axum routers, one per resource

pub mod location_routes;
pub mod route_optimization_routes;
pub mod transportation_routes;
pub mod trip_routes;
