//! Controllers
//!
//! Validation and DTO mapping between the HTTP layer and the
//! repositories. One controller per resource.

pub mod location_controller;
pub mod route_optimization_controller;
pub mod transportation_controller;
pub mod trip_controller;
