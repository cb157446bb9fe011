//! Domain enums shared by DTOs and repositories

pub mod transportation_type;
pub mod trip_status;

pub use transportation_type::TransportationType;
pub use trip_status::TripStatus;
