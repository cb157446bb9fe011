//! Database access
//!
//! Connection pooling and migrations for PostgreSQL.

pub mod connection;

pub use connection::DatabaseConnection;
