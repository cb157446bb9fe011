//! Shared utilities
//!
//! Error handling and the helpers used across controllers.

pub mod errors;
