//! Application configuration

pub mod environment;
