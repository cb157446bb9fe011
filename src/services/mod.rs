//! Domain services

pub mod route_optimizer;
