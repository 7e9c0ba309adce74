//! Diesel row types and service configuration.

pub mod category;
pub mod config;
pub mod vendor;
