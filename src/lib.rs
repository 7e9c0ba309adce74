//! Core library exports for the vendor catalog service.
//!
//! This crate exposes the domain model, persistence layer, services and HTTP
//! routes used by the catalog REST API.

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod error_conversions;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod schema;

#[cfg(feature = "server")]
pub mod bootstrap;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;
