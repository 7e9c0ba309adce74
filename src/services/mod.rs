//! Business logic for the catalog endpoints.
//!
//! Services are plain synchronous functions generic over the repository
//! traits so they can run on the blocking pool in production and against the
//! in-memory repository in unit tests.

pub use errors::{ServiceError, ServiceResult};

pub mod categories;
pub mod errors;
pub mod vendors;
