//! Domain entities and value types shared by the persistence and service layers.

pub mod category;
pub mod patch;
pub mod types;
pub mod vendor;
