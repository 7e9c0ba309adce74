//! JSON wire representations of the catalog entities.

pub mod categories;
pub mod vendors;
