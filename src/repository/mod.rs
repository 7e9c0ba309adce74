use crate::db::{DbConnection, DbPool};
use crate::domain::category::Category;
use crate::domain::types::{CategoryId, VendorId};
use crate::domain::vendor::Vendor;

use self::errors::RepositoryResult;

pub mod category;
pub mod errors;
pub mod vendor;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers and blocking tasks.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// List every stored category in store order.
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    /// Retrieve a category by its identifier.
    fn get_category_by_id(&self, id: &CategoryId) -> RepositoryResult<Option<Category>>;
    /// Number of stored categories.
    fn count_categories(&self) -> RepositoryResult<usize>;
}

/// Write operations for category entities.
pub trait CategoryWriter {
    /// Insert or replace a category, assigning an identifier when it has none.
    fn save_category(&self, category: &Category) -> RepositoryResult<Category>;
    /// Bulk variant of [`CategoryWriter::save_category`].
    fn save_categories(&self, categories: &[Category]) -> RepositoryResult<Vec<Category>>;
    /// Remove every category, returning how many were deleted.
    fn delete_all_categories(&self) -> RepositoryResult<usize>;
}

/// Read-only operations for vendor entities.
pub trait VendorReader {
    /// List every stored vendor in store order.
    fn list_vendors(&self) -> RepositoryResult<Vec<Vendor>>;
    /// Retrieve a vendor by its identifier.
    fn get_vendor_by_id(&self, id: &VendorId) -> RepositoryResult<Option<Vendor>>;
    /// Number of stored vendors.
    fn count_vendors(&self) -> RepositoryResult<usize>;
}

/// Write operations for vendor entities.
pub trait VendorWriter {
    /// Insert or replace a vendor, assigning an identifier when it has none.
    fn save_vendor(&self, vendor: &Vendor) -> RepositoryResult<Vendor>;
    /// Bulk variant of [`VendorWriter::save_vendor`].
    fn save_vendors(&self, vendors: &[Vendor]) -> RepositoryResult<Vec<Vendor>>;
    /// Remove every vendor, returning how many were deleted.
    fn delete_all_vendors(&self) -> RepositoryResult<usize>;
}
