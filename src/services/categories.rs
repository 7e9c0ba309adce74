use crate::domain::category::Category;
use crate::domain::patch::{DirtyCheck, merge_patch};
use crate::domain::types::CategoryId;
use crate::repository::{CategoryReader, CategoryWriter};

use super::{ServiceError, ServiceResult};

pub fn list_categories<R>(repo: &R) -> ServiceResult<Vec<Category>>
where
    R: CategoryReader,
{
    repo.list_categories().map_err(|e| {
        log::error!("Failed to list categories: {e}");
        ServiceError::Internal
    })
}

/// Look up a single category. A miss is `Ok(None)`, not an error.
pub fn get_category<R>(id: &CategoryId, repo: &R) -> ServiceResult<Option<Category>>
where
    R: CategoryReader,
{
    repo.get_category_by_id(id).map_err(|e| {
        log::error!("Failed to get category {id}: {e}");
        ServiceError::Internal
    })
}

/// Persist a new category through the bulk save path.
///
/// Any identifier supplied by the client is discarded so the store assigns one.
pub fn create_category<R>(mut category: Category, repo: &R) -> ServiceResult<Vec<Category>>
where
    R: CategoryWriter,
{
    category.id = None;

    repo.save_categories(&[category]).map_err(|e| {
        log::error!("Failed to create category: {e}");
        ServiceError::Internal
    })
}

/// Fully replace the category stored under `id`. The path id wins over any id
/// in the body.
pub fn update_category<R>(
    id: CategoryId,
    mut category: Category,
    repo: &R,
) -> ServiceResult<Category>
where
    R: CategoryWriter,
{
    category.id = Some(id);

    repo.save_category(&category).map_err(|e| {
        log::error!("Failed to update category: {e}");
        ServiceError::Internal
    })
}

/// Merge `patch` onto the stored category and save it only when `dirty_check`
/// reports a change.
///
/// Returns `Ok(None)` when no category exists under `id`; nothing is written
/// in that case.
pub fn patch_category<R>(
    id: &CategoryId,
    patch: Category,
    dirty_check: DirtyCheck,
    repo: &R,
) -> ServiceResult<Option<Category>>
where
    R: CategoryReader + CategoryWriter,
{
    let existing = match repo.get_category_by_id(id) {
        Ok(Some(category)) => category,
        Ok(None) => return Ok(None),
        Err(e) => {
            log::error!("Failed to get category {id}: {e}");
            return Err(ServiceError::Internal);
        }
    };

    match merge_patch(&existing, patch, dirty_check) {
        Some(merged) => match repo.save_category(&merged) {
            Ok(saved) => Ok(Some(saved)),
            Err(e) => {
                log::error!("Failed to patch category {id}: {e}");
                Err(ServiceError::Internal)
            }
        },
        None => Ok(Some(existing)),
    }
}
