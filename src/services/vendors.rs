use crate::domain::patch::{DirtyCheck, merge_patch};
use crate::domain::types::VendorId;
use crate::domain::vendor::Vendor;
use crate::repository::{VendorReader, VendorWriter};

use super::{ServiceError, ServiceResult};

pub fn list_vendors<R>(repo: &R) -> ServiceResult<Vec<Vendor>>
where
    R: VendorReader,
{
    repo.list_vendors().map_err(|e| {
        log::error!("Failed to list vendors: {e}");
        ServiceError::Internal
    })
}

pub fn get_vendor<R>(id: &VendorId, repo: &R) -> ServiceResult<Option<Vendor>>
where
    R: VendorReader,
{
    repo.get_vendor_by_id(id).map_err(|e| {
        log::error!("Failed to get vendor {id}: {e}");
        ServiceError::Internal
    })
}

pub fn create_vendor<R>(mut vendor: Vendor, repo: &R) -> ServiceResult<Vec<Vendor>>
where
    R: VendorWriter,
{
    vendor.id = None;

    repo.save_vendors(&[vendor]).map_err(|e| {
        log::error!("Failed to create vendor: {e}");
        ServiceError::Internal
    })
}

pub fn update_vendor<R>(id: VendorId, mut vendor: Vendor, repo: &R) -> ServiceResult<Vendor>
where
    R: VendorWriter,
{
    vendor.id = Some(id);

    repo.save_vendor(&vendor).map_err(|e| {
        log::error!("Failed to update vendor: {e}");
        ServiceError::Internal
    })
}

/// Merge `patch` onto the stored vendor, saving only when `dirty_check`
/// reports a change. `Ok(None)` means no vendor exists under `id`.
pub fn patch_vendor<R>(
    id: &VendorId,
    patch: Vendor,
    dirty_check: DirtyCheck,
    repo: &R,
) -> ServiceResult<Option<Vendor>>
where
    R: VendorReader + VendorWriter,
{
    let existing = match repo.get_vendor_by_id(id) {
        Ok(Some(vendor)) => vendor,
        Ok(None) => return Ok(None),
        Err(e) => {
            log::error!("Failed to get vendor {id}: {e}");
            return Err(ServiceError::Internal);
        }
    };

    match merge_patch(&existing, patch, dirty_check) {
        Some(merged) => match repo.save_vendor(&merged) {
            Ok(saved) => Ok(Some(saved)),
            Err(e) => {
                log::error!("Failed to patch vendor {id}: {e}");
                Err(ServiceError::Internal)
            }
        },
        None => Ok(Some(existing)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test::TestRepository;

    fn stored_vendor(first_name: &str) -> Vendor {
        Vendor {
            id: Some(VendorId::new("someId").unwrap()),
            first_name: Some(first_name.into()),
            last_name: None,
        }
    }

    fn first_name_patch(first_name: &str) -> Vendor {
        Vendor {
            first_name: Some(first_name.into()),
            ..Vendor::default()
        }
    }

    #[test]
    fn lists_vendors() {
        let repo = TestRepository::new(
            vec![],
            vec![Vendor::new("George", "Leber"), Vendor::new("Hannah", "Montana")],
        );

        assert_eq!(list_vendors(&repo).unwrap().len(), 2);
    }

    #[test]
    fn gets_vendor_by_id() {
        let repo = TestRepository::new(vec![], vec![stored_vendor("George")]);
        let id = VendorId::new("someId").unwrap();

        let vendor = get_vendor(&id, &repo).unwrap().unwrap();
        assert_eq!(vendor.first_name.as_deref(), Some("George"));
    }

    #[test]
    fn creates_vendor_without_names() {
        let repo = TestRepository::default();

        let saved = create_vendor(Vendor::default(), &repo).unwrap();

        assert_eq!(saved.len(), 1);
        assert!(saved[0].id.is_some());
        assert_eq!(repo.vendors().len(), 1);
    }

    #[test]
    fn update_replaces_whole_record() {
        let repo = TestRepository::new(vec![], vec![Vendor {
            last_name: Some("Buck".into()),
            ..stored_vendor("Joe")
        }]);
        let id = VendorId::new("someId").unwrap();

        update_vendor(id, first_name_patch("Joey"), &repo).unwrap();

        assert_eq!(repo.vendors(), vec![stored_vendor("Joey")]);
    }

    #[test]
    fn patch_with_changes_saves_merged_vendor() {
        let repo = TestRepository::new(vec![], vec![stored_vendor("John")]);
        let id = VendorId::new("someId").unwrap();

        let patched =
            patch_vendor(&id, first_name_patch("Marry"), DirtyCheck::DesignatedField, &repo)
                .unwrap();

        assert_eq!(patched, Some(stored_vendor("Marry")));
        assert_eq!(repo.save_count(), 1);
        assert_eq!(repo.vendors(), vec![stored_vendor("Marry")]);
    }

    #[test]
    fn patch_without_changes_never_saves() {
        let repo = TestRepository::new(vec![], vec![stored_vendor("Marry")]);
        let id = VendorId::new("someId").unwrap();

        let patched =
            patch_vendor(&id, first_name_patch("Marry"), DirtyCheck::DesignatedField, &repo)
                .unwrap();

        assert_eq!(patched, Some(stored_vendor("Marry")));
        assert_eq!(repo.save_count(), 0);
    }

    #[test]
    fn last_name_only_patch_depends_on_policy() {
        let id = VendorId::new("someId").unwrap();
        let patch = Vendor {
            last_name: Some("Weston".into()),
            ..Vendor::default()
        };

        let repo = TestRepository::new(vec![], vec![stored_vendor("Michael")]);
        patch_vendor(&id, patch.clone(), DirtyCheck::DesignatedField, &repo).unwrap();
        assert_eq!(repo.save_count(), 0);

        let repo = TestRepository::new(vec![], vec![stored_vendor("Michael")]);
        patch_vendor(&id, patch, DirtyCheck::AllFields, &repo).unwrap();
        assert_eq!(repo.save_count(), 1);
        assert_eq!(repo.vendors()[0].last_name.as_deref(), Some("Weston"));
    }

    #[test]
    fn patch_of_missing_vendor_is_none() {
        let repo = TestRepository::default();
        let id = VendorId::new("someId").unwrap();

        let patched =
            patch_vendor(&id, first_name_patch("Marry"), DirtyCheck::AllFields, &repo).unwrap();

        assert_eq!(patched, None);
        assert_eq!(repo.save_count(), 0);
    }

    #[test]
    fn store_failures_are_internal_errors() {
        let repo = TestRepository::failing();

        assert_eq!(list_vendors(&repo), Err(ServiceError::Internal));
        assert_eq!(
            create_vendor(Vendor::default(), &repo),
            Err(ServiceError::Internal)
        );
    }
}
