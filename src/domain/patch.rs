//! Partial-update merge rules.
//!
//! A patch is an entity value whose `Some` fields are the ones the client wants
//! to change. Merging copies those fields onto the stored record; the
//! [`DirtyCheck`] policy then decides whether the merged record is different
//! enough from the stored one to be written back.

use serde::{Deserialize, Serialize};

/// Entities that accept partial updates.
pub trait Patchable {
    /// Copy every field present in `patch` onto `self`, in declaration order.
    fn merge(&mut self, patch: Self);
    /// Whether the entity's designated comparison field differs from `original`.
    fn designated_field_changed(&self, original: &Self) -> bool;
    /// Whether any mutable field differs from `original`.
    fn any_field_changed(&self, original: &Self) -> bool;
}

/// Policy deciding whether a merged patch must be persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirtyCheck {
    /// Compare only the designated field of each entity kind
    /// (`description` for categories, `first_name` for vendors).
    #[default]
    DesignatedField,
    /// Compare every mutable field.
    AllFields,
}

impl DirtyCheck {
    pub fn is_dirty<T: Patchable>(self, merged: &T, original: &T) -> bool {
        match self {
            DirtyCheck::DesignatedField => merged.designated_field_changed(original),
            DirtyCheck::AllFields => merged.any_field_changed(original),
        }
    }
}

/// Merge `patch` onto `original`.
///
/// Returns the merged record when the policy considers it dirty, `None` when
/// the write can be skipped.
pub fn merge_patch<T>(original: &T, patch: T, check: DirtyCheck) -> Option<T>
where
    T: Patchable + Clone,
{
    let mut merged = original.clone();
    merged.merge(patch);
    check.is_dirty(&merged, original).then_some(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::Category;
    use crate::domain::types::{CategoryId, VendorId};
    use crate::domain::vendor::Vendor;

    fn stored_category(description: &str) -> Category {
        Category {
            id: Some(CategoryId::new("cat-1").unwrap()),
            description: Some(description.into()),
        }
    }

    fn stored_vendor(first_name: &str, last_name: Option<&str>) -> Vendor {
        Vendor {
            id: Some(VendorId::new("vendor-1").unwrap()),
            first_name: Some(first_name.into()),
            last_name: last_name.map(Into::into),
        }
    }

    #[test]
    fn changed_description_is_dirty() {
        let original = stored_category("Some old cat");
        let merged = merge_patch(
            &original,
            Category::new("Some Cat"),
            DirtyCheck::DesignatedField,
        )
        .expect("patch should be dirty");

        assert_eq!(merged.id, original.id);
        assert_eq!(merged.description.as_deref(), Some("Some Cat"));
    }

    #[test]
    fn equal_description_is_clean() {
        let original = stored_category("Some Cat");
        let merged = merge_patch(
            &original,
            Category::new("Some Cat"),
            DirtyCheck::DesignatedField,
        );
        assert!(merged.is_none());
    }

    #[test]
    fn absent_fields_keep_stored_values() {
        let original = stored_category("Fruits");
        assert!(merge_patch(&original, Category::default(), DirtyCheck::AllFields).is_none());
    }

    #[test]
    fn empty_string_is_a_change_from_absent() {
        let original = Category {
            id: Some(CategoryId::new("cat-1").unwrap()),
            description: None,
        };
        let merged = merge_patch(&original, Category::new(""), DirtyCheck::DesignatedField)
            .expect("empty string differs from absent");
        assert_eq!(merged.description.as_deref(), Some(""));
    }

    #[test]
    fn vendor_last_name_alone_is_ignored_by_designated_check() {
        let original = stored_vendor("Joe", Some("Buck"));
        let patch = Vendor {
            last_name: Some("Bucket".into()),
            ..Vendor::default()
        };
        assert!(merge_patch(&original, patch, DirtyCheck::DesignatedField).is_none());
    }

    #[test]
    fn vendor_last_name_alone_is_dirty_under_all_fields() {
        let original = stored_vendor("Joe", Some("Buck"));
        let patch = Vendor {
            last_name: Some("Bucket".into()),
            ..Vendor::default()
        };
        let merged = merge_patch(&original, patch, DirtyCheck::AllFields).unwrap();
        assert_eq!(merged.first_name.as_deref(), Some("Joe"));
        assert_eq!(merged.last_name.as_deref(), Some("Bucket"));
    }

    #[test]
    fn vendor_last_name_rides_along_with_first_name_change() {
        let original = stored_vendor("John", None);
        let patch = Vendor::new("Marry", "Smith");
        let merged = merge_patch(&original, patch, DirtyCheck::DesignatedField).unwrap();
        assert_eq!(merged.first_name.as_deref(), Some("Marry"));
        assert_eq!(merged.last_name.as_deref(), Some("Smith"));
    }

    #[test]
    fn dirty_check_deserializes_from_snake_case() {
        let check: DirtyCheck = serde_json::from_str("\"all_fields\"").unwrap();
        assert_eq!(check, DirtyCheck::AllFields);
    }
}
