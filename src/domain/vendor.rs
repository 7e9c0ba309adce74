use serde::{Deserialize, Serialize};

use crate::domain::patch::Patchable;
use crate::domain::types::VendorId;

/// Vendor contact. `id` is `None` until the record has been persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Vendor {
    pub id: Option<VendorId>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl Vendor {
    /// Transient vendor that has not been persisted yet.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: None,
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
        }
    }
}

impl Patchable for Vendor {
    fn merge(&mut self, patch: Self) {
        if let Some(first_name) = patch.first_name {
            self.first_name = Some(first_name);
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = Some(last_name);
        }
    }

    /// Only `first_name` decides whether a vendor patch is written back.
    fn designated_field_changed(&self, original: &Self) -> bool {
        self.first_name != original.first_name
    }

    fn any_field_changed(&self, original: &Self) -> bool {
        self.first_name != original.first_name || self.last_name != original.last_name
    }
}
