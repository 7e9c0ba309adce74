use serde::{Deserialize, Serialize};

use crate::domain::patch::Patchable;
use crate::domain::types::CategoryId;

/// Product category. `id` is `None` until the record has been persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: Option<CategoryId>,
    pub description: Option<String>,
}

impl Category {
    /// Transient category that has not been persisted yet.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: None,
            description: Some(description.into()),
        }
    }
}

impl Patchable for Category {
    fn merge(&mut self, patch: Self) {
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
    }

    fn designated_field_changed(&self, original: &Self) -> bool {
        self.description != original.description
    }

    fn any_field_changed(&self, original: &Self) -> bool {
        self.description != original.description
    }
}
