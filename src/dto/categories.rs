use serde::{Deserialize, Serialize};

use crate::domain::category::Category;
use crate::domain::types::CategoryId;

/// Category as exchanged over HTTP. `id` is `null` for unsaved records.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CategoryDto {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<Category> for CategoryDto {
    fn from(value: Category) -> Self {
        Self {
            id: value.id.map(CategoryId::into_inner),
            description: value.description,
        }
    }
}

/// Body ids are advisory only; a blank one is treated as absent.
impl From<CategoryDto> for Category {
    fn from(value: CategoryDto) -> Self {
        Self {
            id: value.id.and_then(|id| CategoryId::new(id).ok()),
            description: value.description,
        }
    }
}
