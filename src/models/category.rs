use diesel::prelude::*;

use crate::domain::category::Category as DomainCategory;
use crate::domain::types::{CategoryId, TypeConstraintError};

/// Diesel model representing the `categories` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::categories)]
pub struct Category {
    pub id: String,
    pub description: Option<String>,
}

/// Insertable/replaceable form of [`Category`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::categories)]
pub struct NewCategory<'a> {
    pub id: &'a str,
    pub description: Option<&'a str>,
}

impl<'a> NewCategory<'a> {
    /// Row for `category` stored under the already assigned `id`.
    pub fn new(id: &'a CategoryId, category: &'a DomainCategory) -> Self {
        Self {
            id: id.as_str(),
            description: category.description.as_deref(),
        }
    }
}

impl TryFrom<Category> for DomainCategory {
    type Error = TypeConstraintError;

    fn try_from(category: Category) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Some(CategoryId::new(category.id)?),
            description: category.description,
        })
    }
}
