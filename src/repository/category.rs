use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::category::Category;
use crate::domain::types::CategoryId;
use crate::models::category::{Category as DbCategory, NewCategory as DbNewCategory};
use crate::repository::errors::RepositoryResult;
use crate::repository::{CategoryReader, CategoryWriter, DieselRepository};

/// Upsert a single category row, generating an id for transient records.
fn replace_category(conn: &mut SqliteConnection, category: &Category) -> QueryResult<Category> {
    use crate::schema::categories;

    let id = category.id.clone().unwrap_or_else(CategoryId::generate);

    diesel::replace_into(categories::table)
        .values(DbNewCategory::new(&id, category))
        .execute(conn)?;

    Ok(Category {
        id: Some(id),
        description: category.description.clone(),
    })
}

impl CategoryReader for DieselRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let items = categories::table
            .load::<DbCategory>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Category>, _>>()?;

        Ok(items)
    }

    fn get_category_by_id(&self, id: &CategoryId) -> RepositoryResult<Option<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let category = categories::table
            .filter(categories::id.eq(id.as_str()))
            .first::<DbCategory>(&mut conn)
            .optional()?;

        let category = category.map(TryInto::try_into).transpose()?;
        Ok(category)
    }

    fn count_categories(&self) -> RepositoryResult<usize> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let total = categories::table.count().get_result::<i64>(&mut conn)?;

        Ok(total as usize)
    }
}

impl CategoryWriter for DieselRepository {
    fn save_category(&self, category: &Category) -> RepositoryResult<Category> {
        let mut conn = self.conn()?;
        Ok(replace_category(&mut conn, category)?)
    }

    fn save_categories(&self, categories: &[Category]) -> RepositoryResult<Vec<Category>> {
        let mut conn = self.conn()?;

        let saved = conn.transaction(|conn| {
            categories
                .iter()
                .map(|category| replace_category(conn, category))
                .collect::<QueryResult<Vec<Category>>>()
        })?;

        Ok(saved)
    }

    fn delete_all_categories(&self) -> RepositoryResult<usize> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let affected = diesel::delete(categories::table).execute(&mut conn)?;

        Ok(affected)
    }
}
