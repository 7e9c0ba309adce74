use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::types::VendorId;
use crate::domain::vendor::Vendor;
use crate::models::vendor::{NewVendor as DbNewVendor, Vendor as DbVendor};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, VendorReader, VendorWriter};

/// Upsert a single vendor row, generating an id for transient records.
fn replace_vendor(conn: &mut SqliteConnection, vendor: &Vendor) -> QueryResult<Vendor> {
    use crate::schema::vendors;

    let id = vendor.id.clone().unwrap_or_else(VendorId::generate);

    diesel::replace_into(vendors::table)
        .values(DbNewVendor::new(&id, vendor))
        .execute(conn)?;

    Ok(Vendor {
        id: Some(id),
        first_name: vendor.first_name.clone(),
        last_name: vendor.last_name.clone(),
    })
}

impl VendorReader for DieselRepository {
    fn list_vendors(&self) -> RepositoryResult<Vec<Vendor>> {
        use crate::schema::vendors;

        let mut conn = self.conn()?;

        let items = vendors::table
            .load::<DbVendor>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Vendor>, _>>()?;

        Ok(items)
    }

    fn get_vendor_by_id(&self, id: &VendorId) -> RepositoryResult<Option<Vendor>> {
        use crate::schema::vendors;

        let mut conn = self.conn()?;

        let vendor = vendors::table
            .filter(vendors::id.eq(id.as_str()))
            .first::<DbVendor>(&mut conn)
            .optional()?;

        let vendor = vendor.map(TryInto::try_into).transpose()?;
        Ok(vendor)
    }

    fn count_vendors(&self) -> RepositoryResult<usize> {
        use crate::schema::vendors;

        let mut conn = self.conn()?;
        let total = vendors::table.count().get_result::<i64>(&mut conn)?;

        Ok(total as usize)
    }
}

impl VendorWriter for DieselRepository {
    fn save_vendor(&self, vendor: &Vendor) -> RepositoryResult<Vendor> {
        let mut conn = self.conn()?;
        Ok(replace_vendor(&mut conn, vendor)?)
    }

    fn save_vendors(&self, vendors: &[Vendor]) -> RepositoryResult<Vec<Vendor>> {
        let mut conn = self.conn()?;

        let saved = conn.transaction(|conn| {
            vendors
                .iter()
                .map(|vendor| replace_vendor(conn, vendor))
                .collect::<QueryResult<Vec<Vendor>>>()
        })?;

        Ok(saved)
    }

    fn delete_all_vendors(&self) -> RepositoryResult<usize> {
        use crate::schema::vendors;

        let mut conn = self.conn()?;
        let affected = diesel::delete(vendors::table).execute(&mut conn)?;

        Ok(affected)
    }
}
