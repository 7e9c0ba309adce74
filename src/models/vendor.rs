use diesel::prelude::*;

use crate::domain::types::{TypeConstraintError, VendorId};
use crate::domain::vendor::Vendor as DomainVendor;

/// Diesel model representing the `vendors` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::vendors)]
pub struct Vendor {
    pub id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Insertable/replaceable form of [`Vendor`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::vendors)]
pub struct NewVendor<'a> {
    pub id: &'a str,
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
}

impl<'a> NewVendor<'a> {
    /// Row for `vendor` stored under the already assigned `id`.
    pub fn new(id: &'a VendorId, vendor: &'a DomainVendor) -> Self {
        Self {
            id: id.as_str(),
            first_name: vendor.first_name.as_deref(),
            last_name: vendor.last_name.as_deref(),
        }
    }
}

impl TryFrom<Vendor> for DomainVendor {
    type Error = TypeConstraintError;

    fn try_from(vendor: Vendor) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Some(VendorId::new(vendor.id)?),
            first_name: vendor.first_name,
            last_name: vendor.last_name,
        })
    }
}
