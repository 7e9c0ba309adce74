use serde::{Deserialize, Serialize};

use crate::domain::types::VendorId;
use crate::domain::vendor::Vendor;

/// Vendor as exchanged over HTTP, with camelCase field names.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VendorDto {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl From<Vendor> for VendorDto {
    fn from(value: Vendor) -> Self {
        Self {
            id: value.id.map(VendorId::into_inner),
            first_name: value.first_name,
            last_name: value.last_name,
        }
    }
}

impl From<VendorDto> for Vendor {
    fn from(value: VendorDto) -> Self {
        Self {
            id: value.id.and_then(|id| VendorId::new(id).ok()),
            first_name: value.first_name,
            last_name: value.last_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_camel_case_field_names() {
        let dto: VendorDto =
            serde_json::from_str(r#"{"firstName": "Marry", "lastName": null}"#).unwrap();
        let vendor = Vendor::from(dto);

        assert_eq!(vendor.first_name.as_deref(), Some("Marry"));
        assert_eq!(vendor.last_name, None);
        assert_eq!(vendor.id, None);
    }

    #[test]
    fn empty_string_is_kept_distinct_from_absent() {
        let dto: VendorDto = serde_json::from_str(r#"{"firstName": ""}"#).unwrap();
        assert_eq!(dto.first_name.as_deref(), Some(""));
        assert_eq!(dto.last_name, None);
    }
}
