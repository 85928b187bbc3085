//! Asset data model shared by the store, indexes, and persistence codec.
//!
//! An [`Asset`] carries the fields common to every inventory item plus a
//! variant payload for hardware- or software-specific fields. Asset IDs are
//! numeric strings ("001", "042"); the ordered index compares them as
//! integers, so IDs that fail to parse are rejected at the facade boundary.

mod attribute;

pub use attribute::{SearchAttribute, SortKey};

use crate::error::InventoryError;

/// Discriminates the two asset variants. Also the leading token of a
/// persisted record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Hardware,
    Software,
}

impl AssetKind {
    /// Name used as the discriminator token in the persisted file format.
    pub fn discriminator(&self) -> &'static str {
        match self {
            AssetKind::Hardware => "Hardware",
            AssetKind::Software => "Software",
        }
    }
}

/// Variant-specific fields of an asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetDetails {
    Hardware {
        location: String,
        maintenance_date: String,
    },
    Software {
        version: String,
        license_key: String,
    },
}

/// A tracked inventory item.
///
/// `asset_id` is immutable after creation by convention: edits go through
/// the facade as delete-old + insert-new, never in-place mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub asset_id: String,
    pub name: String,
    pub manufacturer: String,
    pub model: String,
    pub purchase_date: String,
    pub is_active: bool,
    pub details: AssetDetails,
}

impl Asset {
    /// Creates a hardware asset.
    #[allow(clippy::too_many_arguments)]
    pub fn hardware(
        asset_id: impl Into<String>,
        name: impl Into<String>,
        manufacturer: impl Into<String>,
        model: impl Into<String>,
        purchase_date: impl Into<String>,
        is_active: bool,
        location: impl Into<String>,
        maintenance_date: impl Into<String>,
    ) -> Self {
        Self {
            asset_id: asset_id.into(),
            name: name.into(),
            manufacturer: manufacturer.into(),
            model: model.into(),
            purchase_date: purchase_date.into(),
            is_active,
            details: AssetDetails::Hardware {
                location: location.into(),
                maintenance_date: maintenance_date.into(),
            },
        }
    }

    /// Creates a software asset.
    #[allow(clippy::too_many_arguments)]
    pub fn software(
        asset_id: impl Into<String>,
        name: impl Into<String>,
        manufacturer: impl Into<String>,
        model: impl Into<String>,
        purchase_date: impl Into<String>,
        is_active: bool,
        version: impl Into<String>,
        license_key: impl Into<String>,
    ) -> Self {
        Self {
            asset_id: asset_id.into(),
            name: name.into(),
            manufacturer: manufacturer.into(),
            model: model.into(),
            purchase_date: purchase_date.into(),
            is_active,
            details: AssetDetails::Software {
                version: version.into(),
                license_key: license_key.into(),
            },
        }
    }

    pub fn kind(&self) -> AssetKind {
        match self.details {
            AssetDetails::Hardware { .. } => AssetKind::Hardware,
            AssetDetails::Software { .. } => AssetKind::Software,
        }
    }

    /// Formatted one-line description of all fields, for display or logging.
    pub fn display_info(&self) -> String {
        match &self.details {
            AssetDetails::Hardware {
                location,
                maintenance_date,
            } => format!(
                "Hardware Asset ID: {}, Name: {}, Manufacturer: {}, Model: {}, \
                 Purchase Date: {}, Active: {}, Location: {}, Maintenance Date: {}",
                self.asset_id,
                self.name,
                self.manufacturer,
                self.model,
                self.purchase_date,
                self.is_active,
                location,
                maintenance_date
            ),
            AssetDetails::Software {
                version,
                license_key,
            } => format!(
                "Software Asset ID: {}, Name: {}, Manufacturer: {}, Model: {}, \
                 Purchase Date: {}, Active: {}, Version: {}, License Key: {}",
                self.asset_id,
                self.name,
                self.manufacturer,
                self.model,
                self.purchase_date,
                self.is_active,
                version,
                license_key
            ),
        }
    }

    /// Value of a searchable attribute, or `None` when the attribute does
    /// not apply to this variant (e.g. `Location` on a software asset).
    pub fn attribute_value(&self, attribute: SearchAttribute) -> Option<&str> {
        match attribute {
            SearchAttribute::AssetId => Some(&self.asset_id),
            SearchAttribute::Name => Some(&self.name),
            SearchAttribute::Manufacturer => Some(&self.manufacturer),
            SearchAttribute::Model => Some(&self.model),
            SearchAttribute::PurchaseDate => Some(&self.purchase_date),
            SearchAttribute::Location => match &self.details {
                AssetDetails::Hardware { location, .. } => Some(location),
                AssetDetails::Software { .. } => None,
            },
            SearchAttribute::MaintenanceDate => match &self.details {
                AssetDetails::Hardware {
                    maintenance_date, ..
                } => Some(maintenance_date),
                AssetDetails::Software { .. } => None,
            },
            SearchAttribute::Version => match &self.details {
                AssetDetails::Software { version, .. } => Some(version),
                AssetDetails::Hardware { .. } => None,
            },
            SearchAttribute::LicenseKey => match &self.details {
                AssetDetails::Software { license_key, .. } => Some(license_key),
                AssetDetails::Hardware { .. } => None,
            },
        }
    }
}

/// Parses an asset ID as an integer for ordered comparison.
///
/// IDs are compared numerically everywhere ("010" > "9"), so a non-numeric
/// ID is a programmer error surfaced immediately.
pub(crate) fn parse_asset_id(id: &str) -> Result<i64, InventoryError> {
    id.parse::<i64>()
        .map_err(|_| InventoryError::InvalidAssetId(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_details() {
        let hw = Asset::hardware("001", "Laptop", "Asus", "M1", "2024-01-01", true, "Office", "");
        let sw = Asset::software("002", "IDE", "JetBrains", "CL", "2024-02-01", true, "1.0", "K");
        assert_eq!(hw.kind(), AssetKind::Hardware);
        assert_eq!(sw.kind(), AssetKind::Software);
    }

    #[test]
    fn test_display_info_contains_variant_fields() {
        let hw = Asset::hardware("001", "Laptop", "Asus", "M1", "2024-01-01", true, "Office", "2025-01-01");
        let info = hw.display_info();
        assert!(info.starts_with("Hardware Asset ID: 001"));
        assert!(info.contains("Location: Office"));
        assert!(info.contains("Maintenance Date: 2025-01-01"));

        let sw = Asset::software("002", "IDE", "JetBrains", "CL", "2024-02-01", false, "2.1", "ABC");
        let info = sw.display_info();
        assert!(info.starts_with("Software Asset ID: 002"));
        assert!(info.contains("Version: 2.1"));
        assert!(info.contains("License Key: ABC"));
        assert!(info.contains("Active: false"));
    }

    #[test]
    fn test_attribute_value_variant_gating() {
        let hw = Asset::hardware("001", "Laptop", "Asus", "M1", "2024-01-01", true, "Office", "2025-01-01");
        assert_eq!(hw.attribute_value(SearchAttribute::Location), Some("Office"));
        assert_eq!(hw.attribute_value(SearchAttribute::Version), None);

        let sw = Asset::software("002", "IDE", "JetBrains", "CL", "2024-02-01", true, "2.1", "ABC");
        assert_eq!(sw.attribute_value(SearchAttribute::Version), Some("2.1"));
        assert_eq!(sw.attribute_value(SearchAttribute::MaintenanceDate), None);
    }

    #[test]
    fn test_parse_asset_id() {
        assert_eq!(parse_asset_id("001").unwrap(), 1);
        assert_eq!(parse_asset_id("42").unwrap(), 42);
        assert!(matches!(
            parse_asset_id("abc"),
            Err(InventoryError::InvalidAssetId(_))
        ));
        assert!(parse_asset_id("").is_err());
    }
}
