//! Attribute names recognized by search and sort.

use crate::error::InventoryError;

/// A searchable asset attribute.
///
/// These are the keys the attribute index buckets values under. `AssetId`
/// is indexed like the rest but queries for it are routed to the ordered
/// index instead (exact lookup, at most one result).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchAttribute {
    AssetId,
    Name,
    Manufacturer,
    Model,
    PurchaseDate,
    Location,
    MaintenanceDate,
    Version,
    LicenseKey,
}

impl SearchAttribute {
    pub fn display_name(&self) -> &'static str {
        match self {
            SearchAttribute::AssetId => "Asset ID",
            SearchAttribute::Name => "Name",
            SearchAttribute::Manufacturer => "Manufacturer",
            SearchAttribute::Model => "Model",
            SearchAttribute::PurchaseDate => "Purchase Date",
            SearchAttribute::Location => "Location",
            SearchAttribute::MaintenanceDate => "Maintenance Date",
            SearchAttribute::Version => "Version",
            SearchAttribute::LicenseKey => "License Key",
        }
    }

    pub fn all() -> &'static [SearchAttribute] {
        &[
            SearchAttribute::AssetId,
            SearchAttribute::Name,
            SearchAttribute::Manufacturer,
            SearchAttribute::Model,
            SearchAttribute::PurchaseDate,
            SearchAttribute::Location,
            SearchAttribute::MaintenanceDate,
            SearchAttribute::Version,
            SearchAttribute::LicenseKey,
        ]
    }

    /// Resolves a display name case-insensitively.
    pub fn from_name(name: &str) -> Result<SearchAttribute, InventoryError> {
        SearchAttribute::all()
            .iter()
            .copied()
            .find(|attr| attr.display_name().eq_ignore_ascii_case(name))
            .ok_or_else(|| InventoryError::UnknownAttribute(name.to_string()))
    }
}

/// A sortable asset attribute. Only the fields common to both variants can
/// be sorted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    AssetId,
    Name,
    Manufacturer,
    Model,
    PurchaseDate,
}

impl SortKey {
    /// Resolves a key name case-insensitively (`"assetID"`, `"name"`, ...).
    pub fn from_name(name: &str) -> Result<SortKey, InventoryError> {
        match name.to_ascii_lowercase().as_str() {
            "assetid" => Ok(SortKey::AssetId),
            "name" => Ok(SortKey::Name),
            "manufacturer" => Ok(SortKey::Manufacturer),
            "model" => Ok(SortKey::Model),
            "purchasedate" => Ok(SortKey::PurchaseDate),
            _ => Err(InventoryError::UnknownAttribute(name.to_string())),
        }
    }

    /// The string value the sort compares for a given asset.
    pub fn value_of<'a>(&self, asset: &'a super::Asset) -> &'a str {
        match self {
            SortKey::AssetId => &asset.asset_id,
            SortKey::Name => &asset.name,
            SortKey::Manufacturer => &asset.manufacturer,
            SortKey::Model => &asset.model,
            SortKey::PurchaseDate => &asset.purchase_date,
        }
    }
}
