//! Encoding assets to the line format and writing them to disk.

use std::path::Path;

use tracing::info;

use crate::asset::{Asset, AssetDetails};
use crate::error::InventoryError;

/// Encodes the collection as line-format text, one asset per line.
pub fn encode(assets: &[Asset]) -> String {
    let mut out = String::new();
    for asset in assets {
        encode_line(asset, &mut out);
        out.push('\n');
    }
    out
}

fn encode_line(asset: &Asset, out: &mut String) {
    let (extra1, extra2) = match &asset.details {
        AssetDetails::Hardware {
            location,
            maintenance_date,
        } => (location, maintenance_date),
        AssetDetails::Software {
            version,
            license_key,
        } => (version, license_key),
    };
    out.push_str(&format!(
        "{},{},{},{},{},{},{},{},{}",
        asset.kind().discriminator(),
        asset.asset_id,
        asset.name,
        asset.manufacturer,
        asset.model,
        asset.purchase_date,
        asset.is_active,
        extra1,
        extra2
    ));
}

/// Writes the encoded collection to `path`, replacing any existing file.
/// Blocking, whole-file write.
pub fn save_to_file(assets: &[Asset], path: &Path) -> Result<(), InventoryError> {
    std::fs::write(path, encode(assets))?;
    info!("Saved {} assets to {:?}", assets.len(), path);
    Ok(())
}
