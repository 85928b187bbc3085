//! Decoding assets from the line format and reading them from disk.

use std::path::Path;

use tracing::info;

use crate::asset::Asset;
use crate::constants::RECORD_FIELD_COUNT;
use crate::error::InventoryError;

/// Decodes line-format text into assets.
///
/// Lenient by design: short lines and unknown discriminators are skipped,
/// extra fields beyond the ninth are ignored. The active flag parses as a
/// case-insensitive `"true"`; anything else reads as `false`.
pub fn decode(text: &str) -> Vec<Asset> {
    let mut assets = Vec::new();
    for line in text.lines() {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < RECORD_FIELD_COUNT {
            // Malformed line - skip rather than fail the whole load
            continue;
        }

        let is_active = fields[6].eq_ignore_ascii_case("true");
        match fields[0] {
            "Hardware" => assets.push(Asset::hardware(
                fields[1], fields[2], fields[3], fields[4], fields[5], is_active, fields[7],
                fields[8],
            )),
            "Software" => assets.push(Asset::software(
                fields[1], fields[2], fields[3], fields[4], fields[5], is_active, fields[7],
                fields[8],
            )),
            _ => {}
        }
    }
    assets
}

/// Reads and decodes the file at `path`. Blocking, whole-file read; an I/O
/// failure is returned to the caller and no partial result is produced.
pub fn load_from_file(path: &Path) -> Result<Vec<Asset>, InventoryError> {
    let text = std::fs::read_to_string(path)?;
    let assets = decode(&text);
    info!("Loaded {} assets from {:?}", assets.len(), path);
    Ok(assets)
}
