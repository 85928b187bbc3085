//! Error type shared across the crate.

use thiserror::Error;

/// Errors surfaced by the inventory core.
///
/// Absent IDs are not errors: lookups return `None`/empty results and
/// deletes of missing assets are no-ops. The variants here are either
/// programmer errors (bad ID, bad attribute name) that fail fast, or I/O
/// failures the hosting application reports to the user.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// An asset ID that should be a numeric string failed to parse.
    #[error("asset ID is not numeric: {0:?}")]
    InvalidAssetId(String),

    /// An unrecognized attribute name was given to sort or search.
    #[error("unknown attribute: {0:?}")]
    UnknownAttribute(String),

    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
