//! In-memory index and retrieval core for a desktop asset tracker.
//!
//! The GUI shell is a separate concern; it drives this crate through the
//! [`Inventory`] facade, which keeps three views of the same collection in
//! lockstep:
//!
//! - the authoritative ordered list of assets (with in-place attribute sort)
//! - a binary search tree keyed by numeric asset ID for exact lookup
//! - an inverted index from attribute values to assets for substring search
//!
//! Mutations checkpoint a deep snapshot of the list first, so undo/redo can
//! restore any prior state. Persistence is a line-oriented comma-separated
//! text format; see [`persistence`] for the format and its known limits.
//!
//! All operations are synchronous and the types hold no locks. The hosting
//! application is expected to serialize calls onto one logical sequence; a
//! search may run on a worker thread only against a collection that is not
//! being mutated at the same time (searches take `&self`, so the borrow
//! checker makes that explicit).

pub mod asset;
pub mod config;
pub mod constants;
mod error;
pub mod index;
pub mod inventory;
pub mod logging;
pub mod paths;
pub mod persistence;

pub use asset::{Asset, AssetDetails, AssetKind, SearchAttribute, SortKey};
pub use error::InventoryError;
pub use inventory::Inventory;
