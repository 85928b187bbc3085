//! The inventory facade the GUI layer drives.
//!
//! [`Inventory`] owns the collection store, both retrieval indexes, the
//! undo/redo history, and the next-ID counter, and keeps them in lockstep:
//! every mutating operation checkpoints the store first, then mutates list
//! and indexes together. Undo/redo restore a snapshot of the list and
//! rebuild both indexes from it.
//!
//! ## Module Structure
//!
//! - [`store`] - authoritative asset list and attribute quicksort
//! - [`history`] - undo/redo snapshot stacks

mod history;
mod store;


pub use history::History;
pub use store::AssetStore;

use std::path::Path;

use tracing::{debug, info};

use crate::asset::{Asset, SearchAttribute, SortKey, parse_asset_id};
use crate::constants::ASSET_ID_PAD_WIDTH;
use crate::error::InventoryError;
use crate::index::{AttributeIndex, OrderedIndex};
use crate::persistence;

/// The core-to-collaborator contract: add, replace, delete, search, sort,
/// undo/redo, load/save.
///
/// All methods run synchronously on the caller's thread. The hosting
/// application serializes calls; searches borrow `&self` and may run on a
/// worker thread as long as no mutation overlaps them.
pub struct Inventory {
    store: AssetStore,
    ordered: OrderedIndex,
    attributes: AttributeIndex,
    history: History,
    next_id: i64,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Inventory {
    pub fn new() -> Self {
        Self {
            store: AssetStore::new(),
            ordered: OrderedIndex::new(),
            attributes: AttributeIndex::new(),
            history: History::new(),
            next_id: 1,
        }
    }

    /// Next unused asset ID, zero-padded ("001", "002", ...).
    ///
    /// Monotonically increasing: IDs handed out are never handed out again,
    /// even if the asset they were meant for is never added. Recomputed
    /// from the collection maximum after a file load.
    pub fn generate_next_id(&mut self) -> String {
        let id = format!("{:0width$}", self.next_id, width = ASSET_ID_PAD_WIDTH);
        self.next_id += 1;
        id
    }

    /// Adds an asset: checkpoint, append to the store, insert into the
    /// ordered index (where a duplicate ID is silently ignored), and index
    /// its attributes.
    pub fn add_asset(&mut self, asset: Asset) -> Result<(), InventoryError> {
        let key = parse_asset_id(&asset.asset_id)?;
        self.history.checkpoint(self.store.assets());
        self.store.add(asset.clone());
        self.ordered.insert(asset.clone())?;
        self.attributes.index_one(&asset);
        if key >= self.next_id {
            self.next_id = key + 1;
        }
        debug!("Added asset {}", asset.asset_id);
        Ok(())
    }

    /// Edit-as-delete-plus-add: removes the asset with `old_id` (if any) and
    /// adds `new_asset` under a single checkpoint, so one undo reverts the
    /// whole edit.
    pub fn replace_asset(&mut self, old_id: &str, new_asset: Asset) -> Result<(), InventoryError> {
        parse_asset_id(old_id)?;
        let key = parse_asset_id(&new_asset.asset_id)?;
        self.history.checkpoint(self.store.assets());
        self.store.remove_by_id(old_id);
        self.ordered.delete(old_id)?;
        self.store.add(new_asset.clone());
        self.ordered.insert(new_asset)?;
        self.attributes.rebuild(self.store.assets());
        if key >= self.next_id {
            self.next_id = key + 1;
        }
        debug!("Replaced asset {}", old_id);
        Ok(())
    }

    /// Deletes the asset with the given ID. An absent ID is a no-op (no
    /// checkpoint is recorded) and returns `false`.
    pub fn delete_asset(&mut self, id: &str) -> Result<bool, InventoryError> {
        parse_asset_id(id)?;
        if !self.store.assets().iter().any(|a| a.asset_id == id) {
            return Ok(false);
        }
        self.history.checkpoint(self.store.assets());
        self.store.remove_by_id(id);
        self.ordered.delete(id)?;
        self.attributes.rebuild(self.store.assets());
        debug!("Deleted asset {}", id);
        Ok(true)
    }

    /// Searches by attribute name ("Name", "Asset ID", "Location", ...).
    ///
    /// "Asset ID" bypasses the attribute index and does an exact ordered
    /// index lookup (at most one result; non-numeric terms error). All
    /// other attributes return exact matches first, then substring matches.
    pub fn search_by_attribute(
        &self,
        attribute: &str,
        term: &str,
    ) -> Result<Vec<Asset>, InventoryError> {
        let attribute = SearchAttribute::from_name(attribute)?;
        if attribute == SearchAttribute::AssetId {
            Ok(self.ordered.search(term)?.into_iter().cloned().collect())
        } else {
            Ok(self.attributes.query(attribute, term))
        }
    }

    /// Sorts the collection in place by a common attribute (`assetID`,
    /// `name`, `manufacturer`, `model`, `purchaseDate`).
    ///
    /// Sorting is not checkpointed; it never was part of the undo set.
    pub fn sort_by(&mut self, attribute: &str) -> Result<(), InventoryError> {
        let key = SortKey::from_name(attribute)?;
        self.store.sort_by(key);
        Ok(())
    }

    /// Records a manual undo point of the current collection.
    pub fn checkpoint(&mut self) {
        self.history.checkpoint(self.store.assets());
    }

    /// Restores the most recent undo point and rebuilds both indexes.
    /// Returns whether anything was undone.
    pub fn undo(&mut self) -> Result<bool, InventoryError> {
        let Some(snapshot) = self.history.undo(self.store.assets()) else {
            return Ok(false);
        };
        self.store.replace_all(snapshot);
        self.rebuild_indexes()?;
        Ok(true)
    }

    /// Restores the most recently undone state and rebuilds both indexes.
    /// Returns whether anything was redone.
    pub fn redo(&mut self) -> Result<bool, InventoryError> {
        let Some(snapshot) = self.history.redo(self.store.assets()) else {
            return Ok(false);
        };
        self.store.replace_all(snapshot);
        self.rebuild_indexes()?;
        Ok(true)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Loads assets from a file, replacing the current collection.
    ///
    /// The file is read, decoded, and every ID validated *before* any
    /// in-memory state is touched: a failed load leaves the collection and
    /// indexes exactly as they were.
    pub fn load_from_file(&mut self, path: &Path) -> Result<&[Asset], InventoryError> {
        let loaded = persistence::load_from_file(path)?;
        for asset in &loaded {
            parse_asset_id(&asset.asset_id)?;
        }

        self.history.checkpoint(self.store.assets());
        self.store.replace_all(loaded);
        self.rebuild_indexes()?;
        self.recompute_next_id();
        info!("Loaded {} assets from {:?}", self.store.len(), path);
        Ok(self.store.assets())
    }

    /// Saves the current collection to a file. Read-only with respect to
    /// in-memory state.
    pub fn save_to_file(&self, path: &Path) -> Result<(), InventoryError> {
        persistence::save_to_file(self.store.assets(), path)
    }

    /// The collection in list order.
    pub fn assets(&self) -> &[Asset] {
        self.store.assets()
    }

    /// The collection in ascending numeric ID order (ordered index walk).
    pub fn iter_by_id(&self) -> impl Iterator<Item = &Asset> {
        self.ordered.iter()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Rebuilds both indexes from the authoritative list. Each asset is
    /// indexed exactly once.
    fn rebuild_indexes(&mut self) -> Result<(), InventoryError> {
        self.ordered.clear();
        self.attributes.clear();
        for asset in self.store.assets() {
            self.ordered.insert(asset.clone())?;
            self.attributes.index_one(asset);
        }
        Ok(())
    }

    /// Sets the counter to one past the highest numeric ID present.
    fn recompute_next_id(&mut self) {
        let max = self
            .store
            .assets()
            .iter()
            .filter_map(|a| a.asset_id.parse::<i64>().ok())
            .max()
            .unwrap_or(0);
        self.next_id = max + 1;
    }
}
