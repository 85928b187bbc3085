//! Authoritative ordered list of assets with in-place attribute sort.

use crate::asset::{Asset, SortKey};

/// The collection store: the one list everything else is derived from.
///
/// No uniqueness check happens here; unique IDs are a convention upheld by
/// the facade's ID generation, not an invariant this layer enforces.
#[derive(Default)]
pub struct AssetStore {
    assets: Vec<Asset>,
}

impl AssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an asset to the end of the list.
    pub fn add(&mut self, asset: Asset) {
        self.assets.push(asset);
    }

    /// Removes the first element equal to `asset`. Returns whether anything
    /// was removed.
    pub fn remove(&mut self, asset: &Asset) -> bool {
        if let Some(pos) = self.assets.iter().position(|a| a == asset) {
            self.assets.remove(pos);
            true
        } else {
            false
        }
    }

    /// Removes and returns the first asset with the given ID.
    pub fn remove_by_id(&mut self, id: &str) -> Option<Asset> {
        let pos = self.assets.iter().position(|a| a.asset_id == id)?;
        Some(self.assets.remove(pos))
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    /// Replaces the whole list (undo/redo restore, file load).
    pub fn replace_all(&mut self, assets: Vec<Asset>) {
        self.assets = assets;
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// In-place quicksort by the given attribute, ordinal string comparison.
    ///
    /// Classic last-element-pivot partition: average O(n log n), worst
    /// O(n^2) on already-sorted input, and not stable - equal-valued
    /// elements may reorder. Acceptable at inventory sizes.
    pub fn sort_by(&mut self, key: SortKey) {
        quicksort(&mut self.assets, key);
    }
}

fn quicksort(items: &mut [Asset], key: SortKey) {
    if items.len() <= 1 {
        return;
    }
    let pivot = partition(items, key);
    let (left, right) = items.split_at_mut(pivot);
    quicksort(left, key);
    quicksort(&mut right[1..], key);
}

fn partition(items: &mut [Asset], key: SortKey) -> usize {
    let high = items.len() - 1;
    let mut i = 0;
    for j in 0..high {
        if key.value_of(&items[j]) < key.value_of(&items[high]) {
            items.swap(i, j);
            i += 1;
        }
    }
    items.swap(i, high);
    i
}
