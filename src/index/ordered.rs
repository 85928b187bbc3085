//! Binary search tree keyed by numeric asset ID.

use crate::asset::{Asset, parse_asset_id};
use crate::error::InventoryError;

struct Node {
    /// Numeric key parsed from the asset ID once at insert, so comparisons
    /// never reparse.
    key: i64,
    asset: Asset,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn new(key: i64, asset: Asset) -> Self {
        Self {
            key,
            asset,
            left: None,
            right: None,
        }
    }
}

/// Unbalanced BST mapping numeric asset IDs to assets.
///
/// Insert, search, and delete are O(log n) on average and O(n) worst case;
/// nothing rebalances, which is fine at inventory sizes. Inserting an ID
/// that is already present is silently ignored (no update, no error) - a
/// documented quirk callers rely on, not a uniqueness guarantee.
#[derive(Default)]
pub struct OrderedIndex {
    root: Option<Box<Node>>,
    len: usize,
}

impl OrderedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts an asset keyed by its ID. Duplicate IDs are silently ignored.
    pub fn insert(&mut self, asset: Asset) -> Result<(), InventoryError> {
        let key = parse_asset_id(&asset.asset_id)?;
        if insert_rec(&mut self.root, key, asset) {
            self.len += 1;
        }
        Ok(())
    }

    /// Looks up an asset by exact ID.
    pub fn search(&self, id: &str) -> Result<Option<&Asset>, InventoryError> {
        let key = parse_asset_id(id)?;
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            if key < node.key {
                cur = node.left.as_deref();
            } else if key > node.key {
                cur = node.right.as_deref();
            } else {
                return Ok(Some(&node.asset));
            }
        }
        Ok(None)
    }

    /// Deletes the asset with the given ID. Returns whether a node was
    /// removed; an absent ID is a no-op.
    ///
    /// A node with two children takes over its in-order successor's payload
    /// and the successor's original node is deleted from the right subtree.
    pub fn delete(&mut self, id: &str) -> Result<bool, InventoryError> {
        let key = parse_asset_id(id)?;
        let (root, removed) = delete_rec(self.root.take(), key);
        self.root = root;
        if removed {
            self.len -= 1;
        }
        Ok(removed)
    }

    /// Drops the whole tree.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Lazy in-order traversal: assets in ascending numeric ID order.
    ///
    /// Each call re-walks the tree from the root; no iterator state is
    /// retained between calls.
    pub fn iter(&self) -> InOrderIter<'_> {
        let mut iter = InOrderIter { stack: Vec::new() };
        iter.push_left(self.root.as_deref());
        iter
    }
}

fn insert_rec(link: &mut Option<Box<Node>>, key: i64, asset: Asset) -> bool {
    match link {
        None => {
            *link = Some(Box::new(Node::new(key, asset)));
            true
        }
        Some(node) => {
            if key < node.key {
                insert_rec(&mut node.left, key, asset)
            } else if key > node.key {
                insert_rec(&mut node.right, key, asset)
            } else {
                false
            }
        }
    }
}

fn delete_rec(link: Option<Box<Node>>, key: i64) -> (Option<Box<Node>>, bool) {
    let Some(mut node) = link else {
        return (None, false);
    };

    if key < node.key {
        let (left, removed) = delete_rec(node.left.take(), key);
        node.left = left;
        (Some(node), removed)
    } else if key > node.key {
        let (right, removed) = delete_rec(node.right.take(), key);
        node.right = right;
        (Some(node), removed)
    } else {
        match (node.left.take(), node.right.take()) {
            (None, right) => (right, true),
            (left, None) => (left, true),
            (left, Some(right)) => {
                // Two children: promote the minimum of the right subtree,
                // then delete that minimum from where it came from.
                let (succ_key, succ_asset) = {
                    let mut min = &*right;
                    while let Some(next) = min.left.as_deref() {
                        min = next;
                    }
                    (min.key, min.asset.clone())
                };
                let (new_right, _) = delete_rec(Some(right), succ_key);
                node.key = succ_key;
                node.asset = succ_asset;
                node.left = left;
                node.right = new_right;
                (Some(node), true)
            }
        }
    }
}

/// In-order iterator over an [`OrderedIndex`].
pub struct InOrderIter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> InOrderIter<'a> {
    fn push_left(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for InOrderIter<'a> {
    type Item = &'a Asset;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        Some(&node.asset)
    }
}
