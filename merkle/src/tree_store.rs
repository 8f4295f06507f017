//! Merkle tree construction into a flat, level-order store.
//!
//! The leaf level is padded with empty (all-zero) hashes to a power of two
//! of at least two slots. Each level above is built left to right over the
//! `real` nodes of the level below, i.e. those derived from an item:
//!
//! - `parent = H(left || right)` when both children are real,
//! - `parent = H(left || left)` when only the left child is real,
//! - `parent = empty` when neither is.
//!
//! Padding is tracked by position, not by value, so an item whose hash
//! happens to be all zeros still takes part in the root.
//!
//! Every slot of every level is kept, leaves first, so a tree over `n`
//! leaves occupies `2w - 1` slots where `w = max(2, n.next_power_of_two())`
//! and the root is always the last slot.

use hashkit_crypto::{Hash256, Hasher};
use tracing::debug;

use crate::{Error, MerkleIterator, Result};

/// Smallest store that can hold a tree: two leaf slots and a root.
pub const MIN_TREE_STORE_SIZE: usize = 3;

/// Every node of a Merkle tree in level order, leaves first, root last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeStore(Vec<Hash256>);

/// Build a [`TreeStore`] from the items of `iter`.
///
/// The iterator is rewound first, so a partly consumed iterator still
/// contributes all of its items. Fails with [`Error::NilPointerValue`] when
/// no iterator is given, [`Error::ZeroSizeValue`] when it has no items, and
/// with the first error returned by an item's hash.
pub fn build_tree_store<I>(iter: Option<&mut I>) -> Result<TreeStore>
where
    I: MerkleIterator + ?Sized,
{
    let iter = iter.ok_or(Error::NilPointerValue)?;
    if iter.is_empty() {
        return Err(Error::ZeroSizeValue);
    }

    let mut store = Vec::with_capacity(2 * leaf_width(iter.len()) - 1);
    iter.rewind();
    while let Some(item) = iter.hasher_next() {
        store.push(item.hash()?);
    }

    // len() is only a hint; the yielded items decide
    let leaf_count = store.len();
    if leaf_count == 0 {
        return Err(Error::ZeroSizeValue);
    }
    let width = leaf_width(leaf_count);
    store.resize(width, Hash256::default());

    let mut level_start = 0;
    let mut level_width = width;
    let mut real = leaf_count;
    while level_width > 1 {
        for offset in (0..level_width).step_by(2) {
            let left = level_start + offset;
            let parent = if offset + 1 < real {
                Hash256::new([&store[left], &store[left + 1]])
            } else if offset < real {
                Hash256::new([&store[left], &store[left]])
            } else {
                Hash256::default()
            };
            store.push(parent);
        }
        level_start += level_width;
        level_width /= 2;
        real = real.div_ceil(2);
    }

    debug!(
        leaves = leaf_count,
        width,
        len = store.len(),
        "built merkle tree store"
    );
    Ok(TreeStore(store))
}

/// Width of the padded leaf level for `leaf_count` leaves.
pub fn leaf_width(leaf_count: usize) -> usize {
    leaf_count.next_power_of_two().max(2)
}

/// Whether `len` is the length of a padded level-order tree.
fn is_tree_shaped(len: usize) -> bool {
    len >= MIN_TREE_STORE_SIZE && (len + 1).is_power_of_two()
}

impl TreeStore {
    /// Build a store from `iter`. See [`build_tree_store`].
    pub fn build<I>(iter: &mut I) -> Result<Self>
    where
        I: MerkleIterator + ?Sized,
    {
        build_tree_store(Some(iter))
    }

    /// The root hash, i.e. the last slot.
    ///
    /// Fails with [`Error::MerkleTreeBuiltImproperly`] unless the store has
    /// the length of a padded level-order tree (`2^k - 1`, at least
    /// [`MIN_TREE_STORE_SIZE`]).
    pub fn root(&self) -> Result<Hash256> {
        match self.0.last() {
            Some(root) if is_tree_shaped(self.0.len()) => Ok(*root),
            _ => Err(Error::MerkleTreeBuiltImproperly { len: self.0.len() }),
        }
    }

    /// The padded leaf level, or `None` if the store is not tree-shaped.
    pub fn leaves(&self) -> Option<&[Hash256]> {
        is_tree_shaped(self.0.len()).then(|| &self.0[..(self.0.len() + 1) / 2])
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the store has no slots.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All slots in level order.
    pub fn as_slice(&self) -> &[Hash256] {
        &self.0
    }

    /// Iterate over all slots in level order.
    pub fn iter(&self) -> core::slice::Iter<'_, Hash256> {
        self.0.iter()
    }

    /// Take the slots out of the store.
    pub fn into_inner(self) -> Vec<Hash256> {
        self.0
    }
}

impl From<Vec<Hash256>> for TreeStore {
    fn from(hashes: Vec<Hash256>) -> Self {
        Self(hashes)
    }
}

impl AsRef<[Hash256]> for TreeStore {
    fn as_ref(&self) -> &[Hash256] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a TreeStore {
    type Item = &'a Hash256;
    type IntoIter = core::slice::Iter<'a, Hash256>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
