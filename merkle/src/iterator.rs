//! Cursor-style iteration over hashable items.
//!
//! The tree builder only needs to walk a finite sequence from the start,
//! hashing each item. [`MerkleIterator`] captures that contract without
//! tying the builder to a particular container.

use hashkit_crypto::{Error as HashError, Hash256, Hasher};

/// A finite, ordered, rewindable sequence of hashable items.
///
/// Cursor methods take `&mut self`; sharing one iterator between threads
/// needs external synchronization.
pub trait MerkleIterator {
    /// The item type yielded by [`MerkleIterator::hasher_next`].
    type Item: Hasher;

    /// Return the item under the cursor and advance it, or `None` once the
    /// sequence is exhausted.
    fn hasher_next(&mut self) -> Option<&Self::Item>;

    /// Whether another item is available.
    fn has_next(&self) -> bool;

    /// Total number of items, regardless of the cursor position.
    fn len(&self) -> usize;

    /// Whether the sequence has no items at all.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Move the cursor back to the first item.
    fn rewind(&mut self) -> &mut Self;
}

/// Types that can produce a [`MerkleIterator`] over themselves.
pub trait Iterable {
    /// The iterator type.
    type Iter: MerkleIterator;

    /// Iterator positioned at the first item.
    fn merkle_iter(&self) -> Self::Iter;
}

/// An owned byte payload whose hash is the SHA-256 of its bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IterItem(Vec<u8>);

impl IterItem {
    /// The raw payload.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl Hasher for IterItem {
    fn hash(&self) -> Result<Hash256, HashError> {
        if self.0.is_empty() {
            return Err(HashError::ZeroSizeValue);
        }
        Ok(Hash256::digest(&self.0))
    }
}

impl From<Vec<u8>> for IterItem {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for IterItem {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl AsRef<[u8]> for IterItem {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// A [`MerkleIterator`] over owned copies of byte buffers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemIterator {
    cursor: usize,
    items: Vec<IterItem>,
}

impl ItemIterator {
    /// Copy every buffer in `data` into a new iterator.
    pub fn new<I>(data: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        data.into_iter().collect()
    }

    /// All items, in order.
    pub fn items(&self) -> &[IterItem] {
        &self.items
    }

    /// Index of the item the next [`MerkleIterator::hasher_next`] call will
    /// return.
    pub fn position(&self) -> usize {
        self.cursor
    }
}

impl<B: AsRef<[u8]>> FromIterator<B> for ItemIterator {
    fn from_iter<T: IntoIterator<Item = B>>(iter: T) -> Self {
        Self {
            cursor: 0,
            items: iter
                .into_iter()
                .map(|blob| IterItem::from(blob.as_ref()))
                .collect(),
        }
    }
}

impl MerkleIterator for ItemIterator {
    type Item = IterItem;

    fn hasher_next(&mut self) -> Option<&IterItem> {
        let item = self.items.get(self.cursor)?;
        self.cursor += 1;
        Some(item)
    }

    fn has_next(&self) -> bool {
        self.cursor < self.items.len()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn rewind(&mut self) -> &mut Self {
        self.cursor = 0;
        self
    }
}

impl<B: AsRef<[u8]>> Iterable for [B] {
    type Iter = ItemIterator;

    fn merkle_iter(&self) -> ItemIterator {
        self.iter().collect()
    }
}

impl<B: AsRef<[u8]>> Iterable for Vec<B> {
    type Iter = ItemIterator;

    fn merkle_iter(&self) -> ItemIterator {
        self.as_slice().merkle_iter()
    }
}
