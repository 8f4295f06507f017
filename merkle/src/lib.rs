//! Merkle tree construction over SHA-256.
//!
//! [`build_tree_store`] walks a [`MerkleIterator`], hashes each item into a
//! leaf and reduces the leaves pairwise into a root. Every node is kept in a
//! single flat [`TreeStore`] in level order, leaves first and root last.
//! An unpaired node is hashed with itself.
//!
//! ```
//! use hashkit_merkle::{ItemIterator, TreeStore};
//!
//! let mut iter = ItemIterator::new([b"a", b"b", b"c"]);
//! let tree = TreeStore::build(&mut iter).unwrap();
//! assert_eq!(tree.len(), 7);
//! println!("root: {}", tree.root().unwrap().base58());
//! ```

#![warn(missing_docs)]

mod error;
mod iterator;
mod tree_store;


pub use error::{Error, Result};
pub use hashkit_crypto::{Hash256, Hasher};
pub use iterator::{IterItem, ItemIterator, Iterable, MerkleIterator};
pub use tree_store::{MIN_TREE_STORE_SIZE, TreeStore, build_tree_store, leaf_width};
