//! Fixed-size hash values and the [`Hasher`] capability.
//!
//! [`Hash256`] is a plain SHA-256 digest. [`Hash224`] is SHA-224 taken over
//! the SHA-256 digest, for places where a shorter fingerprint is enough.
//! Both are `Copy` values whose all-zero state means "not set".

#![warn(missing_docs)]

mod error;
mod fixed;
mod hash224;
mod hash256;
mod hasher;

pub use error::Error;
pub use hash224::Hash224;
pub use hash256::Hash256;
pub use hasher::Hasher;
