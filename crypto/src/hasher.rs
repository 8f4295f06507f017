use crate::{Error, Hash256};

/// Types that can compute a [`Hash256`] of themselves.
pub trait Hasher {
    /// Hash the raw bytes of `self`.
    ///
    /// Implementations fail with [`Error::ZeroSizeValue`] when there are no
    /// bytes to hash.
    fn hash(&self) -> Result<Hash256, Error>;
}

impl<T: Hasher + ?Sized> Hasher for &T {
    fn hash(&self) -> Result<Hash256, Error> {
        (**self).hash()
    }
}

impl<T: Hasher + ?Sized> Hasher for Box<T> {
    fn hash(&self) -> Result<Hash256, Error> {
        (**self).hash()
    }
}
