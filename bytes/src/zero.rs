//! Clearing memory that held sensitive material.
//!
//! Writes go through `zeroize`, so they are not elided even when the buffer
//! is never read again.

use zeroize::Zeroize;

/// Set every byte of `buf` to zero.
pub fn zero(buf: &mut [u8]) {
    buf.zeroize();
}

/// Set every byte of a fixed-size array to zero.
pub fn zero_array<const N: usize>(buf: &mut [u8; N]) {
    buf.zeroize();
}
