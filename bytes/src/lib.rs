//! Small helpers over byte vectors.

#![warn(missing_docs)]

mod equal;
mod error;
mod hamming;
pub mod zero;

pub use equal::{constant_time_eq, equal};
pub use error::Error;
pub use hamming::{hamming, hamming_fixed};
