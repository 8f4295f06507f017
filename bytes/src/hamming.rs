use crate::Error;

/// Number of differing bits between two vectors of the same length.
///
/// Both vectors must be non-empty and of equal length.
pub fn hamming(x: &[u8], y: &[u8]) -> Result<u32, Error> {
    if x.is_empty() || y.is_empty() {
        return Err(Error::VectorZeroSize);
    }
    if x.len() != y.len() {
        return Err(Error::VectorsNotSameSize {
            left: x.len(),
            right: y.len(),
        });
    }
    Ok(distance(x, y))
}

/// Number of differing bits between two fixed-size arrays.
pub fn hamming_fixed<const N: usize>(x: &[u8; N], y: &[u8; N]) -> u32 {
    distance(x, y)
}

fn distance(x: &[u8], y: &[u8]) -> u32 {
    x.iter().zip(y).map(|(a, b)| (a ^ b).count_ones()).sum()
}
