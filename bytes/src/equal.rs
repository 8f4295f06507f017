use subtle::ConstantTimeEq;

/// Whether two vectors have the same length and contents.
pub fn equal(x: &[u8], y: &[u8]) -> bool {
    x == y
}

/// Like [`equal`], but the running time depends only on the lengths of the
/// inputs, never on where they differ.
///
/// Use this for comparing checksums, MACs and other secret-derived values.
pub fn constant_time_eq(x: &[u8], y: &[u8]) -> bool {
    x.ct_eq(y).into()
}
