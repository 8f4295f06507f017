/// Shared surface of the fixed-size hash types: raw access, encodings and
/// Hamming distance.
macro_rules! impl_fixed_hash {
    ($name:ident, $size:expr) => {
        impl $name {
            /// Size of the hash in bytes.
            pub const SIZE: usize = $size;

            /// Whether every byte is zero. The zero hash stands for "not set".
            pub fn is_empty(&self) -> bool {
                self.0.iter().all(|&b| b == 0)
            }

            /// Lowercase hex encoding.
            pub fn encode(&self) -> String {
                hex::encode(self.0)
            }

            /// Base58 encoding of the raw bytes.
            pub fn base58(&self) -> String {
                hashkit_base58::encode(self.0)
            }

            /// Number of differing bits between `self` and `other`.
            pub fn hamming(&self, other: &[u8; $size]) -> u32 {
                hashkit_bytes::hamming_fixed(&self.0, other)
            }

            /// The raw bytes.
            pub fn as_bytes(&self) -> &[u8; $size] {
                &self.0
            }

            /// Copy the raw bytes into a vector.
            pub fn to_vec(&self) -> Vec<u8> {
                self.0.to_vec()
            }
        }

        impl From<[u8; $size]> for $name {
            fn from(bytes: [u8; $size]) -> Self {
                Self(bytes)
            }
        }

        impl From<$name> for [u8; $size] {
            fn from(hash: $name) -> Self {
                hash.0
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl core::ops::Deref for $name {
            type Target = [u8; $size];

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.encode())
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.encode())
            }
        }
    };
}

pub(crate) use impl_fixed_hash;
