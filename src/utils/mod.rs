//! Byte-level helpers
//!
//! Lenient hex parsing plus thin wrappers over the base58 and SHA3-256
//! primitives the codec is built on.

pub mod crypto;
pub mod normalize;

pub use self::crypto::{base58_decode, base58_encode, sha3_256_digest};
pub use self::normalize::{hex_to_bytes_lenient, to_prefixed_hex};
