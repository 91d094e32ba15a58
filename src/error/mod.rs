//! Error handling for the MNID codec
//!
//! Every failure is returned to the caller immediately; nothing in this crate
//! retries or recovers locally. `is_mnid` is the only operation that folds
//! errors into a plain `false`.

use thiserror::Error;

/// Result type alias for MNID operations
pub type Result<T> = std::result::Result<T, MnidError>;

/// Error kinds produced while normalizing, encoding or decoding
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MnidError {
    /// Decode was called with an empty identifier
    #[error("Can't decode a null or empty mnid")]
    EmptyInput,

    /// A required network or address value was absent
    #[error("Can't create an account using a null {field}")]
    NullInput { field: &'static str },

    /// Hex input contained a character outside `[0-9a-fA-F]`
    #[error("Invalid hex digit {character:?} at index {index}")]
    InvalidHexDigit { character: char, index: usize },

    /// Base58 input rejected by the base58 primitive
    #[error(transparent)]
    Base58(#[from] bs58::decode::Error),

    /// The identifier was produced by a newer codec version
    #[error("Version mismatch: can't decode a future version of MNID, expecting {expected} and got {found}")]
    UnsupportedVersion { expected: u8, found: u8 },

    /// Decoded payload has no room for a network after version, address and checksum
    #[error("Buffer size mismatch: {length} bytes are not enough to encode an address")]
    BufferTooSmall { length: usize },

    /// Trailing checksum disagrees with the recomputed one
    #[error("The checksum does not match the payload (expected {}, found {})", hex::encode(.expected), hex::encode(.found))]
    ChecksumMismatch { expected: [u8; 4], found: [u8; 4] },

    /// Address wider than 20 bytes after normalization
    #[error("Address is too long ({length} bytes): an Ethereum address must be 20 bytes long")]
    AddressTooLong { length: usize },

    /// A network identifier must carry at least one byte
    #[error("Network id is empty: at least one byte is required")]
    EmptyNetwork,

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for MnidError {
    fn from(err: toml::de::Error) -> Self {
        MnidError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for MnidError {
    fn from(err: serde_json::Error) -> Self {
        MnidError::Serialization(err.to_string())
    }
}
