//! # MNID - Multi Network Identifier
//!
//! A checksummed, base58 text encoding that pairs a blockchain network id
//! with a 20-byte account address, so one string names both the account and
//! the network it belongs to, and typos are caught before the string is used.
//!
//! ## Layout
//! - 1 byte version, currently `1`
//! - network id (chain id or a genesis hash fragment), one byte or more
//! - 20-byte address, left-padded with zeros
//! - 4-byte checksum: the head of SHA3-256 over everything before it
//!
//! The whole buffer is then base58 encoded with the Bitcoin alphabet.
//!
//! ## How the code is organized
//! - `utils/`: lenient hex parsing, base58 and SHA3-256 wrappers
//! - `account/`: the canonical (network, address) value
//! - `codec/`: encode, decode, shape check and inspection
//! - `config/`: settings for the command-line tool
//! - `cli/`: argument parsing for the `mnid` binary
//!
//! ```
//! let mnid = mnid::encode("0x1", "0x00521965e7bd230323c423d96c657db5b79d099f").unwrap();
//! assert_eq!(mnid, "2nQtiQG6Cgm1GYTBaaKAgr76uY7iSexUkqX");
//!
//! let account = mnid::decode(&mnid).unwrap();
//! assert_eq!(account.network(), "0x01");
//! assert!(mnid::is_mnid(&mnid));
//! ```

pub mod account;
pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod utils;

// Re-export commonly used types for convenience
pub use account::Account;
pub use cli::{Command, Opt};
pub use codec::{
    decode, encode, encode_account, inspect, is_mnid, Inspection, ADDRESS_WIDTH, CHECKSUM_WIDTH,
    VERSION, VERSION_WIDTH,
};
pub use config::{Config, OutputFormat};
pub use error::{MnidError, Result};
pub use utils::{base58_decode, base58_encode, hex_to_bytes_lenient, sha3_256_digest};
