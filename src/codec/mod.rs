//! MNID codec
//!
//! Assembles and takes apart the versioned, checksummed binary layout and
//! renders it as base58 text:
//!
//! ```text
//! | version (1) | network (>= 1) | address (20) | checksum (4) |
//! ```
//!
//! The checksum is the first four bytes of SHA3-256 over everything before it.

pub mod inspect;
pub mod mnid;

pub use inspect::{inspect, Inspection};
pub use mnid::{
    decode, encode, encode_account, is_mnid, ADDRESS_WIDTH, CHECKSUM_WIDTH, VERSION,
    VERSION_WIDTH,
};
