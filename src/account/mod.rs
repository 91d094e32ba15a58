//! Account model
//!
//! The canonical (network, address) pair an MNID identifies.

#[allow(clippy::module_inception)]
pub mod account;

pub use account::Account;
