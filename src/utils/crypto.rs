use sha3::{Digest, Sha3_256};

use crate::error::Result;

/// FIPS-202 SHA3-256 of `data`
pub fn sha3_256_digest(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha3_256::new();
    hasher.update(data);
    let mut digest = [0u8; 32];
    digest.copy_from_slice(&hasher.finalize());
    digest
}

pub fn base58_encode(data: &[u8]) -> String {
    bs58::encode(data).into_string()
}

/// Decodes Bitcoin-alphabet base58. Character errors from `bs58` surface as
/// `MnidError::Base58` with the original error inside.
pub fn base58_decode(data: &str) -> Result<Vec<u8>> {
    Ok(bs58::decode(data).into_vec()?)
}
