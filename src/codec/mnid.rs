use log::{debug, trace};

use crate::account::Account;
use crate::error::{MnidError, Result};
use crate::utils::{base58_decode, base58_encode, sha3_256_digest};

/// Format version written by this codec; decoding rejects anything newer
pub const VERSION: u8 = 1;
pub const VERSION_WIDTH: usize = 1;
pub const ADDRESS_WIDTH: usize = 20;
pub const CHECKSUM_WIDTH: usize = 4;

/// Fixed part of every payload: version, address and checksum
const FIXED_WIDTH: usize = VERSION_WIDTH + ADDRESS_WIDTH + CHECKSUM_WIDTH;

/// Encodes a network id and an address, both lenient hex strings.
///
/// The inputs go through the same normalization as [`Account::new`], so an
/// address wider than 20 bytes fails with `AddressTooLong` before any buffer
/// is built.
pub fn encode(network: &str, address: &str) -> Result<String> {
    let account = Account::new(network, address)?;
    Ok(encode_account(Some(&account)))
}

/// Encodes an account. `None` yields the blank identifier for network `0x00`
/// and the all-zero address.
pub fn encode_account(account: Option<&Account>) -> String {
    let blank;
    let account = match account {
        Some(account) => account,
        None => {
            blank = Account::from_raw(&[0x00], [0u8; ADDRESS_WIDTH]);
            &blank
        }
    };

    let network = account.network_bytes();
    let mut payload: Vec<u8> = Vec::with_capacity(FIXED_WIDTH + network.len());
    payload.push(VERSION);
    payload.extend_from_slice(network);
    payload.extend_from_slice(account.address_bytes());
    let checksum = checksum(payload.as_slice());
    payload.extend_from_slice(&checksum);
    // version + network + address + checksum
    let mnid = base58_encode(payload.as_slice());
    debug!(
        "Encoded network {} address {} as {mnid}",
        account.network(),
        account.address()
    );
    mnid
}

/// Decodes an MNID identifier.
///
/// Runs base58 decoding, the version gate, the length check, field slicing
/// and the checksum check in that order; the first failing stage ends the
/// decode with its error.
pub fn decode(mnid: &str) -> Result<Account> {
    if mnid.is_empty() {
        return Err(MnidError::EmptyInput);
    }

    let raw = base58_decode(mnid)?;
    let length = raw.len();

    let version = *raw.first().ok_or(MnidError::BufferTooSmall { length })?;
    if version > VERSION {
        return Err(MnidError::UnsupportedVersion {
            expected: VERSION,
            found: version,
        });
    }

    let network_len = match length.checked_sub(FIXED_WIDTH) {
        Some(len) if len > 0 => len,
        _ => return Err(MnidError::BufferTooSmall { length }),
    };

    let network_end = VERSION_WIDTH + network_len;
    let payload_end = length - CHECKSUM_WIDTH;
    let network = &raw[VERSION_WIDTH..network_end];
    let mut address = [0u8; ADDRESS_WIDTH];
    address.copy_from_slice(&raw[network_end..payload_end]);

    let expected = checksum(&raw[..payload_end]);
    let mut found = [0u8; CHECKSUM_WIDTH];
    found.copy_from_slice(&raw[payload_end..]);
    if expected != found {
        return Err(MnidError::ChecksumMismatch { expected, found });
    }

    let account = Account::from_raw(network, address);
    debug!(
        "Decoded {mnid} as network {} address {}",
        account.network(),
        account.address()
    );
    Ok(account)
}

/// Reports whether `candidate` is MNID-shaped: it decodes as base58, is long
/// enough to hold a non-empty network, and starts with the current version.
///
/// The checksum is not verified, so a corrupted identifier can still pass;
/// `decode` is where checksum errors surface. Never fails.
pub fn is_mnid(candidate: &str) -> bool {
    if candidate.is_empty() {
        return false;
    }
    match base58_decode(candidate) {
        Ok(raw) => raw.len() > FIXED_WIDTH && raw[0] == VERSION,
        Err(e) => {
            trace!("{candidate:?} is not base58: {e}");
            false
        }
    }
}

fn checksum(payload: &[u8]) -> [u8; CHECKSUM_WIDTH] {
    let digest = sha3_256_digest(payload);
    let mut checksum = [0u8; CHECKSUM_WIDTH];
    checksum.copy_from_slice(&digest[..CHECKSUM_WIDTH]);
    checksum
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: &str = "0x00521965e7bd230323c423d96c657db5b79d099f";
    const MAINNET: &str = "2nQtiQG6Cgm1GYTBaaKAgr76uY7iSexUkqX";

    #[test]
    fn test_mainnet_encode() {
        assert_eq!(encode("0x1", ADDRESS).unwrap(), MAINNET);
    }

    #[test]
    fn test_mainnet_decode() {
        let account = decode(MAINNET).unwrap();
        assert_eq!(account.network(), "0x01");
        assert_eq!(account.address(), ADDRESS);
    }

    #[test]
    fn test_blank_encode() {
        assert_eq!(encode_account(None), "2n1XR4oJkmBdJMxhBGQGb96gQ88xV6zpStY");
        assert_eq!(encode("00", "00").unwrap(), encode_account(None));
    }

    #[test]
    fn test_direct_encoding_matches_account_encoding() {
        let direct = encode("0x7", "0x1234").unwrap();
        let account = Account::new("0x7", "0x1234").unwrap();
        assert_eq!(direct, encode_account(Some(&account)));
    }

    #[test]
    fn test_checksum_is_first_four_bytes_of_sha3() {
        let raw = base58_decode(MAINNET).unwrap();
        assert_eq!(raw.len(), 26);
        assert_eq!(raw[0], VERSION);
        let digest = sha3_256_digest(&raw[..22]);
        assert_eq!(&raw[22..], &digest[..4]);
    }

    #[test]
    fn test_address_too_long() {
        let err = encode("0x1", "0xaa00521965e7bd230323c423d96c657db5b79d099f").unwrap_err();
        assert_eq!(err, MnidError::AddressTooLong { length: 21 });
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(decode("").unwrap_err(), MnidError::EmptyInput);
    }

    #[test]
    fn test_blank_input_fails_in_base58() {
        assert!(matches!(decode(" ").unwrap_err(), MnidError::Base58(_)));
    }

    #[test]
    fn test_bad_character() {
        let err = decode("2nQtiQG6Cgm1GYTBaaKAgr76uY7iSexlIO0").unwrap_err();
        assert!(matches!(err, MnidError::Base58(_)));
    }

    #[test]
    fn test_bad_checksum() {
        let err = decode("2nQtiQG6Cgm1GYTBaaKAgr76uY7iSexUkqU").unwrap_err();
        assert_eq!(
            err,
            MnidError::ChecksumMismatch {
                expected: [0x5a, 0x9b, 0x7f, 0x92],
                found: [0x5a, 0x9b, 0x7f, 0x8f],
            }
        );
    }

    #[test]
    fn test_future_version() {
        let err = decode("4nQtiQG6Cgm1GYTBaaKAgr76uY7iSexUkqU").unwrap_err();
        assert_eq!(
            err,
            MnidError::UnsupportedVersion {
                expected: 1,
                found: 2
            }
        );
    }

    #[test]
    fn test_too_short() {
        let err = decode("2nQtiQG6CYTBaaKAgr76uY7iSexUkqU").unwrap_err();
        assert_eq!(err, MnidError::BufferTooSmall { length: 23 });
        assert_eq!(
            decode("1").unwrap_err(),
            MnidError::BufferTooSmall { length: 1 }
        );
    }

    #[test]
    fn test_version_zero_decodes_but_is_not_mnid_shaped() {
        // version 0, network 0x01, same address, valid checksum
        let legacy = "1QNJLTnSvaNyBVVQJuu6i1RWQykxdK54tF";
        let account = decode(legacy).unwrap();
        assert_eq!(account.network(), "0x01");
        assert_eq!(account.address(), ADDRESS);
        assert!(!is_mnid(legacy));
    }

    #[test]
    fn test_is_mnid_ignores_checksum() {
        assert!(is_mnid(MAINNET));
        assert!(is_mnid("2nQtiQG6Cgm1GYTBaaKAgr76uY7iSexUkqU"));
    }

    #[test]
    fn test_is_mnid_rejects_other_shapes() {
        assert!(!is_mnid(""));
        assert!(!is_mnid(ADDRESS));
        assert!(!is_mnid("1GbVUSW5WJmRCpaCJ4hanUny77oDaWW4to"));
        assert!(!is_mnid("2nQtiQG6Cgm1GYTBaaKAgr76uY7iSexUkq"));
        assert!(!is_mnid("2nQtiQG6Cgm1GYTBaaKAgr76uY7iSexlIO0"));
    }
}
