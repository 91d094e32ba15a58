use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::codec::{self, ADDRESS_WIDTH};
use crate::error::{MnidError, Result};
use crate::utils::{hex_to_bytes_lenient, to_prefixed_hex};

/// An account address paired with the network it lives on.
///
/// Both fields are held as raw bytes and rendered as canonical `0x`-prefixed
/// lowercase hex, so two accounts built from differently padded or prefixed
/// input compare equal whenever their canonical strings do. The network is
/// never empty and the address is always exactly 20 bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "AccountFields", try_from = "AccountFields")]
pub struct Account {
    network: Vec<u8>,
    address: [u8; ADDRESS_WIDTH],
}

/// Wire shape used by serde; deserialization goes back through `Account::new`
#[derive(Serialize, Deserialize)]
struct AccountFields {
    network: String,
    address: String,
}

impl Account {
    /// Builds an account from two lenient hex strings.
    ///
    /// Short addresses are left-padded with zero bytes; addresses wider than
    /// 20 bytes fail with `AddressTooLong`. The network keeps whatever byte
    /// width the input has, but must not be empty.
    pub fn new(network: &str, address: &str) -> Result<Account> {
        let address_bytes = hex_to_bytes_lenient(address)?;
        let address = pad_address(&address_bytes)?;

        let network = hex_to_bytes_lenient(network)?;
        if network.is_empty() {
            return Err(MnidError::EmptyNetwork);
        }

        Ok(Account { network, address })
    }

    /// Same as [`Account::new`] for callers holding optional values.
    /// A missing network or address fails with `NullInput`; an empty string
    /// is not missing.
    pub fn from_hex(network: Option<&str>, address: Option<&str>) -> Result<Account> {
        let network = network.ok_or(MnidError::NullInput { field: "network" })?;
        let address = address.ok_or(MnidError::NullInput { field: "address" })?;
        Account::new(network, address)
    }

    /// Decodes an MNID identifier into its account
    pub fn from_mnid(mnid: &str) -> Result<Account> {
        codec::decode(mnid)
    }

    /// Raw fields sliced out of a decoded payload. The address width is
    /// guaranteed by the array type, so no normalization happens here.
    pub(crate) fn from_raw(network: &[u8], address: [u8; ADDRESS_WIDTH]) -> Account {
        Account {
            network: network.to_vec(),
            address,
        }
    }

    /// Canonical network id, e.g. `0x01`
    pub fn network(&self) -> String {
        to_prefixed_hex(&self.network)
    }

    /// Canonical 40-digit address
    pub fn address(&self) -> String {
        to_prefixed_hex(&self.address)
    }

    pub fn network_bytes(&self) -> &[u8] {
        self.network.as_slice()
    }

    pub fn address_bytes(&self) -> &[u8; ADDRESS_WIDTH] {
        &self.address
    }

    pub fn to_mnid(&self) -> String {
        codec::encode_account(Some(self))
    }
}

fn pad_address(bytes: &[u8]) -> Result<[u8; ADDRESS_WIDTH]> {
    if bytes.len() > ADDRESS_WIDTH {
        return Err(MnidError::AddressTooLong {
            length: bytes.len(),
        });
    }
    let mut address = [0u8; ADDRESS_WIDTH];
    address[ADDRESS_WIDTH - bytes.len()..].copy_from_slice(bytes);
    Ok(address)
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_mnid())
    }
}

impl FromStr for Account {
    type Err = MnidError;

    fn from_str(s: &str) -> Result<Self> {
        Account::from_mnid(s)
    }
}

impl From<Account> for AccountFields {
    fn from(account: Account) -> Self {
        AccountFields {
            network: account.network(),
            address: account.address(),
        }
    }
}

impl TryFrom<AccountFields> for Account {
    type Error = MnidError;

    fn try_from(fields: AccountFields) -> Result<Self> {
        Account::new(&fields.network, &fields.address)
    }
}
