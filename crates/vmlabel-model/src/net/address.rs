use std::net::IpAddr;

use serde::{Deserialize, Deserializer, Serialize, de};

use crate::{AddressFamily, ModelError, ModelResult};

/// One network address reported for a guest interface.
///
/// The textual address is stored as reported; [`AddressRecord::ip`] parses it on demand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddressRecord {
    #[serde(rename = "ip-address", alias = "address")]
    address: String,
    #[serde(rename = "ip-address-type", alias = "address-type")]
    address_type: AddressFamily,
    /// Subnet mask length in bits.
    #[serde(deserialize_with = "prefix_len")]
    prefix: u32,
}

/// Decode a prefix length, naming the field in any error.
fn prefix_len<'de, D>(d: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = i64::deserialize(d).map_err(|e| de::Error::custom(format!("`prefix`: {e}")))?;
    u32::try_from(raw).map_err(|_| {
        de::Error::custom(format!(
            "`prefix`: {raw} is out of range, expected a non-negative integer"
        ))
    })
}

impl AddressRecord {
    pub fn new<A, F>(address: A, address_type: F, prefix: u32) -> Self
    where
        A: Into<String>,
        F: Into<AddressFamily>,
    {
        Self {
            address: address.into(),
            address_type: address_type.into(),
            prefix,
        }
    }

    /// Textual address (IPv4 or IPv6).
    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn address_type(&self) -> &AddressFamily {
        &self.address_type
    }

    pub fn prefix(&self) -> u32 {
        self.prefix
    }

    /// Parse the textual address.
    pub fn ip(&self) -> ModelResult<IpAddr> {
        self.address
            .parse()
            .map_err(|_| ModelError::InvalidAddress(self.address.clone()))
    }

    /// Returns `true` for loopback addresses; unparsable addresses are never loopback.
    pub fn is_loopback(&self) -> bool {
        self.ip().map(|ip| ip.is_loopback()).unwrap_or(false)
    }
}
