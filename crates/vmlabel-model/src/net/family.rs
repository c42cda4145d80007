use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Address family tag reported by the guest agent.
///
/// - `Ipv4` / `Ipv6` for the two well-known tags (matched case-insensitively);
/// - `Other` keeps any unrecognized tag verbatim, so decoding never fails on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AddressFamily {
    Ipv4,
    Ipv6,
    Other(String),
}

impl AddressFamily {
    /// Returns the canonical tag.
    pub fn as_str(&self) -> &str {
        match self {
            AddressFamily::Ipv4 => "ipv4",
            AddressFamily::Ipv6 => "ipv6",
            AddressFamily::Other(s) => s,
        }
    }
}

impl From<String> for AddressFamily {
    fn from(s: String) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "ipv4" => Self::Ipv4,
            "ipv6" => Self::Ipv6,
            _ => Self::Other(s),
        }
    }
}

impl From<&str> for AddressFamily {
    fn from(s: &str) -> Self {
        Self::from(s.to_owned())
    }
}

impl FromStr for AddressFamily {
    type Err = Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl From<AddressFamily> for String {
    fn from(f: AddressFamily) -> Self {
        match f {
            AddressFamily::Other(s) => s,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
