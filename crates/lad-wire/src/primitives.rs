use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Width of a public key on the wire.
pub const PUBKEY_SIZE: usize = 32;

/// Width of an IPv4 address on the wire.
pub const IPV4_SIZE: usize = 4;

/// Width of a CIDR network on the wire: 4 address bytes + 1 prefix byte.
pub const NETWORK_V4_SIZE: usize = 5;

/// A 32-byte account identifier, stored raw.
///
/// Displays as base58. The all-zero key is the default and is
/// what defaulting reads produce when the field is absent.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pubkey(pub [u8; PUBKEY_SIZE]);

impl Pubkey {
    pub const fn new(bytes: [u8; PUBKEY_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; PUBKEY_SIZE] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }
}

impl From<[u8; PUBKEY_SIZE]> for Pubkey {
    fn from(bytes: [u8; PUBKEY_SIZE]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Pubkey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bs58::encode(self.0).into_string())
    }
}

/// Why a string is not a base58 key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParsePubkeyError {
    #[error("invalid base58: {0}")]
    Base58(#[from] bs58::decode::Error),

    #[error("decoded key is {0} bytes, expected 32")]
    Length(usize),
}

/// Parses the base58 form produced by `Display`.
impl FromStr for Pubkey {
    type Err = ParsePubkeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decoded = bs58::decode(s).into_vec()?;
        let bytes: [u8; PUBKEY_SIZE] = decoded
            .try_into()
            .map_err(|v: Vec<u8>| ParsePubkeyError::Length(v.len()))?;
        Ok(Self(bytes))
    }
}

impl fmt::Debug for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pubkey({self})")
    }
}

/// An IPv4 network as it sits on the wire: address then prefix length.
///
/// The prefix is kept verbatim. A prefix of 0 or above 32 is not a
/// decode error; consumers ask [`is_representable`](Self::is_representable)
/// before treating the value as CIDR.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NetworkV4 {
    pub addr: Ipv4Addr,
    pub prefix_len: u8,
}

impl NetworkV4 {
    pub const UNSPECIFIED: Self = Self {
        addr: Ipv4Addr::UNSPECIFIED,
        prefix_len: 0,
    };

    pub fn from_bytes(raw: [u8; NETWORK_V4_SIZE]) -> Self {
        Self {
            addr: Ipv4Addr::new(raw[0], raw[1], raw[2], raw[3]),
            prefix_len: raw[4],
        }
    }

    pub fn to_bytes(self) -> [u8; NETWORK_V4_SIZE] {
        let [a, b, c, d] = self.addr.octets();
        [a, b, c, d, self.prefix_len]
    }

    pub fn is_representable(self) -> bool {
        (1..=32).contains(&self.prefix_len)
    }
}

impl Default for NetworkV4 {
    fn default() -> Self {
        Self::UNSPECIFIED
    }
}

impl fmt::Display for NetworkV4 {
    /// `a.b.c.d/len`, or nothing at all when the prefix is out of range.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_representable() {
            write!(f, "{}/{}", self.addr, self.prefix_len)
        } else {
            Ok(())
        }
    }
}
