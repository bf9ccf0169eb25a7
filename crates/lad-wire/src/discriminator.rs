use std::fmt;

use sha2::{Digest, Sha256};

/// Size of the type prefix on every fixed-layout account.
pub const DISCRIMINATOR_SIZE: usize = 8;

/// Domain separator hashed in front of the type name.
pub const DISCRIMINATOR_DOMAIN: &[u8] = b"dz::account::";

/// The 8-byte type prefix of a fixed-layout account.
///
/// ```text
/// discriminator = SHA-256("dz::account::" ++ type_name)[0..8]
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Discriminator(pub [u8; DISCRIMINATOR_SIZE]);

impl Discriminator {
    /// Derive the discriminator for a type name.
    pub fn for_type(type_name: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(DISCRIMINATOR_DOMAIN);
        hasher.update(type_name.as_bytes());
        let digest = hasher.finalize();
        let mut out = [0u8; DISCRIMINATOR_SIZE];
        out.copy_from_slice(&digest[..DISCRIMINATOR_SIZE]);
        Self(out)
    }

    /// Read the leading 8 bytes of `buf`, if there are that many.
    pub fn peek(buf: &[u8]) -> Option<Self> {
        let head: [u8; DISCRIMINATOR_SIZE] = buf.get(..DISCRIMINATOR_SIZE)?.try_into().ok()?;
        Some(Self(head))
    }

    pub fn as_bytes(&self) -> &[u8; DISCRIMINATOR_SIZE] {
        &self.0
    }
}

/// Cheap prefix test used when filtering fetched accounts by type.
pub fn matches_discriminator(buf: &[u8], want: Discriminator) -> bool {
    Discriminator::peek(buf) == Some(want)
}

impl fmt::Display for Discriminator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for Discriminator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Discriminator({self})")
    }
}
