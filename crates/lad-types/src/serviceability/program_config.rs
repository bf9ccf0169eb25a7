use std::fmt;

use lad_wire::ZeroDefaultReader;

use crate::error::TypeError;

/// `major.minor.patch`, three little-endian u32s on the wire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProgramVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl ProgramVersion {
    fn read(r: &mut ZeroDefaultReader<'_>) -> Self {
        Self {
            major: r.read_u32(),
            minor: r.read_u32(),
            patch: r.read_u32(),
        }
    }
}

impl fmt::Display for ProgramVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// The deployed serviceability program's version and the oldest client
/// version it still accepts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProgramConfig {
    pub account_type: u8,
    pub bump_seed: u8,
    pub version: ProgramVersion,
    pub min_compat_version: ProgramVersion,
}

impl ProgramConfig {
    /// # Errors
    ///
    /// None in practice; every field is fixed-width.
    pub fn decode(data: &[u8]) -> Result<Self, TypeError> {
        let mut r = ZeroDefaultReader::new(data);
        Ok(Self {
            account_type: r.read_u8(),
            bump_seed: r.read_u8(),
            version: ProgramVersion::read(&mut r),
            min_compat_version: ProgramVersion::read(&mut r),
        })
    }

    /// Whether a client at `client` is new enough for this program.
    pub fn is_compatible(&self, client: ProgramVersion) -> bool {
        client >= self.min_compat_version
    }
}
