use std::fmt;

/// An uninterpreted byte region inside a record layout.
///
/// Storage gaps and alignment padding are carried as-is so their bytes
/// survive untouched, but nothing reads meaning out of them. The only
/// accessors hand back the raw bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reserved<const N: usize>([u8; N]);

impl<const N: usize> Reserved<N> {
    pub const LEN: usize = N;

    pub const fn from_bytes(bytes: [u8; N]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<const N: usize> Default for Reserved<N> {
    fn default() -> Self {
        Self([0; N])
    }
}

impl<const N: usize> fmt::Debug for Reserved<N> {
    // Content is deliberately not printed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let zeroed = self.0.iter().all(|&b| b == 0);
        write!(f, "Reserved<{N}>{}", if zeroed { "" } else { "(non-zero)" })
    }
}
