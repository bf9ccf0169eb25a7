//! Little-endian byte builder for unit tests.

use lad_wire::{NetworkV4, Pubkey};

#[derive(Default)]
pub(crate) struct Writer(Vec<u8>);

impl Writer {
    pub(crate) fn u8(mut self, v: u8) -> Self {
        self.0.push(v);
        self
    }

    pub(crate) fn bool(self, v: bool) -> Self {
        self.u8(u8::from(v))
    }

    pub(crate) fn u16(mut self, v: u16) -> Self {
        self.0.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub(crate) fn u32(mut self, v: u32) -> Self {
        self.0.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub(crate) fn u64(mut self, v: u64) -> Self {
        self.0.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub(crate) fn u128(self, v: u128) -> Self {
        self.bytes(&v.to_le_bytes())
    }

    pub(crate) fn f64(mut self, v: f64) -> Self {
        self.0.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub(crate) fn bytes(mut self, v: &[u8]) -> Self {
        self.0.extend_from_slice(v);
        self
    }

    pub(crate) fn pubkey(self, v: Pubkey) -> Self {
        self.bytes(v.as_bytes())
    }

    pub(crate) fn ipv4(self, v: [u8; 4]) -> Self {
        self.bytes(&v)
    }

    pub(crate) fn net(self, v: NetworkV4) -> Self {
        self.bytes(&v.to_bytes())
    }

    pub(crate) fn string(self, v: &str) -> Self {
        self.u32(u32::try_from(v.len()).unwrap()).bytes(v.as_bytes())
    }

    pub(crate) fn pubkeys(self, v: &[Pubkey]) -> Self {
        v.iter().fold(self.u32(u32::try_from(v.len()).unwrap()), |w, k| w.pubkey(*k))
    }

    pub(crate) fn finish(self) -> Vec<u8> {
        self.0
    }
}

pub(crate) fn key(seed: u8) -> Pubkey {
    Pubkey([seed; 32])
}
