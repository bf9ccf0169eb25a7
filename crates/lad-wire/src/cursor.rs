use std::net::Ipv4Addr;

use crate::error::WireError;
use crate::primitives::{IPV4_SIZE, NETWORK_V4_SIZE, NetworkV4, PUBKEY_SIZE, Pubkey};

/// Width of the little-endian `u32` prefix on strings and vectors.
pub const LENGTH_PREFIX_SIZE: usize = 4;

/// Strict, fail-fast reader over an immutable byte buffer.
///
/// A `Cursor` is created for one decode pass and thrown away. Every
/// fixed-width read either advances `offset` by exactly the width of
/// the value or fails with [`WireError::InsufficientData`] and leaves
/// `offset` where it was.
///
/// ```text
///   buf:  [ 01 | e8 03 | 50 c3 00 00 | 08 07 06 05 04 03 02 01 ]
///   read:  u8   u16     u32           u64
///   off:  0 -> 1 -> 3 -> 7 -> 15
/// ```
///
/// Multi-byte integers are little-endian. A `u128` is two `u64` words,
/// low word first.
///
/// Variable-length values (strings, vectors) read a `u32` prefix and then
/// the body. These are the only reads that can fail after partial
/// progress: the prefix has already been consumed when the body turns
/// out to be short. Callers treat any such failure as fatal for the
/// whole record and never resume from the partially advanced cursor.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    offset: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, offset: 0 }
    }

    /// Bytes consumed so far.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.offset
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Take the next `len` bytes as a borrowed slice.
    ///
    /// # Errors
    ///
    /// [`WireError::InsufficientData`] if fewer than `len` bytes remain,
    /// including the case where `offset + len` overflows. The cursor
    /// does not move.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], WireError> {
        match self.offset.checked_add(len) {
            Some(end) if end <= self.buf.len() => {
                let out = &self.buf[self.offset..end];
                self.offset = end;
                Ok(out)
            }
            _ => Err(WireError::InsufficientData {
                offset: self.offset,
                needed: len,
            }),
        }
    }

    /// Take the next `N` bytes as an owned array.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], WireError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8, WireError> {
        Ok(self.read_array::<1>()?[0])
    }

    /// One byte; any non-zero value reads as `true`.
    pub fn read_bool(&mut self) -> Result<bool, WireError> {
        Ok(self.read_u8()? != 0)
    }

    pub fn read_u16(&mut self) -> Result<u16, WireError> {
        self.read_array().map(u16::from_le_bytes)
    }

    pub fn read_u32(&mut self) -> Result<u32, WireError> {
        self.read_array().map(u32::from_le_bytes)
    }

    pub fn read_u64(&mut self) -> Result<u64, WireError> {
        self.read_array().map(u64::from_le_bytes)
    }

    /// Two little-endian `u64` words, low first: `low | (high << 64)`.
    ///
    /// Checks for all 16 bytes up front so a buffer holding only the
    /// low word fails without consuming it.
    pub fn read_u128(&mut self) -> Result<u128, WireError> {
        self.ensure(16)?;
        let low = self.read_u64()?;
        let high = self.read_u64()?;
        Ok(u128::from(low) | (u128::from(high) << 64))
    }

    pub fn read_f64(&mut self) -> Result<f64, WireError> {
        self.read_array().map(f64::from_le_bytes)
    }

    pub fn read_pubkey(&mut self) -> Result<Pubkey, WireError> {
        self.read_array::<PUBKEY_SIZE>().map(Pubkey)
    }

    pub fn read_ipv4(&mut self) -> Result<Ipv4Addr, WireError> {
        self.read_array::<IPV4_SIZE>().map(Ipv4Addr::from)
    }

    pub fn read_network_v4(&mut self) -> Result<NetworkV4, WireError> {
        self.read_array::<NETWORK_V4_SIZE>().map(NetworkV4::from_bytes)
    }

    /// A `u32` length prefix followed by that many UTF-8 bytes.
    ///
    /// A zero prefix yields `""` after consuming just the prefix.
    ///
    /// # Errors
    ///
    /// - [`WireError::InsufficientData`] if the prefix is short (nothing
    ///   consumed) or the body is short (prefix already consumed).
    /// - [`WireError::InvalidUtf8`] if the body is not UTF-8; `offset`
    ///   points at the start of the body.
    pub fn read_string(&mut self) -> Result<String, WireError> {
        let len = self.read_len()?;
        let start = self.offset;
        let body = self.read_bytes(len)?;
        std::str::from_utf8(body)
            .map(str::to_owned)
            .map_err(|_| WireError::InvalidUtf8 { offset: start })
    }

    /// A `u32` element count followed by `count` elements, each read by
    /// `elem` on this same cursor.
    ///
    /// The count is trusted; the first element that fails aborts the
    /// whole vector with that element's error. Pre-allocation never
    /// reserves more bytes than remain in the buffer, see
    /// [`vec_capacity`].
    pub fn read_vec<T, F>(&mut self, mut elem: F) -> Result<Vec<T>, WireError>
    where
        F: FnMut(&mut Self) -> Result<T, WireError>,
    {
        let count = self.read_len()?;
        let mut out = Vec::with_capacity(vec_capacity::<T>(count, self.remaining()));
        for _ in 0..count {
            out.push(elem(self)?);
        }
        Ok(out)
    }

    pub fn read_pubkey_vec(&mut self) -> Result<Vec<Pubkey>, WireError> {
        self.read_vec(Self::read_pubkey)
    }

    pub fn read_network_v4_vec(&mut self) -> Result<Vec<NetworkV4>, WireError> {
        self.read_vec(Self::read_network_v4)
    }

    pub fn read_u32_vec(&mut self) -> Result<Vec<u32>, WireError> {
        self.read_vec(Self::read_u32)
    }

    fn read_len(&mut self) -> Result<usize, WireError> {
        // Saturates where usize is narrower than u32; the body read that
        // follows then fails as insufficient data.
        self.read_u32()
            .map(|n| usize::try_from(n).unwrap_or(usize::MAX))
    }

    fn ensure(&self, needed: usize) -> Result<(), WireError> {
        if self.remaining() < needed {
            return Err(WireError::InsufficientData {
                offset: self.offset,
                needed,
            });
        }
        Ok(())
    }
}

/// Elements to reserve up front for a vector of `count` values of `T`.
///
/// The reservation is bounded in bytes by `remaining`, whatever the
/// in-memory size of `T`. Every element occupies at least one wire byte,
/// so a count that can be satisfied still fits; a larger count fails on
/// its first missing element before the vector grows much.
pub(crate) fn vec_capacity<T>(count: usize, remaining: usize) -> usize {
    let per_element = std::mem::size_of::<T>().max(1);
    count.min(remaining / per_element)
}
