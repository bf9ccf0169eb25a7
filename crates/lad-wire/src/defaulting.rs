use std::net::Ipv4Addr;

use crate::cursor::{Cursor, LENGTH_PREFIX_SIZE};
use crate::error::WireError;
use crate::primitives::{IPV4_SIZE, NETWORK_V4_SIZE, NetworkV4, PUBKEY_SIZE, Pubkey};

/// A [`Cursor`] that answers "not enough bytes" with a caller-supplied
/// default instead of an error.
///
/// This is what makes tail growth of a record safe. A reader that
/// knows about a field the buffer predates sees too few bytes and gets
/// the default. A reader that predates the field never asks. Both see
/// the same values for every field they share.
///
/// ```text
/// ┌──────────────────────┬──────────────────────────────────────────┐
/// │ remaining vs. width  │ result                                   │
/// ├──────────────────────┼──────────────────────────────────────────┤
/// │ remaining < width    │ default, offset unchanged                │
/// │ remaining >= width   │ strict read, offset advances normally    │
/// └──────────────────────┴──────────────────────────────────────────┘
/// ```
///
/// Strings and vectors only guard their 4-byte prefix. Once the prefix
/// is present, a body that runs past the end of the buffer is still a
/// hard error, so `read_string_or` and `read_vec_or` return `Result`.
/// Sibling readers in other languages behave the same way and fixtures
/// are shared, so this stays as is.
#[derive(Clone, Debug)]
pub struct DefaultingCursor<'a> {
    inner: Cursor<'a>,
}

impl<'a> DefaultingCursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            inner: Cursor::new(buf),
        }
    }

    pub fn from_cursor(inner: Cursor<'a>) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> Cursor<'a> {
        self.inner
    }

    pub fn offset(&self) -> usize {
        self.inner.offset()
    }

    pub fn remaining(&self) -> usize {
        self.inner.remaining()
    }

    fn guarded<T>(
        &mut self,
        width: usize,
        default: T,
        read: fn(&mut Cursor<'a>) -> Result<T, WireError>,
    ) -> T {
        if self.inner.remaining() < width {
            return default;
        }
        read(&mut self.inner).unwrap_or(default)
    }

    pub fn read_u8_or(&mut self, default: u8) -> u8 {
        self.guarded(1, default, Cursor::read_u8)
    }

    pub fn read_bool_or(&mut self, default: bool) -> bool {
        self.guarded(1, default, Cursor::read_bool)
    }

    pub fn read_u16_or(&mut self, default: u16) -> u16 {
        self.guarded(2, default, Cursor::read_u16)
    }

    pub fn read_u32_or(&mut self, default: u32) -> u32 {
        self.guarded(4, default, Cursor::read_u32)
    }

    pub fn read_u64_or(&mut self, default: u64) -> u64 {
        self.guarded(8, default, Cursor::read_u64)
    }

    pub fn read_u128_or(&mut self, default: u128) -> u128 {
        self.guarded(16, default, Cursor::read_u128)
    }

    pub fn read_f64_or(&mut self, default: f64) -> f64 {
        self.guarded(8, default, Cursor::read_f64)
    }

    pub fn read_pubkey_or(&mut self, default: Pubkey) -> Pubkey {
        self.guarded(PUBKEY_SIZE, default, Cursor::read_pubkey)
    }

    pub fn read_ipv4_or(&mut self, default: Ipv4Addr) -> Ipv4Addr {
        self.guarded(IPV4_SIZE, default, Cursor::read_ipv4)
    }

    pub fn read_network_v4_or(&mut self, default: NetworkV4) -> NetworkV4 {
        self.guarded(NETWORK_V4_SIZE, default, Cursor::read_network_v4)
    }

    pub fn read_array_or<const N: usize>(&mut self, default: [u8; N]) -> [u8; N] {
        self.guarded(N, default, Cursor::read_array::<N>)
    }

    /// `default` if the 4-byte length prefix is missing, otherwise a
    /// strict string read.
    ///
    /// # Errors
    ///
    /// Whatever [`Cursor::read_string`] returns once the prefix is present:
    /// a truncated body or invalid UTF-8.
    pub fn read_string_or(&mut self, default: &str) -> Result<String, WireError> {
        if self.inner.remaining() < LENGTH_PREFIX_SIZE {
            return Ok(default.to_owned());
        }
        self.inner.read_string()
    }

    /// `default` if the 4-byte count is missing, otherwise a strict
    /// vector read using `elem` for each element.
    ///
    /// # Errors
    ///
    /// The first element error once the count is present.
    pub fn read_vec_or<T, F>(&mut self, default: Vec<T>, elem: F) -> Result<Vec<T>, WireError>
    where
        F: FnMut(&mut Cursor<'a>) -> Result<T, WireError>,
    {
        if self.inner.remaining() < LENGTH_PREFIX_SIZE {
            return Ok(default);
        }
        self.inner.read_vec(elem)
    }
}

/// The fully defaulting composition every tagged record decoder uses.
///
/// Each read falls back to the natural zero value of its type: `0`,
/// `false`, `""`, an all-zero key/address/network, or an empty vector.
/// Guarding is exactly that of [`DefaultingCursor`]; only the defaults
/// are fixed.
#[derive(Clone, Debug)]
pub struct ZeroDefaultReader<'a> {
    inner: DefaultingCursor<'a>,
}

impl<'a> ZeroDefaultReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            inner: DefaultingCursor::new(buf),
        }
    }

    pub fn offset(&self) -> usize {
        self.inner.offset()
    }

    pub fn remaining(&self) -> usize {
        self.inner.remaining()
    }

    pub fn read_u8(&mut self) -> u8 {
        self.inner.read_u8_or(0)
    }

    pub fn read_bool(&mut self) -> bool {
        self.inner.read_bool_or(false)
    }

    pub fn read_u16(&mut self) -> u16 {
        self.inner.read_u16_or(0)
    }

    pub fn read_u32(&mut self) -> u32 {
        self.inner.read_u32_or(0)
    }

    pub fn read_u64(&mut self) -> u64 {
        self.inner.read_u64_or(0)
    }

    pub fn read_u128(&mut self) -> u128 {
        self.inner.read_u128_or(0)
    }

    pub fn read_f64(&mut self) -> f64 {
        self.inner.read_f64_or(0.0)
    }

    pub fn read_pubkey(&mut self) -> Pubkey {
        self.inner.read_pubkey_or(Pubkey::default())
    }

    pub fn read_ipv4(&mut self) -> Ipv4Addr {
        self.inner.read_ipv4_or(Ipv4Addr::UNSPECIFIED)
    }

    pub fn read_network_v4(&mut self) -> NetworkV4 {
        self.inner.read_network_v4_or(NetworkV4::UNSPECIFIED)
    }

    /// Fixed-width opaque bytes, all zero when absent.
    pub fn read_array<const N: usize>(&mut self) -> [u8; N] {
        self.inner.read_array_or([0; N])
    }

    /// # Errors
    ///
    /// See [`DefaultingCursor::read_string_or`].
    pub fn read_string(&mut self) -> Result<String, WireError> {
        self.inner.read_string_or("")
    }

    /// # Errors
    ///
    /// See [`DefaultingCursor::read_vec_or`].
    pub fn read_vec<T, F>(&mut self, elem: F) -> Result<Vec<T>, WireError>
    where
        F: FnMut(&mut Cursor<'a>) -> Result<T, WireError>,
    {
        self.inner.read_vec_or(Vec::new(), elem)
    }

    /// # Errors
    ///
    /// See [`DefaultingCursor::read_vec_or`].
    pub fn read_pubkey_vec(&mut self) -> Result<Vec<Pubkey>, WireError> {
        self.read_vec(Cursor::read_pubkey)
    }

    /// # Errors
    ///
    /// See [`DefaultingCursor::read_vec_or`].
    pub fn read_network_v4_vec(&mut self) -> Result<Vec<NetworkV4>, WireError> {
        self.read_vec(Cursor::read_network_v4)
    }
}
