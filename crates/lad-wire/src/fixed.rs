use crate::cursor::Cursor;
use crate::discriminator::{DISCRIMINATOR_SIZE, Discriminator};
use crate::error::WireError;
use crate::reserved::Reserved;

/// A C-layout struct with a size known at compile time.
///
/// Implementors read their fields strictly, in declaration order,
/// including reserved gaps and nested fixed structs. They never check
/// their own length: [`read_nested`] and [`decode_fixed`] do that, and
/// also verify afterwards that exactly `SIZE` bytes were consumed.
pub trait FixedLayout: Sized {
    /// Total bytes covered by the fields, padding included.
    const SIZE: usize;

    /// Human-readable name for coverage errors.
    const NAME: &'static str;

    /// Read every field in order.
    ///
    /// # Errors
    ///
    /// Any strict [`Cursor`] error.
    fn read_fields(c: &mut Cursor<'_>) -> Result<Self, WireError>;
}

/// A top-level fixed-layout account prefixed with an 8-byte discriminator.
pub trait FixedAccount: FixedLayout {
    /// The discriminator for this account type. Implementations usually
    /// derive it once from [`FixedLayout::NAME`] and cache it.
    fn discriminator() -> Discriminator;
}

impl<const N: usize> FixedLayout for Reserved<N> {
    const SIZE: usize = N;
    const NAME: &'static str = "Reserved";

    fn read_fields(c: &mut Cursor<'_>) -> Result<Self, WireError> {
        c.read_array::<N>().map(Reserved::from_bytes)
    }
}

/// Decode a nested fixed struct inline at the cursor's position.
///
/// # Errors
///
/// - Any strict read error from the struct's fields.
/// - [`WireError::LayoutMismatch`] if the fields did not cover exactly
///   `T::SIZE` bytes.
pub fn read_nested<T: FixedLayout>(c: &mut Cursor<'_>) -> Result<T, WireError> {
    let start = c.offset();
    let value = T::read_fields(c)?;
    let consumed = c.offset() - start;
    if consumed != T::SIZE {
        return Err(WireError::LayoutMismatch {
            record: T::NAME,
            consumed,
            declared: T::SIZE,
        });
    }
    Ok(value)
}

/// Decode a discriminator-prefixed fixed-layout account.
///
/// ```text
/// ┌───────────────┬─────────────────────────────┬──────────────────┐
/// │ 8 bytes       │ T::SIZE bytes               │ 0+ bytes         │
/// │ discriminator │ fields + reserved regions   │ ignored trailer  │
/// └───────────────┴─────────────────────────────┴──────────────────┘
/// ```
///
/// Steps, in order:
///
///   1. At least 8 bytes must be present.
///   2. The leading 8 bytes must equal `expected`.
///   3. The body must be at least `T::SIZE` bytes. Anything past that
///      was written by a newer program version and is ignored.
///   4. Fields are read strictly from the first `T::SIZE` body bytes.
///   5. Exactly `T::SIZE` bytes must have been consumed.
///
/// # Errors
///
/// - [`WireError::InsufficientData`] if there is no full discriminator.
/// - [`WireError::InvalidDiscriminator`] on a type mismatch, whatever
///   the body holds.
/// - [`WireError::AccountTooShort`] if the body is under `T::SIZE`.
/// - [`WireError::LayoutMismatch`] if the layout table and `T::SIZE`
///   disagree.
pub fn decode_fixed<T: FixedLayout>(buf: &[u8], expected: Discriminator) -> Result<T, WireError> {
    let got = Discriminator::peek(buf).ok_or(WireError::InsufficientData {
        offset: 0,
        needed: DISCRIMINATOR_SIZE,
    })?;
    if got != expected {
        return Err(WireError::InvalidDiscriminator {
            got,
            want: expected,
        });
    }

    let body = &buf[DISCRIMINATOR_SIZE..];
    if body.len() < T::SIZE {
        return Err(WireError::AccountTooShort {
            have: body.len(),
            need: T::SIZE,
        });
    }

    let mut c = Cursor::new(&body[..T::SIZE]);
    read_nested(&mut c)
}

/// [`decode_fixed`] against the account type's own discriminator.
///
/// # Errors
///
/// See [`decode_fixed`].
pub fn decode_account<T: FixedAccount>(buf: &[u8]) -> Result<T, WireError> {
    decode_fixed(buf, T::discriminator())
}
