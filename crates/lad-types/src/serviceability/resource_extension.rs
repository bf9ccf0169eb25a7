//! Resource pools: an IP block or an ID range plus its allocation bitmap.
//!
//! Unlike the other serviceability records, the tail of this one is not
//! append-only fields but a bitmap at a fixed offset:
//!
//! ```text
//! ┌────────┬────────────────────────────────────────────────┐
//! │ Offset │ Content                                        │
//! ├────────┼────────────────────────────────────────────────┤
//! │ 0      │ account_type (12)                              │
//! │ 1      │ owner                                          │
//! │ 33     │ bump_seed                                      │
//! │ 34     │ associated_with (device key, or zero)          │
//! │ 66     │ allocator tag + body                           │
//! │ 80     │ bitmap, one bit per slot, LSB first            │
//! └────────┴────────────────────────────────────────────────┘
//! ```
//!
//! Allocator bodies: tag 0 is `Ip { base_net, first_free_index }` and
//! tag 1 is `Id { range_start, range_end, first_free_index }`. Bytes
//! between the end of the allocator and offset 80 are padding.

use lad_wire::{NetworkV4, Pubkey, ZeroDefaultReader};

use crate::error::TypeError;

/// Space reserved for the fixed fields and the allocator.
pub const RESOURCE_EXTENSION_HEADER_SIZE: usize = 76;

/// Where the allocation bitmap starts, after four bytes of padding.
pub const RESOURCE_EXTENSION_BITMAP_OFFSET: usize = RESOURCE_EXTENSION_HEADER_SIZE + 4;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IpAllocator {
    pub base_net: NetworkV4,
    pub first_free_index: u64,
}

/// Allocates from `[range_start, range_end)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IdAllocator {
    pub range_start: u16,
    pub range_end: u16,
    pub first_free_index: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Allocator {
    Ip(IpAllocator),
    Id(IdAllocator),
    /// An allocator kind this reader does not know. Only the tag was read.
    Unsupported { tag: u8 },
}

impl Allocator {
    fn read(r: &mut ZeroDefaultReader<'_>) -> Self {
        match r.read_u8() {
            0 => Self::Ip(IpAllocator {
                base_net: r.read_network_v4(),
                first_free_index: r.read_u64(),
            }),
            1 => Self::Id(IdAllocator {
                range_start: r.read_u16(),
                range_end: r.read_u16(),
                first_free_index: r.read_u64(),
            }),
            tag => Self::Unsupported { tag },
        }
    }

    pub fn tag(&self) -> u8 {
        match self {
            Self::Ip(_) => 0,
            Self::Id(_) => 1,
            Self::Unsupported { tag } => *tag,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Ip(_) => "ip",
            Self::Id(_) => "id",
            Self::Unsupported { .. } => "unknown",
        }
    }
}

impl Default for Allocator {
    fn default() -> Self {
        Self::Ip(IpAllocator::default())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResourceExtension {
    pub account_type: u8,
    pub owner: Pubkey,
    pub bump_seed: u8,
    pub associated_with: Pubkey,
    pub allocator: Allocator,
    pub bitmap: Vec<u8>,
}

impl ResourceExtension {
    /// Decode a resource pool account.
    ///
    /// Header and allocator fields default to zero when the buffer stops
    /// short of them; the bitmap is empty unless the buffer reaches
    /// [`RESOURCE_EXTENSION_BITMAP_OFFSET`].
    ///
    /// # Errors
    ///
    /// None today; the signature matches the other record decoders.
    pub fn decode(data: &[u8]) -> Result<Self, TypeError> {
        let (head, bitmap) = data.split_at(data.len().min(RESOURCE_EXTENSION_BITMAP_OFFSET));
        let mut r = ZeroDefaultReader::new(head);
        Ok(Self {
            account_type: r.read_u8(),
            owner: r.read_pubkey(),
            bump_seed: r.read_u8(),
            associated_with: r.read_pubkey(),
            allocator: Allocator::read(&mut r),
            bitmap: bitmap.to_vec(),
        })
    }

    /// Slots the pool can hand out: `2^(32 - prefix)` addresses for an
    /// IP block, `range_end - range_start` ids for a range.
    pub fn total_capacity(&self) -> u64 {
        match self.allocator {
            Allocator::Ip(ip) if ip.base_net.prefix_len <= 32 => {
                1u64 << (32 - u32::from(ip.base_net.prefix_len))
            }
            Allocator::Id(id) => u64::from(id.range_end.saturating_sub(id.range_start)),
            Allocator::Ip(_) | Allocator::Unsupported { .. } => 0,
        }
    }

    /// Set bits in the bitmap.
    pub fn allocated_count(&self) -> u64 {
        self.bitmap.iter().map(|b| u64::from(b.count_ones())).sum()
    }

    pub fn available_count(&self) -> u64 {
        self.total_capacity().saturating_sub(self.allocated_count())
    }

    /// Indices of allocated slots, ascending.
    pub fn allocated_indices(&self) -> impl Iterator<Item = u64> + '_ {
        (0u64..).step_by(8).zip(&self.bitmap).flat_map(|(base, &byte)| {
            (0..8u8)
                .filter(move |&bit| byte & (1u8 << bit) != 0)
                .map(move |bit| base + u64::from(bit))
        })
    }
}
