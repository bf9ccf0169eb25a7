//! Device interface sub-records.
//!
//! Interfaces are embedded in a [`Device`](super::Device) as a counted
//! list, each element prefixed with its own layout version:
//!
//! ```text
//! ┌─────────┬───────────────────────────────────────────┐
//! │ version │ body                                      │
//! ├─────────┼───────────────────────────────────────────┤
//! │ 0       │ V1 fields                                 │
//! │ 1       │ V2 fields (adds CYOA, DIA, bandwidth, …)  │
//! │ >= 2    │ nothing is read; decoder stops here       │
//! └─────────┴───────────────────────────────────────────┘
//! ```
//!
//! There is no length prefix on an interface, so an unsupported version
//! leaves the cursor sitting inside bytes it cannot interpret.

use lad_wire::{NetworkV4, ZeroDefaultReader};

use crate::enums::{CyoaType, InterfaceDia, InterfaceStatus, InterfaceType, LoopbackType, RoutingMode};
use crate::error::TypeError;

/// First layout version this reader does not understand.
pub const CURRENT_INTERFACE_VERSION: u8 = 2;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InterfaceV1 {
    pub status: InterfaceStatus,
    pub name: String,
    pub interface_type: InterfaceType,
    pub loopback_type: LoopbackType,
    pub vlan_id: u16,
    pub ip_net: NetworkV4,
    pub node_segment_idx: u16,
    pub user_tunnel_endpoint: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InterfaceV2 {
    pub status: InterfaceStatus,
    pub name: String,
    pub interface_type: InterfaceType,
    pub cyoa: CyoaType,
    pub dia: InterfaceDia,
    pub loopback_type: LoopbackType,
    pub bandwidth: u64,
    pub cir: u64,
    pub mtu: u16,
    pub routing_mode: RoutingMode,
    pub vlan_id: u16,
    pub ip_net: NetworkV4,
    pub node_segment_idx: u16,
    pub user_tunnel_endpoint: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Interface {
    V1(InterfaceV1),
    V2(InterfaceV2),
    /// A layout newer than this reader. Only the version byte was read.
    Unsupported { version: u8 },
}

impl Interface {
    /// Read one interface from the enclosing record's reader.
    ///
    /// # Errors
    ///
    /// A truncated or non-UTF-8 interface name.
    pub fn read(r: &mut ZeroDefaultReader<'_>) -> Result<Self, TypeError> {
        let version = r.read_u8();
        match version {
            0 => Ok(Self::V1(InterfaceV1 {
                status: InterfaceStatus::decode(r.read_u8()),
                name: r.read_string()?,
                interface_type: InterfaceType::decode(r.read_u8()),
                loopback_type: LoopbackType::decode(r.read_u8()),
                vlan_id: r.read_u16(),
                ip_net: r.read_network_v4(),
                node_segment_idx: r.read_u16(),
                user_tunnel_endpoint: r.read_bool(),
            })),
            1 => Ok(Self::V2(InterfaceV2 {
                status: InterfaceStatus::decode(r.read_u8()),
                name: r.read_string()?,
                interface_type: InterfaceType::decode(r.read_u8()),
                cyoa: CyoaType::decode(r.read_u8()),
                dia: InterfaceDia::decode(r.read_u8()),
                loopback_type: LoopbackType::decode(r.read_u8()),
                bandwidth: r.read_u64(),
                cir: r.read_u64(),
                mtu: r.read_u16(),
                routing_mode: RoutingMode::decode(r.read_u8()),
                vlan_id: r.read_u16(),
                ip_net: r.read_network_v4(),
                node_segment_idx: r.read_u16(),
                user_tunnel_endpoint: r.read_bool(),
            })),
            version => Ok(Self::Unsupported { version }),
        }
    }

    /// The on-wire layout version.
    pub fn version(&self) -> u8 {
        match self {
            Self::V1(_) => 0,
            Self::V2(_) => 1,
            Self::Unsupported { version } => *version,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::V1(v) => Some(&v.name),
            Self::V2(v) => Some(&v.name),
            Self::Unsupported { .. } => None,
        }
    }

    pub fn status(&self) -> Option<InterfaceStatus> {
        match self {
            Self::V1(v) => Some(v.status),
            Self::V2(v) => Some(v.status),
            Self::Unsupported { .. } => None,
        }
    }

    pub fn ip_net(&self) -> Option<NetworkV4> {
        match self {
            Self::V1(v) => Some(v.ip_net),
            Self::V2(v) => Some(v.ip_net),
            Self::Unsupported { .. } => None,
        }
    }
}
