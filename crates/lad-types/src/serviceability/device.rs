use std::net::Ipv4Addr;

use lad_wire::{NetworkV4, Pubkey, ZeroDefaultReader};

use super::interface::Interface;
use crate::enums::{DeviceDesiredStatus, DeviceHealth, DeviceStatus, DeviceType};
use crate::error::TypeError;

/// Upper bound on the interface count a device record may declare.
///
/// Interfaces carry no length prefix, so the count cannot be checked
/// against the remaining bytes up front. A hostile count would otherwise
/// spin the loop on zero-defaulted interfaces.
pub const MAX_DEVICE_INTERFACES: u32 = 4096;

/// A network device and its interfaces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Device {
    pub account_type: u8,
    pub owner: Pubkey,
    pub index: u128,
    pub bump_seed: u8,
    pub location: Pubkey,
    pub exchange: Pubkey,
    pub device_type: DeviceType,
    pub public_ip: Ipv4Addr,
    pub status: DeviceStatus,
    pub code: String,
    pub dz_prefixes: Vec<NetworkV4>,
    pub metrics_publisher: Pubkey,
    pub contributor: Pubkey,
    pub mgmt_vrf: String,
    pub interfaces: Vec<Interface>,
    pub reference_count: u32,
    pub users_count: u16,
    pub max_users: u16,
    pub device_health: DeviceHealth,
    pub desired_status: DeviceDesiredStatus,
    pub unicast_users_count: u16,
    pub multicast_users_count: u16,
    pub max_unicast_users: u16,
    pub max_multicast_users: u16,
    pub reserved_seats: u16,
}

impl Device {
    /// # Errors
    ///
    /// - A truncated string or prefix list.
    /// - [`TypeError::CountTooLarge`] for more than
    ///   [`MAX_DEVICE_INTERFACES`] interfaces.
    pub fn decode(data: &[u8]) -> Result<Self, TypeError> {
        let mut r = ZeroDefaultReader::new(data);
        Ok(Self {
            account_type: r.read_u8(),
            owner: r.read_pubkey(),
            index: r.read_u128(),
            bump_seed: r.read_u8(),
            location: r.read_pubkey(),
            exchange: r.read_pubkey(),
            device_type: DeviceType::decode(r.read_u8()),
            public_ip: r.read_ipv4(),
            status: DeviceStatus::decode(r.read_u8()),
            code: r.read_string()?,
            dz_prefixes: r.read_network_v4_vec()?,
            metrics_publisher: r.read_pubkey(),
            contributor: r.read_pubkey(),
            mgmt_vrf: r.read_string()?,
            interfaces: read_interfaces(&mut r)?,
            reference_count: r.read_u32(),
            users_count: r.read_u16(),
            max_users: r.read_u16(),
            device_health: DeviceHealth::decode(r.read_u8()),
            desired_status: DeviceDesiredStatus::decode(r.read_u8()),
            unicast_users_count: r.read_u16(),
            multicast_users_count: r.read_u16(),
            max_unicast_users: r.read_u16(),
            max_multicast_users: r.read_u16(),
            reserved_seats: r.read_u16(),
        })
    }
}

fn read_interfaces(r: &mut ZeroDefaultReader<'_>) -> Result<Vec<Interface>, TypeError> {
    let count = r.read_u32();
    if count > MAX_DEVICE_INTERFACES {
        return Err(TypeError::CountTooLarge {
            field: "interfaces",
            count,
            limit: MAX_DEVICE_INTERFACES,
        });
    }
    let mut interfaces = Vec::with_capacity(usize::try_from(count.min(64)).unwrap_or(64));
    for _ in 0..count {
        interfaces.push(Interface::read(r)?);
    }
    Ok(interfaces)
}
