use lad_wire::{NetworkV4, Pubkey, ZeroDefaultReader};

use crate::enums::{LinkDesiredStatus, LinkHealth, LinkStatus, LinkType};
use crate::error::TypeError;

/// A tunnel between two devices (side A and side Z).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Link {
    pub account_type: u8,
    pub owner: Pubkey,
    pub index: u128,
    pub bump_seed: u8,
    pub side_a: Pubkey,
    pub side_z: Pubkey,
    pub link_type: LinkType,
    pub bandwidth: u64,
    pub mtu: u32,
    pub delay_ns: u64,
    pub jitter_ns: u64,
    pub tunnel_id: u16,
    pub tunnel_net: NetworkV4,
    pub status: LinkStatus,
    pub code: String,
    pub contributor: Pubkey,
    pub side_a_iface_name: String,
    pub side_z_iface_name: String,
    pub delay_override_ns: u64,
    pub link_health: LinkHealth,
    pub desired_status: LinkDesiredStatus,
}

impl Link {
    /// # Errors
    ///
    /// A truncated or non-UTF-8 string.
    pub fn decode(data: &[u8]) -> Result<Self, TypeError> {
        let mut r = ZeroDefaultReader::new(data);
        Ok(Self {
            account_type: r.read_u8(),
            owner: r.read_pubkey(),
            index: r.read_u128(),
            bump_seed: r.read_u8(),
            side_a: r.read_pubkey(),
            side_z: r.read_pubkey(),
            link_type: LinkType::decode(r.read_u8()),
            bandwidth: r.read_u64(),
            mtu: r.read_u32(),
            delay_ns: r.read_u64(),
            jitter_ns: r.read_u64(),
            tunnel_id: r.read_u16(),
            tunnel_net: r.read_network_v4(),
            status: LinkStatus::decode(r.read_u8()),
            code: r.read_string()?,
            contributor: r.read_pubkey(),
            side_a_iface_name: r.read_string()?,
            side_z_iface_name: r.read_string()?,
            delay_override_ns: r.read_u64(),
            link_health: LinkHealth::decode(r.read_u8()),
            desired_status: LinkDesiredStatus::decode(r.read_u8()),
        })
    }

    /// The delay to route on: the override when set, else the measured one.
    pub fn effective_delay_ns(&self) -> u64 {
        if self.delay_override_ns == 0 {
            self.delay_ns
        } else {
            self.delay_override_ns
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{Writer, key};

    fn link(link_type: u8, override_ns: u64) -> Vec<u8> {
        Writer::default()
            .u8(6)
            .pubkey(key(1))
            .u128(4)
            .u8(251)
            .pubkey(key(2))
            .pubkey(key(3))
            .u8(link_type)
            .u64(10_000_000_000)
            .u32(9000)
            .u64(3_000_000)
            .u64(10_000)
            .u16(503)
            .net(NetworkV4::from_bytes([172, 16, 0, 4, 31]))
            .u8(1)
            .string("ams-fra")
            .pubkey(key(4))
            .string("Ethernet1")
            .string("Ethernet7")
            .u64(override_ns)
            .u8(2)
            .u8(7)
            .finish()
    }

    #[test]
    fn decodes_dzx_link() {
        let l = Link::decode(&link(127, 0)).unwrap();
        assert_eq!(l.link_type, LinkType::Dzx);
        assert_eq!(l.link_type.to_string(), "DZX");
        assert_eq!(l.mtu, 9000);
        assert_eq!(l.tunnel_id, 503);
        assert_eq!(l.tunnel_net.to_string(), "172.16.0.4/31");
        assert_eq!(l.status, LinkStatus::Activated);
        assert_eq!(l.side_z_iface_name, "Ethernet7");
        assert_eq!(l.link_health, LinkHealth::ReadyForService);
        assert_eq!(l.desired_status, LinkDesiredStatus::SoftDrained);
        assert_eq!(l.effective_delay_ns(), 3_000_000);
    }

    #[test]
    fn unknown_link_type_falls_back_to_wan() {
        let l = Link::decode(&link(0, 0)).unwrap();
        assert_eq!(l.link_type, LinkType::Wan);
    }

    #[test]
    fn delay_override_wins() {
        let l = Link::decode(&link(1, 1_000_000_000)).unwrap();
        assert_eq!(l.effective_delay_ns(), 1_000_000_000);
    }
}
