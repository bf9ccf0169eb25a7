use lad_wire::{NetworkV4, Pubkey, ZeroDefaultReader};

use crate::error::TypeError;

/// Network-wide addressing: ASNs and the address blocks tunnels and
/// multicast groups are carved from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GlobalConfig {
    pub account_type: u8,
    pub owner: Pubkey,
    pub bump_seed: u8,
    pub local_asn: u32,
    pub remote_asn: u32,
    pub device_tunnel_block: NetworkV4,
    pub user_tunnel_block: NetworkV4,
    pub multicast_group_block: NetworkV4,
    pub next_bgp_community: u16,
    pub multicast_publisher_block: NetworkV4,
}

impl GlobalConfig {
    /// Every field is fixed-width, so this cannot fail; the `Result`
    /// keeps the signature uniform with the other records.
    ///
    /// # Errors
    ///
    /// None in practice.
    pub fn decode(data: &[u8]) -> Result<Self, TypeError> {
        let mut r = ZeroDefaultReader::new(data);
        Ok(Self {
            account_type: r.read_u8(),
            owner: r.read_pubkey(),
            bump_seed: r.read_u8(),
            local_asn: r.read_u32(),
            remote_asn: r.read_u32(),
            device_tunnel_block: r.read_network_v4(),
            user_tunnel_block: r.read_network_v4(),
            multicast_group_block: r.read_network_v4(),
            next_bgp_community: r.read_u16(),
            multicast_publisher_block: r.read_network_v4(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{Writer, key};

    #[test]
    fn decodes_blocks() {
        let data = Writer::default()
            .u8(2)
            .pubkey(key(9))
            .u8(255)
            .u32(65_000)
            .u32(21_682)
            .net(NetworkV4::from_bytes([172, 16, 0, 0, 16]))
            .net(NetworkV4::from_bytes([169, 254, 0, 0, 16]))
            .net(NetworkV4::from_bytes([233, 84, 178, 0, 24]))
            .u16(10_000)
            .finish();

        let gc = GlobalConfig::decode(&data).unwrap();
        assert_eq!(gc.owner, key(9));
        assert_eq!(gc.local_asn, 65_000);
        assert_eq!(gc.device_tunnel_block.to_string(), "172.16.0.0/16");
        assert_eq!(gc.multicast_group_block.to_string(), "233.84.178.0/24");
        assert_eq!(gc.next_bgp_community, 10_000);
        // Added later; absent in this buffer.
        assert_eq!(gc.multicast_publisher_block, NetworkV4::UNSPECIFIED);
    }

    #[test]
    fn empty_buffer_is_all_zero() {
        assert_eq!(GlobalConfig::decode(&[]).unwrap(), GlobalConfig::default());
    }
}
