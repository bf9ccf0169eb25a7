use std::net::Ipv4Addr;

use lad_wire::{NetworkV4, Pubkey, ZeroDefaultReader};

use crate::enums::{CyoaType, UserStatus, UserType};
use crate::error::TypeError;

/// A connected user and its tunnel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub account_type: u8,
    pub owner: Pubkey,
    pub index: u128,
    pub bump_seed: u8,
    pub user_type: UserType,
    pub tenant: Pubkey,
    pub device: Pubkey,
    pub cyoa_type: CyoaType,
    pub client_ip: Ipv4Addr,
    pub dz_ip: Ipv4Addr,
    pub tunnel_id: u16,
    pub tunnel_net: NetworkV4,
    pub status: UserStatus,
    pub publishers: Vec<Pubkey>,
    pub subscribers: Vec<Pubkey>,
    pub validator: Pubkey,
}

impl User {
    /// # Errors
    ///
    /// A truncated publisher or subscriber list.
    pub fn decode(data: &[u8]) -> Result<Self, TypeError> {
        let mut r = ZeroDefaultReader::new(data);
        Ok(Self {
            account_type: r.read_u8(),
            owner: r.read_pubkey(),
            index: r.read_u128(),
            bump_seed: r.read_u8(),
            user_type: UserType::decode(r.read_u8()),
            tenant: r.read_pubkey(),
            device: r.read_pubkey(),
            cyoa_type: CyoaType::decode(r.read_u8()),
            client_ip: r.read_ipv4(),
            dz_ip: r.read_ipv4(),
            tunnel_id: r.read_u16(),
            tunnel_net: r.read_network_v4(),
            status: UserStatus::decode(r.read_u8()),
            publishers: r.read_pubkey_vec()?,
            subscribers: r.read_pubkey_vec()?,
            validator: r.read_pubkey(),
        })
    }

    pub fn is_multicast(&self) -> bool {
        self.user_type == UserType::Multicast
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{Writer, key};

    #[test]
    fn decodes_multicast_subscriber() {
        let data = Writer::default()
            .u8(7)
            .pubkey(key(1))
            .u128(77)
            .u8(249)
            .u8(3)
            .pubkey(key(2))
            .pubkey(key(3))
            .u8(1)
            .ipv4([198, 51, 100, 10])
            .ipv4([100, 64, 0, 10])
            .u16(501)
            .net(NetworkV4::from_bytes([169, 254, 0, 2, 31]))
            .u8(8)
            .pubkeys(&[])
            .pubkeys(&[key(8), key(9)])
            .pubkey(key(6))
            .finish();

        let u = User::decode(&data).unwrap();
        assert!(u.is_multicast());
        assert_eq!(u.cyoa_type, CyoaType::GreOverDia);
        assert_eq!(u.client_ip, Ipv4Addr::new(198, 51, 100, 10));
        assert_eq!(u.dz_ip, Ipv4Addr::new(100, 64, 0, 10));
        assert_eq!(u.status, UserStatus::OutOfCredits);
        assert!(u.publishers.is_empty());
        assert_eq!(u.subscribers, vec![key(8), key(9)]);
        assert_eq!(u.validator, key(6));
    }

    #[test]
    fn lists_missing_entirely_default_to_empty() {
        let data = Writer::default().u8(7).pubkey(key(1)).finish();
        let u = User::decode(&data).unwrap();
        assert_eq!(u.user_type, UserType::Ibrl);
        assert_eq!(u.client_ip, Ipv4Addr::UNSPECIFIED);
        assert!(u.publishers.is_empty());
        assert!(u.subscribers.is_empty());
    }

    #[test]
    fn unknown_status_two_falls_back_to_pending() {
        // 2 is a gap in the status table.
        let data = Writer::default()
            .u8(7)
            .pubkey(key(1))
            .u128(0)
            .u8(0)
            .u8(0)
            .pubkey(key(0))
            .pubkey(key(0))
            .u8(0)
            .ipv4([0; 4])
            .ipv4([0; 4])
            .u16(0)
            .net(NetworkV4::UNSPECIFIED)
            .u8(2)
            .finish();
        let u = User::decode(&data).unwrap();
        assert_eq!(u.status, UserStatus::Pending);
    }
}
