use std::net::Ipv4Addr;

use lad_wire::{Pubkey, ZeroDefaultReader};

use crate::enums::AccessPassStatus;
use crate::error::TypeError;

/// What an access pass grants, carried in a tag-dispatched region.
///
/// ```text
/// ┌─────┬───────────────────────────┬──────────────────────┐
/// │ Tag │ Variant                   │ Payload              │
/// ├─────┼───────────────────────────┼──────────────────────┤
/// │ 0   │ Prepaid                   │ none                 │
/// │ 1   │ SolanaValidator           │ pubkey               │
/// │ 2   │ SolanaRpc                 │ pubkey               │
/// │ 3   │ SolanaMulticastPublisher  │ pubkey               │
/// │ 4   │ SolanaMulticastSubscriber │ pubkey               │
/// │ 5   │ Others                    │ string, string       │
/// │ *   │ Prepaid                   │ none                 │
/// └─────┴───────────────────────────┴──────────────────────┘
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AccessPassKind {
    #[default]
    Prepaid,
    SolanaValidator(Pubkey),
    SolanaRpc(Pubkey),
    SolanaMulticastPublisher(Pubkey),
    SolanaMulticastSubscriber(Pubkey),
    Others { type_name: String, key: String },
}

impl AccessPassKind {
    fn read(tag: u8, r: &mut ZeroDefaultReader<'_>) -> Result<Self, TypeError> {
        Ok(match tag {
            1 => Self::SolanaValidator(r.read_pubkey()),
            2 => Self::SolanaRpc(r.read_pubkey()),
            3 => Self::SolanaMulticastPublisher(r.read_pubkey()),
            4 => Self::SolanaMulticastSubscriber(r.read_pubkey()),
            5 => Self::Others {
                type_name: r.read_string()?,
                key: r.read_string()?,
            },
            _ => Self::Prepaid,
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prepaid => "prepaid",
            Self::SolanaValidator(_) => "solana_validator",
            Self::SolanaRpc(_) => "solana_rpc",
            Self::SolanaMulticastPublisher(_) => "solana_multicast_publisher",
            Self::SolanaMulticastSubscriber(_) => "solana_multicast_subscriber",
            Self::Others { .. } => "others",
        }
    }

    /// The pubkey payload, for the variants that carry one.
    pub fn pubkey(&self) -> Option<Pubkey> {
        match self {
            Self::SolanaValidator(k)
            | Self::SolanaRpc(k)
            | Self::SolanaMulticastPublisher(k)
            | Self::SolanaMulticastSubscriber(k) => Some(*k),
            Self::Prepaid | Self::Others { .. } => None,
        }
    }
}

/// Permission for a client IP to connect, and on which terms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessPass {
    pub account_type: u8,
    pub owner: Pubkey,
    pub bump_seed: u8,
    /// Raw tag as read, kept even when it resolved to `Prepaid`.
    pub kind_tag: u8,
    pub kind: AccessPassKind,
    pub client_ip: Ipv4Addr,
    pub user_payer: Pubkey,
    pub last_access_epoch: u64,
    pub connection_count: u16,
    pub status: AccessPassStatus,
    pub mgroup_pub_allowlist: Vec<Pubkey>,
    pub mgroup_sub_allowlist: Vec<Pubkey>,
    pub flags: u8,
}

impl AccessPass {
    /// # Errors
    ///
    /// A truncated `Others` string or allowlist body.
    pub fn decode(data: &[u8]) -> Result<Self, TypeError> {
        let mut r = ZeroDefaultReader::new(data);
        let account_type = r.read_u8();
        let owner = r.read_pubkey();
        let bump_seed = r.read_u8();
        let kind_tag = r.read_u8();
        let kind = AccessPassKind::read(kind_tag, &mut r)?;
        Ok(Self {
            account_type,
            owner,
            bump_seed,
            kind_tag,
            kind,
            client_ip: r.read_ipv4(),
            user_payer: r.read_pubkey(),
            last_access_epoch: r.read_u64(),
            connection_count: r.read_u16(),
            status: AccessPassStatus::decode(r.read_u8()),
            mgroup_pub_allowlist: r.read_pubkey_vec()?,
            mgroup_sub_allowlist: r.read_pubkey_vec()?,
            flags: r.read_u8(),
        })
    }

    /// `u64::MAX` marks a pass that never expires.
    pub fn is_unlimited(&self) -> bool {
        self.last_access_epoch == u64::MAX
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{Writer, key};

    fn head(tag: u8) -> Writer {
        Writer::default().u8(11).pubkey(key(1)).u8(245).u8(tag)
    }

    fn tail(w: Writer) -> Vec<u8> {
        w.ipv4([192, 0, 2, 44])
            .pubkey(key(7))
            .u64(u64::MAX)
            .u16(3)
            .u8(1)
            .pubkeys(&[key(8)])
            .pubkeys(&[])
            .u8(0b01)
            .finish()
    }

    #[test]
    fn validator_variant_reads_a_pubkey() {
        let ap = AccessPass::decode(&tail(head(1).pubkey(key(5)))).unwrap();
        assert_eq!(ap.kind, AccessPassKind::SolanaValidator(key(5)));
        assert_eq!(ap.kind.pubkey(), Some(key(5)));
        assert_eq!(ap.client_ip, Ipv4Addr::new(192, 0, 2, 44));
        assert_eq!(ap.user_payer, key(7));
        assert!(ap.is_unlimited());
        assert_eq!(ap.status, AccessPassStatus::Connected);
        assert_eq!(ap.mgroup_pub_allowlist, vec![key(8)]);
        assert_eq!(ap.flags, 1);
    }

    #[test]
    fn others_variant_reads_two_strings() {
        let data = tail(head(5).string("jito").string("block-engine"));
        let ap = AccessPass::decode(&data).unwrap();
        assert_eq!(
            ap.kind,
            AccessPassKind::Others {
                type_name: "jito".into(),
                key: "block-engine".into(),
            }
        );
        assert_eq!(ap.kind.as_str(), "others");
        assert_eq!(ap.user_payer, key(7));
    }

    #[test]
    fn prepaid_reads_no_payload() {
        let ap = AccessPass::decode(&tail(head(0))).unwrap();
        assert_eq!(ap.kind, AccessPassKind::Prepaid);
        assert_eq!(ap.client_ip, Ipv4Addr::new(192, 0, 2, 44));
    }

    #[test]
    fn unknown_tag_is_prepaid_and_keeps_raw_tag() {
        let ap = AccessPass::decode(&tail(head(42))).unwrap();
        assert_eq!(ap.kind, AccessPassKind::Prepaid);
        assert_eq!(ap.kind_tag, 42);
        // Nothing was consumed for the variant, so the tail still lines up.
        assert_eq!(ap.user_payer, key(7));
    }

    #[test]
    fn truncated_others_string_fails() {
        let data = head(5).u32(10).bytes(b"abc").finish();
        assert!(AccessPass::decode(&data).is_err());
    }
}
