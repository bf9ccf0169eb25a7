//! The fixture catalogue.
//!
//! Serviceability fixtures are written at the newest layout the
//! decoders know, so every field is present. Resource pools put their
//! bitmap at the fixed offset after the allocator. Revenue-distribution
//! fixtures are discriminator-prefixed and padded to their declared
//! size; ledger records carry a version byte and authority header.

use std::net::Ipv4Addr;

use lad_types::revdist::{
    ContributorRewards, Distribution, Journal, ProgramConfig as RevDistProgramConfig,
    SolanaValidatorDeposit,
};
use lad_types::serviceability::RESOURCE_EXTENSION_BITMAP_OFFSET;
use lad_wire::NetworkV4;

use crate::{Fixture, FixtureWriter, pubkey_from_byte};

fn net(a: u8, b: u8, c: u8, d: u8, prefix_len: u8) -> NetworkV4 {
    NetworkV4 {
        addr: Ipv4Addr::new(a, b, c, d),
        prefix_len,
    }
}

// ── Serviceability ────────────────────────────────────────────────────

pub fn global_state() -> Fixture {
    FixtureWriter::tagged("GlobalState", 1)
        .u8("BumpSeed", 255)
        .u128("AccountIndex", 42)
        .pubkeys("FoundationAllowlist", &[pubkey_from_byte(1), pubkey_from_byte(2)])
        .pubkeys("DeviceAllowlist", &[pubkey_from_byte(3)])
        .pubkeys("UserAllowlist", &[])
        .pubkey("ActivatorAuthorityPk", pubkey_from_byte(4))
        .pubkey("SentinelAuthorityPk", pubkey_from_byte(5))
        .u64("ContributorAirdropLamports", 1_000_000_000)
        .u64("UserAirdropLamports", 40_000)
        .pubkey("HealthOraclePk", pubkey_from_byte(6))
        .pubkeys("QaAllowlist", &[pubkey_from_byte(7)])
        .u128("FeatureFlags", 1 << 70 | 3)
        .pubkey("ReservationAuthorityPk", pubkey_from_byte(8))
        .finish("global_state")
}

pub fn global_config() -> Fixture {
    FixtureWriter::tagged("GlobalConfig", 2)
        .pubkey("Owner", pubkey_from_byte(1))
        .u8("BumpSeed", 254)
        .u32("LocalAsn", 65000)
        .u32("RemoteAsn", 65342)
        .network("DeviceTunnelBlock", net(172, 16, 0, 0, 16))
        .network("UserTunnelBlock", net(169, 254, 0, 0, 16))
        .network("MulticastGroupBlock", net(233, 84, 178, 0, 24))
        .u16("NextBgpCommunity", 10_050)
        .network("MulticastPublisherBlock", net(148, 51, 120, 0, 21))
        .finish("global_config")
}

pub fn location() -> Fixture {
    FixtureWriter::tagged("Location", 3)
        .pubkey("Owner", pubkey_from_byte(1))
        .u128("Index", 7)
        .u8("BumpSeed", 253)
        .f64("Lat", 52.3676)
        .f64("Lng", 4.9041)
        .u32("LocId", 1001)
        .u8("Status", 1)
        .string("Code", "ams")
        .string("Name", "Amsterdam")
        .string("Country", "NL")
        .u32("ReferenceCount", 3)
        .finish("location")
}

pub fn exchange() -> Fixture {
    FixtureWriter::tagged("Exchange", 4)
        .pubkey("Owner", pubkey_from_byte(1))
        .u128("Index", 8)
        .u8("BumpSeed", 252)
        .f64("Lat", 40.7128)
        .f64("Lng", -74.006)
        .u16("BgpCommunity", 10_001)
        .u16("Unused", 0)
        .u8("Status", 1)
        .string("Code", "xnyc")
        .string("Name", "New York")
        .u32("ReferenceCount", 5)
        .pubkey("Device1Pk", pubkey_from_byte(20))
        .pubkey("Device2Pk", pubkey_from_byte(21))
        .finish("exchange")
}

/// Two interfaces: one written at version 1 (tag 0), one at version 2.
pub fn device() -> Fixture {
    let w = FixtureWriter::tagged("Device", 5)
        .pubkey("Owner", pubkey_from_byte(1))
        .u128("Index", 9)
        .u8("BumpSeed", 251)
        .pubkey("LocationPk", pubkey_from_byte(30))
        .pubkey("ExchangePk", pubkey_from_byte(31))
        .u8("DeviceType", 1)
        .ipv4("PublicIp", Ipv4Addr::new(203, 0, 113, 10))
        .u8("Status", 1)
        .string("Code", "ams-dz01")
        .networks("DzPrefixes", &[net(100, 0, 0, 0, 29)])
        .pubkey("MetricsPublisherPk", pubkey_from_byte(32))
        .pubkey("ContributorPk", pubkey_from_byte(33))
        .string("MgmtVrf", "mgmt")
        .count("Interfaces", 2);

    let w = w
        .u8("Interface0Version", 0)
        .u8("Interface0Status", 3)
        .string("Interface0Name", "Loopback255")
        .u8("Interface0InterfaceType", 1)
        .u8("Interface0LoopbackType", 1)
        .u16("Interface0VlanId", 0)
        .network("Interface0IpNet", net(172, 16, 0, 1, 32))
        .u16("Interface0NodeSegmentIdx", 101)
        .bool("Interface0UserTunnelEndpoint", false);

    let w = w
        .u8("Interface1Version", 1)
        .u8("Interface1Status", 3)
        .string("Interface1Name", "Ethernet1/1")
        .u8("Interface1InterfaceType", 2)
        .u8("Interface1InterfaceCYOA", 1)
        .u8("Interface1InterfaceDIA", 1)
        .u8("Interface1LoopbackType", 0)
        .u64("Interface1Bandwidth", 10_000_000_000)
        .u64("Interface1Cir", 1_000_000_000)
        .u16("Interface1Mtu", 9000)
        .u8("Interface1RoutingMode", 1)
        .u16("Interface1VlanId", 42)
        .network("Interface1IpNet", net(10, 1, 2, 3, 31))
        .u16("Interface1NodeSegmentIdx", 0)
        .bool("Interface1UserTunnelEndpoint", true);

    w.u32("ReferenceCount", 12)
        .u16("UsersCount", 30)
        .u16("MaxUsers", 128)
        .u8("DeviceHealth", 3)
        .u8("DesiredStatus", 1)
        .u16("UnicastUsersCount", 25)
        .u16("MulticastUsersCount", 5)
        .u16("MaxUnicastUsers", 96)
        .u16("MaxMulticastUsers", 32)
        .u16("ReservedSeats", 4)
        .finish("device")
}

pub fn link() -> Fixture {
    FixtureWriter::tagged("Link", 6)
        .pubkey("Owner", pubkey_from_byte(1))
        .u128("Index", 10)
        .u8("BumpSeed", 250)
        .pubkey("SideAPk", pubkey_from_byte(40))
        .pubkey("SideZPk", pubkey_from_byte(41))
        .u8("LinkType", 1)
        .u64("Bandwidth", 10_000_000_000)
        .u32("Mtu", 9000)
        .u64("DelayNs", 4_500_000)
        .u64("JitterNs", 120_000)
        .u16("TunnelId", 501)
        .network("TunnelNet", net(172, 16, 5, 0, 31))
        .u8("Status", 1)
        .string("Code", "ams-fra-1")
        .pubkey("ContributorPk", pubkey_from_byte(33))
        .string("SideAIfaceName", "Ethernet1/1")
        .string("SideZIfaceName", "Ethernet2/1")
        .u64("DelayOverrideNs", 0)
        .u8("LinkHealth", 2)
        .u8("DesiredStatus", 1)
        .finish("link")
}

pub fn user() -> Fixture {
    FixtureWriter::tagged("User", 7)
        .pubkey("Owner", pubkey_from_byte(1))
        .u128("Index", 11)
        .u8("BumpSeed", 249)
        .u8("UserType", 3)
        .pubkey("TenantPk", pubkey_from_byte(50))
        .pubkey("DevicePk", pubkey_from_byte(51))
        .u8("CyoaType", 1)
        .ipv4("ClientIp", Ipv4Addr::new(198, 51, 100, 7))
        .ipv4("DzIp", Ipv4Addr::new(100, 0, 0, 5))
        .u16("TunnelId", 502)
        .network("TunnelNet", net(169, 254, 0, 4, 31))
        .u8("Status", 1)
        .pubkeys("Publishers", &[pubkey_from_byte(60)])
        .pubkeys("Subscribers", &[pubkey_from_byte(61), pubkey_from_byte(62)])
        .pubkey("ValidatorPubkey", pubkey_from_byte(63))
        .finish("user")
}

pub fn multicast_group() -> Fixture {
    FixtureWriter::tagged("MulticastGroup", 8)
        .pubkey("Owner", pubkey_from_byte(1))
        .u128("Index", 12)
        .u8("BumpSeed", 248)
        .pubkey("TenantPk", pubkey_from_byte(50))
        .ipv4("MulticastIp", Ipv4Addr::new(233, 84, 178, 1))
        .u64("MaxBandwidth", 1_000_000_000)
        .u8("Status", 1)
        .string("Code", "jito-shreds")
        .u32("PublisherCount", 1)
        .u32("SubscriberCount", 17)
        .finish("multicast_group")
}

pub fn program_config() -> Fixture {
    FixtureWriter::tagged("ProgramConfig", 9)
        .u8("BumpSeed", 247)
        .u32("VersionMajor", 0)
        .u32("VersionMinor", 7)
        .u32("VersionPatch", 3)
        .u32("MinCompatibleVersionMajor", 0)
        .u32("MinCompatibleVersionMinor", 6)
        .u32("MinCompatibleVersionPatch", 0)
        .finish("program_config")
}

pub fn contributor() -> Fixture {
    FixtureWriter::tagged("Contributor", 10)
        .pubkey("Owner", pubkey_from_byte(1))
        .u128("Index", 13)
        .u8("BumpSeed", 246)
        .u8("Status", 1)
        .string("Code", "co01")
        .u32("ReferenceCount", 4)
        .pubkey("OpsManagerPk", pubkey_from_byte(70))
        .finish("contributor")
}

fn access_pass_head(tag: u8) -> FixtureWriter {
    FixtureWriter::tagged("AccessPass", 11)
        .pubkey("Owner", pubkey_from_byte(1))
        .u8("BumpSeed", 245)
        .u8("AccessPassType", tag)
}

fn access_pass_tail(w: FixtureWriter, name: &'static str) -> Fixture {
    w.ipv4("ClientIp", Ipv4Addr::new(198, 51, 100, 8))
        .pubkey("UserPayer", pubkey_from_byte(80))
        .u64("LastAccessEpoch", u64::MAX)
        .u16("ConnectionCount", 2)
        .u8("Status", 1)
        .pubkeys("MgroupPubAllowlist", &[])
        .pubkeys("MgroupSubAllowlist", &[pubkey_from_byte(81)])
        .u8("Flags", 1)
        .finish(name)
}

pub fn access_pass_prepaid() -> Fixture {
    access_pass_tail(access_pass_head(0), "access_pass_prepaid")
}

pub fn access_pass_validator() -> Fixture {
    let w = access_pass_head(1).pubkey("AccessPassTypeValidatorPubkey", pubkey_from_byte(90));
    access_pass_tail(w, "access_pass_validator")
}

pub fn access_pass_others() -> Fixture {
    let w = access_pass_head(5)
        .string("AccessPassTypeOthersName", "edge")
        .string("AccessPassTypeOthersKey", "partner-7");
    access_pass_tail(w, "access_pass_others")
}

pub fn tenant() -> Fixture {
    FixtureWriter::tagged("Tenant", 13)
        .pubkey("Owner", pubkey_from_byte(1))
        .u8("BumpSeed", 244)
        .string("Code", "acme")
        .u16("VrfId", 7)
        .u32("ReferenceCount", 2)
        .pubkeys("Administrators", &[pubkey_from_byte(100), pubkey_from_byte(101)])
        .u8("PaymentStatus", 1)
        .pubkey("TokenAccount", pubkey_from_byte(102))
        .bool("MetroRouting", true)
        .bool("RouteLiveness", false)
        .u8("BillingDiscriminant", 1)
        .u64("BillingRate", 5_000)
        .u64("BillingLastDeductionEpoch", 812)
        .finish("tenant")
}

/// A 64-id range with ids 0..5 handed out.
pub fn resource_extension_id() -> Fixture {
    let mut bitmap = [0u8; 8];
    bitmap[0] = 0x1F;
    FixtureWriter::tagged("ResourceExtensionId", 12)
        .pubkey("Owner", pubkey_from_byte(0xB0))
        .u8("BumpSeed", 242)
        .pubkey("AssociatedWith", pubkey_from_byte(0xB1))
        .u8("AllocatorType", 1)
        .u16("RangeStart", 0)
        .u16("RangeEnd", 64)
        .u64("FirstFreeIndex", 5)
        .pad_to(RESOURCE_EXTENSION_BITMAP_OFFSET)
        .raw(&bitmap)
        .derived("TotalCapacity", 64, "u64")
        .derived("AllocatedCount", 5, "u64")
        .derived("AvailableCount", 59, "u64")
        .finish("resource_extension_id")
}

/// A /24 block with its first four addresses handed out.
pub fn resource_extension_ip() -> Fixture {
    let mut bitmap = [0u8; 32];
    bitmap[0] = 0x0F;
    FixtureWriter::tagged("ResourceExtensionIp", 12)
        .pubkey("Owner", pubkey_from_byte(0xC0))
        .u8("BumpSeed", 241)
        .pubkey("AssociatedWith", pubkey_from_byte(0xC1))
        .u8("AllocatorType", 0)
        .network("BaseNet", net(10, 100, 0, 0, 24))
        .u64("FirstFreeIndex", 4)
        .pad_to(RESOURCE_EXTENSION_BITMAP_OFFSET)
        .raw(&bitmap)
        .derived("TotalCapacity", 256, "u64")
        .derived("AllocatedCount", 4, "u64")
        .derived("AvailableCount", 252, "u64")
        .finish("resource_extension_ip")
}

pub fn serviceability() -> Vec<Fixture> {
    vec![
        global_state(),
        global_config(),
        location(),
        exchange(),
        device(),
        link(),
        user(),
        multicast_group(),
        program_config(),
        contributor(),
        access_pass_prepaid(),
        access_pass_validator(),
        access_pass_others(),
        tenant(),
        resource_extension_id(),
        resource_extension_ip(),
    ]
}

// ── Revenue distribution ──────────────────────────────────────────────

pub fn revdist_program_config() -> Fixture {
    FixtureWriter::fixed_account::<RevDistProgramConfig>("ProgramConfig")
        .u64("Flags", 0b10)
        .u64("NextCompletedDZEpoch", 31)
        .u8("BumpSeed", 255)
        .u8("Reserve2ZBumpSeed", 254)
        .u8("SwapAuthorityBumpSeed", 253)
        .u8("SwapDestination2ZBumpSeed", 252)
        .u8("WithdrawSOLAuthorityBumpSeed", 251)
        .zeros(3)
        .pubkey("AdminKey", pubkey_from_byte(1))
        .pubkey("DebtAccountantKey", pubkey_from_byte(2))
        .pubkey("RewardsAccountantKey", pubkey_from_byte(3))
        .pubkey("ContributorManagerKey", pubkey_from_byte(4))
        .pubkey("PlaceholderKey", pubkey_from_byte(5))
        .pubkey("SOL2ZSwapProgramID", pubkey_from_byte(6))
        .u16("CalculationGracePeriodMinutes", 60)
        .u16("InitializationGracePeriodMinutes", 30)
        .u8("MinimumEpochDurationToFinalizeRewards", 2)
        .zeros(3)
        .u32("BurnRateLimit", 500_000_000)
        .zeros(20)
        .u16("BaseBlockRewardsPct", 500)
        .zeros(38 + 256)
        .u32("PlaceholderLamports", 5000)
        .u32("DistributeRewardsLamports", 10_000)
        .zeros(32)
        .u32("LastInitializedDistributionTimestamp", 1_760_000_000)
        .zeros(4)
        .u64("DebtWriteOffFeatureActivationEpoch", 40)
        .finish_fixed::<RevDistProgramConfig>("revdist_program_config")
}

pub fn revdist_distribution() -> Fixture {
    FixtureWriter::fixed_account::<Distribution>("Distribution")
        .u64("DZEpoch", 30)
        .u64("Flags", 1)
        .u32("CommunityBurnRate", 250_000_000)
        .u8("BumpSeed", 255)
        .u8("Token2ZPDABumpSeed", 254)
        .zeros(2)
        .u16("BaseBlockRewardsPct", 500)
        .u16("PriorityBlockRewardsPct", 0)
        .u16("InflationRewardsPct", 0)
        .u16("JitoTipsPct", 0)
        .u32("FixedSOLAmount", 0)
        .zeros(28)
        .bytes32("SolanaValidatorDebtMerkleRoot", [0xAB; 32])
        .u32("TotalSolanaValidators", 900)
        .u32("SolanaValidatorPaymentsCount", 850)
        .u64("TotalSolanaValidatorDebt", 12_000_000_000)
        .u64("CollectedSolanaValidatorPayments", 11_000_000_000)
        .bytes32("RewardsMerkleRoot", [0xCD; 32])
        .u32("TotalContributors", 14)
        .u32("DistributedRewardsCount", 14)
        .u64("CollectedPrepaid2ZPayments", 7)
        .u64("Collected2ZConvertedFromSOL", 8)
        .u64("UncollectibleSOLDebt", 250_000_000)
        .finish_fixed::<Distribution>("revdist_distribution")
}

pub fn revdist_journal() -> Fixture {
    FixtureWriter::fixed_account::<Journal>("Journal")
        .u8("BumpSeed", 255)
        .u8("Token2ZPDABumpSeed", 254)
        .zeros(6)
        .u64("TotalSOLBalance", 3_000_000_000)
        .u64("Total2ZBalance", 9_000)
        .u64("Swap2ZDestinationBalance", 10)
        .u64("SwappedSOLAmount", 20)
        .u64("NextDZEpochToSweepTokens", 31)
        .u128("LifetimeSwapped2ZAmount", u128::from(u64::MAX) + 5)
        .finish_fixed::<Journal>("revdist_journal")
}

pub fn revdist_deposit() -> Fixture {
    FixtureWriter::fixed_account::<SolanaValidatorDeposit>("SolanaValidatorDeposit")
        .pubkey("NodeID", pubkey_from_byte(110))
        .u64("WrittenOffSOLDebt", 1_500)
        .finish_fixed::<SolanaValidatorDeposit>("revdist_deposit")
}

pub fn revdist_contributor_rewards() -> Fixture {
    FixtureWriter::fixed_account::<ContributorRewards>("ContributorRewards")
        .pubkey("RewardsManagerKey", pubkey_from_byte(120))
        .pubkey("ServiceKey", pubkey_from_byte(121))
        .u64("Flags", 0)
        .pubkey("RecipientShares0RecipientKey", pubkey_from_byte(122))
        .u16("RecipientShares0Share", 7_000)
        .pubkey("RecipientShares1RecipientKey", pubkey_from_byte(123))
        .u16("RecipientShares1Share", 3_000)
        .finish_fixed::<ContributorRewards>("revdist_contributor_rewards")
}

pub fn validator_debts_record() -> Fixture {
    FixtureWriter::ledger_record("ComputedSolanaValidatorDebts", pubkey_from_byte(2))
        .bytes32("Blockhash", [0x11; 32])
        .u64("FirstSolanaEpoch", 800)
        .u64("LastSolanaEpoch", 801)
        .count("Debts", 2)
        .pubkey("Debts0NodeID", pubkey_from_byte(130))
        .u64("Debts0Amount", 5_000)
        .pubkey("Debts1NodeID", pubkey_from_byte(131))
        .u64("Debts1Amount", 7_500)
        .finish("validator_debts_record")
}

pub fn reward_shares_record() -> Fixture {
    FixtureWriter::ledger_record("ShapleyOutputStorage", pubkey_from_byte(3))
        .u64("Epoch", 30)
        .count("Rewards", 2)
        .pubkey("Rewards0ContributorKey", pubkey_from_byte(140))
        .u32("Rewards0UnitShare", 600_000)
        .u32("Rewards0RemainingBytes", 0x8000_0000 | 1_000)
        .pubkey("Rewards1ContributorKey", pubkey_from_byte(141))
        .u32("Rewards1UnitShare", 400_000)
        .u32("Rewards1RemainingBytes", 2_000)
        .u32("TotalUnitShares", 1_000_000)
        .finish("reward_shares_record")
}

pub fn revdist() -> Vec<Fixture> {
    vec![
        revdist_program_config(),
        revdist_distribution(),
        revdist_journal(),
        revdist_deposit(),
        revdist_contributor_rewards(),
        validator_debts_record(),
        reward_shares_record(),
    ]
}

pub fn all() -> Vec<Fixture> {
    let mut out = serviceability();
    out.extend(revdist());
    out
}
