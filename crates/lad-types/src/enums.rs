use std::fmt;

// ── Macro for wire-byte enum boilerplate ──────────────────────────────
//
// Every status/kind enum in the account schemas is a u8 on the wire with
// a fixed set of named values. Newer program versions add values, so an
// out-of-range byte is not an error: it becomes `Unrecognized(raw)`, and
// record decoders resolve it with `or_fallback()` to the first (lowest)
// variant listed. Labels live on the known variants only; an unrecognized
// value never gets one.

macro_rules! wire_enum {
  (@first $first:ident $(, $rest:ident)*) => {
    Self::$first
  };
  (
    $(#[$meta:meta])*
    pub enum $name:ident {
      $( $(#[$vmeta:meta])* $variant:ident = $wire:literal => $label:literal ),+ $(,)?
    }
  ) => {
    $(#[$meta])*
    pub enum $name {
      $( $(#[$vmeta])* $variant, )+
      /// A raw byte outside the known set.
      Unrecognized(u8),
    }

    impl $name {
      /// The variant unrecognized values resolve to.
      pub const FALLBACK: Self = wire_enum!(@first $($variant),+);

      /// Encode this variant as a single wire byte.
      pub fn to_wire_byte(self) -> u8 {
        match self {
          $( Self::$variant => $wire, )+
          Self::Unrecognized(raw) => raw,
        }
      }

      /// Map a wire byte to a variant, keeping unknown bytes as
      /// `Unrecognized`.
      pub fn from_wire_byte(value: u8) -> Self {
        match value {
          $( $wire => Self::$variant, )+
          other => Self::Unrecognized(other),
        }
      }

      /// Resolve `Unrecognized` to [`Self::FALLBACK`]; known variants pass
      /// through.
      #[must_use]
      pub fn or_fallback(self) -> Self {
        match self {
          Self::Unrecognized(_) => Self::FALLBACK,
          known => known,
        }
      }

      /// What record decoders use: map, then fall back.
      pub fn decode(value: u8) -> Self {
        Self::from_wire_byte(value).or_fallback()
      }

      /// Label of a known variant. `None` for `Unrecognized`.
      pub fn as_str(self) -> Option<&'static str> {
        match self {
          $( Self::$variant => Some($label), )+
          Self::Unrecognized(_) => None,
        }
      }

      pub fn is_recognized(self) -> bool {
        !matches!(self, Self::Unrecognized(_))
      }
    }

    impl Default for $name {
      fn default() -> Self {
        Self::FALLBACK
      }
    }

    impl fmt::Display for $name {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str().unwrap_or("unknown"))
      }
    }
  };
}

// ── Location / Exchange ───────────────────────────────────────────────

wire_enum! {
  #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
  pub enum LocationStatus {
    Pending = 0 => "pending",
    Activated = 1 => "activated",
    Suspended = 2 => "suspended",
  }
}

wire_enum! {
  #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
  pub enum ExchangeStatus {
    Pending = 0 => "pending",
    Activated = 1 => "activated",
    Suspended = 2 => "suspended",
  }
}

// ── Device ────────────────────────────────────────────────────────────

wire_enum! {
  #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
  pub enum DeviceType {
    Hybrid = 0 => "hybrid",
    Transit = 1 => "transit",
    Edge = 2 => "edge",
  }
}

wire_enum! {
  /// Lifecycle of a device account.
  ///
  /// ```text
  /// ┌──────┬─────────────────────┐
  /// │ Wire │ Status              │
  /// ├──────┼─────────────────────┤
  /// │ 0    │ pending             │
  /// │ 1    │ activated           │
  /// │ 2    │ deleting            │
  /// │ 3    │ rejected            │
  /// │ 4    │ drained             │
  /// │ 5    │ device-provisioning │
  /// │ 6    │ link-provisioning   │
  /// └──────┴─────────────────────┘
  /// ```
  #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
  pub enum DeviceStatus {
    Pending = 0 => "pending",
    Activated = 1 => "activated",
    Deleting = 2 => "deleting",
    Rejected = 3 => "rejected",
    Drained = 4 => "drained",
    DeviceProvisioning = 5 => "device-provisioning",
    LinkProvisioning = 6 => "link-provisioning",
  }
}

wire_enum! {
  #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
  pub enum DeviceHealth {
    Unknown = 0 => "unknown",
    Pending = 1 => "pending",
    ReadyForLinks = 2 => "ready_for_links",
    ReadyForUsers = 3 => "ready_for_users",
    Impaired = 4 => "impaired",
  }
}

wire_enum! {
  /// Operator intent for a device. Values are sparse: 2 through 5 are
  /// not used.
  #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
  pub enum DeviceDesiredStatus {
    Pending = 0 => "pending",
    Activated = 1 => "activated",
    Drained = 6 => "drained",
  }
}

// ── Interface ─────────────────────────────────────────────────────────

wire_enum! {
  #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
  pub enum InterfaceStatus {
    Invalid = 0 => "invalid",
    Unmanaged = 1 => "unmanaged",
    Pending = 2 => "pending",
    Activated = 3 => "activated",
    Deleting = 4 => "deleting",
    Rejecting = 5 => "rejecting",
    Unlinked = 6 => "unlinked",
  }
}

wire_enum! {
  #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
  pub enum InterfaceType {
    Invalid = 0 => "invalid",
    Loopback = 1 => "loopback",
    Physical = 2 => "physical",
  }
}

wire_enum! {
  #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
  pub enum LoopbackType {
    None = 0 => "none",
    Vpnv4 = 1 => "vpnv4",
    Ipv4 = 2 => "ipv4",
    PimRpAddr = 3 => "pim_rp_addr",
    Reserved = 4 => "reserved",
  }
}

wire_enum! {
  /// How user traffic reaches the fabric ("choose your own adventure").
  /// Shared by interfaces and users.
  #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
  pub enum CyoaType {
    None = 0 => "none",
    GreOverDia = 1 => "gre_over_dia",
    GreOverFabric = 2 => "gre_over_fabric",
    GreOverPrivatePeering = 3 => "gre_over_private_peering",
    GreOverPublicPeering = 4 => "gre_over_public_peering",
    GreOverCable = 5 => "gre_over_cable",
  }
}

wire_enum! {
  #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
  pub enum InterfaceDia {
    None = 0 => "none",
    Dia = 1 => "dia",
  }
}

wire_enum! {
  #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
  pub enum RoutingMode {
    Static = 0 => "static",
    Bgp = 1 => "bgp",
  }
}

// ── Link ──────────────────────────────────────────────────────────────

wire_enum! {
  /// Only two values exist and neither is zero, so a zeroed field
  /// resolves to `Wan`.
  #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
  pub enum LinkType {
    Wan = 1 => "WAN",
    Dzx = 127 => "DZX",
  }
}

wire_enum! {
  #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
  pub enum LinkStatus {
    Pending = 0 => "pending",
    Activated = 1 => "activated",
    Deleting = 3 => "deleting",
    Rejected = 4 => "rejected",
    Requested = 5 => "requested",
    HardDrained = 6 => "hard-drained",
    SoftDrained = 7 => "soft-drained",
    Provisioning = 8 => "provisioning",
  }
}

wire_enum! {
  #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
  pub enum LinkHealth {
    Unknown = 0 => "unknown",
    Pending = 1 => "pending",
    ReadyForService = 2 => "ready_for_service",
    Impaired = 3 => "impaired",
  }
}

wire_enum! {
  #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
  pub enum LinkDesiredStatus {
    Pending = 0 => "pending",
    Activated = 1 => "activated",
    HardDrained = 6 => "hard-drained",
    SoftDrained = 7 => "soft-drained",
  }
}

// ── Contributor / User / Multicast ────────────────────────────────────

wire_enum! {
  #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
  pub enum ContributorStatus {
    None = 0 => "none",
    Activated = 1 => "activated",
    Suspended = 2 => "suspended",
    Deleting = 3 => "deleting",
  }
}

wire_enum! {
  #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
  pub enum UserType {
    Ibrl = 0 => "ibrl",
    IbrlWithAllocatedIp = 1 => "ibrl_with_allocated_ip",
    EdgeFiltering = 2 => "edge_filtering",
    Multicast = 3 => "multicast",
  }
}

wire_enum! {
  #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
  pub enum UserStatus {
    Pending = 0 => "pending",
    Activated = 1 => "activated",
    Deleting = 3 => "deleting",
    Rejected = 4 => "rejected",
    PendingBan = 5 => "pending_ban",
    Banned = 6 => "banned",
    Updating = 7 => "updating",
    OutOfCredits = 8 => "out_of_credits",
  }
}

wire_enum! {
  #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
  pub enum MulticastGroupStatus {
    Pending = 0 => "pending",
    Activated = 1 => "activated",
    Suspended = 2 => "suspended",
    Deleting = 3 => "deleting",
    Rejected = 4 => "rejected",
  }
}

// ── AccessPass / Tenant ───────────────────────────────────────────────

wire_enum! {
  #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
  pub enum AccessPassStatus {
    Requested = 0 => "requested",
    Connected = 1 => "connected",
    Disconnected = 2 => "disconnected",
    Expired = 3 => "expired",
  }
}

wire_enum! {
  #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
  pub enum TenantPaymentStatus {
    Delinquent = 0 => "delinquent",
    Paid = 1 => "paid",
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn known_values_map_both_ways() {
    let cases = [
      (LinkStatus::Pending, 0),
      (LinkStatus::Activated, 1),
      (LinkStatus::Deleting, 3),
      (LinkStatus::Rejected, 4),
      (LinkStatus::Requested, 5),
      (LinkStatus::HardDrained, 6),
      (LinkStatus::SoftDrained, 7),
      (LinkStatus::Provisioning, 8),
    ];
    for (variant, wire) in cases {
      assert_eq!(variant.to_wire_byte(), wire);
      assert_eq!(LinkStatus::from_wire_byte(wire), variant);
    }
  }

  #[test]
  fn gap_value_is_unrecognized() {
    // 2 is skipped in the user status table.
    let raw = UserStatus::from_wire_byte(2);
    assert_eq!(raw, UserStatus::Unrecognized(2));
    assert!(!raw.is_recognized());
    assert_eq!(raw.to_wire_byte(), 2);
    assert_eq!(raw.or_fallback(), UserStatus::Pending);
  }

  #[test]
  fn fallback_is_lowest_variant() {
    assert_eq!(DeviceStatus::decode(200), DeviceStatus::Pending);
    assert_eq!(DeviceDesiredStatus::decode(3), DeviceDesiredStatus::Pending);
    assert_eq!(LinkType::decode(0), LinkType::Wan);
    assert_eq!(LinkType::decode(127), LinkType::Dzx);
    assert_eq!(LinkType::default(), LinkType::Wan);
  }

  #[test]
  fn unrecognized_never_gets_a_label() {
    let raw = InterfaceStatus::Unrecognized(99);
    assert_eq!(raw.as_str(), None);
    assert_eq!(raw.to_string(), "unknown");
    assert_eq!(InterfaceStatus::Unlinked.to_string(), "unlinked");
  }

  #[test]
  fn labels_follow_schema_spelling() {
    assert_eq!(DeviceStatus::DeviceProvisioning.to_string(), "device-provisioning");
    assert_eq!(DeviceHealth::ReadyForLinks.to_string(), "ready_for_links");
    assert_eq!(CyoaType::GreOverPrivatePeering.to_string(), "gre_over_private_peering");
    assert_eq!(LinkType::Dzx.to_string(), "DZX");
    assert_eq!(TenantPaymentStatus::Paid.to_string(), "paid");
  }
}
