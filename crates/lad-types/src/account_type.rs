/// Leading type tag of every serviceability account.
///
/// Tag values not listed here become `Unknown(u8)`. Batch dispatch skips
/// those quietly: new account kinds appear as the program evolves, and
/// an older reader is expected to ignore them.
///
/// ```text
/// ┌─────┬───────────────────┬────────────┐
/// │ Tag │ Variant           │ Decoded    │
/// ├─────┼───────────────────┼────────────┤
/// │ 1   │ GlobalState       │ yes        │
/// │ 2   │ GlobalConfig      │ yes        │
/// │ 3   │ Location          │ yes        │
/// │ 4   │ Exchange          │ yes        │
/// │ 5   │ Device            │ yes        │
/// │ 6   │ Link              │ yes        │
/// │ 7   │ User              │ yes        │
/// │ 8   │ MulticastGroup    │ yes        │
/// │ 9   │ ProgramConfig     │ yes        │
/// │ 10  │ Contributor       │ yes        │
/// │ 11  │ AccessPass        │ yes        │
/// │ 12  │ ResourceExtension │ yes        │
/// │ 13  │ Tenant            │ yes        │
/// └─────┴───────────────────┴────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccountType {
    GlobalState,
    GlobalConfig,
    Location,
    Exchange,
    Device,
    Link,
    User,
    MulticastGroup,
    ProgramConfig,
    Contributor,
    AccessPass,
    ResourceExtension,
    Tenant,
    Unknown(u8),
}

impl AccountType {
    pub fn wire_id(self) -> u8 {
        match self {
            Self::GlobalState => 1,
            Self::GlobalConfig => 2,
            Self::Location => 3,
            Self::Exchange => 4,
            Self::Device => 5,
            Self::Link => 6,
            Self::User => 7,
            Self::MulticastGroup => 8,
            Self::ProgramConfig => 9,
            Self::Contributor => 10,
            Self::AccessPass => 11,
            Self::ResourceExtension => 12,
            Self::Tenant => 13,
            Self::Unknown(id) => id,
        }
    }

    pub fn from_wire_id(id: u8) -> Self {
        match id {
            1 => Self::GlobalState,
            2 => Self::GlobalConfig,
            3 => Self::Location,
            4 => Self::Exchange,
            5 => Self::Device,
            6 => Self::Link,
            7 => Self::User,
            8 => Self::MulticastGroup,
            9 => Self::ProgramConfig,
            10 => Self::Contributor,
            11 => Self::AccessPass,
            12 => Self::ResourceExtension,
            13 => Self::Tenant,
            other => Self::Unknown(other),
        }
    }

    /// Name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::GlobalState => "GlobalState",
            Self::GlobalConfig => "GlobalConfig",
            Self::Location => "Location",
            Self::Exchange => "Exchange",
            Self::Device => "Device",
            Self::Link => "Link",
            Self::User => "User",
            Self::MulticastGroup => "MulticastGroup",
            Self::ProgramConfig => "ProgramConfig",
            Self::Contributor => "Contributor",
            Self::AccessPass => "AccessPass",
            Self::ResourceExtension => "ResourceExtension",
            Self::Tenant => "Tenant",
            Self::Unknown(_) => "Unknown",
        }
    }
}
