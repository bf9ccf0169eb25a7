use crate::account_type::AccountType;
use crate::error::TypeError;
use crate::serviceability::{
  AccessPass, Contributor, Device, Exchange, GlobalConfig, GlobalState, Link, Location,
  MulticastGroup, ProgramConfig, ResourceExtension, Tenant, User,
};

/// A decoded serviceability account.
///
/// The union is closed: every known tag has a variant, and unknown tag
/// values are not represented at all. [`Account::decode`] returns
/// `Ok(None)` for them.
///
/// ```text
/// ┌────────────────┬─────┐
/// │ Variant        │ Tag │
/// ├────────────────┼─────┤
/// │ GlobalState    │ 1   │
/// │ GlobalConfig   │ 2   │
/// │ Location       │ 3   │
/// │ Exchange       │ 4   │
/// │ Device         │ 5   │
/// │ Link           │ 6   │
/// │ User           │ 7   │
/// │ MulticastGroup │ 8   │
/// │ ProgramConfig  │ 9   │
/// │ Contributor    │ 10  │
/// │ AccessPass     │ 11  │
/// │ ResourceExt.   │ 12  │
/// │ Tenant         │ 13  │
/// └────────────────┴─────┘
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Account {
  GlobalState(GlobalState),
  GlobalConfig(GlobalConfig),
  Location(Location),
  Exchange(Exchange),
  Device(Device),
  Link(Link),
  User(User),
  MulticastGroup(MulticastGroup),
  ProgramConfig(ProgramConfig),
  Contributor(Contributor),
  AccessPass(AccessPass),
  ResourceExtension(ResourceExtension),
  Tenant(Tenant),
}

impl Account {
  /// Decode one account, dispatching on its leading type tag.
  ///
  /// Returns `Ok(None)` for an empty buffer and for unknown tags. The whole buffer, tag byte included, is handed to the
  /// record decoder, which reads the tag back as `account_type`.
  ///
  /// # Errors
  ///
  /// Whatever the record's decoder reports.
  pub fn decode(buf: &[u8]) -> Result<Option<Self>, TypeError> {
    let Some(&tag) = buf.first() else {
      return Ok(None);
    };
    let account = match AccountType::from_wire_id(tag) {
      AccountType::GlobalState => Self::GlobalState(GlobalState::decode(buf)?),
      AccountType::GlobalConfig => Self::GlobalConfig(GlobalConfig::decode(buf)?),
      AccountType::Location => Self::Location(Location::decode(buf)?),
      AccountType::Exchange => Self::Exchange(Exchange::decode(buf)?),
      AccountType::Device => Self::Device(Device::decode(buf)?),
      AccountType::Link => Self::Link(Link::decode(buf)?),
      AccountType::User => Self::User(User::decode(buf)?),
      AccountType::MulticastGroup => Self::MulticastGroup(MulticastGroup::decode(buf)?),
      AccountType::ProgramConfig => Self::ProgramConfig(ProgramConfig::decode(buf)?),
      AccountType::Contributor => Self::Contributor(Contributor::decode(buf)?),
      AccountType::AccessPass => Self::AccessPass(AccessPass::decode(buf)?),
      AccountType::ResourceExtension => {
        Self::ResourceExtension(ResourceExtension::decode(buf)?)
      }
      AccountType::Tenant => Self::Tenant(Tenant::decode(buf)?),
      AccountType::Unknown(_) => return Ok(None),
    };
    Ok(Some(account))
  }

  pub fn account_type(&self) -> AccountType {
    match self {
      Self::GlobalState(_) => AccountType::GlobalState,
      Self::GlobalConfig(_) => AccountType::GlobalConfig,
      Self::Location(_) => AccountType::Location,
      Self::Exchange(_) => AccountType::Exchange,
      Self::Device(_) => AccountType::Device,
      Self::Link(_) => AccountType::Link,
      Self::User(_) => AccountType::User,
      Self::MulticastGroup(_) => AccountType::MulticastGroup,
      Self::ProgramConfig(_) => AccountType::ProgramConfig,
      Self::Contributor(_) => AccountType::Contributor,
      Self::AccessPass(_) => AccountType::AccessPass,
      Self::ResourceExtension(_) => AccountType::ResourceExtension,
      Self::Tenant(_) => AccountType::Tenant,
    }
  }

  pub fn type_tag(&self) -> u8 {
    self.account_type().wire_id()
  }
}
