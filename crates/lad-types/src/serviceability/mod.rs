//! Serviceability records: the tag-prefixed, append-only account layouts.
//!
//! Every record here is read with a [`ZeroDefaultReader`](lad_wire::ZeroDefaultReader).
//! Older accounts stop short of fields added later, and those fields
//! decode as zero. Only a truncated string or list body is an error.
//! [`ResourceExtension`] is the exception: its bitmap sits at a fixed
//! offset after the defaulted header.

pub mod access_pass;
pub mod contributor;
pub mod device;
pub mod exchange;
pub mod global_config;
pub mod global_state;
pub mod interface;
pub mod link;
pub mod location;
pub mod multicast_group;
pub mod program_config;
pub mod resource_extension;
pub mod tenant;
pub mod user;

pub use access_pass::{AccessPass, AccessPassKind};
pub use contributor::Contributor;
pub use device::{Device, MAX_DEVICE_INTERFACES};
pub use exchange::Exchange;
pub use global_config::GlobalConfig;
pub use global_state::GlobalState;
pub use interface::{CURRENT_INTERFACE_VERSION, Interface, InterfaceV1, InterfaceV2};
pub use link::Link;
pub use location::Location;
pub use multicast_group::MulticastGroup;
pub use program_config::{ProgramConfig, ProgramVersion};
pub use resource_extension::{
    Allocator, IdAllocator, IpAllocator, RESOURCE_EXTENSION_BITMAP_OFFSET, ResourceExtension,
};
pub use tenant::Tenant;
pub use user::User;
