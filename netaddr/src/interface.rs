//! Host network interfaces.
//!
//! A [`NetworkInterface`] is a lightweight handle that names one host interface.
//! Its index, type, and addresses are looked up on demand through an
//! [`InterfaceRegistry`], which asks an [`InterfaceProvider`] for the current
//! interface list on every query. Nothing is cached.

use std::fmt;

use crate::address::{Family, NetworkAddress};

mod provider;
mod registry;
mod system;

#[cfg(any(test, feature = "proptest-impl"))]
pub mod mock;


pub use provider::{InterfaceFlags, InterfaceProvider, InterfaceRecord};
pub use registry::InterfaceRegistry;
pub use system::SystemInterfaces;

#[cfg(any(test, feature = "proptest-impl"))]
pub use mock::MockInterfaces;

/// The kind of link a host interface uses.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum InterfaceType {
    /// The loopback interface.
    Loopback,

    /// A wired interface, or any other interface with a link layer address.
    Ethernet,

    /// A wireless LAN interface.
    Wifi,

    /// A cellular data interface.
    ///
    /// Linux interface queries never return this type.
    Cellular,

    /// A virtual private network tunnel.
    ///
    /// Linux interface queries never return this type.
    Vpn,

    /// An interface without a link layer address, or an interface that
    /// couldn't be found.
    #[default]
    Unknown,
}

/// A handle for a host network interface, identified by its name.
///
/// Handles are compared and ordered by name. The default handle has an empty
/// name, and is invalid.
///
/// The methods on this type query the host's current interfaces using
/// [`InterfaceRegistry::system`]. Use an [`InterfaceRegistry`] directly to
/// query a different [`InterfaceProvider`].
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct NetworkInterface {
    name: String,
}

impl NetworkInterface {
    /// Returns a handle for `name`, without checking that the interface exists.
    pub(crate) fn new(name: impl Into<String>) -> NetworkInterface {
        NetworkInterface { name: name.into() }
    }

    /// Returns all the host interfaces that have an IP or link layer address.
    pub fn all() -> Vec<NetworkInterface> {
        InterfaceRegistry::system().all_interfaces()
    }

    /// Returns the host interface called `name`, if it exists.
    pub fn from_name(name: &str) -> Option<NetworkInterface> {
        InterfaceRegistry::system().from_name(name)
    }

    /// Returns the host interface with `index`, if it exists.
    pub fn from_index(index: u32) -> Option<NetworkInterface> {
        InterfaceRegistry::system().from_index(index)
    }

    /// Does this handle have a name?
    ///
    /// Valid handles can refer to interfaces that have since been removed.
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty()
    }

    /// Returns the interface name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the host's index for this interface, or zero if it doesn't exist.
    pub fn index(&self) -> u32 {
        InterfaceRegistry::system().index(self)
    }

    /// Returns the link type of this interface.
    pub fn interface_type(&self) -> InterfaceType {
        InterfaceRegistry::system().interface_type(self)
    }

    /// Returns an IP address of this interface.
    ///
    /// See [`InterfaceRegistry::ip_address`] for details.
    pub fn ip_address(&self, prefer_ipv6: bool) -> Option<NetworkAddress> {
        InterfaceRegistry::system().ip_address(self, prefer_ipv6)
    }

    /// Returns the first link layer address of this interface.
    pub fn mac_address(&self) -> Option<NetworkAddress> {
        InterfaceRegistry::system().mac_address(self)
    }

    /// Returns the addresses of this interface in `family`.
    ///
    /// [`Family::Unspecified`] returns the addresses in all supported families.
    pub fn addresses(&self, family: Family) -> Vec<NetworkAddress> {
        InterfaceRegistry::system().addresses(self, family)
    }
}

impl fmt::Display for NetworkInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
