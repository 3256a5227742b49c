//! The [`InterfaceProvider`] trait, which lists the host's current interfaces.

use std::io;

use bitflags::bitflags;

use crate::address::{Family, NetworkAddress, RawSockAddr};

bitflags! {
    /// The interface flags that netaddr uses.
    ///
    /// The bits match the Linux `IFF_*` values.
    #[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
    pub struct InterfaceFlags: u32 {
        /// The interface is administratively up.
        const UP = libc::IFF_UP as u32;

        /// The interface is the loopback interface.
        const LOOPBACK = libc::IFF_LOOPBACK as u32;

        /// The interface has an operational link.
        const RUNNING = libc::IFF_RUNNING as u32;

        /// The interface supports multicast.
        const MULTICAST = libc::IFF_MULTICAST as u32;
    }
}

/// One (interface, address) entry in the host's interface list.
///
/// Interfaces with multiple addresses have one record per address.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InterfaceRecord {
    /// The interface name.
    pub name: String,

    /// The interface flags.
    pub flags: InterfaceFlags,

    /// The native encoding of the address, if the entry has one.
    pub address: Option<RawSockAddr>,
}

impl InterfaceRecord {
    /// Returns the family of the record's address.
    ///
    /// Records without an address, or with an address in an unsupported
    /// family, return [`Family::Unspecified`].
    pub fn family(&self) -> Family {
        self.address
            .as_ref()
            .map(RawSockAddr::family)
            .unwrap_or_default()
    }

    /// Returns the record's address, if it has one.
    pub fn to_address(&self) -> Option<NetworkAddress> {
        self.address.map(NetworkAddress::from)
    }

    /// Is this record for the loopback interface?
    pub fn is_loopback(&self) -> bool {
        self.flags.contains(InterfaceFlags::LOOPBACK)
    }
}

/// Reads the current state of the host's network interfaces.
///
/// Implementations must query the current state on every call,
/// and release any OS resources before returning.
pub trait InterfaceProvider {
    /// Returns one record for each address of each interface, in OS order.
    fn records(&self) -> io::Result<Vec<InterfaceRecord>>;

    /// Returns the index of the interface called `name`, if it exists.
    fn name_to_index(&self, name: &str) -> Option<u32>;

    /// Returns the name of the interface with `index`, if it exists.
    fn index_to_name(&self, index: u32) -> Option<String>;

    /// Is the interface called `name` a wireless LAN interface?
    ///
    /// This is a best-effort check: errors are treated as "not wireless".
    fn is_wireless(&self, name: &str) -> bool;
}

impl<P: InterfaceProvider + ?Sized> InterfaceProvider for &P {
    fn records(&self) -> io::Result<Vec<InterfaceRecord>> {
        (**self).records()
    }

    fn name_to_index(&self, name: &str) -> Option<u32> {
        (**self).name_to_index(name)
    }

    fn index_to_name(&self, index: u32) -> Option<String> {
        (**self).index_to_name(index)
    }

    fn is_wireless(&self, name: &str) -> bool {
        (**self).is_wireless(name)
    }
}
