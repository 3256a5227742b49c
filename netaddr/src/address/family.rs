//! Address families, and their native identifiers.

use std::fmt;

#[cfg(any(test, feature = "proptest-impl"))]
use proptest_derive::Arbitrary;

use crate::constants::{
    family, SOCKADDR_IN6_SIZE, SOCKADDR_IN_SIZE, SOCKADDR_LL_SIZE, SOCKADDR_SIZE, SOCKADDR_UN_SIZE,
};

/// The kind of a [`NetworkAddress`](crate::NetworkAddress).
///
/// The family determines which accessors are meaningful for an address.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(any(test, feature = "proptest-impl"), derive(Arbitrary))]
pub enum Family {
    /// An IPv4 address and port.
    Ipv4,

    /// An IPv6 address, port, and interface scope.
    Ipv6,

    /// A link layer (MAC) address, protocol, and interface index.
    Ethernet,

    /// A UNIX domain socket path.
    UnixSocket,

    /// An invalid address, or an address in a family that isn't supported.
    #[default]
    Unspecified,
}

impl Family {
    /// Returns the family for the native family identifier `id`.
    ///
    /// Unsupported identifiers are mapped to [`Family::Unspecified`].
    pub fn from_native(id: u16) -> Family {
        match id {
            family::INET => Family::Ipv4,
            family::INET6 => Family::Ipv6,
            family::PACKET => Family::Ethernet,
            family::UNIX => Family::UnixSocket,
            _ => Family::Unspecified,
        }
    }

    /// Returns the native family identifier for this family.
    pub fn native(self) -> u16 {
        match self {
            Family::Ipv4 => family::INET,
            Family::Ipv6 => family::INET6,
            Family::Ethernet => family::PACKET,
            Family::UnixSocket => family::UNIX,
            Family::Unspecified => family::UNSPEC,
        }
    }

    /// Returns the size of the native structure for this family.
    ///
    /// This is the maximum number of bytes read when decoding an address.
    pub fn native_size(self) -> usize {
        match self {
            Family::Ipv4 => SOCKADDR_IN_SIZE,
            Family::Ipv6 => SOCKADDR_IN6_SIZE,
            Family::Ethernet => SOCKADDR_LL_SIZE,
            Family::UnixSocket => SOCKADDR_UN_SIZE,
            Family::Unspecified => SOCKADDR_SIZE,
        }
    }

    /// Returns true for IPv4 and IPv6.
    pub fn is_ip(self) -> bool {
        matches!(self, Family::Ipv4 | Family::Ipv6)
    }

    /// Returns true for the families that host interfaces report addresses in.
    pub fn is_interface_family(self) -> bool {
        matches!(self, Family::Ipv4 | Family::Ipv6 | Family::Ethernet)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Family::Ipv4 => "IPv4",
            Family::Ipv6 => "IPv6",
            Family::Ethernet => "Ethernet",
            Family::UnixSocket => "UNIX socket",
            Family::Unspecified => "unspecified",
        })
    }
}
