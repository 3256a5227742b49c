//! Strongly typed address payloads, one for each family.
//!
//! All fields are logical host order values.
//! Byte order conversions only happen in the [`native`](super::native) module.

use std::{
    ffi::OsStr,
    fmt,
    net::{Ipv4Addr, Ipv6Addr},
    os::unix::ffi::OsStrExt,
    path::Path,
};

use byteorder::{ByteOrder, NativeEndian};

use crate::{
    address::Family,
    constants::{
        ETHERNET_ADDR_LEN, LINK_ADDR_CAPACITY, MAX_UNIX_PATH_LEN, SOCKADDR_SIZE,
        SUN_PATH_CAPACITY,
    },
};

/// The family-specific contents of a [`NetworkAddress`](crate::NetworkAddress).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Payload {
    /// An IPv4 address.
    Ipv4(Ipv4Payload),

    /// An IPv6 address.
    Ipv6(Ipv6Payload),

    /// A link layer address.
    Ethernet(LinkPayload),

    /// A UNIX domain socket path.
    UnixSocket(UnixPayload),

    /// An invalid address, or an address in an unsupported family.
    Unspecified(UnspecifiedPayload),
}

impl Payload {
    /// Returns the family of this payload.
    pub fn family(&self) -> Family {
        match self {
            Payload::Ipv4(_) => Family::Ipv4,
            Payload::Ipv6(_) => Family::Ipv6,
            Payload::Ethernet(_) => Family::Ethernet,
            Payload::UnixSocket(_) => Family::UnixSocket,
            Payload::Unspecified(_) => Family::Unspecified,
        }
    }
}

impl Default for Payload {
    fn default() -> Self {
        Payload::Unspecified(UnspecifiedPayload::default())
    }
}

/// An IPv4 address and port.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Ipv4Payload {
    /// The IP address.
    pub ip: Ipv4Addr,

    /// The port, or zero if there is no port.
    pub port: u16,
}

impl Ipv4Payload {
    /// Is this address in `224.0.0.0/4`?
    pub fn is_multicast(&self) -> bool {
        u32::from(self.ip) & 0xf000_0000 == 0xe000_0000
    }

    /// Is this address in `169.254.0.0/16`?
    pub fn is_link_local(&self) -> bool {
        u32::from(self.ip) & 0xffff_0000 == 0xa9fe_0000
    }
}

/// An IPv6 address, port, and interface scope.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Ipv6Payload {
    /// The IP address.
    pub ip: Ipv6Addr,

    /// The port, or zero if there is no port.
    pub port: u16,

    /// The IPv6 flow information.
    pub flowinfo: u32,

    /// The index of the interface this address is scoped to, or zero.
    pub scope_id: u32,
}

impl Ipv6Payload {
    /// Is this address in `ff00::/8`?
    pub fn is_multicast(&self) -> bool {
        self.ip.octets()[0] == 0xff
    }

    /// Is this address in `fe80::/10`?
    pub fn is_link_local(&self) -> bool {
        self.ip.segments()[0] & 0xffc0 == 0xfe80
    }
}

/// A link layer address, its protocol, and the interface it was seen on.
///
/// Holds up to [`LINK_ADDR_CAPACITY`] address octets.
/// Ethernet MAC addresses have [`ETHERNET_ADDR_LEN`] octets.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct LinkPayload {
    /// The Ethernet protocol (EtherType), or zero.
    pub protocol: u16,

    /// The index of the interface this address belongs to, or zero.
    pub ifindex: i32,

    /// The ARP hardware type.
    pub hatype: u16,

    /// The packet type.
    pub pkttype: u8,

    /// The number of used octets in `addr`.
    halen: u8,

    /// The address octets, zero-padded after `halen`.
    addr: [u8; LINK_ADDR_CAPACITY],
}

impl LinkPayload {
    /// Returns an Ethernet MAC address payload for `mac` and `protocol`,
    /// without an interface.
    pub fn ethernet(mac: [u8; ETHERNET_ADDR_LEN], protocol: u16) -> Self {
        Self::new(&mac, protocol, 0, 0, 0)
    }

    /// Returns a link layer payload from its fields.
    ///
    /// Addresses longer than [`LINK_ADDR_CAPACITY`] octets are truncated.
    pub fn new(octets: &[u8], protocol: u16, ifindex: i32, hatype: u16, pkttype: u8) -> Self {
        if octets.len() > LINK_ADDR_CAPACITY {
            warn!(
                len = octets.len(),
                max = LINK_ADDR_CAPACITY,
                "truncating link layer address"
            );
        }

        let octets = &octets[..octets.len().min(LINK_ADDR_CAPACITY)];
        let mut addr = [0; LINK_ADDR_CAPACITY];
        addr[..octets.len()].copy_from_slice(octets);

        Self {
            protocol,
            ifindex,
            hatype,
            pkttype,
            halen: octets.len() as u8,
            addr,
        }
    }

    /// Returns the address octets.
    pub fn octets(&self) -> &[u8] {
        &self.addr[..usize::from(self.halen)]
    }

    /// Is the group bit set in the first octet?
    pub fn is_multicast(&self) -> bool {
        self.addr[0] & 0x01 != 0
    }

    /// Link layer addresses are only meaningful on their own network segment.
    pub fn is_link_local(&self) -> bool {
        true
    }
}

/// A UNIX domain socket path.
///
/// Holds up to [`MAX_UNIX_PATH_LEN`] bytes, which are never NUL.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct UnixPayload {
    /// The path bytes, zero-padded after `len`.
    path: [u8; SUN_PATH_CAPACITY],

    /// The length of the path.
    len: usize,
}

impl UnixPayload {
    /// Returns the payload for the path in `bytes`.
    ///
    /// The path ends at the first NUL byte, or after [`MAX_UNIX_PATH_LEN`] bytes.
    pub(crate) fn from_bytes_truncated(bytes: &[u8]) -> Self {
        let len = bytes
            .iter()
            .position(|byte| *byte == 0)
            .unwrap_or(bytes.len())
            .min(MAX_UNIX_PATH_LEN);

        let mut path = [0; SUN_PATH_CAPACITY];
        path[..len].copy_from_slice(&bytes[..len]);

        Self { path, len }
    }

    /// Returns the socket path.
    pub fn path(&self) -> &Path {
        Path::new(OsStr::from_bytes(self.as_bytes()))
    }

    /// Returns the raw path bytes, without a terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.path[..self.len]
    }
}

impl fmt::Debug for UnixPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnixPayload")
            .field("path", &self.path())
            .finish()
    }
}

/// The generic socket address header of an invalid or unsupported address.
///
/// Keeps the original header bytes, so the unsupported family can be inspected.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct UnspecifiedPayload {
    header: [u8; SOCKADDR_SIZE],
}

impl UnspecifiedPayload {
    pub(crate) fn from_header(header: [u8; SOCKADDR_SIZE]) -> Self {
        Self { header }
    }

    /// Returns the generic header bytes.
    pub fn header(&self) -> &[u8; SOCKADDR_SIZE] {
        &self.header
    }

    /// Returns the native family identifier in the header.
    pub fn native_family(&self) -> u16 {
        NativeEndian::read_u16(&self.header[..2])
    }
}
