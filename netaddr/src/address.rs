//! The unified socket address value type.

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6},
    os::unix::ffi::OsStrExt,
    path::Path,
};

use crate::{
    constants::{ETHERNET_ADDR_LEN, MAX_UNIX_PATH_LEN},
    error::{AddressError, WrongFamilyError},
    interface::{InterfaceProvider, InterfaceRegistry, NetworkInterface},
};

mod codec;
mod family;
mod payload;

pub mod native;

#[cfg(any(test, feature = "proptest-impl"))]
mod arbitrary;


pub use family::Family;
pub use native::RawSockAddr;
pub use payload::{
    Ipv4Payload, Ipv6Payload, LinkPayload, Payload, UnixPayload, UnspecifiedPayload,
};

/// An immutable socket address in one of the supported [`Family`]s.
///
/// Addresses are small `Copy` values. The `with_*` methods return an updated
/// copy, leaving the original unchanged.
///
/// Addresses compare, sort, and hash by their native encoding: first by the
/// encoded length, then by the encoded bytes. This is a total order, but it is
/// not a semantic order for addresses in different families.
///
/// The default address is invalid, and has the [`Family::Unspecified`] family.
#[derive(Copy, Clone, Default)]
pub struct NetworkAddress {
    payload: Payload,
}

impl NetworkAddress {
    /// Returns an IPv4 address from its four octets, in network order, and a port.
    pub fn from_octets(o1: u8, o2: u8, o3: u8, o4: u8, port: u16) -> NetworkAddress {
        Ipv4Payload {
            ip: Ipv4Addr::new(o1, o2, o3, o4),
            port,
        }
        .into()
    }

    /// Returns an IPv4 address from a host order integer, and a port.
    ///
    /// For example, `0x7f00_0001` is `127.0.0.1`.
    pub fn from_ipv4_u32(ip: u32, port: u16) -> NetworkAddress {
        Ipv4Payload {
            ip: Ipv4Addr::from(ip),
            port,
        }
        .into()
    }

    /// Returns an IPv6 address from its eight 16-bit segments, and a port.
    ///
    /// The address is not scoped to an interface.
    pub fn from_words(words: [u16; 8], port: u16) -> NetworkAddress {
        Self::from_words_with_scope(words, port, 0)
    }

    /// Returns an IPv6 address scoped to the host interface `interface`.
    ///
    /// If the interface can't be found, the address is not scoped.
    pub fn from_words_with_interface(
        words: [u16; 8],
        port: u16,
        interface: &NetworkInterface,
    ) -> NetworkAddress {
        Self::from_words_with_scope(words, port, interface.index())
    }

    fn from_words_with_scope(words: [u16; 8], port: u16, scope_id: u32) -> NetworkAddress {
        let [a, b, c, d, e, f, g, h] = words;

        Ipv6Payload {
            ip: Ipv6Addr::new(a, b, c, d, e, f, g, h),
            port,
            flowinfo: 0,
            scope_id,
        }
        .into()
    }

    /// Returns an Ethernet MAC address with an Ethernet `protocol`.
    ///
    /// The address is not associated with an interface.
    pub fn from_mac(mac: [u8; ETHERNET_ADDR_LEN], protocol: u16) -> NetworkAddress {
        LinkPayload::ethernet(mac, protocol).into()
    }

    /// Returns an Ethernet MAC address on the host interface `interface`.
    ///
    /// If the interface can't be found, the address is not associated with an interface.
    pub fn from_mac_with_interface(
        mac: [u8; ETHERNET_ADDR_LEN],
        protocol: u16,
        interface: &NetworkInterface,
    ) -> NetworkAddress {
        let ifindex = i32::try_from(interface.index()).unwrap_or_default();

        LinkPayload::new(&mac, protocol, ifindex, 0, 0).into()
    }

    /// Returns a UNIX domain socket address for `path`.
    ///
    /// Paths longer than [`MAX_UNIX_PATH_LEN`] bytes are silently truncated,
    /// and paths containing a NUL byte end at that byte. Use
    /// [`NetworkAddress::try_from_unix_socket_path`] to reject these paths instead.
    pub fn from_unix_socket_path(path: impl AsRef<Path>) -> NetworkAddress {
        let bytes = path.as_ref().as_os_str().as_bytes();

        if bytes.len() > MAX_UNIX_PATH_LEN {
            warn!(
                len = bytes.len(),
                max = MAX_UNIX_PATH_LEN,
                "truncating UNIX socket path"
            );
        }

        UnixPayload::from_bytes_truncated(bytes).into()
    }

    /// Returns a UNIX domain socket address for `path`, if it can be encoded
    /// without changing it.
    pub fn try_from_unix_socket_path(
        path: impl AsRef<Path>,
    ) -> Result<NetworkAddress, AddressError> {
        let bytes = path.as_ref().as_os_str().as_bytes();

        if bytes.len() > MAX_UNIX_PATH_LEN {
            return Err(AddressError::PathTooLong {
                len: bytes.len(),
                max: MAX_UNIX_PATH_LEN,
            });
        }

        if bytes.contains(&0) {
            return Err(AddressError::PathContainsNul);
        }

        Ok(UnixPayload::from_bytes_truncated(bytes).into())
    }

    /// Returns the address in the first `max_len` bytes of the native socket
    /// address `bytes`.
    ///
    /// The family is read from the first two bytes, in host byte order.
    /// At most the size of the native structure for that family is read,
    /// and any missing bytes are treated as zero.
    ///
    /// Never fails. Unsupported families, and buffers too short to hold a
    /// family, return an invalid address that keeps the generic header bytes.
    pub fn from_native(bytes: &[u8], max_len: usize) -> NetworkAddress {
        let payload = native::decode(bytes, max_len);

        if payload.family() == Family::Unspecified {
            debug!(
                len = bytes.len().min(max_len),
                "unsupported native socket address family"
            );
        }

        payload.into()
    }

    /// Returns the family of this address.
    pub fn family(&self) -> Family {
        self.payload.family()
    }

    /// Is this address in a supported family?
    ///
    /// Only [`Family::Unspecified`] addresses are invalid.
    pub fn valid(&self) -> bool {
        self.family() != Family::Unspecified
    }

    /// Returns the typed contents of this address.
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Returns the native encoding of this address.
    pub fn native(&self) -> RawSockAddr {
        native::encode(&self.payload)
    }

    /// Returns the native family identifier of this address.
    ///
    /// Invalid addresses return the family identifier they were decoded from.
    pub fn native_family(&self) -> u16 {
        match &self.payload {
            Payload::Unspecified(unspecified) => unspecified.native_family(),
            payload => payload.family().native(),
        }
    }

    /// Is this a multicast or group address?
    pub fn is_multicast(&self) -> Result<bool, WrongFamilyError> {
        match &self.payload {
            Payload::Ipv4(v4) => Ok(v4.is_multicast()),
            Payload::Ipv6(v6) => Ok(v6.is_multicast()),
            Payload::Ethernet(link) => Ok(link.is_multicast()),
            Payload::UnixSocket(_) | Payload::Unspecified(_) => {
                Err(self.wrong_family("is_multicast"))
            }
        }
    }

    /// Is this address only valid on the local network segment?
    ///
    /// Link layer addresses are always link-local.
    pub fn is_link_local(&self) -> Result<bool, WrongFamilyError> {
        match &self.payload {
            Payload::Ipv4(v4) => Ok(v4.is_link_local()),
            Payload::Ipv6(v6) => Ok(v6.is_link_local()),
            Payload::Ethernet(link) => Ok(link.is_link_local()),
            Payload::UnixSocket(_) | Payload::Unspecified(_) => {
                Err(self.wrong_family("is_link_local"))
            }
        }
    }

    /// Returns the port of an IP address.
    pub fn port(&self) -> Result<u16, WrongFamilyError> {
        match &self.payload {
            Payload::Ipv4(v4) => Ok(v4.port),
            Payload::Ipv6(v6) => Ok(v6.port),
            Payload::Ethernet(_) | Payload::UnixSocket(_) | Payload::Unspecified(_) => {
                Err(self.wrong_family("port"))
            }
        }
    }

    /// Returns a copy of this IP address, with its port replaced by `port`.
    pub fn with_port(&self, port: u16) -> Result<NetworkAddress, WrongFamilyError> {
        let mut payload = self.payload;

        match &mut payload {
            Payload::Ipv4(v4) => v4.port = port,
            Payload::Ipv6(v6) => v6.port = port,
            Payload::Ethernet(_) | Payload::UnixSocket(_) | Payload::Unspecified(_) => {
                return Err(self.wrong_family("with_port"))
            }
        }

        Ok(payload.into())
    }

    /// Returns the Ethernet protocol of a link layer address.
    pub fn protocol(&self) -> Result<u16, WrongFamilyError> {
        match &self.payload {
            Payload::Ethernet(link) => Ok(link.protocol),
            Payload::Ipv4(_)
            | Payload::Ipv6(_)
            | Payload::UnixSocket(_)
            | Payload::Unspecified(_) => Err(self.wrong_family("protocol")),
        }
    }

    /// Returns a copy of this link layer address, with its Ethernet protocol
    /// replaced by `protocol`.
    pub fn with_protocol(&self, protocol: u16) -> Result<NetworkAddress, WrongFamilyError> {
        let mut payload = self.payload;

        match &mut payload {
            Payload::Ethernet(link) => link.protocol = protocol,
            Payload::Ipv4(_)
            | Payload::Ipv6(_)
            | Payload::UnixSocket(_)
            | Payload::Unspecified(_) => return Err(self.wrong_family("with_protocol")),
        }

        Ok(payload.into())
    }

    /// Returns the index of the interface this address is associated with.
    ///
    /// IPv4 addresses and unscoped addresses return `Ok(None)`.
    pub fn interface_index(&self) -> Result<Option<u32>, WrongFamilyError> {
        match &self.payload {
            Payload::Ipv4(_) => Ok(None),
            Payload::Ipv6(v6) => Ok(Some(v6.scope_id).filter(|index| *index != 0)),
            Payload::Ethernet(link) => Ok(u32::try_from(link.ifindex)
                .ok()
                .filter(|index| *index != 0)),
            Payload::UnixSocket(_) | Payload::Unspecified(_) => {
                Err(self.wrong_family("interface_index"))
            }
        }
    }

    /// Returns a copy of this address, associated with the interface at `index`.
    ///
    /// IPv4 addresses can't be associated with an interface, so they are
    /// returned unchanged.
    pub fn with_interface_index(&self, index: u32) -> Result<NetworkAddress, WrongFamilyError> {
        let mut payload = self.payload;

        match &mut payload {
            Payload::Ipv4(_) => {}
            Payload::Ipv6(v6) => v6.scope_id = index,
            Payload::Ethernet(link) => {
                // Linux interface indexes are always positive `int`s
                link.ifindex = i32::try_from(index).unwrap_or_default()
            }
            Payload::UnixSocket(_) | Payload::Unspecified(_) => {
                return Err(self.wrong_family("with_interface_index"))
            }
        }

        Ok(payload.into())
    }

    /// Returns the host interface this address is associated with.
    ///
    /// Returns `Ok(None)` for IPv4 addresses, unscoped addresses, and
    /// interfaces that no longer exist.
    pub fn interface(&self) -> Result<Option<NetworkInterface>, WrongFamilyError> {
        self.interface_with(&InterfaceRegistry::system())
    }

    /// Returns the interface this address is associated with, looked up in `registry`.
    pub fn interface_with<P: InterfaceProvider>(
        &self,
        registry: &InterfaceRegistry<P>,
    ) -> Result<Option<NetworkInterface>, WrongFamilyError> {
        let index = match self.interface_index() {
            Ok(Some(index)) => index,
            Ok(None) => return Ok(None),
            Err(_) => return Err(self.wrong_family("interface")),
        };

        Ok(registry.from_index(index))
    }

    /// Returns a copy of this address, associated with the host interface `interface`.
    ///
    /// If the interface can't be found, the copy is not associated with an interface.
    /// IPv4 addresses are returned unchanged.
    pub fn with_interface(
        &self,
        interface: &NetworkInterface,
    ) -> Result<NetworkAddress, WrongFamilyError> {
        self.with_interface_with(interface, &InterfaceRegistry::system())
    }

    /// Returns a copy of this address, associated with `interface`, looked up in `registry`.
    pub fn with_interface_with<P: InterfaceProvider>(
        &self,
        interface: &NetworkInterface,
        registry: &InterfaceRegistry<P>,
    ) -> Result<NetworkAddress, WrongFamilyError> {
        match self.family() {
            Family::Ipv4 => Ok(*self),
            Family::Ipv6 | Family::Ethernet => {
                self.with_interface_index(registry.index(interface))
            }
            Family::UnixSocket | Family::Unspecified => Err(self.wrong_family("with_interface")),
        }
    }

    /// Returns the IP address, if this is an IPv4 or IPv6 address.
    pub fn ip(&self) -> Option<IpAddr> {
        match &self.payload {
            Payload::Ipv4(v4) => Some(v4.ip.into()),
            Payload::Ipv6(v6) => Some(v6.ip.into()),
            Payload::Ethernet(_) | Payload::UnixSocket(_) | Payload::Unspecified(_) => None,
        }
    }

    /// Returns the standard library socket address, if this is an IPv4 or IPv6 address.
    ///
    /// IPv6 flow information and scope ids are kept.
    pub fn socket_addr(&self) -> Option<SocketAddr> {
        match &self.payload {
            Payload::Ipv4(v4) => Some(SocketAddrV4::new(v4.ip, v4.port).into()),
            Payload::Ipv6(v6) => {
                Some(SocketAddrV6::new(v6.ip, v6.port, v6.flowinfo, v6.scope_id).into())
            }
            Payload::Ethernet(_) | Payload::UnixSocket(_) | Payload::Unspecified(_) => None,
        }
    }

    /// Returns the octets of a link layer address.
    pub fn mac(&self) -> Result<&[u8], WrongFamilyError> {
        match &self.payload {
            Payload::Ethernet(link) => Ok(link.octets()),
            Payload::Ipv4(_)
            | Payload::Ipv6(_)
            | Payload::UnixSocket(_)
            | Payload::Unspecified(_) => Err(self.wrong_family("mac")),
        }
    }

    /// Returns the path of a UNIX domain socket address.
    pub fn unix_path(&self) -> Result<&Path, WrongFamilyError> {
        match &self.payload {
            Payload::UnixSocket(unix) => Ok(unix.path()),
            Payload::Ipv4(_) | Payload::Ipv6(_) | Payload::Ethernet(_) | Payload::Unspecified(_) => {
                Err(self.wrong_family("unix_path"))
            }
        }
    }

    fn wrong_family(&self, operation: &'static str) -> WrongFamilyError {
        WrongFamilyError::new(self.family(), operation)
    }
}

impl From<Payload> for NetworkAddress {
    fn from(payload: Payload) -> Self {
        NetworkAddress { payload }
    }
}

impl From<Ipv4Payload> for NetworkAddress {
    fn from(payload: Ipv4Payload) -> Self {
        Payload::Ipv4(payload).into()
    }
}

impl From<Ipv6Payload> for NetworkAddress {
    fn from(payload: Ipv6Payload) -> Self {
        Payload::Ipv6(payload).into()
    }
}

impl From<LinkPayload> for NetworkAddress {
    fn from(payload: LinkPayload) -> Self {
        Payload::Ethernet(payload).into()
    }
}

impl From<UnixPayload> for NetworkAddress {
    fn from(payload: UnixPayload) -> Self {
        Payload::UnixSocket(payload).into()
    }
}

impl From<RawSockAddr> for NetworkAddress {
    fn from(raw: RawSockAddr) -> Self {
        NetworkAddress::from_native(raw.as_bytes(), raw.len())
    }
}

impl From<SocketAddrV4> for NetworkAddress {
    fn from(addr: SocketAddrV4) -> Self {
        Ipv4Payload {
            ip: *addr.ip(),
            port: addr.port(),
        }
        .into()
    }
}

impl From<SocketAddrV6> for NetworkAddress {
    fn from(addr: SocketAddrV6) -> Self {
        Ipv6Payload {
            ip: *addr.ip(),
            port: addr.port(),
            flowinfo: addr.flowinfo(),
            scope_id: addr.scope_id(),
        }
        .into()
    }
}

impl From<SocketAddr> for NetworkAddress {
    fn from(addr: SocketAddr) -> Self {
        match addr {
            SocketAddr::V4(v4) => v4.into(),
            SocketAddr::V6(v6) => v6.into(),
        }
    }
}

impl From<Ipv4Addr> for NetworkAddress {
    fn from(ip: Ipv4Addr) -> Self {
        SocketAddrV4::new(ip, 0).into()
    }
}

impl From<Ipv6Addr> for NetworkAddress {
    fn from(ip: Ipv6Addr) -> Self {
        SocketAddrV6::new(ip, 0, 0, 0).into()
    }
}

impl From<IpAddr> for NetworkAddress {
    fn from(ip: IpAddr) -> Self {
        SocketAddr::new(ip, 0).into()
    }
}

impl fmt::Debug for NetworkAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NetworkAddress")
            .field("family", &self.family())
            .field("addr", &format_args!("{self}"))
            .field("payload", &self.payload)
            .finish()
    }
}

impl PartialEq for NetworkAddress {
    fn eq(&self, other: &Self) -> bool {
        self.native() == other.native()
    }
}

impl Eq for NetworkAddress {}

impl Hash for NetworkAddress {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.native().hash(state);
    }
}

impl Ord for NetworkAddress {
    fn cmp(&self, other: &Self) -> Ordering {
        self.native().cmp(&other.native())
    }
}

impl PartialOrd for NetworkAddress {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
