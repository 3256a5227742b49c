//! Native socket address encoding.
//!
//! [`RawSockAddr`] holds the bytes of a Linux `sockaddr_in`, `sockaddr_in6`,
//! `sockaddr_ll`, or `sockaddr_un`, in a buffer the size of `sockaddr_storage`.
//!
//! Field layouts, with host order fields marked:
//!
//! | family  | bytes                                                                 |
//! |---------|-----------------------------------------------------------------------|
//! | IPv4    | family (host), port (BE), address, 8 zero bytes                       |
//! | IPv6    | family (host), port (BE), flowinfo (BE), address, scope id (host)     |
//! | link    | family (host), protocol (BE), ifindex (host), hatype (host), pkttype, halen, address |
//! | UNIX    | family (host), NUL-terminated path                                    |
//!
//! This is the only module that converts between host and network byte order.

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    net::{Ipv4Addr, Ipv6Addr},
};

use byteorder::{BigEndian, ByteOrder, NativeEndian};

use crate::{
    address::{
        payload::{Ipv4Payload, Ipv6Payload, LinkPayload, UnixPayload, UnspecifiedPayload},
        Family, Payload,
    },
    constants::{
        family, LINK_ADDR_CAPACITY, SOCKADDR_IN6_SIZE, SOCKADDR_IN_SIZE, SOCKADDR_LL_HEADER_SIZE,
        SOCKADDR_SIZE, SOCKADDR_STORAGE_SIZE, SUN_PATH_CAPACITY, SUN_PATH_OFFSET,
    },
};

/// A native socket address, and its effective length.
///
/// The bytes can be passed unmodified to socket system calls like `bind(2)`,
/// `connect(2)` and `sendto(2)`, along with [`RawSockAddr::len`].
///
/// Raw addresses compare by length first, then by their bytes.
#[derive(Copy, Clone)]
pub struct RawSockAddr {
    bytes: [u8; SOCKADDR_STORAGE_SIZE],
    len: usize,
}

impl RawSockAddr {
    /// Copies a native socket address from `bytes`.
    ///
    /// At most `sockaddr_storage` bytes are copied.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let len = bytes.len().min(SOCKADDR_STORAGE_SIZE);
        let mut storage = [0; SOCKADDR_STORAGE_SIZE];
        storage[..len].copy_from_slice(&bytes[..len]);

        Self {
            bytes: storage,
            len,
        }
    }

    /// Returns the effective bytes of the address.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Returns the whole `sockaddr_storage` sized buffer.
    ///
    /// The bytes after [`RawSockAddr::len`] are zero.
    pub fn storage(&self) -> &[u8; SOCKADDR_STORAGE_SIZE] {
        &self.bytes
    }

    /// Returns the effective length of the address.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the address has no bytes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the native family identifier, if the address is long enough to have one.
    pub fn native_family(&self) -> Option<u16> {
        self.as_bytes().get(..2).map(NativeEndian::read_u16)
    }

    /// Returns the family of the address.
    ///
    /// Addresses without a supported family identifier are [`Family::Unspecified`].
    pub fn family(&self) -> Family {
        self.native_family()
            .map(Family::from_native)
            .unwrap_or_default()
    }
}

impl AsRef<[u8]> for RawSockAddr {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for RawSockAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawSockAddr")
            .field("len", &self.len)
            .field("bytes", &self.as_bytes())
            .finish()
    }
}

impl PartialEq for RawSockAddr {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for RawSockAddr {}

impl Hash for RawSockAddr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl Ord for RawSockAddr {
    fn cmp(&self, other: &Self) -> Ordering {
        self.len
            .cmp(&other.len)
            .then_with(|| self.as_bytes().cmp(other.as_bytes()))
    }
}

impl PartialOrd for RawSockAddr {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Encodes `payload` in its native structure.
pub(crate) fn encode(payload: &Payload) -> RawSockAddr {
    let mut bytes = [0; SOCKADDR_STORAGE_SIZE];

    let len = match payload {
        Payload::Ipv4(v4) => {
            NativeEndian::write_u16(&mut bytes[0..2], family::INET);
            BigEndian::write_u16(&mut bytes[2..4], v4.port);
            bytes[4..8].copy_from_slice(&v4.ip.octets());

            SOCKADDR_IN_SIZE
        }
        Payload::Ipv6(v6) => {
            NativeEndian::write_u16(&mut bytes[0..2], family::INET6);
            BigEndian::write_u16(&mut bytes[2..4], v6.port);
            BigEndian::write_u32(&mut bytes[4..8], v6.flowinfo);
            bytes[8..24].copy_from_slice(&v6.ip.octets());
            NativeEndian::write_u32(&mut bytes[24..28], v6.scope_id);

            SOCKADDR_IN6_SIZE
        }
        Payload::Ethernet(link) => {
            let octets = link.octets();

            NativeEndian::write_u16(&mut bytes[0..2], family::PACKET);
            BigEndian::write_u16(&mut bytes[2..4], link.protocol);
            NativeEndian::write_i32(&mut bytes[4..8], link.ifindex);
            NativeEndian::write_u16(&mut bytes[8..10], link.hatype);
            bytes[10] = link.pkttype;
            bytes[11] = octets.len() as u8;
            bytes[SOCKADDR_LL_HEADER_SIZE..][..octets.len()].copy_from_slice(octets);

            SOCKADDR_LL_HEADER_SIZE + octets.len()
        }
        Payload::UnixSocket(unix) => {
            let path = unix.as_bytes();

            NativeEndian::write_u16(&mut bytes[0..2], family::UNIX);
            bytes[SUN_PATH_OFFSET..][..path.len()].copy_from_slice(path);

            // see "man 7 unix": the length includes the terminating NUL
            SUN_PATH_OFFSET + path.len() + 1
        }
        Payload::Unspecified(unspecified) => {
            bytes[..SOCKADDR_SIZE].copy_from_slice(unspecified.header());

            SOCKADDR_SIZE
        }
    };

    RawSockAddr { bytes, len }
}

/// Decodes the native address in the first `max_len` bytes of `bytes`.
///
/// At most the native structure size for the address family is read.
/// Missing bytes are treated as zero.
///
/// Never fails: unsupported family identifiers are decoded as
/// [`Payload::Unspecified`], which keeps the generic header bytes.
/// Buffers without a complete family identifier decode as the default payload.
pub(crate) fn decode(bytes: &[u8], max_len: usize) -> Payload {
    let available = &bytes[..bytes.len().min(max_len)];

    let Some(id) = available.get(..2) else {
        // Too short to have a family
        return Payload::default();
    };
    let family = Family::from_native(NativeEndian::read_u16(id));

    let copied = available.len().min(family.native_size());
    let mut s = [0; SOCKADDR_STORAGE_SIZE];
    s[..copied].copy_from_slice(&available[..copied]);

    match family {
        Family::Ipv4 => Payload::Ipv4(Ipv4Payload {
            ip: Ipv4Addr::new(s[4], s[5], s[6], s[7]),
            port: BigEndian::read_u16(&s[2..4]),
        }),
        Family::Ipv6 => {
            let mut octets = [0; 16];
            octets.copy_from_slice(&s[8..24]);

            Payload::Ipv6(Ipv6Payload {
                ip: Ipv6Addr::from(octets),
                port: BigEndian::read_u16(&s[2..4]),
                flowinfo: BigEndian::read_u32(&s[4..8]),
                scope_id: NativeEndian::read_u32(&s[24..28]),
            })
        }
        Family::Ethernet => {
            let halen = usize::from(s[11]).min(LINK_ADDR_CAPACITY);

            Payload::Ethernet(LinkPayload::new(
                &s[SOCKADDR_LL_HEADER_SIZE..][..halen],
                BigEndian::read_u16(&s[2..4]),
                NativeEndian::read_i32(&s[4..8]),
                NativeEndian::read_u16(&s[8..10]),
                s[10],
            ))
        }
        Family::UnixSocket => Payload::UnixSocket(UnixPayload::from_bytes_truncated(
            &s[SUN_PATH_OFFSET..][..SUN_PATH_CAPACITY],
        )),
        Family::Unspecified => {
            let mut header = [0; SOCKADDR_SIZE];
            header.copy_from_slice(&s[..SOCKADDR_SIZE]);

            Payload::Unspecified(UnspecifiedPayload::from_header(header))
        }
    }
}
