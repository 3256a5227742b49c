//! Contains test vectors for native Linux socket address structures:
//! * `sockaddr_in` (IPv4),
//! * `sockaddr_in6` (IPv6),
//! * `sockaddr_ll` (link layer, `AF_PACKET`),
//! * `sockaddr_un` (UNIX domain sockets).
//!
//! Each vector holds exactly the effective encoded length of the address,
//! which is the length passed to `bind(2)` or `connect(2)`.
//!
//! The address family and the other host order fields are little-endian,
//! so these vectors only match the encodings on little-endian targets.

use hex::FromHex;
use lazy_static::lazy_static;

/// A native socket address encoding, and its expected text form.
#[derive(Clone, Debug)]
pub struct NativeAddrVector {
    /// What this vector covers.
    pub description: &'static str,

    /// The native encoding, truncated to its effective length.
    pub bytes: Vec<u8>,

    /// The expected `Display` output for the decoded address.
    pub display: &'static str,
}

lazy_static! {
    /// Array of native socket addresses in families that netaddr models.
    ///
    /// These vectors decode to valid addresses, and re-encode to the same bytes.
    pub static ref NATIVE_ADDR_VECTORS: Vec<NativeAddrVector> = vec![
        NativeAddrVector {
            description: "IPv4 with port",
            bytes: <Vec<u8>>::from_hex(concat!(
                "0200",             // sin_family, AF_INET
                "1f90",             // sin_port, 8080 (big endian)
                "c0a80101",         // sin_addr, 192.168.1.1
                "0000000000000000", // sin_zero
            ))
            .expect("Address bytes are in valid hex representation"),
            display: "192.168.1.1:8080",
        },
        NativeAddrVector {
            description: "IPv4 loopback without port",
            bytes: <Vec<u8>>::from_hex(concat!(
                "0200",             // sin_family, AF_INET
                "0000",             // sin_port, 0
                "7f000001",         // sin_addr, 127.0.0.1
                "0000000000000000", // sin_zero
            ))
            .expect("Address bytes are in valid hex representation"),
            display: "127.0.0.1",
        },
        NativeAddrVector {
            description: "IPv6 with port",
            bytes: <Vec<u8>>::from_hex(concat!(
                "0a00",                             // sin6_family, AF_INET6
                "01bb",                             // sin6_port, 443 (big endian)
                "00000000",                         // sin6_flowinfo
                "20010db8000000000000000000000001", // sin6_addr, 2001:db8::1
                "00000000",                         // sin6_scope_id
            ))
            .expect("Address bytes are in valid hex representation"),
            display: "[2001:db8::1]:443",
        },
        NativeAddrVector {
            description: "IPv6 link-local with scope id",
            bytes: <Vec<u8>>::from_hex(concat!(
                "0a00",                             // sin6_family, AF_INET6
                "0000",                             // sin6_port, 0
                "00000000",                         // sin6_flowinfo
                "fe800000000000000000000000000001", // sin6_addr, fe80::1
                "02000000",                         // sin6_scope_id, 2 (host order)
            ))
            .expect("Address bytes are in valid hex representation"),
            display: "fe80::1%2",
        },
        NativeAddrVector {
            description: "Ethernet with protocol and interface index",
            bytes: <Vec<u8>>::from_hex(concat!(
                "1100",         // sll_family, AF_PACKET
                "0800",         // sll_protocol, ETH_P_IP (big endian)
                "02000000",     // sll_ifindex, 2
                "0100",         // sll_hatype, ARPHRD_ETHER
                "00",           // sll_pkttype, PACKET_HOST
                "06",           // sll_halen, 6
                "001a2b3c4d5e", // sll_addr, 00:1A:2B:3C:4D:5E
            ))
            .expect("Address bytes are in valid hex representation"),
            display: "00:1A:2B:3C:4D:5E",
        },
        NativeAddrVector {
            description: "loopback link layer record, as returned by getifaddrs",
            bytes: <Vec<u8>>::from_hex(concat!(
                "1100",         // sll_family, AF_PACKET
                "0000",         // sll_protocol, 0
                "01000000",     // sll_ifindex, 1
                "0403",         // sll_hatype, ARPHRD_LOOPBACK
                "00",           // sll_pkttype, PACKET_HOST
                "06",           // sll_halen, 6
                "000000000000", // sll_addr, 00:00:00:00:00:00
            ))
            .expect("Address bytes are in valid hex representation"),
            display: "00:00:00:00:00:00",
        },
        NativeAddrVector {
            description: "UNIX domain socket path",
            bytes: <Vec<u8>>::from_hex(concat!(
                "0100",                   // sun_family, AF_UNIX
                "2f746d702f736f636b6574", // sun_path, "/tmp/socket"
                "00",                     // sun_path terminator
            ))
            .expect("Address bytes are in valid hex representation"),
            display: "/tmp/socket",
        },
    ];

    /// Array of native socket addresses in families that netaddr does not model.
    ///
    /// These vectors decode to invalid addresses, without failing.
    pub static ref UNRECOGNIZED_NATIVE_ADDR_VECTORS: Vec<NativeAddrVector> = vec![
        NativeAddrVector {
            description: "netlink",
            bytes: <Vec<u8>>::from_hex(concat!(
                "1000",     // nl_family, AF_NETLINK
                "0000",     // nl_pad
                "00000000", // nl_pid
                "00000000", // nl_groups
                "00000000", // rest of the generic sockaddr
            ))
            .expect("Address bytes are in valid hex representation"),
            display: "",
        },
        NativeAddrVector {
            description: "unspecified family",
            bytes: <Vec<u8>>::from_hex("0000")
                .expect("Address bytes are in valid hex representation"),
            display: "",
        },
        NativeAddrVector {
            description: "truncated family field",
            bytes: <Vec<u8>>::from_hex("02")
                .expect("Address bytes are in valid hex representation"),
            display: "",
        },
    ];
}
