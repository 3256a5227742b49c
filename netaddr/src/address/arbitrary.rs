//! Randomised test data generation for [`NetworkAddress`].

use proptest::{arbitrary::any, arbitrary::Arbitrary, collection::vec, prelude::*};

use crate::constants::{LINK_ADDR_CAPACITY, MAX_UNIX_PATH_LEN, SOCKADDR_SIZE};

use super::{Ipv4Payload, Ipv6Payload, LinkPayload, NetworkAddress, UnixPayload};

impl NetworkAddress {
    /// Returns a strategy which generates IPv4 addresses with any port.
    pub fn ipv4_strategy() -> BoxedStrategy<Self> {
        (any::<std::net::Ipv4Addr>(), any::<u16>())
            .prop_map(|(ip, port)| Ipv4Payload { ip, port }.into())
            .boxed()
    }

    /// Returns a strategy which generates IPv6 addresses with any port,
    /// flow information, and scope.
    pub fn ipv6_strategy() -> BoxedStrategy<Self> {
        (
            any::<std::net::Ipv6Addr>(),
            any::<u16>(),
            any::<u32>(),
            any::<u32>(),
        )
            .prop_map(|(ip, port, flowinfo, scope_id)| {
                Ipv6Payload {
                    ip,
                    port,
                    flowinfo,
                    scope_id,
                }
                .into()
            })
            .boxed()
    }

    /// Returns a strategy which generates link layer addresses of any length
    /// that fits in the native encoding.
    pub fn link_strategy() -> BoxedStrategy<Self> {
        (
            vec(any::<u8>(), 0..=LINK_ADDR_CAPACITY),
            any::<u16>(),
            any::<i32>(),
            any::<u16>(),
            any::<u8>(),
        )
            .prop_map(|(octets, protocol, ifindex, hatype, pkttype)| {
                LinkPayload::new(&octets, protocol, ifindex, hatype, pkttype).into()
            })
            .boxed()
    }

    /// Returns a strategy which generates UNIX socket addresses with any
    /// path that fits in the native encoding, including non-UTF-8 paths.
    pub fn unix_strategy() -> BoxedStrategy<Self> {
        vec(1..=u8::MAX, 0..=MAX_UNIX_PATH_LEN)
            .prop_map(|path| UnixPayload::from_bytes_truncated(&path).into())
            .boxed()
    }

    /// Returns a strategy which generates valid addresses in every supported family.
    pub fn valid_strategy() -> BoxedStrategy<Self> {
        prop_oneof![
            NetworkAddress::ipv4_strategy(),
            NetworkAddress::ipv6_strategy(),
            NetworkAddress::link_strategy(),
            NetworkAddress::unix_strategy(),
        ]
        .boxed()
    }

    /// Returns a strategy which generates valid addresses that have a
    /// lossless text form.
    ///
    /// The text forms don't include IPv6 flow information, link layer protocols
    /// or interfaces, or non-UTF-8 paths.
    pub fn display_round_trip_strategy() -> BoxedStrategy<Self> {
        prop_oneof![
            NetworkAddress::ipv4_strategy(),
            (
                any::<std::net::Ipv6Addr>(),
                any::<u16>(),
                any::<u32>()
            )
                .prop_map(|(ip, port, scope_id)| {
                    Ipv6Payload {
                        ip,
                        port,
                        flowinfo: 0,
                        scope_id,
                    }
                    .into()
                }),
            any::<[u8; 6]>().prop_map(|mac| NetworkAddress::from_mac(mac, 0)),
            "/[a-zA-Z0-9._/-]{0,100}"
                .prop_map(|path: String| NetworkAddress::from_unix_socket_path(path)),
        ]
        .boxed()
    }
}

impl Arbitrary for NetworkAddress {
    type Parameters = ();

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            4 => NetworkAddress::valid_strategy(),
            // Mostly unsupported families, decoded from a generic header
            1 => any::<[u8; SOCKADDR_SIZE]>()
                .prop_map(|header| NetworkAddress::from_native(&header, SOCKADDR_SIZE)),
        ]
        .boxed()
    }

    type Strategy = BoxedStrategy<Self>;
}
