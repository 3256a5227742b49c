//! Fixed test vectors for network addresses.

use std::{
    collections::{BTreeSet, HashSet},
    net::{Ipv4Addr, Ipv6Addr, SocketAddr},
    path::Path,
};

use netaddr_test::prelude::*;

use crate::{
    address::{Family, LinkPayload, NetworkAddress, Payload},
    constants::{family, MAX_UNIX_PATH_LEN, SOCKADDR_SIZE},
    error::{AddressError, AddressParseError},
    interface::{InterfaceRegistry, MockInterfaces, NetworkInterface},
};

/// Make sure the default address is invalid.
#[test]
fn default_address_is_invalid() {
    netaddr_test::init();

    let addr = NetworkAddress::default();

    assert!(!addr.valid());
    assert_eq!(addr.family(), Family::Unspecified);
    assert_eq!(addr.to_string(), "");
    assert_eq!(addr.native().len(), SOCKADDR_SIZE);
    assert_eq!(addr.native_family(), family::UNSPEC);
}

#[test]
fn ipv4_display() {
    netaddr_test::init();

    assert_eq!(
        NetworkAddress::from_octets(192, 168, 1, 1, 8080).to_string(),
        "192.168.1.1:8080"
    );
    assert_eq!(
        NetworkAddress::from_octets(127, 0, 0, 1, 0).to_string(),
        "127.0.0.1"
    );
    assert_eq!(
        NetworkAddress::from_ipv4_u32(0x7f00_0001, 53).to_string(),
        "127.0.0.1:53"
    );
}

#[test]
fn ipv6_display() {
    netaddr_test::init();

    let words = [0x2001, 0x0db8, 0, 0, 0, 0, 0, 1];

    assert_eq!(NetworkAddress::from_words(words, 0).to_string(), "2001:db8::1");
    assert_eq!(
        NetworkAddress::from_words(words, 8080).to_string(),
        "[2001:db8::1]:8080"
    );

    let scoped = NetworkAddress::from_words([0xfe80, 0, 0, 0, 0, 0, 0, 1], 0)
        .with_interface_index(3)
        .expect("IPv6 addresses have a scope");
    assert_eq!(scoped.to_string(), "fe80::1%3");
    assert_eq!(
        scoped.with_port(22).expect("IPv6 has a port").to_string(),
        "[fe80::1%3]:22"
    );
}

#[test]
fn mac_display() {
    netaddr_test::init();

    let addr = NetworkAddress::from_mac([0x00, 0x1a, 0x2b, 0x3c, 0x4d, 0x5e], 0x0800);

    assert_eq!(addr.family(), Family::Ethernet);
    assert_eq!(addr.to_string(), "00:1A:2B:3C:4D:5E");
    assert_eq!(addr.protocol(), Ok(0x0800));
    assert_eq!(addr.mac(), Ok(&[0x00, 0x1a, 0x2b, 0x3c, 0x4d, 0x5e][..]));
}

#[test]
fn unix_socket_path() {
    netaddr_test::init();

    let addr = NetworkAddress::from_unix_socket_path("/tmp/socket");

    assert_eq!(addr.family(), Family::UnixSocket);
    assert_eq!(addr.to_string(), "/tmp/socket");
    assert_eq!(addr.unix_path(), Ok(Path::new("/tmp/socket")));
    // family, path, terminator
    assert_eq!(addr.native().len(), 2 + "/tmp/socket".len() + 1);
    assert_eq!(addr.native().as_bytes().last(), Some(&0));
}

/// Long paths are truncated by the infallible constructor, and rejected by
/// the checked constructor.
#[test]
fn unix_socket_path_limits() {
    netaddr_test::init();

    let longest = format!("/{}", "a".repeat(MAX_UNIX_PATH_LEN - 1));
    let too_long = format!("{longest}b");

    let addr = NetworkAddress::from_unix_socket_path(&longest);
    assert_eq!(addr.to_string(), longest);
    assert_eq!(
        NetworkAddress::try_from_unix_socket_path(&longest),
        Ok(addr)
    );

    let truncated = NetworkAddress::from_unix_socket_path(&too_long);
    assert_eq!(truncated, addr);
    assert_eq!(truncated.native().len(), 2 + MAX_UNIX_PATH_LEN + 1);

    assert_eq!(
        NetworkAddress::try_from_unix_socket_path(&too_long),
        Err(AddressError::PathTooLong {
            len: MAX_UNIX_PATH_LEN + 1,
            max: MAX_UNIX_PATH_LEN,
        })
    );

    assert_eq!(
        NetworkAddress::from_unix_socket_path("/tmp/a\0b").to_string(),
        "/tmp/a"
    );
    assert_eq!(
        NetworkAddress::try_from_unix_socket_path("/tmp/a\0b"),
        Err(AddressError::PathContainsNul)
    );
}

#[test]
fn multicast() {
    netaddr_test::init();

    assert_eq!(
        NetworkAddress::from_octets(224, 0, 0, 1, 0).is_multicast(),
        Ok(true)
    );
    assert_eq!(
        NetworkAddress::from_octets(239, 255, 255, 250, 1900).is_multicast(),
        Ok(true)
    );
    assert_eq!(
        NetworkAddress::from_octets(192, 168, 1, 1, 0).is_multicast(),
        Ok(false)
    );

    assert_eq!(
        NetworkAddress::from_words([0xff02, 0, 0, 0, 0, 0, 0, 1], 0).is_multicast(),
        Ok(true)
    );
    assert_eq!(
        NetworkAddress::from_words([0x2001, 0x0db8, 0, 0, 0, 0, 0, 1], 0).is_multicast(),
        Ok(false)
    );

    assert_eq!(
        NetworkAddress::from_mac([0x01, 0x00, 0x5e, 0x00, 0x00, 0x01], 0).is_multicast(),
        Ok(true)
    );
    assert_eq!(
        NetworkAddress::from_mac([0x00, 0x1a, 0x2b, 0x3c, 0x4d, 0x5e], 0).is_multicast(),
        Ok(false)
    );
}

#[test]
fn link_local() {
    netaddr_test::init();

    assert_eq!(
        NetworkAddress::from_octets(169, 254, 10, 20, 0).is_link_local(),
        Ok(true)
    );
    assert_eq!(
        NetworkAddress::from_octets(169, 253, 10, 20, 0).is_link_local(),
        Ok(false)
    );

    let fe80: Ipv6Addr = "fe80::202:b3ff:fe1e:8329".parse().unwrap();
    assert_eq!(NetworkAddress::from(fe80).is_link_local(), Ok(true));

    // The whole fe80::/10 prefix is link-local
    assert_eq!(
        NetworkAddress::from_words([0xfebf, 0, 0, 0, 0, 0, 0, 1], 0).is_link_local(),
        Ok(true)
    );
    assert_eq!(
        NetworkAddress::from_words([0xfec0, 0, 0, 0, 0, 0, 0, 1], 0).is_link_local(),
        Ok(false)
    );

    // Every link layer address is link-local
    assert_eq!(
        NetworkAddress::from_mac([0x00, 0x1a, 0x2b, 0x3c, 0x4d, 0x5e], 0).is_link_local(),
        Ok(true)
    );
    assert_eq!(
        NetworkAddress::from_mac([0xff; 6], 0).is_link_local(),
        Ok(true)
    );
}

/// Family-specific accessors fail on the wrong family, rather than returning a default.
#[test]
fn wrong_family_accessors() {
    netaddr_test::init();

    let ipv4 = NetworkAddress::from_octets(10, 0, 0, 1, 80);
    let mac = NetworkAddress::from_mac([0x00, 0x1a, 0x2b, 0x3c, 0x4d, 0x5e], 0);
    let unix = NetworkAddress::from_unix_socket_path("/tmp/socket");
    let invalid = NetworkAddress::default();

    let error = mac.port().unwrap_err();
    assert_eq!(error.family, Family::Ethernet);
    assert_eq!(error.operation, "port");
    assert_eq!(
        error.to_string(),
        "port is not supported for Ethernet addresses"
    );

    assert!(mac.with_port(80).is_err());
    assert!(ipv4.protocol().is_err());
    assert!(ipv4.with_protocol(0x0800).is_err());
    assert!(ipv4.mac().is_err());
    assert!(ipv4.unix_path().is_err());

    for addr in [unix, invalid] {
        assert!(addr.is_multicast().is_err());
        assert!(addr.is_link_local().is_err());
        assert!(addr.port().is_err());
        assert!(addr.protocol().is_err());
        assert!(addr.interface_index().is_err());
        assert!(addr.with_interface_index(1).is_err());
        assert_eq!(addr.ip(), None);
        assert_eq!(addr.socket_addr(), None);
    }

    assert_eq!(
        invalid.is_multicast().unwrap_err().family,
        Family::Unspecified
    );
}

/// The `with_*` methods return a new address, and leave the original unchanged.
#[test]
fn functional_updates_do_not_mutate() {
    netaddr_test::init();

    let ipv4 = NetworkAddress::from_octets(10, 0, 0, 1, 80);
    let updated = ipv4.with_port(443).expect("IPv4 has a port");
    assert_eq!(ipv4.port(), Ok(80));
    assert_eq!(updated.port(), Ok(443));
    assert_eq!(updated.to_string(), "10.0.0.1:443");

    let mac = NetworkAddress::from_mac([0x00, 0x1a, 0x2b, 0x3c, 0x4d, 0x5e], 0x0800);
    let updated = mac.with_protocol(0x86dd).expect("link layer addresses have a protocol");
    assert_eq!(mac.protocol(), Ok(0x0800));
    assert_eq!(updated.protocol(), Ok(0x86dd));

    let ipv6 = NetworkAddress::from_words([0xfe80, 0, 0, 0, 0, 0, 0, 1], 22);
    let updated = ipv6.with_interface_index(7).expect("IPv6 has a scope");
    assert_eq!(ipv6.interface_index(), Ok(None));
    assert_eq!(updated.interface_index(), Ok(Some(7)));
    assert_eq!(updated.port(), Ok(22));
}

/// IPv4 addresses don't have an interface, so updating it is a no-op.
#[test]
fn ipv4_interface_is_ignored() {
    netaddr_test::init();

    let ipv4 = NetworkAddress::from_octets(10, 0, 0, 1, 80);

    assert_eq!(ipv4.interface_index(), Ok(None));
    assert_eq!(ipv4.with_interface_index(2), Ok(ipv4));

    let registry = InterfaceRegistry::new(MockInterfaces::default().with_ethernet(
        "eth0",
        [0x00, 0x1a, 0x2b, 0x3c, 0x4d, 0x5e],
    ));
    let eth0 = registry.from_name("eth0").expect("mock interface exists");

    assert_eq!(ipv4.interface_with(&registry), Ok(None));
    assert_eq!(ipv4.with_interface_with(&eth0, &registry), Ok(ipv4));
}

/// Scoped addresses resolve their interface through the registry.
#[test]
fn interface_lookup() {
    netaddr_test::init();

    let registry = InterfaceRegistry::new(
        MockInterfaces::default()
            .with_loopback("lo")
            .with_ethernet("eth0", [0x00, 0x1a, 0x2b, 0x3c, 0x4d, 0x5e]),
    );
    let eth0 = registry.from_name("eth0").expect("mock interface exists");
    let eth0_index = registry.index(&eth0);
    assert_ne!(eth0_index, 0);

    let ipv6 = NetworkAddress::from_words([0xfe80, 0, 0, 0, 0, 0, 0, 1], 0);
    assert_eq!(ipv6.interface_with(&registry), Ok(None));

    let scoped = ipv6
        .with_interface_with(&eth0, &registry)
        .expect("IPv6 has a scope");
    assert_eq!(scoped.interface_index(), Ok(Some(eth0_index)));
    assert_eq!(scoped.interface_with(&registry), Ok(Some(eth0.clone())));

    let mac = NetworkAddress::from_mac([0x00, 0x1a, 0x2b, 0x3c, 0x4d, 0x5e], 0)
        .with_interface_with(&eth0, &registry)
        .expect("link layer addresses have an interface");
    assert_eq!(mac.interface_with(&registry), Ok(Some(eth0.clone())));

    // Interfaces that have gone away resolve to nothing
    let missing = ipv6.with_interface_index(999).expect("IPv6 has a scope");
    assert_eq!(missing.interface_with(&registry), Ok(None));

    // Unknown interfaces leave the address unscoped
    let unknown = NetworkInterface::new("does-not-exist");
    assert_eq!(
        ipv6.with_interface_with(&unknown, &registry)
            .expect("IPv6 has a scope")
            .interface_index(),
        Ok(None)
    );

    let unix = NetworkAddress::from_unix_socket_path("/tmp/socket");
    assert!(unix.interface_with(&registry).is_err());
    assert!(unix.with_interface_with(&eth0, &registry).is_err());
}

#[test]
fn equality_and_ordering() {
    netaddr_test::init();

    assert_eq!(
        NetworkAddress::from_octets(10, 0, 0, 1, 80),
        NetworkAddress::from_octets(10, 0, 0, 1, 80)
    );
    assert_ne!(
        NetworkAddress::from_octets(10, 0, 0, 1, 80),
        NetworkAddress::from_octets(10, 0, 0, 1, 81)
    );
    assert!(
        NetworkAddress::from_octets(10, 0, 0, 1, 80)
            < NetworkAddress::from_octets(192, 168, 1, 1, 80)
    );

    // Shorter encodings sort first, regardless of their contents
    let ipv4 = NetworkAddress::from_octets(255, 255, 255, 255, 65535);
    let mac = NetworkAddress::from_mac([0; 6], 0);
    let ipv6 = NetworkAddress::from_words([0; 8], 0);
    assert!(ipv4 < mac);
    assert!(mac < ipv6);

    let hashed: HashSet<NetworkAddress> = [ipv4, ipv4, mac, ipv6].into_iter().collect();
    assert_eq!(hashed.len(), 3);

    let ordered: Vec<NetworkAddress> = [ipv6, ipv4, mac]
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    assert_eq!(ordered, vec![ipv4, mac, ipv6]);
}

#[test]
fn std_conversions() {
    netaddr_test::init();

    let socket_addr: SocketAddr = "[fe80::1%4]:9000".parse().unwrap();
    let addr = NetworkAddress::from(socket_addr);

    assert_eq!(addr.family(), Family::Ipv6);
    assert_eq!(addr.port(), Ok(9000));
    assert_eq!(addr.interface_index(), Ok(Some(4)));
    assert_eq!(addr.socket_addr(), Some(socket_addr));
    assert_eq!(addr.ip(), Some(socket_addr.ip()));

    let ipv4 = NetworkAddress::from(Ipv4Addr::LOCALHOST);
    assert_eq!(ipv4, NetworkAddress::from_octets(127, 0, 0, 1, 0));
    assert_eq!(ipv4.socket_addr(), Some("127.0.0.1:0".parse().unwrap()));

    assert!(matches!(ipv4.payload(), Payload::Ipv4(v4) if v4.ip == Ipv4Addr::LOCALHOST));
}

#[test]
fn parse_ip_strings() {
    netaddr_test::init();

    let addr = NetworkAddress::from_ip_string("[2001:db8::1]:8080", 0, true)
        .expect("valid bracketed IPv6 address");
    assert_eq!(addr.family(), Family::Ipv6);
    assert_eq!(addr.port(), Ok(8080));
    assert_eq!(addr.to_string(), "[2001:db8::1]:8080");

    let addr = NetworkAddress::from_ip_string("192.168.1.1:8080", 0, true)
        .expect("valid IPv4 address");
    assert_eq!(addr, NetworkAddress::from_octets(192, 168, 1, 1, 8080));

    // The default port is used when the string doesn't have a port
    let addr = NetworkAddress::from_ip_string("10.0.0.1", 53, true).expect("valid IPv4 address");
    assert_eq!(addr.port(), Ok(53));
    let addr = NetworkAddress::from_ip_string("10.0.0.1:", 53, true).expect("valid IPv4 address");
    assert_eq!(addr.port(), Ok(53));

    // ... or when port parsing is disabled
    let addr =
        NetworkAddress::from_ip_string("10.0.0.1:80", 53, false).expect("valid IPv4 address");
    assert_eq!(addr.port(), Ok(53));

    // Bare IPv6 addresses don't have a port
    let addr = NetworkAddress::from_ip_string("2001:db8::1", 7, true).expect("valid IPv6 address");
    assert_eq!(addr.port(), Ok(7));
    let addr = NetworkAddress::from_ip_string("[::1]", 7, true).expect("valid IPv6 address");
    assert_eq!(addr, NetworkAddress::from_words([0, 0, 0, 0, 0, 0, 0, 1], 7));

    let addr = NetworkAddress::from_ip_string("fe80::1%2", 0, true).expect("valid scoped IPv6");
    assert_eq!(addr.interface_index(), Ok(Some(2)));

    // No name resolution
    assert_eq!(NetworkAddress::from_ip_string("localhost:80", 0, true), None);
    assert_eq!(NetworkAddress::from_ip_string("", 0, true), None);
    assert_eq!(NetworkAddress::from_ip_string("1.2.3.4:http", 0, true), None);
    assert_eq!(NetworkAddress::from_ip_string("1.2.3.4:65536", 0, true), None);
    assert_eq!(NetworkAddress::from_ip_string("fe80::1%nxmissing0", 0, true), None);

    assert_eq!(
        NetworkAddress::parse_ip("1.2.3.4:http", 0, true),
        Err(AddressParseError::InvalidPort("http".to_string()))
    );
    assert_eq!(
        NetworkAddress::parse_ip("example.com", 0, true),
        Err(AddressParseError::InvalidIpLiteral("example.com".to_string()))
    );
}

/// IPv6 scopes can name an interface, which is looked up in the registry.
#[test]
fn parse_ip_scope_interface_names() {
    netaddr_test::init();

    let registry = InterfaceRegistry::new(
        MockInterfaces::new()
            .with_loopback("lo")
            .with_ethernet("eth0", [0x00, 0x1a, 0x2b, 0x3c, 0x4d, 0x5e]),
    );

    let addr = NetworkAddress::parse_ip_with("[fe80::1%eth0]:22", 0, true, &registry)
        .expect("eth0 is a known interface");
    assert_eq!(addr.interface_index(), Ok(Some(2)));
    assert_eq!(addr.port(), Ok(22));
    assert_eq!(addr.to_string(), "[fe80::1%2]:22");

    // Numeric scopes don't need to exist
    let addr = NetworkAddress::parse_ip_with("fe80::1%42", 0, true, &registry)
        .expect("numeric scopes are accepted");
    assert_eq!(addr.interface_index(), Ok(Some(42)));

    assert_eq!(
        NetworkAddress::parse_ip_with("fe80::1%wlan0", 0, true, &registry),
        Err(AddressParseError::InvalidScope("wlan0".to_string()))
    );
    assert_eq!(
        NetworkAddress::parse_ip_with("fe80::1%", 0, true, &registry),
        Err(AddressParseError::InvalidScope(String::new()))
    );
}

/// Only 6 octet link layer addresses have a text form that parses as a MAC address.
#[test]
fn link_text_form_is_ethernet_only() {
    netaddr_test::init();

    let long = NetworkAddress::from(LinkPayload::new(
        &[0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff, 0x00, 0x11],
        0,
        0,
        0,
        0,
    ));
    assert_eq!(long.to_string(), "AA:BB:CC:DD:EE:FF:00:11");

    let parsed: NetworkAddress = long
        .to_string()
        .parse()
        .expect("8 hex groups are an IPv6 address");
    assert_eq!(parsed.family(), Family::Ipv6);

    let empty = NetworkAddress::from(LinkPayload::new(&[], 0, 0, 0, 0));
    assert!(empty.valid());
    assert_eq!(empty.to_string(), "");
    assert_eq!(
        empty.to_string().parse::<NetworkAddress>(),
        Err(AddressParseError::Unrecognized(String::new()))
    );
}

#[test]
fn parse_mac_strings() {
    netaddr_test::init();

    let addr = NetworkAddress::from_mac_string("00:1A:2B:3C:4D:5E").expect("valid MAC address");
    assert_eq!(
        addr,
        NetworkAddress::from_mac([0x00, 0x1a, 0x2b, 0x3c, 0x4d, 0x5e], 0)
    );

    // Single digit and lower case groups are accepted
    let addr = NetworkAddress::from_mac_string("0:1a:2b:3c:4d:5e").expect("valid MAC address");
    assert_eq!(addr.to_string(), "00:1A:2B:3C:4D:5E");

    assert_eq!(NetworkAddress::from_mac_string("00:1A:2B:3C:4D"), None);
    assert_eq!(NetworkAddress::from_mac_string("00:1A:2B:3C:4D:5E:6F"), None);
    assert_eq!(NetworkAddress::from_mac_string("00:1A:2B:3C:4D:5G"), None);
    assert_eq!(NetworkAddress::from_mac_string("00:1A:2B:3C:4D:"), None);
    assert_eq!(NetworkAddress::from_mac_string("001:1A:2B:3C:4D:5E"), None);
    assert_eq!(NetworkAddress::from_mac_string("+1:1A:2B:3C:4D:5E"), None);

    assert_eq!(
        NetworkAddress::parse_mac("00:1A:2B"),
        Err(AddressParseError::MacGroupCount(3))
    );
    assert_eq!(
        NetworkAddress::parse_mac("00:1A:2B:3C:4D:xyz"),
        Err(AddressParseError::InvalidMacGroup("xyz".to_string()))
    );
}

#[test]
fn from_str_dispatches_on_format() -> Result<()> {
    netaddr_test::init();

    let ipv4: NetworkAddress = "127.0.0.1:8233".parse()?;
    assert_eq!(ipv4.family(), Family::Ipv4);

    let ipv6: NetworkAddress = "[::1]:8233".parse()?;
    assert_eq!(ipv6.family(), Family::Ipv6);

    let mac: NetworkAddress = "00:1A:2B:3C:4D:5E".parse()?;
    assert_eq!(mac.family(), Family::Ethernet);

    let unix: NetworkAddress = "/run/netaddr.sock".parse()?;
    assert_eq!(unix.family(), Family::UnixSocket);

    assert_eq!(
        "127.0.0.1:99999".parse::<NetworkAddress>(),
        Err(AddressParseError::InvalidPort("99999".to_string()))
    );
    assert_eq!(
        "relative/path".parse::<NetworkAddress>(),
        Err(AddressParseError::Unrecognized("relative/path".to_string()))
    );
    assert!(matches!(
        format!("/{}", "a".repeat(MAX_UNIX_PATH_LEN)).parse::<NetworkAddress>(),
        Err(AddressParseError::InvalidUnixPath(AddressError::PathTooLong { .. }))
    ));

    Ok(())
}

/// Decode the native test vectors, and make sure they re-encode to the same bytes.
#[cfg(target_endian = "little")]
#[test]
fn native_vectors_round_trip() {
    netaddr_test::init();

    for vector in netaddr_test::vectors::NATIVE_ADDR_VECTORS.iter() {
        let addr = NetworkAddress::from_native(&vector.bytes, vector.bytes.len());

        assert!(addr.valid(), "{}: {:?}", vector.description, addr);
        assert_eq!(addr.to_string(), vector.display, "{}", vector.description);
        assert_eq!(
            hex::encode(addr.native().as_bytes()),
            hex::encode(&vector.bytes),
            "{}",
            vector.description,
        );
    }
}

#[cfg(target_endian = "little")]
#[test]
fn native_vector_fields() {
    netaddr_test::init();

    let vectors = &netaddr_test::vectors::NATIVE_ADDR_VECTORS;

    let ethernet = vectors
        .iter()
        .find(|vector| vector.description.starts_with("Ethernet"))
        .expect("Ethernet vector exists");
    let addr = NetworkAddress::from_native(&ethernet.bytes, ethernet.bytes.len());

    assert_eq!(addr.protocol(), Ok(0x0800));
    assert_eq!(addr.interface_index(), Ok(Some(2)));
    match addr.payload() {
        Payload::Ethernet(link) => {
            assert_eq!(link.hatype, 1);
            assert_eq!(link.pkttype, 0);
        }
        payload => panic!("unexpected payload: {payload:?}"),
    }

    let scoped = vectors
        .iter()
        .find(|vector| vector.description.contains("scope id"))
        .expect("scoped IPv6 vector exists");
    let addr = NetworkAddress::from_native(&scoped.bytes, scoped.bytes.len());
    assert_eq!(addr.interface_index(), Ok(Some(2)));
    assert_eq!(addr.port(), Ok(0));
}

/// Unsupported families decode to invalid addresses, without failing.
#[cfg(target_endian = "little")]
#[test]
fn unrecognized_native_vectors() {
    netaddr_test::init();

    for vector in netaddr_test::vectors::UNRECOGNIZED_NATIVE_ADDR_VECTORS.iter() {
        let addr = NetworkAddress::from_native(&vector.bytes, vector.bytes.len());

        assert!(!addr.valid(), "{}: {:?}", vector.description, addr);
        assert_eq!(addr.to_string(), vector.display, "{}", vector.description);
        assert_eq!(addr.native().len(), SOCKADDR_SIZE, "{}", vector.description);
    }

    let netlink = &netaddr_test::vectors::UNRECOGNIZED_NATIVE_ADDR_VECTORS[0];
    let addr = NetworkAddress::from_native(&netlink.bytes, netlink.bytes.len());
    assert_eq!(addr.native_family(), libc::AF_NETLINK as u16);
    assert_eq!(addr.native().as_bytes(), &netlink.bytes[..]);
}

/// Decoding reads at most `max_len` bytes, and at most the native structure size.
#[cfg(target_endian = "little")]
#[test]
fn native_length_limits() {
    netaddr_test::init();

    let ipv4 = NetworkAddress::from_octets(192, 168, 1, 1, 8080);
    let raw = ipv4.native();

    // Extra trailing bytes are ignored
    let mut padded = raw.as_bytes().to_vec();
    padded.extend_from_slice(&[0xff; 32]);
    assert_eq!(NetworkAddress::from_native(&padded, padded.len()), ipv4);
    assert_eq!(NetworkAddress::from(raw), ipv4);

    // Missing bytes are zero
    let truncated = NetworkAddress::from_native(raw.as_bytes(), 4);
    assert_eq!(truncated, NetworkAddress::from_octets(0, 0, 0, 0, 8080));

    // A too-short buffer has no family
    assert!(!NetworkAddress::from_native(raw.as_bytes(), 1).valid());
    assert!(!NetworkAddress::from_native(&[], 0).valid());

    // A link layer length larger than the address field is clamped
    let mut oversized = NetworkAddress::from_mac([1, 2, 3, 4, 5, 6], 0)
        .native()
        .storage()
        .to_vec();
    oversized[11] = 200;
    let clamped = NetworkAddress::from_native(&oversized, oversized.len());
    assert_eq!(clamped.mac().map(<[u8]>::len), Ok(8));
}

/// Invalid addresses serialize as an empty string, and deserialize from it.
#[test]
fn serde_invalid_address() -> Result<()> {
    netaddr_test::init();

    #[derive(serde::Serialize, serde::Deserialize)]
    struct Wrapper {
        addr: NetworkAddress,
    }

    let text = toml::to_string(&Wrapper {
        addr: NetworkAddress::default(),
    })?;
    assert_eq!(text.trim(), r#"addr = """#);

    let parsed: Wrapper = toml::from_str(&text)?;
    assert!(!parsed.addr.valid());

    let parsed: Wrapper = toml::from_str(r#"addr = "[::1]:8233""#)?;
    assert_eq!(parsed.addr.port(), Ok(8233));

    assert!(toml::from_str::<Wrapper>(r#"addr = "not an address""#).is_err());

    Ok(())
}
