//! Text formats for [`NetworkAddress`].
//!
//! Only numeric forms are supported: parsing never does name resolution.

use std::{
    fmt,
    net::{IpAddr, Ipv4Addr, Ipv6Addr},
    str::FromStr,
};

use itertools::Itertools;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    address::{
        payload::{Ipv4Payload, Ipv6Payload, LinkPayload},
        NetworkAddress, Payload,
    },
    constants::ETHERNET_ADDR_LEN,
    error::AddressParseError,
    interface::{InterfaceProvider, InterfaceRegistry},
};

impl NetworkAddress {
    /// Parses a numeric IPv4 or IPv6 address, with an optional port.
    ///
    /// Returns `None` if `text` is not a numeric IP address.
    /// See [`NetworkAddress::parse_ip`] for the accepted formats.
    pub fn from_ip_string(
        text: &str,
        default_port: u16,
        parse_port_in_string: bool,
    ) -> Option<NetworkAddress> {
        NetworkAddress::parse_ip(text, default_port, parse_port_in_string).ok()
    }

    /// Parses a numeric IPv4 or IPv6 address, with an optional port.
    ///
    /// Accepts `ip`, `ip:port`, `ipv6`, `[ipv6]`, and `[ipv6]:port`.
    /// IPv6 addresses can have a scope suffix, which is either an interface
    /// index like `fe80::1%2`, or a host interface name like `fe80::1%eth0`.
    ///
    /// If `parse_port_in_string` is false, or `text` has an empty port or no port,
    /// the address has `default_port`. Otherwise, the port in `text` must be
    /// a decimal 16-bit number.
    pub fn parse_ip(
        text: &str,
        default_port: u16,
        parse_port_in_string: bool,
    ) -> Result<NetworkAddress, AddressParseError> {
        NetworkAddress::parse_ip_with(
            text,
            default_port,
            parse_port_in_string,
            &InterfaceRegistry::system(),
        )
    }

    /// Parses a numeric IP address like [`NetworkAddress::parse_ip`], looking up
    /// IPv6 scope interface names in `registry`.
    pub fn parse_ip_with<P: InterfaceProvider>(
        text: &str,
        default_port: u16,
        parse_port_in_string: bool,
        registry: &InterfaceRegistry<P>,
    ) -> Result<NetworkAddress, AddressParseError> {
        let (host, port) = split_host_port(text);
        let host = strip_brackets(host);

        let port = match port {
            Some(port) if parse_port_in_string && !port.is_empty() => port
                .parse::<u16>()
                .map_err(|_| AddressParseError::InvalidPort(port.to_string()))?,
            _ => default_port,
        };

        if let Ok(ip) = host.parse::<Ipv4Addr>() {
            return Ok(Ipv4Payload { ip, port }.into());
        }

        let (ip, scope_id) = match host.split_once('%') {
            Some((ip, scope)) => (ip, parse_scope(scope, registry)?),
            None => (host, 0),
        };

        let ip = ip
            .parse::<Ipv6Addr>()
            .map_err(|_| AddressParseError::InvalidIpLiteral(host.to_string()))?;

        Ok(Ipv6Payload {
            ip,
            port,
            flowinfo: 0,
            scope_id,
        }
        .into())
    }

    /// Parses a colon-separated Ethernet MAC address, like `00:1A:2B:3C:4D:5E`.
    ///
    /// Returns `None` if `text` is not a MAC address.
    pub fn from_mac_string(text: &str) -> Option<NetworkAddress> {
        NetworkAddress::parse_mac(text).ok()
    }

    /// Parses a colon-separated Ethernet MAC address.
    ///
    /// There must be exactly six groups of one or two hex digits.
    /// The address has protocol zero, and no interface.
    pub fn parse_mac(text: &str) -> Result<NetworkAddress, AddressParseError> {
        let groups: Vec<&str> = text.split(':').collect();

        if groups.len() != ETHERNET_ADDR_LEN {
            return Err(AddressParseError::MacGroupCount(groups.len()));
        }

        let mut mac = [0; ETHERNET_ADDR_LEN];
        for (octet, group) in mac.iter_mut().zip(groups) {
            *octet = parse_mac_group(group)?;
        }

        Ok(NetworkAddress::from_mac(mac, 0))
    }
}

/// Splits `text` into a host and an optional port.
///
/// The port follows the last colon, if it is the only colon, or if it comes
/// after a closing bracket. Otherwise the whole text is the host.
fn split_host_port(text: &str) -> (&str, Option<&str>) {
    let Some(colon) = text.rfind(':') else {
        return (text, None);
    };

    let only_colon = text.find(':') == Some(colon);
    let after_bracket = text[..colon].contains(']');

    if only_colon || after_bracket {
        (&text[..colon], Some(&text[colon + 1..]))
    } else {
        (text, None)
    }
}

/// Removes one matching pair of surrounding brackets from `host`.
fn strip_brackets(host: &str) -> &str {
    host.strip_prefix('[')
        .and_then(|host| host.strip_suffix(']'))
        .unwrap_or(host)
}

fn parse_mac_group(group: &str) -> Result<u8, AddressParseError> {
    let is_hex = (1..=2).contains(&group.len()) && group.bytes().all(|b| b.is_ascii_hexdigit());

    if !is_hex {
        return Err(AddressParseError::InvalidMacGroup(group.to_string()));
    }

    u8::from_str_radix(group, 16)
        .map_err(|_| AddressParseError::InvalidMacGroup(group.to_string()))
}

/// Parses an IPv6 scope, which is an interface index or an interface name.
fn parse_scope<P: InterfaceProvider>(
    scope: &str,
    registry: &InterfaceRegistry<P>,
) -> Result<u32, AddressParseError> {
    if let Ok(index) = scope.parse::<u32>() {
        return Ok(index);
    }

    registry
        .from_name(scope)
        .map(|interface| registry.index(&interface))
        .filter(|index| *index != 0)
        .ok_or_else(|| AddressParseError::InvalidScope(scope.to_string()))
}

impl fmt::Display for Ipv4Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.port == 0 {
            write!(f, "{}", self.ip)
        } else {
            write!(f, "{}:{}", self.ip, self.port)
        }
    }
}

impl fmt::Display for Ipv6Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let host = if self.scope_id == 0 {
            self.ip.to_string()
        } else {
            format!("{}%{}", self.ip, self.scope_id)
        };

        if self.port == 0 {
            f.write_str(&host)
        } else {
            write!(f, "[{host}]:{}", self.port)
        }
    }
}

impl fmt::Display for LinkPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let octets = self
            .octets()
            .iter()
            .format_with(":", |octet, f| f(&format_args!("{octet:02X}")));

        write!(f, "{octets}")
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Ipv4(v4) => fmt::Display::fmt(v4, f),
            Payload::Ipv6(v6) => fmt::Display::fmt(v6, f),
            Payload::Ethernet(link) => fmt::Display::fmt(link, f),
            Payload::UnixSocket(unix) => write!(f, "{}", unix.path().display()),
            Payload::Unspecified(_) => Ok(()),
        }
    }
}

impl fmt::Display for NetworkAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.payload(), f)
    }
}

impl FromStr for NetworkAddress {
    type Err = AddressParseError;

    /// Parses an IP address with an optional port, a MAC address,
    /// or an absolute UNIX socket path.
    ///
    /// The [`Display`](fmt::Display) form of IP addresses, Ethernet MAC
    /// addresses, and UTF-8 socket paths parses back to the same family and
    /// logical fields. Other link layer addresses don't round-trip: an 8 octet
    /// address has the same text form as an IPv6 address.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let ip_error = match NetworkAddress::parse_ip(text, 0, true) {
            Ok(addr) => return Ok(addr),
            Err(error) => error,
        };

        if let Ok(addr) = NetworkAddress::parse_mac(text) {
            return Ok(addr);
        }

        if text.starts_with('/') {
            return Ok(NetworkAddress::try_from_unix_socket_path(text)?);
        }

        // Report invalid ports and scopes on otherwise valid IP addresses
        match ip_error {
            AddressParseError::InvalidPort(_) | AddressParseError::InvalidScope(_)
                if looks_like_ip(text) =>
            {
                Err(ip_error)
            }
            _ => Err(AddressParseError::Unrecognized(text.to_string())),
        }
    }
}

/// Does the host part of `text` parse as an IP address, ignoring any scope?
fn looks_like_ip(text: &str) -> bool {
    let (host, _) = split_host_port(text);
    let host = strip_brackets(host);
    let ip = host.split_once('%').map_or(host, |(ip, _)| ip);

    ip.parse::<IpAddr>().is_ok()
}

impl Serialize for NetworkAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NetworkAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;

        // Invalid addresses display as an empty string
        if text.is_empty() {
            return Ok(NetworkAddress::default());
        }

        text.parse().map_err(de::Error::custom)
    }
}
