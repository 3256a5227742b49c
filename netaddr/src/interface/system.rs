//! Interface queries for the host operating system.

use std::{
    io,
    net::{SocketAddrV4, SocketAddrV6},
};

use nix::{
    ifaddrs::getifaddrs,
    net::if_::{if_nameindex, if_nametoindex},
    sys::socket::SockaddrStorage,
};

use crate::{
    address::{LinkPayload, NetworkAddress, RawSockAddr},
    interface::{InterfaceFlags, InterfaceProvider, InterfaceRecord},
    Config,
};

/// An [`InterfaceProvider`] that reads the host's interfaces.
///
/// Uses `getifaddrs(3)` for the interface list, `if_nametoindex(3)` and
/// `if_nameindex(3)` for index lookups, and sysfs for wireless detection.
#[derive(Clone, Debug, Default)]
pub struct SystemInterfaces {
    config: Config,
}

impl SystemInterfaces {
    /// Returns a provider that uses `config`.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Returns the provider configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl InterfaceProvider for SystemInterfaces {
    fn records(&self) -> io::Result<Vec<InterfaceRecord>> {
        // The OS list is freed when the iterator is dropped
        let records = getifaddrs()?
            .map(|entry| InterfaceRecord {
                flags: InterfaceFlags::from_bits_truncate(entry.flags.bits() as u32),
                address: entry.address.as_ref().and_then(raw_sockaddr),
                name: entry.interface_name,
            })
            .collect();

        Ok(records)
    }

    fn name_to_index(&self, name: &str) -> Option<u32> {
        match if_nametoindex(name) {
            Ok(0) => None,
            Ok(index) => Some(index),
            Err(error) => {
                trace!(?error, ?name, "interface name lookup failed");
                None
            }
        }
    }

    fn index_to_name(&self, index: u32) -> Option<String> {
        let interfaces = match if_nameindex() {
            Ok(interfaces) => interfaces,
            Err(error) => {
                warn!(?error, "failed to read host interface indexes");
                return None;
            }
        };

        interfaces
            .iter()
            .find(|interface| interface.index() == index)
            .map(|interface| interface.name().to_string_lossy().into_owned())
    }

    fn is_wireless(&self, name: &str) -> bool {
        if !self.config.probe_wireless {
            return false;
        }

        self.config
            .wireless_dir(name)
            .map(|dir| dir.is_dir())
            .unwrap_or(false)
    }
}

/// Re-encodes a typed `nix` socket address in its native form.
///
/// Returns `None` for families that netaddr doesn't support.
fn raw_sockaddr(addr: &SockaddrStorage) -> Option<RawSockAddr> {
    let addr = if let Some(v4) = addr.as_sockaddr_in() {
        NetworkAddress::from(SocketAddrV4::from(*v4))
    } else if let Some(v6) = addr.as_sockaddr_in6() {
        NetworkAddress::from(SocketAddrV6::from(*v6))
    } else if let Some(link) = addr.as_link_addr() {
        let octets = link.addr().unwrap_or_default();
        let halen = link.halen().min(octets.len());

        NetworkAddress::from(LinkPayload::new(
            &octets[..halen],
            // `nix` returns the protocol in network byte order
            u16::from_be(link.protocol()),
            i32::try_from(link.ifindex()).unwrap_or_default(),
            link.hatype(),
            link.pkttype(),
        ))
    } else {
        return None;
    };

    Some(addr.native())
}
