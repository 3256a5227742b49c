//! Mock [`InterfaceProvider`] for use in tests.

use std::{collections::HashSet, io};

use crate::{
    address::{LinkPayload, NetworkAddress, RawSockAddr},
    interface::{InterfaceFlags, InterfaceProvider, InterfaceRecord},
};

/// The ARP hardware type for Ethernet, `ARPHRD_ETHER`.
const ARPHRD_ETHER: u16 = 1;

/// The ARP hardware type for loopback, `ARPHRD_LOOPBACK`.
const ARPHRD_LOOPBACK: u16 = 772;

/// A fixed [`InterfaceProvider`], built from a list of records.
///
/// Interfaces get indexes in the order they are first added, starting at 1,
/// unless an index is set using [`MockInterfaces::with_index`].
#[derive(Clone, Debug, Default)]
pub struct MockInterfaces {
    /// The records returned by `records`, in order.
    records: Vec<InterfaceRecord>,

    /// Interface names and their indexes.
    indexes: Vec<(String, u32)>,

    /// The names of wireless interfaces.
    wireless: HashSet<String>,

    /// Return an error from `records`.
    failing: bool,
}

impl MockInterfaces {
    /// Creates a new [`MockInterfaces`] with no interfaces.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a provider whose interface list always fails.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Adds a record for `address` on the interface `name`.
    pub fn with_record(
        self,
        name: &str,
        flags: InterfaceFlags,
        address: impl Into<Option<NetworkAddress>>,
    ) -> Self {
        let address = address.into().map(|addr| addr.native());

        self.with_raw_record(name, flags, address)
    }

    /// Adds a record with a raw native `address` on the interface `name`.
    ///
    /// Use this method to add addresses in unsupported families.
    pub fn with_raw_record(
        mut self,
        name: &str,
        flags: InterfaceFlags,
        address: Option<RawSockAddr>,
    ) -> Self {
        self.assign_index(name);
        self.records.push(InterfaceRecord {
            name: name.to_string(),
            flags,
            address,
        });

        self
    }

    /// Adds a loopback interface called `name`, with IPv4, IPv6, and link layer
    /// loopback addresses.
    pub fn with_loopback(mut self, name: &str) -> Self {
        let flags = InterfaceFlags::UP | InterfaceFlags::LOOPBACK | InterfaceFlags::RUNNING;
        let index = self.assign_index(name);

        let link = LinkPayload::new(&[0; 6], 0, index_as_ifindex(index), ARPHRD_LOOPBACK, 0);

        self.with_record(name, flags, NetworkAddress::from(link))
            .with_record(name, flags, NetworkAddress::from_octets(127, 0, 0, 1, 0))
            .with_record(
                name,
                flags,
                NetworkAddress::from_words([0, 0, 0, 0, 0, 0, 0, 1], 0),
            )
    }

    /// Adds an Ethernet interface called `name`, with the link layer address `mac`.
    pub fn with_ethernet(mut self, name: &str, mac: [u8; 6]) -> Self {
        let flags = InterfaceFlags::UP | InterfaceFlags::RUNNING | InterfaceFlags::MULTICAST;
        let index = self.assign_index(name);

        let link = LinkPayload::new(&mac, 0, index_as_ifindex(index), ARPHRD_ETHER, 0);

        self.with_record(name, flags, NetworkAddress::from(link))
    }

    /// Sets the index of the interface `name` to `index`.
    pub fn with_index(mut self, name: &str, index: u32) -> Self {
        match self.indexes.iter_mut().find(|(known, _)| known == name) {
            Some((_, known_index)) => *known_index = index,
            None => self.indexes.push((name.to_string(), index)),
        }

        self
    }

    /// Marks the interface `name` as wireless.
    pub fn with_wireless(mut self, name: &str) -> Self {
        self.wireless.insert(name.to_string());
        self
    }

    /// Returns the index of `name`, assigning the next free index if it doesn't have one.
    fn assign_index(&mut self, name: &str) -> u32 {
        if let Some(index) = self.name_to_index(name) {
            return index;
        }

        let index = self
            .indexes
            .iter()
            .map(|(_, index)| *index)
            .max()
            .unwrap_or_default()
            + 1;
        self.indexes.push((name.to_string(), index));

        index
    }
}

fn index_as_ifindex(index: u32) -> i32 {
    i32::try_from(index).unwrap_or_default()
}

impl InterfaceProvider for MockInterfaces {
    fn records(&self) -> io::Result<Vec<InterfaceRecord>> {
        if self.failing {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "mock interface list failure",
            ));
        }

        Ok(self.records.clone())
    }

    fn name_to_index(&self, name: &str) -> Option<u32> {
        self.indexes
            .iter()
            .find(|(known, _)| known == name)
            .map(|(_, index)| *index)
    }

    fn index_to_name(&self, index: u32) -> Option<String> {
        self.indexes
            .iter()
            .find(|(_, known)| *known == index)
            .map(|(name, _)| name.clone())
    }

    fn is_wireless(&self, name: &str) -> bool {
        self.wireless.contains(name)
    }
}
