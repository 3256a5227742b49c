//! Interface queries, answered from an [`InterfaceProvider`].

use itertools::Itertools;

use crate::{
    address::{Family, NetworkAddress},
    interface::{
        InterfaceProvider, InterfaceRecord, InterfaceType, NetworkInterface, SystemInterfaces,
    },
};

/// Answers queries about host network interfaces.
///
/// Every query reads the current interface list from the provider,
/// so results reflect interfaces that have been added or removed since
/// the registry was created.
///
/// If the provider fails to list interfaces, the failure is logged, and the
/// query behaves as if there are no interfaces.
#[derive(Clone, Debug, Default)]
pub struct InterfaceRegistry<P = SystemInterfaces> {
    provider: P,
}

impl InterfaceRegistry<SystemInterfaces> {
    /// Returns a registry for the host's interfaces, with the default configuration.
    pub fn system() -> Self {
        InterfaceRegistry::new(SystemInterfaces::default())
    }
}

impl<P> InterfaceRegistry<P>
where
    P: InterfaceProvider,
{
    /// Returns a registry that reads interfaces from `provider`.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Returns the interface provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Returns the interfaces that have an IP or link layer address.
    ///
    /// Each interface is returned once, in the order it first appears in the
    /// interface list.
    pub fn all_interfaces(&self) -> Vec<NetworkInterface> {
        self.records()
            .into_iter()
            .filter(|record| record.family().is_interface_family())
            .map(|record| record.name)
            .unique()
            .map(NetworkInterface::new)
            .collect()
    }

    /// Returns the interface called `name`, if it exists.
    pub fn from_name(&self, name: &str) -> Option<NetworkInterface> {
        if name.is_empty() {
            return None;
        }

        self.provider
            .name_to_index(name)
            .filter(|index| *index != 0)
            .map(|_| NetworkInterface::new(name))
    }

    /// Returns the interface with `index`, if it exists.
    pub fn from_index(&self, index: u32) -> Option<NetworkInterface> {
        if index == 0 {
            return None;
        }

        self.provider
            .index_to_name(index)
            .filter(|name| !name.is_empty())
            .map(NetworkInterface::new)
    }

    /// Returns the index of `interface`, or zero if it doesn't exist.
    pub fn index(&self, interface: &NetworkInterface) -> u32 {
        if !interface.is_valid() {
            return 0;
        }

        self.provider
            .name_to_index(interface.name())
            .unwrap_or_default()
    }

    /// Returns the link type of `interface`.
    ///
    /// The loopback flag takes precedence over every other check.
    /// Otherwise, interfaces that the provider reports as wireless are
    /// [`InterfaceType::Wifi`], other interfaces with a link layer address are
    /// [`InterfaceType::Ethernet`], and the rest are [`InterfaceType::Unknown`].
    pub fn interface_type(&self, interface: &NetworkInterface) -> InterfaceType {
        if !interface.is_valid() {
            return InterfaceType::Unknown;
        }

        let mut has_mac = false;

        for record in self.records_for(interface) {
            let family = record.family();

            if record.is_loopback() {
                return InterfaceType::Loopback;
            }

            has_mac |= family == Family::Ethernet;

            if family.is_interface_family() && self.provider.is_wireless(interface.name()) {
                return InterfaceType::Wifi;
            }
        }

        if has_mac {
            InterfaceType::Ethernet
        } else {
            InterfaceType::Unknown
        }
    }

    /// Returns an IP address of `interface`.
    ///
    /// Returns the first address in the preferred family, if there is one.
    /// Otherwise, returns the last address in the other IP family.
    pub fn ip_address(
        &self,
        interface: &NetworkInterface,
        prefer_ipv6: bool,
    ) -> Option<NetworkAddress> {
        let preferred = if prefer_ipv6 {
            Family::Ipv6
        } else {
            Family::Ipv4
        };

        let mut fallback = None;

        for record in self.records_for(interface) {
            let family = record.family();

            if !family.is_ip() {
                continue;
            }

            let Some(addr) = record.to_address() else {
                continue;
            };

            if family == preferred {
                if addr.valid() {
                    return Some(addr);
                }
            } else {
                fallback = Some(addr);
            }
        }

        fallback
    }

    /// Returns the first link layer address of `interface`.
    pub fn mac_address(&self, interface: &NetworkInterface) -> Option<NetworkAddress> {
        self.addresses(interface, Family::Ethernet).into_iter().next()
    }

    /// Returns the addresses of `interface` in `family`, in OS order.
    ///
    /// [`Family::Unspecified`] returns the addresses in all supported families.
    pub fn addresses(&self, interface: &NetworkInterface, family: Family) -> Vec<NetworkAddress> {
        self.records_for(interface)
            .into_iter()
            .filter(|record| family == Family::Unspecified || record.family() == family)
            .filter_map(|record| record.to_address())
            .filter(NetworkAddress::valid)
            .collect()
    }

    /// Returns the records for `interface` that have an address.
    fn records_for(&self, interface: &NetworkInterface) -> Vec<InterfaceRecord> {
        let mut records = self.records();
        records.retain(|record| record.name == interface.name() && record.address.is_some());

        records
    }

    /// Returns the provider's records, or no records if the provider fails.
    fn records(&self) -> Vec<InterfaceRecord> {
        match self.provider.records() {
            Ok(records) => {
                trace!(count = records.len(), "read host interface records");
                records
            }
            Err(error) => {
                warn!(?error, "failed to read host network interfaces");
                Vec::new()
            }
        }
    }
}
