//! Configuration for host interface queries.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SYSFS_NET_ROOT;


/// Configuration for [`SystemInterfaces`](crate::SystemInterfaces).
///
/// Missing fields use their default values, and unknown fields are rejected.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    /// The sysfs directory that contains one entry per network interface.
    ///
    /// An interface is wireless if its entry has a `wireless` subdirectory.
    pub sysfs_net_root: PathBuf,

    /// Whether to check sysfs for wireless interfaces.
    ///
    /// If this is false, wireless interfaces are reported as Ethernet interfaces.
    pub probe_wireless: bool,
}

impl Config {
    /// Returns the sysfs wireless directory for the interface `name`.
    ///
    /// Returns `None` for names that aren't a single path component.
    pub fn wireless_dir(&self, name: &str) -> Option<PathBuf> {
        if name.is_empty() || name == "." || name == ".." || name.contains('/') {
            return None;
        }

        Some(self.sysfs_net_root.join(name).join("wireless"))
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            sysfs_net_root: PathBuf::from(DEFAULT_SYSFS_NET_ROOT),
            probe_wireless: true,
        }
    }
}
