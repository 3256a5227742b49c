//! Socket address values and host network interfaces.
//!
//! ## Address Design
//!
//! Operating systems use a different binary structure for each socket address
//! family, with different sizes and byte orders. `netaddr` represents all the
//! families it supports with a single immutable value type, [`NetworkAddress`]:
//!
//! - IPv4 addresses, with a port,
//! - IPv6 addresses, with a port and an interface scope,
//! - link layer (MAC) addresses, with an Ethernet protocol and an interface index,
//! - UNIX domain socket paths.
//!
//! Each family has its own strongly typed [`Payload`] variant, with host order
//! fields. Family-specific operations `match` on the payload, so the compiler
//! checks that every family is handled. Operations that don't apply to a family
//! return a [`WrongFamilyError`], rather than silently returning a default.
//!
//! The native OS encoding is only produced and consumed in the
//! [`address::native`] module, by [`NetworkAddress::native`] and
//! [`NetworkAddress::from_native`]. The encoded bytes can be passed unmodified
//! to socket system calls. Addresses compare and hash by their native encoding.
//!
//! ## Text Formats
//!
//! [`NetworkAddress`] implements [`Display`](std::fmt::Display) and
//! [`FromStr`](std::str::FromStr), and serializes as a string. IP addresses
//! are parsed from numeric literals only: `netaddr` never does DNS lookups.
//! [`NetworkAddress::from_ip_string`] and [`NetworkAddress::from_mac_string`]
//! parse a specific family.
//!
//! ## Interfaces
//!
//! [`NetworkInterface`] is a name handle for a host network interface.
//! An [`InterfaceRegistry`] answers queries about interfaces, using an
//! [`InterfaceProvider`] to read the current interface list. The default
//! provider, [`SystemInterfaces`], asks the OS on every query, so results are
//! never stale. Tests can substitute a fixed provider.
//!
//! `netaddr` uses the Linux socket address layouts, including `AF_PACKET`
//! link layer addresses.

// Standard lints
#![warn(missing_docs)]
#![allow(clippy::try_err)]
#![deny(clippy::await_holding_lock)]
#![forbid(unsafe_code)]

#[macro_use]
extern crate tracing;

pub mod address;
pub mod config;
pub mod constants;
mod error;
pub mod interface;

pub use crate::{
    address::{Family, NetworkAddress, Payload},
    config::Config,
    error::{AddressError, AddressParseError, WrongFamilyError},
    interface::{
        InterfaceFlags, InterfaceProvider, InterfaceRecord, InterfaceRegistry, InterfaceType,
        NetworkInterface, SystemInterfaces,
    },
};

#[cfg(any(test, feature = "proptest-impl"))]
pub use crate::interface::MockInterfaces;
