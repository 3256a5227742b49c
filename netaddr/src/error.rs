//! Errors returned by address construction, parsing, and family-specific accessors.

use thiserror::Error;

use crate::address::Family;

/// A family-specific operation was used on an address in a family that doesn't
/// support it.
///
/// This is a caller bug: check [`NetworkAddress::family`] before using
/// family-specific accessors.
///
/// [`NetworkAddress::family`]: crate::NetworkAddress::family
#[derive(Error, Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[error("{operation} is not supported for {family} addresses")]
pub struct WrongFamilyError {
    /// The family of the address the operation was used on.
    pub family: Family,

    /// The name of the unsupported operation.
    pub operation: &'static str,
}

impl WrongFamilyError {
    pub(crate) fn new(family: Family, operation: &'static str) -> Self {
        Self { family, operation }
    }
}

/// An error parsing an address from text.
#[derive(Error, Clone, Debug, Eq, PartialEq, Hash)]
pub enum AddressParseError {
    /// The host part was not a numeric IPv4 or IPv6 address.
    #[error("invalid numeric IP address: {0:?}")]
    InvalidIpLiteral(String),

    /// The port part was not a decimal 16-bit number.
    #[error("invalid port: {0:?}")]
    InvalidPort(String),

    /// The IPv6 scope suffix was not a decimal 32-bit interface index.
    #[error("invalid IPv6 scope id: {0:?}")]
    InvalidScope(String),

    /// A MAC address did not have six colon-separated groups.
    #[error("MAC address must have 6 groups, found {0}")]
    MacGroupCount(usize),

    /// A MAC address group was not one or two hex digits.
    #[error("invalid MAC address group: {0:?}")]
    InvalidMacGroup(String),

    /// An absolute path that can't be used as a UNIX socket address.
    #[error("invalid UNIX socket path: {0}")]
    InvalidUnixPath(#[from] AddressError),

    /// The text was not an IP address, MAC address, or absolute UNIX socket path.
    #[error("unrecognised address format: {0:?}")]
    Unrecognized(String),
}

/// An error constructing an address from its components.
#[derive(Error, Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum AddressError {
    /// A UNIX domain socket path does not fit in the native encoding.
    #[error("UNIX socket path is {len} bytes, but the maximum is {max} bytes")]
    PathTooLong {
        /// The length of the rejected path.
        len: usize,
        /// The longest path that can be encoded.
        max: usize,
    },

    /// A UNIX domain socket path with an embedded NUL byte.
    ///
    /// The native encoding is NUL-terminated, so the path would be truncated.
    #[error("UNIX socket path contains a NUL byte")]
    PathContainsNul,
}
