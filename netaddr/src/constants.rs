//! Definitions of constants.
//!
//! The sizes and offsets are the Linux native socket address layouts.

/// The size of `sockaddr_storage`, which can hold any native socket address.
pub const SOCKADDR_STORAGE_SIZE: usize = 128;

/// The size of the generic `sockaddr` header.
///
/// Addresses in unrecognised families keep this many bytes of their encoding.
pub const SOCKADDR_SIZE: usize = 16;

/// The size of `sockaddr_in`, including `sin_zero`.
pub const SOCKADDR_IN_SIZE: usize = 16;

/// The size of `sockaddr_in6`.
pub const SOCKADDR_IN6_SIZE: usize = 28;

/// The size of `sockaddr_ll`, with a full `sll_addr` field.
pub const SOCKADDR_LL_SIZE: usize = 20;

/// The offset of `sll_addr` in `sockaddr_ll`.
///
/// The effective length of a link layer address is this header plus `sll_halen`.
pub const SOCKADDR_LL_HEADER_SIZE: usize = 12;

/// The capacity of the `sll_addr` field.
///
/// Longer hardware addresses are truncated to this length.
pub const LINK_ADDR_CAPACITY: usize = 8;

/// The length of an Ethernet MAC address.
pub const ETHERNET_ADDR_LEN: usize = 6;

/// The offset of `sun_path` in `sockaddr_un`.
pub const SUN_PATH_OFFSET: usize = 2;

/// The capacity of the `sun_path` field, including the terminating NUL.
pub const SUN_PATH_CAPACITY: usize = 108;

/// The size of `sockaddr_un`.
pub const SOCKADDR_UN_SIZE: usize = SUN_PATH_OFFSET + SUN_PATH_CAPACITY;

/// The longest UNIX domain socket path that can be encoded.
///
/// Longer paths are truncated by [`NetworkAddress::from_unix_socket_path`],
/// and rejected by [`NetworkAddress::try_from_unix_socket_path`].
///
/// [`NetworkAddress::from_unix_socket_path`]: crate::NetworkAddress::from_unix_socket_path
/// [`NetworkAddress::try_from_unix_socket_path`]: crate::NetworkAddress::try_from_unix_socket_path
pub const MAX_UNIX_PATH_LEN: usize = SUN_PATH_CAPACITY - 1;

/// The default directory containing one sysfs entry per network interface.
pub const DEFAULT_SYSFS_NET_ROOT: &str = "/sys/class/net";

/// Native address family identifiers, as stored in the first two bytes of
/// every socket address.
pub mod family {
    /// `AF_UNSPEC`
    pub const UNSPEC: u16 = libc::AF_UNSPEC as u16;
    /// `AF_UNIX`
    pub const UNIX: u16 = libc::AF_UNIX as u16;
    /// `AF_INET`
    pub const INET: u16 = libc::AF_INET as u16;
    /// `AF_INET6`
    pub const INET6: u16 = libc::AF_INET6 as u16;
    /// `AF_PACKET`, the Linux link layer family.
    pub const PACKET: u16 = libc::AF_PACKET as u16;
}

#[cfg(test)]
mod tests {
    use static_assertions::{const_assert, const_assert_eq};

    use super::*;

    // The layouts must match the libc definitions used by socket system calls.
    const_assert_eq!(SOCKADDR_STORAGE_SIZE, std::mem::size_of::<libc::sockaddr_storage>());
    const_assert_eq!(SOCKADDR_SIZE, std::mem::size_of::<libc::sockaddr>());
    const_assert_eq!(SOCKADDR_IN_SIZE, std::mem::size_of::<libc::sockaddr_in>());
    const_assert_eq!(SOCKADDR_IN6_SIZE, std::mem::size_of::<libc::sockaddr_in6>());
    const_assert_eq!(SOCKADDR_LL_SIZE, std::mem::size_of::<libc::sockaddr_ll>());
    const_assert_eq!(SOCKADDR_UN_SIZE, std::mem::size_of::<libc::sockaddr_un>());

    // The longest path still has room for its terminator.
    const_assert!(SUN_PATH_OFFSET + MAX_UNIX_PATH_LEN + 1 <= SOCKADDR_UN_SIZE);
    const_assert!(SOCKADDR_UN_SIZE <= SOCKADDR_STORAGE_SIZE);
}
