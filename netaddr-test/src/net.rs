//! Host network testing utility functions for netaddr.

use std::env;

/// The name of the env var that skips netaddr tests which read the interfaces
/// of the machine running the tests.
///
/// Containers and sandboxes often have no interfaces apart from loopback,
/// or deny access to the interface list entirely.
///
/// We use a constant so that the compiler detects typos.
pub const NETADDR_SKIP_HOST_INTERFACE_TESTS: &str = "NETADDR_SKIP_HOST_INTERFACE_TESTS";

/// The name of the env var that skips netaddr's IPv6 host tests.
///
/// We use a constant so that the compiler detects typos.
pub const NETADDR_SKIP_IPV6_TESTS: &str = "NETADDR_SKIP_IPV6_TESTS";

/// Returns `true` if tests that read the host's interfaces should be skipped.
///
/// Prints a message to stderr when the test is skipped.
/// (This message is captured by the test runner, use `cargo test -- --nocapture` to see it.)
pub fn host_interface_tests_disabled() -> bool {
    env_var_skips(NETADDR_SKIP_HOST_INTERFACE_TESTS)
}

/// Returns `true` if tests that need IPv6 on the host should be skipped.
pub fn ipv6_tests_disabled() -> bool {
    env_var_skips(NETADDR_SKIP_IPV6_TESTS)
}

fn env_var_skips(name: &str) -> bool {
    if env::var_os(name).is_some() {
        eprintln!("Skipping test because '{name}' is set.");
        return true;
    }

    false
}
