//! Common [`netaddr_test`](crate) types, traits, and functions.

pub use crate::net::{host_interface_tests_disabled, ipv6_tests_disabled};

pub use color_eyre;
pub use color_eyre::eyre;
pub use eyre::Result;
pub use proptest::prelude::*;
