//! Test vectors for netaddr address encodings.

mod native_addr;

pub use native_addr::{
    NativeAddrVector, NATIVE_ADDR_VECTORS, UNRECOGNIZED_NATIVE_ADDR_VECTORS,
};
