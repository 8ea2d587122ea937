//! Address and subnet value types.
//!
//! - [`address`] - dotted-decimal codec for 32-bit addresses
//! - [`Subnet`] - IPv4 block with CIDR notation support

mod address;
mod subnet;

// Re-export public types
pub use address::{
    compose, decompose, format_dotted, parse_dotted, to_address, Address, AddressParts,
    ADDR_DIVISIONS, ADDR_SEP, MAX_BITS,
};
pub use subnet::{get_cidr_mask, Subnet, MASK_SEP};
