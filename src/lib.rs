//! VLSM subnet calculator.
//!
//! Partitions an IPv4 block into subnets sized for a list of host counts,
//! largest first, and reports the addresses left over.
//!
//! - [`models`] - address codec and the [`models::Subnet`] value type
//! - [`processing`] - bit width calculation and the VLSM allocator
//! - [`output`] - sentence, CSV and JSON rendering of a result
//! - [`console`] - interactive line console

pub mod config;
pub mod console;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{Result, VlsmError};
pub use models::Subnet;
pub use processing::{allocate, Allocation, Assignment};

/// Parse a CIDR root and allocate the given host counts in it.
///
/// # Examples
/// ```
/// let result = vlsm_calculator::allocate_cidr("10.0.0.0/24", &[100, 50]).unwrap();
/// assert_eq!(result.remaining_addresses, 64);
/// ```
pub fn allocate_cidr(root: &str, host_counts: &[i64]) -> Result<Allocation> {
    let root = Subnet::parse(root)?;
    allocate(&root, host_counts)
}
