//! Subnet allocation logic.
//!
//! - [`bit_width`] - host bit width needed for a host count
//! - [`allocator`] - VLSM partitioning of a root block

mod allocator;
mod bit_width;

// Re-export public functions
pub use allocator::{allocate, Allocation, Assignment};
pub use bit_width::{host_bits, required_bits, RESERVED_ADDRESSES};
