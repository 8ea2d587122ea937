//! Host bit width calculation.

use crate::error::{Result, VlsmError};

/// Addresses reserved in every subnet (network and broadcast).
pub const RESERVED_ADDRESSES: i64 = 2;

/// Minimum number of bits `b` such that `2^b >= capacity`.
///
/// # Examples
/// ```
/// use vlsm_calculator::processing::required_bits;
/// assert_eq!(required_bits(0).unwrap(), 0);
/// assert_eq!(required_bits(5).unwrap(), 3);
/// ```
pub fn required_bits(capacity: i64) -> Result<u32> {
    if capacity < 0 {
        return Err(VlsmError::NegativeCapacity { capacity });
    }
    if capacity <= 1 {
        return Ok(0);
    }
    Ok(u64::BITS - (capacity as u64 - 1).leading_zeros())
}

/// Bits needed for a subnet holding `host_count` hosts plus the reserved
/// network and broadcast addresses.
pub fn host_bits(host_count: i64) -> Result<u32> {
    if host_count < 0 {
        return Err(VlsmError::NegativeCapacity {
            capacity: host_count,
        });
    }
    required_bits(host_count.saturating_add(RESERVED_ADDRESSES))
}
