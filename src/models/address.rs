//! Dotted-decimal IPv4 address codec.
//!
//! Converts between a 32-bit address value, its 4-part big-endian byte
//! decomposition and the `a.b.c.d` string form.

use crate::error::{parse_int, Result, VlsmError};

/// Number of bits in an IPv4 address.
pub const MAX_BITS: u8 = 32;
/// Number of dotted-decimal parts in an address.
pub const ADDR_DIVISIONS: usize = 4;
/// Separator between the parts of an address.
pub const ADDR_SEP: char = '.';

/// Base of a single address part (2^8).
const PART_BASE: u64 = 256;

/// A 32-bit IPv4 address value.
pub type Address = u32;

/// The 4 parts of an address, most significant first.
pub type AddressParts = [u8; ADDR_DIVISIONS];

/// Parse a dotted-decimal string such as `"192.168.1.0"` into an [`Address`].
///
/// # Examples
/// ```
/// use vlsm_calculator::models::parse_dotted;
/// assert_eq!(parse_dotted("255.255.255.255").unwrap(), 4294967295);
/// ```
pub fn parse_dotted(s: &str) -> Result<Address> {
    let found = s.matches(ADDR_SEP).count();
    if found != ADDR_DIVISIONS - 1 {
        return Err(VlsmError::AddressSeparatorCount { found });
    }
    let parts = s
        .split(ADDR_SEP)
        .map(|part| {
            let value = parse_int(part)?;
            if !(0..PART_BASE as i64).contains(&value) {
                return Err(VlsmError::AddressPartOutOfRange { part: value });
            }
            Ok(value)
        })
        .collect::<Result<Vec<i64>>>()?;
    log::trace!("parse_dotted({s}) parts={parts:?}");
    compose(&parts)
}

/// Format an [`Address`] as a dotted-decimal string.
pub fn format_dotted(addr: Address) -> String {
    let mut rest = addr as u64;
    let mut parts = Vec::with_capacity(ADDR_DIVISIONS);
    for power in (0..ADDR_DIVISIONS as u32).rev() {
        let weight = PART_BASE.pow(power);
        parts.push((rest / weight).to_string());
        rest %= weight;
    }
    parts.join(ADDR_SEP.to_string().as_str())
}

/// Split an [`Address`] into its 4 parts, most significant first.
pub fn decompose(addr: Address) -> AddressParts {
    addr.to_be_bytes()
}

/// Combine 4 parts, most significant first, into an [`Address`].
///
/// Parts are taken as wide signed integers so out of range input can be
/// reported rather than truncated.
pub fn compose(parts: &[i64]) -> Result<Address> {
    if parts.len() != ADDR_DIVISIONS {
        return Err(VlsmError::AddressPartCount { found: parts.len() });
    }
    let mut value: i64 = 0;
    for &part in parts {
        if !(0..PART_BASE as i64).contains(&part) {
            return Err(VlsmError::AddressPartOutOfRange { part });
        }
        value = value * PART_BASE as i64 + part;
    }
    to_address(value)
}

/// Narrow an integer to an [`Address`], rejecting values outside 32 bits.
pub fn to_address(value: i64) -> Result<Address> {
    Address::try_from(value).map_err(|_| VlsmError::AddressOutOfRange { address: value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dotted() {
        assert_eq!(parse_dotted("0.0.0.0").unwrap(), 0);
        assert_eq!(parse_dotted("192.168.1.0").unwrap(), 0xC0A80100);
        assert_eq!(parse_dotted("255.255.255.255").unwrap(), u32::MAX);
        assert_eq!(parse_dotted("010.001.000.009").unwrap(), 0x0A010009);
    }

    #[test]
    fn test_parse_dotted_errors() {
        assert_eq!(
            parse_dotted("10.0.0").unwrap_err(),
            VlsmError::AddressSeparatorCount { found: 2 }
        );
        assert_eq!(
            parse_dotted("10.0.0.0.0").unwrap_err(),
            VlsmError::AddressSeparatorCount { found: 4 }
        );
        assert_eq!(
            parse_dotted("10.0.256.0").unwrap_err(),
            VlsmError::AddressPartOutOfRange { part: 256 }
        );
        assert_eq!(
            parse_dotted("10.-1.0.0").unwrap_err(),
            VlsmError::AddressPartOutOfRange { part: -1 }
        );
        assert!(matches!(
            parse_dotted("10.a.0.0"),
            Err(VlsmError::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse_dotted("10..0.0"),
            Err(VlsmError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_format_dotted() {
        assert_eq!(format_dotted(0), "0.0.0.0");
        assert_eq!(format_dotted(u32::MAX), "255.255.255.255");
        assert_eq!(format_dotted(0xC0A80104), "192.168.1.4");
        // normalises leading zeros
        assert_eq!(format_dotted(parse_dotted("10.01.002.3").unwrap()), "10.1.2.3");
    }

    #[test]
    fn test_decompose_compose() {
        assert_eq!(decompose(0xC0A80100), [192, 168, 1, 0]);
        assert_eq!(compose(&[255, 255, 255, 255]).unwrap(), 4294967295);
        for addr in [0, 1, 255, 256, 0x7F000001, 0xFFFFFFFE, u32::MAX] {
            let parts: Vec<i64> = decompose(addr).iter().map(|&p| p as i64).collect();
            assert_eq!(compose(&parts).unwrap(), addr);
        }
    }

    #[test]
    fn test_compose_errors() {
        assert_eq!(
            compose(&[1, 2, 3]).unwrap_err(),
            VlsmError::AddressPartCount { found: 3 }
        );
        assert_eq!(
            compose(&[1, 2, 3, 4, 5]).unwrap_err(),
            VlsmError::AddressPartCount { found: 5 }
        );
        assert_eq!(
            compose(&[1, 256, 3, 4]).unwrap_err(),
            VlsmError::AddressPartOutOfRange { part: 256 }
        );
        assert_eq!(
            compose(&[1, 2, -3, 4]).unwrap_err(),
            VlsmError::AddressPartOutOfRange { part: -3 }
        );
    }

    #[test]
    fn test_to_address() {
        assert_eq!(to_address(4294967295).unwrap(), u32::MAX);
        assert_eq!(
            to_address(4294967296).unwrap_err(),
            VlsmError::AddressOutOfRange {
                address: 4294967296
            }
        );
        assert_eq!(
            to_address(-1).unwrap_err(),
            VlsmError::AddressOutOfRange { address: -1 }
        );
    }
}
