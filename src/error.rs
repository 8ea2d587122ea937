//! Error taxonomy for address parsing, subnet construction and allocation.
//!
//! Every failure is a local validation failure; nothing here is retriable.

use crate::models::Subnet;
use std::num::ParseIntError;

/// Errors surfaced by the codec, the [`Subnet`] constructor and the allocator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VlsmError {
    #[error("expected exactly 1 mask separator '/', found {found}")]
    MaskSeparatorCount { found: usize },

    #[error("expected exactly 3 address separators '.', found {found}")]
    AddressSeparatorCount { found: usize },

    #[error("address part {part} is outside 0..=255")]
    AddressPartOutOfRange { part: i64 },

    #[error("expected 4 address parts, found {found}")]
    AddressPartCount { found: usize },

    #[error("'{token}' is not an integer: {source}")]
    InvalidNumber {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("prefix length {prefix} is larger than 32")]
    PrefixTooLarge { prefix: i64 },

    #[error("prefix length {prefix} is negative")]
    PrefixNegative { prefix: i64 },

    #[error("address value {address} is outside 0..=4294967295")]
    AddressOutOfRange { address: i64 },

    #[error("capacity {capacity} is negative")]
    NegativeCapacity { capacity: i64 },

    #[error("at least one host count is required")]
    EmptyRequestList,

    #[error("host count {hosts} must be greater than 0")]
    NonPositiveHostCount { hosts: i64 },

    #[error("cannot fit sub-networks for host counts {hosts:?} into {root}")]
    InfeasibleAllocation { root: Subnet, hosts: Vec<i64> },
}

pub type Result<T> = std::result::Result<T, VlsmError>;

/// Parse a decimal integer token, keeping the token for diagnostics.
pub(crate) fn parse_int(token: &str) -> Result<i64> {
    token.parse::<i64>().map_err(|source| VlsmError::InvalidNumber {
        token: token.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("42").unwrap(), 42);
        assert_eq!(parse_int("-7").unwrap(), -7);
        match parse_int("4x") {
            Err(VlsmError::InvalidNumber { token, .. }) => assert_eq!(token, "4x"),
            other => panic!("unexpected {other:?}"),
        }
        assert!(parse_int("").is_err());
    }

    #[test]
    fn test_infeasible_message() {
        let err = VlsmError::InfeasibleAllocation {
            root: Subnet::parse("10.0.0.0/24").unwrap(),
            hosts: vec![300],
        };
        assert_eq!(
            err.to_string(),
            "cannot fit sub-networks for host counts [300] into 10.0.0.0/24"
        );
    }
}
