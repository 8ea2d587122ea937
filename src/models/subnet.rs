//! IPv4 subnet value type with CIDR notation support.
//!
//! A [`Subnet`] is an immutable (network address, prefix length) pair. The
//! network address is stored verbatim and is not aligned to the prefix, so
//! `10.0.0.5/24` is a valid subnet starting at `10.0.0.5`.

use super::address::{format_dotted, parse_dotted, to_address, Address, MAX_BITS};
use crate::error::{parse_int, Result, VlsmError};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Separator between the address and the prefix length.
pub const MASK_SEP: char = '/';

/// Convert a prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use vlsm_calculator::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> u32 {
    let right_len = MAX_BITS.saturating_sub(len);
    let all_bits = u32::MAX as u64;
    ((all_bits >> right_len) << right_len) as u32
}

/// Number of addresses in a block with the given prefix length.
fn block_size(len: u8) -> u64 {
    1u64 << (MAX_BITS - len)
}

/// An IPv4 block: base address plus prefix length.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Subnet {
    network_address: Address,
    prefix_length: u8,
}

impl Subnet {
    /// Create a subnet from a raw address value and prefix length.
    ///
    /// The block must not run past `255.255.255.255`.
    pub fn new(network_address: i64, prefix_length: i64) -> Result<Subnet> {
        let network_address = to_address(network_address)?;
        if prefix_length > MAX_BITS as i64 {
            return Err(VlsmError::PrefixTooLarge {
                prefix: prefix_length,
            });
        }
        if prefix_length < 0 {
            return Err(VlsmError::PrefixNegative {
                prefix: prefix_length,
            });
        }
        let prefix_length = prefix_length as u8;
        let broadcast = network_address as u64 + block_size(prefix_length) - 1;
        if broadcast > Address::MAX as u64 {
            return Err(VlsmError::AddressOutOfRange {
                address: broadcast as i64,
            });
        }
        Ok(Subnet {
            network_address,
            prefix_length,
        })
    }

    /// Parse CIDR notation, e.g. `"192.168.1.0/24"`.
    pub fn parse(s: &str) -> Result<Subnet> {
        let found = s.matches(MASK_SEP).count();
        if found != 1 {
            return Err(VlsmError::MaskSeparatorCount { found });
        }
        let (addr, prefix) = s.split_once(MASK_SEP).ok_or(VlsmError::MaskSeparatorCount { found })?;
        let network_address = parse_dotted(addr)?;
        let prefix_length = parse_int(prefix)?;
        Subnet::new(network_address as i64, prefix_length)
    }

    pub fn network_address(&self) -> Address {
        self.network_address
    }

    pub fn prefix_length(&self) -> u8 {
        self.prefix_length
    }

    /// The network address as a std [`Ipv4Addr`].
    pub fn addr(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.network_address)
    }

    /// Subnet mask for the prefix length.
    pub fn netmask(&self) -> Address {
        get_cidr_mask(self.prefix_length)
    }

    /// Number of addresses in the block, `2^(32 - prefix)`.
    pub fn total_addresses(&self) -> u64 {
        block_size(self.prefix_length)
    }

    /// Addresses left after reserving network and broadcast, 0 for /31 and /32.
    pub fn usable_addresses(&self) -> u64 {
        self.total_addresses().saturating_sub(2)
    }

    /// Last address of the block.
    pub fn broadcast_address(&self) -> Address {
        // construction guarantees this stays within 32 bits
        (self.network_address as u64 + self.total_addresses() - 1) as Address
    }

    /// First usable host address, `None` when the block has no usable hosts.
    pub fn first_usable_address(&self) -> Option<Address> {
        (self.usable_addresses() > 0).then(|| self.network_address + 1)
    }

    /// Last usable host address, `None` when the block has no usable hosts.
    pub fn last_usable_address(&self) -> Option<Address> {
        (self.usable_addresses() > 0).then(|| self.broadcast_address() - 1)
    }

    /// True if `addr` falls inside this block.
    pub fn contains(&self, addr: Address) -> bool {
        self.network_address <= addr && addr <= self.broadcast_address()
    }
}

impl std::fmt::Display for Subnet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}{}{}",
            format_dotted(self.network_address),
            MASK_SEP,
            self.prefix_length
        )
    }
}

impl FromStr for Subnet {
    type Err = VlsmError;

    fn from_str(s: &str) -> Result<Subnet> {
        Subnet::parse(s)
    }
}

impl Serialize for Subnet {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Subnet {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Subnet, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Subnet::parse(&s).map_err(|e| de::Error::custom(format!("invalid CIDR {s}: {e}")))
    }
}
