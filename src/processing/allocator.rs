//! Variable length subnet mask (VLSM) allocation.
//!
//! Requests are placed largest first at increasing offsets from the root's
//! network address. Each subnet starts exactly where the previous one ended,
//! without re-aligning to its own block size.

use super::bit_width::host_bits;
use crate::error::{Result, VlsmError};
use crate::models::{Subnet, MAX_BITS};
use itertools::Itertools;
use serde::Serialize;
use std::cmp::Reverse;

/// One satisfied host-count request.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment {
    /// Position of the request in the caller's host-count list.
    pub request_index: usize,
    /// Requested number of hosts.
    pub hosts: i64,
    /// Subnet allocated for the request.
    pub subnet: Subnet,
}

/// Outcome of a successful allocation.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    /// Block that was partitioned.
    pub root: Subnet,
    /// Assignments in processing order, largest subnet first.
    pub assignments: Vec<Assignment>,
    /// Root addresses not covered by any assignment.
    pub remaining_addresses: u64,
}

impl Allocation {
    /// Allocated subnets in processing order.
    pub fn subnets(&self) -> Vec<Subnet> {
        self.assignments.iter().map(|a| a.subnet).collect()
    }

    /// Assignments reordered to match the caller's request list.
    pub fn in_request_order(&self) -> Vec<Assignment> {
        self.assignments
            .iter()
            .copied()
            .sorted_by_key(|a| a.request_index)
            .collect()
    }

    /// Sum of the allocated subnets' sizes.
    pub fn used_addresses(&self) -> u64 {
        self.assignments
            .iter()
            .map(|a| a.subnet.total_addresses())
            .sum()
    }
}

/// Partition `root` into one subnet per entry of `host_counts`.
///
/// Either every request is satisfied or the call fails; the caller's
/// `root` and `host_counts` are never modified.
///
/// # Examples
/// ```
/// use vlsm_calculator::models::Subnet;
/// use vlsm_calculator::processing::allocate;
///
/// let root = Subnet::parse("192.168.1.0/29").unwrap();
/// let result = allocate(&root, &[2, 2]).unwrap();
/// assert_eq!(result.subnets()[1].to_string(), "192.168.1.4/30");
/// assert_eq!(result.remaining_addresses, 0);
/// ```
pub fn allocate(root: &Subnet, host_counts: &[i64]) -> Result<Allocation> {
    log::info!("#Start allocate() root={root} host_counts={host_counts:?}");

    if host_counts.is_empty() {
        return Err(VlsmError::EmptyRequestList);
    }
    if let Some(&hosts) = host_counts.iter().find(|&&h| h <= 0) {
        return Err(VlsmError::NonPositiveHostCount { hosts });
    }

    let infeasible = || {
        log::warn!("Cannot fit {host_counts:?} into {root}");
        VlsmError::InfeasibleAllocation {
            root: *root,
            hosts: host_counts.to_vec(),
        }
    };

    let root_broadcast = root.broadcast_address() as u64;
    let mut cursor = root.network_address() as u64;
    let mut assignments = Vec::with_capacity(host_counts.len());

    // Stable sort keeps equal requests in input order.
    let requests = host_counts
        .iter()
        .copied()
        .enumerate()
        .sorted_by_key(|&(_, hosts)| Reverse(hosts));

    for (request_index, hosts) in requests {
        let bits = host_bits(hosts)?;
        if bits > MAX_BITS as u32 {
            return Err(infeasible());
        }
        let size = 1u64 << bits;
        if cursor + size - 1 > root_broadcast {
            return Err(infeasible());
        }
        let subnet = Subnet::new(cursor as i64, (MAX_BITS as u32 - bits) as i64)?;
        log::debug!("request #{request_index} hosts={hosts} -> {subnet}");
        assignments.push(Assignment {
            request_index,
            hosts,
            subnet,
        });
        cursor += size;
    }

    let used: u64 = assignments.iter().map(|a| a.subnet.total_addresses()).sum();
    let remaining_addresses = root.total_addresses() - used;
    log::info!(
        "# allocated {} subnets in {root}, {remaining_addresses} addresses remaining",
        assignments.len()
    );

    Ok(Allocation {
        root: *root,
        assignments,
        remaining_addresses,
    })
}
