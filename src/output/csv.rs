//! CSV output formatting for allocation results.

use super::terminal::format_field;
use super::{ordered, OutputOrder};
use crate::models::format_dotted;
use crate::processing::Allocation;

const HEADER: &str = r#" "cnt",  "hosts",       "subnet_cidr",          "netmask",     "first_usable",      "last_usable",        "broadcast",   "usable""#;

/// Render an allocation as CSV lines, header first and a summary last.
pub fn allocation_csv(allocation: &Allocation, order: OutputOrder) -> Vec<String> {
    log::debug!(
        "allocation_csv() root={} rows={}",
        allocation.root,
        allocation.assignments.len()
    );
    let mut lines = vec![HEADER.to_string()];

    for (i, a) in ordered(allocation, order).iter().enumerate() {
        let s = &a.subnet;
        let first = s.first_usable_address().map(format_dotted);
        let last = s.last_usable_address().map(format_dotted);
        lines.push(format!(
            "{cnt},{hosts},{cidr},{netmask},{first},{last},{broadcast},{usable}",
            cnt = format_field(i + 1, 6),
            hosts = format_field(a.hosts, 8),
            cidr = format_field(s, 18),
            netmask = format_field(format_dotted(s.netmask()), 17),
            first = format_field(first.as_deref().unwrap_or("None"), 17),
            last = format_field(last.as_deref().unwrap_or("None"), 17),
            broadcast = format_field(format_dotted(s.broadcast_address()), 17),
            usable = format_field(s.usable_addresses(), 10),
        ));
    }

    lines.push(format!(
        "# root {root} used {used} remaining {remaining}",
        root = allocation.root,
        used = allocation.used_addresses(),
        remaining = allocation.remaining_addresses
    ));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Subnet;
    use crate::processing::allocate;

    #[test]
    fn test_allocation_csv() {
        let root = Subnet::parse("192.168.1.0/29").unwrap();
        let allocation = allocate(&root, &[2, 2]).unwrap();
        let lines = allocation_csv(&allocation, OutputOrder::Size);

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], HEADER);
        assert_eq!(
            lines[1],
            r#"   "1",     "2",  "192.168.1.0/30","255.255.255.252",    "192.168.1.1",    "192.168.1.2",    "192.168.1.3",       "2""#
        );
        assert!(lines[2].contains(r#""192.168.1.4/30""#));
        assert!(lines[2].contains(r#""192.168.1.7""#));
        assert_eq!(lines[3], "# root 192.168.1.0/29 used 8 remaining 0");
    }

    #[test]
    fn test_allocation_csv_no_usable_hosts() {
        let root = Subnet::parse("10.0.0.0/24").unwrap();
        let mut allocation = allocate(&root, &[1]).unwrap();
        allocation.assignments[0].subnet = Subnet::parse("10.0.0.0/31").unwrap();
        let lines = allocation_csv(&allocation, OutputOrder::Size);
        assert!(lines[1].contains(r#""None""#));
    }
}
