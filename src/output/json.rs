//! JSON output for allocation results.

use super::{ordered, OutputOrder};
use crate::models::Subnet;
use crate::processing::{Allocation, Assignment};
use serde::Serialize;

#[derive(Serialize)]
struct AllocationReport {
    root: Subnet,
    order: OutputOrder,
    assignments: Vec<Assignment>,
    used_addresses: u64,
    remaining_addresses: u64,
}

/// Render an allocation as a pretty printed JSON document.
pub fn allocation_json(
    allocation: &Allocation,
    order: OutputOrder,
) -> Result<String, serde_json::Error> {
    let report = AllocationReport {
        root: allocation.root,
        order,
        assignments: ordered(allocation, order),
        used_addresses: allocation.used_addresses(),
        remaining_addresses: allocation.remaining_addresses,
    };
    serde_json::to_string_pretty(&report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::allocate;
    use serde_json::Value;

    #[test]
    fn test_allocation_json() {
        let root = Subnet::parse("10.0.0.0/24").unwrap();
        let allocation = allocate(&root, &[10, 100]).unwrap();

        let json = allocation_json(&allocation, OutputOrder::Request).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["root"], "10.0.0.0/24");
        assert_eq!(value["order"], "request");
        assert_eq!(value["assignments"][0]["subnet"], "10.0.0.128/28");
        assert_eq!(value["assignments"][0]["hosts"], 10);
        assert_eq!(value["assignments"][0]["request_index"], 0);
        assert_eq!(value["assignments"][1]["subnet"], "10.0.0.0/25");
        assert_eq!(value["used_addresses"], 144);
        assert_eq!(value["remaining_addresses"], 112);
    }
}
