//! Terminal output utilities.
//!
//! Provides the sentence form of an allocation and formatting helpers.

use super::{ordered, OutputOrder};
use crate::processing::Allocation;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let quoted = format!("\"{}\"", value.to_string());
    format!("{quoted:>width$}")
}

/// One line per allocated subnet followed by the remaining address count.
pub fn allocation_lines(allocation: &Allocation, order: OutputOrder) -> Vec<String> {
    let mut lines: Vec<String> = ordered(allocation, order)
        .iter()
        .map(|a| {
            format!(
                "{} with {} usable network addresses.",
                a.subnet,
                a.subnet.usable_addresses()
            )
        })
        .collect();
    lines.push(format!(
        "With {} network addresses remaining.",
        allocation.remaining_addresses
    ));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Subnet;
    use crate::processing::allocate;

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("test", 10), "    \"test\"");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("long_value", 5), "\"long_value\"");
    }

    #[test]
    fn test_format_field_number() {
        assert_eq!(format_field(42, 6), "  \"42\"");
    }

    #[test]
    fn test_allocation_lines() {
        let root = Subnet::parse("192.168.1.0/24").unwrap();
        let allocation = allocate(&root, &[10, 50]).unwrap();
        assert_eq!(
            allocation_lines(&allocation, OutputOrder::Size),
            vec![
                "192.168.1.0/26 with 62 usable network addresses.",
                "192.168.1.64/28 with 14 usable network addresses.",
                "With 176 network addresses remaining.",
            ]
        );
        assert_eq!(
            allocation_lines(&allocation, OutputOrder::Request)[0],
            "192.168.1.64/28 with 14 usable network addresses."
        );
    }
}
