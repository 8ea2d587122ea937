//! Output formatting for allocation results.
//!
//! - [`terminal`] - sentence lines for the interactive console
//! - [`csv`] - CSV table output
//! - [`json`] - JSON document output

mod csv;
mod json;
mod terminal;

use crate::processing::{Allocation, Assignment};
use serde::Serialize;

pub use csv::allocation_csv;
pub use json::allocation_json;
pub use terminal::{allocation_lines, format_field};

/// Order in which allocated subnets are reported.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputOrder {
    /// Processing order, largest subnet first.
    #[default]
    Size,
    /// The order the host counts were requested in.
    Request,
}

impl std::str::FromStr for OutputOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<OutputOrder, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            "size" => Ok(OutputOrder::Size),
            "request" => Ok(OutputOrder::Request),
            other => Err(format!("unknown output order '{other}'")),
        }
    }
}

/// Assignments of `allocation` in the requested reporting order.
pub fn ordered(allocation: &Allocation, order: OutputOrder) -> Vec<Assignment> {
    match order {
        OutputOrder::Size => allocation.assignments.clone(),
        OutputOrder::Request => allocation.in_request_order(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_order_from_str() {
        assert_eq!("size".parse::<OutputOrder>().unwrap(), OutputOrder::Size);
        assert_eq!(" Request ".parse::<OutputOrder>().unwrap(), OutputOrder::Request);
        assert!("random".parse::<OutputOrder>().is_err());
        assert_eq!(OutputOrder::default(), OutputOrder::Size);
    }
}
