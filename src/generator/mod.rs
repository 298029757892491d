//! Quote report generator module.

mod format;
mod report;

pub use format::{format_length, format_money};
pub use report::generate_report;
