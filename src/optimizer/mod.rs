//! Cutting plan optimization for linear stock.

mod cutting;

pub use cutting::optimize;
