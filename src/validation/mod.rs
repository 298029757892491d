//! Validation module for quote documents and cutting plans.

mod validate;

pub use validate::*;
