//! Quantity and cost calculators for windows and corners.

mod corner;
mod window;

pub use corner::{
    calculate_corner, normalize_corner, stack_blocks, stack_iteration_cap, MAX_STACK_ITERATIONS,
};
pub use window::{
    bars_needed, calculate_normalized, calculate_window, cornice_length, normalize_window,
};
