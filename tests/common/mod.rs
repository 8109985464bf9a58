#![allow(dead_code)]

mod assertions;
mod fixtures;

// Re-export
pub use assertions::{assert_efficiency_bounded, assert_series_valid, assert_uniform_grid};
pub use fixtures::*;
