#![allow(dead_code)]

mod assertions;
mod helpers;

// Re-export
pub use assertions::{assert_outputs_finite, assert_rows_aligned};
pub use helpers::*;
