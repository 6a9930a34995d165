//! Value normalization for the cast step.
//!
//! - **numeric**: GDP figures to `f64`

pub mod numeric;

pub use numeric::{parse_numeric, transform_to_numeric};
