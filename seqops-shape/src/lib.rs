//! Classify containers as fixed-size arrays or growable sequences.
//!
//! The classification is a property of the type, not of the value: every
//! type that takes part implements [`Shaped`], and the answer is an
//! associated constant. There is no runtime inspection.
//!
//! ```
//! use seqops_shape::{is_array, is_slice};
//!
//! assert!(is_array(&[1, 2]));
//! assert!(is_slice(&vec![1, 2]));
//! assert!(!is_array("hello") && !is_slice("hello"));
//! ```
mod shape;
mod shaped;

pub use shape::Shape;
pub use shaped::{fixed_capacity_of, is_array, is_slice, shape_of, Shaped};
