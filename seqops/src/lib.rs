//! Generic operations over ordered sequences.
//!
//! Every operation takes a slice, so a `Vec<T>`, an array or a boxed slice
//! can be passed directly. Only [`flip`] mutates its input; everything else
//! either borrows a sub-slice or builds a new `Vec`.
//!
//! Absence is always an `Option`: a search that misses returns `None`, never
//! a reserved index. Callers that need the `-1` convention can convert with
//! [`Sentinel`].
//!
//! ```
//! use seqops::{index_of, merge, slice};
//!
//! let items = merge([vec![1, 2, 3], vec![4, 5, 6]]);
//! assert_eq!(index_of(&items, &4), Some(3));
//! assert_eq!(slice(&items, 2, 2), &[3, 4]);
//! ```
//!
//! Container classification lives in [`shape`].
pub mod combine;
pub mod error;
mod ext;
pub mod search;
pub mod subsequence;
pub mod transform;

pub use seqops_shape as shape;

pub use combine::merge;
pub use error::{Error, Result};
pub use ext::SequenceExt;
pub use search::{
    contains, find, find_index, from_sentinel, index_of, last_index_of, Sentinel, NOT_FOUND,
};
pub use shape::{is_array, is_slice, Shape, Shaped};
pub use subsequence::{
    head, slice, slice_from, slice_signed, slice_to, subsequence, tail, try_slice, Extent,
};
pub use transform::{flip, flipped, for_each, map};
