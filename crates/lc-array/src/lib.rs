//! # lc-array
//!
//! A manually managed resizable array.
//!
//! `DynamicArray` keeps its elements in a fixed-capacity `RawBuffer` and
//! replaces that buffer with one twice as large whenever an insertion finds
//! it full. Reads are O(1), appends are amortized O(1), and positional
//! insert/remove shift the tail of the array.
//!
//! ## Example
//!
//! ```rust
//! use lc_array::DynamicArray;
//!
//! let mut array: DynamicArray<i32> = [4, 5, 10, 15, 22].into_iter().collect();
//! assert_eq!(array.capacity(), 8);
//!
//! array.insert(1, 22).unwrap();
//! assert_eq!(array.get(1), Ok(&22));
//! assert_eq!(array.pop_at(1), Ok(22));
//! assert_eq!(array.len(), 5);
//! ```

mod array;

pub use array::{ArrayConfig, DynamicArray};
pub use lc_core::{CollectionError, Result};
