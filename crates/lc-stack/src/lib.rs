//! # lc-stack
//!
//! LIFO stacks over any [`SequentialStore`](lc_core::SequentialStore).
//!
//! This crate provides:
//! - `Stack`: a plain LIFO stack
//! - `MaxStack`: the trait for stacks answering "largest element present" in O(1)
//! - `PairMaxStack`: caches the running maximum next to every element
//! - `CountedMaxStack`: keeps one (max, count) run per distinct running maximum
//!
//! ## Example
//!
//! ```rust
//! use lc_stack::{CountedMaxStack, MaxStack, PairMaxStack};
//!
//! fn top_and_max<S: MaxStack<i32>>(stack: &mut S) -> (i32, i32) {
//!     for v in [3, 1, 4, 1, 5] {
//!         stack.push(v);
//!     }
//!     stack.pop().unwrap();
//!     (*stack.peek().unwrap(), *stack.max().unwrap())
//! }
//!
//! assert_eq!(top_and_max(&mut PairMaxStack::new()), (1, 4));
//! assert_eq!(top_and_max(&mut CountedMaxStack::new()), (1, 4));
//! ```

pub mod counted;
pub mod max_stack;
pub mod pair;
pub mod stack;

pub use counted::{CountedMaxStack, MaxRun};
pub use max_stack::MaxStack;
pub use pair::{CachedMax, PairMaxStack};
pub use stack::Stack;

pub use lc_core::{CollectionError, Result, SequentialStore};
