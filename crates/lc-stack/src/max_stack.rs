//! O(1)-max stack trait
//!
//! A max stack is a LIFO stack that can also report the largest element
//! currently present. For any sequence of pushes and pops:
//!  - max() = the maximum over the elements still on the stack
//!  - peek() = the most recently pushed element still on the stack
//!
//! Both are O(1). Operations on an empty stack fail with `EmptyStack`.

use lc_core::Result;

/// The common interface of the max-tracking stack variants.
pub trait MaxStack<T: Ord> {
    /// Push a value onto the top
    fn push(&mut self, value: T);

    /// Remove and return the top value
    fn pop(&mut self) -> Result<T>;

    /// The top value (the most recent push, not the maximum)
    fn peek(&self) -> Result<&T>;

    /// The largest value present
    fn max(&self) -> Result<&T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
