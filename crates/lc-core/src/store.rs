//! Sequential store trait - the storage seam for stacks
//!
//! A stack only needs a store that grows and shrinks at one end:
//!  - push_back / pop_back at the top
//!  - positional reads for inspection
//!
//! Anything satisfying this can back a stack, including the dynamic array.

/// A growable store that is only mutated at its back.
pub trait SequentialStore<T> {
    /// Append at the back
    fn push_back(&mut self, value: T);

    /// Remove from the back, `None` when empty
    fn pop_back(&mut self) -> Option<T>;

    /// Positional read, index 0 is the front (bottom of a stack)
    fn get(&self, index: usize) -> Option<&T>;

    /// Mutable access to the back element
    fn back_mut(&mut self) -> Option<&mut T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The back element (top of a stack)
    fn back(&self) -> Option<&T> {
        self.len().checked_sub(1).and_then(|last| self.get(last))
    }
}

impl<T> SequentialStore<T> for Vec<T> {
    fn push_back(&mut self, value: T) {
        self.push(value);
    }

    fn pop_back(&mut self) -> Option<T> {
        self.pop()
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    fn back_mut(&mut self) -> Option<&mut T> {
        self.last_mut()
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn back(&self) -> Option<&T> {
        self.last()
    }
}
