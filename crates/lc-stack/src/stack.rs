//! Plain LIFO stack.
//!
//! Top of the stack is the back of the store. All operations are O(1)
//! (push amortized, depending on the store).

use lc_core::{CollectionError, Result, SequentialStore};
use std::fmt;
use std::marker::PhantomData;

#[derive(Clone, Debug)]
pub struct Stack<T, S = Vec<T>> {
    data: S,
    _element: PhantomData<T>,
}

impl<T> Stack<T> {
    /// An empty stack over a `Vec`. Use `Default` for other stores.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T, S: SequentialStore<T>> Stack<T, S> {
    /// Push onto the top.
    pub fn push(&mut self, value: T) {
        self.data.push_back(value);
    }

    pub fn pop(&mut self) -> Result<T> {
        self.data.pop_back().ok_or(CollectionError::EmptyStack)
    }

    pub fn peek(&self) -> Result<&T> {
        self.data.back().ok_or(CollectionError::EmptyStack)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Elements from bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        (0..self.data.len()).filter_map(move |index| self.data.get(index))
    }
}

impl<T, S: SequentialStore<T> + Default> Default for Stack<T, S> {
    fn default() -> Self {
        Self {
            data: S::default(),
            _element: PhantomData,
        }
    }
}

impl<T: fmt::Debug, S: SequentialStore<T>> fmt::Display for Stack<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stack(")?;
        f.debug_list().entries(self.iter()).finish()?;
        write!(f, ")")
    }
}
