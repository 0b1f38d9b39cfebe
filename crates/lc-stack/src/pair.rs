//! Max stack caching the running maximum next to each element.
//!
//! Every entry stores `(element, max)` where `max` is the largest element
//! at or below that position:
//!
//! ```text
//! push 3, 1, 4, 1, 5
//! top  (5, 5)
//!      (1, 4)
//!      (4, 4)
//!      (1, 3)
//! bot  (3, 3)
//! ```
//!
//! One cached max per element: O(n) extra space, O(1) everything.

use crate::max_stack::MaxStack;
use lc_core::{CollectionError, Result, SequentialStore};
use std::marker::PhantomData;

/// An element together with the running maximum at its position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CachedMax<T> {
    pub element: T,
    pub max: T,
}

#[derive(Clone, Debug)]
pub struct PairMaxStack<T, S = Vec<CachedMax<T>>> {
    entries: S,
    _element: PhantomData<T>,
}

impl<T: Ord + Clone> PairMaxStack<T> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T, S> PairMaxStack<T, S>
where
    T: Ord + Clone,
    S: SequentialStore<CachedMax<T>>,
{
    /// Cached entries from bottom to top.
    pub fn entries(&self) -> impl Iterator<Item = &CachedMax<T>> {
        (0..self.entries.len()).filter_map(move |index| self.entries.get(index))
    }
}

impl<T, S> Default for PairMaxStack<T, S>
where
    T: Ord + Clone,
    S: SequentialStore<CachedMax<T>> + Default,
{
    fn default() -> Self {
        Self {
            entries: S::default(),
            _element: PhantomData,
        }
    }
}

impl<T, S> MaxStack<T> for PairMaxStack<T, S>
where
    T: Ord + Clone,
    S: SequentialStore<CachedMax<T>>,
{
    fn push(&mut self, value: T) {
        let max = match self.entries.back() {
            Some(top) if top.max > value => top.max.clone(),
            _ => value.clone(),
        };
        self.entries.push_back(CachedMax {
            element: value,
            max,
        });
    }

    fn pop(&mut self) -> Result<T> {
        self.entries
            .pop_back()
            .map(|entry| entry.element)
            .ok_or(CollectionError::EmptyStack)
    }

    fn peek(&self) -> Result<&T> {
        self.entries
            .back()
            .map(|entry| &entry.element)
            .ok_or(CollectionError::EmptyStack)
    }

    fn max(&self) -> Result<&T> {
        self.entries
            .back()
            .map(|entry| &entry.max)
            .ok_or(CollectionError::EmptyStack)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
