//! Max stack with run-length compressed maxima.
//!
//! Alongside the data stack sits a stack of runs `(max, count)`. A new run
//! starts only when a push exceeds the current max; a push equal to it bumps
//! the count; a smaller push leaves the runs alone:
//!
//! ```text
//! push 3, 1, 4, 1, 5
//! data: [3, 1, 4, 1, 5]
//! runs: [(3, 1), (4, 1), (5, 1)]
//!
//! pop -> 5
//! data: [3, 1, 4, 1]
//! runs: [(3, 1), (4, 1)]
//! ```
//!
//! The top run's `max` is always the largest element present, and its
//! `count` is how many present elements equal it since the run started.
//! Repeated maxima cost nothing extra, so this uses at most as much space
//! as the data stack and often far less.

use crate::max_stack::MaxStack;
use lc_core::{CollectionError, Result, SequentialStore};
use std::marker::PhantomData;

/// A maximum and how many present elements share it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaxRun<T> {
    pub max: T,
    pub count: usize,
}

impl<T> MaxRun<T> {
    fn new(max: T) -> Self {
        Self { max, count: 1 }
    }
}

#[derive(Clone, Debug)]
pub struct CountedMaxStack<T, D = Vec<T>, M = Vec<MaxRun<T>>> {
    /// Raw elements, top at the back
    data: D,
    /// Non-decreasing runs of maxima, never longer than `data`
    runs: M,
    _element: PhantomData<T>,
}

impl<T: Ord + Clone> CountedMaxStack<T> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T, D, M> CountedMaxStack<T, D, M>
where
    T: Ord + Clone,
    D: SequentialStore<T>,
    M: SequentialStore<MaxRun<T>>,
{
    /// Data elements from bottom to top.
    pub fn data(&self) -> impl Iterator<Item = &T> {
        (0..self.data.len()).filter_map(move |index| self.data.get(index))
    }

    /// Max runs from bottom to top.
    pub fn runs(&self) -> impl Iterator<Item = &MaxRun<T>> {
        (0..self.runs.len()).filter_map(move |index| self.runs.get(index))
    }
}

impl<T, D, M> Default for CountedMaxStack<T, D, M>
where
    T: Ord + Clone,
    D: SequentialStore<T> + Default,
    M: SequentialStore<MaxRun<T>> + Default,
{
    fn default() -> Self {
        Self {
            data: D::default(),
            runs: M::default(),
            _element: PhantomData,
        }
    }
}

impl<T, D, M> MaxStack<T> for CountedMaxStack<T, D, M>
where
    T: Ord + Clone,
    D: SequentialStore<T>,
    M: SequentialStore<MaxRun<T>>,
{
    fn push(&mut self, value: T) {
        match self.runs.back_mut() {
            Some(run) if value == run.max => run.count += 1,
            Some(run) if value < run.max => {}
            _ => self.runs.push_back(MaxRun::new(value.clone())),
        }
        self.data.push_back(value);
    }

    fn pop(&mut self) -> Result<T> {
        let value = self.data.pop_back().ok_or(CollectionError::EmptyStack)?;

        let run_exhausted = match self.runs.back_mut() {
            Some(run) if run.max == value => {
                run.count -= 1;
                run.count == 0
            }
            _ => false,
        };
        if run_exhausted {
            self.runs.pop_back();
        }
        Ok(value)
    }

    fn peek(&self) -> Result<&T> {
        self.data.back().ok_or(CollectionError::EmptyStack)
    }

    fn max(&self) -> Result<&T> {
        self.runs
            .back()
            .map(|run| &run.max)
            .ok_or(CollectionError::EmptyStack)
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lc_array::DynamicArray;

    fn pushed(values: &[i32]) -> CountedMaxStack<i32> {
        let mut stack = CountedMaxStack::new();
        for v in values {
            stack.push(*v);
        }
        stack
    }

    fn runs(stack: &CountedMaxStack<i32>) -> Vec<(i32, usize)> {
        stack.runs().map(|run| (run.max, run.count)).collect()
    }

    #[test]
    fn test_push_pop_scenario() {
        let mut stack = pushed(&[3, 1, 4, 1, 5]);
        assert_eq!(runs(&stack), vec![(3, 1), (4, 1), (5, 1)]);
        assert_eq!(stack.max(), Ok(&5));

        assert_eq!(stack.pop(), Ok(5));
        assert_eq!(stack.data().copied().collect::<Vec<_>>(), vec![3, 1, 4, 1]);
        assert_eq!(runs(&stack), vec![(3, 1), (4, 1)]);
        assert_eq!(stack.max(), Ok(&4));
    }

    #[test]
    fn test_equal_maxima_share_a_run() {
        let mut stack = pushed(&[5, 2, 5, 5]);
        assert_eq!(runs(&stack), vec![(5, 3)]);

        stack.pop().unwrap();
        stack.pop().unwrap();
        assert_eq!(runs(&stack), vec![(5, 1)]);
        assert_eq!(stack.max(), Ok(&5));

        stack.pop().unwrap();
        assert_eq!(stack.max(), Ok(&5));
        stack.pop().unwrap();
        assert_eq!(runs(&stack), vec![]);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_smaller_pushes_leave_runs_alone() {
        let stack = pushed(&[9, 1, 2, 3]);
        assert_eq!(runs(&stack), vec![(9, 1)]);
        assert_eq!(stack.len(), 4);
    }

    #[test]
    fn test_peek_is_top_data_not_max() {
        let stack = pushed(&[7, 3]);
        assert_eq!(stack.peek(), Ok(&3));
        assert_eq!(stack.max(), Ok(&7));
    }

    #[test]
    fn test_empty_stack_errors() {
        let mut stack: CountedMaxStack<i32> = CountedMaxStack::new();
        assert_eq!(stack.pop(), Err(CollectionError::EmptyStack));
        assert_eq!(stack.peek(), Err(CollectionError::EmptyStack));
        assert_eq!(stack.max(), Err(CollectionError::EmptyStack));
    }

    #[test]
    fn test_over_dynamic_arrays() {
        let mut stack: CountedMaxStack<i32, DynamicArray<i32>, DynamicArray<MaxRun<i32>>> =
            CountedMaxStack::default();
        for v in [3, 1, 4, 1, 5] {
            stack.push(v);
        }
        assert_eq!(stack.max(), Ok(&5));
        assert_eq!(stack.pop(), Ok(5));
        assert_eq!(stack.max(), Ok(&4));
        assert_eq!(stack.runs().count(), 2);
    }
}
