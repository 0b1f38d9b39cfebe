//! Dynamic Array - amortized-doubling growth over a fixed raw buffer
//!
//! The array owns exactly one `RawBuffer` of capacity `c` and a logical
//! length `n`:
//!
//! ```text
//! n = 5, c = 8
//! [4] [5] [10] [15] [22] [ ] [ ] [ ]
//! ```
//!
//! When an insertion finds `n == c`, a new buffer of capacity `2c` is
//! allocated, the `n` values are moved across in index order and the old
//! buffer is dropped. Over any sequence of `m` appends the total number of
//! moved values is below `2m`, so append is amortized O(1).
//!
//! Capacity never shrinks. Popping leaves the buffer at its high-water mark
//! so a following burst of appends does not pay for reallocation again;
//! callers that need memory back should rebuild the array.

use lc_core::{CollectionError, RawBuffer, Result, SequentialStore};
use std::fmt;
use tracing::trace;

/// Configuration for a dynamic array.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Capacity of the first buffer. Zero is treated as one.
    pub initial_capacity: usize,
}

impl Default for ArrayConfig {
    fn default() -> Self {
        ArrayConfig {
            initial_capacity: 1,
        }
    }
}

/// A resizable array with explicit capacity management.
#[derive(Clone, Debug)]
pub struct DynamicArray<T> {
    /// Number of occupied slots, always `<= buffer.capacity()`
    len: usize,
    /// Backing storage, replaced wholesale on growth
    buffer: RawBuffer<T>,
    /// Number of buffer replacements since construction
    reallocations: usize,
}

impl<T> DynamicArray<T> {
    /// Create an empty array with length 0 and capacity 1.
    pub fn new() -> Self {
        Self::with_config(ArrayConfig::default())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(ArrayConfig {
            initial_capacity: capacity,
        })
    }

    pub fn with_config(config: ArrayConfig) -> Self {
        Self {
            len: 0,
            buffer: RawBuffer::new(config.initial_capacity.max(1)),
            reallocations: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// How many times the backing buffer has been replaced.
    pub fn reallocations(&self) -> usize {
        self.reallocations
    }

    /// Element at `index`, failing unless `index < len`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        Ok(self.slot(index))
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check_index(index)?;
        match self.buffer.get_mut(index) {
            Some(value) => Ok(value),
            None => unreachable!("slot {} below length {} is vacant", index, self.len),
        }
    }

    /// Add a value at the end, doubling the capacity first if full.
    pub fn append(&mut self, value: T) {
        self.grow_if_full();
        self.buffer.put(self.len, value);
        self.len += 1;
    }

    /// Insert `value` at `index`, shifting `[index, len)` one slot right.
    ///
    /// `index == len` behaves like [`append`](Self::append).
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len {
            return Err(CollectionError::IndexOutOfBounds {
                index,
                length: self.len,
            });
        }

        self.grow_if_full();
        for slot in (index..self.len).rev() {
            self.buffer.shift(slot, slot + 1);
        }
        self.buffer.put(index, value);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the last element. O(1).
    pub fn pop(&mut self) -> Result<T> {
        match self.len.checked_sub(1) {
            Some(last) => self.pop_at(last),
            None => Err(CollectionError::IndexOutOfBounds {
                index: 0,
                length: 0,
            }),
        }
    }

    /// Remove and return the element at `index`, shifting `(index, len)`
    /// one slot left. The vacated final slot is cleared.
    pub fn pop_at(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;

        let value = match self.buffer.take(index) {
            Some(value) => value,
            None => unreachable!("slot {} below length {} is vacant", index, self.len),
        };
        for slot in index + 1..self.len {
            self.buffer.shift(slot, slot - 1);
        }
        self.len -= 1;
        Ok(value)
    }

    /// Iterate over the elements in index order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        (0..self.len).map(move |index| self.slot(index))
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.len {
            Ok(())
        } else {
            Err(CollectionError::IndexOutOfBounds {
                index,
                length: self.len,
            })
        }
    }

    /// Occupied slot below `len`.
    fn slot(&self, index: usize) -> &T {
        match self.buffer.get(index) {
            Some(value) => value,
            None => unreachable!("slot {} below length {} is vacant", index, self.len),
        }
    }

    fn grow_if_full(&mut self) {
        if self.len == self.buffer.capacity() {
            self.resize(2 * self.buffer.capacity());
        }
    }

    /// Move every element into a fresh buffer of `capacity` slots.
    fn resize(&mut self, capacity: usize) {
        let mut next = RawBuffer::new(capacity);
        for slot in 0..self.len {
            if let Some(value) = self.buffer.take(slot) {
                next.put(slot, value);
            }
        }

        trace!(
            old_capacity = self.buffer.capacity(),
            new_capacity = capacity,
            moved = self.len,
            "dynamic array reallocated"
        );
        self.buffer = next;
        self.reallocations += 1;
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sequence equality: spare capacity and growth history are ignored.
impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: fmt::Debug> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DynamicArray(")?;
        f.debug_list().entries(self.iter()).finish()?;
        write!(f, ")")
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = Box<dyn Iterator<Item = &'a T> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

/// Lets a dynamic array back any of the stacks.
impl<T> SequentialStore<T> for DynamicArray<T> {
    fn push_back(&mut self, value: T) {
        self.append(value);
    }

    fn pop_back(&mut self) -> Option<T> {
        self.pop().ok()
    }

    fn get(&self, index: usize) -> Option<&T> {
        DynamicArray::get(self, index).ok()
    }

    fn back_mut(&mut self) -> Option<&mut T> {
        let last = self.len.checked_sub(1)?;
        self.get_mut(last).ok()
    }

    fn len(&self) -> usize {
        self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_values(values: &[i32]) -> DynamicArray<i32> {
        values.iter().copied().collect()
    }

    fn contents(array: &DynamicArray<i32>) -> Vec<i32> {
        array.iter().copied().collect()
    }

    #[test]
    fn test_new_array_is_empty_with_capacity_one() {
        let array: DynamicArray<i32> = DynamicArray::new();
        assert_eq!(array.len(), 0);
        assert_eq!(array.capacity(), 1);
        assert!(array.is_empty());
    }

    #[test]
    fn test_append_doubles_capacity() {
        let mut array = DynamicArray::new();
        let mut capacities = Vec::new();
        for v in 0..9 {
            array.append(v);
            capacities.push(array.capacity());
        }
        assert_eq!(capacities, vec![1, 2, 4, 4, 8, 8, 8, 8, 16]);
        assert_eq!(array.reallocations(), 4);
    }

    #[test]
    fn test_insert_scenario() {
        let mut array = from_values(&[4, 5, 10, 15, 22]);
        assert_eq!(contents(&array), vec![4, 5, 10, 15, 22]);
        assert_eq!(array.len(), 5);
        assert_eq!(array.capacity(), 8);

        array.insert(1, 22).unwrap();
        assert_eq!(contents(&array), vec![4, 22, 5, 10, 15, 22]);
        assert_eq!(array.len(), 6);

        array.insert(4, 10).unwrap();
        assert_eq!(contents(&array), vec![4, 22, 5, 10, 10, 15, 22]);
        assert_eq!(array.len(), 7);
        assert_eq!(array.capacity(), 8);
    }

    #[test]
    fn test_insert_at_len_appends() {
        let mut array = from_values(&[1, 2]);
        array.insert(2, 3).unwrap();
        assert_eq!(contents(&array), vec![1, 2, 3]);
    }

    #[test]
    fn test_insert_when_full_grows_before_shifting() {
        let mut array = from_values(&[1, 2, 3, 4]);
        assert_eq!(array.capacity(), 4);
        array.insert(0, 0).unwrap();
        assert_eq!(contents(&array), vec![0, 1, 2, 3, 4]);
        assert_eq!(array.capacity(), 8);
    }

    #[test]
    fn test_insert_past_len_fails_without_mutation() {
        let mut array = from_values(&[1, 2]);
        let err = array.insert(3, 9).unwrap_err();
        assert_eq!(err, CollectionError::IndexOutOfBounds { index: 3, length: 2 });
        assert_eq!(contents(&array), vec![1, 2]);
        assert_eq!(array.capacity(), 2);
    }

    #[test]
    fn test_pop_default_and_positional() {
        let mut array = from_values(&[4, 22, 5, 10]);
        assert_eq!(array.pop().unwrap(), 10);
        assert_eq!(array.pop_at(1).unwrap(), 22);
        assert_eq!(contents(&array), vec![4, 5]);
        assert_eq!(array.pop_at(0).unwrap(), 4);
        assert_eq!(contents(&array), vec![5]);
    }

    #[test]
    fn test_pop_clears_vacated_slot() {
        let mut array = from_values(&[1, 2, 3]);
        array.pop_at(0).unwrap();
        assert_eq!(array.buffer.occupied(), 2);
        assert!(array.buffer.get(2).is_none());
    }

    #[test]
    fn test_pop_never_shrinks() {
        let mut array = from_values(&[1, 2, 3, 4, 5]);
        while array.pop().is_ok() {}
        assert_eq!(array.len(), 0);
        assert_eq!(array.capacity(), 8);
    }

    #[test]
    fn test_boundary_errors() {
        let mut array: DynamicArray<i32> = DynamicArray::new();
        assert!(matches!(array.get(0), Err(CollectionError::IndexOutOfBounds { .. })));
        assert!(matches!(array.pop(), Err(CollectionError::IndexOutOfBounds { .. })));
        assert!(matches!(array.pop_at(0), Err(CollectionError::IndexOutOfBounds { .. })));
        assert!(matches!(array.insert(1, 0), Err(CollectionError::IndexOutOfBounds { .. })));

        array.append(1);
        assert_eq!(
            array.get(1).unwrap_err(),
            CollectionError::IndexOutOfBounds { index: 1, length: 1 }
        );
        assert!(array.pop_at(1).is_err());
        assert_eq!(array.len(), 1);
    }

    #[test]
    fn test_get_mut() {
        let mut array = from_values(&[1, 2, 3]);
        *array.get_mut(1).unwrap() = 20;
        assert_eq!(array.get(1), Ok(&20));
    }

    #[test]
    fn test_with_capacity_zero_is_raised_to_one() {
        let array: DynamicArray<u8> = DynamicArray::with_capacity(0);
        assert_eq!(array.capacity(), 1);

        let array: DynamicArray<u8> = DynamicArray::with_capacity(3);
        assert_eq!(array.capacity(), 3);
    }

    #[test]
    fn test_display() {
        let array = from_values(&[4, 5, 10]);
        assert_eq!(array.to_string(), "DynamicArray([4, 5, 10])");
        assert_eq!(DynamicArray::<i32>::new().to_string(), "DynamicArray([])");
    }

    #[test]
    fn test_equality_ignores_capacity() {
        let mut grown = from_values(&[1, 2, 3, 4, 5]);
        while grown.len() > 2 {
            grown.pop().unwrap();
        }
        let fresh = from_values(&[1, 2]);
        assert_ne!(grown.capacity(), fresh.capacity());
        assert_eq!(grown, fresh);
    }

    #[test]
    fn test_owned_values_move_through_growth() {
        let mut array = DynamicArray::new();
        for word in ["a", "b", "c"] {
            array.append(word.to_string());
        }
        array.insert(1, "x".to_string()).unwrap();
        let joined: Vec<&str> = array.iter().map(String::as_str).collect();
        assert_eq!(joined, vec!["a", "x", "b", "c"]);
        assert_eq!(array.pop_at(1).unwrap(), "x");
    }

    #[test]
    fn test_sequential_store_impl() {
        let mut array: DynamicArray<i32> = DynamicArray::new();
        assert_eq!(SequentialStore::back(&array), None);
        array.push_back(1);
        array.push_back(2);
        assert_eq!(SequentialStore::back(&array), Some(&2));
        if let Some(top) = array.back_mut() {
            *top = 3;
        }
        assert_eq!(array.pop_back(), Some(3));
        assert_eq!(array.pop_back(), Some(1));
        assert_eq!(array.pop_back(), None);
    }
}
