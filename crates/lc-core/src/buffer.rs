//! Fixed-capacity block of slots.
//!
//! A `RawBuffer` is the storage underneath the dynamic array. It never grows:
//! the owner allocates a new, larger buffer and moves the values across.
//!
//! ```text
//! capacity = 4
//! slots:  [Some(a)] [Some(b)] [None] [None]
//!            0         1        2      3
//! ```
//!
//! Slot indices must be below `capacity()`. Checking the logical length is
//! the owner's job; an index past the capacity is an invariant violation and
//! panics like slice indexing does.

/// A contiguous owned allocation of `capacity` optional slots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawBuffer<T> {
    slots: Box<[Option<T>]>,
}

impl<T> RawBuffer<T> {
    /// Allocate `capacity` empty slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(capacity).collect(),
        }
    }

    /// Number of slots, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Borrow the value in a slot, `None` if the slot is vacant.
    pub fn get(&self, slot: usize) -> Option<&T> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, slot: usize) -> Option<&mut T> {
        self.slots.get_mut(slot).and_then(Option::as_mut)
    }

    /// Store a value, returning whatever occupied the slot before.
    pub fn put(&mut self, slot: usize, value: T) -> Option<T> {
        self.slots[slot].replace(value)
    }

    /// Move the value out, leaving the slot vacant.
    pub fn take(&mut self, slot: usize) -> Option<T> {
        self.slots[slot].take()
    }

    /// Move the value in `from` into `to`. `from` is left vacant.
    pub fn shift(&mut self, from: usize, to: usize) {
        let value = self.slots[from].take();
        self.slots[to] = value;
    }

    /// Count of occupied slots (O(capacity), diagnostic use).
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}
