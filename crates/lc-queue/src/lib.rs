//! # lc-queue
//!
//! A FIFO queue built from two LIFO stacks.
//!
//! ```text
//! enqueue ──▶ [inbound]     [outbound] ──▶ dequeue
//! ```
//!
//! Values are pushed onto `inbound`. A dequeue pops from `outbound`; only
//! when `outbound` is empty is `inbound` drained into it, which reverses the
//! order back to arrival order. Each value is moved at most once, so
//! dequeue is amortized O(1).

mod queue;

pub use lc_core::{CollectionError, Result};
pub use queue::StackQueue;
