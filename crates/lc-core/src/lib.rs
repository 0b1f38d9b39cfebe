// File: `crates/lc-core/src/lib.rs`
pub mod buffer;
pub mod error;
pub mod store;

pub use buffer::RawBuffer;
pub use error::{CollectionError, Result};
pub use store::SequentialStore;
