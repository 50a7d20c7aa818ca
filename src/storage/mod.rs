//! Item persistence collaborators.
//!
//! The engine never talks to a store directly: callers fetch the full
//! collection once per query cycle and pass it in. Two implementations are
//! provided: [`MemoryStore`] for tests and ephemeral use, and
//! [`JsonFileStore`] for a single-file local collection.

pub mod file;
pub mod memory;
pub mod traits;

pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use traits::ItemStore;
