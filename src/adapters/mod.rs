// Adapters layer: concrete ledger stores.

pub mod memory;
pub mod text_file;

pub use memory::MemoryStore;
pub use text_file::{TextFile, TextFileStore};
