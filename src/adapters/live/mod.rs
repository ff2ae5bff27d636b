//! Live adapters for real storage and randomness.

pub mod file_store;
pub mod id_gen;
pub mod memory_store;

pub use file_store::FileStore;
pub use id_gen::LiveIdGenerator;
pub use memory_store::MemoryStore;
