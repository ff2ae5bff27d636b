//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the installer and something it
//! does not own: where identifiers are kept, and where they come from.
//! Implementations live in `src/adapters/`.

pub mod id_gen;
pub mod store;

pub use id_gen::IdGenerator;
pub use store::Store;
