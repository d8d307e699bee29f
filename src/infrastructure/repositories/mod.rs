//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod target_store;

pub use target_store::FsTargetStore;
