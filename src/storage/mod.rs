//! Storage implementations for record stores

pub mod in_memory;

pub use in_memory::InMemoryRecordStore;
