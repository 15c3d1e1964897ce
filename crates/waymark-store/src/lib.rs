//! Waymark Store - Key-value storage adapters
//!
//! This crate provides the adapter implementations behind the
//! `waymark_core::ports::KeyValueStore` port: a file-backed store for the
//! application and an in-memory store for development and testing.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;
