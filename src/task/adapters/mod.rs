//! Adapter implementations for the task board ports.
//!
//! # Available Adapters
//!
//! - [`memory::InMemoryTaskRepository`]: the owning task collection
//! - [`memory::InMemorySnapshotStore`]: snapshot store for tests
//! - [`json_file::JsonFileSnapshotStore`]: JSON array snapshot on disk
//! - [`external`]: mapping of foreign task records into the domain

pub mod external;
pub mod json_file;
pub mod memory;
