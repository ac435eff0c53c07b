//! Task management for the task board.
//!
//! This module covers task records and their variants, the store that owns
//! the collection, view ordering, due-date alerts, ingestion of foreign task
//! records, and per-variant presentation. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - Variant presenter dispatch in [`presentation`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod presentation;
pub mod services;

#[cfg(test)]
mod tests;
