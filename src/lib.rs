//! Taskboard: an in-memory to-do task model.
//!
//! This crate provides the core of a single-user to-do list: task records
//! with basic, timed, and checklist variants, a store that owns the task
//! collection, view ordering strategies, overdue and due-soon alerts,
//! ingestion of foreign task records, and per-variant presentation.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task model with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage and snapshots
//! - **Adapters**: Concrete implementations of ports (memory, JSON file)
//!
//! # Modules
//!
//! - [`task`]: Task model, store, sorting, alerts, and presentation
//! - [`config`]: Aggregate configuration

pub mod config;
pub mod task;
