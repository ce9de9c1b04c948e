//! # tasktrack
//!
//! Minimal task-tracking HTTP service backed by process-local memory.
//!
//! This library provides:
//! - An in-memory task store keyed by caller-supplied string IDs
//! - HTTP CRUD endpoints for task records
//!
//! ## Request Flow
//! 1. Router dispatches by method and path
//! 2. Handler performs one store operation
//! 3. Result is serialized as JSON and returned
//!
//! ## Modules
//! - `api`: HTTP routes and handlers
//! - `config`: environment-based server configuration
//! - `store`: the in-memory task store

pub mod api;
pub mod config;
pub mod store;

pub use config::Config;
pub use store::{Task, TaskStore};
