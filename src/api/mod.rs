//! HTTP API for the task service.
//!
//! ## Endpoints
//!
//! - `GET /tasks` - List all tasks as a JSON object keyed by id
//! - `POST /tasks` - Create a task (overwriting any record with the same id)
//! - `GET /tasks/{id}` - Get a single task by id
//! - `DELETE /tasks/{id}` - Delete a task by id

mod routes;
pub mod tasks;

pub use routes::{serve, AppState};
