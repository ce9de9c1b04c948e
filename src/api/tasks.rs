//! Task CRUD endpoints.
//!
//! Each endpoint maps one store operation to HTTP. Method mismatches on a
//! known path answer 405 with an empty body from the method router; the
//! request never reaches a handler.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use crate::store::Task;

use super::routes::AppState;

/// Create task routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route("/tasks/:id", get(get_task).delete(delete_task))
}

/// GET /tasks - List all tasks as a JSON object keyed by id.
async fn list_tasks(State(state): State<Arc<AppState>>) -> Response {
    let tasks = state.store.list().await;

    match serde_json::to_string(&tasks) {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}

/// POST /tasks - Store the task from the request body, overwriting any
/// existing record with the same id.
///
/// The body is parsed as a single JSON task object; no content-type is
/// required. Absent fields default to their zero values.
async fn create_task(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let task: Task =
        serde_json::from_slice(&body).map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    tracing::debug!(id = %task.id, "storing task");
    state.store.put(task).await;

    Ok((
        StatusCode::CREATED,
        [(header::CONTENT_TYPE, "application/json")],
    ))
}

/// GET /tasks/:id - Get a single task by id.
async fn get_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, (StatusCode, String)> {
    let task = state
        .store
        .get(&id)
        .await
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let body =
        serde_json::to_string(&task).map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}

/// DELETE /tasks/:id - Delete a task by id.
async fn delete_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    state
        .store
        .delete(&id)
        .await
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    tracing::debug!(id = %id, "deleted task");

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
    ))
}
