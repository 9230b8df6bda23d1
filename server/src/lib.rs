//! HTTP transport for the todo resource core.
//!
//! Maps routes to handler operations and handler outcomes to status codes:
//! `InvalidInput` becomes 400 with the validation message as the body,
//! `NotFound` becomes 404. Malformed JSON and unparseable path ids are
//! rejected by the axum extractors before reaching the core. The same
//! `RequestMetrics` sink the handler reports into backs `GET /metrics`.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tokio::net::TcpListener;
use todo_core::{
    ApiError, CreateTodo, InMemoryStore, InstrumentationSink, MetricsSnapshot, RequestMetrics,
    TodoHandler, TodoId, TodoItem,
};

#[derive(Clone)]
struct AppState {
    handler: Arc<TodoHandler>,
    metrics: Arc<RequestMetrics>,
}

pub fn app() -> Router {
    let metrics = Arc::new(RequestMetrics::new());
    let sink: Arc<dyn InstrumentationSink> = metrics.clone();
    let handler = Arc::new(TodoHandler::new(Arc::new(InMemoryStore::new()), sink));
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo).put(replace_todo).delete(delete_todo),
        )
        .route("/metrics", get(metrics_snapshot))
        .route("/health", get(health))
        .with_state(AppState { handler, metrics })
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn error_response(err: ApiError) -> Response {
    match err {
        ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
        ApiError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
    }
}

async fn list_todos(State(state): State<AppState>) -> Json<Vec<TodoItem>> {
    Json(state.handler.list())
}

async fn create_todo(State(state): State<AppState>, Json(input): Json<CreateTodo>) -> Response {
    match state.handler.create(input) {
        Ok(created) => (
            StatusCode::CREATED,
            [(header::LOCATION, created.location)],
            Json(created.todo),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

async fn get_todo(State(state): State<AppState>, Path(id): Path<TodoId>) -> Response {
    match state.handler.get(id) {
        Ok(todo) => Json(todo).into_response(),
        Err(err) => error_response(err),
    }
}

async fn replace_todo(
    State(state): State<AppState>,
    Path(id): Path<TodoId>,
    Json(item): Json<TodoItem>,
) -> Response {
    match state.handler.replace(id, item) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err),
    }
}

async fn delete_todo(State(state): State<AppState>, Path(id): Path<TodoId>) -> Response {
    match state.handler.delete(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err),
    }
}

async fn metrics_snapshot(State(state): State<AppState>) -> Json<MetricsSnapshot> {
    Json(state.metrics.snapshot())
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
