//! Request-shaped orchestration atop the store.
//!
//! # Design
//! `TodoHandler` is the only place validation and error-mapping policy
//! lives. It holds no item state across calls; items pass through by value
//! per request. It depends on `TodoStore` and `InstrumentationSink` as trait
//! objects so both the backing store and the telemetry destination can be
//! swapped without touching this logic. Every operation emits exactly one
//! instrumentation event: operation name, outcome, elapsed duration.

use std::sync::Arc;
use std::time::Instant;

use crate::error::ApiError;
use crate::instrument::{InstrumentationSink, Outcome};
use crate::store::TodoStore;
use crate::types::{CreateTodo, TodoId, TodoItem};

/// Successful create result: the stored item plus a location reference
/// usable to re-fetch it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Created {
    pub todo: TodoItem,
    pub location: String,
}

/// Handler for the five todo operations.
pub struct TodoHandler {
    store: Arc<dyn TodoStore>,
    sink: Arc<dyn InstrumentationSink>,
}

impl TodoHandler {
    pub fn new(store: Arc<dyn TodoStore>, sink: Arc<dyn InstrumentationSink>) -> Self {
        Self { store, sink }
    }

    pub fn list(&self) -> Vec<TodoItem> {
        let start = Instant::now();
        tracing::info!("listing todos");
        let todos = self.store.list();
        self.sink.record("list", Outcome::Success, start.elapsed());
        todos
    }

    pub fn get(&self, id: TodoId) -> Result<TodoItem, ApiError> {
        self.observed("get", || {
            tracing::info!(id, "getting todo");
            match self.store.get(id) {
                Some(todo) => Ok(todo),
                None => {
                    tracing::warn!(id, "todo not found");
                    Err(ApiError::NotFound)
                }
            }
        })
    }

    pub fn create(&self, input: CreateTodo) -> Result<Created, ApiError> {
        self.observed("create", || {
            tracing::info!(title = %input.title, "creating todo");
            if input.title.trim().is_empty() {
                tracing::warn!("rejected create with empty title");
                return Err(ApiError::InvalidInput("Title is required".to_string()));
            }
            let todo = self.store.insert(input)?;
            tracing::info!(id = todo.id, "created todo");
            Ok(Created {
                location: format!("/todos/{}", todo.id),
                todo,
            })
        })
    }

    pub fn replace(&self, id: TodoId, item: TodoItem) -> Result<(), ApiError> {
        self.observed("replace", || {
            if item.id != id {
                tracing::warn!(path_id = id, body_id = item.id, "rejected mismatched ids");
                return Err(ApiError::InvalidInput("Id mismatch".to_string()));
            }
            if item.title.trim().is_empty() {
                tracing::warn!(id, "rejected replace with empty title");
                return Err(ApiError::InvalidInput("Title is required".to_string()));
            }
            tracing::info!(id, "replacing todo");
            // No existence pre-check: the store reports NotFound itself, so
            // a delete that lands between here and the store call still
            // resolves to a consistent answer.
            match self.store.replace(id, item) {
                Ok(()) => Ok(()),
                Err(err) => {
                    tracing::warn!(id, %err, "replace failed");
                    Err(err.into())
                }
            }
        })
    }

    pub fn delete(&self, id: TodoId) -> Result<(), ApiError> {
        self.observed("delete", || {
            tracing::info!(id, "deleting todo");
            match self.store.delete(id) {
                Ok(()) => Ok(()),
                Err(err) => {
                    tracing::warn!(id, "todo not found for deletion");
                    Err(err.into())
                }
            }
        })
    }

    /// Times `op` and records one instrumentation event for it.
    fn observed<T>(
        &self,
        operation: &'static str,
        op: impl FnOnce() -> Result<T, ApiError>,
    ) -> Result<T, ApiError> {
        let start = Instant::now();
        let result = op();
        let outcome = match &result {
            Ok(_) => Outcome::Success,
            Err(err) => Outcome::from(err),
        };
        self.sink.record(operation, outcome, start.elapsed());
        result
    }
}
