//! Resource management core for the todo service.
//!
//! # Overview
//! Holds the entity model, the store abstraction that keeps items with
//! stable identity, and the handler that validates input and maps store
//! outcomes to API-level results. No HTTP types and no async runtime appear
//! here; the server crate owns the transport mapping, and instrumentation
//! leaves through an injected sink.
//!
//! # Design
//! - `InMemoryStore` protects the item map and the id mint counter with one
//!   lock, so operations are atomic under true parallelism.
//! - `TodoHandler` is stateless between calls; items pass by value.
//! - `InvalidInput` and `NotFound` are ordinary return values, not faults.

pub mod error;
pub mod handler;
pub mod instrument;
pub mod store;
pub mod types;

pub use error::ApiError;
pub use handler::{Created, TodoHandler};
pub use instrument::{InstrumentationSink, MetricsSnapshot, NoopSink, Outcome, RequestMetrics};
pub use store::{InMemoryStore, StoreError, TodoStore};
pub use types::{CreateTodo, TodoId, TodoItem};
