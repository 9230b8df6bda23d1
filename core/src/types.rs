//! Domain DTOs for the todo resource.
//!
//! # Design
//! These types are defined independently from the server crate so the core
//! stays free of HTTP concerns. Wire names are camelCase (`isComplete`);
//! integration tests in the server crate catch any schema drift.

use serde::{Deserialize, Serialize};

/// Identifier minted by the store at creation time. Never reused, never
/// reassigned, strictly increasing across the life of the store.
pub type TodoId = i64;

/// A single todo item as persisted and returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: TodoId,
    pub title: String,
    pub is_complete: bool,
}

/// Request payload for creating a new todo: an item without an id. The id
/// is assigned by the store on insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodo {
    pub title: String,
    #[serde(default)]
    pub is_complete: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_with_camel_case_fields() {
        let todo = TodoItem {
            id: 1,
            title: "Test".to_string(),
            is_complete: false,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["title"], "Test");
        assert_eq!(json["isComplete"], false);
    }

    #[test]
    fn todo_roundtrips_through_json() {
        let todo = TodoItem {
            id: 42,
            title: "Roundtrip".to_string(),
            is_complete: true,
        };
        let json = serde_json::to_string(&todo).unwrap();
        let back: TodoItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, todo);
    }

    #[test]
    fn create_todo_defaults_is_complete_to_false() {
        let input: CreateTodo = serde_json::from_str(r#"{"title":"No flag"}"#).unwrap();
        assert_eq!(input.title, "No flag");
        assert!(!input.is_complete);
    }

    #[test]
    fn create_todo_accepts_explicit_is_complete() {
        let input: CreateTodo =
            serde_json::from_str(r#"{"title":"Done","isComplete":true}"#).unwrap();
        assert!(input.is_complete);
    }

    #[test]
    fn create_todo_rejects_missing_title() {
        let result: Result<CreateTodo, _> = serde_json::from_str(r#"{"isComplete":true}"#);
        assert!(result.is_err());
    }
}
