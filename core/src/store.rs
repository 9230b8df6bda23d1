//! In-memory todo store with stable identity.
//!
//! # Design
//! `TodoStore` is the seam between the handler and whatever holds the data;
//! the handler depends only on the trait, so an in-memory store can be
//! swapped for a durable one without touching validation or error mapping.
//! `InMemoryStore` keeps the mint counter and the item map under one lock so
//! every operation's read-modify-write runs as a single atomic unit: two
//! concurrent inserts never share an id, and a replace racing a delete
//! resolves to exactly one winner.

use std::collections::HashMap;
use std::sync::RwLock;

use thiserror::Error;

use crate::types::{CreateTodo, TodoId, TodoItem};

/// Failures reported by store operations. Both are expected outcomes the
/// handler maps to API results, not faults.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No item with the given id currently exists.
    #[error("no todo with id {0}")]
    NotFound(TodoId),

    /// The title is empty or whitespace-only. The handler rejects these
    /// before calling the store; this variant is defense in depth.
    #[error("title must not be empty")]
    EmptyTitle,
}

/// Identity-stable, thread-safe keeper of todo items.
pub trait TodoStore: Send + Sync {
    /// Point-in-time snapshot of all items. Never fails.
    fn list(&self) -> Vec<TodoItem>;

    /// O(1) lookup. Absence is a valid outcome, not an error.
    fn get(&self, id: TodoId) -> Option<TodoItem>;

    /// Mints a fresh id strictly greater than any previously minted id
    /// (never reused, even after deletion), stores the item, and returns
    /// the stored copy.
    fn insert(&self, input: CreateTodo) -> Result<TodoItem, StoreError>;

    /// Overwrites the entire record except `id`. No implicit creation:
    /// reports `NotFound` if the id does not currently exist.
    fn replace(&self, id: TodoId, item: TodoItem) -> Result<(), StoreError>;

    /// Removes the item if present, `NotFound` otherwise.
    fn delete(&self, id: TodoId) -> Result<(), StoreError>;

    /// Whether an item with this id currently exists.
    fn exists(&self, id: TodoId) -> bool;
}

#[derive(Debug)]
struct Inner {
    next_id: TodoId,
    items: HashMap<TodoId, TodoItem>,
}

/// Volatile store backed by a `HashMap` under a single `RwLock`.
///
/// Lives for the process lifetime; contents are lost on restart.
#[derive(Debug)]
pub struct InMemoryStore {
    inner: RwLock<Inner>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_id: 1,
                items: HashMap::new(),
            }),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore for InMemoryStore {
    fn list(&self) -> Vec<TodoItem> {
        let inner = self.inner.read().unwrap();
        inner.items.values().cloned().collect()
    }

    fn get(&self, id: TodoId) -> Option<TodoItem> {
        let inner = self.inner.read().unwrap();
        inner.items.get(&id).cloned()
    }

    fn insert(&self, input: CreateTodo) -> Result<TodoItem, StoreError> {
        if input.title.trim().is_empty() {
            return Err(StoreError::EmptyTitle);
        }
        let mut inner = self.inner.write().unwrap();
        let id = inner.next_id;
        inner.next_id += 1;
        let todo = TodoItem {
            id,
            title: input.title,
            is_complete: input.is_complete,
        };
        inner.items.insert(id, todo.clone());
        Ok(todo)
    }

    fn replace(&self, id: TodoId, item: TodoItem) -> Result<(), StoreError> {
        if item.title.trim().is_empty() {
            return Err(StoreError::EmptyTitle);
        }
        let mut inner = self.inner.write().unwrap();
        if !inner.items.contains_key(&id) {
            return Err(StoreError::NotFound(id));
        }
        // Full-record overwrite; the id stays whatever the path said.
        inner.items.insert(
            id,
            TodoItem {
                id,
                title: item.title,
                is_complete: item.is_complete,
            },
        );
        Ok(())
    }

    fn delete(&self, id: TodoId) -> Result<(), StoreError> {
        let mut inner = self.inner.write().unwrap();
        inner
            .items
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    fn exists(&self, id: TodoId) -> bool {
        let inner = self.inner.read().unwrap();
        inner.items.contains_key(&id)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn new_todo(title: &str) -> CreateTodo {
        CreateTodo {
            title: title.to_string(),
            is_complete: false,
        }
    }

    #[test]
    fn insert_then_get_returns_equal_item() {
        let store = InMemoryStore::new();
        let created = store.insert(new_todo("buy milk")).unwrap();
        assert_eq!(store.get(created.id), Some(created));
    }

    #[test]
    fn ids_are_strictly_increasing() {
        let store = InMemoryStore::new();
        let a = store.insert(new_todo("a")).unwrap();
        let b = store.insert(new_todo("b")).unwrap();
        assert!(b.id > a.id);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let store = InMemoryStore::new();
        let a = store.insert(new_todo("a")).unwrap();
        store.delete(a.id).unwrap();
        let b = store.insert(new_todo("b")).unwrap();
        assert!(b.id > a.id);
    }

    #[test]
    fn insert_rejects_whitespace_title_and_stores_nothing() {
        let store = InMemoryStore::new();
        assert_eq!(store.insert(new_todo("   ")), Err(StoreError::EmptyTitle));
        assert!(store.list().is_empty());
    }

    #[test]
    fn replace_overwrites_record_but_keeps_id() {
        let store = InMemoryStore::new();
        let created = store.insert(new_todo("before")).unwrap();
        store
            .replace(
                created.id,
                TodoItem {
                    id: created.id,
                    title: "after".to_string(),
                    is_complete: true,
                },
            )
            .unwrap();
        let fetched = store.get(created.id).unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.title, "after");
        assert!(fetched.is_complete);
    }

    #[test]
    fn replace_missing_id_reports_not_found_without_upsert() {
        let store = InMemoryStore::new();
        let result = store.replace(
            99,
            TodoItem {
                id: 99,
                title: "ghost".to_string(),
                is_complete: false,
            },
        );
        assert_eq!(result, Err(StoreError::NotFound(99)));
        assert!(!store.exists(99));
    }

    #[test]
    fn delete_then_get_reports_absent() {
        let store = InMemoryStore::new();
        let created = store.insert(new_todo("gone soon")).unwrap();
        store.delete(created.id).unwrap();
        assert_eq!(store.get(created.id), None);
        assert_eq!(
            store.delete(created.id),
            Err(StoreError::NotFound(created.id))
        );
    }

    #[test]
    fn concurrent_inserts_mint_distinct_ids() {
        let store = Arc::new(InMemoryStore::new());
        let handles: Vec<_> = (0..100)
            .map(|i| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || store.insert(new_todo(&format!("task {i}"))).unwrap())
            })
            .collect();

        let mut ids: Vec<TodoId> = handles
            .into_iter()
            .map(|h| h.join().unwrap().id)
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 100);
        assert_eq!(store.list().len(), 100);
    }

    #[test]
    fn replace_racing_delete_has_one_winner() {
        let store = Arc::new(InMemoryStore::new());
        let created = store.insert(new_todo("contested")).unwrap();
        let id = created.id;

        let replacer = {
            let store = Arc::clone(&store);
            std::thread::spawn(move || {
                store.replace(
                    id,
                    TodoItem {
                        id,
                        title: "rewritten".to_string(),
                        is_complete: true,
                    },
                )
            })
        };
        let deleter = {
            let store = Arc::clone(&store);
            std::thread::spawn(move || store.delete(id))
        };

        let replaced = replacer.join().unwrap();
        let deleted = deleter.join().unwrap();

        match (replaced, deleted) {
            // Delete committed first; the item is gone either way.
            (Err(StoreError::NotFound(_)), Ok(())) => assert!(!store.exists(id)),
            // Replace committed first, then the delete removed it.
            (Ok(()), Ok(())) => assert!(!store.exists(id)),
            other => panic!("unexpected outcome pair: {other:?}"),
        }
    }
}
