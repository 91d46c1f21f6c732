//! Domain DTOs for the task-list API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently
//! so the client compiles without the server crate. Integration tests catch
//! schema drift between the two.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single task as held by the remote store.
///
/// `id` is assigned by the store on creation; the client never makes one up.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: Uuid,
    pub text: String,
    pub done: bool,
}

/// Request payload for creating a new task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    pub text: String,
    #[serde(default)]
    pub done: bool,
}

/// Request payload for updating an existing task. Fields absent from the
/// JSON are left unchanged by the store; this client only ever sends `done`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTask {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
}
