//! View state and the four user-triggerable operations.
//!
//! # Design
//! `TaskListView` owns the one `ViewState` instance; nothing else mutates
//! it. Each operation is split the same way `TaskClient` splits the wire
//! work: `start_*` produces the `HttpRequest` to execute (or declines to,
//! for a blank submission), the host runs the round trip, and `finish_*`
//! consumes the outcome and applies the state transition. On a
//! single-threaded host every mutation therefore happens at a completion
//! point, one at a time. Overlapping round trips on the same task are not
//! guarded: the last outcome applied wins.
//!
//! Failures never escape an operation. Each `finish_*` folds any `ApiError`
//! into the fixed user-facing message for that action and logs the
//! underlying error; the local task list is only modified on success.

use uuid::Uuid;

use crate::client::TaskClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{CreateTask, Task, UpdateTask};

/// User-facing message for a failed list fetch.
pub const FETCH_FAILED: &str = "Failed to fetch tasks. Make sure the server is running!";
/// User-facing message for a failed create.
pub const ADD_FAILED: &str = "Failed to add task";
/// User-facing message for a failed toggle.
pub const UPDATE_FAILED: &str = "Failed to update task";
/// User-facing message for a failed delete.
pub const DELETE_FAILED: &str = "Failed to delete task";

/// The client's in-memory copy of the store plus transient UI fields.
///
/// `tasks` keeps display order: the order the store returned on the last
/// load, with tasks created since then at the front.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub tasks: Vec<Task>,
    pub pending_input: String,
    pub is_loading: bool,
    pub last_error: Option<String>,
}

/// Counts shown in the stats footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub done: usize,
    pub pending: usize,
}

impl ViewState {
    pub fn stats(&self) -> Stats {
        let total = self.tasks.len();
        let done = self.tasks.iter().filter(|t| t.done).count();
        Stats {
            total,
            done,
            pending: total - done,
        }
    }
}

/// The stateful task-list component: one `ViewState`, four operations.
#[derive(Debug)]
pub struct TaskListView {
    client: TaskClient,
    state: ViewState,
}

impl TaskListView {
    pub fn new(client: TaskClient) -> Self {
        Self {
            client,
            state: ViewState::default(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Replace the not-yet-submitted input text.
    pub fn set_pending_input(&mut self, text: &str) {
        self.state.pending_input = text.to_string();
    }

    /// Begin the initial wholesale fetch of the task list.
    pub fn start_load(&mut self) -> HttpRequest {
        self.state.is_loading = true;
        self.client.build_list_tasks()
    }

    /// Apply the outcome of a load. `is_loading` clears on both paths; the
    /// local list is only replaced on success.
    pub fn finish_load(&mut self, result: Result<HttpResponse, ApiError>) {
        self.state.is_loading = false;
        match result.and_then(|r| self.client.parse_list_tasks(r)) {
            Ok(tasks) => {
                self.state.tasks = tasks;
                self.state.last_error = None;
            }
            Err(err) => {
                log::error!("list tasks failed: {err}");
                self.state.last_error = Some(FETCH_FAILED.to_string());
            }
        }
    }

    /// Begin creating a task from the pending input. Returns `None` without
    /// touching anything when the trimmed input is empty.
    pub fn start_add(&mut self) -> Option<HttpRequest> {
        let text = self.state.pending_input.trim();
        if text.is_empty() {
            return None;
        }
        let input = CreateTask {
            text: text.to_string(),
            done: false,
        };
        self.checked_build(self.client.build_create_task(&input), ADD_FAILED)
    }

    /// Apply the outcome of a create. On success the store's task (carrying
    /// its assigned id) is prepended and the draft is cleared; on failure
    /// the draft stays so the typed text is not lost.
    pub fn finish_add(&mut self, result: Result<HttpResponse, ApiError>) {
        match result.and_then(|r| self.client.parse_create_task(r)) {
            Ok(task) => {
                self.state.tasks.insert(0, task);
                self.state.pending_input.clear();
                self.state.last_error = None;
            }
            Err(err) => {
                log::error!("create task failed: {err}");
                self.state.last_error = Some(ADD_FAILED.to_string());
            }
        }
    }

    /// Begin flipping `done` for the task matching `id`. An id with no
    /// local match still produces a request (flipping from `false`); the
    /// store decides whether the task exists.
    pub fn start_toggle(&mut self, id: Uuid) -> Option<HttpRequest> {
        let current = self
            .state
            .tasks
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.done)
            .unwrap_or(false);
        let input = UpdateTask {
            text: None,
            done: Some(!current),
        };
        self.checked_build(self.client.build_update_task(id, &input), UPDATE_FAILED)
    }

    /// Apply the outcome of a toggle. On success exactly the entry matching
    /// the returned task's id is replaced with the store's representation;
    /// no optimistic flip happens on failure.
    pub fn finish_toggle(&mut self, result: Result<HttpResponse, ApiError>) {
        match result.and_then(|r| self.client.parse_update_task(r)) {
            Ok(task) => {
                if let Some(slot) = self.state.tasks.iter_mut().find(|t| t.id == task.id) {
                    *slot = task;
                }
                self.state.last_error = None;
            }
            Err(err) => {
                log::error!("update task failed: {err}");
                self.state.last_error = Some(UPDATE_FAILED.to_string());
            }
        }
    }

    /// Begin deleting the task matching `id`.
    pub fn start_delete(&self, id: Uuid) -> HttpRequest {
        self.client.build_delete_task(id)
    }

    /// Apply the outcome of a delete. On success the matching entry is
    /// removed; every other entry keeps its position.
    pub fn finish_delete(&mut self, id: Uuid, result: Result<HttpResponse, ApiError>) {
        match result.and_then(|r| self.client.parse_delete_task(r)) {
            Ok(()) => {
                self.state.tasks.retain(|t| t.id != id);
                self.state.last_error = None;
            }
            Err(err) => {
                log::error!("delete task failed: {err}");
                self.state.last_error = Some(DELETE_FAILED.to_string());
            }
        }
    }

    /// Request building only fails on serialization, which never reaches the
    /// network; surface it like any other failure of the action.
    fn checked_build(&mut self, built: Result<HttpRequest, ApiError>, message: &str) -> Option<HttpRequest> {
        match built {
            Ok(req) => Some(req),
            Err(err) => {
                log::error!("building request failed: {err}");
                self.state.last_error = Some(message.to_string());
                None
            }
        }
    }
}
