//! Client core for the task-list service.
//!
//! # Overview
//! A task list is fetched from a remote HTTP store and edited through four
//! round trips: list, create, update, delete. This crate holds everything
//! except the network itself (host-does-IO pattern): the caller executes the
//! `HttpRequest` values produced here and feeds the outcomes back, which
//! keeps the whole crate deterministic and testable without a server.
//!
//! # Design
//! - `TaskClient` is stateless wire plumbing: `build_*` produces a request,
//!   `parse_*` consumes a response.
//! - `TaskListView` owns the single `ViewState` instance and is the only
//!   place that mutates it. Each user action is a `start_*` / `finish_*`
//!   pair around one round trip; mutation happens only in `finish_*`, so a
//!   single-threaded host serializes all state transitions.
//! - `view` renders `ViewState` to text; `config` resolves the endpoint once
//!   at startup.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod state;
pub mod types;
pub mod view;

pub use client::TaskClient;
pub use config::Config;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use state::{Stats, TaskListView, ViewState};
pub use types::{CreateTask, Task, UpdateTask};
