//! Text rendering of `ViewState`.
//!
//! One pure function from state to the block of text a terminal front end
//! prints after every operation: title, error banner, preserved draft, task
//! rows (numbered so toggle/delete can address them), placeholders for the
//! loading and empty cases, and the stats footer.

use crate::state::ViewState;

const TITLE: &str = "== My Task List ==";
const LOADING: &str = "Loading tasks...";
const EMPTY: &str = "No tasks yet. Add one!";

pub fn render(state: &ViewState) -> String {
    let mut out = String::new();
    out.push_str(TITLE);
    out.push('\n');

    if let Some(err) = &state.last_error {
        out.push_str(&format!("! {err}\n"));
    }
    if !state.pending_input.is_empty() {
        out.push_str(&format!("draft: {}\n", state.pending_input));
    }

    if state.is_loading {
        out.push_str(LOADING);
        out.push('\n');
    } else if state.tasks.is_empty() {
        out.push_str(EMPTY);
        out.push('\n');
    } else {
        for (index, task) in state.tasks.iter().enumerate() {
            let mark = if task.done { 'x' } else { ' ' };
            out.push_str(&format!("{:>2}. [{mark}] {}\n", index + 1, task.text));
        }
    }

    out.push_str(&stats_line(state));
    out.push('\n');
    out
}

pub fn stats_line(state: &ViewState) -> String {
    let stats = state.stats();
    format!(
        "Total: {} | Done: {} | Pending: {}",
        stats.total, stats.done, stats.pending
    )
}
