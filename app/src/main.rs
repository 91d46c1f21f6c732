//! Interactive terminal front end for the task-list client.
//!
//! Resolves the endpoint once at startup (first CLI argument, then
//! `TASKLIST_API_URL`, then the loopback default), performs the initial
//! load, and then drives `TaskListView` from line-oriented commands,
//! reprinting the rendered view after every operation. Failures surface in
//! the view's error banner; the loop itself never dies on one.

mod command;
mod transport;

use std::io::{self, BufRead, Write};

use log::debug;
use tasklist_core::{view, Config, TaskClient, TaskListView};
use uuid::Uuid;

use crate::command::Command;
use crate::transport::Transport;

const HELP: &str = "\
commands:
  add <text>     create a task
  toggle <row>   flip done for the task at <row>
  delete <row>   delete the task at <row>
  refresh        reload the list from the server
  help           show this message
  quit           exit";

fn main() -> io::Result<()> {
    env_logger::init();

    let config = Config::resolve(std::env::args().nth(1).as_deref());
    debug!("using endpoint {}", config.base_url);

    let transport = Transport::new();
    let mut view = TaskListView::new(TaskClient::new(&config.base_url));

    let request = view.start_load();
    print!("{}", view::render(view.state()));
    view.finish_load(transport.execute(request));
    print!("{}", view::render(view.state()));

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match command::parse(&line) {
            Command::Add(text) => {
                view.set_pending_input(&text);
                if let Some(request) = view.start_add() {
                    view.finish_add(transport.execute(request));
                }
            }
            Command::Toggle(row) => match task_id_at(&view, row) {
                Some(id) => {
                    if let Some(request) = view.start_toggle(id) {
                        view.finish_toggle(transport.execute(request));
                    }
                }
                None => {
                    println!("no task at row {row}");
                    continue;
                }
            },
            Command::Delete(row) => match task_id_at(&view, row) {
                Some(id) => {
                    let request = view.start_delete(id);
                    view.finish_delete(id, transport.execute(request));
                }
                None => {
                    println!("no task at row {row}");
                    continue;
                }
            },
            Command::Refresh => {
                let request = view.start_load();
                view.finish_load(transport.execute(request));
            }
            Command::Help => {
                println!("{HELP}");
                continue;
            }
            Command::Quit => break,
            Command::Unknown(input) => {
                println!("unrecognized command: {input} (try `help`)");
                continue;
            }
        }
        print!("{}", view::render(view.state()));
    }

    Ok(())
}

/// Map a 1-based display row to the task id currently shown there.
fn task_id_at(view: &TaskListView, row: usize) -> Option<Uuid> {
    view.state().tasks.get(row.checked_sub(1)?).map(|t| t.id)
}
