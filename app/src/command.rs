//! Line-oriented command parsing for the interactive loop.
//!
//! Rows are 1-based positions in the rendered list, so `toggle 2` acts on
//! the second row currently on screen.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Toggle(usize),
    Delete(usize),
    Refresh,
    Help,
    Quit,
    Unknown(String),
}

pub fn parse(line: &str) -> Command {
    let trimmed = line.trim();
    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (trimmed, ""),
    };

    match word {
        "add" | "a" => Command::Add(rest.to_string()),
        "toggle" | "t" => row(rest).map_or_else(|| unknown(trimmed), Command::Toggle),
        "delete" | "d" => row(rest).map_or_else(|| unknown(trimmed), Command::Delete),
        "refresh" | "r" | "list" => Command::Refresh,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => unknown(trimmed),
    }
}

fn row(rest: &str) -> Option<usize> {
    rest.parse::<usize>().ok().filter(|n| *n >= 1)
}

fn unknown(line: &str) -> Command {
    Command::Unknown(line.to_string())
}
