// builtins.rs

use crate::history::History;
use crate::util::writeln_ignore_broken_pipe;

/// Session commands handled outside the expression grammar. None of
/// them evaluate anything, so none of them append to the history.
pub fn is_builtin(command: &str) -> bool {
    matches!(command, "exit" | "quit" | "history")
}

pub fn run_builtin(tokens: &[&str], history: &History) {
    match tokens[0] {
        "exit" | "quit" => std::process::exit(
            tokens
                .get(1)
                .and_then(|s| s.parse::<i32>().ok())
                .unwrap_or(0),
        ),
        "history" => {
            if history.is_empty() {
                return;
            }
            let total = history.len();
            // Optional count limits the listing to the most recent n.
            let start = match tokens.get(1).and_then(|s| s.parse::<usize>().ok()) {
                Some(n) => {
                    if n > total {
                        0
                    } else {
                        total - n
                    }
                }
                None => 0,
            };
            for (i, value) in history.all().iter().enumerate().skip(start) {
                let line = format!("{:>5}  {}", format!("${}", i), value);
                let _ = writeln_ignore_broken_pipe(std::io::stdout(), line);
            }
        }
        _ => unreachable!(),
    }
}
