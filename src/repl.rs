// repl.rs

use anyhow::Context as _;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{CompletionType, Config, Editor};

use crate::builtins::{is_builtin, run_builtin};
use crate::completion::KeywordCompleter;
use crate::eval::eval_line;
use crate::history::History;
use crate::parser::tokenize;
use crate::util::writeln_ignore_broken_pipe;

const PROMPT: &str = "# ";

pub fn start_repl() -> anyhow::Result<()> {
    let config = Config::builder().completion_type(CompletionType::List).build();
    let mut rl: Editor<KeywordCompleter, DefaultHistory> =
        Editor::with_config(config).context("failed to create line editor")?;
    rl.set_helper(Some(KeywordCompleter));
    // The result history is owned here and handed to the evaluator by
    // reference; nothing else can touch it.
    let mut history = History::new();
    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                // Editor-side recall of input lines, unrelated to the
                // result history.
                let _ = rl.add_history_entry(trimmed);
                let tokens = tokenize(trimmed);
                if is_builtin(tokens[0]) {
                    run_builtin(&tokens, &history);
                    continue;
                }
                match eval_line(trimmed, &history) {
                    Ok(result) => {
                        history.push(result);
                        let _ = writeln_ignore_broken_pipe(std::io::stdout(), result.to_string());
                    }
                    Err(err) => eprintln!("error: {}", err),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err).context("failed to read input"),
        }
    }
    Ok(())
}
