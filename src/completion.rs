// completion.rs

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Context, Helper};

/// Words worth completing at the prompt: unary operator keywords and
/// builtin commands. The single-character operators are not listed, a
/// one-letter completion saves nothing.
const KEYWORDS: &[&str] = &[
    "abs", "exit", "fact", "history", "neg", "pred", "quit", "sgn", "succ",
];

pub struct KeywordCompleter;

fn candidates_for(prefix: &str) -> Vec<String> {
    if prefix.is_empty() {
        return Vec::new();
    }
    KEYWORDS
        .iter()
        .filter(|k| k.starts_with(prefix))
        .map(|k| k.to_string())
        .collect()
}

impl Completer for KeywordCompleter {
    type Candidate = Pair;
    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> Result<(usize, Vec<Pair>), ReadlineError> {
        // Complete only the word under the cursor.
        let start = line[..pos]
            .rfind(char::is_whitespace)
            .map(|i| i + 1)
            .unwrap_or(0);
        let completions: Vec<Pair> = candidates_for(&line[start..pos])
            .into_iter()
            .map(|name| Pair {
                display: name.clone(),
                replacement: format!("{} ", name),
            })
            .collect();
        Ok((start, completions))
    }
}

impl Hinter for KeywordCompleter {
    type Hint = String;
    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Highlighter for KeywordCompleter {}

impl Validator for KeywordCompleter {
    fn validate(&self, _ctx: &mut ValidationContext) -> Result<ValidationResult, ReadlineError> {
        Ok(ValidationResult::Valid(None))
    }
}

impl Helper for KeywordCompleter {}
