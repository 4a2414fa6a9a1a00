// main.rs

mod builtins;
mod completion;
mod error;
mod eval;
mod history;
mod parser;
mod repl;
mod util;

fn main() -> anyhow::Result<()> {
    repl::start_repl()
}
