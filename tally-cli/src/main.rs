//! Tally CLI - command-line calculator REPL
//!
//! This is a thin wrapper around tally-core that builds the executable.
//! It translates typed characters into the engine's five input operations
//! and renders the expression trace and display register after each line.

mod repl;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    repl::run_repl()
}
