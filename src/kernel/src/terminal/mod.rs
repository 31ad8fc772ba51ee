//! Terminal subsystem for Hearth.
//!
//! Provides the command-line shell fed by the keyboard pipeline.
//!
//! # Architecture
//!
//! - `args`: splitting lines into argument vectors
//! - `commands`: command table and built-in commands
//! - `shell`: the prompt/read/dispatch loop

pub mod args;
pub mod commands;
pub mod shell;

pub use args::{split, Args, Tokens, DELIMITERS};
pub use commands::{Command, CommandTable, Handler};
pub use shell::Shell;
