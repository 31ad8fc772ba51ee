//! Compile-time kernel configuration.

use log::LevelFilter;

/// Number of slots in the keystroke ring (one slot stays empty).
pub const KEY_RING_CAPACITY: usize = 128;

/// Input line capacity in bytes, including the NUL terminator.
pub const LINE_CAPACITY: usize = 256;

/// Maximum number of arguments kept per command line.
pub const MAX_ARGS: usize = 10;

/// Maximum number of registered shell commands.
pub const MAX_COMMANDS: usize = 16;

/// Shell prompt printed before each line is read.
pub const PROMPT: &str = "> ";

/// Greeting printed once the shell is ready.
pub const WELCOME: &str = "Welcome to Hearth!";

/// Maximum level forwarded to the serial logger.
pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Runtime knobs of the shell loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellConfig {
    /// Prompt printed before each line.
    pub prompt: &'static str,
    /// Whether the shell moves to a fresh row once a line is entered.
    pub echo_newline: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: PROMPT,
            echo_newline: true,
        }
    }
}
