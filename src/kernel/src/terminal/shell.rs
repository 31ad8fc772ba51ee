//! The read-eval loop: prompt, read a line, split it, dispatch it.

use super::args::{split, DELIMITERS};
use super::commands::CommandTable;
use crate::config::ShellConfig;
use crate::input::{KeyRing, LineReader};
use hearth_hal::{Console, Idle};

/// Interactive shell reading from the keystroke ring.
pub struct Shell<'k> {
    /// Ring fed by the keyboard interrupt.
    keys: &'k KeyRing,
    /// Reusable input line.
    reader: LineReader,
    /// Registered commands.
    commands: CommandTable,
    config: ShellConfig,
}

impl<'k> Shell<'k> {
    /// Create a shell consuming `keys`.
    pub fn new(keys: &'k KeyRing, commands: CommandTable, config: ShellConfig) -> Self {
        Self {
            keys,
            reader: LineReader::new(),
            commands,
            config,
        }
    }

    /// Display the shell prompt.
    pub fn prompt(&self, out: &mut dyn Console) {
        out.write_str(self.config.prompt);
    }

    /// Run one prompt/read/dispatch cycle.
    ///
    /// Suspends through `idle` until a full line has been typed.
    pub fn step<I: Idle + ?Sized>(&mut self, idle: &I, out: &mut dyn Console) {
        self.prompt(out);
        let line = self.reader.read_line(self.keys, idle, out);
        if self.config.echo_newline {
            out.write_byte(b'\n');
        }

        let dropped = self.keys.take_dropped();
        if dropped > 0 {
            log::warn!("keyboard ring full, {} keystrokes dropped", dropped);
        }

        let args = split(line, DELIMITERS);
        if args.was_truncated() {
            log::debug!("argument list truncated to {} entries", args.len());
        }
        self.commands.dispatch(&args, out);
    }

    /// Run the shell forever.
    pub fn run<I: Idle + ?Sized>(&mut self, idle: &I, out: &mut dyn Console) -> ! {
        loop {
            self.step(idle, out);
        }
    }
}
