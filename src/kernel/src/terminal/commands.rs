//! Built-in shell commands.
//!
//! Commands live in a fixed-capacity table mapping a name to a handler
//! function. Dispatch looks the first argument up in the table; adding a
//! command never touches the dispatch logic.

use super::args::Args;
use crate::config::MAX_COMMANDS;
use hearth_common::ShellError;
use hearth_hal::Console;

/// Signature of a command body.
///
/// Handlers receive the full argument vector (command name first), the
/// console to write to and the table they were dispatched from.
pub type Handler = fn(&Args<'_>, &mut dyn Console, &CommandTable);

/// A registered shell command.
#[derive(Clone, Copy)]
pub struct Command {
    name: &'static str,
    summary: &'static str,
    handler: Handler,
}

impl Command {
    /// Name matched against the first argument.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// One-line description shown by `help`.
    pub fn summary(&self) -> &'static str {
        self.summary
    }
}

/// Registration table of shell commands.
pub struct CommandTable {
    entries: [Option<Command>; MAX_COMMANDS],
    len: usize,
}

impl CommandTable {
    /// Creates an empty table.
    pub const fn new() -> Self {
        const VACANT: Option<Command> = None;
        Self {
            entries: [VACANT; MAX_COMMANDS],
            len: 0,
        }
    }

    /// Creates a table holding `echo`, `clear` and `help`.
    pub fn with_builtins() -> Result<Self, ShellError> {
        let mut table = Self::new();
        table.register("echo", "Print the arguments", cmd_echo)?;
        table.register("clear", "Clear the screen", cmd_clear)?;
        table.register("help", "List available commands", cmd_help)?;
        Ok(table)
    }

    /// Adds a command.
    ///
    /// Names are matched case-sensitively and must be non-empty and free of
    /// whitespace.
    pub fn register(
        &mut self,
        name: &'static str,
        summary: &'static str,
        handler: Handler,
    ) -> Result<(), ShellError> {
        if name.is_empty() || name.bytes().any(|b| b.is_ascii_whitespace()) {
            return Err(ShellError::InvalidName);
        }
        if self.lookup(name).is_some() {
            return Err(ShellError::DuplicateCommand);
        }
        let slot = self
            .entries
            .get_mut(self.len)
            .ok_or(ShellError::TableFull)?;
        *slot = Some(Command {
            name,
            summary,
            handler,
        });
        self.len += 1;
        log::debug!("registered command '{}'", name);
        Ok(())
    }

    /// Finds a command by exact name.
    pub fn lookup(&self, name: &str) -> Option<&Command> {
        self.iter().find(|command| command.name == name)
    }

    /// Registered commands in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.entries[..self.len].iter().flatten()
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no command is registered.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Runs the command named by `args[0]`.
    ///
    /// An empty argument vector does nothing. Unknown names are reported on
    /// the console; nothing here can fail.
    pub fn dispatch(&self, args: &Args<'_>, out: &mut dyn Console) {
        let Some(name) = args.command() else {
            return;
        };
        match self.lookup(name) {
            Some(command) => (command.handler)(args, out, self),
            None => {
                log::debug!("unknown command '{}'", name);
                out.write_str("Unknown command: ");
                out.write_str(name);
                out.write_byte(b'\n');
            }
        }
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Echo each argument followed by a space, then end the line.
fn cmd_echo(args: &Args<'_>, out: &mut dyn Console, _: &CommandTable) {
    for arg in args.params() {
        out.write_str(arg);
        out.write_byte(b' ');
    }
    out.write_byte(b'\n');
}

/// Blank the screen and home the cursor.
fn cmd_clear(_: &Args<'_>, out: &mut dyn Console, _: &CommandTable) {
    out.clear();
}

/// List registered commands.
fn cmd_help(_: &Args<'_>, out: &mut dyn Console, table: &CommandTable) {
    let width = table.iter().map(|c| c.name.len()).max().unwrap_or(0) + 2;
    out.write_str("Commands:\n");
    for command in table.iter() {
        out.write_str("  ");
        out.write_str(command.name);
        for _ in command.name.len()..width {
            out.write_byte(b' ');
        }
        out.write_str(command.summary);
        out.write_byte(b'\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::args::{split, DELIMITERS};
    use crate::testing::RecordingConsole;

    fn run(table: &CommandTable, line: &str) -> RecordingConsole {
        let mut out = RecordingConsole::new();
        table.dispatch(&split(line, DELIMITERS), &mut out);
        out
    }

    fn builtins() -> CommandTable {
        CommandTable::with_builtins().expect("builtins fit")
    }

    #[test]
    fn test_echo_appends_space_per_argument() {
        let out = run(&builtins(), "echo hi there");
        assert_eq!(out.output(), "hi there \n");
    }

    #[test]
    fn test_echo_keeps_tabs() {
        let out = run(&builtins(), "echo a\tb");
        assert_eq!(out.bytes(), b"a\tb \n");
    }

    #[test]
    fn test_echo_without_arguments() {
        assert_eq!(run(&builtins(), "echo").output(), "\n");
    }

    #[test]
    fn test_unknown_command() {
        let out = run(&builtins(), "foo");
        assert_eq!(out.output(), "Unknown command: foo\n");
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let out = run(&builtins(), "ECHO hi");
        assert_eq!(out.output(), "Unknown command: ECHO\n");
    }

    #[test]
    fn test_empty_args_do_nothing() {
        let out = run(&builtins(), "   ");
        assert!(out.bytes().is_empty());
        assert_eq!(out.clears(), 0);
    }

    #[test]
    fn test_clear_blanks_console() {
        let table = builtins();
        let mut out = RecordingConsole::new();
        out.write_str("> some text\nmore");
        table.dispatch(&split("clear", DELIMITERS), &mut out);

        assert!(out.is_blank());
        assert_eq!(out.cursor(), (0, 0));
        assert_eq!(out.clears(), 1);
    }

    #[test]
    fn test_help_lists_commands() {
        let out = run(&builtins(), "help");
        let text = out.output();
        assert!(text.starts_with("Commands:\n"));
        assert!(text.contains("  echo   Print the arguments\n"));
        assert!(text.contains("  clear  Clear the screen\n"));
        assert!(text.contains("  help   List available commands\n"));
    }

    #[test]
    fn test_registered_command_is_dispatched() {
        fn cmd_count(args: &Args<'_>, out: &mut dyn Console, _: &CommandTable) {
            let digit = b'0' + args.params().len() as u8;
            out.write_byte(digit);
        }

        let mut table = builtins();
        table.register("count", "Count arguments", cmd_count).unwrap();
        assert_eq!(run(&table, "count a b c").output(), "3");
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_register_rejects_bad_entries() {
        let mut table = builtins();
        assert_eq!(
            table.register("echo", "again", cmd_echo),
            Err(ShellError::DuplicateCommand)
        );
        assert_eq!(table.register("", "", cmd_echo), Err(ShellError::InvalidName));
        assert_eq!(
            table.register("two words", "", cmd_echo),
            Err(ShellError::InvalidName)
        );
    }

    #[test]
    fn test_register_until_full() {
        const NAMES: [&str; MAX_COMMANDS + 1] = [
            "c0", "c1", "c2", "c3", "c4", "c5", "c6", "c7", "c8", "c9", "c10", "c11",
            "c12", "c13", "c14", "c15", "c16",
        ];
        let mut table = CommandTable::new();
        for &name in NAMES[..MAX_COMMANDS].iter() {
            table.register(name, "", cmd_echo).unwrap();
        }
        assert_eq!(
            table.register(NAMES[MAX_COMMANDS], "", cmd_echo),
            Err(ShellError::TableFull)
        );
        assert_eq!(table.len(), MAX_COMMANDS);
    }
}
