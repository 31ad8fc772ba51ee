//! System-wide error types for Hearth.

use core::fmt;

/// Shell setup error types.
///
/// Runtime input problems (full ring, over-long lines, too many arguments)
/// are absorbed by the pipeline and never show up here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShellError {
    /// Every slot of the command table is taken
    TableFull,
    /// A command with the same name is already registered
    DuplicateCommand,
    /// Command names must be non-empty and contain no whitespace
    InvalidName,
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::TableFull => write!(f, "command table is full"),
            ShellError::DuplicateCommand => write!(f, "command already registered"),
            ShellError::InvalidName => write!(f, "invalid command name"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(format!("{}", ShellError::TableFull), "command table is full");
        assert_eq!(
            format!("{}", ShellError::DuplicateCommand),
            "command already registered"
        );
        assert_eq!(format!("{}", ShellError::InvalidName), "invalid command name");
    }
}
