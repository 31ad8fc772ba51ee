//! Splitting input lines into argument vectors.

use crate::config::MAX_ARGS;
use core::ops::Deref;

/// Delimiters used by the shell.
///
/// Only spaces separate arguments; a typed tab stays inside its argument.
pub const DELIMITERS: &[u8] = b" ";

/// Iterator over the tokens of a line.
///
/// The iterator is the cursor: each call to `next` resumes where the
/// previous one stopped. Runs of delimiters separate tokens and never
/// produce empty ones.
#[derive(Debug, Clone)]
pub struct Tokens<'l, 'd> {
    rest: &'l str,
    delimiters: &'d [u8],
}

impl<'l, 'd> Tokens<'l, 'd> {
    /// Starts a cursor at the beginning of `line`.
    pub fn new(line: &'l str, delimiters: &'d [u8]) -> Self {
        Self {
            rest: line,
            delimiters,
        }
    }

    /// Unconsumed remainder of the line.
    pub fn remainder(&self) -> &'l str {
        self.rest
    }

    fn is_delimiter(&self, byte: u8) -> bool {
        // non-ASCII delimiters could split a multi-byte character
        byte.is_ascii() && self.delimiters.contains(&byte)
    }
}

impl<'l> Iterator for Tokens<'l, '_> {
    type Item = &'l str;

    fn next(&mut self) -> Option<&'l str> {
        let Some(start) = self.rest.bytes().position(|b| !self.is_delimiter(b)) else {
            self.rest = "";
            return None;
        };
        let rest = &self.rest[start..];
        let end = rest
            .bytes()
            .position(|b| self.is_delimiter(b))
            .unwrap_or(rest.len());
        let (token, tail) = rest.split_at(end);
        self.rest = tail;
        Some(token)
    }
}

/// Bounded argument vector borrowing from an input line.
///
/// Derefs to the slice of arguments; the first one is the command name.
#[derive(Debug, Clone, Copy)]
pub struct Args<'l> {
    argv: [&'l str; MAX_ARGS],
    argc: usize,
    truncated: bool,
}

impl<'l> Args<'l> {
    /// An argument vector with no arguments.
    pub const fn empty() -> Self {
        Self {
            argv: [""; MAX_ARGS],
            argc: 0,
            truncated: false,
        }
    }

    /// The command name, if any.
    pub fn command(&self) -> Option<&'l str> {
        self.as_slice().first().copied()
    }

    /// Arguments following the command name.
    pub fn params(&self) -> &[&'l str] {
        self.as_slice().get(1..).unwrap_or_default()
    }

    /// All arguments, command name first.
    pub fn as_slice(&self) -> &[&'l str] {
        &self.argv[..self.argc]
    }

    /// Returns `true` if tokens past [`MAX_ARGS`] were dropped.
    pub fn was_truncated(&self) -> bool {
        self.truncated
    }
}

impl<'l> Deref for Args<'l> {
    type Target = [&'l str];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl Default for Args<'_> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Splits `line` on `delimiters`, keeping at most [`MAX_ARGS`] tokens.
///
/// Extra tokens are dropped silently; see [`Args::was_truncated`].
pub fn split<'l>(line: &'l str, delimiters: &[u8]) -> Args<'l> {
    let mut args = Args::empty();
    for token in Tokens::new(line, delimiters) {
        if args.argc == MAX_ARGS {
            args.truncated = true;
            break;
        }
        args.argv[args.argc] = token;
        args.argc += 1;
    }
    args
}
