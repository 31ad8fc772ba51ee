//! Line editing on top of the keystroke ring.

use super::ring::KeyRing;
use super::scancode::BACKSPACE;
use crate::config::LINE_CAPACITY;
use hearth_hal::{Console, Idle};

/// Longest line that fits next to its NUL terminator.
pub const MAX_LINE_LEN: usize = LINE_CAPACITY - 1;

/// Bounded, NUL-terminated input line.
///
/// Holds ASCII only, so its contents are always valid UTF-8.
pub struct Line {
    buf: [u8; LINE_CAPACITY],
    len: usize,
}

impl Line {
    /// Creates an empty line.
    pub const fn new() -> Self {
        Self {
            buf: [0; LINE_CAPACITY],
            len: 0,
        }
    }

    /// Line contents without the terminator.
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }

    /// Line contents without the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Line contents including the NUL terminator.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.buf[..=self.len]
    }

    /// Number of characters stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no characters are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` once no more characters fit.
    pub fn is_full(&self) -> bool {
        self.len == MAX_LINE_LEN
    }

    fn push(&mut self, ch: u8) -> bool {
        if self.is_full() {
            return false;
        }
        self.buf[self.len] = ch;
        self.len += 1;
        self.buf[self.len] = 0;
        true
    }

    fn pop(&mut self) -> Option<u8> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let ch = self.buf[self.len];
        self.buf[self.len] = 0;
        Some(ch)
    }

    fn clear(&mut self) {
        self.len = 0;
        self.buf[0] = 0;
    }
}

impl Default for Line {
    fn default() -> Self {
        Self::new()
    }
}

/// Assembles keystrokes into lines, echoing them to a console.
pub struct LineReader {
    line: Line,
    /// Characters discarded because the line was full.
    discarded: usize,
}

impl LineReader {
    /// Creates a reader with an empty line.
    pub const fn new() -> Self {
        Self {
            line: Line::new(),
            discarded: 0,
        }
    }

    /// The line assembled so far.
    pub fn line(&self) -> &Line {
        &self.line
    }

    /// Characters discarded from the current line because it was full.
    pub fn discarded(&self) -> usize {
        self.discarded
    }

    /// Starts a new, empty line.
    pub fn reset(&mut self) {
        self.line.clear();
        self.discarded = 0;
    }

    /// Applies one character to the line being edited.
    ///
    /// Returns `true` when `ch` terminates the line. Backspace on an empty
    /// line and characters past the capacity are consumed without effect.
    pub fn feed<C: Console + ?Sized>(&mut self, ch: u8, out: &mut C) -> bool {
        match ch {
            b'\n' | b'\r' => return true,
            BACKSPACE => {
                if self.line.pop().is_some() {
                    out.write_byte(BACKSPACE);
                }
            }
            ch if !ch.is_ascii() => {}
            ch => {
                if self.line.push(ch) {
                    out.write_byte(ch);
                } else {
                    self.discarded += 1;
                }
            }
        }
        false
    }

    /// Reads one line from `keys`, waiting through `idle` as needed.
    ///
    /// The terminator is consumed but neither stored nor echoed.
    pub fn read_line<'a, const N: usize, I, C>(
        &'a mut self,
        keys: &KeyRing<N>,
        idle: &I,
        out: &mut C,
    ) -> &'a str
    where
        I: Idle + ?Sized,
        C: Console + ?Sized,
    {
        self.reset();
        while !self.feed(keys.pop_blocking(idle), out) {}

        if self.discarded > 0 {
            log::debug!(
                "input line truncated to {} characters, {} discarded",
                MAX_LINE_LEN,
                self.discarded
            );
        }
        self.line.as_str()
    }
}

impl Default for LineReader {
    fn default() -> Self {
        Self::new()
    }
}
