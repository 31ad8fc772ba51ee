//! Test doubles for the HAL traits.

use hearth_hal::Console;

/// Columns per row, as on the VGA text screen.
pub const WIDTH: usize = 80;

/// Console that records every byte and models a character grid
/// [`WIDTH`] columns wide.
///
/// Rows wrap like the VGA writer: a byte past the last column starts a new
/// row and a backspace at column 0 steps back to the end of the row above.
pub struct RecordingConsole {
    transcript: Vec<u8>,
    rows: Vec<Vec<u8>>,
    row: usize,
    col: usize,
    clears: usize,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self {
            transcript: Vec::new(),
            rows: vec![Vec::new()],
            row: 0,
            col: 0,
            clears: 0,
        }
    }

    /// Every byte written since creation, across clears.
    pub fn bytes(&self) -> &[u8] {
        &self.transcript
    }

    /// Every byte written since creation, as text.
    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.transcript).into_owned()
    }

    /// Forgets the transcript, keeping the screen.
    pub fn take_output(&mut self) -> String {
        let text = self.output();
        self.transcript.clear();
        text
    }

    /// Screen row contents with trailing blanks removed.
    pub fn visible_row(&self, row: usize) -> String {
        let cells = self.rows.get(row).map(Vec::as_slice).unwrap_or_default();
        String::from_utf8_lossy(cells).trim_end().into()
    }

    /// Returns `true` if no visible character is on screen.
    pub fn is_blank(&self) -> bool {
        self.rows.iter().flatten().all(|&cell| cell == b' ')
    }

    /// Current `(row, column)`.
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Number of `clear` calls.
    pub fn clears(&self) -> usize {
        self.clears
    }
}

impl RecordingConsole {
    fn new_line(&mut self) {
        self.row += 1;
        self.col = 0;
        if self.rows.len() <= self.row {
            self.rows.push(Vec::new());
        }
    }

    fn put(&mut self, byte: u8) {
        let cells = &mut self.rows[self.row];
        if cells.len() <= self.col {
            cells.resize(self.col + 1, b' ');
        }
        cells[self.col] = byte;
    }
}

impl Console for RecordingConsole {
    fn write_byte(&mut self, byte: u8) {
        self.transcript.push(byte);
        match byte {
            b'\n' => self.new_line(),
            0x08 => {
                if self.col == 0 {
                    if self.row == 0 {
                        return;
                    }
                    self.row -= 1;
                    self.col = WIDTH;
                }
                self.col -= 1;
                self.put(b' ');
            }
            byte => {
                if self.col >= WIDTH {
                    self.new_line();
                }
                self.put(byte);
                self.col += 1;
            }
        }
    }

    fn clear(&mut self) {
        self.rows = vec![Vec::new()];
        self.row = 0;
        self.col = 0;
        self.clears += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_output_wraps() {
        let mut out = RecordingConsole::new();
        for _ in 0..WIDTH + 1 {
            out.write_byte(b'x');
        }
        assert_eq!(out.visible_row(0).len(), WIDTH);
        assert_eq!(out.visible_row(1), "x");
        assert_eq!(out.cursor(), (1, 1));
    }

    #[test]
    fn test_backspace_at_row_start_wraps_back() {
        let mut out = RecordingConsole::new();
        for _ in 0..WIDTH + 1 {
            out.write_byte(b'x');
        }
        out.write_byte(0x08);
        assert_eq!(out.cursor(), (1, 0));
        out.write_byte(0x08);
        assert_eq!(out.cursor(), (0, WIDTH - 1));
        assert_eq!(out.visible_row(0).len(), WIDTH - 1);
        assert_eq!(out.visible_row(1), "");
    }

    #[test]
    fn test_backspace_at_origin_is_ignored() {
        let mut out = RecordingConsole::new();
        out.write_byte(0x08);
        assert_eq!(out.cursor(), (0, 0));
        assert!(out.is_blank());
    }
}
