//! Scancode set 1 translation for a US-QWERTY keyboard.
//!
//! Only the unshifted layer is modelled. Key releases (bit 7 set), modifiers,
//! function keys and cursor keys produce no character.

/// Escape.
pub const ESC: u8 = 0x1b;

/// Backspace as delivered by the translator.
pub const BACKSPACE: u8 = 0x08;

/// Scancodes with bit 7 set report a key release.
const RELEASE_BIT: u8 = 0x80;

/// Press codes 0x00..=0x7f mapped to ASCII, `0` meaning "no character".
#[rustfmt::skip]
static SCANCODE_MAP: [u8; 128] = [
    // 0x00: (none), Esc, 1-0, -, =, Backspace, Tab
    0, ESC, b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8',
    b'9', b'0', b'-', b'=', BACKSPACE, b'\t',
    // 0x10: top letter row, Enter, Left Ctrl
    b'q', b'w', b'e', b'r', b't', b'y', b'u', b'i', b'o', b'p',
    b'[', b']', b'\n', 0,
    // 0x1e: home row, Left Shift
    b'a', b's', b'd', b'f', b'g', b'h', b'j', b'k', b'l', b';',
    b'\'', b'`', 0,
    // 0x2b: bottom row, Right Shift
    b'\\', b'z', b'x', b'c', b'v', b'b', b'n', b'm', b',', b'.',
    b'/', 0,
    // 0x37: keypad *, Alt, Space, Caps Lock
    b'*', 0, b' ', 0,
    // 0x3b: F1-F10
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    // 0x45: Num Lock, Scroll Lock, Home, Up, Page Up
    0, 0, 0, 0, 0,
    // 0x4a: keypad -, Left, (keypad 5), Right, keypad +
    b'-', 0, 0, 0, b'+',
    // 0x4f: End, Down, Page Down, Insert, Delete
    0, 0, 0, 0, 0,
    // 0x54: (unused), F11 at 0x57, F12
    0, 0, 0, 0, 0,
    // 0x59..=0x7f
    0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

/// Translates a raw scancode into an ASCII character.
///
/// Returns `None` for key releases and for keys without a character.
pub fn translate(scancode: u8) -> Option<u8> {
    if scancode & RELEASE_BIT != 0 {
        return None;
    }
    match SCANCODE_MAP[usize::from(scancode)] {
        0 => None,
        ch => Some(ch),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_row() {
        let expected = b"1234567890-=";
        for (offset, &ch) in expected.iter().enumerate() {
            assert_eq!(translate(0x02 + offset as u8), Some(ch));
        }
    }

    #[test]
    fn test_letter_rows() {
        let rows: [(u8, &[u8]); 3] = [
            (0x10, b"qwertyuiop[]"),
            (0x1e, b"asdfghjkl;'`"),
            (0x2b, b"\\zxcvbnm,./"),
        ];
        for (start, keys) in rows {
            for (offset, &ch) in keys.iter().enumerate() {
                let code = start + offset as u8;
                assert_eq!(translate(code), Some(ch), "scancode {:#x}", code);
            }
        }
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(translate(0x01), Some(ESC));
        assert_eq!(translate(0x0e), Some(BACKSPACE));
        assert_eq!(translate(0x0f), Some(b'\t'));
        assert_eq!(translate(0x1c), Some(b'\n'));
        assert_eq!(translate(0x39), Some(b' '));
    }

    #[test]
    fn test_keypad_operators() {
        assert_eq!(translate(0x37), Some(b'*'));
        assert_eq!(translate(0x4a), Some(b'-'));
        assert_eq!(translate(0x4e), Some(b'+'));
    }

    #[test]
    fn test_modifiers_and_function_keys_have_no_character() {
        // Ctrl, Left Shift, Right Shift, Alt, Caps Lock
        for code in [0x1d, 0x2a, 0x36, 0x38, 0x3a] {
            assert_eq!(translate(code), None);
        }
        // F1-F10, F11, F12
        for code in (0x3b..=0x44).chain([0x57, 0x58]) {
            assert_eq!(translate(code), None);
        }
        // arrows, Home/End, Page Up/Down, Insert/Delete
        for code in [0x47, 0x48, 0x49, 0x4b, 0x4d, 0x4f, 0x50, 0x51, 0x52, 0x53] {
            assert_eq!(translate(code), None);
        }
    }

    #[test]
    fn test_release_codes_are_ignored() {
        for code in 0x80..=0xffu8 {
            assert_eq!(translate(code), None);
        }
    }

    #[test]
    fn test_table_shape() {
        let mapped = (0..0x80u8).filter(|&code| translate(code).is_some()).count();
        assert_eq!(mapped, 55);
        assert_eq!(translate(0x00), None);
        for code in 0x59..0x80u8 {
            assert_eq!(translate(code), None);
        }
    }
}
