//! Keyboard input pipeline.
//!
//! # Architecture
//!
//! - `scancode`: scancode-to-ASCII translation
//! - `ring`: lock-free queue between the interrupt and the shell
//! - `keyboard`: the interrupt-side service feeding the ring
//! - `line`: line editing on the consumer side

pub mod keyboard;
pub mod line;
pub mod ring;
pub mod scancode;

pub use keyboard::{KeyboardIrq, KEYBOARD_IRQ};
pub use line::{Line, LineReader, MAX_LINE_LEN};
pub use ring::KeyRing;
pub use scancode::translate;
