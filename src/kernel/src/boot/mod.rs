//! Boot logging with colored status indicators.
//!
//! Provides Linux-style boot messages with colored status brackets. Each
//! message is mirrored to the serial log.

pub mod banner;

use crate::arch::x86_64::vga::{self, Color};
use crate::{print, println};

/// Boot status indicators.
#[derive(Debug, Clone, Copy)]
pub enum Status {
    /// Success - `[ OK ]` in green
    Ok,
}

/// Log a boot stage with status.
///
/// Format: `[ OK ] Message text`
pub fn log(status: Status, message: &str) {
    print_status(status);
    println!(" {}", message);

    log::info!("{}", message);
}

/// Log an indented detail line (for sub-items).
///
/// Format: `       Detail text` (aligned with message after status)
pub fn log_detail(message: &str) {
    println!("       {}", message);
}

fn print_status(status: Status) {
    let (text, color) = match status {
        Status::Ok => ("[ OK ]", Color::LightGreen),
    };
    vga::set_color(color, Color::Black);
    print!("{}", text);
    vga::reset_color();
}
