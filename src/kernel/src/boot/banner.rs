//! Welcome banner.

use crate::arch::x86_64::vga::{self, Color};
use crate::config::WELCOME;
use crate::println;

/// Print the greeting shown before the first prompt.
pub fn print_welcome() {
    println!();
    vga::set_color(Color::Cyan, Color::Black);
    println!("{}", WELCOME);
    vga::reset_color();
    println!(" Type 'help' for available commands.");
    println!();
}
