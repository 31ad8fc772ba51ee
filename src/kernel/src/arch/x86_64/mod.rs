//! x86_64 architecture support.
//!
//! Provides VGA text mode output, serial logging, the PIC and the keyboard
//! interrupt for x86_64 platforms.

pub mod interrupts;
pub mod keyboard;
pub mod pic;
pub mod serial;
pub mod vga;

pub use serial::SERIAL;
pub use vga::{Color, VgaConsole, WRITER};

use hearth_hal::Idle;
use x86_64::instructions::interrupts as cpu_interrupts;

/// Halts the CPU until the next interrupt.
///
/// Used in idle loops to reduce power consumption.
#[inline]
pub fn hlt() {
    x86_64::instructions::hlt();
}

/// Halts the CPU in an infinite loop.
///
/// Used after unrecoverable errors (panics).
pub fn halt_loop() -> ! {
    loop {
        hlt();
    }
}

/// [`Idle`] that sleeps until the next interrupt.
///
/// The condition is checked with interrupts disabled and `sti; hlt` is
/// issued as one step, so an interrupt that makes `ready` true cannot slip
/// in between the check and the halt.
#[derive(Debug, Default, Clone, Copy)]
pub struct HaltIdle;

impl Idle for HaltIdle {
    fn wait_until(&self, ready: &dyn Fn() -> bool) {
        cpu_interrupts::disable();
        if ready() {
            cpu_interrupts::enable();
        } else {
            cpu_interrupts::enable_and_hlt();
        }
    }
}
