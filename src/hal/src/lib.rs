//! Hearth Hardware Abstraction Layer (HAL) traits.
//!
//! This crate defines the seams between the portable input pipeline and the
//! platform code that talks to real devices. Everything above these traits
//! can be exercised on a development host with test doubles.

#![no_std]

/// Trait for a text-based console output.
pub trait Console {
    /// Writes a single character cell.
    ///
    /// `b'\n'` moves to the start of the next row and `0x08` (backspace)
    /// steps the cursor back one cell, blanking it.
    fn write_byte(&mut self, byte: u8);

    /// Writes a string to the console.
    fn write_str(&mut self, s: &str) {
        for byte in s.bytes() {
            self.write_byte(byte);
        }
    }

    /// Clears the console screen and moves the cursor to the origin.
    fn clear(&mut self);
}

/// Trait for controlling the interrupt controller of the keyboard line.
pub trait InterruptController {
    /// Signals the end of an interrupt to the controller.
    fn end_of_interrupt(&mut self, vector: u8);
    /// Unmasks a single IRQ line, leaving the other lines untouched.
    fn unmask(&mut self, irq: u8);
}

/// Source of raw keyboard scancodes.
pub trait ScancodePort {
    /// Reads one scancode from the controller's data port.
    fn read_scancode(&mut self) -> u8;
}

/// Strategy used by a consumer to wait for data produced in interrupt context.
pub trait Idle {
    /// Suspends the caller until `ready` may have become true.
    ///
    /// Implementations may return spuriously; callers re-check their
    /// condition in a loop.
    fn wait_until(&self, ready: &dyn Fn() -> bool);
}

/// Portable [`Idle`] that spins with a processor hint.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpinIdle;

impl Idle for SpinIdle {
    fn wait_until(&self, ready: &dyn Fn() -> bool) {
        while !ready() {
            core::hint::spin_loop();
        }
    }
}
