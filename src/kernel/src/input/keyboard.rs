//! Interrupt-side half of the keyboard pipeline.
//!
//! Refers to: `hearth_kernel::arch::x86_64::interrupts::keyboard_interrupt_handler`

use super::ring::KeyRing;
use super::scancode;
use crate::config::KEY_RING_CAPACITY;
use hearth_hal::{InterruptController, ScancodePort};

/// IRQ line of the PS/2 keyboard on the master PIC.
pub const KEYBOARD_IRQ: u8 = 1;

/// Keyboard interrupt service bound to the ring it feeds.
pub struct KeyboardIrq<'r, const N: usize = KEY_RING_CAPACITY> {
    keys: &'r KeyRing<N>,
    vector: u8,
}

impl<'r, const N: usize> KeyboardIrq<'r, N> {
    /// Binds the service to `keys`; `vector` is acknowledged on every call.
    pub const fn new(keys: &'r KeyRing<N>, vector: u8) -> Self {
        Self { keys, vector }
    }

    /// Handles one keyboard interrupt.
    ///
    /// Reads a single scancode, enqueues its character if it has one and the
    /// ring has room, then signals end-of-interrupt. The acknowledgement is
    /// sent on every path; a missed one masks all further keyboard IRQs.
    /// Never blocks and never logs.
    pub fn service<P, C>(&self, port: &mut P, pic: &mut C)
    where
        P: ScancodePort + ?Sized,
        C: InterruptController + ?Sized,
    {
        let code = port.read_scancode();
        if let Some(ch) = scancode::translate(code) {
            // a full ring drops the key and counts it
            self.keys.try_push(ch);
        }
        pic.end_of_interrupt(self.vector);
    }
}
