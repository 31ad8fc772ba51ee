//! Support for the primary and secondary 8259 Programmable Interrupt Controllers (PICs).
//!
//! The master PIC takes commands on port 0x20 (end-of-interrupt is 0x20)
//! and its mask on port 0x21; `pic8259` handles both.

use hearth_hal::InterruptController;
use pic8259::ChainedPics;
use spin::Mutex;

/// The offset of the first PIC (master).
///
/// IRQs 0..7 are mapped to interrupts 32..39.
pub const PIC_1_OFFSET: u8 = 32;

/// The offset of the second PIC (slave).
///
/// IRQs 8..15 are mapped to interrupts 40..47.
pub const PIC_2_OFFSET: u8 = PIC_1_OFFSET + 8;

/// The global instance of the chained PICs.
pub static PICS: Mutex<ChainedPics> =
    Mutex::new(unsafe { ChainedPics::new(PIC_1_OFFSET, PIC_2_OFFSET) });

/// Possible IRQ indices.
#[derive(Debug, Clone, Copy)]
#[repr(u8)]
pub enum InterruptIndex {
    /// Keyboard interrupt (IRQ 1).
    Keyboard = PIC_1_OFFSET + crate::input::KEYBOARD_IRQ,
}

impl InterruptIndex {
    /// Returns the internal u8 value.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Returns the internal usize value.
    pub fn as_usize(self) -> usize {
        usize::from(self as u8)
    }
}

/// Remaps both PICs and masks every line.
///
/// Lines are opened one at a time with [`InterruptController::unmask`].
pub fn init() {
    let mut pics = PICS.lock();
    // SAFETY: the offsets place the PIC vectors after the CPU exceptions,
    // and nothing has been unmasked yet so no stale vector can fire.
    unsafe {
        pics.initialize();
        pics.write_masks(0xff, 0xff);
    }
}

/// [`InterruptController`] over the global chained PICs.
#[derive(Debug, Default, Clone, Copy)]
pub struct Pic;

impl InterruptController for Pic {
    fn end_of_interrupt(&mut self, vector: u8) {
        // SAFETY: only called at the end of the handler for `vector`.
        unsafe {
            PICS.lock().notify_end_of_interrupt(vector);
        }
    }

    fn unmask(&mut self, irq: u8) {
        let mut pics = PICS.lock();
        // SAFETY: reading and writing the mask registers has no side effect
        // beyond enabling the requested line.
        unsafe {
            let mut masks = pics.read_masks();
            if irq < 8 {
                masks[0] &= !(1u8 << irq);
            } else {
                masks[1] &= !(1u8 << (irq - 8));
                // the slave is chained on IRQ 2
                masks[0] &= !(1u8 << 2);
            }
            pics.write_masks(masks[0], masks[1]);
        }
    }
}
