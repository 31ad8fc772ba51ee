//! Interrupt Descriptor Table (IDT) and handlers for x86_64.

use crate::arch::x86_64::keyboard::Ps2Port;
use crate::arch::x86_64::pic::{self, InterruptIndex, Pic};
use crate::input::{KeyRing, KeyboardIrq, KEYBOARD_IRQ};
use crate::println;
use hearth_hal::{InterruptController, ScancodePort};
use lazy_static::lazy_static;
use spin::Once;
use x86_64::structures::idt::{InterruptDescriptorTable, InterruptStackFrame};

/// Keyboard service bound to the shell's ring by [`init`].
static KEYBOARD: Once<KeyboardIrq<'static>> = Once::new();

lazy_static! {
    /// The Interrupt Descriptor Table (IDT).
    static ref IDT: InterruptDescriptorTable = {
        let mut idt = InterruptDescriptorTable::new();
        idt.breakpoint.set_handler_fn(breakpoint_handler);
        idt.double_fault.set_handler_fn(double_fault_handler);

        // Hardware interrupts
        idt[InterruptIndex::Keyboard.as_usize()]
            .set_handler_fn(keyboard_interrupt_handler);

        idt
    };
}

/// Loads the IDT, routes IRQ 1 into `keys` and enables interrupts.
///
/// `keys` is the ring the shell consumes; the interrupt handler becomes its
/// only producer.
pub fn init(keys: &'static KeyRing) {
    let vector = InterruptIndex::Keyboard.as_u8();
    KEYBOARD.call_once(|| KeyboardIrq::new(keys, vector));

    IDT.load();
    pic::init();

    let stale = Ps2Port::new().flush();
    if stale > 0 {
        log::debug!("discarded {} stale keyboard bytes", stale);
    }

    Pic.unmask(KEYBOARD_IRQ);
    x86_64::instructions::interrupts::enable();
    log::info!("keyboard IRQ {} routed to vector {}", KEYBOARD_IRQ, vector);
}

/// Handler for the keyboard interrupt.
extern "x86-interrupt" fn keyboard_interrupt_handler(_stack_frame: InterruptStackFrame) {
    let mut port = Ps2Port::new();
    match KEYBOARD.get() {
        Some(keyboard) => keyboard.service(&mut port, &mut Pic),
        None => {
            // not bound yet: drop the byte but keep the line alive
            port.read_scancode();
            Pic.end_of_interrupt(InterruptIndex::Keyboard.as_u8());
        }
    }
}

/// Handler for the breakpoint exception (INT3).
extern "x86-interrupt" fn breakpoint_handler(stack_frame: InterruptStackFrame) {
    println!("EXCEPTION: BREAKPOINT\n{:#?}", stack_frame);
}

/// Handler for the double fault exception.
extern "x86-interrupt" fn double_fault_handler(
    stack_frame: InterruptStackFrame,
    _error_code: u64,
) -> ! {
    panic!("EXCEPTION: DOUBLE FAULT\n{:#?}", stack_frame);
}
