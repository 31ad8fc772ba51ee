//! PS/2 keyboard controller ports.

use hearth_hal::ScancodePort;
use x86_64::instructions::port::{Port, PortReadOnly};

/// Keyboard data port.
pub const DATA_PORT: u16 = 0x60;

/// Keyboard controller status port.
pub const STATUS_PORT: u16 = 0x64;

/// Status bit set while a byte waits in the output buffer.
const OUTPUT_FULL: u8 = 0x01;

/// Upper bound on bytes drained by [`Ps2Port::flush`].
const FLUSH_LIMIT: usize = 16;

/// The PS/2 controller's data and status ports.
pub struct Ps2Port {
    data: Port<u8>,
    status: PortReadOnly<u8>,
}

impl Ps2Port {
    /// Creates a handle to the standard controller ports.
    pub const fn new() -> Self {
        Self {
            data: Port::new(DATA_PORT),
            status: PortReadOnly::new(STATUS_PORT),
        }
    }

    /// Discards bytes left in the output buffer, returning how many were read.
    ///
    /// A byte that is never read keeps the controller from raising IRQ 1.
    pub fn flush(&mut self) -> usize {
        let mut drained = 0;
        // SAFETY: 0x60/0x64 are the standard PS/2 controller ports; reading
        // them only consumes pending input.
        unsafe {
            while drained < FLUSH_LIMIT && self.status.read() & OUTPUT_FULL != 0 {
                self.data.read();
                drained += 1;
            }
        }
        drained
    }
}

impl Default for Ps2Port {
    fn default() -> Self {
        Self::new()
    }
}

impl ScancodePort for Ps2Port {
    fn read_scancode(&mut self) -> u8 {
        // SAFETY: reading the data port consumes one scancode, which is what
        // the keyboard interrupt asks for.
        unsafe { self.data.read() }
    }
}
