//! Hearth Kernel
//!
//! A single-address-space x86_64 kernel whose only job is an interactive
//! keyboard shell.
//!
//! # Architecture
//!
//! The kernel is structured into the following modules:
//! - `input`: Scancode translation, the keystroke ring and the line reader
//! - `terminal`: Argument splitting, the command table and the shell loop
//! - `arch`: Platform-specific code (VGA, serial, PIC, PS/2, interrupts)
//! - `boot`: Boot status messages and the welcome banner
//!
//! `input` and `terminal` only talk to hardware through the `hearth_hal`
//! traits and build on any host.
//!
//! # Safety
//!
//! This is a `#![no_std]` kernel. All unsafe code is documented with safety
//! invariants explaining why the usage is correct.

#![cfg_attr(not(test), no_std)]
#![cfg_attr(target_os = "none", feature(abi_x86_interrupt))]
#![warn(missing_docs)]

pub mod config;
pub mod input;
pub mod terminal;

#[cfg(target_os = "none")]
pub mod arch;
#[cfg(target_os = "none")]
pub mod boot;
#[cfg(target_os = "none")]
pub mod testutil;

#[cfg(test)]
mod testing;

/// Initializes core kernel subsystems.
///
/// Called early in the boot process to set up the serial logger and the
/// VGA console.
#[cfg(target_os = "none")]
pub fn init() {
    arch::x86_64::serial::init_logger(config::LOG_LEVEL);
    arch::x86_64::vga::init();
}
