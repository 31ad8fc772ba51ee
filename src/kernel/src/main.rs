//! Hearth Kernel Entry Point
//!
//! Brings up the console and the keyboard interrupt, then hands the CPU to
//! the shell for good.

#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(target_os = "none")]
use bootloader::{entry_point, BootInfo};
#[cfg(target_os = "none")]
use core::panic::PanicInfo;
#[cfg(target_os = "none")]
use hearth_kernel::arch::x86_64::{self, interrupts, vga::Color, HaltIdle, VgaConsole};
#[cfg(target_os = "none")]
use hearth_kernel::boot::{self, Status};
#[cfg(target_os = "none")]
use hearth_kernel::config::ShellConfig;
#[cfg(target_os = "none")]
use hearth_kernel::input::KeyRing;
#[cfg(target_os = "none")]
use hearth_kernel::terminal::{CommandTable, Shell};
#[cfg(target_os = "none")]
use hearth_kernel::{println, serial_println};

#[cfg(target_os = "none")]
entry_point!(kernel_main);

/// Keystrokes travelling from the keyboard interrupt to the shell.
#[cfg(target_os = "none")]
static KEYS: KeyRing = KeyRing::new();

/// Kernel entry point.
///
/// Called by the bootloader after setting up the initial environment.
#[cfg(target_os = "none")]
fn kernel_main(_boot_info: &'static BootInfo) -> ! {
    hearth_kernel::init();

    x86_64::vga::clear_screen();
    boot::log(Status::Ok, "Serial logger initialized");
    boot::log(Status::Ok, "VGA console ready");

    let commands = match CommandTable::with_builtins() {
        Ok(commands) => commands,
        Err(err) => panic!("registering builtin commands: {}", err),
    };
    boot::log(Status::Ok, "Command table ready");

    interrupts::init(&KEYS);
    boot::log(Status::Ok, "IDT loaded, keyboard interrupt enabled");
    boot::log_detail("IRQ 1 -> vector 33");

    boot::banner::print_welcome();

    let mut shell = Shell::new(&KEYS, commands, ShellConfig::default());
    shell.run(&HaltIdle, &mut VgaConsole)
}

/// Panic handler.
///
/// Called when the kernel encounters an unrecoverable error.
#[cfg(target_os = "none")]
#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    serial_println!("KERNEL PANIC: {}", info);

    x86_64::vga::set_color(Color::LightRed, Color::Black);
    println!("\n\n!!! KERNEL PANIC !!!");
    x86_64::vga::reset_color();
    println!("{}", info);

    x86_64::halt_loop()
}

#[cfg(not(target_os = "none"))]
fn main() {
    eprintln!("hearth only runs on bare metal; build it for the x86_64-hearth target");
}
