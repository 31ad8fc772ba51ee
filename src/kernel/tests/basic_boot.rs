#![cfg(target_os = "none")]
#![no_std]
#![no_main]
#![feature(custom_test_frameworks)]
#![test_runner(hearth_kernel::testutil::test_runner)]
#![reexport_test_harness_main = "test_main"]

use core::panic::PanicInfo;
use hearth_hal::Console;
use hearth_kernel::arch::x86_64::{interrupts, VgaConsole};
use hearth_kernel::input::{translate, KeyRing};
use hearth_kernel::testutil::{exit_qemu, QemuExitCode};

static KEYS: KeyRing = KeyRing::new();

#[no_mangle]
pub extern "C" fn _start() -> ! {
    hearth_kernel::init();
    interrupts::init(&KEYS);
    test_main();
    exit_qemu(QemuExitCode::Success);
    hearth_kernel::arch::x86_64::halt_loop()
}

#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    hearth_kernel::testutil::test_panic_handler(info)
}

#[test_case]
fn vga_console_accepts_output() {
    let mut console = VgaConsole;
    console.write_str("> echo hi\x08\x08hi\n");
    for _ in 0..30 {
        console.write_str("scrolling line\n");
    }
}

#[test_case]
fn vga_console_replaces_unprintable_bytes() {
    hearth_kernel::arch::x86_64::vga::clear_screen();
    let mut console = VgaConsole;
    console.write_byte(0x01);
    console.write_byte(b'k');

    let cells = 0xb8000 as *const u8;
    // SAFETY: the VGA text buffer is identity mapped; even bytes hold the
    // characters of the first row.
    let (first, second) = unsafe { (cells.read_volatile(), cells.add(2).read_volatile()) };
    assert_eq!(first, 0xfe);
    assert_eq!(second, b'k');
}

#[test_case]
fn breakpoint_returns() {
    x86_64::instructions::interrupts::int3();
}

#[test_case]
fn scancode_table_on_target() {
    assert_eq!(translate(0x1e), Some(b'a'));
    assert_eq!(translate(0x9e), None);
}

#[test_case]
fn ring_with_interrupts_enabled() {
    let ring: KeyRing<8> = KeyRing::new();
    for ch in b"abc" {
        assert!(ring.try_push(*ch));
    }
    x86_64::instructions::interrupts::without_interrupts(|| {
        assert_eq!(ring.take_dropped(), 0);
    });
    assert_eq!(ring.try_pop(), Some(b'a'));
    assert_eq!(ring.len(), 2);
}
