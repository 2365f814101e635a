/*
 * Polled UART echo. Quiesce the PLIC, bring the UART up at 115200 with
 * 8 data bits and no parity, transmit a greeting once, then echo back
 * every byte received. Polls that return no data are ignored and the
 * loop never exits.
 */
#![no_std]
#![no_main]

use virt_hal::board;
use virt_hal::dtb::BoardInfo;
use virt_hal::plic::Plic;
use virt_hal::uart::{Config, Uart};

// make sure the panic handler is linked in
extern crate panic_halt;

const GREETING: &str = "\r\n    Hello World Example   \r\n\r\n";

#[riscv_rt::entry]
fn main(_hartid: usize, dtb_address: usize) -> ! {
    let mut plic = unsafe { Plic::new(board::PLIC_BASE) };
    plic.init();

    // Prefer the UART the device tree describes; fall back to the
    // fixed virt addresses when the blob is absent or unreadable.
    let info = unsafe { BoardInfo::from_dtb(dtb_address) }.unwrap_or(BoardInfo {
        uart_base: board::UART0_BASE,
        uart_clock_hz: board::UART0_CLOCK_HZ,
    });

    let mut uart = unsafe { Uart::new(info.uart_base) };
    uart.init(info.uart_clock_hz, &Config::new(board::BAUD_RATE));

    uart.write_bytes(GREETING.as_bytes());

    // Echo back characters received on the UART. Line errors drop the
    // broken byte and the loop moves on.
    loop {
        if let Ok(Some(byte)) = uart.try_read() {
            uart.write_byte(byte);
        }
    }
}
