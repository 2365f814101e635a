//! Fixed platform description for the QEMU virt machine.
//!
//! Normal bring-up reads the UART parameters out of the device tree
//! (see [`crate::dtb`]); these constants are the fallback when no
//! usable blob was handed over by the previous stage.

/// ns16550 UART register block.
pub const UART0_BASE: usize = 0x1000_0000;

/// Input clock feeding the UART baud generator.
pub const UART0_CLOCK_HZ: u32 = 3_686_400;

/// Platform-level interrupt controller.
pub const PLIC_BASE: usize = 0x0c00_0000;

/// Line rate used by the examples.
pub const BAUD_RATE: u32 = 115_200;
