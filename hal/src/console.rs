//! Print macros for logging over the board UART.

use core::fmt::{self, Write};

use spin::mutex::SpinMutex;

use crate::uart::Uart;

static CONSOLE: SpinMutex<Option<Uart>> = SpinMutex::new(None);

/// Hand an initialized UART to the print macros. Anything printed
/// before this call is dropped rather than faulting.
pub fn init(uart: Uart) {
    *CONSOLE.lock() = Some(uart);
}

/// Print function called from print macros
pub fn print_for_macro(args: fmt::Arguments) {
    let mut console = CONSOLE.lock();
    if let Some(uart) = console.as_mut() {
        let _ = uart.write_fmt(args);
    }
}

/// Print to the console.
#[macro_export]
macro_rules! print {
    ($($arg:tt)*) => {
        $crate::console::print_for_macro(format_args!($($arg)*))
    };
}

/// Print with line ending to the console.
#[macro_export]
macro_rules! println {
    () => {
        $crate::print!("\r\n")
    };
    ($fmt:expr) => {
        $crate::print!(concat!($fmt, "\r\n"))
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::print!(concat!($fmt, "\r\n"), $($arg)*)
    };
}

/// Print error message with red color (if supported by terminal)
#[macro_export]
macro_rules! eprintln {
    () => {
        $crate::println!()
    };
    ($fmt:expr) => {
        $crate::println!(concat!("\x1b[31m", $fmt, "\x1b[0m"))
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::println!(concat!("\x1b[31m", $fmt, "\x1b[0m"), $($arg)*)
    };
}
