/*
 * Serial payroll report. Builds a small roster of settled pay records,
 * spreads each one over a per-day ledger and prints the report over
 * the UART console. One deliberately oversized entry exercises the
 * rejection path so it shows up in the output.
 */
#![no_std]
#![no_main]

use core::panic::PanicInfo;

use heapless::Vec;
use virt_hal::uart::{Config, Uart};
use virt_hal::{board, console, eprintln, println};

use crate::worker::{ledger_total, Worker, PERIOD_DAYS};

mod worker;

/// Report input: id, days worked, salary per day.
const CANDIDATES: [(u16, u32, u32); 4] = [
    (1001, 8, 120),
    (1002, 3, 95),
    (1003, 0, 150),
    // 12 days cannot fit a 10 day period; settling this one fails
    (1004, 12, 80),
];

/// Panic handler that prints panic information and parks the hart
#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    eprintln!("PANIC: {}", info);

    loop {
        riscv::asm::wfi();
    }
}

#[riscv_rt::entry]
fn main() -> ! {
    let mut uart = unsafe { Uart::new(board::UART0_BASE) };
    uart.init(board::UART0_CLOCK_HZ, &Config::new(board::BAUD_RATE));
    console::init(uart);

    let mut roster: Vec<Worker, 4> = Vec::new();
    for (id, days_worked, daily_salary) in CANDIDATES {
        match Worker::settled(id, days_worked, daily_salary) {
            // capacity matches CANDIDATES, the push cannot fail
            Ok(worker) => {
                let _ = roster.push(worker);
            }
            Err(reason) => eprintln!("[payroll] worker {} rejected: {}", id, reason),
        }
    }

    println!("[payroll] {} workers on the roster", roster.len());

    let mut ledger = [0u32; PERIOD_DAYS];
    for worker in &roster {
        worker.fill_ledger(&mut ledger);
        println!(
            "[payroll] worker {}: {} days at {} => {} paid ({})",
            worker.id,
            worker.days_worked,
            worker.daily_salary,
            worker.total_paid,
            worker.grade()
        );
        println!(
            "[payroll] worker {}: ledger total {} over {} days",
            worker.id,
            ledger_total(&ledger),
            PERIOD_DAYS
        );
    }

    println!("[payroll] report complete");

    loop {
        riscv::asm::wfi();
    }
}
