//! Support code shared by the firmware examples: a polled UART driver,
//! PLIC bring-up, console print macros and device-tree board discovery.
//!
//! Everything here is no_std; the crate only links std when its own
//! unit tests run on the host.
#![cfg_attr(not(test), no_std)]

pub mod board;
pub mod console;
pub mod dtb;
pub mod plic;
pub mod uart;
