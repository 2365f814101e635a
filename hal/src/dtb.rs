/*
 * Board discovery from the flattened device tree handed over by the
 * previous boot stage. Only what the examples need is read back: the
 * register base and input clock of the first ns16550 serial node.
 * Addresses are two cells wide on the virt machine, so `reg` is read
 * as a single u64.
 */
use core::{error::Error, fmt::Display};

use fdt_rs::base::DevTree;
use fdt_rs::prelude::{FallibleIterator, PropReader};

/// UART description recovered from the device tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardInfo {
    pub uart_base: usize,
    pub uart_clock_hz: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DtbError {
    /// The blob does not parse as a flattened device tree.
    Parse,
    /// No ns16550-compatible node is present.
    NoSerialNode,
    /// The serial node carries no usable `reg` property.
    MissingReg,
    /// The serial node carries no `clock-frequency` property.
    MissingClock,
}

impl Display for DtbError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Parse => write!(f, "malformed device tree blob"),
            Self::NoSerialNode => write!(f, "no ns16550 node in the device tree"),
            Self::MissingReg => write!(f, "serial node has no reg property"),
            Self::MissingClock => write!(f, "serial node has no clock-frequency property"),
        }
    }
}

impl Error for DtbError {}

impl BoardInfo {
    /// Read the UART description from the device tree at `address`.
    ///
    /// # Safety
    ///
    /// `address` must point to a complete, readable DTB.
    pub unsafe fn from_dtb(address: usize) -> Result<Self, DtbError> {
        let fdt = unsafe { DevTree::from_raw_pointer(address as *const u8) }
            .map_err(|_| DtbError::Parse)?;
        Self::from_tree(&fdt)
    }

    /// Same lookup over an in-memory blob.
    pub fn from_blob(blob: &[u8]) -> Result<Self, DtbError> {
        let size = unsafe { DevTree::read_totalsize(blob) }.map_err(|_| DtbError::Parse)?;
        if size > blob.len() {
            return Err(DtbError::Parse);
        }
        let fdt = unsafe { DevTree::new(&blob[..size]) }.map_err(|_| DtbError::Parse)?;
        Self::from_tree(&fdt)
    }

    fn from_tree(fdt: &DevTree) -> Result<Self, DtbError> {
        let mut serial_nodes = fdt.compatible_nodes("ns16550a");
        let node = serial_nodes
            .next()
            .map_err(|_| DtbError::Parse)?
            .ok_or(DtbError::NoSerialNode)?;

        let mut uart_base = None;
        let mut uart_clock_hz = None;
        for prop in node.props().iterator() {
            if let Ok(prop) = prop {
                match prop.name().unwrap_or("") {
                    "reg" => uart_base = prop.u64(0).ok().map(|addr| addr as usize),
                    "clock-frequency" => uart_clock_hz = prop.u32(0).ok(),
                    _ => {}
                }
            }
        }

        Ok(BoardInfo {
            uart_base: uart_base.ok_or(DtbError::MissingReg)?,
            uart_clock_hz: uart_clock_hz.ok_or(DtbError::MissingClock)?,
        })
    }
}
