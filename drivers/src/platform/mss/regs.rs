//! MSS GPIO register file.
//!
//! Register map, relative to the bank's base address:
//!
//! | offset      | register                              |
//! |-------------|---------------------------------------|
//! | 0x00 + 4*n  | per-line configuration, line `n`      |
//! | 0x80        | interrupt status (sticky, W1C)        |
//! | 0x84        | input levels, one bit per line        |
//! | 0x88        | driven output levels, one bit per line|

use bitflags::bitflags;
use core::ptr::{read_volatile, write_volatile};

use crate::hal::gpio::TriggerType;

/// Width of the shared registers, and so the most lines one bank can
/// carry.
pub const MSS_MAX_LINES: usize = 32;

const CFG_BASE: usize = 0x00;
const STATUS_OFFSET: usize = 0x80;
const INPUT_OFFSET: usize = 0x84;
const OUTPUT_OFFSET: usize = 0x88;

bitflags! {
    /// Flag bits of the per-line configuration register.
    ///
    /// A correctly configured line has either `EN_IN` set or both
    /// `EN_OUT` and `OUT_EN` set, never a mix; direction changes clear
    /// the opposite bits. Bits 5-7 hold the trigger-type field, see
    /// [`trigger_bits`].
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub struct PinCfg: u32 {
        /// Line drives the pad.
        const EN_OUT = 1 << 0;
        /// Line is sampled from the pad.
        const EN_IN = 1 << 1;
        /// Output buffer enable, paired with `EN_OUT`.
        const OUT_EN = 1 << 2;
        /// Interrupt generation enable.
        const EN_INT = 1 << 3;
    }
}

const TRIGGER_SHIFT: u32 = 5;

/// Encode a trigger type into the 3-bit field at bits 5-7 of the
/// configuration register.
pub(crate) fn trigger_bits(trigger: TriggerType) -> u32 {
    let code: u32 = match trigger {
        TriggerType::LevelHigh => 0,
        TriggerType::LevelLow => 1,
        TriggerType::RisingEdge => 2,
        TriggerType::FallingEdge => 3,
        TriggerType::BothEdges => 4,
    };
    code << TRIGGER_SHIFT
}

/// Register file of one MSS GPIO bank.
///
/// The driver core is written against this trait rather than raw
/// pointers so tests can stand in an in-memory register file that
/// emulates the sticky/write-1-to-clear protocol. The only hardware
/// implementation is [`RegisterWindow`].
pub trait GpioRegisters {
    /// Read the configuration register of `line`.
    fn read_cfg(&self, line: usize) -> u32;

    /// Write the configuration register of `line`.
    fn write_cfg(&self, line: usize, value: u32);

    /// Read the sticky interrupt-status register.
    fn read_status(&self) -> u32;

    /// Clear the status bits set in `mask` (write-1-to-clear). Zero
    /// bits leave the corresponding lines' pending state untouched.
    fn clear_status(&self, mask: u32);

    /// Read the instantaneous input levels.
    fn read_input(&self) -> u32;

    /// Read the last driven output levels.
    fn read_output(&self) -> u32;

    /// Write the output register.
    fn write_output(&self, value: u32);
}

impl<T: GpioRegisters> GpioRegisters for &T {
    fn read_cfg(&self, line: usize) -> u32 {
        (*self).read_cfg(line)
    }

    fn write_cfg(&self, line: usize, value: u32) {
        (*self).write_cfg(line, value)
    }

    fn read_status(&self) -> u32 {
        (*self).read_status()
    }

    fn clear_status(&self, mask: u32) {
        (*self).clear_status(mask)
    }

    fn read_input(&self) -> u32 {
        (*self).read_input()
    }

    fn read_output(&self) -> u32 {
        (*self).read_output()
    }

    fn write_output(&self, value: u32) {
        (*self).write_output(value)
    }
}

/// Memory-mapped register window of one MSS GPIO bank.
///
/// Plain volatile 32-bit accesses over a base address; every access is
/// a single bus transaction. Read-modify-write sequences are the
/// caller's problem, the driver serializes them under its lock.
#[derive(Clone, Copy)]
pub struct RegisterWindow {
    base: usize,
}

impl RegisterWindow {
    /// Create a window over a mapped register block.
    ///
    /// # Safety
    ///
    /// `base` must point to a mapped, word-aligned MSS GPIO register
    /// block of at least 0x8C bytes with device memory attributes,
    /// valid for as long as the window is used.
    pub const unsafe fn new(base: usize) -> Self {
        Self { base }
    }

    fn read(&self, offset: usize) -> u32 {
        unsafe { read_volatile((self.base + offset) as *const u32) }
    }

    fn write(&self, offset: usize, value: u32) {
        unsafe { write_volatile((self.base + offset) as *mut u32, value) }
    }
}

impl GpioRegisters for RegisterWindow {
    fn read_cfg(&self, line: usize) -> u32 {
        self.read(CFG_BASE + line * 4)
    }

    fn write_cfg(&self, line: usize, value: u32) {
        self.write(CFG_BASE + line * 4, value);
    }

    fn read_status(&self) -> u32 {
        self.read(STATUS_OFFSET)
    }

    fn clear_status(&self, mask: u32) {
        // The hardware clears exactly the bits written as 1.
        self.write(STATUS_OFFSET, mask);
    }

    fn read_input(&self) -> u32 {
        self.read(INPUT_OFFSET)
    }

    fn read_output(&self) -> u32 {
        self.read(OUTPUT_OFFSET)
    }

    fn write_output(&self, value: u32) {
        self.write(OUTPUT_OFFSET, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_field_encoding() {
        assert_eq!(trigger_bits(TriggerType::LevelHigh), 0 << 5);
        assert_eq!(trigger_bits(TriggerType::LevelLow), 1 << 5);
        assert_eq!(trigger_bits(TriggerType::RisingEdge), 2 << 5);
        assert_eq!(trigger_bits(TriggerType::FallingEdge), 3 << 5);
        assert_eq!(trigger_bits(TriggerType::BothEdges), 4 << 5);
    }

    #[test]
    fn window_offsets_match_register_map() {
        // 0x8C bytes of registers, viewed as 35 words.
        let mut block = [0u32; 35];
        let window = unsafe { RegisterWindow::new(block.as_mut_ptr() as usize) };

        window.write_cfg(3, 0xAB);
        window.write_output(0x5);
        window.clear_status(0x2);

        assert_eq!(window.read_cfg(3), 0xAB);
        assert_eq!(window.read_output(), 0x5);
        assert_eq!(block[3], 0xAB);
        assert_eq!(block[0x88 / 4], 0x5);
        // clear_status is a plain write; sticky semantics live in the
        // device, not the window.
        assert_eq!(block[0x80 / 4], 0x2);
    }
}
