//! Microchip PolarFire SoC MSS GPIO platform support.
//!
//! One GPIO bank of up to 32 lines: a per-line configuration register
//! array plus shared sticky-status, input, and output registers, all
//! demultiplexed from a single upstream interrupt line.

pub mod gpio;
pub mod regs;

pub use gpio::MssGpio;
pub use regs::{GpioRegisters, RegisterWindow, MSS_MAX_LINES};
