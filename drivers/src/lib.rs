//! GPIO Driver Subsystem
//!
//! This crate is split into two layers:
//!
//! - [`hal`]: Platform-independent trait definitions
//! - [`platform`]: Platform-specific drivers (SoC level)
//!
//! Application and kernel code program GPIO lines through the [`hal`]
//! traits; the selected platform module provides the implementation
//! over its memory-mapped register block. The platform-integration
//! layer (bus enumeration, register mapping, IRQ allocation) lives
//! outside this crate and hands each driver a ready register window
//! plus a sink for the logical interrupts it demultiplexes.
//!
//! # Usage Example
//!
//! ```ignore
//! use drivers::hal::gpio::{GpioBank, GpioIrqChip, PinLevel, TriggerType};
//! use drivers::platform::mss::{MssGpio, RegisterWindow};
//!
//! let window = unsafe { RegisterWindow::new(0x2012_0000) };
//! let gpio = MssGpio::<_, common::arch::riscv::RiscvIrq, _>::new(
//!     window, 16, sink, |line| 64 + line as u32,
//! )?;
//!
//! gpio.set_trigger_type(2, TriggerType::RisingEdge)?;
//! gpio.enable_irq(2)?;
//! gpio.set_direction_output(5, PinLevel::High)?;
//! ```

#![no_std]
#![allow(dead_code)]

#[cfg(test)]
extern crate std;

pub mod hal;
pub mod platform;

// Re-export commonly used types
pub use hal::gpio::{Direction, GpioBank, GpioError, GpioIrqChip, PinLevel, TriggerType};
pub use hal::interrupt::{IrqNumber, IrqSink};
