//! Hardware Abstraction Layer (HAL) - Platform-Independent Traits
//!
//! This module defines generic traits for interacting with hardware
//! peripherals. These traits are implemented by platform-specific
//! drivers, allowing the rest of the system to be written in a
//! platform-independent manner.
//!
//! # Design Principles
//!
//! - **Zero-cost abstractions**: Traits compile to direct hardware access
//! - **Type safety**: Use associated types to catch errors at compile time
//! - **No platform leakage**: Traits must not reference platform-specific types
//!
//! # Available Interfaces
//!
//! - [`gpio`]: General Purpose Input/Output control
//! - [`interrupt`]: Logical interrupt plumbing between drivers and the dispatcher

pub mod gpio;
pub mod interrupt;
