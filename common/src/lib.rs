//! Shared support code for the driver crates.
//!
//! Nothing in here touches a specific peripheral. The [`sync`] module
//! provides the locking primitives drivers use to guard hardware state
//! shared with interrupt context; [`arch`] supplies the CPU-level
//! interrupt masking those primitives are built on.

#![no_std]

pub mod arch;
pub mod sync;
