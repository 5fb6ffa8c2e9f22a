//! GPIO (General Purpose Input/Output) Hardware Abstraction Layer.
//!
//! This module defines platform-independent types and traits for GPIO
//! banks: a fixed-size group of lines addressed by index, with optional
//! per-line interrupt-chip operations for banks that demultiplex a
//! shared upstream interrupt.

/// Pin logic level.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PinLevel {
    /// Logic low (0V or ground).
    Low,
    /// Logic high (VDD or 3.3V/5V depending on system).
    High,
}

impl From<bool> for PinLevel {
    fn from(value: bool) -> Self {
        if value {
            PinLevel::High
        } else {
            PinLevel::Low
        }
    }
}

impl From<PinLevel> for bool {
    fn from(level: PinLevel) -> bool {
        matches!(level, PinLevel::High)
    }
}

/// Configured direction of a GPIO line.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    /// Line is sampled from the pad.
    Input,
    /// Line drives the pad.
    Output,
}

/// Trigger condition under which a line's interrupt becomes pending.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TriggerType {
    /// Pending while the signal is high.
    LevelHigh,
    /// Pending while the signal is low.
    LevelLow,
    /// Pending on a low-to-high transition.
    RisingEdge,
    /// Pending on a high-to-low transition.
    FallingEdge,
    /// Pending on any transition.
    BothEdges,
}

/// GPIO errors.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GpioError {
    /// Line index outside the bank's configured range.
    InvalidLine,
    /// Requested line count exceeds the hardware register width.
    TooManyLines,
    /// The register window could not be established. Raised by the
    /// platform-integration layer, never by a driver itself.
    HardwareUnavailable,
}

/// A bank of GPIO lines addressed by index.
///
/// Implementations guard their registers internally, so all operations
/// take `&self` and may be called concurrently.
pub trait GpioBank {
    /// Error type for GPIO operations.
    type Error: core::fmt::Debug;

    /// Configure a line as input.
    fn set_direction_input(&self, line: usize) -> Result<(), Self::Error>;

    /// Configure a line as output and drive `initial` on it.
    fn set_direction_output(&self, line: usize, initial: PinLevel) -> Result<(), Self::Error>;

    /// Report the configured direction of a line.
    fn direction(&self, line: usize) -> Result<Direction, Self::Error>;

    /// Read the instantaneous logic level of a line, regardless of its
    /// configured direction.
    fn value(&self, line: usize) -> Result<PinLevel, Self::Error>;

    /// Drive a level on an output line.
    ///
    /// There is no error channel: an out-of-range index is ignored.
    fn set_value(&self, line: usize, level: PinLevel);

    /// Drive a line high.
    fn set_high(&self, line: usize) {
        self.set_value(line, PinLevel::High);
    }

    /// Drive a line low.
    fn set_low(&self, line: usize) {
        self.set_value(line, PinLevel::Low);
    }
}

/// Per-line interrupt-chip operations.
///
/// Implemented by banks that turn a single upstream hardware interrupt
/// into one logical interrupt per line. Consumers configure a trigger
/// first, then enable the line.
pub trait GpioIrqChip: GpioBank {
    /// Select the trigger condition for a line.
    fn set_trigger_type(&self, line: usize, trigger: TriggerType) -> Result<(), Self::Error>;

    /// Enable interrupt generation for a line.
    ///
    /// Forces the line to input, discards any pending event that
    /// accumulated while the line was disabled, then enables it.
    fn enable_irq(&self, line: usize) -> Result<(), Self::Error>;

    /// Disable interrupt generation for a line.
    ///
    /// Direction and pending state are left as they are.
    fn disable_irq(&self, line: usize) -> Result<(), Self::Error>;

    /// Mask a line's interrupt.
    ///
    /// May be a no-op where the surrounding dispatcher already masks
    /// the bank's parent line around each dispatch cycle.
    fn mask_irq(&self, line: usize);

    /// Unmask a line's interrupt. Counterpart of [`mask_irq`].
    ///
    /// [`mask_irq`]: GpioIrqChip::mask_irq
    fn unmask_irq(&self, line: usize);
}
