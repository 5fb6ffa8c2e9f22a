use core::fmt::Debug;

/// CPU-level interrupt masking.
///
/// Implemented once per architecture. Locks that must be taken from
/// both normal and interrupt context disable interrupts through this
/// trait before spinning, and hand the saved state back on release.
pub trait IrqControl {
    /// Saved interrupt state.
    type State: Copy + Debug;

    /// Mask interrupts on the current CPU, returning the prior state.
    fn disable() -> Self::State;

    /// Restore a previously saved interrupt state.
    fn restore(state: Self::State);
}
