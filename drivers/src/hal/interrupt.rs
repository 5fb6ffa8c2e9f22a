//! Interrupt plumbing between drivers and the system dispatcher.

/// Interrupt number type.
pub type IrqNumber = u32;

/// Sink for logical interrupts raised by a demultiplexing driver.
///
/// The dispatcher implements this to route each raised number to the
/// consumer handler registered for it; the driver neither knows nor
/// cares how that resolution happens. `raise` is called from interrupt
/// context with the driver's internal lock released, so a handler may
/// call back into the driver.
pub trait IrqSink {
    /// Deliver one logical interrupt event.
    fn raise(&self, irq: IrqNumber);
}
