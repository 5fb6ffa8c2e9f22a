pub mod irq;
pub use irq::RiscvIrq;
