use crate::sync::irq::IrqControl;

const MSTATUS_MIE: usize = 1 << 3;

/// Machine-mode interrupt control for RISC-V.
///
/// Masks interrupts by clearing `mstatus.MIE` with an atomic
/// clear-and-read (`csrrc`), so the previous enable state is captured
/// in the same instruction that disables delivery. `State` is a bool:
/// whether interrupts were enabled before the disable.
pub struct RiscvIrq;

impl IrqControl for RiscvIrq {
    type State = bool;

    #[inline(always)]
    fn disable() -> bool {
        let prev: usize;
        unsafe {
            core::arch::asm!(
                "csrrc {0}, mstatus, {1}",
                out(reg) prev,
                in(reg) MSTATUS_MIE,
                options(nomem, nostack),
            );
        }
        prev & MSTATUS_MIE != 0
    }

    #[inline(always)]
    fn restore(was_enabled: bool) {
        if was_enabled {
            unsafe {
                core::arch::asm!(
                    "csrs mstatus, {0}",
                    in(reg) MSTATUS_MIE,
                    options(nomem, nostack),
                );
            }
        }
    }
}
