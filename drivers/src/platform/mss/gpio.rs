//! MSS GPIO bank driver.
//!
//! Line-control and interrupt-control operations share one bank-wide
//! lock: the output and status registers are single words shared by
//! all lines, so even operations on distinct lines contend on the same
//! read-modify-write sequences. The lock masks interrupts for the
//! duration of each critical section, which keeps it safe to take from
//! both normal context and the dispatch path; every critical section
//! is a handful of register accesses.

use common::sync::IrqSpinLock;
use common::sync::irq::IrqControl;
use log::{info, trace};

use super::regs::{GpioRegisters, MSS_MAX_LINES, PinCfg, trigger_bits};
use crate::hal::gpio::{Direction, GpioBank, GpioError, GpioIrqChip, PinLevel, TriggerType};
use crate::hal::interrupt::{IrqNumber, IrqSink};

/// One MSS GPIO bank.
///
/// Owns the register file for its lifetime. `R` is the register
/// access, `I` the CPU interrupt masking the lock is built on, `S` the
/// sink that logical per-line interrupts are raised into.
pub struct MssGpio<R, I, S>
where
    R: GpioRegisters,
    I: IrqControl,
    S: IrqSink,
{
    /// Serializes every register sequence spanning more than one bus
    /// access, shared between line operations and the dispatch path.
    lock: IrqSpinLock<(), I>,
    regs: R,
    line_count: usize,
    /// Line index to logical interrupt number, fixed at bring-up.
    parents: [IrqNumber; MSS_MAX_LINES],
    sink: S,
}

impl<R, I, S> MssGpio<R, I, S>
where
    R: GpioRegisters,
    I: IrqControl,
    S: IrqSink,
{
    /// Bring up a bank of `line_count` lines.
    ///
    /// `parent_of` maps each line index to the logical interrupt
    /// number the dispatch path will raise for it. Interrupt
    /// generation is cleared on every line before this returns, so
    /// trigger state left over from a warm reset cannot fire before a
    /// consumer has enabled its line.
    pub fn new(
        regs: R,
        line_count: usize,
        sink: S,
        mut parent_of: impl FnMut(usize) -> IrqNumber,
    ) -> Result<Self, GpioError> {
        if line_count > MSS_MAX_LINES {
            return Err(GpioError::TooManyLines);
        }

        let mut parents = [0; MSS_MAX_LINES];
        for (line, parent) in parents.iter_mut().enumerate().take(line_count) {
            *parent = parent_of(line);
        }

        let bank = Self {
            lock: IrqSpinLock::new(()),
            regs,
            line_count,
            parents,
            sink,
        };

        for line in 0..bank.line_count {
            let _guard = bank.lock.lock();
            let cfg = bank.regs.read_cfg(line);
            bank.regs.write_cfg(line, cfg & !PinCfg::EN_INT.bits());
        }

        info!("mss-gpio: registered {} lines", bank.line_count);

        Ok(bank)
    }

    /// Number of lines this bank was brought up with.
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// One dispatch cycle for the bank's upstream interrupt.
    ///
    /// Drains the sticky status register: each pending line has its
    /// bit cleared and its logical interrupt raised on the sink, in
    /// ascending line order. Returns the number of lines serviced;
    /// zero is benign, the upstream line is shared and may fire for
    /// another device.
    ///
    /// Must be called once per upstream assertion, by one context at a
    /// time, with the upstream line masked by the surrounding
    /// dispatcher for the duration of the cycle.
    pub fn handle_interrupt(&self) -> usize {
        let mut pending = [0 as IrqNumber; MSS_MAX_LINES];
        let mut serviced = 0;

        {
            let _guard = self.lock.lock();
            let mut status = self.regs.read_status() & self.line_mask();
            while status != 0 {
                let line = status.trailing_zeros() as usize;
                status &= status - 1;
                // Exactly this one bit: a line that turned pending
                // after the read above keeps its bit for the next
                // cycle.
                self.regs.clear_status(1 << line);
                pending[serviced] = self.parents[line];
                serviced += 1;
            }
        }

        if serviced == 0 {
            trace!("mss-gpio: dispatch cycle with nothing pending");
            return 0;
        }

        // Raised outside the lock so a consumer handler may call back
        // into the bank.
        for &parent in &pending[..serviced] {
            self.sink.raise(parent);
        }

        serviced
    }

    fn check_line(&self, line: usize) -> Result<(), GpioError> {
        if line < self.line_count {
            Ok(())
        } else {
            Err(GpioError::InvalidLine)
        }
    }

    fn line_mask(&self) -> u32 {
        match self.line_count {
            MSS_MAX_LINES => u32::MAX,
            count => (1u32 << count) - 1,
        }
    }

    /// Read-modify-write one bit of the shared output register.
    /// Caller holds the lock.
    fn assign_output_bit(&self, line: usize, high: bool) {
        let out = self.regs.read_output();
        let out = if high {
            out | 1 << line
        } else {
            out & !(1 << line)
        };
        self.regs.write_output(out);
    }

    /// Switch `line` to input, leaving the rest of its configuration
    /// register alone. Caller holds the lock.
    fn write_input_cfg(&self, line: usize) {
        let mut cfg = self.regs.read_cfg(line);
        cfg |= PinCfg::EN_IN.bits();
        cfg &= !(PinCfg::EN_OUT | PinCfg::OUT_EN).bits();
        self.regs.write_cfg(line, cfg);
    }
}

impl<R, I, S> GpioBank for MssGpio<R, I, S>
where
    R: GpioRegisters,
    I: IrqControl,
    S: IrqSink,
{
    type Error = GpioError;

    fn set_direction_input(&self, line: usize) -> Result<(), GpioError> {
        self.check_line(line)?;

        let _guard = self.lock.lock();
        self.write_input_cfg(line);

        Ok(())
    }

    fn set_direction_output(&self, line: usize, initial: PinLevel) -> Result<(), GpioError> {
        self.check_line(line)?;

        let _guard = self.lock.lock();
        // Full overwrite, not a merge: the hardware drops
        // interrupt-enable and trigger state on a mode change, and so
        // does the driver.
        self.regs
            .write_cfg(line, (PinCfg::EN_OUT | PinCfg::OUT_EN).bits());
        self.assign_output_bit(line, initial.into());

        Ok(())
    }

    fn direction(&self, line: usize) -> Result<Direction, GpioError> {
        self.check_line(line)?;

        let cfg = PinCfg::from_bits_retain(self.regs.read_cfg(line));
        if cfg.contains(PinCfg::EN_IN) {
            Ok(Direction::Input)
        } else {
            // EN_OUT together with OUT_EN means output; any other
            // state is ambiguous and reads back as output.
            Ok(Direction::Output)
        }
    }

    fn value(&self, line: usize) -> Result<PinLevel, GpioError> {
        self.check_line(line)?;

        // Single-word read, no lock needed.
        Ok(PinLevel::from(self.regs.read_input() & 1 << line != 0))
    }

    fn set_value(&self, line: usize, level: PinLevel) {
        // No error channel: an out-of-range line is ignored.
        if line >= self.line_count {
            return;
        }

        let _guard = self.lock.lock();
        self.assign_output_bit(line, level.into());
    }
}

impl<R, I, S> GpioIrqChip for MssGpio<R, I, S>
where
    R: GpioRegisters,
    I: IrqControl,
    S: IrqSink,
{
    fn set_trigger_type(&self, line: usize, trigger: TriggerType) -> Result<(), GpioError> {
        self.check_line(line)?;

        let _guard = self.lock.lock();
        let cfg = self.regs.read_cfg(line);
        // The field is or-ed over whatever trigger bits are already
        // set; a line being retargeted goes through a direction change
        // first, which resets the register.
        self.regs.write_cfg(line, cfg | trigger_bits(trigger));

        Ok(())
    }

    fn enable_irq(&self, line: usize) -> Result<(), GpioError> {
        self.check_line(line)?;

        let _guard = self.lock.lock();
        self.write_input_cfg(line);
        // Clear a stale sticky bit before setting EN_INT; the other
        // order delivers a spurious event for a trigger that fired
        // while the line was disabled.
        self.regs.clear_status(1 << line);
        let cfg = self.regs.read_cfg(line);
        self.regs.write_cfg(line, cfg | PinCfg::EN_INT.bits());

        Ok(())
    }

    fn disable_irq(&self, line: usize) -> Result<(), GpioError> {
        self.check_line(line)?;

        let _guard = self.lock.lock();
        let cfg = self.regs.read_cfg(line);
        self.regs.write_cfg(line, cfg & !PinCfg::EN_INT.bits());

        Ok(())
    }

    fn mask_irq(&self, _line: usize) {
        // The dispatcher masks the bank's parent line around each
        // dispatch cycle; there is nothing left to mask per line.
    }

    fn unmask_irq(&self, _line: usize) {}
}
