use crate::cpu::Cpu;

impl Cpu {
    /// NOP: 1 machine cycle, nothing else.
    pub fn nop(&mut self) {
        self.step(1);
    }

    /// HALT: stop fetching until the dispatcher wakes the CPU.
    pub fn halt(&mut self) {
        self.halted = true;
        log::debug!("CPU halted: {}", self.regs);
        self.step(1);
    }
}
