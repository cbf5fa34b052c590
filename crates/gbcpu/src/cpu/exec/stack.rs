use crate::cpu::{Bus, Cpu, Pair};

impl Cpu {
    /// PUSH rr: high register to SP-1, low register to SP-2.
    pub fn push<B: Bus>(&mut self, bus: &mut B, src: Pair) {
        let value = self.regs.pair(src);
        self.push_u16(bus, value);
        self.step_with(1, 16);
    }

    /// POP rr: `[SP]` into the low register, `[SP+1]` into the high one.
    ///
    /// POP is cheaper than PUSH (12 vs 16 CPU cycles). Popping into F drops
    /// the low nibble.
    pub fn pop<B: Bus>(&mut self, bus: &mut B, dst: Pair) {
        let value = self.pop_u16(bus);
        self.regs.set_pair(dst, value);
        self.step_with(1, 12);
    }
}
