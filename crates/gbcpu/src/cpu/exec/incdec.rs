use crate::cpu::{Bus, Cpu, Pair, Reg16, Reg8};

impl Cpu {
    pub fn inc_r(&mut self, reg: Reg8) {
        let result = self.alu_inc8(self.regs.get8(reg));
        self.regs.set8(reg, result);
        self.step(1);
    }

    /// INC (rr): increment the byte `pair` points at.
    pub fn inc_pair_mem<B: Bus>(&mut self, bus: &mut B, pair: Pair) {
        let addr = self.regs.pair(pair);
        let result = self.alu_inc8(bus.read8(addr));
        bus.write8(addr, result);
        self.step_with(1, 12);
    }

    /// INC rr / INC SP: 16-bit wraparound, flags untouched.
    pub fn inc16(&mut self, reg: Reg16) {
        let value = self.regs.get16(reg).wrapping_add(1);
        self.regs.set16(reg, value);
        self.step_with(1, 8);
    }

    pub fn dec_r(&mut self, reg: Reg8) {
        let result = self.alu_dec8(self.regs.get8(reg));
        self.regs.set8(reg, result);
        self.step(1);
    }

    pub fn dec_pair_mem<B: Bus>(&mut self, bus: &mut B, pair: Pair) {
        let addr = self.regs.pair(pair);
        let result = self.alu_dec8(bus.read8(addr));
        bus.write8(addr, result);
        self.step_with(1, 12);
    }

    pub fn dec16(&mut self, reg: Reg16) {
        let value = self.regs.get16(reg).wrapping_sub(1);
        self.regs.set16(reg, value);
        self.step_with(1, 8);
    }
}
