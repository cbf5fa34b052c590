use crate::cpu::{Bus, Cpu, Pair, Reg8};

impl Cpu {
    /// ADD A,r / ADC A,r
    pub fn add_r(&mut self, src: Reg8, use_carry: bool) {
        self.alu_add(self.regs.get8(src), use_carry);
        self.step(1);
    }

    /// ADD A,(rr) / ADC A,(rr)
    pub fn add_pair<B: Bus>(&mut self, bus: &mut B, src: Pair, use_carry: bool) {
        let value = self.read_indirect(bus, src);
        self.alu_add(value, use_carry);
        self.step_with(1, 8);
    }

    /// ADD A,d8 / ADC A,d8
    pub fn add_d8<B: Bus>(&mut self, bus: &mut B, use_carry: bool) {
        let value = self.fetch8(bus);
        self.alu_add(value, use_carry);
        self.step(2);
    }

    /// SUB r / SBC A,r
    pub fn sub_r(&mut self, src: Reg8, use_carry: bool) {
        self.regs.a = self.alu_sub(self.regs.get8(src), use_carry);
        self.step(1);
    }

    /// SUB (rr) / SBC A,(rr)
    pub fn sub_pair<B: Bus>(&mut self, bus: &mut B, src: Pair, use_carry: bool) {
        let value = self.read_indirect(bus, src);
        self.regs.a = self.alu_sub(value, use_carry);
        self.step_with(1, 8);
    }

    /// SUB d8 / SBC A,d8
    pub fn sub_d8<B: Bus>(&mut self, bus: &mut B, use_carry: bool) {
        let value = self.fetch8(bus);
        self.regs.a = self.alu_sub(value, use_carry);
        self.step(2);
    }

    pub fn and_r(&mut self, src: Reg8) {
        self.alu_and(self.regs.get8(src));
        self.step(1);
    }

    pub fn and_pair<B: Bus>(&mut self, bus: &mut B, src: Pair) {
        let value = self.read_indirect(bus, src);
        self.alu_and(value);
        self.step_with(1, 8);
    }

    pub fn and_d8<B: Bus>(&mut self, bus: &mut B) {
        let value = self.fetch8(bus);
        self.alu_and(value);
        self.step(2);
    }

    pub fn or_r(&mut self, src: Reg8) {
        self.alu_or(self.regs.get8(src));
        self.step(1);
    }

    pub fn or_pair<B: Bus>(&mut self, bus: &mut B, src: Pair) {
        let value = self.read_indirect(bus, src);
        self.alu_or(value);
        self.step_with(1, 8);
    }

    pub fn or_d8<B: Bus>(&mut self, bus: &mut B) {
        let value = self.fetch8(bus);
        self.alu_or(value);
        self.step(2);
    }

    pub fn xor_r(&mut self, src: Reg8) {
        self.alu_xor(self.regs.get8(src));
        self.step(1);
    }

    pub fn xor_pair<B: Bus>(&mut self, bus: &mut B, src: Pair) {
        let value = self.read_indirect(bus, src);
        self.alu_xor(value);
        self.step_with(1, 8);
    }

    pub fn xor_d8<B: Bus>(&mut self, bus: &mut B) {
        let value = self.fetch8(bus);
        self.alu_xor(value);
        self.step(2);
    }

    /// CP r: flags as for SUB r, A unchanged.
    pub fn cp_r(&mut self, src: Reg8) {
        self.alu_sub(self.regs.get8(src), false);
        self.step(1);
    }

    pub fn cp_pair<B: Bus>(&mut self, bus: &mut B, src: Pair) {
        let value = self.read_indirect(bus, src);
        self.alu_sub(value, false);
        self.step_with(1, 8);
    }

    pub fn cp_d8<B: Bus>(&mut self, bus: &mut B) {
        let value = self.fetch8(bus);
        self.alu_sub(value, false);
        self.step(2);
    }

    /// ADD rr,rr': 16-bit add into `dst`. Z is left alone.
    pub fn add16_pair(&mut self, dst: Pair, src: Pair) {
        let result = self.alu_add16(self.regs.pair(dst), self.regs.pair(src));
        self.regs.set_pair(dst, result);
        self.step_with(1, 8);
    }

    /// ADD SP,e: same signed-result, unsigned-flag rule as `ld_pair_sp_e8`.
    pub fn add_sp_e8<B: Bus>(&mut self, bus: &mut B) {
        let imm = self.fetch8(bus);
        self.regs.sp = self.alu_add16_signed(self.regs.sp, imm);
        self.step_with(2, 16);
    }
}
