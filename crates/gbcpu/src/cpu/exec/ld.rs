use crate::cpu::{Bus, Cpu, Pair, Reg16, Reg8};

/// Load family. None of these touch the flags, except `ld_pair_sp_e8`.
impl Cpu {
    /// LD r,r': copy `src` into `dst`.
    pub fn ld_r_r(&mut self, dst: Reg8, src: Reg8) {
        let value = self.regs.get8(src);
        self.regs.set8(dst, value);
        self.step(1);
    }

    /// LD r,d8
    pub fn ld_r_d8<B: Bus>(&mut self, bus: &mut B, dst: Reg8) {
        let value = self.fetch8(bus);
        self.regs.set8(dst, value);
        self.step(2);
    }

    /// Load the two bytes following PC into two 8-bit registers: the first
    /// byte into `first`, the second into `second`.
    ///
    /// With `(C, B)` this is `LD BC,d16`.
    pub fn ld_rr_d16<B: Bus>(&mut self, bus: &mut B, first: Reg8, second: Reg8) {
        let lo = self.fetch8(bus);
        let hi = self.fetch8(bus);
        self.regs.set8(first, lo);
        self.regs.set8(second, hi);
        self.step(3);
    }

    /// LD rr,d16 / LD SP,d16
    pub fn ld_r16_d16<B: Bus>(&mut self, bus: &mut B, dst: Reg16) {
        let value = self.fetch16(bus);
        self.regs.set16(dst, value);
        self.step(3);
    }

    /// LD r,(rr)
    pub fn ld_r_pair<B: Bus>(&mut self, bus: &mut B, dst: Reg8, src: Pair) {
        let value = self.read_indirect(bus, src);
        self.regs.set8(dst, value);
        self.step_with(1, 8);
    }

    /// LD A,(HL)
    pub fn ld_a_hl<B: Bus>(&mut self, bus: &mut B) {
        self.ld_r_pair(bus, Reg8::A, Pair::HL);
    }

    /// LD (rr),r
    pub fn ld_pair_r<B: Bus>(&mut self, bus: &mut B, dst: Pair, src: Reg8) {
        let addr = self.regs.pair(dst);
        bus.write8(addr, self.regs.get8(src));
        self.step_with(1, 8);
    }

    /// LD (rr),d8
    pub fn ld_pair_d8<B: Bus>(&mut self, bus: &mut B, dst: Pair) {
        let value = self.fetch8(bus);
        let addr = self.regs.pair(dst);
        bus.write8(addr, value);
        self.step_with(2, 12);
    }

    /// LD (a16),r
    pub fn ld_a16_r<B: Bus>(&mut self, bus: &mut B, src: Reg8) {
        let addr = self.fetch16(bus);
        bus.write8(addr, self.regs.get8(src));
        self.step_with(3, 16);
    }

    /// LD (a16),SP: both bytes, little-endian.
    pub fn ld_a16_r16<B: Bus>(&mut self, bus: &mut B, src: Reg16) {
        let addr = self.fetch16(bus);
        bus.write16(addr, self.regs.get16(src));
        self.step_with(3, 20);
    }

    /// LD r,(a16)
    pub fn ld_r_a16<B: Bus>(&mut self, bus: &mut B, dst: Reg8) {
        let addr = self.fetch16(bus);
        let value = bus.read8(addr);
        self.regs.set8(dst, value);
        self.step_with(3, 16);
    }

    /// LDH (a8),r: store at `0xFF00 + d8`.
    pub fn ldh_a8_r<B: Bus>(&mut self, bus: &mut B, src: Reg8) {
        let addr = Self::high_page(self.fetch8(bus));
        bus.write8(addr, self.regs.get8(src));
        self.step_with(2, 12);
    }

    /// LDH r,(a8): load from `0xFF00 + d8`.
    pub fn ldh_r_a8<B: Bus>(&mut self, bus: &mut B, dst: Reg8) {
        let addr = Self::high_page(self.fetch8(bus));
        let value = bus.read8(addr);
        self.regs.set8(dst, value);
        self.step_with(2, 12);
    }

    /// LD (0xFF00+r'),r: store `src` at the high-page address selected by
    /// `offset` (`LD (C),A` with `offset = C`).
    pub fn ldh_reg_r<B: Bus>(&mut self, bus: &mut B, offset: Reg8, src: Reg8) {
        let addr = Self::high_page(self.regs.get8(offset));
        bus.write8(addr, self.regs.get8(src));
        self.step_with(2, 8);
    }

    /// LD r,(0xFF00+r')
    pub fn ldh_r_reg<B: Bus>(&mut self, bus: &mut B, dst: Reg8, offset: Reg8) {
        let addr = Self::high_page(self.regs.get8(offset));
        let value = bus.read8(addr);
        self.regs.set8(dst, value);
        self.step_with(2, 8);
    }

    /// LD SP,HL and friends: copy a pair into a wide register.
    pub fn ld_r16_pair(&mut self, dst: Reg16, src: Pair) {
        let value = self.regs.pair(src);
        self.regs.set16(dst, value);
        self.step_with(1, 8);
    }

    /// LD rr,SP+e
    ///
    /// The stored value is SP plus `e` read as a signed byte. H and C are
    /// still computed from the unsigned byte; see `alu_add16_signed`.
    pub fn ld_pair_sp_e8<B: Bus>(&mut self, bus: &mut B, dst: Pair) {
        let imm = self.fetch8(bus);
        let result = self.alu_add16_signed(self.regs.sp, imm);
        self.regs.set_pair(dst, result);
        self.step_with(2, 12);
    }
}
