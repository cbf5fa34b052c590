use super::{Cpu, Flags};

impl Cpu {
    /// Core 8-bit ADD/ADC operation on A.
    ///
    /// `use_carry` selects between ADD (false) and ADC (true). The incoming
    /// carry is consumed; C afterwards only reflects this addition.
    pub(super) fn alu_add(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a;
        let carry_in = if use_carry { self.flag_bit(Flags::C) } else { 0 };

        let half = (a & 0x0F) + (value & 0x0F) + carry_in;
        let full = (a as u16) + (value as u16) + (carry_in as u16);
        let result = full as u8;

        self.regs.a = result;

        // Flags: Z N H C
        self.set_flag(Flags::Z, result == 0);
        self.set_flag(Flags::N, false);
        self.set_flag(Flags::H, half > 0x0F);
        self.set_flag(Flags::C, full > 0xFF);
    }

    /// Core 8-bit SUB/SBC/CP flag computation.
    ///
    /// Returns `A - value (- C)` and sets flags; the caller decides whether
    /// the result is written back (SUB/SBC) or dropped (CP).
    pub(super) fn alu_sub(&mut self, value: u8, use_carry: bool) -> u8 {
        let a = self.regs.a;
        let carry_in = if use_carry { self.flag_bit(Flags::C) } else { 0 };

        let half = (a & 0x0F) as i16 - (value & 0x0F) as i16 - carry_in as i16;
        let full = a as i16 - value as i16 - carry_in as i16;
        let result = full as u8;

        self.set_flag(Flags::Z, result == 0);
        self.set_flag(Flags::N, true);
        self.set_flag(Flags::H, half < 0);
        self.set_flag(Flags::C, full < 0);
        result
    }

    #[inline]
    pub(super) fn alu_and(&mut self, value: u8) {
        let result = self.regs.a & value;
        self.regs.a = result;

        self.clear_flags();
        self.set_flag(Flags::Z, result == 0);
        self.set_flag(Flags::H, true);
        // N and C are already cleared.
    }

    #[inline]
    pub(super) fn alu_or(&mut self, value: u8) {
        let result = self.regs.a | value;
        self.regs.a = result;

        self.clear_flags();
        self.set_flag(Flags::Z, result == 0);
    }

    #[inline]
    pub(super) fn alu_xor(&mut self, value: u8) {
        let result = self.regs.a ^ value;
        self.regs.a = result;

        self.clear_flags();
        self.set_flag(Flags::Z, result == 0);
    }

    /// 8-bit increment helper used by INC r and INC (rr).
    ///
    /// Updates Z, N, H while leaving C unchanged.
    #[inline]
    pub(super) fn alu_inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.set_flag(Flags::Z, result == 0);
        self.set_flag(Flags::N, false);
        self.set_flag(Flags::H, (value & 0x0F) == 0x0F);
        result
    }

    /// 8-bit decrement helper used by DEC r and DEC (rr).
    ///
    /// Updates Z, N, H while leaving C unchanged.
    #[inline]
    pub(super) fn alu_dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.set_flag(Flags::Z, result == 0);
        self.set_flag(Flags::N, true);
        self.set_flag(Flags::H, (value & 0x0F) == 0);
        result
    }

    /// 16-bit add helper for `ADD rr,rr`.
    ///
    /// Z is unaffected; N is cleared; H and C come from bit 11 and bit 15.
    #[inline]
    pub(super) fn alu_add16(&mut self, base: u16, value: u16) -> u16 {
        self.set_flag(Flags::N, false);
        self.set_flag(Flags::H, (base & 0x0FFF) + (value & 0x0FFF) > 0x0FFF);
        self.set_flag(Flags::C, (base as u32) + (value as u32) > 0xFFFF);
        base.wrapping_add(value)
    }

    /// Add a signed 8-bit immediate to a 16-bit base (`ADD SP,e` and
    /// `LD rr,SP+e`).
    ///
    /// The result uses `imm8` as a two's-complement offset, but H and C are
    /// taken from unsigned byte arithmetic on the low byte of `base` and the
    /// raw `imm8`, as the hardware does. Z and N are cleared.
    #[inline]
    pub(super) fn alu_add16_signed(&mut self, base: u16, imm8: u8) -> u16 {
        let offset = imm8 as i8 as i16 as u16;
        self.set_flag(Flags::Z, false);
        self.set_flag(Flags::N, false);
        self.set_flag(Flags::H, (base & 0x000F) + (imm8 as u16 & 0x000F) > 0x000F);
        self.set_flag(Flags::C, (base & 0x00FF) + (imm8 as u16) > 0x00FF);
        base.wrapping_add(offset)
    }
}
