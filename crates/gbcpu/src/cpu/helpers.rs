use super::{Bus, Cpu, Pair};
use crate::HIGH_PAGE;

impl Cpu {
    /// Read the immediate byte at PC and advance PC past it.
    #[inline]
    pub(super) fn fetch8<B: Bus>(&mut self, bus: &mut B) -> u8 {
        let value = bus.read8(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        value
    }

    /// Read a little-endian immediate word at PC and advance PC past it.
    #[inline]
    pub(super) fn fetch16<B: Bus>(&mut self, bus: &mut B) -> u16 {
        let lo = self.fetch8(bus) as u16;
        let hi = self.fetch8(bus) as u16;
        (hi << 8) | lo
    }

    /// Byte at the address held in `pair`.
    #[inline]
    pub(super) fn read_indirect<B: Bus>(&mut self, bus: &mut B, pair: Pair) -> u8 {
        bus.read8(self.regs.pair(pair))
    }

    #[inline]
    pub(super) fn high_page(offset: u8) -> u16 {
        HIGH_PAGE.wrapping_add(offset as u16)
    }

    #[inline]
    pub(super) fn push_u16<B: Bus>(&mut self, bus: &mut B, value: u16) {
        let [hi, lo] = value.to_be_bytes();
        // Stack grows downward. We want memory[SP] = low, memory[SP+1] = high.
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, hi);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, lo);
    }

    #[inline]
    pub(super) fn pop_u16<B: Bus>(&mut self, bus: &mut B) -> u16 {
        let lo = bus.read8(self.regs.sp);
        let hi = bus.read8(self.regs.sp.wrapping_add(1));
        self.regs.sp = self.regs.sp.wrapping_add(2);
        u16::from_be_bytes([hi, lo])
    }
}
