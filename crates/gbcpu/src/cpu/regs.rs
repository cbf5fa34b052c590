use std::fmt;

use bitflags::bitflags;

use super::Cpu;

bitflags! {
    /// Flag bits in the F register.
    ///
    /// Layout (bit index in the byte, from MSB to LSB):
    /// - bit 7: Z (zero)
    /// - bit 6: N (subtract)
    /// - bit 5: H (half carry)
    /// - bit 4: C (carry)
    /// - bits 0–3 are always zero.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Flags: u8 {
        const Z = 0x80;
        const N = 0x40;
        const H = 0x20;
        const C = 0x10;
    }
}

impl Default for Flags {
    fn default() -> Self {
        Flags::empty()
    }
}

/// 8-bit register identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reg8 {
    A,
    F,
    B,
    C,
    D,
    E,
    H,
    L,
}

/// Two 8-bit registers viewed as one 16-bit value (`hi << 8 | lo`).
///
/// Pairs are not stored anywhere; reads and writes go straight through to
/// the two halves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pair {
    pub hi: Reg8,
    pub lo: Reg8,
}

impl Pair {
    pub const AF: Pair = Pair::new(Reg8::A, Reg8::F);
    pub const BC: Pair = Pair::new(Reg8::B, Reg8::C);
    pub const DE: Pair = Pair::new(Reg8::D, Reg8::E);
    pub const HL: Pair = Pair::new(Reg8::H, Reg8::L);

    #[inline]
    pub const fn new(hi: Reg8, lo: Reg8) -> Self {
        Self { hi, lo }
    }
}

/// 16-bit operand: one of the two wide registers, or a register pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reg16 {
    SP,
    PC,
    Pair(Pair),
}

impl Reg16 {
    pub const AF: Reg16 = Reg16::Pair(Pair::AF);
    pub const BC: Reg16 = Reg16::Pair(Pair::BC);
    pub const DE: Reg16 = Reg16::Pair(Pair::DE);
    pub const HL: Reg16 = Reg16::Pair(Pair::HL);
}

/// Registers for the Game Boy CPU (LR35902).
///
/// The core is Z80-like with an 8-bit ALU and a 16-bit address space.
/// 8-bit values wrap modulo 256 and SP/PC modulo 65536; nothing here ever
/// fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub f: Flags,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
}

impl Registers {
    #[inline]
    pub fn get8(&self, reg: Reg8) -> u8 {
        match reg {
            Reg8::A => self.a,
            Reg8::F => self.f.bits(),
            Reg8::B => self.b,
            Reg8::C => self.c,
            Reg8::D => self.d,
            Reg8::E => self.e,
            Reg8::H => self.h,
            Reg8::L => self.l,
        }
    }

    #[inline]
    pub fn set8(&mut self, reg: Reg8, value: u8) {
        match reg {
            Reg8::A => self.a = value,
            // Lower 4 bits of F are always zero.
            Reg8::F => self.f = Flags::from_bits_truncate(value),
            Reg8::B => self.b = value,
            Reg8::C => self.c = value,
            Reg8::D => self.d = value,
            Reg8::E => self.e = value,
            Reg8::H => self.h = value,
            Reg8::L => self.l = value,
        }
    }

    #[inline]
    pub fn pair(&self, pair: Pair) -> u16 {
        u16::from_be_bytes([self.get8(pair.hi), self.get8(pair.lo)])
    }

    #[inline]
    pub fn set_pair(&mut self, pair: Pair, value: u16) {
        let [hi, lo] = value.to_be_bytes();
        self.set8(pair.hi, hi);
        self.set8(pair.lo, lo);
    }

    #[inline]
    pub fn get16(&self, reg: Reg16) -> u16 {
        match reg {
            Reg16::SP => self.sp,
            Reg16::PC => self.pc,
            Reg16::Pair(pair) => self.pair(pair),
        }
    }

    #[inline]
    pub fn set16(&mut self, reg: Reg16, value: u16) {
        match reg {
            Reg16::SP => self.sp = value,
            Reg16::PC => self.pc = value,
            Reg16::Pair(pair) => self.set_pair(pair, value),
        }
    }

    #[inline]
    pub fn af(&self) -> u16 {
        self.pair(Pair::AF)
    }

    #[inline]
    pub fn set_af(&mut self, value: u16) {
        self.set_pair(Pair::AF, value);
    }

    #[inline]
    pub fn bc(&self) -> u16 {
        self.pair(Pair::BC)
    }

    #[inline]
    pub fn set_bc(&mut self, value: u16) {
        self.set_pair(Pair::BC, value);
    }

    #[inline]
    pub fn de(&self) -> u16 {
        self.pair(Pair::DE)
    }

    #[inline]
    pub fn set_de(&mut self, value: u16) {
        self.set_pair(Pair::DE, value);
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        self.pair(Pair::HL)
    }

    #[inline]
    pub fn set_hl(&mut self, value: u16) {
        self.set_pair(Pair::HL, value);
    }
}

impl fmt::Display for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AF=0x{:04X} BC=0x{:04X} DE=0x{:04X} HL=0x{:04X} SP=0x{:04X} PC=0x{:04X}",
            self.af(),
            self.bc(),
            self.de(),
            self.hl(),
            self.sp,
            self.pc
        )
    }
}

impl Cpu {
    #[inline]
    pub fn get_flag(&self, flag: Flags) -> bool {
        self.regs.f.contains(flag)
    }

    /// Flag value as a 0/1 byte, the form used as an arithmetic carry-in.
    #[inline]
    pub fn flag_bit(&self, flag: Flags) -> u8 {
        u8::from(self.get_flag(flag))
    }

    /// Set or clear `flag`, leaving every other bit of F untouched.
    #[inline]
    pub fn set_flag(&mut self, flag: Flags, value: bool) {
        self.regs.f.set(flag, value);
    }

    #[inline]
    pub fn clear_flags(&mut self) {
        self.regs.f = Flags::empty();
    }
}
