use super::{Clock, Cpu, Cycles, Flags, Registers};

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// Create a CPU in its power-on state (see [`Cpu::reset`]).
    pub fn new() -> Self {
        Self {
            regs: Registers::default(),
            halted: false,
            stopped: true,
            last: Cycles::default(),
            clock: Clock::default(),
        }
    }

    /// Reset the CPU to its power-on state.
    ///
    /// Every register and counter goes back to zero, HALT is cleared and
    /// the machine sits in STOP until the dispatcher wakes it. Memory is
    /// not touched.
    pub fn reset(&mut self) {
        *self = Self::new();
        log::debug!("CPU reset");
    }

    /// Initialize registers to match the DMG boot ROM's state after it
    /// hands control to cartridge code.
    ///
    /// These values follow common emulator conventions and are based on
    /// hardware tests (as documented in Pan Docs). The CPU is left running.
    pub fn apply_dmg_boot_state(&mut self) {
        self.regs.a = 0x01;
        self.regs.f = Flags::Z | Flags::H | Flags::C; // 0xB0
        self.regs.b = 0x00;
        self.regs.c = 0x13;
        self.regs.d = 0x00;
        self.regs.e = 0xD8;
        self.regs.h = 0x01;
        self.regs.l = 0x4D;
        self.regs.sp = 0xFFFE;
        self.regs.pc = 0x0100;

        self.halted = false;
        self.stopped = false;
    }
}
