mod alu;
mod bus;
mod exec;
mod helpers;
mod init;
mod regs;

pub use bus::Bus;
pub use regs::{Flags, Pair, Reg16, Reg8, Registers};

/// Cost of a single instruction in machine cycles (`m`) and CPU cycles (`t`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cycles {
    pub m: u32,
    pub t: u32,
}

impl Cycles {
    /// Cost at the default ratio of four CPU cycles per machine cycle.
    #[inline]
    pub const fn machine(m: u32) -> Self {
        Self { m, t: m * 4 }
    }

    #[inline]
    pub const fn new(m: u32, t: u32) -> Self {
        Self { m, t }
    }
}

/// Running totals of every cost recorded since the last reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Clock {
    pub m: u64,
    pub t: u64,
}

impl Clock {
    #[inline]
    fn advance(&mut self, cost: Cycles) {
        self.m = self.m.wrapping_add(cost.m as u64);
        self.t = self.t.wrapping_add(cost.t as u64);
    }
}

/// Game Boy CPU core (LR35902 class).
///
/// This is the whole CPU-visible register file: the eight 8-bit registers
/// and SP/PC (in `regs`), the cost of the last instruction, the running
/// clock, and the HALT/STOP status. Opcode decoding lives with the caller;
/// each instruction handler is a method taking the memory bus plus its
/// operands, and reports its own cost through [`Cpu::step`] or
/// [`Cpu::step_with`].
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    pub halted: bool,
    /// STOP low-power state. Power-on/reset is the only way in; the
    /// dispatcher leaves it through [`Cpu::wake`].
    stopped: bool,
    /// Cost of the most recently executed instruction.
    pub last: Cycles,
    /// Cumulative cost since the last reset.
    pub clock: Clock,
}

impl Cpu {
    /// Record the cost of the instruction that just completed, using the
    /// default 4:1 CPU-cycle ratio.
    #[inline]
    pub fn step(&mut self, m: u32) {
        self.record(Cycles::machine(m));
    }

    /// Record the cost of the instruction that just completed with an
    /// explicit CPU-cycle count. Memory-access instructions use this since
    /// their timing does not follow the 4:1 ratio.
    #[inline]
    pub fn step_with(&mut self, m: u32, t: u32) {
        self.record(Cycles::new(m, t));
    }

    fn record(&mut self, cost: Cycles) {
        self.last = cost;
        self.clock.advance(cost);
        log::trace!(
            "step m={} t={} (total m={} t={})",
            cost.m,
            cost.t,
            self.clock.m,
            self.clock.t
        );
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Leave HALT and STOP.
    ///
    /// Called by the dispatcher when an interrupt (or joypad line, for
    /// STOP) fires. Nothing inside the core calls this.
    pub fn wake(&mut self) {
        self.halted = false;
        self.stopped = false;
    }
}
