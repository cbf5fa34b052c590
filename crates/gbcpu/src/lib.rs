pub mod cpu;
pub mod machine;

pub use cpu::{Bus, Clock, Cpu, Cycles, Flags, Pair, Reg16, Reg8, Registers};
pub use machine::{BootState, FlatMemory, Machine, MachineConfig};

/// Base of the high page used by the `LDH`-style loads (`0xFF00 + n`).
pub const HIGH_PAGE: u16 = 0xFF00;
/// Total addressable memory (64 KiB).
pub const MEMORY_SIZE: usize = 0x10000;
