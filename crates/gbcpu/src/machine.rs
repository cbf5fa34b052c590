mod config;
mod emulator;
mod memory;

pub use config::{BootState, MachineConfig};
pub use emulator::Machine;
pub use memory::FlatMemory;

#[cfg(test)]
mod tests;
