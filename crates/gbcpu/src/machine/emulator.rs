use anyhow::{ensure, Result};

use crate::cpu::{Bus, Cpu};
use crate::MEMORY_SIZE;

use super::{BootState, FlatMemory, MachineConfig};

/// The emulator context that owns the CPU and its memory.
///
/// Opcode dispatch is left to the caller, which drives instruction
/// handlers as `machine.cpu.add_r(..)` / `machine.cpu.push(&mut machine.bus, ..)`.
pub struct Machine<B: Bus = FlatMemory> {
    pub cpu: Cpu,
    pub bus: B,
    config: MachineConfig,
}

impl Default for Machine {
    fn default() -> Self {
        Self::new(MachineConfig::default())
    }
}

impl Machine {
    pub fn new(config: MachineConfig) -> Self {
        Self::with_bus(FlatMemory::default(), config)
    }
}

impl<B: Bus> Machine<B> {
    /// Build a machine around an existing bus. The bus is reset along with
    /// the CPU.
    pub fn with_bus(bus: B, config: MachineConfig) -> Self {
        let mut machine = Self {
            cpu: Cpu::new(),
            bus,
            config,
        };
        machine.reset();
        machine
    }

    #[inline]
    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Reset CPU and memory together, then apply the configured boot state.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.bus.reset();
        if self.config.boot == BootState::DmgPostBoot {
            self.cpu.apply_dmg_boot_state();
        }
    }

    /// Copy a program image to the configured origin and point PC at it.
    pub fn load_program(&mut self, image: &[u8]) -> Result<()> {
        let origin = self.config.origin;
        ensure!(
            origin as usize + image.len() <= MEMORY_SIZE,
            "program of {} bytes does not fit at origin 0x{:04X}",
            image.len(),
            origin
        );

        for (offset, &byte) in image.iter().enumerate() {
            self.bus.write8(origin.wrapping_add(offset as u16), byte);
        }
        self.cpu.regs.pc = origin;

        log::info!("Loaded {} bytes at 0x{:04X}", image.len(), origin);
        Ok(())
    }
}
