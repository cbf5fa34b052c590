use anyhow::{ensure, Result};

use crate::cpu::Bus;
use crate::MEMORY_SIZE;

/// Flat 64 KiB memory with no mapping, banking or IO side effects.
///
/// Real hardware has cartridge ROM/RAM, VRAM, WRAM, HRAM and IO registers
/// behind the bus; this is the plain backing store used when none of that
/// matters (tests, tools).
#[derive(Clone)]
pub struct FlatMemory {
    pub memory: Vec<u8>,
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self {
            memory: vec![0; MEMORY_SIZE],
        }
    }
}

impl FlatMemory {
    /// Copy `image` into memory starting at `origin`.
    pub fn load(&mut self, origin: u16, image: &[u8]) -> Result<()> {
        let start = origin as usize;
        let end = start + image.len();
        ensure!(
            end <= MEMORY_SIZE,
            "image of {} bytes at 0x{:04X} runs past the end of memory",
            image.len(),
            origin
        );
        self.memory[start..end].copy_from_slice(image);
        Ok(())
    }
}

impl Bus for FlatMemory {
    fn read8(&mut self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    fn write8(&mut self, addr: u16, value: u8) {
        self.memory[addr as usize] = value;
    }

    fn reset(&mut self) {
        self.memory.fill(0);
    }
}
