/// Abstraction over the Game Boy bus (memory and IO).
///
/// Address decoding, banking and IO register mapping all live behind this
/// trait; the CPU only sees bytes and little-endian words. Reads take
/// `&mut self` because IO registers may have read side effects.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    /// Clear the backing store.
    ///
    /// `Cpu::reset` does not call this; whoever owns both (see `Machine`)
    /// resets them together.
    fn reset(&mut self);

    /// Little-endian word read: low byte at `addr`, high byte at `addr + 1`.
    fn read16(&mut self, addr: u16) -> u16 {
        let lo = self.read8(addr);
        let hi = self.read8(addr.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    /// Little-endian word write, symmetric to [`Bus::read16`].
    fn write16(&mut self, addr: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.write8(addr, lo);
        self.write8(addr.wrapping_add(1), hi);
    }
}
