use crate::phys::MemoryResult;

/// Abstraction for physical memory access.
///
/// The CPU core reads instruction bytes and moves stack words through this
/// trait. Accesses take `&mut self` so implementations with side effects
/// (device windows, dirty tracking) remain possible; the provided typed
/// helpers compose little-endian words from the byte-slice primitives.
pub trait MemoryBus {
    /// Total addressable bytes backed by this implementation.
    fn size(&self) -> u32;

    /// Reads bytes at `paddr` into `dst`, failing if any byte is out of range.
    fn read(&mut self, paddr: u32, dst: &mut [u8]) -> MemoryResult<()>;

    /// Writes all of `src` at `paddr`, failing if any byte is out of range.
    fn write(&mut self, paddr: u32, src: &[u8]) -> MemoryResult<()>;

    fn read_u8(&mut self, paddr: u32) -> MemoryResult<u8> {
        let mut buf = [0u8; 1];
        self.read(paddr, &mut buf)?;
        Ok(buf[0])
    }

    fn read_u16(&mut self, paddr: u32) -> MemoryResult<u16> {
        let mut buf = [0u8; 2];
        self.read(paddr, &mut buf)?;
        Ok(u16::from_le_bytes(buf))
    }

    fn write_u8(&mut self, paddr: u32, val: u8) -> MemoryResult<()> {
        self.write(paddr, &[val])
    }

    fn write_u16(&mut self, paddr: u32, val: u16) -> MemoryResult<()> {
        self.write(paddr, &val.to_le_bytes())
    }
}
