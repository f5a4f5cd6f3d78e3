use core::fmt;

use crate::bus::MemoryBus;

/// Size of the full real-mode physical address space (1 MiB).
pub const REAL_MODE_SIZE: u32 = 0x10_0000;

/// Errors returned by [`MemoryBus`] backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryError {
    /// The requested address range is outside the backed memory size.
    OutOfRange { paddr: u32, len: usize, size: u32 },
}

impl fmt::Display for MemoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemoryError::OutOfRange { paddr, len, size } => write!(
                f,
                "memory access out of range: paddr=0x{paddr:05x} len={len} size=0x{size:x}"
            ),
        }
    }
}

impl std::error::Error for MemoryError {}

pub type MemoryResult<T> = Result<T, MemoryError>;

fn check_range(size: u32, paddr: u32, len: usize) -> MemoryResult<()> {
    let err = MemoryError::OutOfRange { paddr, len, size };
    let len_u32 = u32::try_from(len).map_err(|_| err)?;
    let end = paddr.checked_add(len_u32).ok_or(err)?;
    if end > size {
        return Err(err);
    }
    Ok(())
}

/// Flat (contiguous) RAM, zero-initialized.
///
/// A word access that starts in range but runs past the end fails whole;
/// nothing is partially committed.
#[derive(Debug, Clone)]
pub struct FlatMemory {
    data: Box<[u8]>,
}

impl FlatMemory {
    pub fn new(size: u32) -> Self {
        Self {
            data: vec![0u8; size as usize].into_boxed_slice(),
        }
    }

    /// A full 1 MiB real-mode address space.
    pub fn real_mode() -> Self {
        Self::new(REAL_MODE_SIZE)
    }

    /// Seeds `bytes` at `paddr`, for loading test images.
    pub fn load(&mut self, paddr: u32, bytes: &[u8]) -> MemoryResult<()> {
        self.write(paddr, bytes)
    }

    #[inline]
    fn range(&self, paddr: u32, len: usize) -> MemoryResult<(usize, usize)> {
        check_range(self.size(), paddr, len)?;
        let start = paddr as usize;
        Ok((start, start + len))
    }
}

impl MemoryBus for FlatMemory {
    fn size(&self) -> u32 {
        self.data.len() as u32
    }

    fn read(&mut self, paddr: u32, dst: &mut [u8]) -> MemoryResult<()> {
        let (start, end) = self.range(paddr, dst.len())?;
        dst.copy_from_slice(&self.data[start..end]);
        Ok(())
    }

    fn write(&mut self, paddr: u32, src: &[u8]) -> MemoryResult<()> {
        let (start, end) = self.range(paddr, src.len())?;
        self.data[start..end].copy_from_slice(src);
        Ok(())
    }
}
