//! Physical memory for a real-mode 8086 machine: the [`MemoryBus`] access
//! trait and a flat, bounds-checked RAM backend.

#![forbid(unsafe_code)]

mod bus;
mod phys;

pub use bus::MemoryBus;
pub use phys::{FlatMemory, MemoryError, MemoryResult, REAL_MODE_SIZE};
