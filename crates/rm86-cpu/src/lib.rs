#![forbid(unsafe_code)]

//! Real-mode 8086 push-family core: the four push variants (`push r/m`,
//! `push r`, `push sr`, `pushf`), segment:offset address translation, and
//! the register file and decoder they run against.
//!
//! The crate API is centered on [`state::RegisterFile`] plus any
//! [`rm86_mem::MemoryBus`] implementation; both are passed explicitly into
//! [`interp::step`] and the handlers, so independent emulated instances
//! never share state.

pub mod addr;
pub mod decode;
mod exception;
pub mod interp;
pub mod state;

pub use exception::{ContractViolation, CpuError};
