//! Instruction dispatch for the push family.
//!
//! The dispatch table routes a decoded instruction by opcode byte. Handler
//! preconditions (the `FF` group's opcode extension) are re-validated inside
//! the handlers as contract checks, so a routing defect fails fast instead
//! of miscomputing.

mod exec;
pub mod ops_stack;

pub use exec::step;

use rm86_mem::MemoryBus;

use crate::decode::Instr;
use crate::exception::CpuError;
use crate::state::RegisterFile;

/// Executes one already-decoded instruction against `regs` and `mem`.
pub fn exec_instr<M: MemoryBus>(
    regs: &mut RegisterFile,
    mem: &mut M,
    instr: &Instr,
) -> Result<(), CpuError> {
    match instr.opcode {
        0xFF => ops_stack::push_rm(regs, mem, instr),
        0x50..=0x57 => ops_stack::push_reg(regs, mem, instr),
        0x06 | 0x0E | 0x16 | 0x1E => ops_stack::push_sreg(regs, mem, instr),
        0x9C => ops_stack::push_flags(regs, mem, instr),
        opcode => Err(CpuError::UnsupportedOpcode { opcode }),
    }
}
