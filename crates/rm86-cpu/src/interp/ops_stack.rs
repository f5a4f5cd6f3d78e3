//! The push family: `push r/m`, `push r`, `push sr`, `pushf`.
//!
//! Every variant shares one tail: resolve the source value, decrement SP by
//! the operand width, translate SS:SP, write the word. The source is always
//! resolved before SP moves, so `push sp` stores the pre-decrement value.

use rm86_mem::MemoryBus;

use crate::addr::phys_addr;
use crate::decode::{read_rm16, Instr, PUSH_OPCODE_EXT};
use crate::exception::{ContractViolation, CpuError};
use crate::state::{Register, RegisterFile};

/// Decrements SP, translates SS:SP, and stores `value` at the new top of
/// stack. SP arithmetic wraps at 16 bits; a push at SP=0 stores to 0xFFFE.
fn push16<M: MemoryBus>(regs: &mut RegisterFile, mem: &mut M, value: u16) -> Result<(), CpuError> {
    let sp = regs.get(Register::Sp).wrapping_sub(2);
    regs.set(Register::Sp, sp);
    let addr = phys_addr(regs.get(Register::Ss), sp);
    mem.write_u16(addr, value)?;
    Ok(())
}

/// `FF /6`: push a 16-bit register or memory operand.
///
/// Dispatch guarantees the ModRM opcode extension; it is re-checked here as
/// a contract, since any other value reaching this handler is a dispatch
/// defect rather than a guest condition.
pub fn push_rm<M: MemoryBus>(
    regs: &mut RegisterFile,
    mem: &mut M,
    instr: &Instr,
) -> Result<(), CpuError> {
    match instr.modrm {
        Some(modrm) if modrm.reg() == PUSH_OPCODE_EXT => {}
        Some(modrm) => {
            return Err(ContractViolation::PushOpcodeExtension {
                found: modrm.reg(),
            }
            .into())
        }
        None => return Err(ContractViolation::MissingModRm.into()),
    }
    let value = read_rm16(instr, regs, mem)?;
    push16(regs, mem, value)
}

/// `50`-`57`: push the GPR named by the low three opcode bits.
pub fn push_reg<M: MemoryBus>(
    regs: &mut RegisterFile,
    mem: &mut M,
    instr: &Instr,
) -> Result<(), CpuError> {
    let value = regs.get(Register::gpr16(instr.opcode & 0x7));
    push16(regs, mem, value)
}

/// `06`/`0E`/`16`/`1E`: push the segment register named by opcode bits 3-4.
pub fn push_sreg<M: MemoryBus>(
    regs: &mut RegisterFile,
    mem: &mut M,
    instr: &Instr,
) -> Result<(), CpuError> {
    let value = regs.get(Register::seg((instr.opcode >> 3) & 0x3));
    push16(regs, mem, value)
}

/// `9C`: push FLAGS as one opaque word.
pub fn push_flags<M: MemoryBus>(
    regs: &mut RegisterFile,
    mem: &mut M,
    _instr: &Instr,
) -> Result<(), CpuError> {
    let value = regs.flags();
    push16(regs, mem, value)
}
