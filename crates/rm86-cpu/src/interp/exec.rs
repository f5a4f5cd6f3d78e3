//! Fetch/decode/execute stepping.

use rm86_mem::MemoryBus;

use crate::decode::decode;
use crate::exception::CpuError;
use crate::state::{Register, RegisterFile};

use super::exec_instr;

/// Executes the instruction at CS:IP.
///
/// IP advances by the encoded length only after the handler succeeds; on
/// error IP is untouched, so the caller can resolve the fault and retry at
/// the same address.
pub fn step<M: MemoryBus>(regs: &mut RegisterFile, mem: &mut M) -> Result<(), CpuError> {
    let instr = decode(mem, regs.get(Register::Cs), regs.ip())?;
    exec_instr(regs, mem, &instr)?;
    regs.advance_ip(u16::from(instr.len));
    Ok(())
}
