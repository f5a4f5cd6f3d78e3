//! Push-family instruction decoding: segment-override prefixes, the ModRM
//! byte, displacement fetch, and 16-bit effective addresses.

use rm86_mem::MemoryBus;

use crate::addr::phys_addr;
use crate::exception::{ContractViolation, CpuError};
use crate::state::{Register, RegisterFile};

/// Longest encoding accepted before decode gives up on a prefix run.
pub const MAX_INSTR_LEN: u8 = 15;

/// ModRM opcode extension (reg field) selecting `push` in the `FF` group.
pub const PUSH_OPCODE_EXT: u8 = 6;

/// A raw ModRM byte with field accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModRm(pub u8);

impl ModRm {
    pub fn mode(self) -> u8 {
        self.0 >> 6
    }

    /// Register field (bits 3-5); an opcode extension for group opcodes.
    pub fn reg(self) -> u8 {
        (self.0 >> 3) & 0x7
    }

    pub fn rm(self) -> u8 {
        self.0 & 0x7
    }

    pub fn is_register_mode(self) -> bool {
        self.mode() == 0b11
    }
}

/// One decoded push-family instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instr {
    pub opcode: u8,
    pub modrm: Option<ModRm>,
    /// Displacement, sign-extended to 16 bits when encoded in 8.
    pub disp: u16,
    /// Segment register named by an override prefix, replacing the
    /// effective-address default.
    pub seg_override: Option<Register>,
    /// Encoded length in bytes, prefixes included.
    pub len: u8,
}

struct Fetcher<'a, M: MemoryBus> {
    mem: &'a mut M,
    cs: u16,
    ip: u16,
    len: u8,
}

impl<M: MemoryBus> Fetcher<'_, M> {
    fn next_u8(&mut self) -> Result<u8, CpuError> {
        if self.len >= MAX_INSTR_LEN {
            return Err(CpuError::OversizedInstruction);
        }
        let offset = self.ip.wrapping_add(u16::from(self.len));
        let byte = self.mem.read_u8(phys_addr(self.cs, offset))?;
        self.len += 1;
        Ok(byte)
    }

    fn next_u16(&mut self) -> Result<u16, CpuError> {
        let lo = self.next_u8()?;
        let hi = self.next_u8()?;
        Ok(u16::from_le_bytes([lo, hi]))
    }
}

/// Decodes the instruction at `cs:ip`, reading code bytes through `mem`.
///
/// Bytes are fetched one at a time, so a fetch fault surfaces only once the
/// faulting byte is actually consumed. Instruction-pointer arithmetic wraps
/// within the 64 KiB code segment. Opcodes outside the push family (which
/// includes `FF` encodings whose reg field selects another group-5
/// operation) are rejected with the offending byte.
pub fn decode<M: MemoryBus>(mem: &mut M, cs: u16, ip: u16) -> Result<Instr, CpuError> {
    let mut fetch = Fetcher {
        mem,
        cs,
        ip,
        len: 0,
    };

    // Segment-override prefixes may repeat; the last one wins.
    let mut seg_override = None;
    let opcode = loop {
        match fetch.next_u8()? {
            0x26 => seg_override = Some(Register::Es),
            0x2E => seg_override = Some(Register::Cs),
            0x36 => seg_override = Some(Register::Ss),
            0x3E => seg_override = Some(Register::Ds),
            byte => break byte,
        }
    };

    let mut modrm = None;
    let mut disp = 0u16;
    match opcode {
        0xFF => {
            let byte = ModRm(fetch.next_u8()?);
            if byte.reg() != PUSH_OPCODE_EXT {
                return Err(CpuError::UnsupportedOpcode { opcode });
            }
            disp = match byte.mode() {
                0b00 if byte.rm() == 0b110 => fetch.next_u16()?,
                0b00 | 0b11 => 0,
                0b01 => fetch.next_u8()? as i8 as i16 as u16,
                _ => fetch.next_u16()?,
            };
            modrm = Some(byte);
        }
        0x50..=0x57 | 0x06 | 0x0E | 0x16 | 0x1E | 0x9C => {}
        _ => return Err(CpuError::UnsupportedOpcode { opcode }),
    }

    Ok(Instr {
        opcode,
        modrm,
        disp,
        seg_override,
        len: fetch.len,
    })
}

/// Typed 16-bit read of the instruction's r/m operand: the selected GPR in
/// register mode, otherwise the word at the effective address.
pub fn read_rm16<M: MemoryBus>(
    instr: &Instr,
    regs: &RegisterFile,
    mem: &mut M,
) -> Result<u16, CpuError> {
    let modrm = instr.modrm.ok_or(ContractViolation::MissingModRm)?;
    if modrm.is_register_mode() {
        return Ok(regs.get(Register::gpr16(modrm.rm())));
    }
    let (default_seg, offset) = effective_addr(modrm, instr.disp, regs);
    let seg = instr.seg_override.unwrap_or(default_seg);
    Ok(mem.read_u16(phys_addr(regs.get(seg), offset))?)
}

/// 16-bit effective address of a memory r/m operand: the default segment
/// register and the offset. BP-based forms default to SS, everything else
/// to DS; `mod=00 rm=110` is the direct-address special case.
fn effective_addr(modrm: ModRm, disp: u16, regs: &RegisterFile) -> (Register, u16) {
    let bx = regs.get(Register::Bx);
    let bp = regs.get(Register::Bp);
    let si = regs.get(Register::Si);
    let di = regs.get(Register::Di);

    let (default_seg, base) = match modrm.rm() {
        0b000 => (Register::Ds, bx.wrapping_add(si)),
        0b001 => (Register::Ds, bx.wrapping_add(di)),
        0b010 => (Register::Ss, bp.wrapping_add(si)),
        0b011 => (Register::Ss, bp.wrapping_add(di)),
        0b100 => (Register::Ds, si),
        0b101 => (Register::Ds, di),
        0b110 if modrm.mode() == 0b00 => (Register::Ds, 0), // direct address
        0b110 => (Register::Ss, bp),
        _ => (Register::Ds, bx),
    };
    (default_seg, base.wrapping_add(disp))
}
