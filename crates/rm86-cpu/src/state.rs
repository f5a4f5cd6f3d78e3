pub const FLAG_CF: u16 = 1 << 0;
pub const FLAG_PF: u16 = 1 << 2;
pub const FLAG_AF: u16 = 1 << 4;
pub const FLAG_ZF: u16 = 1 << 6;
pub const FLAG_SF: u16 = 1 << 7;
pub const FLAG_TF: u16 = 1 << 8;
pub const FLAG_IF: u16 = 1 << 9;
pub const FLAG_DF: u16 = 1 << 10;
pub const FLAG_OF: u16 = 1 << 11;

/// Architectural registers visible to the push family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    Ax,
    Cx,
    Dx,
    Bx,
    Sp,
    Bp,
    Si,
    Di,
    Es,
    Cs,
    Ss,
    Ds,
    /// FLAGS as a pseudo-register, read whole by `pushf`.
    Flags,
}

/// Encoding order of the 16-bit general-purpose registers, as used by the
/// low three bits of register-coded opcodes and by ModRM register fields.
pub const GPR_ENCODING: [Register; 8] = [
    Register::Ax,
    Register::Cx,
    Register::Dx,
    Register::Bx,
    Register::Sp,
    Register::Bp,
    Register::Si,
    Register::Di,
];

/// Encoding order of the segment registers in opcode bits 3-4.
pub const SEG_ENCODING: [Register; 4] = [
    Register::Es,
    Register::Cs,
    Register::Ss,
    Register::Ds,
];

impl Register {
    /// Selects a general-purpose register from the low three bits of an
    /// opcode byte or a ModRM field.
    pub fn gpr16(bits: u8) -> Register {
        GPR_ENCODING[(bits & 0x7) as usize]
    }

    /// Selects a segment register from a two-bit opcode field. Total over
    /// the field's domain; no invalid selector exists at this width.
    pub fn seg(bits: u8) -> Register {
        SEG_ENCODING[(bits & 0x3) as usize]
    }
}

/// Register file of one emulated CPU.
///
/// All mutable machine state apart from memory lives here. Handlers take it
/// by `&mut`, so independent emulated instances never share registers.
#[derive(Debug, Clone)]
pub struct RegisterFile {
    gpr: [u16; 8],
    seg: [u16; 4],
    flags: u16,
    ip: u16,
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterFile {
    pub fn new() -> Self {
        Self {
            gpr: [0; 8],
            seg: [0; 4],
            flags: 0x2, // bit 1 is always set
            ip: 0,
        }
    }

    pub fn get(&self, reg: Register) -> u16 {
        match reg {
            Register::Ax => self.gpr[0],
            Register::Cx => self.gpr[1],
            Register::Dx => self.gpr[2],
            Register::Bx => self.gpr[3],
            Register::Sp => self.gpr[4],
            Register::Bp => self.gpr[5],
            Register::Si => self.gpr[6],
            Register::Di => self.gpr[7],
            Register::Es => self.seg[0],
            Register::Cs => self.seg[1],
            Register::Ss => self.seg[2],
            Register::Ds => self.seg[3],
            Register::Flags => self.flags,
        }
    }

    pub fn set(&mut self, reg: Register, value: u16) {
        match reg {
            Register::Ax => self.gpr[0] = value,
            Register::Cx => self.gpr[1] = value,
            Register::Dx => self.gpr[2] = value,
            Register::Bx => self.gpr[3] = value,
            Register::Sp => self.gpr[4] = value,
            Register::Bp => self.gpr[5] = value,
            Register::Si => self.gpr[6] = value,
            Register::Di => self.gpr[7] = value,
            Register::Es => self.seg[0] = value,
            Register::Cs => self.seg[1] = value,
            Register::Ss => self.seg[2] = value,
            Register::Ds => self.seg[3] = value,
            Register::Flags => self.set_flags(value),
        }
    }

    pub fn flags(&self) -> u16 {
        self.flags
    }

    pub fn set_flags(&mut self, flags: u16) {
        // Preserve the always-1 bit 1.
        self.flags = flags | 0x2;
    }

    pub fn get_flag(&self, mask: u16) -> bool {
        (self.flags & mask) != 0
    }

    pub fn set_flag(&mut self, mask: u16, val: bool) {
        if val {
            self.flags |= mask;
        } else {
            self.flags &= !mask;
        }
    }

    pub fn ip(&self) -> u16 {
        self.ip
    }

    pub fn set_ip(&mut self, ip: u16) {
        self.ip = ip;
    }

    pub fn advance_ip(&mut self, delta: u16) {
        self.ip = self.ip.wrapping_add(delta);
    }
}
