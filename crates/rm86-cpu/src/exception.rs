use rm86_mem::MemoryError;
use thiserror::Error;

/// A handler was invoked with preconditions that do not hold.
///
/// This signals a decoder or dispatch defect inside the emulator, never a
/// guest-program condition; it is kept as its own type so callers can fail
/// fast on it instead of folding it into guest fault handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContractViolation {
    #[error("push r/m invoked without a decoded ModRM byte")]
    MissingModRm,

    #[error("push r/m invoked with ModRM opcode extension {found} (expected 6)")]
    PushOpcodeExtension { found: u8 },
}

/// Errors surfaced while decoding or executing an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CpuError {
    /// Guest-visible memory fault, propagated untouched from the memory
    /// subsystem to the caller that owns fault semantics.
    #[error(transparent)]
    Memory(#[from] MemoryError),

    /// The opcode byte is outside the push family.
    #[error("unsupported opcode {opcode:#04x}")]
    UnsupportedOpcode { opcode: u8 },

    /// A prefix run pushed the encoding past the instruction length limit.
    #[error("instruction encoding exceeds 15 bytes")]
    OversizedInstruction,

    #[error(transparent)]
    Contract(#[from] ContractViolation),
}
