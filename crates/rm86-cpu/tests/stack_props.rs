//! Property tests for the push tail over arbitrary machine state.

use proptest::prelude::*;
use rm86_cpu::addr::{phys_addr, PHYS_ADDR_MASK};
use rm86_cpu::interp::step;
use rm86_cpu::state::{Register, RegisterFile, GPR_ENCODING};
use rm86_mem::{FlatMemory, MemoryBus};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn push_reg_decrements_sp_and_stores_little_endian(
        ss in any::<u16>(),
        sp in any::<u16>(),
        ax in any::<u16>(),
    ) {
        // A word at the very top of the 1 MiB space would straddle the
        // address-space end and fault; that corner is covered separately.
        prop_assume!(phys_addr(ss, sp.wrapping_sub(2)) != PHYS_ADDR_MASK);

        let mut regs = RegisterFile::new();
        regs.set(Register::Ss, ss);
        regs.set(Register::Sp, sp);
        regs.set(Register::Ax, ax);
        let mut mem = FlatMemory::real_mode();
        mem.load(0, &[0x50]).unwrap(); // push ax

        step(&mut regs, &mut mem).unwrap();

        let new_sp = sp.wrapping_sub(2);
        prop_assert_eq!(regs.get(Register::Sp), new_sp);
        let addr = phys_addr(ss, new_sp);
        prop_assert_eq!(mem.read_u8(addr).unwrap(), (ax & 0xFF) as u8);
        prop_assert_eq!(mem.read_u8(addr + 1).unwrap(), (ax >> 8) as u8);
    }

    #[test]
    fn pushf_stores_the_current_flags_word(
        flags in any::<u16>(),
        sp in any::<u16>(),
    ) {
        let mut regs = RegisterFile::new();
        regs.set(Register::Ss, 0x6000);
        regs.set(Register::Sp, sp);
        regs.set_flags(flags);
        let mut mem = FlatMemory::real_mode();
        mem.load(0, &[0x9C]).unwrap(); // pushf

        step(&mut regs, &mut mem).unwrap();

        let new_sp = sp.wrapping_sub(2);
        prop_assert_eq!(regs.get(Register::Sp), new_sp);
        // Bit 1 reads back as set no matter what was written.
        prop_assert_eq!(
            mem.read_u16(phys_addr(0x6000, new_sp)).unwrap(),
            flags | 0x2
        );
    }

    #[test]
    fn push_rm_register_mode_selects_by_encoding(
        rm in 0u8..8,
        values in prop::array::uniform8(any::<u16>()),
    ) {
        let mut regs = RegisterFile::new();
        for (reg, value) in GPR_ENCODING.into_iter().zip(values) {
            regs.set(reg, value);
        }
        regs.set(Register::Ss, 0x5000);
        let mut mem = FlatMemory::real_mode();
        mem.load(0, &[0xFF, 0b11_110_000 | rm]).unwrap();

        let expected = regs.get(Register::gpr16(rm));
        let sp_before = regs.get(Register::Sp);

        step(&mut regs, &mut mem).unwrap();

        let sp_after = regs.get(Register::Sp);
        prop_assert_eq!(sp_after, sp_before.wrapping_sub(2));
        prop_assert_eq!(
            mem.read_u16(phys_addr(0x5000, sp_after)).unwrap(),
            expected
        );
    }
}
