//! Real-mode segment:offset translation.

/// Mask for the 20 address lines of the emulated bus.
pub const PHYS_ADDR_MASK: u32 = 0xF_FFFF;

/// Translates a segment:offset pair to a physical address:
/// `(segment << 4) + offset`, wrapped to the 20-bit address space.
///
/// Pure function; whether the result is backed by RAM is the memory
/// subsystem's concern.
pub fn phys_addr(segment: u16, offset: u16) -> u32 {
    ((u32::from(segment) << 4) + u32::from(offset)) & PHYS_ADDR_MASK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_is_shifted_by_four_bits() {
        assert_eq!(phys_addr(0x0000, 0x0000), 0x00000);
        assert_eq!(phys_addr(0x1000, 0x0100), 0x10100);
        assert_eq!(phys_addr(0x2000, 0xFFFE), 0x2FFFE);
        assert_eq!(phys_addr(0xA000, 0x0123), 0xA0123);
    }

    #[test]
    fn overlapping_pairs_alias_the_same_address() {
        assert_eq!(phys_addr(0x1234, 0x0010), phys_addr(0x1235, 0x0000));
    }

    #[test]
    fn sum_wraps_at_twenty_bits() {
        assert_eq!(phys_addr(0xFFFF, 0x0010), 0x00000);
        assert_eq!(phys_addr(0xFFFF, 0xFFFF), 0x0FFEF);
    }
}
