use num::traits::{WrappingShl, WrappingShr};
use num::Integer;
use std::mem::size_of_val;

/// Sign-extend a value
pub fn sign_extend<T: Integer + WrappingShl + WrappingShr>(val: T, nbits: u32) -> T {
    let notherbits = size_of_val(&val) as u32 * 8 - nbits;
    val.wrapping_shl(notherbits).wrapping_shr(notherbits)
}

/// Absolute target of a relative branch. `next` is the address
/// of the byte following the branch instruction.
pub fn branch_target(next: u16, disp: u8) -> u16 {
    next.wrapping_add(sign_extend(disp as i16, 8) as u16)
}

/// Whether a byte can be written as a character literal.
pub fn is_printable(b: u8) -> bool {
    (0x20..0x7F).contains(&b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_extend_8bit() {
        assert_eq!(sign_extend(0x7F_i16, 8), 0x7F);
        assert_eq!(sign_extend(0x80_i16, 8), -128);
        assert_eq!(sign_extend(0xFF_i16, 8), -1);
        assert_eq!(sign_extend(0x00_i16, 8), 0);
    }

    #[test]
    fn branch_target_boundaries() {
        assert_eq!(branch_target(0x0012, 0x05), 0x0017);
        assert_eq!(branch_target(0x0012, 0xFE), 0x0010);
        assert_eq!(branch_target(0x1000, 0x7F), 0x107F);
        assert_eq!(branch_target(0x1000, 0x80), 0x0F80);
        assert_eq!(branch_target(0x1000, 0xFF), 0x0FFF);
    }

    #[test]
    fn branch_target_wraps() {
        assert_eq!(branch_target(0x0001, 0xFD), 0xFFFE);
        assert_eq!(branch_target(0xFFFF, 0x02), 0x0001);
    }

    #[test]
    fn printable() {
        assert!(is_printable(b' '));
        assert!(is_printable(b'~'));
        assert!(is_printable(b'1'));
        assert!(!is_printable(0x7F));
        assert!(!is_printable(0x1F));
        assert!(!is_printable(0xC6));
    }
}
