//! Constant-time operations to prevent timing attacks

use subtle::ConstantTimeEq;

/// Constant-structure comparison of two word slices
///
/// Every word pair is XORed and OR-accumulated before the single final
/// check, so the running time does not depend on where the first
/// difference sits. Slices of different length compare unequal without
/// inspecting their contents; the length is public.
pub fn ct_eq_words(a: &[u32], b: &[u32]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut acc = 0u32;
    for (x, y) in a.iter().zip(b.iter()) {
        acc |= x ^ y;
    }

    acc.ct_eq(&0u32).into()
}

/// XOR two 128-bit blocks held as four big-endian words
#[inline(always)]
pub fn ct_xor4(a: &[u32; 4], b: &[u32; 4]) -> [u32; 4] {
    [a[0] ^ b[0], a[1] ^ b[1], a[2] ^ b[2], a[3] ^ b[3]]
}

/// Constant-time mask generation for a single bit
///
/// Returns `0xFFFF_FFFF` if the low bit of `bit` is set, zero otherwise.
#[inline(always)]
pub fn ct_mask(bit: u32) -> u32 {
    0u32.wrapping_sub(bit & 1)
}
