//! Round tables derived from the GF(2^8) structure
//!
//! Generated once per process on first use.

use once_cell::sync::Lazy;

/// Encryption and decryption lookup tables
pub(crate) struct Tables {
    /// Combined SubBytes/MixColumns tables, one per byte rotation
    pub(crate) enc: [[u32; 256]; 4],
    /// Combined InvSubBytes/InvMixColumns tables, one per byte rotation
    pub(crate) dec: [[u32; 256]; 4],
    pub(crate) sbox: [u8; 256],
    pub(crate) sbox_inv: [u8; 256],
}

pub(crate) static TABLES: Lazy<Tables> = Lazy::new(Tables::generate);

/// Multiply by x in GF(2^8) with reduction polynomial 0x11b
#[inline(always)]
pub(crate) fn xtime(a: u8) -> u8 {
    (a << 1) ^ ((a >> 7) * 0x1b)
}

/// Multiply two bytes in GF(2^8)
#[inline(always)]
fn gf_mul(a: u8, b: u8) -> u8 {
    let mut p = 0u8;
    let mut a = a;
    let mut b = b;
    for _ in 0..8 {
        let mask = (b & 1).wrapping_neg();
        p ^= a & mask;
        a = xtime(a);
        b >>= 1;
    }
    p
}

/// Multiplicative inverse as a^254; zero maps to zero
fn gf_inv(x: u8) -> u8 {
    let x2 = gf_mul(x, x);
    let x4 = gf_mul(x2, x2);
    let x8 = gf_mul(x4, x4);
    let x16 = gf_mul(x8, x8);
    let x32 = gf_mul(x16, x16);
    let x64 = gf_mul(x32, x32);
    let x128 = gf_mul(x64, x64);
    [x64, x32, x16, x8, x4, x2]
        .iter()
        .fold(x128, |acc, &p| gf_mul(acc, p))
}

/// Inverse followed by the affine transform
fn sub_byte(x: u8) -> u8 {
    let i = gf_inv(x);
    i ^ i.rotate_left(1) ^ i.rotate_left(2) ^ i.rotate_left(3) ^ i.rotate_left(4) ^ 0x63
}

impl Tables {
    fn generate() -> Self {
        log::trace!("aes: generating round tables");

        let mut tables = Tables {
            enc: [[0; 256]; 4],
            dec: [[0; 256]; 4],
            sbox: [0; 256],
            sbox_inv: [0; 256],
        };

        for x in 0..=255u8 {
            let s = sub_byte(x);
            tables.sbox[x as usize] = s;
            tables.sbox_inv[s as usize] = x;

            // Column [2s, s, s, 3s]
            let s2 = xtime(s);
            let mut t_enc = u32::from_be_bytes([s2, s, s, s2 ^ s]);

            // Column [14x, 9x, 13x, 11x] for x = InvS(s), stored at index s
            let x2 = xtime(x);
            let x4 = xtime(x2);
            let x8 = xtime(x4);
            let mut t_dec = u32::from_be_bytes([
                x8 ^ x4 ^ x2,
                x8 ^ x,
                x8 ^ x4 ^ x,
                x8 ^ x2 ^ x,
            ]);

            for i in 0..4 {
                tables.enc[i][x as usize] = t_enc;
                tables.dec[i][s as usize] = t_dec;
                t_enc = t_enc.rotate_right(8);
                t_dec = t_dec.rotate_right(8);
            }
        }

        tables
    }
}
