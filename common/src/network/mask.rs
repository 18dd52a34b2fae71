//! # Mask Arithmetic
//!
//! Byte-wise helpers for network masks. Everything here works on plain
//! octet slices so the same code serves IPv4 (4 bytes) and IPv6 (16 bytes).

/// Returns the bitwise complement of `mask`.
///
/// For a network mask this is the host mask: `255.255.252.0` becomes
/// `0.0.3.255`. The input is left untouched.
pub fn complement(mask: &[u8]) -> Vec<u8> {
    mask.iter().map(|byte| !byte).collect()
}

/// Returns `(ones, bits)` for a mask: the number of set bits and the total
/// width in bits.
///
/// For the canonical masks produced by a prefix length, `ones` is that
/// prefix length.
pub fn mask_size(mask: &[u8]) -> (u32, u32) {
    let ones: u32 = mask.iter().map(|byte| byte.count_ones()).sum();
    let bits: u32 = (mask.len() as u32) * 8;
    (ones, bits)
}

/// Computes the last address of a network: every host bit set.
///
/// Bytes are paired from the end, so a mask shorter than the address only
/// affects the trailing bytes. The result is a fresh buffer; `network` is
/// copied, never modified.
pub fn max_address(network: &[u8], mask: &[u8]) -> Vec<u8> {
    let mut last: Vec<u8> = network.to_vec();
    for (byte, mask_byte) in last.iter_mut().rev().zip(mask.iter().rev()) {
        *byte |= !mask_byte;
    }
    last
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
