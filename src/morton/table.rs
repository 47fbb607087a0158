//! Byte-wide lookup tables for spreading and compacting bits.
//!
//! Both tables are evaluated at compile time and live in read-only memory.

/// `MORTON_FORWARD[b]` holds the bits of `b` moved to the even positions of a 16-bit value.
pub(crate) static MORTON_FORWARD: [u32; 256] = build_forward();

/// `MORTON_COMPACT[b]` gathers the four even-position bits of `b` into the low nibble.
/// Odd-position bits are ignored.
pub(crate) static MORTON_COMPACT: [u8; 256] = build_compact();

const fn spread_byte(byte: u32) -> u32 {
    let mut out = 0;
    let mut i = 0;
    while i < 8 {
        out |= ((byte >> i) & 1) << (2 * i);
        i += 1;
    }
    out
}

const fn compact_byte(byte: u32) -> u8 {
    let mut out = 0;
    let mut i = 0;
    while i < 4 {
        out |= ((byte >> (2 * i)) & 1) << i;
        i += 1;
    }
    out as u8
}

const fn build_forward() -> [u32; 256] {
    let mut table = [0; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = spread_byte(i as u32);
        i += 1;
    }
    table
}

const fn build_compact() -> [u8; 256] {
    let mut table = [0; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = compact_byte(i as u32);
        i += 1;
    }
    table
}
