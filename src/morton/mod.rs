//! Morton (Z-order) interleaving of two 16-bit cell indices into one 32-bit key.
//!
//! Which axis lands on the even bits is decided by [`Axis`](crate::Axis); nothing in this module
//! hardcodes it.

mod table;

use crate::r#type::Axis;
use table::{MORTON_COMPACT, MORTON_FORWARD};

/// Ones on every even bit position.
pub const EVEN_BITS: u32 = 0x5555_5555;

/// Spread the bits of `x` onto the even bit positions of a `u32`. Odd bits are zero.
#[inline]
pub fn interleave_half(x: u16) -> u32 {
    (MORTON_FORWARD[(x >> 8) as usize] << 16) | MORTON_FORWARD[(x & 0xFF) as usize]
}

/// Interleave a longitude and latitude cell index into a key.
#[inline]
pub fn interleave_full(lng_index: u16, lat_index: u16) -> u32 {
    (interleave_half(lng_index) << Axis::Longitude.shift())
        | (interleave_half(lat_index) << Axis::Latitude.shift())
}

/// Gather the even bits of `key` back into a `u16`. Odd bits are ignored.
#[inline]
pub fn deinterleave_half(key: u32) -> u16 {
    let z = key & EVEN_BITS;
    (MORTON_COMPACT[(z & 0xFF) as usize] as u16)
        | ((MORTON_COMPACT[((z >> 8) & 0xFF) as usize] as u16) << 4)
        | ((MORTON_COMPACT[((z >> 16) & 0xFF) as usize] as u16) << 8)
        | ((MORTON_COMPACT[(z >> 24) as usize] as u16) << 12)
}

/// Extract the cell index of a single axis from a key.
#[inline]
pub fn deinterleave_axis(key: u32, axis: Axis) -> u16 {
    deinterleave_half(key >> axis.shift())
}

/// Split a key into its `(lng_index, lat_index)` pair.
#[inline]
pub fn deinterleave_full(key: u32) -> (u16, u16) {
    (
        deinterleave_axis(key, Axis::Longitude),
        deinterleave_axis(key, Axis::Latitude),
    )
}

/// Replace the cell index of `axis` in `key`, leaving the other axis untouched.
#[inline]
pub(crate) fn splice_axis(key: u32, axis: Axis, index: u16) -> u32 {
    (key & axis.other().mask()) | (interleave_half(index) << axis.shift())
}
