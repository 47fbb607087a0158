//! Constant-time steps to adjacent geoquads.
//!
//! These functions decode only the axis that moves and splice it back next to the untouched bits
//! of the other axis, which is much cheaper than parsing and recreating a key. There is no
//! boundary check: stepping off the edge of the grid wraps the cell index and yields a
//! meaningless key.

use tinyvec::ArrayVec;

use crate::morton::{deinterleave_axis, splice_axis};
use crate::r#type::Axis;

#[inline]
fn step(key: u32, axis: Axis, forward: bool) -> u32 {
    let index = deinterleave_axis(key, axis);
    let index = if forward {
        index.wrapping_add(1)
    } else {
        index.wrapping_sub(1)
    };
    splice_axis(key, axis, index)
}

/// The geoquad directly north of `key`.
#[inline]
pub fn north_of(key: u32) -> u32 {
    step(key, Axis::Latitude, true)
}

/// The geoquad directly south of `key`.
#[inline]
pub fn south_of(key: u32) -> u32 {
    step(key, Axis::Latitude, false)
}

/// The geoquad directly east of `key`.
#[inline]
pub fn east_of(key: u32) -> u32 {
    step(key, Axis::Longitude, true)
}

/// The geoquad directly west of `key`.
#[inline]
pub fn west_of(key: u32) -> u32 {
    step(key, Axis::Longitude, false)
}

/// The eight geoquads surrounding `key`, clockwise from north: N, NE, E, SE, S, SW, W, NW.
pub fn neighbors(key: u32) -> ArrayVec<[u32; 8]> {
    let north = north_of(key);
    let south = south_of(key);
    let mut out = ArrayVec::new();
    out.push(north);
    out.push(east_of(north));
    out.push(east_of(key));
    out.push(east_of(south));
    out.push(south);
    out.push(west_of(south));
    out.push(west_of(key));
    out.push(west_of(north));
    out
}

#[cfg(test)]
mod test {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::codec::{create, parse};
    use crate::constants::GEOQUAD_STEP;
    use crate::morton::{deinterleave_full, interleave_full};

    #[test]
    fn steps_move_one_index() {
        let key = interleave_full(3600, 1800);
        assert_eq!(deinterleave_full(north_of(key)), (3600, 1801));
        assert_eq!(deinterleave_full(south_of(key)), (3600, 1799));
        assert_eq!(deinterleave_full(east_of(key)), (3601, 1800));
        assert_eq!(deinterleave_full(west_of(key)), (3599, 1800));
    }

    #[test]
    fn steps_carry_across_bit_boundaries() {
        // 0x00FF -> 0x0100 flips nine bits of the moving axis
        let key = interleave_full(0x00FF, 0x00FF);
        assert_eq!(deinterleave_full(north_of(key)), (0x00FF, 0x0100));
        assert_eq!(deinterleave_full(east_of(key)), (0x0100, 0x00FF));
        let key = interleave_full(0x0100, 0x0100);
        assert_eq!(deinterleave_full(south_of(key)), (0x0100, 0x00FF));
        assert_eq!(deinterleave_full(west_of(key)), (0x00FF, 0x0100));
    }

    #[test]
    fn steps_agree_with_recreating() {
        let key = create(10.01, 20.01).unwrap();
        let (lat, lng) = parse(key);
        let half = GEOQUAD_STEP / 2.;
        assert_eq!(north_of(key), create(lat + GEOQUAD_STEP + half, lng + half).unwrap());
        assert_eq!(south_of(key), create(lat - half, lng + half).unwrap());
        assert_eq!(east_of(key), create(lat + half, lng + GEOQUAD_STEP + half).unwrap());
        assert_eq!(west_of(key), create(lat + half, lng - half).unwrap());
    }

    #[test]
    fn opposite_steps_cancel() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let key = interleave_full(rng.gen_range(1..7200), rng.gen_range(1..3600));
            assert_eq!(south_of(north_of(key)), key);
            assert_eq!(north_of(south_of(key)), key);
            assert_eq!(west_of(east_of(key)), key);
            assert_eq!(east_of(west_of(key)), key);
        }
    }

    #[test]
    fn neighbors_ring() {
        let key = interleave_full(100, 200);
        let ring: Vec<(u16, u16)> = neighbors(key).iter().map(|k| deinterleave_full(*k)).collect();
        assert_eq!(
            ring,
            vec![
                (100, 201),
                (101, 201),
                (101, 200),
                (101, 199),
                (100, 199),
                (99, 199),
                (99, 200),
                (99, 201),
            ]
        );
    }
}
