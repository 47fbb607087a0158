use std::fmt;

use geo_traits::CoordTrait;

use crate::constants::{LATITUDE_MAX, LATITUDE_MIN, LONGITUDE_MAX, LONGITUDE_MIN};
use crate::morton::EVEN_BITS;

/// One of the two axes of the geoquad grid.
///
/// This is the single place that decides how the axes share the bits of a key: longitude owns the
/// even bit positions and latitude the odd ones. Every interleave, mask and directional step goes
/// through [`Axis::shift`] and [`Axis::mask`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// East-west axis, stored in the even bits of a key.
    Longitude,
    /// North-south axis, stored in the odd bits of a key.
    Latitude,
}

impl Axis {
    /// Bit offset of this axis within an interleaved key.
    #[inline]
    pub const fn shift(self) -> u32 {
        match self {
            Axis::Longitude => 0,
            Axis::Latitude => 1,
        }
    }

    /// Mask selecting the bits of a key that belong to this axis.
    #[inline]
    pub const fn mask(self) -> u32 {
        EVEN_BITS << self.shift()
    }

    /// The other axis.
    #[inline]
    pub const fn other(self) -> Axis {
        match self {
            Axis::Longitude => Axis::Latitude,
            Axis::Latitude => Axis::Longitude,
        }
    }

    /// Lowest valid coordinate on this axis, in degrees.
    #[inline]
    pub const fn min(self) -> f64 {
        match self {
            Axis::Longitude => LONGITUDE_MIN,
            Axis::Latitude => LATITUDE_MIN,
        }
    }

    /// Highest valid coordinate on this axis, in degrees.
    #[inline]
    pub const fn max(self) -> f64 {
        match self {
            Axis::Longitude => LONGITUDE_MAX,
            Axis::Latitude => LATITUDE_MAX,
        }
    }

    /// Lowercase axis name, as used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Axis::Longitude => "longitude",
            Axis::Latitude => "latitude",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A longitude/latitude coordinate returned from [`GeoquadRect`](crate::GeoquadRect).
///
/// `x` is longitude and `y` is latitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coord {
    pub(crate) x: f64,
    pub(crate) y: f64,
}

impl CoordTrait for Coord {
    type T = f64;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn x(&self) -> Self::T {
        self.x
    }

    fn y(&self) -> Self::T {
        self.y
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        match n {
            0 => self.x,
            1 => self.y,
            _ => panic!("Invalid index of coord"),
        }
    }
}
