use bytemuck::{Pod, Zeroable};
use geo_traits::CoordTrait;
use tinyvec::ArrayVec;

use crate::codec;
use crate::direction;
use crate::distance::haversine_distance_miles;
use crate::error::Result;
use crate::morton::deinterleave_full;
use crate::nearby::NearbyQuery;
use crate::rect::GeoquadRect;

/// A geoquad key with method-style access to the free functions of this crate.
///
/// `Geoquad` has the same layout as `u32`, so slices of keys can be viewed as slices of
/// `Geoquad` and back without copying.
///
/// ```
/// use geoquad::Geoquad;
///
/// let quad = Geoquad::new(37.7749, -122.4194).unwrap();
/// assert_eq!(quad.north().south(), quad);
/// assert!(quad.contains(37.7749, -122.4194));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Pod, Zeroable)]
#[repr(transparent)]
pub struct Geoquad(u32);

impl Geoquad {
    /// The geoquad containing `(lat, lng)`.
    pub fn new(lat: f64, lng: f64) -> Result<Self> {
        codec::create(lat, lng).map(Self)
    }

    /// The geoquad containing a coordinate whose `x` is longitude and `y` is latitude.
    pub fn from_coord(coord: &impl CoordTrait<T = f64>) -> Result<Self> {
        codec::create_coord(coord).map(Self)
    }

    /// Wrap a raw key.
    pub const fn from_key(key: u32) -> Self {
        Self(key)
    }

    /// The raw key.
    pub const fn key(self) -> u32 {
        self.0
    }

    /// View a slice of raw keys as geoquads.
    pub fn from_keys(keys: &[u32]) -> &[Geoquad] {
        bytemuck::cast_slice(keys)
    }

    /// View a slice of geoquads as raw keys.
    pub fn as_keys(quads: &[Geoquad]) -> &[u32] {
        bytemuck::cast_slice(quads)
    }

    /// Longitude and latitude cell indices.
    pub fn indices(self) -> (u16, u16) {
        deinterleave_full(self.0)
    }

    /// South-west corner as `(lat, lng)`.
    pub fn south_west(self) -> (f64, f64) {
        codec::parse(self.0)
    }

    /// Center as `(lat, lng)`.
    pub fn center(self) -> (f64, f64) {
        codec::center(self.0)
    }

    /// See [`contains`](crate::contains).
    pub fn contains(self, lat: f64, lng: f64) -> bool {
        codec::contains(self.0, lat, lng)
    }

    /// The area covered by this geoquad.
    pub fn rect(self) -> GeoquadRect {
        codec::rect(self.0)
    }

    /// The adjacent geoquad to the north.
    pub fn north(self) -> Self {
        Self(direction::north_of(self.0))
    }

    /// The adjacent geoquad to the south.
    pub fn south(self) -> Self {
        Self(direction::south_of(self.0))
    }

    /// The adjacent geoquad to the east.
    pub fn east(self) -> Self {
        Self(direction::east_of(self.0))
    }

    /// The adjacent geoquad to the west.
    pub fn west(self) -> Self {
        Self(direction::west_of(self.0))
    }

    /// The eight surrounding geoquads, clockwise from north.
    pub fn neighbors(self) -> ArrayVec<[Geoquad; 8]> {
        direction::neighbors(self.0).into_iter().map(Self).collect()
    }

    /// Great-circle distance in miles between the centers of two geoquads.
    pub fn distance_miles(self, other: Geoquad) -> f64 {
        let (lat1, lng1) = self.center();
        let (lat2, lng2) = other.center();
        haversine_distance_miles(lat1, lng1, lat2, lng2)
    }

    /// See [`nearby`](crate::nearby).
    pub fn nearby(self, radius_miles: f64, fuzz: bool) -> Result<Vec<Geoquad>> {
        let keys = NearbyQuery::new(self.0, radius_miles)
            .fuzz(fuzz)
            .execute()?;
        Ok(keys.into_iter().map(Self).collect())
    }
}

impl From<Geoquad> for u32 {
    fn from(value: Geoquad) -> Self {
        value.0
    }
}

impl From<u32> for Geoquad {
    fn from(value: u32) -> Self {
        Self(value)
    }
}
