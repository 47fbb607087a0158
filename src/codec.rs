//! Encoding coordinates to geoquad keys and decoding them back.

use geo_traits::CoordTrait;

use crate::constants::GEOQUAD_STEP;
use crate::error::Result;
use crate::grid::{index_to_lat, index_to_lng, lat_to_index, lng_to_index, validate};
use crate::morton::{deinterleave_full, interleave_full};
use crate::rect::GeoquadRect;

/// Encode a latitude/longitude pair, in degrees, into the key of the cell containing it.
///
/// Coordinates outside the grid fail with [`GeoquadError::OutOfRange`](crate::GeoquadError);
/// they are never clamped.
///
/// A coordinate that sits exactly on a cell edge, such as latitude `-89.95`, is not representable
/// in binary and may quantize into the cell below it. [`contains`] then rejects the coordinate for
/// that key, because the edge it computes from the index rounds the other way.
///
/// ```
/// let key = geoquad::create(0.0, 0.0).unwrap();
/// assert_eq!(geoquad::parse(key), (0.0, 0.0));
/// ```
pub fn create(lat: f64, lng: f64) -> Result<u32> {
    validate(lat, lng)?;
    Ok(interleave_full(lng_to_index(lng), lat_to_index(lat)))
}

/// Encode a coordinate whose `x` is longitude and `y` is latitude.
pub fn create_coord(coord: &impl CoordTrait<T = f64>) -> Result<u32> {
    create(coord.y(), coord.x())
}

/// The south-west corner `(lat, lng)` of the cell identified by `key`.
///
/// Every `u32` is a valid key, although keys not produced by [`create`] may lie off the grid.
#[inline]
pub fn parse(key: u32) -> (f64, f64) {
    let (lng_index, lat_index) = deinterleave_full(key);
    (index_to_lat(lat_index), index_to_lng(lng_index))
}

/// The center `(lat, lng)` of the cell identified by `key`.
#[inline]
pub fn center(key: u32) -> (f64, f64) {
    let (lat, lng) = parse(key);
    let half = GEOQUAD_STEP / 2.;
    (lat + half, lng + half)
}

/// Whether the point lies in the cell of `key`.
///
/// The cell is half-open on both axes: its south and west edges belong to it, its north and east
/// edges belong to the neighboring cells.
///
/// Edges are computed as `index * step + min`, which for points on a cell edge can disagree with
/// the quantization in [`create`] by one cell. `contains(create(lat, lng)?, lat, lng)` therefore
/// only holds for points off the grid lines.
#[inline]
pub fn contains(key: u32, lat: f64, lng: f64) -> bool {
    let (min_lat, min_lng) = parse(key);
    lat >= min_lat && lat < min_lat + GEOQUAD_STEP && lng >= min_lng && lng < min_lng + GEOQUAD_STEP
}

/// The rectangle covered by `key`.
#[inline]
pub fn rect(key: u32) -> GeoquadRect {
    let (lat, lng) = parse(key);
    GeoquadRect::from_south_west(lat, lng)
}
