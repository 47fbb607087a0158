//! Quantization between degrees and per-axis cell indices.

use crate::constants::{
    GEOQUAD_STEP, INVERSE_GEOQUAD_STEP, LATITUDE_MAX, LATITUDE_MIN, LONGITUDE_MAX, LONGITUDE_MIN,
};
use crate::error::{GeoquadError, Result};
use crate::r#type::Axis;

/// Index of the cell holding [`LONGITUDE_MAX`](crate::LONGITUDE_MAX), the highest on the grid.
pub const LNG_MAX_INDEX: u16 = ((LONGITUDE_MAX - LONGITUDE_MIN) * INVERSE_GEOQUAD_STEP) as u16;

/// Index of the cell holding [`LATITUDE_MAX`](crate::LATITUDE_MAX), the highest on the grid.
pub const LAT_MAX_INDEX: u16 = ((LATITUDE_MAX - LATITUDE_MIN) * INVERSE_GEOQUAD_STEP) as u16;

/// Highest cell index [`validate`]d coordinates can produce on `axis`.
#[inline]
pub const fn max_index(axis: Axis) -> u16 {
    match axis {
        Axis::Longitude => LNG_MAX_INDEX,
        Axis::Latitude => LAT_MAX_INDEX,
    }
}

/// Convert a coordinate on `axis` to its cell index.
///
/// The input is expected to be validated. Values below the axis minimum saturate to zero.
#[inline]
pub fn to_index(axis: Axis, value: f64) -> u16 {
    ((value - axis.min()) * INVERSE_GEOQUAD_STEP) as u16
}

/// The low (south or west) edge of the cell at `index` on `axis`.
#[inline]
pub fn to_edge(axis: Axis, index: u16) -> f64 {
    index as f64 * GEOQUAD_STEP + axis.min()
}

/// Convert a longitude in degrees to its cell index.
#[inline]
pub fn lng_to_index(lng: f64) -> u16 {
    to_index(Axis::Longitude, lng)
}

/// Convert a latitude in degrees to its cell index.
#[inline]
pub fn lat_to_index(lat: f64) -> u16 {
    to_index(Axis::Latitude, lat)
}

/// The western edge of the longitude cell at `index`.
#[inline]
pub fn index_to_lng(index: u16) -> f64 {
    to_edge(Axis::Longitude, index)
}

/// The southern edge of the latitude cell at `index`.
#[inline]
pub fn index_to_lat(index: u16) -> f64 {
    to_edge(Axis::Latitude, index)
}

/// Check that a coordinate lies on the grid. Both bounds are inclusive; NaN and infinities are
/// rejected.
pub fn validate_axis(axis: Axis, value: f64) -> Result<()> {
    if (axis.min()..=axis.max()).contains(&value) {
        Ok(())
    } else {
        log::debug!("Rejecting {} {} outside the grid", axis, value);
        Err(GeoquadError::OutOfRange {
            axis,
            value,
            min: axis.min(),
            max: axis.max(),
        })
    }
}

/// Check a latitude/longitude pair, latitude first.
pub fn validate(lat: f64, lng: f64) -> Result<()> {
    validate_axis(Axis::Latitude, lat)?;
    validate_axis(Axis::Longitude, lng)
}
