//! Enumerate the geoquads within a radius of a cell.
//!
//! Distances are planar: the radius in miles is converted to degrees with
//! [`MILES_PER_LATITUDE_DEGREE`](crate::MILES_PER_LATITUDE_DEGREE), and a degree of longitude is
//! treated as the same length as a degree of latitude. This is cheap and accurate enough away from
//! the poles and for radii that are small compared to the Earth, but it is not a great-circle
//! search. Use [`haversine_distance_miles`](crate::haversine_distance_miles) to check results
//! exactly.

mod query;

pub use query::NearbyQuery;

use crate::error::Result;

/// All geoquads whose cell intersects the disc of `radius_miles` around the center of `key`.
///
/// With `fuzz`, the radius is grown by half a cell diagonal so cells touching the circle only at
/// a corner are kept. The result is unordered and contains no duplicates.
///
/// ```
/// let key = geoquad::create(0.0, 0.0).unwrap();
/// let cells = geoquad::nearby(key, 5.0, false).unwrap();
/// assert!(cells.contains(&key));
/// ```
pub fn nearby(key: u32, radius_miles: f64, fuzz: bool) -> Result<Vec<u32>> {
    NearbyQuery::new(key, radius_miles).fuzz(fuzz).execute()
}

#[cfg(test)]
mod test;
