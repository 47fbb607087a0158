//! Great-circle distance between coordinates.
//!
//! Nearby queries never call into this module; it is the exact reference their planar
//! approximation is checked against.

use num_traits::Float;

use crate::constants::EARTH_RADIUS_MILES;

/// Haversine distance metric.
///
/// This calculates the great-circle distance between two points on a sphere. Inputs are in
/// degrees, the output is in the unit of `earth_radius`.
#[derive(Debug, Clone, Copy)]
pub struct HaversineDistance {
    /// Earth's radius, in the unit distances are reported in
    pub earth_radius: f64,
}

impl Default for HaversineDistance {
    fn default() -> Self {
        Self {
            earth_radius: EARTH_RADIUS_MILES,
        }
    }
}

impl HaversineDistance {
    /// Create a new Haversine distance metric with custom Earth radius.
    pub fn with_radius(earth_radius: f64) -> Self {
        Self { earth_radius }
    }

    /// Distance between `(lat1, lng1)` and `(lat2, lng2)`.
    ///
    /// Generic so that `f32` callers do not have to widen their coordinates.
    pub fn distance<F: Float>(&self, lat1: F, lng1: F, lat2: F, lng2: F) -> F {
        let two = F::one() + F::one();
        let lat1 = lat1.to_radians();
        let lat2 = lat2.to_radians();
        let d_lat = lat2 - lat1;
        let d_lng = (lng2 - lng1).to_radians();

        let sin_lat = (d_lat / two).sin();
        let sin_lng = (d_lng / two).sin();
        let a = sin_lat * sin_lat + lat1.cos() * lat2.cos() * sin_lng * sin_lng;

        // round-off can push the argument just above one for coincident points
        let c = two * a.sqrt().min(F::one()).asin();
        F::from(self.earth_radius).unwrap_or(F::nan()) * c
    }
}

/// Great-circle distance in miles between two coordinates given in degrees.
pub fn haversine_distance_miles(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    HaversineDistance::default().distance(lat1, lng1, lat2, lng2)
}
