//! Published constants describing the geoquad grid.

/// Western edge of the longitude axis, in degrees.
pub const LONGITUDE_MIN: f64 = -180.0;

/// Eastern edge of the longitude axis, in degrees.
pub const LONGITUDE_MAX: f64 = 180.0;

/// Southern edge of the latitude axis, in degrees.
pub const LATITUDE_MIN: f64 = -90.0;

/// Northern edge of the latitude axis, in degrees.
pub const LATITUDE_MAX: f64 = 90.0;

/// Side length of one geoquad cell, in degrees, on both axes.
pub const GEOQUAD_STEP: f64 = 0.05;

/// Reciprocal of [`GEOQUAD_STEP`].
///
/// Quantization multiplies by this value instead of dividing by the step. The two are not
/// guaranteed to agree bit-for-bit at cell boundaries, and every key in circulation was produced
/// by the multiplication.
pub const INVERSE_GEOQUAD_STEP: f64 = 1.0 / GEOQUAD_STEP;

/// Miles spanned by one degree of latitude. Nearby queries also use it for longitude.
pub const MILES_PER_LATITUDE_DEGREE: f64 = 68.70795454545454;

/// Mean Earth radius in miles, used by the haversine distance.
pub const EARTH_RADIUS_MILES: f64 = 3958.8641024047724;
