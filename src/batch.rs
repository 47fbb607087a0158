//! Encoding many coordinates at once.

#[cfg(feature = "rayon")]
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use crate::codec::create;
use crate::error::Result;

/// Encode a slice of `(lat, lng)` pairs.
///
/// Fails with the error of the lowest-indexed coordinate that is out of range. With the `rayon`
/// feature the work is spread over the global thread pool; the output is identical either way.
pub fn create_many(coords: &[(f64, f64)]) -> Result<Vec<u32>> {
    #[cfg(feature = "rayon")]
    {
        // collecting straight into a Result would surface whichever failure a worker hit first
        let keys: Vec<Result<u32>> = coords
            .par_iter()
            .map(|&(lat, lng)| create(lat, lng))
            .collect();
        keys.into_iter().collect()
    }

    #[cfg(not(feature = "rayon"))]
    {
        coords.iter().map(|&(lat, lng)| create(lat, lng)).collect()
    }
}
