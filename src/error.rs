use std::collections::TryReserveError;

use thiserror::Error;

use crate::r#type::Axis;

/// Enum with all errors in this crate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoquadError {
    /// A coordinate lies outside the domain of its axis.
    #[error("{axis} {value} is out of range, expected a value in [{min}, {max}]")]
    OutOfRange {
        /// The axis the offending value belongs to.
        axis: Axis,
        /// The rejected coordinate, in degrees.
        value: f64,
        /// Inclusive lower bound of the axis.
        min: f64,
        /// Inclusive upper bound of the axis.
        max: f64,
    },

    /// A nearby query was given a radius that is not a positive, finite number of miles.
    #[error("Radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    /// The buffers backing a nearby query could not be allocated.
    #[error("Failed to allocate nearby query buffers: {0}")]
    AllocationFailure(#[from] TryReserveError),

    /// A nearby query would scan more cells than the caller allowed.
    #[error("Nearby query spans {requested} candidate cells, limit is {limit}")]
    TooManyCells {
        /// Cells in the candidate bounding box of the query.
        requested: usize,
        /// The configured upper bound.
        limit: usize,
    },
}

pub type Result<T> = std::result::Result<T, GeoquadError>;
