use std::f64::consts::FRAC_1_SQRT_2;

use crate::constants::{GEOQUAD_STEP, INVERSE_GEOQUAD_STEP, MILES_PER_LATITUDE_DEGREE};
use crate::direction::south_of;
use crate::error::{GeoquadError, Result};
use crate::grid::max_index;
use crate::morton::{deinterleave_full, interleave_full};
use crate::r#type::Axis;
use crate::util::axis_dist;

/// A configurable nearby query.
///
/// ```
/// use geoquad::NearbyQuery;
///
/// let key = geoquad::create(40.7128, -74.0060).unwrap();
/// let cells = NearbyQuery::new(key, 10.0)
///     .fuzz(true)
///     .max_cells(10_000)
///     .execute()
///     .unwrap();
/// assert!(!cells.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearbyQuery {
    center: u32,
    radius_miles: f64,
    fuzz: bool,
    max_cells: Option<usize>,
}

/// Inclusive latitude index interval of one column, north bound first.
#[derive(Debug, Clone, Copy)]
struct RowSpan {
    north: u16,
    south: u16,
}

impl RowSpan {
    fn len(&self) -> usize {
        (self.north - self.south) as usize + 1
    }
}

impl NearbyQuery {
    /// Query around the center of the cell `center`, without fuzz or a cell limit.
    pub fn new(center: u32, radius_miles: f64) -> Self {
        Self {
            center,
            radius_miles,
            fuzz: false,
            max_cells: None,
        }
    }

    /// Grow the radius by half a cell diagonal.
    pub fn fuzz(mut self, fuzz: bool) -> Self {
        self.fuzz = fuzz;
        self
    }

    /// Fail with [`GeoquadError::TooManyCells`] instead of scanning a candidate box larger than
    /// `limit` cells.
    pub fn max_cells(mut self, limit: usize) -> Self {
        self.max_cells = Some(limit);
        self
    }

    /// The effective search radius in degrees, fuzz included.
    pub fn radius_degrees(&self) -> f64 {
        let radius = self.radius_miles / MILES_PER_LATITUDE_DEGREE;
        if self.fuzz {
            radius + GEOQUAD_STEP * FRAC_1_SQRT_2
        } else {
            radius
        }
    }

    /// Run the query.
    pub fn execute(&self) -> Result<Vec<u32>> {
        if !(self.radius_miles > 0. && self.radius_miles.is_finite()) {
            log::debug!("Rejecting nearby query with radius {}", self.radius_miles);
            return Err(GeoquadError::InvalidRadius(self.radius_miles));
        }

        // Everything below is measured in cells rather than degrees
        let radius = self.radius_degrees() * INVERSE_GEOQUAD_STEP;
        let radius2 = radius * radius;
        let reach = radius.ceil() as u16;

        let (origin_lng, origin_lat) = deinterleave_full(self.center);
        // Stay on the grid, but never cut off the origin itself
        let lng_limit = max_index(Axis::Longitude).max(origin_lng);
        let lat_limit = max_index(Axis::Latitude).max(origin_lat);
        let west = origin_lng.saturating_sub(reach);
        let east = origin_lng.saturating_add(reach).min(lng_limit);
        let columns = (east - west) as usize + 1;

        if let Some(limit) = self.max_cells {
            let north = origin_lat.saturating_add(reach).min(lat_limit);
            let rows = (north - origin_lat.saturating_sub(reach)) as usize + 1;
            let requested = columns.checked_mul(rows).unwrap_or(usize::MAX);
            if requested > limit {
                log::debug!(
                    "Rejecting nearby query spanning {} cells, limit {}",
                    requested,
                    limit
                );
                return Err(GeoquadError::TooManyCells { requested, limit });
            }
        }

        log::debug!(
            "Nearby query around ({}, {}) scanning columns {}..={}",
            origin_lng,
            origin_lat,
            west,
            east
        );

        let mut spans: Vec<Option<RowSpan>> = Vec::new();
        spans.try_reserve_exact(columns)?;

        // Distances run from the origin's center to the nearest point of each candidate cell
        let origin_x = origin_lng as f64 + 0.5;
        let origin_y = origin_lat as f64 + 0.5;
        let row_dist = |row: u16| axis_dist(origin_y, row as f64, row as f64 + 1.);

        for column in west..=east {
            let dx = axis_dist(origin_x, column as f64, column as f64 + 1.);
            let dx2 = dx * dx;
            if dx2 > radius2 {
                spans.push(None);
                continue;
            }

            let mut north = origin_lat;
            while north < lat_limit {
                let dy = row_dist(north + 1);
                if dx2 + dy * dy > radius2 {
                    break;
                }
                north += 1;
            }

            let mut south = origin_lat;
            while south > 0 {
                let dy = row_dist(south - 1);
                if dx2 + dy * dy > radius2 {
                    break;
                }
                south -= 1;
            }

            log::trace!("Column {} covers rows {}..={}", column, south, north);
            spans.push(Some(RowSpan { north, south }));
        }

        let total = spans.iter().flatten().map(RowSpan::len).sum();
        let mut result = Vec::new();
        result.try_reserve_exact(total)?;

        for (column, span) in (west..=east).zip(spans) {
            let Some(span) = span else {
                continue;
            };
            let mut key = interleave_full(column, span.north);
            result.push(key);
            for _ in span.south..span.north {
                key = south_of(key);
                result.push(key);
            }
        }

        log::debug!("Nearby query found {} cells", result.len());
        Ok(result)
    }
}
