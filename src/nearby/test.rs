use std::collections::HashSet;
use std::f64::consts::SQRT_2;

use crate::codec::{center, create};
use crate::constants::{GEOQUAD_STEP, MILES_PER_LATITUDE_DEGREE};
use crate::direction::neighbors;
use crate::distance::haversine_distance_miles;
use crate::error::GeoquadError;
use crate::morton::{deinterleave_full, interleave_full};
use crate::nearby::{nearby, NearbyQuery};

fn planar_distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt()
}

fn as_set(keys: &[u32]) -> HashSet<u32> {
    keys.iter().copied().collect()
}

#[test]
fn five_miles_around_the_origin() {
    let _ = env_logger::builder().is_test(true).try_init();

    let key = create(0.0, 0.0).unwrap();
    let cells = nearby(key, 5.0, false).unwrap();

    // 5 miles is ~1.46 cells: the origin and its eight neighbors
    let mut expected: HashSet<u32> = neighbors(key).iter().copied().collect();
    expected.insert(key);
    assert_eq!(as_set(&cells), expected);
    assert_eq!(cells.len(), 9);

    let reach = (5.0 / MILES_PER_LATITUDE_DEGREE / GEOQUAD_STEP).ceil() as usize;
    assert!(cells.len() <= (2 * reach + 1).pow(2));
}

#[test]
fn tiny_radius_is_just_the_cell() {
    let key = create(51.5074, -0.1278).unwrap();
    assert_eq!(nearby(key, 0.001, false).unwrap(), vec![key]);
}

#[test]
fn fuzz_reaches_corner_cells() {
    let key = create(0.0, 0.0).unwrap();
    // 1.55 cells: the axis neighbors two steps out are in, their diagonals only with fuzz
    let radius = 1.55 * GEOQUAD_STEP * MILES_PER_LATITUDE_DEGREE;
    let plain = as_set(&nearby(key, radius, false).unwrap());
    let fuzzed = as_set(&nearby(key, radius, true).unwrap());

    let (lng, lat) = deinterleave_full(key);
    let two_north = interleave_full(lng, lat + 2);
    let two_north_one_east = interleave_full(lng + 1, lat + 2);
    assert!(plain.contains(&two_north));
    assert!(!plain.contains(&two_north_one_east));
    assert!(fuzzed.contains(&two_north_one_east));
}

#[test]
fn fuzz_is_a_superset() {
    let key = create(40.7128, -74.0060).unwrap();
    for radius in [1.0, 3.3, 10.0, 27.5] {
        let plain = as_set(&nearby(key, radius, false).unwrap());
        let fuzzed = as_set(&nearby(key, radius, true).unwrap());
        assert!(plain.is_subset(&fuzzed), "radius {radius}");
    }
}

#[test]
fn no_duplicates() {
    let key = create(-33.8688, 151.2093).unwrap();
    let cells = nearby(key, 40.0, true).unwrap();
    assert_eq!(as_set(&cells).len(), cells.len());
}

#[test]
fn coverage_bounds() {
    let key = create(12.3456, 65.4321).unwrap();
    let radius_miles = 30.0;
    let r = radius_miles / MILES_PER_LATITUDE_DEGREE;
    let diagonal = GEOQUAD_STEP * SQRT_2;
    let origin = center(key);

    let cells = as_set(&nearby(key, radius_miles, false).unwrap());

    for cell in &cells {
        assert!(planar_distance(center(*cell), origin) <= r + diagonal);
    }

    // every cell comfortably inside the circle must be present
    let (lng, lat) = deinterleave_full(key);
    let reach = (r / GEOQUAD_STEP).ceil() as u16 + 1;
    for x in lng - reach..=lng + reach {
        for y in lat - reach..=lat + reach {
            let cell = interleave_full(x, y);
            if planar_distance(center(cell), origin) + diagonal / 2. <= r - diagonal {
                assert!(cells.contains(&cell), "missing cell ({x}, {y})");
            }
        }
    }
}

#[test]
fn close_to_haversine_near_the_equator() {
    let key = create(0.5, 10.5).unwrap();
    let radius_miles = 25.0;
    let (lat0, lng0) = center(key);
    for cell in nearby(key, radius_miles, false).unwrap() {
        let (lat, lng) = center(cell);
        let d = haversine_distance_miles(lat0, lng0, lat, lng);
        assert!(d <= radius_miles * 1.01 + 5.0, "{d} miles");
    }
}

#[test]
fn invalid_radius() {
    let key = create(0.0, 0.0).unwrap();
    for radius in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let err = nearby(key, radius, false).unwrap_err();
        assert!(matches!(err, GeoquadError::InvalidRadius(_)));
    }
}

#[test]
fn max_cells_is_checked_before_scanning() {
    let key = create(0.0, 0.0).unwrap();
    let err = NearbyQuery::new(key, 100.0).max_cells(10).execute().unwrap_err();
    assert!(matches!(
        err,
        GeoquadError::TooManyCells { limit: 10, requested } if requested > 10
    ));

    let cells = NearbyQuery::new(key, 5.0).max_cells(25).execute().unwrap();
    assert_eq!(cells.len(), 9);
}

#[test]
fn does_not_wrap_at_the_south_pole() {
    let key = create(-90.0, 0.0).unwrap();
    let cells = nearby(key, 10.0, false).unwrap();
    assert!(!cells.is_empty());
    for cell in cells {
        let (_, lat) = deinterleave_full(cell);
        assert!(lat <= 3, "row {lat} wrapped");
    }
}

#[test]
fn stays_on_the_grid_at_the_north_pole() {
    let key = create(90.0, 0.0).unwrap();
    let cells = nearby(key, 10.0, false).unwrap();
    assert!(cells.contains(&key));
    for cell in cells {
        let (_, lat) = deinterleave_full(cell);
        assert!((3597..=3600).contains(&lat), "row {lat} left the grid");
    }
}

#[test]
fn stays_on_the_grid_at_the_antimeridian() {
    let key = create(0.0, 180.0).unwrap();
    let cells = nearby(key, 10.0, false).unwrap();
    assert!(cells.contains(&key));
    for cell in cells {
        let (lng, _) = deinterleave_full(cell);
        assert!((7197..=7200).contains(&lng), "column {lng} left the grid");
    }
}

#[test]
fn off_grid_origin_is_kept() {
    let key = interleave_full(9000, 5000);
    assert_eq!(nearby(key, 0.001, false).unwrap(), vec![key]);
}

#[test]
fn radius_degrees() {
    let query = NearbyQuery::new(0, MILES_PER_LATITUDE_DEGREE);
    assert_eq!(query.radius_degrees(), 1.0);
    let fuzzed = query.fuzz(true).radius_degrees();
    assert!((fuzzed - (1.0 + GEOQUAD_STEP * SQRT_2 / 2.)).abs() < 1e-12);
}
