#![doc = include_str!("../README.md")]

mod batch;
mod codec;
pub mod constants;
mod direction;
mod distance;
mod error;
mod geoquad;
pub mod grid;
pub mod morton;
pub mod nearby;
mod rect;
mod r#type;
mod util;

pub use batch::create_many;
pub use codec::{center, contains, create, create_coord, parse, rect};
pub use constants::{
    GEOQUAD_STEP, LATITUDE_MAX, LATITUDE_MIN, LONGITUDE_MAX, LONGITUDE_MIN,
    MILES_PER_LATITUDE_DEGREE,
};
pub use direction::{east_of, neighbors, north_of, south_of, west_of};
pub use distance::{haversine_distance_miles, HaversineDistance};
pub use error::{GeoquadError, Result};
pub use geoquad::Geoquad;
pub use nearby::{nearby, NearbyQuery};
pub use r#type::{Axis, Coord};
pub use rect::GeoquadRect;
