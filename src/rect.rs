//! The rectangle covered by a geoquad.

use geo_traits::{
    Dimensions, GeometryTrait, GeometryType, RectTrait, UnimplementedGeometryCollection,
    UnimplementedLine, UnimplementedLineString, UnimplementedMultiLineString,
    UnimplementedMultiPoint, UnimplementedMultiPolygon, UnimplementedPoint, UnimplementedPolygon,
    UnimplementedTriangle,
};

use crate::constants::GEOQUAD_STEP;
use crate::r#type::Coord;

/// The area covered by one geoquad, `[min_lng, max_lng) × [min_lat, max_lat)`.
///
/// Implements [`RectTrait`] with `x` as longitude and `y` as latitude, so it can be handed to any
/// library that consumes `geo-traits` rectangles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoquadRect {
    min: Coord,
    max: Coord,
}

impl GeoquadRect {
    pub(crate) fn from_south_west(lat: f64, lng: f64) -> Self {
        Self {
            min: Coord { x: lng, y: lat },
            max: Coord {
                x: lng + GEOQUAD_STEP,
                y: lat + GEOQUAD_STEP,
            },
        }
    }

    /// Southern edge, inclusive.
    pub fn min_lat(&self) -> f64 {
        self.min.y
    }

    /// Western edge, inclusive.
    pub fn min_lng(&self) -> f64 {
        self.min.x
    }

    /// Northern edge, exclusive.
    pub fn max_lat(&self) -> f64 {
        self.max.y
    }

    /// Eastern edge, exclusive.
    pub fn max_lng(&self) -> f64 {
        self.max.x
    }
}

impl GeometryTrait for GeoquadRect {
    type T = f64;
    type PointType<'b>
        = UnimplementedPoint<f64>
    where
        Self: 'b;
    type LineStringType<'b>
        = UnimplementedLineString<f64>
    where
        Self: 'b;
    type PolygonType<'b>
        = UnimplementedPolygon<f64>
    where
        Self: 'b;
    type MultiPointType<'b>
        = UnimplementedMultiPoint<f64>
    where
        Self: 'b;
    type MultiLineStringType<'b>
        = UnimplementedMultiLineString<f64>
    where
        Self: 'b;
    type MultiPolygonType<'b>
        = UnimplementedMultiPolygon<f64>
    where
        Self: 'b;
    type GeometryCollectionType<'b>
        = UnimplementedGeometryCollection<f64>
    where
        Self: 'b;
    type RectType<'b>
        = GeoquadRect
    where
        Self: 'b;
    type TriangleType<'b>
        = UnimplementedTriangle<f64>
    where
        Self: 'b;
    type LineType<'b>
        = UnimplementedLine<f64>
    where
        Self: 'b;

    fn dim(&self) -> Dimensions {
        Dimensions::Xy
    }

    fn as_type(
        &self,
    ) -> GeometryType<
        '_,
        Self::PointType<'_>,
        Self::LineStringType<'_>,
        Self::PolygonType<'_>,
        Self::MultiPointType<'_>,
        Self::MultiLineStringType<'_>,
        Self::MultiPolygonType<'_>,
        Self::GeometryCollectionType<'_>,
        Self::RectType<'_>,
        Self::TriangleType<'_>,
        Self::LineType<'_>,
    > {
        GeometryType::Rect(self)
    }
}

impl RectTrait for GeoquadRect {
    type CoordType<'a>
        = Coord
    where
        Self: 'a;

    fn min(&self) -> Self::CoordType<'_> {
        self.min
    }

    fn max(&self) -> Self::CoordType<'_> {
        self.max
    }
}

#[cfg(feature = "use-geo_0_31")]
impl From<GeoquadRect> for geo_0_31::Rect<f64> {
    fn from(value: GeoquadRect) -> Self {
        geo_0_31::Rect::new(
            geo_0_31::Coord {
                x: value.min.x,
                y: value.min.y,
            },
            geo_0_31::Coord {
                x: value.max.x,
                y: value.max.y,
            },
        )
    }
}
