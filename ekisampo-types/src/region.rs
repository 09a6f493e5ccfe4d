use geo::{Point, Polygon};

/// The kind of shape a user is drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionKind {
    Polygon,
    Circle,
}

/// A user-drawn query shape.
///
/// Circles keep their centre and radius so the front end can redraw them, but
/// they are never queried directly: they are materialized into a polygon
/// before any containment test runs.
///
/// # Examples
///
/// ```
/// use ekisampo_types::region::{Region, RegionKind};
/// use geo::Point;
///
/// let region = Region::circle(Point::new(139.7671, 35.6812), 500.0);
/// assert_eq!(region.kind(), RegionKind::Circle);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Region {
    /// Closed ring of (lng, lat) vertices
    Polygon(Polygon<f64>),
    Circle {
        center: Point<f64>,
        radius_m: f64,
    },
}

impl Region {
    pub fn polygon(polygon: Polygon<f64>) -> Self {
        Self::Polygon(polygon)
    }

    pub fn circle(center: Point<f64>, radius_m: f64) -> Self {
        Self::Circle { center, radius_m }
    }

    pub fn kind(&self) -> RegionKind {
        match self {
            Self::Polygon(_) => RegionKind::Polygon,
            Self::Circle { .. } => RegionKind::Circle,
        }
    }

    /// Centre of a circle region, `None` for polygons.
    pub fn center(&self) -> Option<Point<f64>> {
        match self {
            Self::Circle { center, .. } => Some(*center),
            Self::Polygon(_) => None,
        }
    }

    /// Radius in meters of a circle region, `None` for polygons.
    pub fn radius_m(&self) -> Option<f64> {
        match self {
            Self::Circle { radius_m, .. } => Some(*radius_m),
            Self::Polygon(_) => None,
        }
    }
}
