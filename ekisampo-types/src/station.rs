use geo::Point;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Stable identifier of a station within a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(String);

impl StationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StationId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for StationId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for StationId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A train station.
///
/// Stations are created once when the dataset loads and are never mutated
/// afterwards; they are shared behind `Arc` by the index and the session.
///
/// # Examples
///
/// ```
/// use ekisampo_types::station::{Station, StationId};
/// use geo::Point;
///
/// let shinjuku = Station::new(
///     StationId::new("shinjuku"),
///     "Shinjuku",
///     vec!["Yamanote".to_string()],
///     "JR East",
///     Point::new(139.7006, 35.6896),
/// );
/// assert_eq!(shinjuku.coordinates(), (139.7006, 35.6896));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    /// Line names in the order the dataset lists them
    pub lines: Vec<String>,
    pub operator: String,
    /// x = longitude, y = latitude
    pub location: Point<f64>,
}

impl Station {
    pub fn new(
        id: StationId,
        name: impl Into<String>,
        lines: Vec<String>,
        operator: impl Into<String>,
        location: Point<f64>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            lines,
            operator: operator.into(),
            location,
        }
    }

    #[inline]
    pub fn lng(&self) -> f64 {
        self.location.x()
    }

    #[inline]
    pub fn lat(&self) -> f64 {
        self.location.y()
    }

    /// (longitude, latitude)
    pub fn coordinates(&self) -> (f64, f64) {
        (self.lng(), self.lat())
    }
}
