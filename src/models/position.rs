use std::fmt;

use super::constants::UNITS_PER_LIGHT_YEAR;

/// A location in world space, measured in distance units.
/// (0,0) is the upper-left corner; x grows rightwards and y downwards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:.0}, {:.0})", self.x, self.y)
    }
}

/// Convert a distance in world units to light years.
pub fn to_light_years(units: f64) -> f64 {
    units / UNITS_PER_LIGHT_YEAR
}
