// src/math/types/point.rs
use serde::{Deserialize, Serialize};
use spade::Point2;
use std::ops::Sub;

/// Ein Punkt in der Ebene.
///
/// `PartialEq` vergleicht exakt (bitweise Float-Gleichheit). Für
/// "gleicher Ort" mit Toleranz siehe [`Point::approx_eq`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// z-Komponente des Kreuzprodukts `self × other`, beide als Vektoren gelesen.
    pub fn cross(self, other: Point) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn distance_squared(self, other: Point) -> f64 {
        (self.x - other.x).powi(2) + (self.y - other.y).powi(2)
    }

    pub fn distance_to(self, other: Point) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Gleicher Ort bis auf `epsilon` (euklidischer Abstand).
    /// Mit `epsilon == 0.0` ist das exakte Gleichheit.
    pub fn approx_eq(self, other: Point, epsilon: f64) -> bool {
        if epsilon == 0.0 {
            return self == other;
        }
        self.distance_squared(other) <= epsilon * epsilon
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn offset(self, by: Point) -> Point {
        Point::new(self.x + by.x, self.y + by.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

// Conversion traits
impl From<Point2<f64>> for Point {
    fn from(p: Point2<f64>) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<Point> for Point2<f64> {
    fn from(p: Point) -> Self {
        Point2::new(p.x, p.y)
    }
}

impl From<geo::Coord<f64>> for Point {
    fn from(c: geo::Coord<f64>) -> Self {
        Self { x: c.x, y: c.y }
    }
}

impl From<Point> for geo::Coord<f64> {
    fn from(p: Point) -> Self {
        geo::Coord { x: p.x, y: p.y }
    }
}
