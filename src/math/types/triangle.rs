// src/math/types/triangle.rs

use super::Point;
use serde::{Deserialize, Serialize};

/// Repräsentiert ein einzelnes Dreieck, definiert durch drei 2D-Punkte.
/// Für Enthaltensein-Tests ist die Reihenfolge der Ecken egal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

impl Triangle {
    pub fn new(p_a: Point, p_b: Point, p_c: Point) -> Self {
        Self {
            a: p_a,
            b: p_b,
            c: p_c,
        }
    }

    pub fn vertices(&self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }

    /// Die drei Kanten (a,b), (b,c), (c,a).
    pub fn edges(&self) -> [(Point, Point); 3] {
        [(self.a, self.b), (self.b, self.c), (self.c, self.a)]
    }

    /// Berechnet die (vorzeichenbehaftete) doppelte Fläche des Dreiecks.
    /// Positiv für CCW.
    pub fn signed_area_doubled(&self) -> f64 {
        (self.b - self.a).cross(self.c - self.a)
    }

    pub fn area(&self) -> f64 {
        0.5 * self.signed_area_doubled().abs()
    }
}

impl From<[Point; 3]> for Triangle {
    fn from([a, b, c]: [Point; 3]) -> Self {
        Self::new(a, b, c)
    }
}
