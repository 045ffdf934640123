// src/math/geometry/convex_polygon.rs

use super::predicates::{orientation, point_in_convex_polygon_eps, Orientation};
use crate::math::{
    error::{MathError, MathResult},
    types::Point,
    utils::{comparison, constants},
};
use geo::{ConvexHull, MultiPoint};
use std::f64::consts::TAU;
use std::fmt;

/// Validiertes konvexes Polygon, immer gegen den Uhrzeigersinn orientiert.
///
/// Der letzte Punkt ist implizit mit dem ersten verbunden. Kollineare
/// Zwischenpunkte auf einer Kante sind erlaubt.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvexPolygon {
    vertices: Vec<Point>,
}

impl ConvexPolygon {
    /// Erstellt ein Polygon mit Validierung.
    ///
    /// Im Uhrzeigersinn gegebene Punkte werden umgedreht. Eine explizite
    /// Schließung (letzter Punkt == erster) wird entfernt. Abgelehnt werden
    /// weniger als 3 Punkte, nicht-endliche Koordinaten, doppelte
    /// aufeinanderfolgende Punkte, Fläche Null und nicht-konvexe oder
    /// sich selbst umschlingende Punktfolgen.
    pub fn new(mut vertices: Vec<Point>) -> MathResult<Self> {
        if vertices.len() > 3 && vertices.first() == vertices.last() {
            vertices.pop();
        }

        if vertices.len() < 3 {
            return Err(MathError::InsufficientPoints {
                expected: 3,
                actual: vertices.len(),
            });
        }

        if let Some(index) = vertices.iter().position(|p| !p.is_finite()) {
            return Err(MathError::InvalidPolygon {
                reason: format!("vertex {index} has a non-finite coordinate"),
            });
        }

        let n = vertices.len();
        if let Some(index) = (0..n).find(|&i| vertices[i] == vertices[(i + 1) % n]) {
            return Err(MathError::InvalidPolygon {
                reason: format!("vertex {index} is repeated"),
            });
        }

        // Relativ zur Ausdehnung, damit kleine Polygone nicht als entartet gelten
        let (min, max) = extent(&vertices);
        let scale = (max.x - min.x).max(max.y - min.y);
        let doubled_area = signed_area_doubled(&vertices);
        if comparison::nearly_zero_scaled(doubled_area, scale * scale) {
            return Err(MathError::InvalidPolygon {
                reason: "polygon has zero area".to_string(),
            });
        }
        if doubled_area < 0.0 {
            vertices.reverse();
        }

        // Jeder Knick muss nach links (oder geradeaus) gehen
        for i in 0..n {
            let turn = orientation(vertices[i], vertices[(i + 1) % n], vertices[(i + 2) % n]);
            if turn == Orientation::Clockwise {
                return Err(MathError::InvalidPolygon {
                    reason: format!("polygon is not convex at vertex {}", (i + 1) % n),
                });
            }
        }

        // Pentagramm & Co.: nur Linksknicke, aber mehr als eine Umdrehung
        let total_turn: f64 = (0..n)
            .map(|i| {
                let incoming = vertices[(i + 1) % n] - vertices[i];
                let outgoing = vertices[(i + 2) % n] - vertices[(i + 1) % n];
                let dot = incoming.x * outgoing.x + incoming.y * outgoing.y;
                incoming.cross(outgoing).atan2(dot)
            })
            .sum();
        if (total_turn - TAU).abs() > 1e-6 {
            return Err(MathError::InvalidPolygon {
                reason: "polygon winds around more than once".to_string(),
            });
        }

        Ok(Self { vertices })
    }

    /// Konvexe Hülle einer beliebigen Punktwolke (über `geo`).
    pub fn hull_of(points: &[Point]) -> MathResult<Self> {
        if points.len() < 3 {
            return Err(MathError::InsufficientPoints {
                expected: 3,
                actual: points.len(),
            });
        }
        if points.iter().any(|p| !p.is_finite()) {
            return Err(MathError::InvalidPolygon {
                reason: "point cloud contains non-finite coordinates".to_string(),
            });
        }

        let cloud: MultiPoint<f64> = points
            .iter()
            .map(|p| geo::Point::new(p.x, p.y))
            .collect();
        let hull = cloud.convex_hull();
        let vertices = hull.exterior().coords().map(|&c| Point::from(c)).collect();
        Self::new(vertices)
    }

    /// Zugriff auf Vertices (CCW, ohne Schließungspunkt)
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Anzahl der Vertices
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Ein validiertes Polygon ist nie leer, der Vollständigkeit halber.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Kanten in Umlaufrichtung, die letzte schließt zum ersten Punkt.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Fläche (Shoelace-Formel)
    pub fn area(&self) -> f64 {
        0.5 * signed_area_doubled(&self.vertices).abs()
    }

    pub fn contains_point(&self, point: Point) -> bool {
        self.contains_point_eps(point, constants::VERTEX_EPSILON)
    }

    pub fn contains_point_eps(&self, point: Point, vertex_epsilon: f64) -> bool {
        point_in_convex_polygon_eps(point, &self.vertices, vertex_epsilon)
    }
}

impl fmt::Display for ConvexPolygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ConvexPolygon({} vertices, area {:.3})", self.len(), self.area())
    }
}

fn extent(vertices: &[Point]) -> (Point, Point) {
    vertices.iter().fold(
        (
            Point::new(f64::INFINITY, f64::INFINITY),
            Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        ),
        |(min, max), p| {
            (
                Point::new(min.x.min(p.x), min.y.min(p.y)),
                Point::new(max.x.max(p.x), max.y.max(p.y)),
            )
        },
    )
}

fn signed_area_doubled(vertices: &[Point]) -> f64 {
    let n = vertices.len();
    (0..n)
        .map(|i| vertices[i].cross(vertices[(i + 1) % n]))
        .sum()
}
