// src/math/geometry/containment.rs

use super::{
    convex_polygon::ConvexPolygon,
    predicates::{point_in_convex_polygon_eps, segments_intersect},
};
use crate::math::{
    types::{Point, Triangle},
    utils::constants,
};

/// Prüft, ob das ganze Dreieck im konvexen CCW-Polygon liegt.
///
/// Erst müssen alle drei Ecken im Polygon liegen, danach darf keine
/// Dreieckskante eine Polygonkante echt schneiden. Der zweite Schritt fängt
/// Kanten, die bei nicht-konvexen Referenzen hinaus- und wieder hineinlaufen.
pub fn triangle_inside_polygon(triangle: &Triangle, polygon: &[Point]) -> bool {
    triangle_inside_polygon_eps(triangle, polygon, constants::VERTEX_EPSILON)
}

pub fn triangle_inside_polygon_eps(
    triangle: &Triangle,
    polygon: &[Point],
    vertex_epsilon: f64,
) -> bool {
    if !triangle
        .vertices()
        .iter()
        .all(|&vertex| point_in_convex_polygon_eps(vertex, polygon, vertex_epsilon))
    {
        return false;
    }

    let n = polygon.len();
    edges_clear(triangle, (0..n).map(|i| (polygon[i], polygon[(i + 1) % n])))
}

/// Keine Dreieckskante schneidet eine der Polygonkanten echt.
fn edges_clear(triangle: &Triangle, mut edges: impl Iterator<Item = (Point, Point)>) -> bool {
    edges.all(|(edge_start, edge_end)| {
        triangle
            .edges()
            .into_iter()
            .all(|(a, b)| !segments_intersect(a, b, edge_start, edge_end))
    })
}

impl ConvexPolygon {
    pub fn contains_triangle(&self, triangle: &Triangle) -> bool {
        triangle_inside_polygon(triangle, self.vertices())
    }

    pub fn contains_triangle_eps(&self, triangle: &Triangle, vertex_epsilon: f64) -> bool {
        triangle
            .vertices()
            .iter()
            .all(|&vertex| self.contains_point_eps(vertex, vertex_epsilon))
            && edges_clear(triangle, self.edges())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(size: f64) -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(size, 0.0),
            Point::new(size, size),
            Point::new(0.0, size),
        ]
    }

    #[test]
    fn test_interior_triangle_accepted() {
        let polygon = square(4.0);
        let triangle = Triangle::new(
            Point::new(1.0, 1.0),
            Point::new(3.0, 1.0),
            Point::new(2.0, 3.0),
        );
        assert!(triangle_inside_polygon(&triangle, &polygon));
    }

    #[test]
    fn test_vertex_outside_rejected() {
        let polygon = square(4.0);
        let triangle = Triangle::new(
            Point::new(1.0, 1.0),
            Point::new(5.0, 1.0),
            Point::new(2.0, 3.0),
        );
        assert!(!triangle_inside_polygon(&triangle, &polygon));
    }

    #[test]
    fn test_triangle_sharing_polygon_vertices_accepted() {
        let polygon = square(4.0);
        let triangle = Triangle::new(polygon[0], polygon[1], polygon[2]);
        assert!(triangle_inside_polygon(&triangle, &polygon));

        let touching = Triangle::new(
            Point::new(0.0, 2.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 2.0),
        );
        assert!(triangle_inside_polygon(&touching, &polygon));
    }

    #[test]
    fn test_piercing_edge_rejected() {
        // Nicht-konvexe Referenz mit Kerbe: alle Ecken des Dreiecks sind
        // Polygonecken (Schnelltest), aber die Kante (0,0)-(6,4) schneidet
        // die Kerbenkante (3,1)-(0,4).
        let notched = vec![
            Point::new(0.0, 0.0),
            Point::new(6.0, 0.0),
            Point::new(6.0, 4.0),
            Point::new(3.0, 1.0),
            Point::new(0.0, 4.0),
        ];
        let triangle = Triangle::new(notched[0], notched[1], notched[2]);
        assert!(
            triangle
                .vertices()
                .iter()
                .all(|&v| point_in_convex_polygon_eps(v, &notched, 0.0))
        );
        assert!(!triangle_inside_polygon(&triangle, &notched));
    }

    #[test]
    fn test_clockwise_reference_rejects_interior_triangle() {
        // Falsche Orientierung wird nicht erkannt: strikt innere Ecken
        // gelten als außen.
        let mut clockwise = square(4.0);
        clockwise.reverse();
        let interior = Triangle::new(
            Point::new(1.0, 1.0),
            Point::new(3.0, 1.0),
            Point::new(2.0, 3.0),
        );
        assert!(!triangle_inside_polygon(&interior, &clockwise));

        // Validiert wird umgedreht, dann liegt es wieder innen.
        let polygon = ConvexPolygon::new(clockwise).unwrap();
        assert!(polygon.contains_triangle(&interior));
    }

    #[test]
    fn test_convex_polygon_methods() {
        let polygon = ConvexPolygon::new(square(2.0)).unwrap();
        let inside = Triangle::new(
            Point::new(0.5, 0.5),
            Point::new(1.5, 0.5),
            Point::new(1.0, 1.5),
        );
        let outside = Triangle::new(
            Point::new(0.5, 0.5),
            Point::new(2.5, 0.5),
            Point::new(1.0, 1.5),
        );
        assert!(polygon.contains_triangle(&inside));
        assert!(!polygon.contains_triangle(&outside));
        assert!(polygon.contains_triangle_eps(&inside, 0.0));
    }
}
