// src/math/geometry/predicates.rs

use crate::math::{types::Point, utils::constants};

/// Drehsinn dreier Punkte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

impl Orientation {
    /// Vertauscht Clockwise und CounterClockwise, Collinear bleibt.
    pub fn reversed(self) -> Self {
        match self {
            Orientation::Clockwise => Orientation::CounterClockwise,
            Orientation::CounterClockwise => Orientation::Clockwise,
            Orientation::Collinear => Orientation::Collinear,
        }
    }
}

/// Klassifiziert `p, q, r` über das Vorzeichen von `(q - p) × (r - q)`.
///
/// Exakt Null gilt als kollinear, es gibt keine Toleranz. Fast kollineare
/// Eingaben sind daher numerisch fragil.
pub fn orientation(p: Point, q: Point, r: Point) -> Orientation {
    let val = (q - p).cross(r - q);
    if val > 0.0 {
        Orientation::CounterClockwise
    } else if val < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Prüft, ob `point` im konvexen, gegen den Uhrzeigersinn orientierten
/// Polygon liegt. Randpunkte zählen als innen.
///
/// Die Konvexität und die Orientierung werden nicht geprüft; ein falsch
/// orientiertes Polygon liefert stillschweigend falsche Ergebnisse.
/// Für validierte Polygone siehe [`super::ConvexPolygon`].
pub fn point_in_convex_polygon(point: Point, polygon: &[Point]) -> bool {
    point_in_convex_polygon_eps(point, polygon, constants::VERTEX_EPSILON)
}

/// Wie [`point_in_convex_polygon`], aber mit expliziter Toleranz für den
/// Vertex-Schnelltest. `vertex_epsilon == 0.0` vergleicht exakt.
pub fn point_in_convex_polygon_eps(point: Point, polygon: &[Point], vertex_epsilon: f64) -> bool {
    if polygon.is_empty() {
        return false;
    }

    // Schnelltest: Punkt ist eine Ecke des Polygons
    if polygon
        .iter()
        .any(|&vertex| point.approx_eq(vertex, vertex_epsilon))
    {
        return true;
    }

    let n = polygon.len();
    (0..n).all(|i| {
        let start = polygon[i];
        let end = polygon[(i + 1) % n];
        (end - start).cross(point - start) >= 0.0
    })
}

/// Echter Schnitt zweier Strecken `a1-a2` und `b1-b2`.
///
/// Wahr genau dann, wenn die Endpunkte jeder Strecke strikt auf
/// verschiedenen Seiten der Geraden der anderen liegen. Gemeinsame Endpunkte,
/// Berührungen und kollineare Überlappungen werden nicht gemeldet.
///
/// Bewusst strenger als `o1 != o2 && o3 != o4`: dort zählt `Collinear` als
/// eigene Seite, eine T-Berührung oder ein gemeinsamer Endpunkt wäre dann ein
/// Schnitt und jedes Dreieck an einer Polygonecke würde verworfen.
pub fn segments_intersect(a1: Point, a2: Point, b1: Point, b2: Point) -> bool {
    let o1 = orientation(a1, a2, b1);
    let o2 = orientation(a1, a2, b2);
    let o3 = orientation(b1, b2, a1);
    let o4 = orientation(b1, b2, a2);

    straddles(o1, o2) && straddles(o3, o4)
}

fn straddles(first: Orientation, second: Orientation) -> bool {
    first != Orientation::Collinear && second != Orientation::Collinear && first != second
}
