// src/math/utils.rs

/// Mathematische Konstanten
pub mod constants {
    /// Allgemeine Toleranz für f64-Vergleiche
    pub const EPSILON_F64: f64 = 1e-10;
    /// Toleranz für den Vertex-Schnelltest in `point_in_convex_polygon`
    pub const VERTEX_EPSILON: f64 = 1e-12;
}

/// Vergleichsfunktionen mit Toleranz
pub mod comparison {
    use super::constants::EPSILON_F64;

    /// Prüft ob zwei Floats (nahezu) gleich sind
    pub fn nearly_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON_F64
    }

    /// Prüft ob Float (nahezu) Null ist
    pub fn nearly_zero(a: f64) -> bool {
        a.abs() < EPSILON_F64
    }

    /// Wie `nearly_zero`, die Toleranz wächst mit `scale`
    pub fn nearly_zero_scaled(a: f64, scale: f64) -> bool {
        a.abs() < EPSILON_F64 * scale
    }
}
