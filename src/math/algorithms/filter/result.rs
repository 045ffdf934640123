// src/math/algorithms/filter/result.rs

use crate::math::types::{Point, Triangle};
use serde::Serialize;

/// Ecken aller akzeptierten Dreiecke, in Fundreihenfolge.
///
/// Jeweils drei aufeinanderfolgende Punkte bilden ein Dreieck. Punkte, die
/// zu mehreren Dreiecken gehören, kommen mehrfach vor.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilteredResult {
    points: Vec<Point>,
    candidates: usize,
}

impl FilteredResult {
    /// Leeres Ergebnis, z.B. nach einem Fehlschlag der Triangulation.
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(triangles: usize) -> Self {
        Self {
            points: Vec::with_capacity(triangles * 3),
            candidates: 0,
        }
    }

    pub(crate) fn record_candidate(&mut self) {
        self.candidates += 1;
    }

    pub(crate) fn push(&mut self, triangle: &Triangle) {
        self.points.extend(triangle.vertices());
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.points
            .chunks_exact(3)
            .map(|t| Triangle::new(t[0], t[1], t[2]))
    }

    pub fn triangle_count(&self) -> usize {
        self.points.len() / 3
    }

    /// Anzahl der Dreiecke, die die Triangulation geliefert hat.
    pub fn candidates(&self) -> usize {
        self.candidates
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
