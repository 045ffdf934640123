// src/math/algorithms/triangulation.rs

use crate::math::{
    error::{MathError, MathResult},
    types::{Point, SpadePoint},
};
use spade::{DelaunayTriangulation, Triangulation};
use tracing::debug;

/// Externe Triangulation einer Punktmenge.
///
/// Liefert eine Indexliste in `[0, points.len())`, je drei aufeinanderfolgende
/// Indizes bilden ein Dreieck.
pub trait TriangulationEngine: Send + Sync {
    fn triangulate(&self, points: &[Point]) -> MathResult<Vec<usize>>;
}

/// Delaunay-Triangulation über `spade`.
///
/// Zustandslos, jede Anfrage baut eine eigene Triangulation auf.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpadeEngine;

impl TriangulationEngine for SpadeEngine {
    fn triangulate(&self, points: &[Point]) -> MathResult<Vec<usize>> {
        if points.len() < 3 {
            return Err(MathError::InsufficientPoints {
                expected: 3,
                actual: points.len(),
            });
        }

        let mut triangulation: DelaunayTriangulation<SpadePoint> = DelaunayTriangulation::new();
        // spade-Vertexindex -> erster Eingabeindex an dieser Position
        let mut input_index_of_vertex: Vec<usize> = Vec::with_capacity(points.len());

        for (input_index, &point) in points.iter().enumerate() {
            let handle = triangulation
                .insert(SpadePoint::from(point))
                .map_err(|err| MathError::TriangulationFailed {
                    reason: format!("point {input_index} rejected: {err:?}"),
                })?;
            // Doppelte Positionen liefern den bestehenden Handle zurück
            if handle.index() == input_index_of_vertex.len() {
                input_index_of_vertex.push(input_index);
            }
        }

        if triangulation.num_inner_faces() == 0 {
            return Err(MathError::TriangulationFailed {
                reason: format!(
                    "no triangles from {} distinct points (collinear input?)",
                    input_index_of_vertex.len()
                ),
            });
        }

        let mut indices = Vec::with_capacity(triangulation.num_inner_faces() * 3);
        for face in triangulation.inner_faces() {
            for vertex in face.vertices() {
                let spade_index = vertex.fix().index();
                let input_index = *input_index_of_vertex.get(spade_index).ok_or(
                    MathError::IndexOutOfRange {
                        index: spade_index,
                        len: input_index_of_vertex.len(),
                    },
                )?;
                indices.push(input_index);
            }
        }

        debug!(
            points = points.len(),
            distinct = input_index_of_vertex.len(),
            triangles = indices.len() / 3,
            "delaunay triangulation"
        );
        Ok(indices)
    }
}
