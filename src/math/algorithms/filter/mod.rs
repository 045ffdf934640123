// src/math/algorithms/filter/mod.rs

pub mod config;
pub mod result;

pub use config::FilterConfig;
pub use result::FilteredResult;

use super::triangulation::{SpadeEngine, TriangulationEngine};
use crate::math::{
    error::{MathError, MathResult},
    geometry::{triangle_inside_polygon_eps, ConvexPolygon},
    types::{Point, Triangle},
};
use tracing::{debug, warn};

/// Trianguliert eine Punktmenge und behält nur die Dreiecke, die ganz in
/// einem konvexen Referenzpolygon liegen.
pub struct TriangulationFilter<E: TriangulationEngine = SpadeEngine> {
    engine: E,
    config: FilterConfig,
}

impl Default for TriangulationFilter<SpadeEngine> {
    fn default() -> Self {
        Self::new()
    }
}

impl TriangulationFilter<SpadeEngine> {
    pub fn new() -> Self {
        Self {
            engine: SpadeEngine,
            config: FilterConfig::default(),
        }
    }
}

impl<E: TriangulationEngine> TriangulationFilter<E> {
    pub fn with_engine(engine: E) -> Self {
        Self {
            engine,
            config: FilterConfig::default(),
        }
    }

    pub fn with_config(mut self, config: FilterConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Filtert gegen die Punktfolge selbst, gelesen als Polygon.
    ///
    /// Die Folge wird nicht validiert: nur wenn sie bereits ein konvexes
    /// CCW-Polygon ist, entspricht das Ergebnis der Hülle.
    pub fn try_filter(&self, points: &[Point]) -> MathResult<FilteredResult> {
        self.run(points, points)
    }

    /// Filtert `points` gegen ein separat übergebenes, validiertes Polygon.
    pub fn try_filter_within(
        &self,
        points: &[Point],
        boundary: &ConvexPolygon,
    ) -> MathResult<FilteredResult> {
        self.run(points, boundary.vertices())
    }

    /// Wie [`Self::try_filter`], ein Fehlschlag ergibt ein leeres Ergebnis.
    pub fn filter(&self, points: &[Point]) -> FilteredResult {
        self.try_filter(points).unwrap_or_else(|err| {
            warn!("Triangulation filter produced no result: {}", err);
            FilteredResult::empty()
        })
    }

    /// Wie [`Self::try_filter_within`], ein Fehlschlag ergibt ein leeres Ergebnis.
    pub fn filter_within(&self, points: &[Point], boundary: &ConvexPolygon) -> FilteredResult {
        self.try_filter_within(points, boundary).unwrap_or_else(|err| {
            warn!("Triangulation filter produced no result: {}", err);
            FilteredResult::empty()
        })
    }

    fn run(&self, points: &[Point], boundary: &[Point]) -> MathResult<FilteredResult> {
        self.config.validate()?;

        let indices = self.engine.triangulate(points)?;
        if indices.len() % 3 != 0 {
            return Err(MathError::TriangulationFailed {
                reason: format!(
                    "index list length {} is not a multiple of 3",
                    indices.len()
                ),
            });
        }

        let mut result = FilteredResult::with_capacity(indices.len() / 3);
        // Schrittweite 3: jede Gruppe ist genau ein Dreieck, ohne Überlappung
        for group in indices.chunks_exact(3) {
            let triangle = Triangle::new(
                lookup(points, group[0])?,
                lookup(points, group[1])?,
                lookup(points, group[2])?,
            );
            result.record_candidate();
            if triangle_inside_polygon_eps(&triangle, boundary, self.config.vertex_epsilon) {
                result.push(&triangle);
            }
        }

        debug!(
            candidates = result.candidates(),
            accepted = result.triangle_count(),
            boundary_vertices = boundary.len(),
            "filtered triangulation"
        );
        Ok(result)
    }
}

fn lookup(points: &[Point], index: usize) -> MathResult<Point> {
    points
        .get(index)
        .copied()
        .ok_or(MathError::IndexOutOfRange {
            index,
            len: points.len(),
        })
}

/// Trianguliert `points` (Delaunay) und filtert gegen dieselbe Punktfolge.
/// Leeres Ergebnis, wenn die Triangulation fehlschlägt.
pub fn triangulate_and_filter(points: &[Point]) -> FilteredResult {
    TriangulationFilter::new().filter(points)
}

/// Trianguliert `points` und filtert gegen `boundary`.
pub fn triangulate_and_filter_within(points: &[Point], boundary: &ConvexPolygon) -> FilteredResult {
    TriangulationFilter::new().filter_within(points, boundary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use std::collections::HashSet;
    use std::f64::consts::TAU;

    /// Liefert immer dieselbe Indexliste.
    struct FixedEngine(Vec<usize>);

    impl TriangulationEngine for FixedEngine {
        fn triangulate(&self, _points: &[Point]) -> MathResult<Vec<usize>> {
            Ok(self.0.clone())
        }
    }

    fn square(size: f64) -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(size, 0.0),
            Point::new(size, size),
            Point::new(0.0, size),
        ]
    }

    fn regular_polygon(n: usize, radius: f64) -> Vec<Point> {
        (0..n)
            .map(|k| {
                let angle = k as f64 * TAU / n as f64;
                Point::new(radius * angle.cos(), radius * angle.sin())
            })
            .collect()
    }

    fn grid(size: usize) -> Vec<Point> {
        let mut points = Vec::new();
        for y in 0..=size {
            for x in 0..=size {
                points.push(Point::new(x as f64, y as f64));
            }
        }
        points
    }

    #[test]
    fn test_square_keeps_both_triangles() {
        let result = triangulate_and_filter(&square(1.0));
        assert_eq!(result.points().len(), 6);
        assert_eq!(result.candidates(), 2);
        for point in result.points() {
            assert!(square(1.0).contains(point));
        }
    }

    #[test]
    fn test_convex_polygon_keeps_every_triangle() {
        for n in 4..10 {
            let polygon = regular_polygon(n, 2.0);
            let result = triangulate_and_filter(&polygon);
            assert_eq!(result.triangle_count(), n - 2, "n = {n}");
            assert_eq!(result.points().len() % 3, 0);
        }
    }

    #[test]
    fn test_grid_against_inner_square() {
        let cloud = grid(4);
        let boundary = ConvexPolygon::new(vec![
            Point::new(1.0, 1.0),
            Point::new(3.0, 1.0),
            Point::new(3.0, 3.0),
            Point::new(1.0, 3.0),
        ])
        .unwrap();

        let result = triangulate_and_filter_within(&cloud, &boundary);
        assert_eq!(result.candidates(), 32);
        assert_eq!(result.triangle_count(), 8);
        for point in result.points() {
            assert!((1.0..=3.0).contains(&point.x));
            assert!((1.0..=3.0).contains(&point.y));
        }
    }

    #[test]
    fn test_random_cloud_inside_hull_is_kept() {
        let mut rng = StdRng::seed_from_u64(7);
        let cloud: Vec<Point> = (0..60)
            .map(|_| Point::new(rng.random_range(-5.0..5.0), rng.random_range(-5.0..5.0)))
            .collect();
        let hull = ConvexPolygon::hull_of(&cloud).unwrap();

        let result = triangulate_and_filter_within(&cloud, &hull);
        assert!(!result.is_empty());
        assert_eq!(result.triangle_count(), result.candidates());
    }

    #[test]
    fn test_engine_failure_gives_empty_result() {
        assert!(triangulate_and_filter(&[]).is_empty());
        assert!(triangulate_and_filter(&[Point::new(0.0, 0.0), Point::new(1.0, 0.0)]).is_empty());

        let collinear = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
        ];
        assert!(triangulate_and_filter(&collinear).is_empty());

        let filter = TriangulationFilter::new();
        assert!(matches!(
            filter.try_filter(&collinear),
            Err(MathError::TriangulationFailed { .. })
        ));
    }

    #[test]
    fn test_stride_three_in_discovery_order() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 4.0),
            Point::new(0.0, 4.0),
            Point::new(9.0, 9.0),
        ];
        let boundary = ConvexPolygon::new(square(4.0)).unwrap();
        let filter = TriangulationFilter::with_engine(FixedEngine(vec![2, 3, 0, 1, 4, 2, 0, 1, 2]));

        let result = filter.try_filter_within(&points, &boundary).unwrap();
        assert_eq!(result.candidates(), 3);
        assert_eq!(
            result.points(),
            &[points[2], points[3], points[0], points[0], points[1], points[2]]
        );
    }

    #[test]
    fn test_malformed_engine_output() {
        let points = square(1.0);

        let incomplete = TriangulationFilter::with_engine(FixedEngine(vec![0, 1, 2, 3]));
        assert!(matches!(
            incomplete.try_filter(&points),
            Err(MathError::TriangulationFailed { .. })
        ));
        assert!(incomplete.filter(&points).is_empty());

        let out_of_range = TriangulationFilter::with_engine(FixedEngine(vec![0, 1, 7]));
        assert_eq!(
            out_of_range.try_filter(&points),
            Err(MathError::IndexOutOfRange { index: 7, len: 4 })
        );
    }

    #[test]
    fn test_invalid_config_gives_empty_result() {
        let filter =
            TriangulationFilter::new().with_config(FilterConfig::new().with_vertex_epsilon(-1.0));
        assert_eq!(filter.config().vertex_epsilon, -1.0);
        assert!(matches!(
            filter.try_filter(&square(1.0)),
            Err(MathError::InvalidConfiguration { .. })
        ));
        assert!(filter.filter(&square(1.0)).is_empty());
    }

    fn convex_polygon_strategy() -> impl Strategy<Value = Vec<Point>> {
        (3usize..12, 0.5f64..10.0)
            .prop_flat_map(|(n, radius)| {
                (
                    Just(n),
                    Just(radius),
                    prop::collection::vec(0.0f64..0.5, n),
                )
            })
            .prop_map(|(n, radius, jitter)| {
                let step = TAU / n as f64;
                jitter
                    .iter()
                    .enumerate()
                    .map(|(k, j)| {
                        let angle = (k as f64 + j) * step;
                        Point::new(radius * angle.cos(), radius * angle.sin())
                    })
                    .collect::<Vec<Point>>()
            })
    }

    proptest! {
        #[test]
        fn prop_output_is_non_overlapping_triples(
            polygon in convex_polygon_strategy(),
            interior in prop::collection::vec((-0.3f64..0.3, -0.3f64..0.3), 0..20),
        ) {
            let boundary = ConvexPolygon::new(polygon.clone()).unwrap();
            let mut cloud = polygon.clone();
            cloud.extend(interior.iter().map(|&(x, y)| Point::new(x, y)));

            let indices = SpadeEngine.triangulate(&cloud).unwrap();
            let engine_triangles: HashSet<[usize; 3]> = indices
                .chunks_exact(3)
                .map(|t| [t[0], t[1], t[2]])
                .collect();

            let result = triangulate_and_filter_within(&cloud, &boundary);
            prop_assert_eq!(result.points().len() % 3, 0);
            prop_assert!(result.triangle_count() <= engine_triangles.len());

            for triangle in result.triangles() {
                let found = engine_triangles.iter().any(|t| {
                    cloud[t[0]] == triangle.a && cloud[t[1]] == triangle.b && cloud[t[2]] == triangle.c
                });
                prop_assert!(found);
                for vertex in triangle.vertices() {
                    prop_assert!(boundary.contains_point(vertex));
                }
            }
        }

        #[test]
        fn prop_convex_outline_keeps_all_candidates(polygon in convex_polygon_strategy()) {
            let result = triangulate_and_filter(&polygon);
            prop_assert_eq!(result.triangle_count(), result.candidates());
            prop_assert_eq!(result.points().len(), 3 * result.candidates());
        }
    }
}
