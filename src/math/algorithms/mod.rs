// src/math/algorithms/mod.rs

pub mod filter;
pub mod triangulation;

// Triangulation (externe Delaunay-Engine)
pub use self::triangulation::{SpadeEngine, TriangulationEngine};

// Filter gegen ein konvexes Referenzpolygon
pub use self::filter::{
    triangulate_and_filter, triangulate_and_filter_within, FilterConfig, FilteredResult,
    TriangulationFilter,
};
