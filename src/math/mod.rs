pub mod algorithms;
pub mod error;
pub mod geometry;
pub mod types;
pub mod utils;

// Re-exports für einfache Verwendung
pub use error::{MathError, MathResult};
pub use types::*;

// Öffentliche API
pub mod prelude {
    pub use super::{
        algorithms::{
            triangulate_and_filter, triangulate_and_filter_within, FilterConfig, FilteredResult,
            SpadeEngine, TriangulationEngine, TriangulationFilter,
        },
        error::{MathError, MathResult},
        geometry::*,
        types::{Point, Triangle},
    };
}
