// src/math/geometry/mod.rs

pub mod containment;
pub mod convex_polygon;
pub mod predicates;

pub use self::containment::{triangle_inside_polygon, triangle_inside_polygon_eps};
pub use self::convex_polygon::ConvexPolygon;
pub use self::predicates::{
    orientation, point_in_convex_polygon, point_in_convex_polygon_eps, segments_intersect,
    Orientation,
};
