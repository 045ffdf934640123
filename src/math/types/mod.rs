// src/math/types/mod.rs
pub mod point;
pub mod triangle;

pub use point::*;
pub use triangle::*;

// Re-export häufig verwendete externe Typen
pub use spade::Point2;

pub type SpadePoint = Point2<f64>;
