// src/debug/visualization/mod.rs
pub mod svg;

pub use self::svg::FilterSvg;
