// ./src/lib.rs

// Eigene Module deklarieren
pub mod debug;
pub mod math;
pub mod model;

pub use math::prelude;
