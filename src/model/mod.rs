// src/model/mod.rs

pub mod figure;
pub mod letters;

pub use figure::{Figure, Rgb};
pub use letters::Letter;
