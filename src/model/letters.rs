// src/model/letters.rs

use super::figure::{Figure, Rgb};
use crate::math::{
    error::{MathError, MathResult},
    types::Point,
};
use std::fmt;
use std::str::FromStr;

/// Buchstaben mit vordefiniertem Umriss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Letter {
    M,
    V,
    G,
}

// Außenkontur, danach Innenkontur (die Aussparung im Buchstaben)
const LETTER_M: [(f64, f64); 10] = [
    (-0.15, -0.15),
    (-0.15, 0.15),
    (0.0, 0.10),
    (0.15, 0.15),
    (0.15, -0.15),
    (0.1, -0.15),
    (0.1, 0.1),
    (0.0, 0.05),
    (-0.1, 0.1),
    (-0.1, -0.15),
];

const LETTER_V: [(f64, f64); 6] = [
    (-0.15, -0.15),
    (0.0, 0.15),
    (0.15, -0.15),
    (-0.1, -0.1),
    (0.0, 0.1),
    (0.1, -0.1),
];

const LETTER_G: [(f64, f64); 9] = [
    (0.15, 0.15),
    (-0.15, 0.15),
    (-0.15, -0.15),
    (0.15, -0.15),
    (0.15, 0.05),
    (0.1, 0.1),
    (-0.1, 0.1),
    (-0.1, -0.1),
    (0.1, -0.1),
];

impl Letter {
    pub const ALL: [Letter; 3] = [Letter::M, Letter::V, Letter::G];

    /// Umriss um den Ursprung, so wie er auch an die Triangulation geht.
    pub fn contour(self) -> Vec<Point> {
        let raw: &[(f64, f64)] = match self {
            Letter::M => &LETTER_M,
            Letter::V => &LETTER_V,
            Letter::G => &LETTER_G,
        };
        raw.iter().copied().map(Point::from).collect()
    }

    pub fn figure(self, position: Point, color: Rgb) -> Figure {
        Figure::new(self.contour(), position, color)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Letter::M => "M",
            Letter::V => "V",
            Letter::G => "G",
        };
        f.write_str(name)
    }
}

impl FromStr for Letter {
    type Err = MathError;

    fn from_str(s: &str) -> MathResult<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "M" => Ok(Letter::M),
            "V" => Ok(Letter::V),
            "G" => Ok(Letter::G),
            other => Err(MathError::InvalidConfiguration {
                message: format!("unknown letter '{other}', expected one of M, V, G"),
            }),
        }
    }
}
