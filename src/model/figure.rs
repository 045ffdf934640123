// src/model/figure.rs

use crate::math::types::Point;
use serde::{Deserialize, Serialize};

/// Farbe mit Kanälen in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const RED: Rgb = Rgb::new(1.0, 0.0, 0.0);
    pub const GREEN: Rgb = Rgb::new(0.0, 1.0, 0.0);
    pub const BLUE: Rgb = Rgb::new(0.0, 0.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// CSS-Schreibweise, z.B. `#ff0000`.
    pub fn to_hex(&self) -> String {
        let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )
    }
}

/// Zeichenbare Form: Umriss relativ zu `position`, plus Farbe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub contour: Vec<Point>,
    pub position: Point,
    pub color: Rgb,
}

impl Figure {
    pub fn new(contour: Vec<Point>, position: Point, color: Rgb) -> Self {
        Self {
            contour,
            position,
            color,
        }
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Umriss in Weltkoordinaten (um `position` verschoben).
    pub fn world_contour(&self) -> Vec<Point> {
        self.contour
            .iter()
            .map(|p| p.offset(self.position))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_colors() {
        assert_eq!(Rgb::RED.to_hex(), "#ff0000");
        assert_eq!(Rgb::new(0.0, 0.5, 2.0).to_hex(), "#0080ff");
    }

    #[test]
    fn test_world_contour_applies_offset() {
        let mut figure = Figure::new(
            vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0)],
            Point::new(0.0, 0.0),
            Rgb::GREEN,
        );
        figure.set_position(Point::new(-0.5, 2.0));
        assert_eq!(
            figure.world_contour(),
            vec![
                Point::new(-0.5, 2.0),
                Point::new(0.5, 2.0),
                Point::new(-0.5, 3.0)
            ]
        );
    }
}
