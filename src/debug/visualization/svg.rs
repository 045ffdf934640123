// src/debug/visualization/svg.rs
use crate::math::{
    algorithms::FilteredResult,
    types::{Point, Triangle},
};
use crate::model::Figure;
use std::path::Path;
use ::svg::node::element::{Circle, Group, Polygon, Rectangle};
use ::svg::Document;
use tracing::info;

// ===================================================================================
// 1. HILFS-STRUCT für die SVG-Erstellung
// ===================================================================================
/// Sammelt Referenzpolygon, Punktwolke, gefilterte Dreiecke und Figuren und
/// schreibt sie als SVG.
///
/// Die y-Achse wird gespiegelt, damit das Bild der mathematischen
/// Orientierung entspricht (CCW bleibt CCW).
#[derive(Debug, Clone)]
pub struct FilterSvg {
    boundary: Option<Vec<Point>>,
    points: Vec<Point>,
    triangles: Vec<Triangle>,
    figures: Vec<Figure>,
    pixel_size: f64,
}

impl Default for FilterSvg {
    fn default() -> Self {
        Self {
            boundary: None,
            points: Vec::new(),
            triangles: Vec::new(),
            figures: Vec::new(),
            pixel_size: 800.0,
        }
    }
}

impl FilterSvg {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_boundary(mut self, boundary: &[Point]) -> Self {
        self.boundary = Some(boundary.to_vec());
        self
    }

    pub fn with_points(mut self, points: &[Point]) -> Self {
        self.points.extend_from_slice(points);
        self
    }

    pub fn with_result(mut self, result: &FilteredResult) -> Self {
        self.triangles.extend(result.triangles());
        self
    }

    pub fn with_figures(mut self, figures: &[Figure]) -> Self {
        self.figures.extend_from_slice(figures);
        self
    }

    pub fn with_pixel_size(mut self, pixel_size: f64) -> Self {
        self.pixel_size = pixel_size.max(1.0);
        self
    }

    /// Baut das SVG-Dokument.
    pub fn to_document(&self) -> Document {
        let (min, max) = self.bounds();
        let width = (max.x - min.x).max(f64::EPSILON);
        let height = (max.y - min.y).max(f64::EPSILON);
        let margin = (width + height) / 2.0 * 0.05;
        let stroke_normal = (width + height) / 2.0 * 0.005;
        let stroke_thin = (width + height) / 2.0 * 0.002;
        let point_radius = (width + height) / 2.0 * 0.006;

        // Gespiegelt: y_svg = -y
        let view_min_x = min.x - margin;
        let view_min_y = -max.y - margin;
        let view_width = width + 2.0 * margin;
        let view_height = height + 2.0 * margin;

        let mut document = Document::new()
            .set("width", self.pixel_size)
            .set("height", self.pixel_size)
            .set(
                "viewBox",
                format!("{view_min_x} {view_min_y} {view_width} {view_height}"),
            )
            .add(
                Rectangle::new()
                    .set("x", view_min_x)
                    .set("y", view_min_y)
                    .set("width", view_width)
                    .set("height", view_height)
                    .set("fill", "#f0f0f0"),
            );

        let mut figures = Group::new().set("class", "figures");
        for figure in &self.figures {
            figures = figures.add(
                polygon(&figure.world_contour())
                    .set("fill", figure.color.to_hex())
                    .set("fill-opacity", 0.3)
                    .set("stroke", figure.color.to_hex())
                    .set("stroke-width", stroke_thin),
            );
        }
        document = document.add(figures);

        let mut triangles = Group::new().set("class", "accepted-triangles");
        for triangle in &self.triangles {
            triangles = triangles.add(
                polygon(&triangle.vertices())
                    .set("fill", "rgba(150, 255, 150, 0.5)")
                    .set("stroke", "#00aa00")
                    .set("stroke-width", stroke_thin),
            );
        }
        document = document.add(triangles);

        if let Some(boundary) = &self.boundary {
            document = document.add(
                polygon(boundary)
                    .set("class", "boundary")
                    .set("fill", "none")
                    .set("stroke", "#5500aa")
                    .set("stroke-width", stroke_normal),
            );
        }

        let mut points = Group::new().set("class", "points");
        for point in &self.points {
            points = points.add(
                Circle::new()
                    .set("cx", point.x)
                    .set("cy", -point.y)
                    .set("r", point_radius)
                    .set("fill", "#aaccff")
                    .set("stroke", "#0000cc")
                    .set("stroke-width", stroke_thin),
            );
        }
        document.add(points)
    }

    /// Speichert die SVG-Datei.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        let path = path.as_ref();
        ::svg::save(path, &self.to_document())?;
        info!(
            triangles = self.triangles.len(),
            "Debug SVG '{}' wurde erstellt.",
            path.display()
        );
        Ok(())
    }

    // ===================================================================================
    // Bounding Box über alle Ebenen
    // ===================================================================================
    fn bounds(&self) -> (Point, Point) {
        let boundary = self.boundary.iter().flatten().copied();
        let triangles = self.triangles.iter().flat_map(|t| t.vertices());
        let figures = self.figures.iter().flat_map(|f| f.world_contour());

        let mut min = Point::new(f64::MAX, f64::MAX);
        let mut max = Point::new(f64::MIN, f64::MIN);
        let mut has_points = false;
        for p in boundary
            .chain(self.points.iter().copied())
            .chain(triangles)
            .chain(figures)
            .filter(|p| p.is_finite())
        {
            min = Point::new(min.x.min(p.x), min.y.min(p.y));
            max = Point::new(max.x.max(p.x), max.y.max(p.y));
            has_points = true;
        }

        if has_points {
            (min, max)
        } else {
            (Point::new(0.0, 0.0), Point::new(1.0, 1.0))
        }
    }
}

fn polygon(vertices: &[Point]) -> Polygon {
    let points = vertices
        .iter()
        .map(|p| format!("{:.4},{:.4}", p.x, -p.y))
        .collect::<Vec<_>>()
        .join(" ");
    Polygon::new().set("points", points)
}
