// ./src/main.rs
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

use trifilter::debug::visualization::FilterSvg;
use trifilter::math::prelude::*;
use trifilter::model::{Letter, Rgb};

#[derive(Parser)]
#[command(name = "trifilter")]
#[command(about = "Delaunay-triangulate a point set and keep the triangles inside a convex boundary")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Filter a JSON point list (`[{"x": .., "y": ..}, ..]`)
    Filter {
        #[arg(long)]
        input: PathBuf,
        /// Separate convex boundary polygon (JSON point list)
        #[arg(long, conflicts_with = "hull")]
        boundary: Option<PathBuf>,
        /// Filter against the convex hull of the input
        #[arg(long)]
        hull: bool,
        /// FilterConfig as JSON
        #[arg(long)]
        config: Option<PathBuf>,
        /// Overrides `vertex_epsilon` from the config
        #[arg(long)]
        epsilon: Option<f64>,
        #[arg(long)]
        svg: Option<PathBuf>,
    },
    /// Run the filter on a built-in letter outline
    Letter {
        #[arg(long)]
        letter: Letter,
        #[arg(long)]
        svg: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cmd = Cmd::parse();
    match cmd.action {
        Action::Filter {
            input,
            boundary,
            hull,
            config,
            epsilon,
            svg,
        } => filter(&input, boundary.as_deref(), hull, config.as_deref(), epsilon, svg.as_deref()),
        Action::Letter { letter, svg } => letter_outline(letter, svg.as_deref()),
    }
}

fn read_points(path: &Path) -> Result<Vec<Point>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing points from {}", path.display()))
}

fn load_config(path: Option<&Path>, epsilon: Option<f64>) -> Result<FilterConfig> {
    let mut config = match path {
        Some(path) => {
            let text =
                fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing config from {}", path.display()))?
        }
        None => FilterConfig::default(),
    };
    if let Some(epsilon) = epsilon {
        config = config.with_vertex_epsilon(epsilon);
    }
    config.validate()?;
    Ok(config)
}

fn filter(
    input: &Path,
    boundary: Option<&Path>,
    hull: bool,
    config: Option<&Path>,
    epsilon: Option<f64>,
    svg: Option<&Path>,
) -> Result<()> {
    let points = read_points(input)?;
    let config = load_config(config, epsilon)?;
    tracing::info!(input = %input.display(), points = points.len(), "filter");

    let filter = TriangulationFilter::new().with_config(config);
    tracing::debug!(vertex_epsilon = filter.config().vertex_epsilon, "config");
    let (result, outline) = if let Some(path) = boundary {
        let polygon = ConvexPolygon::new(read_points(path)?)
            .with_context(|| format!("boundary {}", path.display()))?;
        tracing::info!(%polygon, "boundary");
        (filter.filter_within(&points, &polygon), polygon.vertices().to_vec())
    } else if hull {
        let polygon = ConvexPolygon::hull_of(&points).context("convex hull of input")?;
        tracing::info!(%polygon, "hull");
        (filter.filter_within(&points, &polygon), polygon.vertices().to_vec())
    } else {
        (filter.filter(&points), points.clone())
    };

    tracing::info!(
        candidates = result.candidates(),
        accepted = result.triangle_count(),
        "done"
    );

    let triangles: Vec<[Point; 3]> = result.triangles().map(|t| t.vertices()).collect();
    println!("{}", serde_json::to_string_pretty(&triangles)?);

    if let Some(path) = svg {
        FilterSvg::new()
            .with_boundary(&outline)
            .with_points(&points)
            .with_result(&result)
            .save(path)
            .map_err(|err| anyhow::anyhow!("writing {}: {err}", path.display()))?;
    }
    Ok(())
}

fn letter_outline(letter: Letter, svg: Option<&Path>) -> Result<()> {
    let contour = letter.contour();
    let result = triangulate_and_filter(&contour);
    tracing::info!(
        %letter,
        candidates = result.candidates(),
        accepted = result.triangle_count(),
        "letter"
    );
    println!("{letter}: {} of {} triangles kept", result.triangle_count(), result.candidates());

    if let Some(path) = svg {
        let color = match letter {
            Letter::M => Rgb::RED,
            Letter::V => Rgb::GREEN,
            Letter::G => Rgb::BLUE,
        };
        FilterSvg::new()
            .with_figures(&[letter.figure(Point::new(0.0, 0.0), color)])
            .with_points(&contour)
            .with_result(&result)
            .save(path)
            .map_err(|err| anyhow::anyhow!("writing {}: {err}", path.display()))?;
    }
    Ok(())
}
