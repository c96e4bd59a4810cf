//! point-sketch - sample a demo scene into point clouds
//!
//! Builds one of every shape from the saved settings, generates their
//! points and writes them as JSON to the file named on the command line
//! (or stdout). `--epsilon` overrides the density of every shape and
//! `--save-settings` persists the settings that were used.
//!
//! Set `RUST_LOG=debug` to see per-shape point counts.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use nalgebra::{Point3, Vector3};
use serde::Serialize;
use thiserror::Error;

use point_sketch::color::Color;
use point_sketch::settings::ShapeSettings;
use point_sketch::shapes::{
    Arrow, BoxedShape, Circle, Cross, CurvedLine, Dot, PartialCircle, Polygon, PolygonConfig,
    Shape, ShapeError, Square,
};

#[derive(Parser, Debug)]
#[command(version, about = "Sample a demo scene into point clouds", long_about = None)]
struct Args {
    /// File to write the JSON to (stdout if omitted)
    output: Option<PathBuf>,

    /// Target spacing between points, applied to every shape
    #[arg(short, long)]
    epsilon: Option<f32>,

    /// Write the settings used for this run back to the config directory
    #[arg(long)]
    save_settings: bool,
}

/// Errors that can stop the demo
#[derive(Error, Debug)]
enum DemoError {
    #[error("Failed to build shape: {0}")]
    Shape(#[from] ShapeError),

    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

/// One shape's cloud as written to the output
#[derive(Serialize)]
struct CloudDump<'a> {
    name: &'a str,
    positions: Vec<[f32; 3]>,
    colors: Vec<[f32; 3]>,
}

impl<'a> CloudDump<'a> {
    fn new(shape: &'a dyn Shape) -> Self {
        Self {
            name: shape.name(),
            positions: shape.points().iter().map(|p| [p.x, p.y, p.z]).collect(),
            colors: shape.colors().iter().map(|c| c.to_array()).collect(),
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Starting point-sketch");

    let args = Args::parse();
    if let Err(e) = run(&args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), DemoError> {
    let mut settings = ShapeSettings::load();
    if let Some(epsilon) = args.epsilon {
        settings.set_epsilon(epsilon);
    }
    if args.save_settings {
        settings.save();
    }
    let shapes = build_scene(&settings)?;

    let total: usize = shapes.iter().map(|s| s.point_count()).sum();
    log::info!("Generated {} shapes ({} points)", shapes.len(), total);

    let dump: Vec<CloudDump> = shapes.iter().map(|s| CloudDump::new(s.as_ref())).collect();
    let out: Box<dyn Write> = match &args.output {
        Some(path) => {
            log::info!("Writing {}", path.display());
            Box::new(File::create(path)?)
        }
        None => Box::new(io::stdout()),
    };
    let mut out = BufWriter::new(out);
    serde_json::to_writer(&mut out, &dump)?;
    out.flush()?;
    Ok(())
}

/// A circle and a square joined by an arrow and a curve, plus one of
/// every other shape type
fn build_scene(settings: &ShapeSettings) -> Result<Vec<BoxedShape>, DemoError> {
    let mut circle = Circle::new(&settings.circle);
    circle.generate_points()?;
    circle.shift(&Vector3::new(-3.0, 0.0, 0.0));

    let mut square = Square::new(&settings.square);
    square.generate_points()?;
    square.shift(&Vector3::new(3.0, 0.0, 0.0));

    // Anchors are resolved now; the shapes are free to move afterwards
    let arrow = Arrow::new(&circle, &square, &settings.arrow);
    let curve = CurvedLine::new(&square, &circle, None, &settings.curved_line);

    let triangle = Polygon::new(
        vec![
            Point3::new(-1.0, -2.0, 0.0),
            Point3::new(1.0, -2.0, 0.0),
            Point3::new(0.0, -0.5, 0.0),
        ],
        &PolygonConfig {
            edge_colors: settings
                .polygon
                .edge_colors
                .clone()
                .or_else(|| Some(vec![Color::RED, Color::GREEN, Color::BLUE])),
            ..settings.polygon.clone()
        },
    )?;

    let mut rest: Vec<BoxedShape> = vec![
        Box::new(arrow),
        Box::new(curve),
        Box::new(triangle),
        Box::new(PartialCircle::new(std::f32::consts::PI, &settings.partial_circle)),
        Box::new(Dot::new(Point3::new(0.0, 2.0, 0.0), &settings.dot)),
        Box::new(Cross::new(Point3::new(0.0, -3.0, 0.0), &settings.cross)),
    ];
    for shape in rest.iter_mut() {
        shape.generate_points()?;
    }

    let mut shapes: Vec<BoxedShape> = vec![Box::new(circle), Box::new(square)];
    shapes.append(&mut rest);
    Ok(shapes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let args = Args::try_parse_from(["point-sketch", "out.json", "--epsilon", "0.01"]).unwrap();
        assert_eq!(args.output, Some(PathBuf::from("out.json")));
        assert_eq!(args.epsilon, Some(0.01));
        assert!(!args.save_settings);

        let args = Args::try_parse_from(["point-sketch", "--save-settings"]).unwrap();
        assert_eq!(args.output, None);
        assert!(args.save_settings);
    }

    #[test]
    fn test_build_scene() {
        let mut settings = ShapeSettings::default();
        settings.set_epsilon(0.02);
        let shapes = build_scene(&settings).unwrap();

        assert_eq!(shapes.len(), 8);
        for shape in &shapes {
            assert!(shape.point_count() > 0, "{} is empty", shape.name());
            assert_eq!(shape.points().len(), shape.colors().len());
        }
    }
}
