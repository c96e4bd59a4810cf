//! Straight lines between anchored endpoints
//!
//! An endpoint is either a raw coordinate or another shape. Shape endpoints
//! are resolved once, at construction, to the edge of that shape facing the
//! other endpoint, so a line drawn between two shapes touches their
//! boundaries instead of running through their centers.

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::error::{check_positive, ShapeError};
use super::traits::Shape;
use crate::cloud::{CloudConfig, PointCloud};
use crate::color::Color;
use crate::sampling::DEFAULT_MIN_DENSITY;

/// One end of a line
#[derive(Clone, Copy)]
pub enum Endpoint<'a> {
    /// A fixed coordinate
    Point(Point3<f32>),
    /// The edge of a shape facing the other endpoint
    Shape(&'a dyn Shape),
    /// The edge of a shape along an explicit direction
    Edge(&'a dyn Shape, Vector3<f32>),
}

impl Endpoint<'_> {
    /// Where the endpoint sits before boundary resolution
    fn preliminary(&self) -> Point3<f32> {
        match self {
            Endpoint::Point(p) => *p,
            Endpoint::Shape(shape) | Endpoint::Edge(shape, _) => shape.center(),
        }
    }

    /// Concrete coordinate, facing `toward` for `Shape` endpoints
    fn resolve(&self, toward: &Vector3<f32>) -> Point3<f32> {
        match self {
            Endpoint::Point(p) => *p,
            Endpoint::Shape(shape) => shape.edge_center(toward),
            Endpoint::Edge(shape, direction) => shape.edge_center(direction),
        }
    }

    /// Concrete coordinate for a control point: a shape's center or its edge
    pub(crate) fn anchor(&self) -> Point3<f32> {
        match self {
            Endpoint::Point(p) => *p,
            Endpoint::Shape(shape) => shape.center(),
            Endpoint::Edge(shape, direction) => shape.edge_center(direction),
        }
    }
}

impl From<Point3<f32>> for Endpoint<'_> {
    fn from(p: Point3<f32>) -> Self {
        Endpoint::Point(p)
    }
}

impl From<[f32; 3]> for Endpoint<'_> {
    fn from(p: [f32; 3]) -> Self {
        Endpoint::Point(Point3::from(p))
    }
}

impl<'a, S: Shape> From<&'a S> for Endpoint<'a> {
    fn from(shape: &'a S) -> Self {
        Endpoint::Shape(shape)
    }
}

/// Resolve both ends of a line into coordinates
///
/// The start faces along `end - start` and the end faces back along
/// `start - end`, where both are measured between preliminary positions
/// (shape centers or raw points).
pub fn resolve_endpoints(start: &Endpoint<'_>, end: &Endpoint<'_>) -> (Point3<f32>, Point3<f32>) {
    let start_to_end = end.preliminary() - start.preliminary();
    (start.resolve(&start_to_end), end.resolve(&-start_to_end))
}

/// Options for lines and everything built on them
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineConfig {
    #[serde(flatten)]
    pub cloud: CloudConfig,
    /// Largest allowed step in the segment parameter
    pub min_density: f32,
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            cloud: CloudConfig::default(),
            min_density: DEFAULT_MIN_DENSITY,
        }
    }
}

/// A straight line segment
#[derive(Clone, Debug)]
pub struct Line {
    start: Point3<f32>,
    end: Point3<f32>,
    min_density: f32,
    cloud: PointCloud,
}

impl Line {
    /// Create a line, resolving shape endpoints to their facing edges
    pub fn new<'a>(
        start: impl Into<Endpoint<'a>>,
        end: impl Into<Endpoint<'a>>,
        config: &LineConfig,
    ) -> Self {
        let (start, end) = resolve_endpoints(&start.into(), &end.into());
        Self::between(start, end, config)
    }

    /// Create a line between two fixed points
    pub fn between(start: Point3<f32>, end: Point3<f32>, config: &LineConfig) -> Self {
        Self {
            start,
            end,
            min_density: config.min_density,
            cloud: PointCloud::new(&config.cloud, Color::WHITE),
        }
    }

    pub fn start(&self) -> Point3<f32> {
        self.start
    }

    pub fn end(&self) -> Point3<f32> {
        self.end
    }

    pub fn min_density(&self) -> f32 {
        self.min_density
    }

    /// Euclidean distance between the endpoints
    pub fn length(&self) -> f32 {
        (self.end - self.start).norm()
    }

    /// Rise over run in the XY plane
    ///
    /// Fails with `UndefinedSlope` for vertical (and zero-length) lines.
    pub fn slope(&self) -> Result<f32, ShapeError> {
        let rise = self.end.y - self.start.y;
        let run = self.end.x - self.start.x;
        if run == 0.0 {
            return Err(ShapeError::UndefinedSlope);
        }
        Ok(rise / run)
    }
}

impl Shape for Line {
    fn name(&self) -> &str {
        "Line"
    }

    fn cloud(&self) -> &PointCloud {
        &self.cloud
    }

    fn cloud_mut(&mut self) -> &mut PointCloud {
        &mut self.cloud
    }

    fn generate_points(&mut self) -> Result<(), ShapeError> {
        check_positive("epsilon", self.cloud.epsilon())?;
        self.cloud.clear();
        self.cloud
            .append_segment(&self.start, &self.end, self.min_density, None);
        log::debug!("Generated {} points for {}", self.cloud.point_count(), self.name());
        Ok(())
    }
}
