//! Shape trait definition
//!
//! The `Shape` trait is the core abstraction for sampled shapes.
//! A shape captures its geometric parameters when it is constructed and
//! turns them into a point cloud in a single `generate_points` pass.
//!
//! ```rust
//! use point_sketch::shapes::{Circle, CircleConfig, Shape};
//!
//! let mut circle = Circle::new(&CircleConfig::default());
//! circle.generate_points().unwrap();
//! assert_eq!(circle.points().len(), circle.colors().len());
//! ```

use nalgebra::{Point3, Vector3};

use super::error::ShapeError;
use crate::cloud::PointCloud;
use crate::color::Color;

/// A shape that can be sampled into a point cloud
///
/// ## Lifecycle
///
/// 1. Construction captures the geometry (radius, endpoints, vertices, ...).
/// 2. `generate_points` clears the cloud and samples it from scratch.
///
/// The geometry never changes after construction, so a shape with different
/// parameters is a new shape.
///
/// ## Thread Safety
///
/// Shapes own their buffers outright and never borrow from each other after
/// construction, so they are `Send + Sync`.
pub trait Shape: Send + Sync {
    /// Get the name of this shape
    fn name(&self) -> &str;

    /// The generated point cloud
    fn cloud(&self) -> &PointCloud;

    /// Mutable access to the generated point cloud
    fn cloud_mut(&mut self) -> &mut PointCloud;

    /// Sample the shape, replacing any previously generated points
    fn generate_points(&mut self) -> Result<(), ShapeError>;

    /// Generated positions
    fn points(&self) -> &[Point3<f32>] {
        self.cloud().positions()
    }

    /// Generated colors, index-aligned with `points`
    fn colors(&self) -> &[Color] {
        self.cloud().colors()
    }

    fn point_count(&self) -> usize {
        self.cloud().point_count()
    }

    /// Center of the bounding box of the generated points
    fn center(&self) -> Point3<f32> {
        self.cloud().center()
    }

    /// Bounding-box edge point along the dominant axis of `direction`
    fn edge_center(&self, direction: &Vector3<f32>) -> Point3<f32> {
        self.cloud().edge_center(direction)
    }

    /// Generated point furthest along `direction`
    fn boundary_point(&self, direction: &Vector3<f32>) -> Point3<f32> {
        self.cloud().boundary_point(direction)
    }

    /// Translate every generated point
    fn shift(&mut self, offset: &Vector3<f32>) {
        self.cloud_mut().shift(offset);
    }
}

/// A boxed shape for dynamic dispatch
///
/// ```rust
/// use point_sketch::shapes::{BoxedShape, Circle, CircleConfig, Dot, DotConfig};
/// use nalgebra::Point3;
///
/// let shapes: Vec<BoxedShape> = vec![
///     Box::new(Circle::new(&CircleConfig::default())),
///     Box::new(Dot::new(Point3::origin(), &DotConfig::default())),
/// ];
/// assert_eq!(shapes.len(), 2);
/// ```
pub type BoxedShape = Box<dyn Shape>;
