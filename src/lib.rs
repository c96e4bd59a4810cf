//! point-sketch - density-aware point clouds for stroke-rendered shapes
//!
//! Shapes (lines, arrows, curves, arcs, polygons, rectangles, dots, crosses)
//! are sampled into ordered positions with index-aligned colors. Sampling is
//! driven by a target arc-length spacing (`epsilon`), so a tiny dot and a
//! large circle come out equally dense.
//!
//! ```rust
//! use point_sketch::shapes::{Arrow, ArrowConfig, Shape};
//! use nalgebra::Point3;
//!
//! let start: Point3<f32> = Point3::new(0.0, 0.0, 0.0);
//! let end: Point3<f32> = Point3::new(1.0, 0.0, 0.0);
//! let mut arrow = Arrow::new(start, end, &ArrowConfig::default());
//! arrow.generate_points().unwrap();
//! assert!(arrow.has_tip());
//! ```

pub mod cloud;
pub mod color;
pub mod sampling;
pub mod settings;
pub mod shapes;
