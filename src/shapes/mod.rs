//! Shapes module - parametric shapes sampled into point clouds
//!
//! This module provides:
//! - `Shape` trait for abstracting over different shape types
//! - Line shapes: Line, Arrow, CurvedLine
//! - Closed shapes: PartialCircle, Circle, Polygon, Rectangle, Square
//! - Marks: Dot, Cross

mod arrow;
mod circle;
mod cross;
mod curved;
mod dot;
mod error;
mod line;
mod polygon;
mod rectangle;
mod traits;

pub use arrow::{Arrow, ArrowConfig, TipState};
pub use circle::{Circle, CircleConfig, PartialCircle};
pub use cross::{Cross, CrossConfig};
pub use curved::CurvedLine;
pub use dot::{Dot, DotConfig};
pub use error::ShapeError;
pub use line::{resolve_endpoints, Endpoint, Line, LineConfig};
pub use polygon::{Polygon, PolygonConfig};
pub use rectangle::{Rectangle, RectangleConfig, Square, SquareConfig};
pub use traits::{BoxedShape, Shape};

