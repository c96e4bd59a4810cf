//! Point cloud container
//!
//! A `PointCloud` is an ordered list of positions with a parallel list of
//! colors. Shapes own one each and only ever grow it by appending or shrink
//! it by truncating, so the two lists stay index-aligned.

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::sampling;

/// Default 1D point density (points per unit length)
pub const DEFAULT_DENSITY: f32 = 200.0;

/// Options shared by every shape
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudConfig {
    /// Target arc-length spacing between consecutive points
    pub epsilon: f32,
    /// Color given to points appended without an explicit color
    ///
    /// Unset means the shape's own default color.
    pub color: Option<Color>,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            epsilon: 1.0 / DEFAULT_DENSITY,
            color: None,
        }
    }
}

/// Ordered positions plus index-aligned colors
#[derive(Clone, Debug)]
pub struct PointCloud {
    positions: Vec<Point3<f32>>,
    colors: Vec<Color>,
    /// Target arc-length spacing
    epsilon: f32,
    /// Color used when none is given
    color: Color,
}

impl PointCloud {
    /// Create an empty cloud, coloring it `default_color` unless the
    /// config picks a color
    pub fn new(config: &CloudConfig, default_color: Color) -> Self {
        Self {
            positions: Vec::new(),
            colors: Vec::new(),
            epsilon: config.epsilon,
            color: config.color.unwrap_or(default_color),
        }
    }

    pub fn epsilon(&self) -> f32 {
        self.epsilon
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn positions(&self) -> &[Point3<f32>] {
        &self.positions
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn point_count(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Append positions, all with `color` or the cloud's default color
    pub fn append_points<I>(&mut self, positions: I, color: Option<Color>)
    where
        I: IntoIterator<Item = Point3<f32>>,
    {
        let color = color.unwrap_or(self.color);
        self.positions.extend(positions);
        self.colors.resize(self.positions.len(), color);
    }

    /// Sample the segment `p0 -> p1` at this cloud's density and append it
    pub fn append_segment(
        &mut self,
        p0: &Point3<f32>,
        p1: &Point3<f32>,
        min_density: f32,
        color: Option<Color>,
    ) {
        let points = sampling::segment(p0, p1, self.epsilon, min_density);
        self.append_points(points, color);
    }

    /// Keep only the first `n` points (and colors)
    pub fn truncate(&mut self, n: usize) {
        self.positions.truncate(n);
        self.colors.truncate(n);
    }

    /// Drop every point
    pub fn clear(&mut self) {
        self.positions.clear();
        self.colors.clear();
    }

    /// Translate every point by `offset`
    pub fn shift(&mut self, offset: &Vector3<f32>) {
        for p in &mut self.positions {
            *p += offset;
        }
    }

    /// Axis-aligned bounds as (min, max), or `None` when empty
    pub fn bounds(&self) -> Option<(Point3<f32>, Point3<f32>)> {
        let first = self.positions.first()?;
        let mut min = *first;
        let mut max = *first;
        for p in &self.positions[1..] {
            min = min.inf(p);
            max = max.sup(p);
        }
        Some((min, max))
    }

    /// Center of the bounding box (the origin for an empty cloud)
    pub fn center(&self) -> Point3<f32> {
        match self.bounds() {
            Some((min, max)) => nalgebra::center(&min, &max),
            None => Point3::origin(),
        }
    }

    /// The point of the bounding box reached from the center along the
    /// dominant axis of `direction`
    ///
    /// Only the axis with the largest absolute component counts: the result
    /// is the center with that coordinate moved to the min or max extent.
    /// A zero direction gives the center.
    pub fn edge_center(&self, direction: &Vector3<f32>) -> Point3<f32> {
        let mut result = self.center();
        let Some((min, max)) = self.bounds() else {
            return result;
        };
        let dim = direction.iamax();
        if direction[dim] > 0.0 {
            result[dim] = max[dim];
        } else if direction[dim] < 0.0 {
            result[dim] = min[dim];
        }
        result
    }

    /// The point furthest along `direction`
    ///
    /// Ties keep the earliest point. Empty clouds give the origin.
    pub fn boundary_point(&self, direction: &Vector3<f32>) -> Point3<f32> {
        let mut best: Option<(f32, &Point3<f32>)> = None;
        for p in &self.positions {
            let d = p.coords.dot(direction);
            if best.map_or(true, |(b, _)| d > b) {
                best = Some((d, p));
            }
        }
        best.map_or_else(Point3::origin, |(_, p)| *p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_cloud() -> PointCloud {
        let mut cloud = PointCloud::new(&CloudConfig::default(), Color::WHITE);
        cloud.append_points(
            vec![
                Point3::new(-1.0, -1.0, 0.0),
                Point3::new(1.0, -1.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
                Point3::new(-1.0, 1.0, 0.0),
            ],
            None,
        );
        cloud.shift(&Vector3::new(2.0, 0.0, 0.0));
        cloud
    }

    #[test]
    fn test_append_keeps_colors_aligned() {
        let mut cloud = PointCloud::new(&CloudConfig::default(), Color::RED);
        cloud.append_points(vec![Point3::origin(); 3], None);
        cloud.append_points(vec![Point3::origin(); 2], Some(Color::BLUE));

        assert_eq!(cloud.point_count(), 5);
        assert_eq!(cloud.colors().len(), 5);
        assert_eq!(cloud.colors()[0], Color::RED);
        assert_eq!(cloud.colors()[4], Color::BLUE);
    }

    #[test]
    fn test_truncate() {
        let mut cloud = square_cloud();
        cloud.truncate(1);
        assert_eq!(cloud.positions().len(), 1);
        assert_eq!(cloud.colors().len(), 1);

        // Truncating past the end is harmless
        cloud.truncate(10);
        assert_eq!(cloud.point_count(), 1);
    }

    #[test]
    fn test_center_and_edges() {
        let cloud = square_cloud();
        assert_eq!(cloud.center(), Point3::new(2.0, 0.0, 0.0));

        let right = cloud.edge_center(&Vector3::new(1.0, 0.2, 0.0));
        assert_eq!(right, Point3::new(3.0, 0.0, 0.0));

        let bottom = cloud.edge_center(&Vector3::new(0.5, -2.0, 0.0));
        assert_eq!(bottom, Point3::new(2.0, -1.0, 0.0));

        assert_eq!(cloud.edge_center(&Vector3::zeros()), cloud.center());
    }

    #[test]
    fn test_boundary_point() {
        let cloud = square_cloud();
        let p = cloud.boundary_point(&Vector3::new(1.0, 1.0, 0.0));
        assert_eq!(p, Point3::new(3.0, 1.0, 0.0));
    }

    #[test]
    fn test_empty_cloud_queries() {
        let cloud = PointCloud::new(&CloudConfig::default(), Color::WHITE);
        assert!(cloud.bounds().is_none());
        assert_eq!(cloud.center(), Point3::origin());
        assert_eq!(cloud.boundary_point(&Vector3::x()), Point3::origin());
    }
}
