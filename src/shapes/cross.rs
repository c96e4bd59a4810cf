//! Crosses - a plain "X" of two diagonal strokes

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

use super::error::{check_positive, ShapeError};
use super::traits::Shape;
use crate::cloud::{CloudConfig, PointCloud};
use crate::color::Color;
use crate::sampling::arange;

/// Options for crosses
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrossConfig {
    #[serde(flatten)]
    pub cloud: CloudConfig,
    /// Width (and height) of the cross
    pub radius: f32,
}

impl Default for CrossConfig {
    fn default() -> Self {
        Self {
            cloud: CloudConfig::default(),
            radius: 0.3,
        }
    }
}

/// Two diagonals spanning `radius` on each axis, centered on a point
#[derive(Clone, Debug)]
pub struct Cross {
    center_point: Point3<f32>,
    radius: f32,
    cloud: PointCloud,
}

impl Cross {
    pub fn new(center_point: Point3<f32>, config: &CrossConfig) -> Self {
        Self {
            center_point,
            radius: config.radius,
            cloud: PointCloud::new(&config.cloud, Color::YELLOW),
        }
    }

    pub fn center_point(&self) -> Point3<f32> {
        self.center_point
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Shape for Cross {
    fn name(&self) -> &str {
        "Cross"
    }

    fn cloud(&self) -> &PointCloud {
        &self.cloud
    }

    fn cloud_mut(&mut self) -> &mut PointCloud {
        &mut self.cloud
    }

    fn generate_points(&mut self) -> Result<(), ShapeError> {
        check_positive("epsilon", self.cloud.epsilon())?;
        check_positive("radius", self.radius)?;

        let half = self.radius / 2.0;
        let points: Vec<_> = arange(-half, half, self.cloud.epsilon())
            .flat_map(|x| [Point3::new(-x, x, 0.0), Point3::new(x, x, 0.0)])
            .collect();

        self.cloud.clear();
        self.cloud.append_points(points, None);
        self.cloud.shift(&self.center_point.coords);
        log::debug!("Generated {} points for {}", self.cloud.point_count(), self.name());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cross_diagonals() {
        let center = Point3::new(1.0, 2.0, 0.0);
        let mut cross = Cross::new(center, &CrossConfig::default());
        cross.generate_points().unwrap();

        // 0.3 / 0.005 steps, two points per step
        assert_eq!(cross.point_count(), 120);
        assert_eq!(cross.points().len(), cross.colors().len());
        assert!(cross.colors().iter().all(|c| *c == Color::YELLOW));

        for p in cross.points() {
            let d = p - center;
            assert!((d.x.abs() - d.y.abs()).abs() < 0.0001);
            assert!(d.x.abs() <= 0.15 + 0.0001);
        }
    }

    #[test]
    fn test_cross_has_both_strokes() {
        let mut cross = Cross::new(Point3::origin(), &CrossConfig::default());
        cross.generate_points().unwrap();

        assert!(cross.points().iter().any(|p| p.x > 0.1 && p.y > 0.1));
        assert!(cross.points().iter().any(|p| p.x < -0.1 && p.y > 0.1));
    }
}
