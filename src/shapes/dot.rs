//! Filled dots

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

use super::error::{check_positive, ShapeError};
use super::traits::Shape;
use crate::cloud::{CloudConfig, PointCloud};
use crate::color::Color;
use crate::sampling;

/// Options for dots
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DotConfig {
    #[serde(flatten)]
    pub cloud: CloudConfig,
    pub radius: f32,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            cloud: CloudConfig::default(),
            radius: 0.05,
        }
    }
}

/// A filled disc made of concentric rings
///
/// Rings are spaced epsilon apart and sampled so that each ring's point
/// count grows with its circumference, keeping the fill evenly dense.
/// A dot no wider than epsilon has no rings and generates no points.
#[derive(Clone, Debug)]
pub struct Dot {
    center_point: Point3<f32>,
    radius: f32,
    cloud: PointCloud,
}

impl Dot {
    pub fn new(center_point: Point3<f32>, config: &DotConfig) -> Self {
        Self {
            center_point,
            radius: config.radius,
            cloud: PointCloud::new(&config.cloud, Color::WHITE),
        }
    }

    pub fn center_point(&self) -> Point3<f32> {
        self.center_point
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Shape for Dot {
    fn name(&self) -> &str {
        "Dot"
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

        let offset = self.center_point.coords;
        let points = sampling::disc(self.radius, self.cloud.epsilon())
            .into_iter()
            .map(|p| p + offset);

        self.cloud.clear();
        self.cloud.append_points(points, None);
        log::debug!("Generated {} points for {}", self.cloud.point_count(), self.name());
        Ok(())
    }
}
