//! Circles and circular arcs
//!
//! Arcs are sampled at constant arc length rather than constant angle:
//! the angular step is `epsilon / radius`, so a circle of radius 10 gets
//! ten times the points of a circle of radius 1 and both look equally dense.

use std::f32::consts::TAU;

use serde::{Deserialize, Serialize};

use super::error::{check_positive, ShapeError};
use super::traits::Shape;
use crate::cloud::{CloudConfig, PointCloud};
use crate::color::Color;
use crate::sampling;

/// Options for arcs and circles
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleConfig {
    #[serde(flatten)]
    pub cloud: CloudConfig,
    pub radius: f32,
    /// Angle of the first point, in radians from +X
    pub start_angle: f32,
}

impl Default for CircleConfig {
    fn default() -> Self {
        Self {
            cloud: CloudConfig::default(),
            radius: 1.0,
            start_angle: 0.0,
        }
    }
}

/// An arc of a circle centered at the origin in the XY plane
///
/// The arc runs from `start_angle` through a signed `angle`: positive is
/// counter-clockwise.
#[derive(Clone, Debug)]
pub struct PartialCircle {
    angle: f32,
    radius: f32,
    start_angle: f32,
    cloud: PointCloud,
}

impl PartialCircle {
    pub fn new(angle: f32, config: &CircleConfig) -> Self {
        Self::with_default_color(angle, config, Color::WHITE)
    }

    fn with_default_color(angle: f32, config: &CircleConfig, default_color: Color) -> Self {
        Self {
            angle,
            radius: config.radius,
            start_angle: config.start_angle,
            cloud: PointCloud::new(&config.cloud, default_color),
        }
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn start_angle(&self) -> f32 {
        self.start_angle
    }
}

impl Shape for PartialCircle {
    fn name(&self) -> &str {
        "PartialCircle"
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

        self.cloud.clear();
        let points = sampling::arc(self.radius, self.start_angle, self.angle, self.cloud.epsilon());
        self.cloud.append_points(points, None);

        log::debug!("Generated {} points for {}", self.cloud.point_count(), self.name());
        Ok(())
    }
}

/// A full circle centered at the origin
///
/// Circles are red unless the config picks a color.
#[derive(Clone, Debug)]
pub struct Circle {
    arc: PartialCircle,
}

impl Circle {
    pub fn new(config: &CircleConfig) -> Self {
        Self {
            arc: PartialCircle::with_default_color(TAU, config, Color::RED),
        }
    }

    pub fn radius(&self) -> f32 {
        self.arc.radius()
    }
}

impl Shape for Circle {
    fn name(&self) -> &str {
        "Circle"
    }

    fn cloud(&self) -> &PointCloud {
        self.arc.cloud()
    }

    fn cloud_mut(&mut self) -> &mut PointCloud {
        self.arc.cloud_mut()
    }

    fn generate_points(&mut self) -> Result<(), ShapeError> {
        self.arc.generate_points()
    }
}
