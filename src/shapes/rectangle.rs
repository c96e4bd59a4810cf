//! Axis-aligned rectangles and squares centered at the origin

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

use super::error::{check_positive, ShapeError};
use super::traits::Shape;
use crate::cloud::{CloudConfig, PointCloud};
use crate::color::Color;
use crate::sampling::arange;

/// Options for rectangles
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RectangleConfig {
    #[serde(flatten)]
    pub cloud: CloudConfig,
    pub height: f32,
    pub width: f32,
}

impl Default for RectangleConfig {
    fn default() -> Self {
        Self {
            cloud: CloudConfig::default(),
            height: 2.0,
            width: 4.0,
        }
    }
}

/// Options for squares
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SquareConfig {
    #[serde(flatten)]
    pub cloud: CloudConfig,
    pub side_length: f32,
}

impl Default for SquareConfig {
    fn default() -> Self {
        Self {
            cloud: CloudConfig::default(),
            side_length: 2.0,
        }
    }
}

/// A rectangle outline centered at the origin
///
/// All four edges are walked in one pass: the horizontal pair (top, then
/// bottom) and then the vertical pair (right, then left), each stepping
/// from the negative end toward the positive end at epsilon spacing.
#[derive(Clone, Debug)]
pub struct Rectangle {
    width: f32,
    height: f32,
    cloud: PointCloud,
}

impl Rectangle {
    pub fn new(config: &RectangleConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            cloud: PointCloud::new(&config.cloud, Color::YELLOW),
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}

impl Shape for Rectangle {
    fn name(&self) -> &str {
        "Rectangle"
    }

    fn cloud(&self) -> &PointCloud {
        &self.cloud
    }

    fn cloud_mut(&mut self) -> &mut PointCloud {
        &mut self.cloud
    }

    fn generate_points(&mut self) -> Result<(), ShapeError> {
        let epsilon = self.cloud.epsilon();
        check_positive("epsilon", epsilon)?;
        check_positive("width", self.width)?;
        check_positive("height", self.height)?;

        let half = [self.width / 2.0, self.height / 2.0];
        let mut points = Vec::new();
        for dim in 0..2 {
            let other = half[1 - dim];
            for u in [other, -other] {
                for x in arange(-half[dim], half[dim], epsilon) {
                    points.push(if dim == 0 {
                        Point3::new(x, u, 0.0)
                    } else {
                        Point3::new(u, x, 0.0)
                    });
                }
            }
        }

        self.cloud.clear();
        self.cloud.append_points(points, None);
        log::debug!("Generated {} points for {}", self.cloud.point_count(), self.name());
        Ok(())
    }
}

/// A square outline centered at the origin
#[derive(Clone, Debug)]
pub struct Square {
    rect: Rectangle,
}

impl Square {
    pub fn new(config: &SquareConfig) -> Self {
        Self {
            rect: Rectangle::new(&RectangleConfig {
                cloud: config.cloud.clone(),
                height: config.side_length,
                width: config.side_length,
            }),
        }
    }

    pub fn side_length(&self) -> f32 {
        self.rect.width()
    }
}

impl Shape for Square {
    fn name(&self) -> &str {
        "Square"
    }

    fn cloud(&self) -> &PointCloud {
        self.rect.cloud()
    }

    fn cloud_mut(&mut self) -> &mut PointCloud {
        self.rect.cloud_mut()
    }

    fn generate_points(&mut self) -> Result<(), ShapeError> {
        self.rect.generate_points()
    }
}
