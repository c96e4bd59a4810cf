//! Arrows - lines with a two-stroke tip at the end

use std::f32::consts::FRAC_PI_4;

use nalgebra::{Unit, Vector3};
use serde::{Deserialize, Serialize};

use super::error::{check_positive, ShapeError};
use super::line::{Endpoint, Line, LineConfig};
use super::traits::Shape;
use crate::cloud::PointCloud;
use crate::sampling::{arange, interpolate, rotate_vector};

/// Options for arrows
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrowConfig {
    #[serde(flatten)]
    pub line: LineConfig,
    /// Length of each tip stroke
    pub tip_length: f32,
}

impl Default for ArrowConfig {
    fn default() -> Self {
        Self {
            line: LineConfig::default(),
            tip_length: 0.25,
        }
    }
}

/// Bookkeeping for the trailing tip points
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TipState {
    /// Number of trailing points that belong to the tip
    pub point_count: usize,
    /// Whether the tip is currently in the cloud
    pub present: bool,
}

/// A line with an arrowhead at its end
///
/// The head is two strokes of `tip_length`, each rotated 45° off the
/// shaft on either side, radiating back from the end point.
#[derive(Clone, Debug)]
pub struct Arrow {
    line: Line,
    tip_length: f32,
    tip: TipState,
}

impl Arrow {
    pub fn new<'a>(
        start: impl Into<Endpoint<'a>>,
        end: impl Into<Endpoint<'a>>,
        config: &ArrowConfig,
    ) -> Self {
        Self {
            line: Line::new(start, end, &config.line),
            tip_length: config.tip_length,
            tip: TipState::default(),
        }
    }

    /// The shaft
    pub fn line(&self) -> &Line {
        &self.line
    }

    pub fn tip_length(&self) -> f32 {
        self.tip_length
    }

    pub fn tip(&self) -> TipState {
        self.tip
    }

    pub fn has_tip(&self) -> bool {
        self.tip.present
    }

    /// Append the tip strokes
    ///
    /// Does nothing if the tip is already present. Fails with `ZeroLength`
    /// when the shaft has no direction to point the tip along.
    pub fn add_tip(&mut self) -> Result<(), ShapeError> {
        if self.tip.present {
            return Ok(());
        }
        check_positive("tip_length", self.tip_length)?;

        let start = self.line.start();
        let end = self.line.end();
        let back = start - end;
        let norm = back.norm();
        if norm == 0.0 {
            return Err(ShapeError::ZeroLength);
        }
        let back = back * (self.tip_length / norm);

        let axes = [
            Unit::new_unchecked(Vector3::new(0.0, 0.0, -1.0)),
            Vector3::z_axis(),
        ];
        let strokes = axes.map(|axis| end + rotate_vector(&back, FRAC_PI_4, &axis));

        let cloud = self.line.cloud_mut();
        let before = cloud.point_count();
        let step = self.tip_length * cloud.epsilon();
        let points: Vec<_> = arange(0.0, 1.0, step)
            .flat_map(|t| strokes.iter().map(move |tip| interpolate(&end, tip, t)))
            .collect();
        cloud.append_points(points, None);

        self.tip = TipState {
            point_count: cloud.point_count() - before,
            present: true,
        };
        Ok(())
    }

    /// Strip the tip strokes added by `add_tip`
    ///
    /// Does nothing if no tip is present.
    pub fn remove_tip(&mut self) {
        if !self.tip.present {
            return;
        }
        let cloud = self.line.cloud_mut();
        let keep = cloud.point_count().saturating_sub(self.tip.point_count);
        cloud.truncate(keep);
        self.tip = TipState::default();
    }
}

impl Shape for Arrow {
    fn name(&self) -> &str {
        "Arrow"
    }

    fn cloud(&self) -> &PointCloud {
        self.line.cloud()
    }

    fn cloud_mut(&mut self) -> &mut PointCloud {
        self.line.cloud_mut()
    }

    fn generate_points(&mut self) -> Result<(), ShapeError> {
        self.tip = TipState::default();
        self.line.generate_points()?;
        self.add_tip()?;
        log::debug!(
            "Generated {} points for {} ({} in tip)",
            self.point_count(),
            self.name(),
            self.tip.point_count
        );
        Ok(())
    }
}
